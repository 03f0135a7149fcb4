//! Root document component - the complete HTML page.

use super::PageComposer;
use crate::config::PageConfig;
use crate::styles::{motion_css, CSP, HOME_CSS};
use leptos::prelude::*;

/// The complete HTML document for the landing page
#[component]
pub fn HomeDocument(config: PageConfig) -> impl IntoView {
    let title = config.title.clone();
    let motion = motion_css();

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                <style>{HOME_CSS}</style>
                <style>{motion}</style>
            </head>
            <body>
                <PageComposer config=config />
            </body>
        </html>
    }
}
