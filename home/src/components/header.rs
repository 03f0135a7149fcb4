//! Landing header: value proposition, call to action and preview media.
//!
//! One component serves every [`HeaderLayout`]. The layout only picks
//! classes; copy, actions and the media slot are the same in all of them.

use super::{
    button_class, BackgroundDecoration, ButtonSize, ButtonVariant, Icon, PreviewMedia,
    ICON_CHECK, ICON_STAR,
};
use crate::config::{HeaderLayout, DEFAULT_REPOSITORY_URL};
use leptos::prelude::*;

/// Badge above the headline.
pub const BADGE_TEXT: &str = "100% Free & Open-source";
/// Plain part of the headline.
pub const HEADLINE_LEAD: &str = "Explore the Possibilities of ";
/// Highlighted part of the headline.
pub const HEADLINE_ACCENT: &str = "Imagination";
/// Copy under the headline.
pub const SUBTEXT: &str = "Ship fast, build fast, scale faster with a powerful and flexible \
content management system (CMS) built with NextJS and NestJS.";
/// Label of the primary action.
pub const CTA_LABEL: &str = "Get Started";
/// Label of the repository link.
pub const STAR_LABEL: &str = "Star on GitHub";

const ACTION_EXTRA: &str = "sm:px-8 sm:h-14 sm:text-lg font-medium";

/// Hero header of the landing page.
#[component]
pub fn HeaderSection(
    /// Arrangement of text and media
    #[prop(default = HeaderLayout::SideBySide)]
    layout: HeaderLayout,
    /// Repository the star link opens
    #[prop(into, default = DEFAULT_REPOSITORY_URL.to_string())]
    repository_url: String,
) -> impl IntoView {
    let layout_name = layout.as_str();
    let header_class = format!(
        "home-header layout-{layout_name} w-full md:min-h-[50rem] relative flex items-center justify-center py-20 overflow-hidden -mt-16 bg-card"
    );
    let container_class = layout.container_class();
    let text_class = layout.text_class();
    let actions_class = layout.actions_class();
    let cta_class = button_class(ButtonVariant::Default, ButtonSize::Lg, ACTION_EXTRA);
    let star_class = button_class(ButtonVariant::Link, ButtonSize::Lg, ACTION_EXTRA);

    view! {
        <header
            class=header_class
            data-section="header"
            data-layout=layout_name
        >
            <BackgroundDecoration class="absolute" />

            <div class=container_class>
                <div class=text_class>
                    <div class="header-badge flex items-center gap-2 mb-6 bg-muted-foreground/10 py-2 px-4 rounded-md font-medium">
                        <Icon path=ICON_CHECK class="size-5" />
                        <span>{BADGE_TEXT}</span>
                    </div>

                    <h1 class="text-3xl font-bold tracking-tighter sm:text-5xl xl:text-6xl/none">
                        {HEADLINE_LEAD}
                        <span class="text-primary relative">{HEADLINE_ACCENT}</span>
                    </h1>

                    <p class="text-muted-foreground mt-6 max-w-[600px] md:text-xl">{SUBTEXT}</p>

                    <div class=actions_class>
                        <button type="button" class=cta_class>
                            {CTA_LABEL}
                        </button>
                        <a
                            href=repository_url
                            class=star_class
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            <Icon path=ICON_STAR class="size-5" />
                            {STAR_LABEL}
                        </a>
                    </div>
                </div>

                <PreviewMedia />
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render_fragment;
    use crate::test_support::{tag_names, text_content};
    use pretty_assertions::assert_eq;

    fn render(layout: HeaderLayout) -> String {
        render_fragment(move || view! { <HeaderSection layout=layout /> })
    }

    #[test]
    fn every_layout_has_one_button_and_one_safe_external_link() {
        for layout in HeaderLayout::ALL {
            let html = render(layout);
            assert_eq!(html.matches("<button").count(), 1, "{layout}: buttons");
            assert_eq!(html.matches("<a ").count(), 1, "{layout}: links");
            assert_eq!(html.matches("target=\"_blank\"").count(), 1, "{layout}: target");
            assert_eq!(
                html.matches("rel=\"noopener noreferrer\"").count(),
                1,
                "{layout}: rel"
            );
            assert!(html.contains("href=\"https://github.com/aXenDeveloper/vitnode\""));
            assert_eq!(html.matches("data-media-slot=").count(), 1, "{layout}: media");
        }
    }

    #[test]
    fn layouts_differ_only_in_layout_output() {
        let canonical = render(HeaderLayout::SideBySide);
        for layout in HeaderLayout::ALL {
            let html = render(layout);
            assert_eq!(text_content(&html), text_content(&canonical));
            assert_eq!(tag_names(&html), tag_names(&canonical));
            assert!(html.contains(&format!("data-layout=\"{}\"", layout.as_str())));
            assert!(html.contains(layout.container_class()));
        }
    }

    #[test]
    fn renders_copy() {
        let text = text_content(&render(HeaderLayout::StackedCentered));
        assert!(text.contains("Explore the Possibilities of Imagination"));
        assert!(text.contains("content management system (CMS)"));
        assert!(text.contains(CTA_LABEL));
        assert!(text.contains(STAR_LABEL));
        assert!(text.contains("Free &amp; Open-source"));
    }

    #[test]
    fn repository_url_is_configurable() {
        let html = render_fragment(|| {
            view! { <HeaderSection repository_url="https://example.com/fork" /> }
        });
        assert!(html.contains("href=\"https://example.com/fork\""));
        assert!(html.contains("data-layout=\"side-by-side\""));
    }
}
