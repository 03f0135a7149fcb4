//! # vitnode-home
//!
//! Leptos SSR renderer for the VitNode landing page.
//!
//! The page is assembled from interchangeable section components:
//!
//! - a hero header whose arrangement is picked by [`HeaderLayout`],
//! - a hover-animated preview video ([`motion`] describes its state machine),
//! - optional catalog sections listed in [`PageConfig::sections`].
//!
//! Layout and sections are resolved once, when the static page is rendered.
//! The shipped HTML contains exactly one header layout and only the active
//! sections.
//!
//! ## Quick Start
//!
//! ```rust
//! use vitnode_home::{render_page, HeaderLayout, PageConfig, SectionId};
//!
//! let config = PageConfig {
//!     header_layout: HeaderLayout::StackedCentered,
//!     sections: vec![SectionId::Preview, SectionId::Features],
//!     ..Default::default()
//! };
//!
//! let html = render_page(&config).unwrap();
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! ## Architecture
//!
//! - [`config`] - page configuration, layouts, section catalog
//! - [`motion`] - hover state machine and retargetable scale tween
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants
//!
//! Rendering uses Leptos 0.8's `RenderHtml` trait; no hydration is needed
//! for the static page.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod config;
pub mod motion;
pub mod styles;

pub use config::{parse_section_list, ConfigError, HeaderLayout, PageConfig, SectionId};

use components::HomeDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use tracing::debug;

/// Render a complete HTML landing page.
///
/// Validates the configuration first: a section listed twice is rejected
/// before anything is rendered.
///
/// # Example
///
/// ```rust
/// use vitnode_home::{render_page, PageConfig};
///
/// let html = render_page(&PageConfig::default()).unwrap();
/// assert!(html.contains("data-section=\"header\""));
/// assert!(html.contains("data-section=\"features\""));
/// ```
pub fn render_page(config: &PageConfig) -> Result<String, ConfigError> {
    config.validate()?;
    debug!(
        layout = %config.header_layout,
        sections = ?config.sections,
        "rendering landing page"
    );

    let config = config.clone();
    let html = render_fragment(move || view! { <HomeDocument config=config /> });

    // Leptos doesn't include DOCTYPE, so we add it
    Ok(format!("<!DOCTYPE html>\n{}", html))
}

/// Render any view to an HTML string inside a fresh reactive owner.
///
/// Components with local state (e.g. [`components::PreviewMedia`]) create
/// signals, which need an owner to live in.
pub fn render_fragment<F, V>(view: F) -> String
where
    F: FnOnce() -> V,
    V: RenderHtml,
{
    let owner = Owner::new();
    owner.with(|| view().to_html())
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::section_order;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_default_page() {
        let html = render_page(&PageConfig::default()).expect("render");

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("VitNode</title>"));
        assert_eq!(section_order(&html), vec!["header", "features"]);
    }

    #[test]
    fn header_rendered_once_and_first_for_every_layout() {
        for layout in HeaderLayout::ALL {
            let config = PageConfig {
                header_layout: layout,
                sections: SectionId::CATALOG.to_vec(),
                ..PageConfig::default()
            };
            let html = render_page(&config).expect("render");
            let order = section_order(&html);

            assert_eq!(order.first().map(String::as_str), Some("header"));
            assert_eq!(order.iter().filter(|id| *id == "header").count(), 1);
            assert_eq!(html.matches("data-layout=").count(), 1);
            assert!(html.contains(&format!("data-layout=\"{layout}\"")));
        }
    }

    #[test]
    fn rejects_duplicate_sections() {
        let config = PageConfig {
            sections: vec![SectionId::Tabs, SectionId::Tabs],
            ..PageConfig::default()
        };
        assert!(matches!(
            render_page(&config),
            Err(ConfigError::DuplicateSection(SectionId::Tabs))
        ));
    }

    #[test]
    fn embeds_stylesheet_and_motion_rule() {
        let html = render_page(&PageConfig::default()).expect("render");
        assert!(html.contains(".preview-media:hover"));
        assert!(html.contains("Content-Security-Policy"));
    }

    #[test]
    fn custom_title() {
        let config = PageConfig {
            title: "My Community".into(),
            ..PageConfig::default()
        };
        let html = render_page(&config).expect("render");
        assert!(html.contains("My Community</title>"));
    }
}
