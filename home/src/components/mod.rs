//! Leptos components that make up the landing page.
//!
//! # Component Hierarchy
//!
//! ```text
//! HomeDocument
//! └── PageComposer
//!     ├── HeaderSection (always, first)
//!     │   ├── BackgroundDecoration
//!     │   ├── Icon (check, star)
//!     │   └── PreviewMedia (hover motion)
//!     └── active catalog sections, in configured order
//!         ├── PreviewSection
//!         ├── FeatureSections
//!         │   └── FeatureBlockView (plugins, emails)
//!         ├── PluginsSection
//!         └── TabsSection
//! ```
//!
//! # Usage
//!
//! Components are typically rendered via [`crate::render_page`], but
//! can be used directly:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use vitnode_home::components::HeaderSection;
//! use vitnode_home::HeaderLayout;
//!
//! view! { <HeaderSection layout=HeaderLayout::StackedCentered /> }
//! ```

mod background;
mod button;
mod document;
mod features;
mod header;
mod icons;
mod page;
mod preview_media;
mod sections;

pub use background::BackgroundDecoration;
pub use button::{button_class, ButtonSize, ButtonVariant};
pub use document::HomeDocument;
pub use features::{FeatureBlock, FeatureSections, FEATURE_BLOCKS};
pub use header::{
    HeaderSection, BADGE_TEXT, CTA_LABEL, HEADLINE_ACCENT, HEADLINE_LEAD, STAR_LABEL, SUBTEXT,
};
pub use icons::*;
pub use page::PageComposer;
pub use preview_media::{PreviewMedia, HERO_VIDEO_SRC, VIDEO_MIME};
pub use sections::{PluginsSection, PreviewSection, TabsSection, PREVIEW_VIDEO_SRC};
