//! Root assembly: the header, then the active catalog sections.

use super::{FeatureSections, HeaderSection, PluginsSection, PreviewSection, TabsSection};
use crate::config::{PageConfig, SectionId};
use leptos::prelude::*;

/// Landing page body.
///
/// The header renders unconditionally and first. Catalog sections follow in
/// the order of [`PageConfig::sections`]; sections missing from that list
/// are never constructed.
#[component]
pub fn PageComposer(config: PageConfig) -> impl IntoView {
    let PageConfig {
        header_layout,
        sections,
        repository_url,
        ..
    } = config;

    view! {
        <main class="home-page">
            <HeaderSection layout=header_layout repository_url=repository_url />
            {sections.into_iter().map(section_view).collect_view()}
        </main>
    }
}

fn section_view(id: SectionId) -> AnyView {
    match id {
        SectionId::Preview => view! { <PreviewSection /> }.into_any(),
        SectionId::Features => view! { <FeatureSections /> }.into_any(),
        SectionId::Plugins => view! { <PluginsSection /> }.into_any(),
        SectionId::Tabs => view! { <TabsSection /> }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render_fragment;
    use crate::test_support::section_order;
    use pretty_assertions::assert_eq;

    fn render(sections: Vec<SectionId>) -> String {
        let config = PageConfig {
            sections,
            ..PageConfig::default()
        };
        render_fragment(move || view! { <PageComposer config=config /> })
    }

    #[test]
    fn header_then_preview_only() {
        let html = render(vec![SectionId::Preview]);
        assert_eq!(section_order(&html), vec!["header", "preview"]);
        assert!(!html.contains("data-feature="));
        assert!(!html.contains("plugins-section"));
        assert!(!html.contains("tabs-section"));
    }

    #[test]
    fn header_then_features_in_block_order() {
        let html = render(vec![SectionId::Features]);
        assert_eq!(section_order(&html), vec!["header", "features"]);
        let plugins = html.find("data-feature=\"plugins\"").expect("plugins block");
        let emails = html.find("data-feature=\"emails\"").expect("emails block");
        assert!(plugins < emails);
    }

    #[test]
    fn inactive_preview_emits_no_video() {
        let html = render(vec![SectionId::Features, SectionId::Tabs]);
        assert!(!html.contains(crate::components::PREVIEW_VIDEO_SRC));
        // the header media slot is the only video on the page
        assert_eq!(html.matches("<video").count(), 1);
    }

    #[test]
    fn empty_catalog_renders_header_alone() {
        let html = render(vec![]);
        assert_eq!(section_order(&html), vec!["header"]);
    }

    #[test]
    fn catalog_order_follows_config() {
        let html = render(vec![
            SectionId::Tabs,
            SectionId::Plugins,
            SectionId::Preview,
            SectionId::Features,
        ]);
        assert_eq!(
            section_order(&html),
            vec!["header", "tabs", "plugins", "preview", "features"]
        );
        assert_eq!(html.matches("data-layout=").count(), 1);
    }
}
