//! Optional catalog sections rendered after the header.
//!
//! Each section is only constructed when it is active, so an inactive
//! preview never emits a `<video>` and never starts playback.

use super::{
    Icon, VIDEO_MIME, ICON_GLOBE, ICON_LIGHTNING, ICON_PUZZLE_PIECE, ICON_SQUARES_FOUR,
};
use leptos::prelude::*;

/// Demo video of the admin dashboard.
pub const PREVIEW_VIDEO_SRC: &str = "/videos/preview-demo.mp4";

/// Dashboard preview with its own muted demo video.
#[component]
pub fn PreviewSection() -> impl IntoView {
    view! {
        <section class="preview-section container my-20 flex flex-col items-center text-center" data-section="preview">
            <h2 class="text-2xl font-bold tracking-tight sm:text-4xl">"See it in action"</h2>
            <p class="text-muted-foreground mt-4 max-w-[600px] md:text-lg">
                "One dashboard for content, members, plugins and settings."
            </p>
            <div class="preview-frame mt-10 w-full max-w-5xl aspect-video rounded-xl overflow-hidden border shadow-xl">
                <video loop=true muted=true autoplay=true playsinline=true>
                    <source src=PREVIEW_VIDEO_SRC type=VIDEO_MIME />
                </video>
            </div>
        </section>
    }
}

/// Plugin showcase grid.
#[component]
pub fn PluginsSection() -> impl IntoView {
    view! {
        <section class="plugins-section container my-20" data-section="plugins">
            <div class="section-header text-center mb-12">
                <h2 class="text-2xl font-bold tracking-tight sm:text-4xl">"Plugins for everything"</h2>
                <p class="text-muted-foreground mt-4 md:text-lg">
                    "Start from official plugins or write your own with the same SDK."
                </p>
            </div>
            <div class="plugins-grid grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
                <PluginCard
                    icon=ICON_SQUARES_FOUR
                    title="Admin Control Panel"
                    description="Manage users, groups, permissions and plugins in one place."
                />
                <PluginCard
                    icon=ICON_GLOBE
                    title="Internationalization"
                    description="Every string and every piece of content can be translated."
                />
                <PluginCard
                    icon=ICON_PUZZLE_PIECE
                    title="Blog"
                    description="Categories, articles and comments, ready to install."
                />
            </div>
        </section>
    }
}

#[component]
fn PluginCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <article class="plugin-card rounded-xl border bg-card p-6">
            <div class="plugin-icon text-primary mb-4">
                <Icon path=icon size="28" />
            </div>
            <h3 class="text-lg font-semibold">{title}</h3>
            <p class="text-muted-foreground mt-2">{description}</p>
        </article>
    }
}

/// Tabs shown by [`TabsSection`], first one active.
const TABS: [(&str, &str, &str); 3] = [
    (
        "admin",
        "Admin Control Panel",
        "Configure the whole community without touching code.",
    ),
    (
        "i18n",
        "Internationalization",
        "Ship every page in every language your members speak.",
    ),
    (
        "performance",
        "Performance",
        "Server components and caching keep pages fast under load.",
    ),
];

/// Tabbed product tour. Switching tabs is plain CSS/JS on `data-tab`.
#[component]
pub fn TabsSection() -> impl IntoView {
    view! {
        <section class="tabs-section container my-20" data-section="tabs">
            <div class="tab-bar flex flex-wrap justify-center gap-2" role="tablist">
                {TABS
                    .into_iter()
                    .enumerate()
                    .map(|(idx, (id, label, _))| {
                        let class = if idx == 0 { "tab active" } else { "tab" };
                        let selected = if idx == 0 { "true" } else { "false" };
                        view! {
                            <button type="button" class=class role="tab" aria-selected=selected data-tab=id>
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            {TABS
                .into_iter()
                .enumerate()
                .map(|(idx, (id, label, body))| {
                    let class = if idx == 0 { "tab-content active" } else { "tab-content" };
                    let icon = if idx == 2 { ICON_LIGHTNING } else { ICON_SQUARES_FOUR };
                    view! {
                        <div class=class role="tabpanel" data-tab-panel=id>
                            <Icon path=icon size="24" class="text-primary" />
                            <h3 class="text-xl font-semibold mt-4">{label}</h3>
                            <p class="text-muted-foreground mt-2">{body}</p>
                        </div>
                    }
                })
                .collect_view()}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render_fragment;

    #[test]
    fn preview_section_plays_its_own_video() {
        let html = render_fragment(|| view! { <PreviewSection /> });
        assert!(html.contains("data-section=\"preview\""));
        assert!(html.contains(PREVIEW_VIDEO_SRC));
        assert_eq!(html.matches("<video").count(), 1);
    }

    #[test]
    fn tabs_section_activates_first_tab() {
        let html = render_fragment(|| view! { <TabsSection /> });
        assert_eq!(html.matches("data-tab=").count(), TABS.len());
        assert_eq!(html.matches("data-tab-panel=").count(), TABS.len());
        let admin_tag = html
            .split('<')
            .find(|tag| tag.contains("data-tab-panel=\"admin\""))
            .expect("admin panel");
        assert!(admin_tag.contains("class=\"tab-content active\""), "{admin_tag}");
        assert_eq!(html.matches("tab-content active").count(), 1);
    }

    #[test]
    fn plugins_section_renders_cards() {
        let html = render_fragment(|| view! { <PluginsSection /> });
        assert_eq!(html.matches("plugin-card").count(), 3);
    }
}
