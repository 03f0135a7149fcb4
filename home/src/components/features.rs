//! Feature highlights: an ordered list of self-contained blocks.

use super::{Icon, ICON_CHECK, ICON_ENVELOPE, ICON_PUZZLE_PIECE};
use leptos::prelude::*;

/// One feature block. Blocks share no state and never read each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeatureBlock {
    /// Plugin system
    Plugins,
    /// Transactional emails
    Emails,
}

/// Render order of the feature blocks. Reordering is an edit here.
pub const FEATURE_BLOCKS: [FeatureBlock; 2] = [FeatureBlock::Plugins, FeatureBlock::Emails];

impl FeatureBlock {
    /// Stable identifier, rendered as `data-feature`.
    pub fn id(self) -> &'static str {
        match self {
            FeatureBlock::Plugins => "plugins",
            FeatureBlock::Emails => "emails",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            FeatureBlock::Plugins => ICON_PUZZLE_PIECE,
            FeatureBlock::Emails => ICON_ENVELOPE,
        }
    }

    fn eyebrow(self) -> &'static str {
        match self {
            FeatureBlock::Plugins => "Plugins",
            FeatureBlock::Emails => "Emails",
        }
    }

    fn title(self) -> &'static str {
        match self {
            FeatureBlock::Plugins => "Build anything with plugins",
            FeatureBlock::Emails => "Emails that look like your site",
        }
    }

    fn description(self) -> &'static str {
        match self {
            FeatureBlock::Plugins => {
                "Every part of VitNode is a plugin. Add pages, API routes and database tables \
                 without touching the core, then ship them to other communities."
            }
            FeatureBlock::Emails => {
                "Send transactional emails from templates that share your theme and language \
                 settings. Swap providers without rewriting a single message."
            }
        }
    }

    fn points(self) -> &'static [&'static str] {
        match self {
            FeatureBlock::Plugins => &[
                "Install and update plugins from the admin panel",
                "Own pages, API routes and database tables",
                "Type-safe SDK shared by frontend and backend",
            ],
            FeatureBlock::Emails => &[
                "SMTP and Resend providers out of the box",
                "Templates rendered with the site theme",
                "Per-user language for every message",
            ],
        }
    }
}

/// The feature highlights, in [`FEATURE_BLOCKS`] order.
///
/// Spacing between blocks is tight on small viewports and wide from `lg` up.
#[component]
pub fn FeatureSections() -> impl IntoView {
    view! {
        <div class="home-features container my-20 space-y-16 lg:space-y-32" data-section="features">
            {FEATURE_BLOCKS
                .into_iter()
                .map(|block| view! { <FeatureBlockView block=block /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn FeatureBlockView(block: FeatureBlock) -> impl IntoView {
    let id = block.id();
    let icon = block.icon();

    view! {
        <section class="feature-block grid gap-10 lg:grid-cols-2 items-center" data-feature=id>
            <div class="flex flex-col items-start">
                <div class="feature-eyebrow flex items-center gap-2 text-primary font-medium mb-4">
                    <Icon path=icon class="size-5" />
                    <span>{block.eyebrow()}</span>
                </div>
                <h2 class="text-2xl font-bold tracking-tight sm:text-4xl">{block.title()}</h2>
                <p class="text-muted-foreground mt-4 md:text-lg">{block.description()}</p>
            </div>
            <ul class="feature-points space-y-3">
                {block
                    .points()
                    .iter()
                    .map(|point| {
                        view! {
                            <li class="flex items-center gap-3">
                                <Icon path=ICON_CHECK size="18" class="text-primary" />
                                <span>{*point}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render_fragment;

    #[test]
    fn renders_blocks_in_fixed_order() {
        let html = render_fragment(|| view! { <FeatureSections /> });
        let plugins = html.find("data-feature=\"plugins\"").expect("plugins block");
        let emails = html.find("data-feature=\"emails\"").expect("emails block");
        assert!(plugins < emails);
        assert_eq!(html.matches("data-feature=").count(), FEATURE_BLOCKS.len());
    }

    #[test]
    fn spacing_scales_with_viewport() {
        let html = render_fragment(|| view! { <FeatureSections /> });
        assert!(html.contains("space-y-16 lg:space-y-32"));
    }

    #[test]
    fn each_block_lists_its_points() {
        for block in FEATURE_BLOCKS {
            let html = render_fragment(move || view! { <FeatureBlockView block=block /> });
            assert_eq!(html.matches("<li").count(), block.points().len());
            assert!(html.contains(block.title()));
        }
    }
}
