//! Decorative header backdrop: a faded dot grid and a blurred glow.
//! The grid itself is drawn by `.background-grid` in the stylesheet.

use leptos::prelude::*;

/// Purely decorative backdrop. No state, hidden from assistive tech.
#[component]
pub fn BackgroundDecoration(
    /// Extra classes for the grid layer
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let grid_class = format!("background-grid pointer-events-none inset-0 size-full {class}");

    view! {
        <div class=grid_class aria-hidden="true"></div>
        <div class="background-glow absolute bg-primary rounded-full size-60 blur-[12rem]" aria-hidden="true"></div>
    }
}
