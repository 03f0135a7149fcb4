//! Hover-animated preview video for the header media slot.

use std::time::Instant;

use crate::motion::HoverMachine;
use leptos::prelude::*;

/// Hero demo video, served as a static asset.
pub const HERO_VIDEO_SRC: &str = "/videos/hero-demo.mp4";
/// MIME type of every preview video.
pub const VIDEO_MIME: &str = "video/mp4";

const CONTAINER_CLASS: &str =
    "preview-media aspect-video rounded-xl overflow-hidden mt-20 shadow-2xl lg:h-96";

/// Fixed aspect-ratio container around a looping, muted, autoplaying video.
///
/// Pointer-enter scales the container to 1.25, pointer-leave back to 1.0,
/// both over 0.5s with circInOut easing. The container owns a
/// [`HoverMachine`](crate::motion::HoverMachine); nothing outside reads it.
///
/// A missing video leaves an empty frame. There is no error path.
#[component]
pub fn PreviewMedia(
    /// Extra sizing classes for the container
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    preview_media_view(class, HoverMachine::new())
}

/// Renders the container around an existing machine. Style and
/// `data-hover-state` follow `machine.state()` on every transition.
pub(crate) fn preview_media_view(class: &'static str, machine: HoverMachine) -> impl IntoView {
    let machine = RwSignal::new(machine);
    let mounted = Instant::now();
    let elapsed = move || mounted.elapsed().as_secs_f64();

    let container_class = if class.is_empty() {
        CONTAINER_CLASS.to_string()
    } else {
        format!("{CONTAINER_CLASS} {class}")
    };

    view! {
        <div
            class=container_class
            data-media-slot="preview"
            data-hover-state=move || machine.get().state().as_str()
            style=move || machine.get().state().motion().inline_style()
            on:mouseenter=move |_| {
                let now = elapsed();
                machine.update(|m| m.pointer_enter(now));
            }
            on:mouseleave=move |_| {
                let now = elapsed();
                machine.update(|m| m.pointer_leave(now));
            }
        >
            <video loop=true muted=true autoplay=true playsinline=true>
                <source src=HERO_VIDEO_SRC type=VIDEO_MIME />
            </video>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render_fragment;

    #[test]
    fn renders_resting_container_with_silent_looping_video() {
        let html = render_fragment(|| view! { <PreviewMedia /> });

        assert!(html.contains("data-hover-state=\"resting\""));
        assert!(html.contains("transform: scale(1);"));
        assert!(html.contains("transform 0.5s cubic-bezier(0.85, 0, 0.15, 1)"));
        assert!(!html.contains(";;"));
        assert!(html.contains("<video"));
        assert!(html.contains(" loop"));
        assert!(html.contains(" muted"));
        assert!(html.contains(" autoplay"));
        assert!(!html.contains("controls"));
        assert!(html.contains("src=\"/videos/hero-demo.mp4\""));
        assert!(html.contains("type=\"video/mp4\""));
        assert_eq!(html.matches("data-media-slot=").count(), 1);
    }

    #[test]
    fn appends_sizing_classes() {
        let html = render_fragment(|| view! { <PreviewMedia class="lg:h-[30rem]" /> });
        assert!(html.contains("lg:h-96 lg:h-[30rem]"));
    }

    #[test]
    fn hovered_machine_renders_enlarged_target() {
        let mut machine = HoverMachine::new();
        machine.pointer_enter(0.0);

        let html = render_fragment(move || preview_media_view("", machine));

        assert!(html.contains("data-hover-state=\"hovered\""));
        assert!(html.contains("transform: scale(1.25)"));
        assert!(html.contains("transform 0.5s cubic-bezier(0.85, 0, 0.15, 1)"));
    }

    #[test]
    fn leave_during_enter_renders_resting_target() {
        let mut machine = HoverMachine::new();
        machine.pointer_enter(0.0);
        machine.pointer_leave(0.1);

        let html = render_fragment(move || preview_media_view("", machine));

        assert!(html.contains("data-hover-state=\"resting\""));
        assert!(html.contains("transform: scale(1)"));
        assert!(!html.contains("scale(1.25)"));
    }
}
