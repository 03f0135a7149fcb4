//! Button and link styling primitives.
//!
//! The header needs one real `<button>` and one `<a>` that looks like a
//! button. Both get their classes from [`button_class`], so the look of an
//! action is decided by `(variant, size)` and never by the element type.

/// Visual variant of an action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Filled primary action
    #[default]
    Default,
    /// Bordered secondary action
    Outline,
    /// Text-only action with underline on hover
    Link,
}

/// Size of an action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    /// Regular height
    #[default]
    Default,
    /// Compact
    Sm,
    /// Hero sized
    Lg,
}

const BASE: &str = "btn inline-flex items-center justify-center gap-2 whitespace-nowrap rounded-md text-sm font-medium transition-colors";

/// Class string for an action of the given variant and size.
///
/// `extra` is appended last so callers can widen or heighten the action.
pub fn button_class(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    let variant_class = match variant {
        ButtonVariant::Default => "btn-primary bg-primary text-primary-foreground",
        ButtonVariant::Outline => "btn-outline border border-input bg-background",
        ButtonVariant::Link => "btn-link text-primary underline-offset-4 hover:underline",
    };
    let size_class = match size {
        ButtonSize::Default => "h-10 px-4 py-2",
        ButtonSize::Sm => "h-9 rounded-md px-3",
        ButtonSize::Lg => "h-11 rounded-md px-8",
    };

    let mut class = format!("{BASE} {variant_class} {size_class}");
    let extra = extra.trim();
    if !extra.is_empty() {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combines_variant_size_and_extra() {
        let class = button_class(ButtonVariant::Link, ButtonSize::Lg, "sm:px-8");
        assert!(class.starts_with("btn "));
        assert!(class.contains("btn-link"));
        assert!(class.contains("h-11"));
        assert!(class.ends_with(" sm:px-8"));
    }

    #[test]
    fn blank_extra_adds_nothing() {
        let class = button_class(ButtonVariant::Default, ButtonSize::Default, "  ");
        assert!(class.ends_with("h-10 px-4 py-2"));
    }
}
