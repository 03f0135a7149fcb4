//! CSS for the landing page.
//!
//! The markup carries utility class names for sites that run their own
//! utility CSS build. [`HOME_CSS`] styles the semantic hooks (`home-header`,
//! `layout-*`, `preview-media`, `feature-block`, ...) so the rendered page
//! also stands on its own.
//!
//! # Customization
//!
//! ```rust
//! use vitnode_home::styles::HOME_CSS;
//!
//! let my_css = ".home-header { background: black; }";
//! let combined = format!("{}\n{}", HOME_CSS, my_css);
//! ```

use crate::motion::HoverState;

/// Content Security Policy for the static page: same-origin media, no scripts.
pub const CSP: &str = "default-src 'self'; img-src 'self' data:; media-src 'self'; style-src 'self' 'unsafe-inline'; script-src 'self'; connect-src 'none';";

/// Base stylesheet for the landing page.
pub const HOME_CSS: &str = r#"
:root {
    --background: #ffffff;
    --card: #f6f7f9;
    --foreground: #0b0d12;
    --muted-foreground: #5b6170;
    --primary: #2563eb;
    --primary-foreground: #ffffff;
    --border: rgba(11, 13, 18, 0.1);
    --radius: 0.75rem;
    --container-max: 1280px;
    --font-sans: 'Inter', system-ui, -apple-system, sans-serif;
}

@media (prefers-color-scheme: dark) {
    :root {
        --background: #0b0d12;
        --card: #11141b;
        --foreground: #f3f4f6;
        --muted-foreground: #9aa1b1;
        --border: rgba(243, 244, 246, 0.1);
    }
}

*, *::before, *::after {
    box-sizing: border-box;
}

body {
    font-family: var(--font-sans);
    background: var(--background);
    color: var(--foreground);
    line-height: 1.6;
    margin: 0;
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 24px;
}

/* Header */
.home-header {
    position: relative;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 80px 0;
    overflow: hidden;
    background: var(--card);
}

.background-grid {
    position: absolute;
    inset: 0;
    background-image: radial-gradient(var(--border) 1px, transparent 1px);
    background-size: 32px 32px;
    mask-image: linear-gradient(to bottom, black 40%, transparent);
}

.background-glow {
    position: absolute;
    width: 15rem;
    height: 15rem;
    border-radius: 9999px;
    background: var(--primary);
    filter: blur(12rem);
}

.home-header .container {
    position: relative;
    z-index: 10;
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 64px;
}

.header-badge {
    display: inline-flex;
    align-items: center;
    gap: 8px;
    margin-bottom: 24px;
    padding: 8px 16px;
    border-radius: 6px;
    background: var(--border);
    font-weight: 500;
}

.home-header h1 {
    font-size: clamp(1.875rem, 5vw, 3.75rem);
    font-weight: 700;
    letter-spacing: -0.04em;
    line-height: 1.1;
    margin: 0;
}

.home-header h1 span {
    color: var(--primary);
}

.home-header p {
    color: var(--muted-foreground);
    max-width: 600px;
    margin: 24px 0 0;
    font-size: 1.125rem;
}

/* Layouts */
.layout-stacked-centered .container {
    text-align: center;
}

@media (min-width: 768px) {
    .layout-side-by-side .container {
        flex-direction: row;
        gap: 128px;
    }
}

@media (max-width: 1023px) {
    .layout-hybrid-responsive .container {
        text-align: center;
    }
}

@media (min-width: 1024px) {
    .layout-hybrid-responsive .container {
        flex-direction: row;
        gap: 96px;
    }
}

/* Actions */
.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 8px;
    height: 44px;
    padding: 0 32px;
    border: 0;
    border-radius: 6px;
    font: inherit;
    font-weight: 500;
    text-decoration: none;
    cursor: pointer;
}

.btn-primary {
    background: var(--primary);
    color: var(--primary-foreground);
}

.btn-outline {
    background: var(--background);
    border: 1px solid var(--border);
    color: var(--foreground);
}

.btn-link {
    background: transparent;
    color: var(--primary);
}

.btn-link:hover {
    text-decoration: underline;
}

/* Preview media */
.preview-media {
    aspect-ratio: 16 / 9;
    border-radius: var(--radius);
    overflow: hidden;
    margin-top: 80px;
    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
    will-change: transform;
}

.preview-media video,
.preview-frame video {
    display: block;
    width: 100%;
    height: 100%;
    object-fit: cover;
}

@media (min-width: 1024px) {
    .preview-media {
        height: 24rem;
    }
}

/* Feature sections */
.home-features {
    margin: 80px auto;
    display: flex;
    flex-direction: column;
    gap: 64px;
}

@media (min-width: 1024px) {
    .home-features {
        gap: 128px;
    }
}

.feature-block {
    display: grid;
    gap: 40px;
    align-items: center;
}

@media (min-width: 1024px) {
    .feature-block {
        grid-template-columns: 1fr 1fr;
    }
}

.feature-eyebrow {
    display: flex;
    align-items: center;
    gap: 8px;
    color: var(--primary);
    font-weight: 500;
}

.feature-points {
    list-style: none;
    padding: 0;
    margin: 0;
}

.feature-points li {
    display: flex;
    align-items: center;
    gap: 12px;
    padding: 6px 0;
}

/* Catalog sections */
.preview-section,
.plugins-section,
.tabs-section {
    margin: 80px auto;
}

.preview-frame {
    aspect-ratio: 16 / 9;
    border: 1px solid var(--border);
    border-radius: var(--radius);
    overflow: hidden;
}

.plugins-grid {
    display: grid;
    gap: 24px;
    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
}

.plugin-card {
    padding: 24px;
    border: 1px solid var(--border);
    border-radius: var(--radius);
    background: var(--card);
}

.tab-bar {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 8px;
    margin-bottom: 32px;
}

.tab {
    padding: 8px 16px;
    border: 1px solid var(--border);
    border-radius: 6px;
    background: transparent;
    color: var(--foreground);
    font: inherit;
    cursor: pointer;
}

.tab.active {
    background: var(--primary);
    color: var(--primary-foreground);
}

.tab-content {
    display: none;
    text-align: center;
}

.tab-content.active {
    display: block;
}

@media (prefers-reduced-motion: reduce) {
    .preview-media {
        transition: none !important;
    }
}
"#;

/// Hover rule for the preview container, generated from the motion table so
/// the static page animates with the same scale, duration and easing as the
/// client-side state machine.
///
/// The inline style set by the component wins over normal rules, so the
/// hovered transform is marked `!important`.
pub fn motion_css() -> String {
    let hovered = HoverState::Hovered.motion();
    format!(
        ".preview-media {{ transition: {transition}; }}\n\
         .preview-media:hover {{ transform: {transform} !important; }}\n",
        transition = hovered.transition_css(),
        transform = hovered.transform_css(),
    )
}
