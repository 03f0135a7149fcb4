//! # vitnode-home
//!
//! Renders the VitNode landing page to a static `index.html`.
//!
//! Header layout and active sections come from `vitnode-home.toml`, with
//! optional command-line overrides. They are resolved once per build; the
//! written page carries a single header layout and only the active sections.
//!
//! ```bash
//! vitnode-home --out dist/index.html
//! vitnode-home --layout stacked-centered --sections preview,features
//! vitnode-home --print-config
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use vitnode_home::{HeaderLayout, PageConfig, parse_section_list, render_page};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "vitnode-home")]
#[command(about = "Render the VitNode landing page to static HTML")]
#[command(version)]
struct Args {
    /// Page config file (missing file means defaults)
    #[arg(short, long, default_value = "vitnode-home.toml")]
    config: PathBuf,

    /// Output HTML file
    #[arg(short, long, default_value = "dist/index.html")]
    out: PathBuf,

    /// Header layout (side-by-side, stacked-centered, hybrid-responsive)
    #[arg(long)]
    layout: Option<HeaderLayout>,

    /// Comma separated sections after the header (preview, features, plugins, tabs)
    #[arg(long)]
    sections: Option<String>,

    /// Print the resolved config as JSON and exit
    #[arg(long)]
    print_config: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr, stdout is reserved for --print-config
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    let config = resolve_config(&args)?;

    if args.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let html = render_page(&config).context("Invalid page config")?;
    write_page(&args.out, &html)?;

    info!(
        "Wrote {} ({} bytes, layout {}, {} sections)",
        args.out.display(),
        html.len(),
        config.header_layout,
        config.sections.len()
    );
    Ok(())
}

/// Config file first, then command-line overrides.
fn resolve_config(args: &Args) -> Result<PageConfig> {
    let mut config = PageConfig::load_from_path(&args.config)
        .with_context(|| format!("Failed to load {}", args.config.display()))?;

    if let Some(layout) = args.layout {
        debug!("layout override: {}", layout);
        config.header_layout = layout;
    }
    if let Some(raw) = &args.sections {
        config.sections = parse_section_list(raw).context("Invalid --sections")?;
        debug!("sections override: {:?}", config.sections);
    }

    config.validate()?;
    Ok(config)
}

fn write_page(out: &Path, html: &str) -> Result<()> {
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(out, html).with_context(|| format!("Failed to write {}", out.display()))
}
