//! Page configuration: which header layout ships and which optional sections
//! follow it.
//!
//! Loaded from an optional TOML file (`vitnode-home.toml`) and resolved once,
//! when the static page is rendered. Nothing here is switchable by visitors.
//!
//! ```toml
//! header_layout = "side-by-side"
//! sections = ["features"]
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// Repository the "Star on GitHub" link points to.
pub const DEFAULT_REPOSITORY_URL: &str = "https://github.com/aXenDeveloper/vitnode";

/// Errors raised while resolving the page configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file exists but could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path of the config file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
    /// Config file is not valid TOML or names an unknown layout/section
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// Path of the config file
        path: PathBuf,
        /// Underlying TOML error
        source: toml::de::Error,
    },
    /// Header layout name outside the known set
    #[error("unknown header layout `{0}` (expected side-by-side, stacked-centered or hybrid-responsive)")]
    UnknownLayout(String),
    /// Section name outside the catalog
    #[error("unknown section `{0}` (expected preview, features, plugins or tabs)")]
    UnknownSection(String),
    /// Same catalog section listed twice
    #[error("section `{0}` is listed more than once")]
    DuplicateSection(SectionId),
}

/// Arrangement of the header: text block, call-to-action row and media slot.
///
/// All layouts carry the same content; they differ only in classes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeaderLayout {
    /// Text left, media right from the `md` breakpoint up (canonical)
    #[default]
    SideBySide,
    /// Text centered above the media at every width
    StackedCentered,
    /// Stacked and centered on small screens, side by side from `lg` up
    HybridResponsive,
}

impl HeaderLayout {
    /// Every known layout, canonical first.
    pub const ALL: [HeaderLayout; 3] = [
        HeaderLayout::SideBySide,
        HeaderLayout::StackedCentered,
        HeaderLayout::HybridResponsive,
    ];

    /// Config/CLI name.
    pub fn as_str(self) -> &'static str {
        match self {
            HeaderLayout::SideBySide => "side-by-side",
            HeaderLayout::StackedCentered => "stacked-centered",
            HeaderLayout::HybridResponsive => "hybrid-responsive",
        }
    }

    /// Classes for the row holding the text block and the media slot.
    pub fn container_class(self) -> &'static str {
        match self {
            HeaderLayout::SideBySide => {
                "container z-10 flex flex-col md:flex-row items-center lg:my-20 my-10 md:gap-32 gap-16"
            }
            HeaderLayout::StackedCentered => {
                "container z-10 flex flex-col items-center text-center lg:my-20 my-10 gap-16"
            }
            HeaderLayout::HybridResponsive => {
                "container z-10 flex flex-col lg:flex-row items-center text-center lg:text-left lg:my-20 my-10 lg:gap-24 gap-12"
            }
        }
    }

    /// Classes for the text block.
    pub fn text_class(self) -> &'static str {
        match self {
            HeaderLayout::SideBySide => "max-w-[44rem] flex flex-col items-start",
            HeaderLayout::StackedCentered => "max-w-[44rem] flex flex-col items-center",
            HeaderLayout::HybridResponsive => {
                "max-w-[44rem] flex flex-col items-center lg:items-start"
            }
        }
    }

    /// Classes for the call-to-action row.
    pub fn actions_class(self) -> &'static str {
        match self {
            HeaderLayout::SideBySide => "flex mt-10 flex-wrap flex-1 sm:gap-6 gap-2",
            HeaderLayout::StackedCentered => "flex mt-10 flex-wrap justify-center sm:gap-6 gap-2",
            HeaderLayout::HybridResponsive => {
                "flex mt-10 flex-wrap justify-center lg:justify-start sm:gap-6 gap-2"
            }
        }
    }
}

impl fmt::Display for HeaderLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HeaderLayout {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HeaderLayout::ALL
            .into_iter()
            .find(|layout| layout.as_str() == s.trim())
            .ok_or_else(|| ConfigError::UnknownLayout(s.to_string()))
    }
}

/// Optional sections that may follow the header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    /// Dashboard preview with its own demo video
    Preview,
    /// Feature highlights (plugins, emails)
    Features,
    /// Plugin showcase grid
    Plugins,
    /// Tabbed product tour
    Tabs,
}

impl SectionId {
    /// The whole catalog.
    pub const CATALOG: [SectionId; 4] = [
        SectionId::Preview,
        SectionId::Features,
        SectionId::Plugins,
        SectionId::Tabs,
    ];

    /// Config/CLI name, also used for `data-section`.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Preview => "preview",
            SectionId::Features => "features",
            SectionId::Plugins => "plugins",
            SectionId::Tabs => "tabs",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::CATALOG
            .into_iter()
            .find(|id| id.as_str() == s.trim())
            .ok_or_else(|| ConfigError::UnknownSection(s.to_string()))
    }
}

/// Parse a comma separated section list (`"preview,features"`).
///
/// An empty or blank string yields an empty list (header only).
pub fn parse_section_list(raw: &str) -> Result<Vec<SectionId>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(SectionId::from_str)
        .collect()
}

/// Everything the page renderer needs to know.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Header arrangement shipped in this build
    pub header_layout: HeaderLayout,
    /// Optional sections rendered after the header, in order
    pub sections: Vec<SectionId>,
    /// Document `<title>`
    pub title: String,
    /// Target of the "Star on GitHub" link
    pub repository_url: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            header_layout: HeaderLayout::SideBySide,
            sections: vec![SectionId::Features],
            title: "VitNode".into(),
            repository_url: DEFAULT_REPOSITORY_URL.into(),
        }
    }
}

impl PageConfig {
    /// Load config from a TOML file.
    ///
    /// A missing file yields the defaults. Unreadable or invalid files are
    /// errors, as are duplicated sections.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!("no page config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;

        debug!(
            layout = %config.header_layout,
            sections = config.sections.len(),
            "loaded page config from {}",
            path.display()
        );
        Ok(config)
    }

    /// Check the section list holds each catalog entry at most once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (idx, id) in self.sections.iter().enumerate() {
            if self.sections[..idx].contains(id) {
                return Err(ConfigError::DuplicateSection(*id));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("vitnode-home.toml");
        let mut file = std::fs::File::create(&path).expect("create config");
        write!(file, "{body}").expect("write config");
        path
    }

    #[test]
    fn default_matches_shipped_page() {
        let config = PageConfig::default();
        assert_eq!(config.header_layout, HeaderLayout::SideBySide);
        assert_eq!(config.sections, vec![SectionId::Features]);
        assert_eq!(config.repository_url, DEFAULT_REPOSITORY_URL);
    }

    #[test]
    fn missing_file_uses_defaults() {
        let temp = TempDir::new().expect("temp dir");
        let config = PageConfig::load_from_path(&temp.path().join("absent.toml"))
            .expect("defaults");
        assert_eq!(config, PageConfig::default());
    }

    #[test]
    fn loads_layout_and_sections() {
        let temp = TempDir::new().expect("temp dir");
        let path = write_config(
            &temp,
            r#"
header_layout = "hybrid-responsive"
sections = ["preview", "tabs"]
title = "Home"
"#,
        );

        let config = PageConfig::load_from_path(&path).expect("valid config");
        assert_eq!(config.header_layout, HeaderLayout::HybridResponsive);
        assert_eq!(config.sections, vec![SectionId::Preview, SectionId::Tabs]);
        assert_eq!(config.title, "Home");
        assert_eq!(config.repository_url, DEFAULT_REPOSITORY_URL);
    }

    #[test]
    fn unknown_layout_fails_fast() {
        let temp = TempDir::new().expect("temp dir");
        let path = write_config(&temp, "header_layout = \"diagonal\"\n");
        let err = PageConfig::load_from_path(&path).expect_err("invalid layout");
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn unknown_section_fails_fast() {
        let temp = TempDir::new().expect("temp dir");
        let path = write_config(&temp, "sections = [\"pricing\"]\n");
        assert!(matches!(
            PageConfig::load_from_path(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn duplicate_section_rejected() {
        let temp = TempDir::new().expect("temp dir");
        let path = write_config(&temp, "sections = [\"features\", \"features\"]\n");
        let err = PageConfig::load_from_path(&path).expect_err("duplicate");
        assert!(matches!(err, ConfigError::DuplicateSection(SectionId::Features)));
    }

    #[test]
    fn parses_cli_names() {
        assert_eq!(
            "stacked-centered".parse::<HeaderLayout>().expect("layout"),
            HeaderLayout::StackedCentered
        );
        assert!(matches!(
            "sideways".parse::<HeaderLayout>(),
            Err(ConfigError::UnknownLayout(name)) if name == "sideways"
        ));
        assert_eq!(
            parse_section_list(" preview , features ").expect("sections"),
            vec![SectionId::Preview, SectionId::Features]
        );
        assert!(parse_section_list("  ").expect("empty").is_empty());
        assert!(matches!(
            parse_section_list("preview,pricing"),
            Err(ConfigError::UnknownSection(name)) if name == "pricing"
        ));
    }
}
