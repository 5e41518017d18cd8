use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::guide::Tab;
use crate::parser::QA_TITLE;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub guide: GuideConfig,

    #[serde(default)]
    pub toc: TocConfig,

    #[serde(default)]
    pub render: RenderConfig,
}

/// Document split and tab labels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuideConfig {
    /// Title of the level-2 heading that starts the Q&A tab
    #[serde(default = "default_qa_title")]
    pub qa_title: String,

    #[serde(default = "default_main_tab_label")]
    pub main_tab_label: String,

    #[serde(default = "default_qa_tab_label")]
    pub qa_tab_label: String,
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            qa_title: default_qa_title(),
            main_tab_label: default_main_tab_label(),
            qa_tab_label: default_qa_tab_label(),
        }
    }
}

impl GuideConfig {
    pub fn tab_label(&self, tab: Tab) -> &str {
        match tab {
            Tab::Main => &self.main_tab_label,
            Tab::Qa => &self.qa_tab_label,
        }
    }
}

fn default_qa_title() -> String {
    QA_TITLE.to_string()
}

fn default_main_tab_label() -> String {
    "快速部署 Hexo".to_string()
}

fn default_qa_tab_label() -> String {
    "常见问题 Q&A".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TocConfig {
    /// Container width below which the TOC moves from a sidebar to a
    /// floating drawer
    #[serde(default = "default_narrow_breakpoint")]
    pub narrow_breakpoint: u32,

    /// Columns reserved for titles in plain-text outlines
    #[serde(default = "default_outline_width")]
    pub outline_width: usize,

    /// Append occurrence counters to duplicate heading ids
    #[serde(default)]
    pub unique_ids: bool,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            narrow_breakpoint: default_narrow_breakpoint(),
            outline_width: default_outline_width(),
            unique_ids: false,
        }
    }
}

fn default_narrow_breakpoint() -> u32 {
    860
}

fn default_outline_width() -> usize {
    30
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_true")]
    pub tables: bool,

    #[serde(default = "default_true")]
    pub strikethrough: bool,

    #[serde(default = "default_true")]
    pub tasklists: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            tables: true,
            strikethrough: true,
            tasklists: true,
        }
    }
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Get the platform-specific config file path
    /// - macOS: ~/Library/Application Support/blogtoc/config.toml
    /// - Linux: ~/.config/blogtoc/config.toml
    /// - Windows: %APPDATA%/blogtoc/config.toml
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("blogtoc").join("config.toml"))
    }

    /// Load config from the default path, or return defaults if the file is
    /// missing or invalid.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "loaded config");
                config
            }
            Err(e) => {
                tracing::warn!("{e}; using defaults");
                Self::default()
            }
        }
    }

    /// Load config from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save config to the default path
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path().ok_or(Error::NoConfigDir)?;
        self.save_to(&path)
    }

    /// Save config to a specific file.
    ///
    /// Writes to a temp file next to the target and renames it into place.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let io_err = |source: std::io::Error| Error::Io {
            path: path.to_path_buf(),
            source,
        };

        // parent() is Some("") for bare file names
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent).map_err(io_err)?;

        let contents = toml::to_string_pretty(self)?;

        let mut temp_file = tempfile::NamedTempFile::new_in(parent).map_err(io_err)?;
        temp_file.write_all(contents.as_bytes()).map_err(io_err)?;
        temp_file.flush().map_err(io_err)?;
        temp_file.persist(path).map_err(|e| io_err(e.error))?;

        tracing::debug!(path = %path.display(), "saved config");
        Ok(())
    }
}
