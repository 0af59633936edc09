//! Config - Table View Configuration
//!
//! Loaded from `table-view.toml` in the platform config directory, or from the
//! file named by `TABLE_VIEW_CONFIG`. A missing file yields the defaults.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::i18n::Locale;
use crate::table::controller::DEFAULT_PINNED_CELLS;
use crate::table::pagination::DEFAULT_PAGE_SIZE;

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "TABLE_VIEW_CONFIG";

/// Config file name inside the config directory
pub const CONFIG_FILE: &str = "table-view.toml";

/// Table view configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// UI language
    pub locale: Locale,
    /// Initial rows per page
    pub page_size: usize,
    /// Choices offered by the rows-per-page selector
    pub page_size_options: Vec<usize>,
    /// Leading data cells drawn pinned/highlighted
    pub pinned_cells: usize,
    /// Body row height in pixels
    pub row_height: f32,
    /// Header row height in pixels
    pub header_height: f32,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            page_size: DEFAULT_PAGE_SIZE,
            page_size_options: vec![10, 20, 30, 40, 50],
            pinned_cells: DEFAULT_PINNED_CELLS,
            row_height: 36.0,
            header_height: 40.0,
        }
    }
}

impl TableConfig {
    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::Invalid {
                message: "page_size must be at least 1".to_string(),
            });
        }
        if self.page_size_options.is_empty() {
            return Err(Error::Invalid {
                message: "page_size_options must not be empty".to_string(),
            });
        }
        if self.page_size_options.contains(&0) {
            return Err(Error::Invalid {
                message: "page_size_options must all be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Parse and validate a TOML document
    pub fn from_toml(content: &str, path: &Path) -> Result<Self> {
        let config: TableConfig = toml::from_str(content).map_err(|source| Error::TomlDe {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path`; a missing file gives the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Self::from_toml(&content, path)
    }

    /// Load from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path()?)
    }

    /// Save as pretty TOML, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// Resolve the config file location
pub fn config_path() -> Result<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Ok(PathBuf::from(path));
    }

    let dirs = ProjectDirs::from("", "", "table-view").ok_or(Error::NoConfigDir)?;
    Ok(dirs.config_dir().join(CONFIG_FILE))
}
