//! Persisted catalogue settings.
//!
//! Settings are stored as TOML. Missing keys take their default values, so a
//! file written by an older version still loads:
//!
//! ```toml
//! sort_criterion = "character-count"
//! order_reversed = true
//! characters_reversed = false
//! font_dirs = ["/usr/share/fonts/truetype"]
//! load_system_fonts = false
//! point_size = 14.0
//! ```

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use font_catalogue_core::{CatalogueError, Result};
use font_catalogue_core::logging::targets;
use serde::{Deserialize, Serialize};

use crate::model::SortCriterion;

const DEFAULT_POINT_SIZE: f64 = 17.0;

/// Presentation state of the list plus font database options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogueSettings {
    /// Criterion of the last sort.
    pub sort_criterion: SortCriterion,
    /// Whether the rows are shown in reverse order.
    pub order_reversed: bool,
    /// Whether character reversal is on.
    pub characters_reversed: bool,
    /// Whether the rows run against the last sort. Toggling the order and
    /// then sorting leaves `order_reversed` set but the rows ascending.
    /// Files without this key fall back to `order_reversed`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows_reversed: Option<bool>,
    /// Whether the last sort compared character-reversed text.
    pub sorted_reversed_text: bool,
    /// Extra directories scanned for font files.
    pub font_dirs: Vec<PathBuf>,
    /// Whether installed system fonts are enumerated.
    pub load_system_fonts: bool,
    /// Point size used when measuring display sizes.
    pub point_size: f64,
}

impl Default for CatalogueSettings {
    fn default() -> Self {
        Self {
            sort_criterion: SortCriterion::None,
            order_reversed: false,
            characters_reversed: false,
            rows_reversed: None,
            sorted_reversed_text: false,
            font_dirs: Vec::new(),
            load_system_fonts: true,
            point_size: DEFAULT_POINT_SIZE,
        }
    }
}

impl CatalogueSettings {
    /// Whether restoring these settings reverses the sorted rows.
    pub fn rows_reversed(&self) -> bool {
        self.rows_reversed.unwrap_or(self.order_reversed)
    }

    /// Parses settings from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CatalogueError::SettingsParse(e.to_string()))
    }

    /// Serializes the settings to a TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| CatalogueError::SettingsSerialize(e.to_string()))
    }

    /// Loads settings from a TOML file.
    pub fn load_toml(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| CatalogueError::io(path, e))?;
        let settings = Self::from_toml_str(&content)?;
        tracing::debug!(
            target: targets::SETTINGS,
            path = %path.display(),
            criterion = %settings.sort_criterion,
            "loaded settings"
        );
        Ok(settings)
    }

    /// Loads settings from `path`, or returns the defaults if the file does
    /// not exist. Other I/O and parse errors are returned.
    pub fn load_toml_or_default(path: impl AsRef<Path>) -> Result<Self> {
        match Self::load_toml(&path) {
            Err(e) if e.is_not_found() => {
                tracing::debug!(
                    target: targets::SETTINGS,
                    path = %path.as_ref().display(),
                    "no settings file, using defaults"
                );
                Ok(Self::default())
            }
            result => result,
        }
    }

    /// Saves the settings to a TOML file.
    ///
    /// The file is written to a temporary sibling first and then renamed over
    /// `path`, so an existing file is never left half written.
    pub fn save_toml(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = self.to_toml_string()?;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "settings".to_string());
        let temp_path =
            path.with_file_name(format!(".{}.tmp.{}", file_name, std::process::id()));

        let write = || -> std::io::Result<()> {
            let mut file = fs::File::create(&temp_path)?;
            file.write_all(content.as_bytes())?;
            file.sync_all()?;
            fs::rename(&temp_path, path)
        };
        if let Err(e) = write() {
            fs::remove_file(&temp_path).ok();
            return Err(CatalogueError::io(path, e));
        }

        tracing::debug!(
            target: targets::SETTINGS,
            path = %path.display(),
            "saved settings"
        );
        Ok(())
    }

    /// Builds the font database configuration these settings describe.
    #[cfg(feature = "font-database")]
    pub fn font_database_config(&self) -> crate::text::FontDatabaseConfig {
        self.font_dirs.iter().fold(
            crate::text::FontDatabaseConfig::new()
                .load_system_fonts(self.load_system_fonts)
                .point_size(self.point_size),
            |config, dir| config.font_dir(dir.clone()),
        )
    }
}
