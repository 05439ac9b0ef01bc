// SPDX-License-Identifier: MIT OR Apache-2.0
//! Tool settings.
//!
//! Settings are stored as RON. Missing fields fall back to their defaults, so
//! a file only has to name what it changes.

use serde::{Deserialize, Serialize};
use shadergraph_codegen::{GeneratorSettings, SettingsError};
use std::path::{Path, PathBuf};

/// Settings file looked up in the working directory when none is given
pub const SETTINGS_FILE_NAME: &str = "shadergraph.ron";

/// Settings for the command line tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Header settings passed to the generator
    pub generator: GeneratorSettings,
    /// Directory generated sources are written to
    pub output_dir: PathBuf,
    /// File stem of the generated `.vert` / `.frag` pair
    pub material_name: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            generator: GeneratorSettings::default(),
            output_dir: PathBuf::from("shaders"),
            material_name: "textured_pulse".to_string(),
        }
    }
}

impl AppSettings {
    /// Load settings from a RON file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Ok(ron::from_str(&content)?)
    }

    /// Save settings to a RON file
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let config = ron::ser::PrettyConfig::default();
        let content = ron::ser::to_string_pretty(self, config)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load `path` if given, else the default settings file if present,
    /// else defaults
    pub fn resolve(path: Option<&Path>) -> Result<Self, SettingsError> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new(SETTINGS_FILE_NAME).exists() => Self::load(Path::new(SETTINGS_FILE_NAME)),
            None => Ok(Self::default()),
        }
    }

    /// Path a stage's source is written to
    pub fn output_path(&self, extension: &str) -> PathBuf {
        self.output_dir.join(format!("{}.{extension}", self.material_name))
    }
}
