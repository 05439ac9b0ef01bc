// SPDX-License-Identifier: MIT OR Apache-2.0
//! Generator settings.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default `#version` directive
pub const DEFAULT_GLSL_VERSION: u32 = 450;

/// Settings controlling the emitted GLSL header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Value of the `#version` directive
    pub glsl_version: u32,
    /// Extensions enabled after the version directive, in order
    pub extensions: Vec<String>,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            glsl_version: DEFAULT_GLSL_VERSION,
            extensions: vec!["GL_ARB_separate_shader_objects".to_string()],
        }
    }
}

impl GeneratorSettings {
    /// Parse settings from RON text
    pub fn from_ron(text: &str) -> Result<Self, SettingsError> {
        Ok(ron::from_str(text)?)
    }

    /// Serialize settings to pretty RON text
    pub fn to_ron(&self) -> Result<String, SettingsError> {
        Ok(ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?)
    }

    /// Load settings from a RON file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_ron(&content)
    }

    /// Save settings to a RON file
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        std::fs::write(path, self.to_ron()?)?;
        Ok(())
    }
}

/// Error when loading or saving settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// File could not be read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// RON text could not be parsed
    #[error("Invalid settings: {0}")]
    Parse(#[from] ron::error::SpannedError),

    /// Settings could not be serialized
    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] ron::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = GeneratorSettings::default();
        assert_eq!(settings.glsl_version, 450);
        assert_eq!(settings.extensions, vec!["GL_ARB_separate_shader_objects"]);
    }

    #[test]
    fn test_serialization() {
        let settings = GeneratorSettings {
            glsl_version: 460,
            extensions: vec!["GL_EXT_scalar_block_layout".to_string()],
        };
        let ron_str = settings.to_ron().unwrap();
        let loaded = GeneratorSettings::from_ron(&ron_str).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let loaded = GeneratorSettings::from_ron("(glsl_version: 460)").unwrap();
        assert_eq!(loaded.glsl_version, 460);
        assert_eq!(loaded.extensions, GeneratorSettings::default().extensions);
    }

    #[test]
    fn test_invalid_ron_is_an_error() {
        assert!(matches!(
            GeneratorSettings::from_ron("(glsl_version: \"x\")"),
            Err(SettingsError::Parse(_))
        ));
    }
}
