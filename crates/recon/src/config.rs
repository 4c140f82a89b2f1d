use serde::Deserialize;

use crate::error::ExportError;
use crate::normalize::default_cleanup_patterns;

/// Export configuration.
///
/// Every field defaults to the values the original automation used, so
/// [`ExportConfig::default`] is a complete working config and a TOML file
/// only needs to name the fields it overrides.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Case-insensitive substring marking a top-level solution group as an
    /// export root.
    pub marker: String,
    /// Ordered boilerplate fragments removed from probe names before they
    /// appear in the weld report.
    pub cleanup_patterns: Vec<String>,
    /// File name of the beam completion report.
    pub beam_report: String,
    /// File name of the weld force/moment report.
    pub weld_report: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            marker: "weld".into(),
            cleanup_patterns: default_cleanup_patterns(),
            beam_report: "Beam results.txt".into(),
            weld_report: "Weld results.txt".into(),
        }
    }
}

impl ExportConfig {
    pub fn from_toml(input: &str) -> Result<Self, ExportError> {
        let config: ExportConfig =
            toml::from_str(input).map_err(|e| ExportError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ExportError> {
        if self.marker.trim().is_empty() {
            return Err(ExportError::ConfigValidation(
                "marker must not be empty".into(),
            ));
        }
        if self.beam_report.trim().is_empty() || self.weld_report.trim().is_empty() {
            return Err(ExportError::ConfigValidation(
                "report file names must not be empty".into(),
            ));
        }
        if self.cleanup_patterns.iter().any(|p| p.is_empty()) {
            return Err(ExportError::ConfigValidation(
                "cleanup patterns must not contain empty strings".into(),
            ));
        }
        Ok(())
    }
}
