//! Configuration for the normalization pipeline
//!
//! Loadable from TOML or JSON. Every field has a default, so an empty
//! document is a valid configuration:
//!
//! ```toml
//! paint = true
//!
//! [robust]
//! lower_percentile = 0.05
//! upper_percentile = 0.95
//! min_extent = 1e-6
//!
//! [color]
//! r = 0.9
//! g = 0.9
//! b = 0.1
//! ```

use crate::color::Color;
use crate::error::{CoreError, CoreResult};
use cloudnorm_stats::RobustOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Pipeline configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Percentiles and degeneracy threshold for the robust frame
    pub robust: RobustOptions,
    /// Whether to paint the normalized cloud with `color`
    pub paint: bool,
    /// Uniform point color
    pub color: Color,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            robust: RobustOptions::default(),
            paint: true,
            color: Color::default(),
        }
    }
}

impl PipelineConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Color to paint with, if painting is enabled
    pub fn paint_color(&self) -> Option<Color> {
        self.paint.then_some(self.color)
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> CoreResult<Self> {
        toml::from_str(toml_str).map_err(|e| CoreError::InvalidConfig(e.to_string()))
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> CoreResult<String> {
        toml::to_string_pretty(self).map_err(|e| CoreError::InvalidConfig(e.to_string()))
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> CoreResult<Self> {
        serde_json::from_str(json_str).map_err(|e| CoreError::InvalidConfig(e.to_string()))
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> CoreResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| CoreError::InvalidConfig(e.to_string()))
    }

    /// Load a configuration file, choosing the format by extension.
    ///
    /// `.json` files are parsed as JSON, everything else as TOML. The
    /// result is validated before it is returned.
    pub fn load(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;

        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        let config = if is_json {
            Self::from_json(&text)?
        } else {
            Self::from_toml(&text)?
        };

        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> CoreResult<()> {
        self.robust
            .validate()
            .map_err(|e| CoreError::InvalidConfig(e.to_string()))?;

        let in_range = |c: f64| (0.0..=1.0).contains(&c);
        if !(in_range(self.color.r) && in_range(self.color.g) && in_range(self.color.b)) {
            return Err(CoreError::InvalidConfig(format!(
                "color components must be between 0.0 and 1.0, got {}",
                self.color
            )));
        }

        Ok(())
    }
}
