//! Snap engine configuration.
//!
//! Hosts either take the defaults, pass a JSON object (every field optional),
//! or read the environment. All three paths end in [`SnapConfig::validate`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_TOLERANCE;
use crate::error::SnapError;
use crate::guide::GuideStyle;

/// Which box a multi-item drag snaps with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cohesion {
    /// Snap using the primary dragged item's own box.
    #[default]
    SingleTarget,
    /// Snap using the union of every dragged item's box.
    CombinedBbox,
}

impl Cohesion {
    /// Parse `single-target` or `combined-bbox`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` for any other value.
    pub fn parse(raw: &str) -> Result<Self, SnapError> {
        match raw.trim() {
            "single-target" => Ok(Self::SingleTarget),
            "combined-bbox" => Ok(Self::CombinedBbox),
            other => Err(SnapError::InvalidConfig {
                field: "cohesion",
                reason: format!("expected `single-target` or `combined-bbox`, got `{other}`"),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapConfig {
    /// Maximum distance, in canvas units, at which a line captures an edge.
    pub tolerance: f64,
    pub cohesion: Cohesion,
    pub guide: GuideStyle,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self { tolerance: DEFAULT_TOLERANCE, cohesion: Cohesion::default(), guide: GuideStyle::default() }
    }
}

impl SnapConfig {
    /// Parse a JSON object. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigParse` for malformed JSON and `InvalidConfig` if a
    /// value fails validation.
    pub fn from_json(raw: &str) -> Result<Self, SnapError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `SNAP_TOLERANCE`: default 5
    /// - `SNAP_COHESION`: `single-target` (default) or `combined-bbox`
    /// - `SNAP_GUIDE_COLOR`: default `#FF0000`
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, SnapError> {
        let mut config = Self::default();
        if let Some(raw) = env_var("SNAP_TOLERANCE") {
            config.tolerance = parse_f64("tolerance", &raw)?;
        }
        if let Some(raw) = env_var("SNAP_COHESION") {
            config.cohesion = Cohesion::parse(&raw)?;
        }
        if let Some(raw) = env_var("SNAP_GUIDE_COLOR") {
            config.guide.color = raw;
        }
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` naming the first offending field.
    pub fn validate(&self) -> Result<(), SnapError> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(SnapError::InvalidConfig {
                field: "tolerance",
                reason: format!("must be a finite value >= 0, got {}", self.tolerance),
            });
        }
        if !self.guide.stroke_width.is_finite() || self.guide.stroke_width <= 0.0 {
            return Err(SnapError::InvalidConfig {
                field: "guide.stroke_width",
                reason: format!("must be a finite value > 0, got {}", self.guide.stroke_width),
            });
        }
        if self.guide.color.trim().is_empty() {
            return Err(SnapError::InvalidConfig { field: "guide.color", reason: "must not be empty".into() });
        }
        Ok(())
    }
}

fn env_var(key: &str) -> Option<String> {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        _ => None,
    }
}

fn parse_f64(field: &'static str, raw: &str) -> Result<f64, SnapError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|e| SnapError::InvalidConfig { field, reason: format!("`{raw}`: {e}") })
}
