//! Versioned configuration shared by every computation.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::ConfigError;
use crate::limits::HandlingLimits;
use crate::materials::{MaterialConstants, SafetyFactor};
use crate::model::RopeModel;

/// Configuration format understood by this crate.
pub const CONFIG_VERSION: u32 = 1;

/// Model parameters and annotation limits in one value.
///
/// Every field is validated during deserialisation; missing fields take the
/// paper's values.
///
/// # Examples
/// ```
/// use moai_rope::ModelConfig;
///
/// let config = ModelConfig::from_json_str(r#"{"version": 1, "safety_factor": 8.0}"#)
///     .expect("valid configuration");
/// assert_eq!(config.safety_factor.value(), 8.0);
/// assert!(config.include_packing);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModelConfig {
    /// Format version; must equal [`CONFIG_VERSION`].
    pub version: u32,
    /// Fibre and rope constants.
    pub constants: MaterialConstants,
    /// Margin between working and breaking load.
    pub safety_factor: SafetyFactor,
    /// Whether the packing correction is applied.
    pub include_packing: bool,
    /// Grip thresholds used for classification and annotation.
    pub limits: HandlingLimits,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            constants: MaterialConstants::triumfetta_cordifolia(),
            safety_factor: SafetyFactor::PAPER,
            include_packing: true,
            limits: HandlingLimits::default(),
        }
    }
}

impl ModelConfig {
    /// The packing-omitted formulation used by the original figure scripts.
    #[must_use]
    pub fn historical() -> Self {
        Self {
            include_packing: false,
            ..Self::default()
        }
    }

    /// Parse a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or invalid values and
    /// [`ConfigError::UnsupportedVersion`] for an unknown version.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        if config.version != CONFIG_VERSION {
            return Err(ConfigError::UnsupportedVersion {
                found: config.version,
                expected: CONFIG_VERSION,
            });
        }
        Ok(config)
    }

    /// Read and parse a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read, otherwise see
    /// [`ModelConfig::from_json_str`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&text)?;
        debug!(path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }

    /// Serialise to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if serialisation fails.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Model built from these parameters.
    #[must_use]
    pub const fn model(&self) -> RopeModel {
        RopeModel::new(self.constants, self.safety_factor, self.include_packing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_the_paper_parameters() {
        let config = ModelConfig::default();
        assert_eq!(config.version, CONFIG_VERSION);
        assert_eq!(config.constants, MaterialConstants::triumfetta_cordifolia());
        assert_eq!(config.safety_factor, SafetyFactor::PAPER);
        assert!(config.include_packing);
        assert!(!ModelConfig::historical().include_packing);
        assert_eq!(config.model(), RopeModel::paper());
    }

    #[test]
    fn json_round_trip_preserves_configuration() {
        let config = ModelConfig {
            safety_factor: SafetyFactor::REDUCED,
            ..ModelConfig::historical()
        };
        let text = config.to_json_string().expect("serialises");
        let parsed = ModelConfig::from_json_str(&text).expect("parses");
        assert_eq!(parsed, config);
    }

    #[test]
    fn invalid_efficiency_fails_to_load() {
        let error = ModelConfig::from_json_str(
            r#"{
                "version": 1,
                "constants": {
                    "tensile_strength": 916.0,
                    "packing_efficiency": 1.2,
                    "construction_efficiency": 0.75
                }
            }"#,
        )
        .expect_err("packing above one rejected");
        assert!(matches!(error, ConfigError::Parse(_)));
    }

    #[test]
    fn unknown_version_is_rejected() {
        let error = ModelConfig::from_json_str(r#"{"version": 2}"#).expect_err("version 2");
        assert!(matches!(
            error,
            ConfigError::UnsupportedVersion {
                found: 2,
                expected: CONFIG_VERSION
            }
        ));
    }

    #[test]
    fn zero_safety_factor_fails_to_load() {
        assert!(ModelConfig::from_json_str(r#"{"safety_factor": 0.0}"#).is_err());
        assert!(ModelConfig::from_json_str(r#"{"unknown": true}"#).is_err());
    }

    #[test]
    fn invalid_grip_limits_fail_to_load() {
        let error = ModelConfig::from_json_str(
            r#"{"limits": {"difficult_mm": 60.0, "practical_mm": 50.0, "impossible_mm": -1.0}}"#,
        )
        .expect_err("unordered limits rejected");
        assert!(matches!(error, ConfigError::Parse(_)));
        assert!(ModelConfig::from_json_str(r#"{"limits": {"practical": 45.0}}"#).is_err());

        let config = ModelConfig::from_json_str(r#"{"limits": {"practical_mm": 45.0}}"#)
            .expect("partial limits are valid");
        assert!((config.limits.practical_mm() - 45.0).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_file_reports_path() {
        let error = ModelConfig::from_path("/nonexistent/moai-rope.json").expect_err("missing");
        assert!(matches!(error, ConfigError::Io { .. }));
        assert!(error.to_string().contains("moai-rope.json"));
    }
}
