//! Error types produced while configuring or evaluating the rope sizing model.

use std::path::PathBuf;

use thiserror::Error;

/// Error returned when material constants are not physically meaningful.
///
/// This is the invalid-configuration fault: it is raised when constants are
/// built or deserialised, and again if a computation ever meets constants that
/// bypassed validation.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum MaterialError {
    /// Returned when the fibre tensile strength is zero, negative or not finite.
    #[error("tensile strength must be positive (received {tensile_strength} MPa)")]
    NonPositiveTensileStrength {
        /// Rejected tensile strength in megapascals.
        tensile_strength: f64,
    },
    /// Returned when the packing efficiency lies outside (0, 1].
    #[error("packing efficiency must lie in (0, 1] (received {packing_efficiency})")]
    PackingEfficiencyOutOfRange {
        /// Rejected packing efficiency.
        packing_efficiency: f64,
    },
    /// Returned when the construction efficiency lies outside (0, 1].
    #[error("construction efficiency must lie in (0, 1] (received {construction_efficiency})")]
    ConstructionEfficiencyOutOfRange {
        /// Rejected construction efficiency.
        construction_efficiency: f64,
    },
    /// Returned when tensile strength, efficiencies and π multiply to zero or overflow.
    #[error(
        "effective strength must be positive and finite (received {effective_strength} MPa)"
    )]
    DegenerateEffectiveStrength {
        /// Product of tensile strength, both efficiency factors and π.
        effective_strength: f64,
    },
}

/// Error returned when grip thresholds are not positive and strictly increasing.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum LimitsError {
    /// Returned when a threshold is zero, negative or not finite.
    #[error("{name} must be positive (received {value} mm)")]
    NonPositiveThreshold {
        /// Field name of the rejected threshold.
        name: &'static str,
        /// Rejected value in millimetres.
        value: f64,
    },
    /// Returned when the thresholds do not satisfy `difficult < practical < impossible`.
    #[error(
        "grip thresholds must increase (received {difficult_mm} mm, {practical_mm} mm, {impossible_mm} mm)"
    )]
    UnorderedThresholds {
        /// Difficult-grip threshold in millimetres.
        difficult_mm: f64,
        /// Practical limit in millimetres.
        practical_mm: f64,
        /// Impossible-grip threshold in millimetres.
        impossible_mm: f64,
    },
}

/// Error returned when a sizing computation receives an argument outside its domain.
///
/// # Examples
///
/// ```
/// use moai_rope::{breaking_load, MaterialConstants, SizingError};
///
/// let constants = MaterialConstants::triumfetta_cordifolia();
/// let error = breaking_load(-5.0, &constants, true).expect_err("negative diameter rejected");
/// assert_eq!(error, SizingError::NonPositiveDiameter { diameter_mm: -5.0 });
/// ```
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum SizingError {
    /// Returned when a rope diameter is zero, negative or not finite.
    #[error("rope diameter must be positive (received {diameter_mm} mm)")]
    NonPositiveDiameter {
        /// Rejected diameter in millimetres.
        diameter_mm: f64,
    },
    /// Returned when a working load is zero, negative or not finite.
    #[error("working load must be positive (received {working_load_kn} kN)")]
    NonPositiveWorkingLoad {
        /// Rejected working load in kilonewtons.
        working_load_kn: f64,
    },
    /// Returned when a statue mass is zero, negative or not finite.
    #[error("mass must be positive (received {mass_tons} t)")]
    NonPositiveMass {
        /// Rejected mass in metric tons.
        mass_tons: f64,
    },
    /// Returned when a safety factor is zero, negative or not finite.
    #[error("safety factor must be positive (received {safety_factor})")]
    NonPositiveSafetyFactor {
        /// Rejected safety factor.
        safety_factor: f64,
    },
    /// Returned when the constants used for a computation are invalid.
    #[error("invalid material constants: {0}")]
    InvalidConfiguration(#[from] MaterialError),
}

/// Error returned when loading a [`ModelConfig`](crate::ModelConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Returned when the configuration file cannot be read.
    #[error("failed to read configuration {path:?}: {source}")]
    Io {
        /// Location that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// Returned when the configuration is not valid JSON or has invalid values.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
    /// Returned when the configuration declares a version this crate does not understand.
    #[error("unsupported configuration version {found} (expected {expected})")]
    UnsupportedVersion {
        /// Version found in the document.
        found: u32,
        /// Version understood by this crate.
        expected: u32,
    },
}

/// Error returned by a [`ChartSink`](crate::ChartSink).
#[derive(Debug, Error)]
pub enum SinkError {
    /// Returned when an output file or directory cannot be written.
    #[error("failed to write {path:?}: {source}")]
    Io {
        /// Location that was being written.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// Returned when a chart cannot be serialised.
    #[error("failed to serialise chart: {0}")]
    Serialize(#[from] serde_json::Error),
    /// Returned when the drawing backend reports a failure.
    #[error("failed to render chart {chart}: {message}")]
    Render {
        /// Name of the chart being drawn.
        chart: String,
        /// Backend description of the failure.
        message: String,
    },
    /// Returned when a chart has nothing to draw.
    #[error("chart {0} has no data points")]
    EmptyChart(String),
}
