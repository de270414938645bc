//! Human handling limits used to interpret required rope diameters.

use std::f64::consts::PI;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::LimitsError;
use crate::materials::is_positive;
use crate::sink::{Axis, Threshold};

/// Diameters beyond which a rope becomes hard, impractical or impossible to grip.
///
/// These are annotation constants taken from the paper; the model never derives them.
/// Every instance is positive and strictly increasing.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawHandlingLimits")]
pub struct HandlingLimits {
    /// Diameter in millimetres above which a grip becomes difficult.
    difficult_mm: f64,
    /// Practical handling limit in millimetres.
    practical_mm: f64,
    /// Diameter in millimetres that cannot be gripped at all.
    impossible_mm: f64,
}

/// Unvalidated mirror of [`HandlingLimits`]; missing fields take the paper's values.
#[derive(Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawHandlingLimits {
    /// Difficult-grip threshold.
    difficult_mm: f64,
    /// Practical limit.
    practical_mm: f64,
    /// Impossible-grip threshold.
    impossible_mm: f64,
}

impl Default for RawHandlingLimits {
    fn default() -> Self {
        let limits = HandlingLimits::default();
        Self {
            difficult_mm: limits.difficult_mm,
            practical_mm: limits.practical_mm,
            impossible_mm: limits.impossible_mm,
        }
    }
}

impl TryFrom<RawHandlingLimits> for HandlingLimits {
    type Error = LimitsError;

    fn try_from(raw: RawHandlingLimits) -> Result<Self, Self::Error> {
        Self::new(raw.difficult_mm, raw.practical_mm, raw.impossible_mm)
    }
}

impl Default for HandlingLimits {
    fn default() -> Self {
        Self {
            difficult_mm: 40.0,
            practical_mm: 50.0,
            impossible_mm: 70.0,
        }
    }
}

/// Grip category of a rope diameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GripClass {
    /// Below the difficult threshold.
    Comfortable,
    /// Between the difficult threshold and the practical limit.
    ApproachingLimit,
    /// Between the practical limit and the impossible threshold.
    ExceedsPracticalLimit,
    /// At or beyond the impossible threshold.
    PhysicallyImpossible,
}

impl GripClass {
    /// Short description used in reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Comfortable => "Comfortable",
            Self::ApproachingLimit => "Approaching limit",
            Self::ExceedsPracticalLimit => "Exceeds practical limit",
            Self::PhysicallyImpossible => "Physically impossible",
        }
    }
}

impl fmt::Display for GripClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl HandlingLimits {
    /// Create limits from three thresholds in millimetres.
    ///
    /// # Errors
    ///
    /// Returns [`LimitsError::NonPositiveThreshold`] for a threshold that is not
    /// positive and finite, and [`LimitsError::UnorderedThresholds`] unless
    /// `difficult_mm < practical_mm < impossible_mm`.
    ///
    /// # Examples
    /// ```
    /// use moai_rope::{HandlingLimits, LimitsError};
    ///
    /// assert!(HandlingLimits::new(35.0, 45.0, 60.0).is_ok());
    /// assert!(matches!(
    ///     HandlingLimits::new(60.0, 50.0, 70.0),
    ///     Err(LimitsError::UnorderedThresholds { .. })
    /// ));
    /// ```
    pub fn new(
        difficult_mm: f64,
        practical_mm: f64,
        impossible_mm: f64,
    ) -> Result<Self, LimitsError> {
        for (name, value) in [
            ("difficult_mm", difficult_mm),
            ("practical_mm", practical_mm),
            ("impossible_mm", impossible_mm),
        ] {
            if !is_positive(value) {
                return Err(LimitsError::NonPositiveThreshold { name, value });
            }
        }
        if !(difficult_mm < practical_mm && practical_mm < impossible_mm) {
            return Err(LimitsError::UnorderedThresholds {
                difficult_mm,
                practical_mm,
                impossible_mm,
            });
        }
        Ok(Self {
            difficult_mm,
            practical_mm,
            impossible_mm,
        })
    }

    /// Diameter in millimetres above which a grip becomes difficult.
    #[must_use]
    pub const fn difficult_mm(&self) -> f64 {
        self.difficult_mm
    }

    /// Practical handling limit in millimetres.
    #[must_use]
    pub const fn practical_mm(&self) -> f64 {
        self.practical_mm
    }

    /// Diameter in millimetres that cannot be gripped at all.
    #[must_use]
    pub const fn impossible_mm(&self) -> f64 {
        self.impossible_mm
    }

    /// Classify a diameter; every band is closed below and open above.
    ///
    /// # Examples
    /// ```
    /// use moai_rope::{GripClass, HandlingLimits};
    ///
    /// let limits = HandlingLimits::default();
    /// assert_eq!(limits.classify(39.9), GripClass::Comfortable);
    /// assert_eq!(limits.classify(49.5), GripClass::ApproachingLimit);
    /// assert_eq!(limits.classify(86.1), GripClass::PhysicallyImpossible);
    /// ```
    #[must_use]
    pub fn classify(&self, diameter_mm: f64) -> GripClass {
        if diameter_mm < self.difficult_mm {
            GripClass::Comfortable
        } else if diameter_mm < self.practical_mm {
            GripClass::ApproachingLimit
        } else if diameter_mm < self.impossible_mm {
            GripClass::ExceedsPracticalLimit
        } else {
            GripClass::PhysicallyImpossible
        }
    }

    /// Headroom in millimetres between `diameter_mm` and the practical limit.
    #[must_use]
    pub fn margin_to_practical(&self, diameter_mm: f64) -> f64 {
        self.practical_mm - diameter_mm
    }

    /// Horizontal chart annotations for the three limits.
    #[must_use]
    pub fn thresholds(&self) -> Vec<Threshold> {
        vec![
            Threshold::new(
                format!("Difficult to grip ({:.0} mm)", self.difficult_mm),
                self.difficult_mm,
                Axis::Y,
            ),
            Threshold::new(
                format!("Maximum grip limit ({:.0} mm)", self.practical_mm),
                self.practical_mm,
                Axis::Y,
            ),
            Threshold::new(
                format!("Physically impossible ({:.0} mm)", self.impossible_mm),
                self.impossible_mm,
                Axis::Y,
            ),
        ]
    }
}

/// Fraction of hand circumference that wraps a rope comfortably.
const COMFORTABLE_WRAP: f64 = 0.35;
/// Fraction of hand circumference that wraps a rope at the limit of grip.
const MAXIMUM_WRAP: f64 = 0.45;

/// Hand size category and the rope diameters it can hold.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct HandGrip {
    /// Category name.
    pub label: &'static str,
    /// Hand circumference in millimetres.
    pub circumference_mm: f64,
}

/// Hand size categories from small to large.
pub const HAND_SIZES: [HandGrip; 5] = [
    HandGrip::new("Small", 180.0),
    HandGrip::new("Small-Med", 190.0),
    HandGrip::new("Medium", 200.0),
    HandGrip::new("Med-Large", 210.0),
    HandGrip::new("Large", 220.0),
];

impl HandGrip {
    /// Create a hand size category.
    #[must_use]
    pub const fn new(label: &'static str, circumference_mm: f64) -> Self {
        Self {
            label,
            circumference_mm,
        }
    }

    /// Largest diameter in millimetres this hand holds comfortably.
    #[must_use]
    pub fn comfortable_diameter(&self) -> f64 {
        self.circumference_mm * COMFORTABLE_WRAP / PI
    }

    /// Largest diameter in millimetres this hand can grip at all.
    #[must_use]
    pub fn maximum_diameter(&self) -> f64 {
        self.circumference_mm * MAXIMUM_WRAP / PI
    }
}
