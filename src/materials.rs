//! Validated value types consumed by the rope sizing model.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::errors::{MaterialError, SizingError};
use crate::model::KN_PER_TON;

/// Return `true` when `value` is finite and strictly greater than zero.
pub(crate) fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Return `true` when `value` lies in the half-open interval (0, 1].
fn is_efficiency(value: f64) -> bool {
    is_positive(value) && value <= 1.0
}

/// Physical constants describing a fibre and the rope made from it.
///
/// The fields are private so that every instance has passed validation:
/// tensile strength is positive and both efficiencies lie in (0, 1].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMaterialConstants")]
pub struct MaterialConstants {
    /// Fibre tensile strength in megapascals.
    tensile_strength: f64,
    /// Fraction of the nominal cross-section occupied by load-bearing fibre.
    packing_efficiency: f64,
    /// Fraction of fibre strength retained after twisting or braiding.
    construction_efficiency: f64,
}

/// Unvalidated mirror of [`MaterialConstants`] used during deserialisation.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawMaterialConstants {
    /// Fibre tensile strength in megapascals.
    tensile_strength: f64,
    /// Packing efficiency.
    packing_efficiency: f64,
    /// Construction efficiency.
    construction_efficiency: f64,
}

impl TryFrom<RawMaterialConstants> for MaterialConstants {
    type Error = MaterialError;

    fn try_from(raw: RawMaterialConstants) -> Result<Self, Self::Error> {
        Self::new(
            raw.tensile_strength,
            raw.packing_efficiency,
            raw.construction_efficiency,
        )
    }
}

impl MaterialConstants {
    /// Tensile strength of *Triumfetta cordifolia* fibre in megapascals.
    pub const TRIUMFETTA_TENSILE_STRENGTH: f64 = 916.0;
    /// Fibre packing efficiency assumed by the paper.
    pub const PAPER_PACKING_EFFICIENCY: f64 = 0.65;
    /// Rope construction efficiency assumed by the paper.
    pub const PAPER_CONSTRUCTION_EFFICIENCY: f64 = 0.75;

    /// Build a validated set of constants.
    ///
    /// # Errors
    ///
    /// Returns [`MaterialError`] when the tensile strength is not strictly positive or
    /// either efficiency lies outside (0, 1].
    ///
    /// # Examples
    /// ```
    /// use moai_rope::{MaterialConstants, MaterialError};
    ///
    /// let error = MaterialConstants::new(916.0, 1.2, 0.75).expect_err("packing above one");
    /// assert_eq!(
    ///     error,
    ///     MaterialError::PackingEfficiencyOutOfRange { packing_efficiency: 1.2 }
    /// );
    /// ```
    pub fn new(
        tensile_strength: f64,
        packing_efficiency: f64,
        construction_efficiency: f64,
    ) -> Result<Self, MaterialError> {
        if !is_positive(tensile_strength) {
            return Err(MaterialError::NonPositiveTensileStrength { tensile_strength });
        }
        if !is_efficiency(packing_efficiency) {
            return Err(MaterialError::PackingEfficiencyOutOfRange { packing_efficiency });
        }
        if !is_efficiency(construction_efficiency) {
            return Err(MaterialError::ConstructionEfficiencyOutOfRange {
                construction_efficiency,
            });
        }
        Ok(Self {
            tensile_strength,
            packing_efficiency,
            construction_efficiency,
        })
    }

    /// Constants stated in the paper for *Triumfetta cordifolia* rope.
    #[must_use]
    pub const fn triumfetta_cordifolia() -> Self {
        Self {
            tensile_strength: Self::TRIUMFETTA_TENSILE_STRENGTH,
            packing_efficiency: Self::PAPER_PACKING_EFFICIENCY,
            construction_efficiency: Self::PAPER_CONSTRUCTION_EFFICIENCY,
        }
    }

    /// Fibre tensile strength in megapascals.
    #[must_use]
    pub const fn tensile_strength(&self) -> f64 {
        self.tensile_strength
    }

    /// Fibre packing efficiency.
    #[must_use]
    pub const fn packing_efficiency(&self) -> f64 {
        self.packing_efficiency
    }

    /// Rope construction efficiency.
    #[must_use]
    pub const fn construction_efficiency(&self) -> f64 {
        self.construction_efficiency
    }

    /// Factor applied to the nominal area, `packing_efficiency` or `1`.
    #[must_use]
    pub fn packing_factor(&self, include_packing: bool) -> f64 {
        if include_packing {
            self.packing_efficiency
        } else {
            1.0
        }
    }
}

impl Default for MaterialConstants {
    fn default() -> Self {
        Self::triumfetta_cordifolia()
    }
}

/// Multiplier from working load to required breaking load.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct SafetyFactor(f64);

impl SafetyFactor {
    /// Safety factor used for the paper's diameter requirements.
    pub const PAPER: Self = Self(10.0);
    /// Lower safety factor shown alongside the paper's requirement.
    pub const REDUCED: Self = Self(5.0);
    /// Margin drawn as the "breaking load / 8" line of the breaking-load figure.
    pub const WORKING_MARGIN: Self = Self(8.0);

    /// Build a validated safety factor.
    ///
    /// # Errors
    ///
    /// Returns [`SizingError::NonPositiveSafetyFactor`] when `value` is not strictly
    /// positive and finite.
    pub fn new(value: f64) -> Result<Self, SizingError> {
        if is_positive(value) {
            Ok(Self(value))
        } else {
            Err(SizingError::NonPositiveSafetyFactor {
                safety_factor: value,
            })
        }
    }

    /// Raw multiplier.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl Default for SafetyFactor {
    fn default() -> Self {
        Self::PAPER
    }
}

impl TryFrom<f64> for SafetyFactor {
    type Error = SizingError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SafetyFactor> for f64 {
    fn from(value: SafetyFactor) -> Self {
        value.0
    }
}

/// A rope of a given nominal diameter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RopeSpecimen {
    /// Nominal diameter in millimetres.
    diameter_mm: f64,
}

impl RopeSpecimen {
    /// Create a specimen.
    ///
    /// # Errors
    ///
    /// Returns [`SizingError::NonPositiveDiameter`] when the diameter is not strictly
    /// positive and finite.
    pub fn new(diameter_mm: f64) -> Result<Self, SizingError> {
        if is_positive(diameter_mm) {
            Ok(Self { diameter_mm })
        } else {
            Err(SizingError::NonPositiveDiameter { diameter_mm })
        }
    }

    /// Nominal diameter in millimetres.
    #[must_use]
    pub const fn diameter_mm(&self) -> f64 {
        self.diameter_mm
    }

    /// Nominal cross-sectional area `π·(d/2)²` in square millimetres.
    #[must_use]
    pub fn cross_sectional_area(&self) -> f64 {
        let radius = self.diameter_mm / 2.0;
        PI * radius * radius
    }

    /// Area assumed to carry load, with or without the packing correction.
    #[must_use]
    pub fn effective_area(&self, constants: &MaterialConstants, include_packing: bool) -> f64 {
        self.cross_sectional_area() * constants.packing_factor(include_packing)
    }
}

/// Mass of a statue that a rope team has to move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoadRequirement {
    /// Statue mass in metric tons.
    mass_tons: f64,
}

impl LoadRequirement {
    /// Create a load requirement.
    ///
    /// # Errors
    ///
    /// Returns [`SizingError::NonPositiveMass`] when the mass is not strictly positive
    /// and finite.
    pub fn new(mass_tons: f64) -> Result<Self, SizingError> {
        if is_positive(mass_tons) {
            Ok(Self { mass_tons })
        } else {
            Err(SizingError::NonPositiveMass { mass_tons })
        }
    }

    /// Statue mass in metric tons.
    #[must_use]
    pub const fn mass_tons(&self) -> f64 {
        self.mass_tons
    }

    /// Working load in kilonewtons, one kilonewton per ton.
    #[must_use]
    pub fn working_load(&self) -> f64 {
        self.mass_tons * KN_PER_TON
    }

    /// Breaking load the rope has to provide under `safety_factor`.
    #[must_use]
    pub fn required_breaking_load(&self, safety_factor: SafetyFactor) -> f64 {
        self.working_load() * safety_factor.value()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn paper_constants_are_valid() {
        let constants = MaterialConstants::triumfetta_cordifolia();
        let rebuilt = MaterialConstants::new(916.0, 0.65, 0.75).expect("paper values accepted");
        assert_eq!(constants, rebuilt);
        assert_eq!(MaterialConstants::default(), constants);
    }

    #[test]
    fn invalid_constants_are_rejected() {
        assert!(matches!(
            MaterialConstants::new(0.0, 0.65, 0.75),
            Err(MaterialError::NonPositiveTensileStrength { .. })
        ));
        assert!(matches!(
            MaterialConstants::new(f64::NAN, 0.65, 0.75),
            Err(MaterialError::NonPositiveTensileStrength { .. })
        ));
        assert_eq!(
            MaterialConstants::new(916.0, 1.2, 0.75),
            Err(MaterialError::PackingEfficiencyOutOfRange {
                packing_efficiency: 1.2
            })
        );
        assert!(matches!(
            MaterialConstants::new(916.0, 0.0, 0.75),
            Err(MaterialError::PackingEfficiencyOutOfRange { .. })
        ));
        assert_eq!(
            MaterialConstants::new(916.0, 0.65, -0.1),
            Err(MaterialError::ConstructionEfficiencyOutOfRange {
                construction_efficiency: -0.1
            })
        );
    }

    #[test]
    fn unit_efficiencies_are_accepted() {
        let constants = MaterialConstants::new(500.0, 1.0, 1.0).expect("upper bound inclusive");
        assert_relative_eq!(constants.packing_factor(true), 1.0);
    }

    #[test]
    fn constants_deserialise_through_validation() {
        let constants: MaterialConstants = serde_json::from_str(
            r#"{"tensile_strength": 916.0, "packing_efficiency": 0.65, "construction_efficiency": 0.75}"#,
        )
        .expect("valid constants parse");
        assert_eq!(constants, MaterialConstants::triumfetta_cordifolia());

        let error = serde_json::from_str::<MaterialConstants>(
            r#"{"tensile_strength": 916.0, "packing_efficiency": 1.2, "construction_efficiency": 0.75}"#,
        )
        .expect_err("packing above one rejected");
        assert!(error.to_string().contains("packing efficiency"));
    }

    #[test]
    fn safety_factor_rejects_non_positive_values() {
        assert_eq!(SafetyFactor::new(8.0).map(SafetyFactor::value), Ok(8.0));
        assert_eq!(
            SafetyFactor::new(0.0),
            Err(SizingError::NonPositiveSafetyFactor { safety_factor: 0.0 })
        );
        assert!(SafetyFactor::new(f64::INFINITY).is_err());
        assert!(serde_json::from_str::<SafetyFactor>("-1.0").is_err());
    }

    #[test]
    fn specimen_area_matches_circle() {
        let rope = RopeSpecimen::new(10.0).expect("valid diameter");
        assert_relative_eq!(rope.cross_sectional_area(), 25.0 * PI, max_relative = 1.0e-12);
        let constants = MaterialConstants::triumfetta_cordifolia();
        assert_relative_eq!(
            rope.effective_area(&constants, true),
            25.0 * PI * 0.65,
            max_relative = 1.0e-12
        );
        assert_relative_eq!(rope.effective_area(&constants, false), 25.0 * PI);
    }

    #[test]
    fn load_requirement_uses_one_kilonewton_per_ton() {
        let paro = LoadRequirement::new(86.0).expect("valid mass");
        assert_relative_eq!(paro.working_load(), 86.0);
        assert_relative_eq!(paro.required_breaking_load(SafetyFactor::PAPER), 860.0);
        assert!(LoadRequirement::new(0.0).is_err());
        assert!(RopeSpecimen::new(-5.0).is_err());
    }
}
