//! Closed-form relationship between rope diameter and load capacity.
//!
//! The breaking load of a fibre rope is approximated as
//!
//! ```text
//! F = σ · π · (d/2)² · η_pack · η_cons / 1000
//! ```
//!
//! with `σ` in MPa, `d` in mm and `F` in kN. The packing factor `η_pack` is an
//! explicit toggle on every operation so the packing-omitted formulation used by
//! the historical figures stays reproducible next to the corrected one.

use std::f64::consts::PI;

use crate::errors::{MaterialError, SizingError};
use crate::materials::{is_positive, LoadRequirement, MaterialConstants, RopeSpecimen, SafetyFactor};

/// Working load per metric ton of statue, in kilonewtons.
///
/// The paper treats rope tension as numerically equal to the statue mass in tons.
/// This is a modelling assumption and is kept exact.
pub const KN_PER_TON: f64 = 1.0;

/// Coefficient of the paper's `0.35 × D²` breaking-load shorthand.
pub const PAPER_BREAKING_LOAD_COEFFICIENT: f64 = 0.35;

/// Newtons per kilonewton; the model computes newtons from MPa × mm².
const NEWTONS_PER_KILONEWTON: f64 = 1000.0;

/// Predicted breaking load of a rope in kilonewtons.
///
/// # Errors
///
/// Returns [`SizingError::NonPositiveDiameter`] when `diameter_mm` is not strictly
/// positive and finite.
///
/// # Examples
/// ```
/// use moai_rope::{breaking_load, MaterialConstants};
///
/// let constants = MaterialConstants::triumfetta_cordifolia();
/// let load = breaking_load(10.0, &constants, true).expect("valid diameter");
/// assert!((load - 35.07).abs() < 0.01);
/// ```
pub fn breaking_load(
    diameter_mm: f64,
    constants: &MaterialConstants,
    include_packing: bool,
) -> Result<f64, SizingError> {
    let rope = RopeSpecimen::new(diameter_mm)?;
    let effective_area = rope.effective_area(constants, include_packing);
    Ok(constants.tensile_strength() * effective_area * constants.construction_efficiency()
        / NEWTONS_PER_KILONEWTON)
}

/// Breaking load required to carry `working_load_kn` with `safety_factor` margin.
///
/// # Errors
///
/// Returns [`SizingError`] when either argument is not strictly positive and finite.
pub fn required_breaking_load(working_load_kn: f64, safety_factor: f64) -> Result<f64, SizingError> {
    if !is_positive(working_load_kn) {
        return Err(SizingError::NonPositiveWorkingLoad { working_load_kn });
    }
    let safety_factor = SafetyFactor::new(safety_factor)?;
    Ok(working_load_kn * safety_factor.value())
}

/// Rope diameter in millimetres needed to carry `working_load_kn` with the given margin.
///
/// This is the algebraic inverse of [`breaking_load`].
///
/// # Errors
///
/// Returns [`SizingError::NonPositiveWorkingLoad`] or
/// [`SizingError::NonPositiveSafetyFactor`] for arguments outside their domain, and
/// [`SizingError::InvalidConfiguration`] if the constants multiply to a
/// denominator that is zero or not finite.
///
/// # Examples
/// ```
/// use moai_rope::{required_diameter, MaterialConstants};
///
/// let constants = MaterialConstants::triumfetta_cordifolia();
/// let historical = required_diameter(86.0, 10.0, &constants, false).expect("valid load");
/// let corrected = required_diameter(86.0, 10.0, &constants, true).expect("valid load");
/// assert!((historical - 39.9).abs() < 0.05);
/// assert!((corrected - 49.5).abs() < 0.05);
/// ```
pub fn required_diameter(
    working_load_kn: f64,
    safety_factor: f64,
    constants: &MaterialConstants,
    include_packing: bool,
) -> Result<f64, SizingError> {
    let breaking = required_breaking_load(working_load_kn, safety_factor)?;
    let denominator = constants.tensile_strength()
        * constants.construction_efficiency()
        * PI
        * constants.packing_factor(include_packing);
    if !is_positive(denominator) {
        return Err(SizingError::InvalidConfiguration(
            MaterialError::DegenerateEffectiveStrength {
                effective_strength: denominator,
            },
        ));
    }
    Ok(2.0 * (breaking * NEWTONS_PER_KILONEWTON / denominator).sqrt())
}

/// Working load in kilonewtons for a statue of `mass_tons`.
///
/// # Errors
///
/// Returns [`SizingError::NonPositiveMass`] when the mass is not strictly positive and
/// finite.
pub fn mass_to_working_load(mass_tons: f64) -> Result<f64, SizingError> {
    Ok(LoadRequirement::new(mass_tons)?.working_load())
}

/// Load a rope can carry in service while keeping `safety_factor` margin.
///
/// # Errors
///
/// Returns [`SizingError`] when the diameter or safety factor is outside its domain.
pub fn safe_working_load(
    diameter_mm: f64,
    safety_factor: f64,
    constants: &MaterialConstants,
    include_packing: bool,
) -> Result<f64, SizingError> {
    let safety_factor = SafetyFactor::new(safety_factor)?;
    Ok(breaking_load(diameter_mm, constants, include_packing)? / safety_factor.value())
}

/// Coefficient `k` such that the breaking load equals `k · d²`.
#[must_use]
pub fn breaking_load_coefficient(constants: &MaterialConstants, include_packing: bool) -> f64 {
    constants.tensile_strength()
        * PI
        / 4.0
        * constants.packing_factor(include_packing)
        * constants.construction_efficiency()
        / NEWTONS_PER_KILONEWTON
}

/// Breaking load from the quadratic shorthand `coefficient · d²`.
///
/// # Errors
///
/// Returns [`SizingError::NonPositiveDiameter`] when `diameter_mm` is not strictly
/// positive and finite.
pub fn quadratic_breaking_load(diameter_mm: f64, coefficient: f64) -> Result<f64, SizingError> {
    let rope = RopeSpecimen::new(diameter_mm)?;
    Ok(coefficient * rope.diameter_mm() * rope.diameter_mm())
}

/// Constants, margin and formulation bundled for repeated sizing calls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RopeModel {
    /// Fibre and construction constants.
    constants: MaterialConstants,
    /// Margin between working and breaking load.
    safety_factor: SafetyFactor,
    /// Whether the packing correction is applied.
    include_packing: bool,
}

impl RopeModel {
    /// Create a model.
    #[must_use]
    pub const fn new(
        constants: MaterialConstants,
        safety_factor: SafetyFactor,
        include_packing: bool,
    ) -> Self {
        Self {
            constants,
            safety_factor,
            include_packing,
        }
    }

    /// The corrected model with the paper's constants and a safety factor of 10.
    #[must_use]
    pub const fn paper() -> Self {
        Self::new(
            MaterialConstants::triumfetta_cordifolia(),
            SafetyFactor::PAPER,
            true,
        )
    }

    /// The same model with the packing correction switched on or off.
    #[must_use]
    pub const fn with_packing(self, include_packing: bool) -> Self {
        Self {
            include_packing,
            ..self
        }
    }

    /// The same model with a different safety factor.
    #[must_use]
    pub const fn with_safety_factor(self, safety_factor: SafetyFactor) -> Self {
        Self {
            safety_factor,
            ..self
        }
    }

    /// Material constants in use.
    #[must_use]
    pub const fn constants(&self) -> &MaterialConstants {
        &self.constants
    }

    /// Safety factor in use.
    #[must_use]
    pub const fn safety_factor(&self) -> SafetyFactor {
        self.safety_factor
    }

    /// Whether the packing correction is applied.
    #[must_use]
    pub const fn includes_packing(&self) -> bool {
        self.include_packing
    }

    /// Breaking load in kilonewtons for a rope of `diameter_mm`.
    ///
    /// # Errors
    ///
    /// See [`breaking_load`].
    pub fn breaking_load(&self, diameter_mm: f64) -> Result<f64, SizingError> {
        breaking_load(diameter_mm, &self.constants, self.include_packing)
    }

    /// Safe working load in kilonewtons for a rope of `diameter_mm`.
    ///
    /// # Errors
    ///
    /// See [`safe_working_load`].
    pub fn safe_working_load(&self, diameter_mm: f64) -> Result<f64, SizingError> {
        safe_working_load(
            diameter_mm,
            self.safety_factor.value(),
            &self.constants,
            self.include_packing,
        )
    }

    /// Diameter in millimetres needed for `working_load_kn`.
    ///
    /// # Errors
    ///
    /// See [`required_diameter`].
    pub fn required_diameter(&self, working_load_kn: f64) -> Result<f64, SizingError> {
        required_diameter(
            working_load_kn,
            self.safety_factor.value(),
            &self.constants,
            self.include_packing,
        )
    }

    /// Diameter in millimetres needed to move a statue of `mass_tons`.
    ///
    /// # Errors
    ///
    /// Returns [`SizingError::NonPositiveMass`] for invalid masses, otherwise see
    /// [`required_diameter`].
    pub fn required_diameter_for_mass(&self, mass_tons: f64) -> Result<f64, SizingError> {
        self.required_diameter(mass_to_working_load(mass_tons)?)
    }
}

impl Default for RopeModel {
    fn default() -> Self {
        Self::paper()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn paper_constants() -> MaterialConstants {
        MaterialConstants::triumfetta_cordifolia()
    }

    #[test]
    fn breaking_load_matches_paper_values() {
        let constants = paper_constants();
        let ten = breaking_load(10.0, &constants, true).expect("valid diameter");
        assert_relative_eq!(ten, PI * 25.0 * 916.0 * 0.65 * 0.75 / 1000.0, max_relative = 1.0e-12);
        assert!((ten - 35.0).abs() < 0.1);

        let forty_five = breaking_load(45.0, &constants, true).expect("valid diameter");
        assert!((forty_five - 710.2).abs() < 0.05);
    }

    #[test]
    fn historical_breaking_loads_omit_packing() {
        let constants = paper_constants();
        let forty_five = breaking_load(45.0, &constants, false).expect("valid diameter");
        assert!((forty_five - 1_092.6).abs() < 0.1);
    }

    #[test]
    fn packing_scales_breaking_load_exactly() {
        let constants = paper_constants();
        for diameter in [5.0, 10.0, 33.3, 60.0] {
            let with = breaking_load(diameter, &constants, true).expect("valid diameter");
            let without = breaking_load(diameter, &constants, false).expect("valid diameter");
            assert!(with < without);
            assert_relative_eq!(with / without, 0.65, max_relative = 1.0e-12);
        }
    }

    #[test]
    fn required_diameter_known_values() {
        let constants = paper_constants();
        let historical = required_diameter(86.0, 10.0, &constants, false).expect("valid load");
        assert!((historical - 39.9).abs() < 0.05);
        let corrected = required_diameter(86.0, 10.0, &constants, true).expect("valid load");
        assert!((corrected - 49.5).abs() < 0.05);
        assert_relative_eq!(historical / corrected, 0.65_f64.sqrt(), max_relative = 1.0e-12);
    }

    #[test]
    fn overflowing_strength_is_reported_as_such() {
        let constants = MaterialConstants::new(1.0e308, 1.0, 1.0).expect("finite constants");
        let error = required_diameter(86.0, 10.0, &constants, true).expect_err("overflow");
        match error {
            SizingError::InvalidConfiguration(MaterialError::DegenerateEffectiveStrength {
                effective_strength,
            }) => assert!(effective_strength.is_infinite()),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(error.to_string().contains("effective strength"));
    }

    #[test]
    fn required_diameter_inverts_breaking_load() {
        let constants = paper_constants();
        for include_packing in [true, false] {
            for diameter in [1.0, 8.9, 45.0, 120.0] {
                let load = breaking_load(diameter, &constants, include_packing).expect("valid");
                let back =
                    required_diameter(load, 1.0, &constants, include_packing).expect("valid");
                assert_relative_eq!(back, diameter, max_relative = 1.0e-9);
            }
        }
    }

    #[test]
    fn domain_violations_are_rejected() {
        let constants = paper_constants();
        assert_eq!(
            breaking_load(0.0, &constants, true),
            Err(SizingError::NonPositiveDiameter { diameter_mm: 0.0 })
        );
        assert_eq!(
            breaking_load(-5.0, &constants, true),
            Err(SizingError::NonPositiveDiameter { diameter_mm: -5.0 })
        );
        assert!(breaking_load(f64::NAN, &constants, true).is_err());
        assert_eq!(
            required_diameter(0.0, 10.0, &constants, true),
            Err(SizingError::NonPositiveWorkingLoad {
                working_load_kn: 0.0
            })
        );
        assert_eq!(
            required_diameter(86.0, -1.0, &constants, true),
            Err(SizingError::NonPositiveSafetyFactor {
                safety_factor: -1.0
            })
        );
        assert_eq!(
            mass_to_working_load(-2.0),
            Err(SizingError::NonPositiveMass { mass_tons: -2.0 })
        );
    }

    #[test]
    fn mass_conversion_is_one_to_one() {
        for mass in [4.3, 18.0, 86.0, 260.0] {
            assert_eq!(mass_to_working_load(mass), Ok(mass));
        }
    }

    #[test]
    fn safe_working_load_divides_by_margin() {
        let constants = paper_constants();
        let breaking = breaking_load(10.0, &constants, true).expect("valid");
        let safe = safe_working_load(10.0, 8.0, &constants, true).expect("valid");
        assert_relative_eq!(safe, breaking / 8.0);
        assert!((safe - 4.4).abs() < 0.05);
    }

    #[test]
    fn paper_coefficient_matches_shorthand() {
        let coefficient = breaking_load_coefficient(&paper_constants(), true);
        assert!((coefficient - PAPER_BREAKING_LOAD_COEFFICIENT).abs() < 0.001);
        let exact = breaking_load(20.0, &paper_constants(), true).expect("valid");
        let shorthand = quadratic_breaking_load(20.0, coefficient).expect("valid");
        assert_relative_eq!(exact, shorthand, max_relative = 1.0e-12);
    }

    #[test]
    fn rope_model_toggles_packing() {
        let corrected = RopeModel::paper();
        let historical = corrected.with_packing(false);
        assert!(corrected.includes_packing());
        assert!(!historical.includes_packing());

        let paro_corrected = corrected.required_diameter_for_mass(86.0).expect("valid");
        let paro_historical = historical.required_diameter_for_mass(86.0).expect("valid");
        assert!(paro_corrected > paro_historical);

        let reduced = corrected.with_safety_factor(SafetyFactor::REDUCED);
        let paro_reduced = reduced.required_diameter_for_mass(86.0).expect("valid");
        assert_relative_eq!(
            paro_reduced,
            paro_corrected / 2.0_f64.sqrt(),
            max_relative = 1.0e-12
        );
    }
}
