//! Consistency checks between the corrected and historical formulations.
//!
//! The figure scripts that produced the paper's first drafts omitted the packing
//! factor and, in places, hard-coded diameters. These checks recompute each value
//! both ways so the discrepancies can be reported rather than silently fixed.

use serde::Serialize;
use tracing::{debug, warn};

use crate::catalog::{RecordedDiameter, RopeProduction, TRANSPORT_ROPE_SETS};
use crate::errors::SizingError;
use crate::materials::MaterialConstants;
use crate::model::{breaking_load, mass_to_working_load, quadratic_breaking_load, required_diameter};

/// A quantity computed with and without the packing correction.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PackingComparison {
    /// Input value: diameter in mm or mass in t.
    pub input: f64,
    /// Result with the packing factor applied.
    pub with_packing: f64,
    /// Result with the packing factor omitted.
    pub without_packing: f64,
}

impl PackingComparison {
    /// `without_packing − with_packing`.
    #[must_use]
    pub fn discrepancy(&self) -> f64 {
        self.without_packing - self.with_packing
    }

    /// Discrepancy as a fraction of the corrected value.
    #[must_use]
    pub fn relative_discrepancy(&self) -> f64 {
        self.discrepancy() / self.with_packing
    }
}

/// Breaking loads of `diameters_mm` computed both ways.
///
/// # Errors
///
/// Returns the first [`SizingError`] raised by a diameter.
pub fn compare_breaking_loads(
    diameters_mm: &[f64],
    constants: &MaterialConstants,
) -> Result<Vec<PackingComparison>, SizingError> {
    diameters_mm
        .iter()
        .map(|&diameter| {
            Ok(PackingComparison {
                input: diameter,
                with_packing: breaking_load(diameter, constants, true)?,
                without_packing: breaking_load(diameter, constants, false)?,
            })
        })
        .collect()
}

/// Required diameters for `masses_tons` computed both ways.
///
/// # Examples
/// ```
/// use moai_rope::{compare_required_diameters, MaterialConstants};
///
/// let constants = MaterialConstants::triumfetta_cordifolia();
/// let rows = compare_required_diameters(&[86.0], 10.0, &constants).expect("valid mass");
/// assert!(rows[0].discrepancy() < -9.0);
/// ```
///
/// # Errors
///
/// Returns the first [`SizingError`] raised by a mass.
pub fn compare_required_diameters(
    masses_tons: &[f64],
    safety_factor: f64,
    constants: &MaterialConstants,
) -> Result<Vec<PackingComparison>, SizingError> {
    masses_tons
        .iter()
        .map(|&mass| {
            let working_load = mass_to_working_load(mass)?;
            let comparison = PackingComparison {
                input: mass,
                with_packing: required_diameter(working_load, safety_factor, constants, true)?,
                without_packing: required_diameter(
                    working_load,
                    safety_factor,
                    constants,
                    false,
                )?,
            };
            debug!(
                mass_tons = mass,
                with_packing = comparison.with_packing,
                without_packing = comparison.without_packing,
                "compared required diameters"
            );
            Ok(comparison)
        })
        .collect()
}

/// Exact breaking load next to the quadratic shorthand `coefficient · d²`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ShorthandComparison {
    /// Diameter in millimetres.
    pub diameter_mm: f64,
    /// Breaking load from the full formula, packing included.
    pub exact: f64,
    /// Breaking load from the shorthand.
    pub shorthand: f64,
}

/// Compare the full breaking-load formula against a quadratic shorthand.
///
/// # Errors
///
/// Returns the first [`SizingError`] raised by a diameter.
pub fn compare_with_shorthand(
    diameters_mm: &[f64],
    coefficient: f64,
    constants: &MaterialConstants,
) -> Result<Vec<ShorthandComparison>, SizingError> {
    diameters_mm
        .iter()
        .map(|&diameter| {
            Ok(ShorthandComparison {
                diameter_mm: diameter,
                exact: breaking_load(diameter, constants, true)?,
                shorthand: quadratic_breaking_load(diameter, coefficient)?,
            })
        })
        .collect()
}

/// A hard-coded diameter next to the value the model produces for its mass.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RecordedDiscrepancy {
    /// Statue mass in metric tons.
    pub mass_tons: f64,
    /// Diameter in millimetres as recorded.
    pub recorded_mm: f64,
    /// Diameter in millimetres from the model.
    pub computed_mm: f64,
    /// `recorded − computed` in millimetres.
    pub error_mm: f64,
    /// Whether the error exceeds the audit tolerance.
    pub flagged: bool,
}

/// Recompute recorded diameters and flag those off by more than `tolerance_mm`.
///
/// # Errors
///
/// Returns the first [`SizingError`] raised by a record.
pub fn audit_recorded_diameters(
    records: &[RecordedDiameter],
    safety_factor: f64,
    constants: &MaterialConstants,
    include_packing: bool,
    tolerance_mm: f64,
) -> Result<Vec<RecordedDiscrepancy>, SizingError> {
    records
        .iter()
        .map(|record| {
            let working_load = mass_to_working_load(record.mass_tons)?;
            let computed_mm =
                required_diameter(working_load, safety_factor, constants, include_packing)?;
            let error_mm = record.diameter_mm - computed_mm;
            let flagged = error_mm.abs() > tolerance_mm;
            if flagged {
                warn!(
                    mass_tons = record.mass_tons,
                    recorded_mm = record.diameter_mm,
                    computed_mm,
                    include_packing,
                    "recorded diameter disagrees with the model"
                );
            }
            Ok(RecordedDiscrepancy {
                mass_tons: record.mass_tons,
                recorded_mm: record.diameter_mm,
                computed_mm,
                error_mm,
                flagged,
            })
        })
        .collect()
}

/// Recorded production figures next to the totals their own breakdown implies.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ProductionDiscrepancy {
    /// Statue mass in metric tons.
    pub mass_tons: f64,
    /// Sum of the stage durations in days.
    pub stage_total_days: f64,
    /// Production time as recorded, in days.
    pub recorded_days: f64,
    /// `recorded − stage total` in days.
    pub error_days: f64,
    /// Per-set labour multiplied by the rope sets one transport wears out.
    pub scaled_transport_person_days: f64,
    /// Transport labour as recorded, in person-days.
    pub recorded_transport_person_days: f64,
    /// Whether `error_days` exceeds the audit tolerance.
    pub flagged: bool,
}

/// Check each production record's total against the sum of its stages.
#[must_use]
pub fn audit_production_timeline(
    records: &[RopeProduction],
    tolerance_days: f64,
) -> Vec<ProductionDiscrepancy> {
    records
        .iter()
        .map(|record| {
            let stage_total_days = record.stage_total();
            let error_days = record.production_days - stage_total_days;
            let flagged = error_days.abs() > tolerance_days;
            if flagged {
                warn!(
                    mass_tons = record.mass_tons,
                    recorded_days = record.production_days,
                    stage_total_days,
                    "recorded production time disagrees with its stages"
                );
            }
            ProductionDiscrepancy {
                mass_tons: record.mass_tons,
                stage_total_days,
                recorded_days: record.production_days,
                error_days,
                scaled_transport_person_days: record.person_days_per_set * TRANSPORT_ROPE_SETS,
                recorded_transport_person_days: record.person_days_per_transport,
                flagged,
            }
        })
        .collect()
}

/// Fraction by which omitting packing overstates the breaking load, `1/η − 1`.
#[must_use]
pub fn packing_load_overestimate(constants: &MaterialConstants) -> f64 {
    1.0 / constants.packing_efficiency() - 1.0
}

/// Fraction by which omitting packing understates the required diameter, `1 − √η`.
#[must_use]
pub fn packing_diameter_underestimate(constants: &MaterialConstants) -> f64 {
    1.0 - constants.packing_efficiency().sqrt()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::catalog::{HISTORICAL_GRIP_FIGURE, HISTORICAL_PRODUCTION_TABLE, ROPE_PRODUCTION};
    use crate::model::PAPER_BREAKING_LOAD_COEFFICIENT;

    fn constants() -> MaterialConstants {
        MaterialConstants::triumfetta_cordifolia()
    }

    #[test]
    fn breaking_load_overestimate_matches_packing() {
        let rows = compare_breaking_loads(&[10.0, 20.0, 45.0], &constants()).expect("valid");
        for row in &rows {
            assert_relative_eq!(
                row.relative_discrepancy(),
                packing_load_overestimate(&constants()),
                max_relative = 1.0e-9
            );
        }
        assert!((packing_load_overestimate(&constants()) - 0.538).abs() < 0.001);
    }

    #[test]
    fn diameter_underestimate_matches_packing() {
        let rows = compare_required_diameters(&[4.0, 80.0, 86.0], 10.0, &constants())
            .expect("valid");
        for row in &rows {
            assert!(row.without_packing < row.with_packing);
            assert_relative_eq!(
                -row.relative_discrepancy(),
                packing_diameter_underestimate(&constants()),
                max_relative = 1.0e-9
            );
        }
        assert!((packing_diameter_underestimate(&constants()) - 0.194).abs() < 0.001);
    }

    #[test]
    fn grip_figure_values_are_flagged() {
        let audit =
            audit_recorded_diameters(&HISTORICAL_GRIP_FIGURE, 10.0, &constants(), true, 1.0)
                .expect("valid");
        assert_eq!(audit.len(), 4);
        let paro = audit.last().expect("paro present");
        assert!((paro.computed_mm - 49.5).abs() < 0.05);
        assert!(paro.flagged);
        assert!(paro.error_mm < -9.0);
        assert!(audit.iter().filter(|entry| entry.flagged).count() >= 2);
    }

    #[test]
    fn production_table_reproduces_historical_formulation() {
        let audit = audit_recorded_diameters(
            &HISTORICAL_PRODUCTION_TABLE,
            10.0,
            &constants(),
            false,
            0.1,
        )
        .expect("valid");
        assert!(audit.iter().all(|entry| !entry.flagged));

        let corrected = audit_recorded_diameters(
            &HISTORICAL_PRODUCTION_TABLE,
            10.0,
            &constants(),
            true,
            0.1,
        )
        .expect("valid");
        assert!(corrected.iter().all(|entry| entry.flagged));
    }

    #[test]
    fn shorthand_tracks_exact_formula() {
        let rows = compare_with_shorthand(
            &[10.0, 20.0, 45.0],
            PAPER_BREAKING_LOAD_COEFFICIENT,
            &constants(),
        )
        .expect("valid");
        for row in rows {
            assert_relative_eq!(row.shorthand, row.exact, max_relative = 0.01);
        }
    }

    #[test]
    fn production_audit_flags_the_large_classes() {
        let audit = audit_production_timeline(&ROPE_PRODUCTION, 1.0);
        let flagged: Vec<f64> = audit
            .iter()
            .filter(|entry| entry.flagged)
            .map(|entry| entry.mass_tons)
            .collect();
        assert_eq!(flagged, vec![40.0, 60.0, 86.0]);
        assert_relative_eq!(audit[4].stage_total_days, 116.45, epsilon = 1.0e-9);
        assert_relative_eq!(audit[4].error_days, -14.45, epsilon = 1.0e-9);
        assert_relative_eq!(audit[0].scaled_transport_person_days, 312.0);
    }
}
