//! Element-wise evaluation of the model over ordered series.
//!
//! Outputs always have the length and ordering of their inputs because chart
//! and report sinks consume them positionally.

use ndarray::Array1;
use tracing::debug;

use crate::errors::SizingError;
use crate::materials::MaterialConstants;
use crate::model::{breaking_load, mass_to_working_load, required_diameter, safe_working_load};

/// Evenly spaced samples from `start` to `end` inclusive.
///
/// # Examples
/// ```
/// use moai_rope::linspace;
///
/// let diameters = linspace(5.0, 60.0, 100);
/// assert_eq!(diameters.len(), 100);
/// assert_eq!(diameters[99], 60.0);
/// ```
#[must_use]
pub fn linspace(start: f64, end: f64, samples: usize) -> Array1<f64> {
    Array1::linspace(start, end, samples)
}

/// Apply `f` to every element, stopping at the first failure.
fn try_map<F>(values: &Array1<f64>, f: F) -> Result<Array1<f64>, SizingError>
where
    F: Fn(f64) -> Result<f64, SizingError>,
{
    let mapped = values
        .iter()
        .map(|&value| f(value))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Array1::from_vec(mapped))
}

/// Breaking load in kilonewtons for every diameter in `diameters_mm`.
///
/// # Errors
///
/// Returns the first [`SizingError`] raised by an element.
pub fn breaking_load_curve(
    diameters_mm: &Array1<f64>,
    constants: &MaterialConstants,
    include_packing: bool,
) -> Result<Array1<f64>, SizingError> {
    debug!(
        samples = diameters_mm.len(),
        include_packing, "evaluating breaking load curve"
    );
    try_map(diameters_mm, |diameter| {
        breaking_load(diameter, constants, include_packing)
    })
}

/// Safe working load in kilonewtons for every diameter in `diameters_mm`.
///
/// # Errors
///
/// Returns the first [`SizingError`] raised by an element.
pub fn safe_working_load_curve(
    diameters_mm: &Array1<f64>,
    safety_factor: f64,
    constants: &MaterialConstants,
    include_packing: bool,
) -> Result<Array1<f64>, SizingError> {
    try_map(diameters_mm, |diameter| {
        safe_working_load(diameter, safety_factor, constants, include_packing)
    })
}

/// Working load in kilonewtons for every mass in `masses_tons`.
///
/// # Errors
///
/// Returns the first [`SizingError`] raised by an element.
pub fn working_load_curve(masses_tons: &Array1<f64>) -> Result<Array1<f64>, SizingError> {
    try_map(masses_tons, mass_to_working_load)
}

/// Required rope diameter in millimetres for every statue mass in `masses_tons`.
///
/// # Errors
///
/// Returns the first [`SizingError`] raised by an element.
pub fn required_diameter_curve(
    masses_tons: &Array1<f64>,
    safety_factor: f64,
    constants: &MaterialConstants,
    include_packing: bool,
) -> Result<Array1<f64>, SizingError> {
    debug!(
        samples = masses_tons.len(),
        safety_factor, include_packing, "evaluating required diameter curve"
    );
    try_map(masses_tons, |mass| {
        let working_load = mass_to_working_load(mass)?;
        required_diameter(working_load, safety_factor, constants, include_packing)
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use ndarray::array;

    use super::*;

    #[test]
    fn linspace_includes_both_endpoints() {
        let masses = linspace(1.0, 300.0, 500);
        assert_eq!(masses.len(), 500);
        assert_relative_eq!(masses[0], 1.0);
        assert_relative_eq!(masses[499], 300.0, max_relative = 1.0e-12);
    }

    #[test]
    fn curves_preserve_input_order() {
        let constants = MaterialConstants::triumfetta_cordifolia();
        let masses = array![86.0, 4.0, 260.0, 18.0];
        let diameters = required_diameter_curve(&masses, 10.0, &constants, true).expect("valid");
        assert_eq!(diameters.len(), masses.len());
        for (mass, diameter) in masses.iter().zip(diameters.iter()) {
            let expected = required_diameter(*mass, 10.0, &constants, true).expect("valid");
            assert_relative_eq!(*diameter, expected);
        }
        assert!(diameters[2] > diameters[0]);
        assert!(diameters[1] < diameters[3]);
    }

    #[test]
    fn breaking_load_curve_is_increasing() {
        let constants = MaterialConstants::triumfetta_cordifolia();
        let loads =
            breaking_load_curve(&linspace(5.0, 60.0, 100), &constants, true).expect("valid");
        assert!(loads.windows(2).into_iter().all(|pair| pair[0] < pair[1]));
        let safe = safe_working_load_curve(&linspace(5.0, 60.0, 100), 8.0, &constants, true)
            .expect("valid");
        assert_relative_eq!(safe[10] * 8.0, loads[10], max_relative = 1.0e-12);
    }

    #[test]
    fn first_invalid_element_aborts_the_sweep() {
        let constants = MaterialConstants::triumfetta_cordifolia();
        let error = breaking_load_curve(&array![10.0, 0.0, -5.0], &constants, true)
            .expect_err("zero diameter rejected");
        assert_eq!(error, SizingError::NonPositiveDiameter { diameter_mm: 0.0 });

        let error = working_load_curve(&array![4.0, -1.0]).expect_err("negative mass rejected");
        assert_eq!(error, SizingError::NonPositiveMass { mass_tons: -1.0 });
    }
}
