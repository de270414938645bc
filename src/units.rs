//! Dimensioned wrappers around the model using `uom` quantities.

use uom::si::f64::{Force, Length, Mass, Pressure};
use uom::si::force::kilonewton;
use uom::si::length::millimeter;
use uom::si::mass::kilogram;
use uom::si::pressure::megapascal;

use crate::errors::SizingError;
use crate::materials::{MaterialConstants, SafetyFactor};
use crate::model::{breaking_load, mass_to_working_load, required_diameter};

/// Kilograms per metric ton.
const KILOGRAMS_PER_TON: f64 = 1000.0;

impl MaterialConstants {
    /// Fibre tensile strength as a pressure.
    #[must_use]
    pub fn tensile_strength_pressure(&self) -> Pressure {
        Pressure::new::<megapascal>(self.tensile_strength())
    }
}

/// Breaking force of a rope of the given diameter.
///
/// # Errors
///
/// See [`breaking_load`].
///
/// # Examples
/// ```
/// use moai_rope::{breaking_force, MaterialConstants};
/// use uom::si::f64::Length;
/// use uom::si::force::kilonewton;
/// use uom::si::length::centimeter;
///
/// let constants = MaterialConstants::triumfetta_cordifolia();
/// let force = breaking_force(Length::new::<centimeter>(1.0), &constants, true)
///     .expect("valid diameter");
/// assert!((force.get::<kilonewton>() - 35.07).abs() < 0.01);
/// ```
pub fn breaking_force(
    diameter: Length,
    constants: &MaterialConstants,
    include_packing: bool,
) -> Result<Force, SizingError> {
    let load = breaking_load(diameter.get::<millimeter>(), constants, include_packing)?;
    Ok(Force::new::<kilonewton>(load))
}

/// Rope diameter required to carry `working_load` with `safety_factor` margin.
///
/// # Errors
///
/// See [`required_diameter`].
pub fn required_diameter_length(
    working_load: Force,
    safety_factor: SafetyFactor,
    constants: &MaterialConstants,
    include_packing: bool,
) -> Result<Length, SizingError> {
    let diameter = required_diameter(
        working_load.get::<kilonewton>(),
        safety_factor.value(),
        constants,
        include_packing,
    )?;
    Ok(Length::new::<millimeter>(diameter))
}

/// Working load for a statue of `mass`, one kilonewton per metric ton.
///
/// # Errors
///
/// See [`mass_to_working_load`].
pub fn working_force(mass: Mass) -> Result<Force, SizingError> {
    let tons = mass.get::<kilogram>() / KILOGRAMS_PER_TON;
    Ok(Force::new::<kilonewton>(mass_to_working_load(tons)?))
}
