#![warn(clippy::all)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_doc_code_examples)]
#![warn(clippy::missing_docs_in_private_items)]
#![doc = include_str!("../README.md")]

mod audit;
mod catalog;
mod config;
mod errors;
mod limits;
mod materials;
mod model;
mod sink;
mod sweep;
mod units;

pub use audit::{
    audit_production_timeline, audit_recorded_diameters, compare_breaking_loads,
    compare_required_diameters, compare_with_shorthand, packing_diameter_underestimate,
    packing_load_overestimate, PackingComparison, ProductionDiscrepancy, RecordedDiscrepancy,
    ShorthandComparison,
};
pub use catalog::{
    MoaiSpecimen, RecordedDiameter, RopeProduction, TransportScenario, COMMUNITY_DAILY_CAPACITY,
    DOCUMENTED_MOAI, HARVESTING_DAYS_PER_KG, HISTORICAL_GRIP_FIGURE, HISTORICAL_PRODUCTION_TABLE,
    MARKED_DIAMETERS, OBSERVED_TRANSPORT_LIMIT_TONS, PARO_MASS_REVISION, PARO_NEIGHBOURHOOD,
    PREPARATION_DAYS, REFERENCE_WORKING_LOADS, REQUIREMENT_MASSES, RETTING_DAYS, ROPE_PRODUCTION,
    TRANSPORT_DISTANCE_KM, TRANSPORT_ROPE_SETS, TRANSPORT_SCENARIOS,
};
pub use config::{ModelConfig, CONFIG_VERSION};
pub use errors::{ConfigError, LimitsError, MaterialError, SinkError, SizingError};
pub use limits::{GripClass, HandGrip, HandlingLimits, HAND_SIZES};
pub use materials::{LoadRequirement, MaterialConstants, RopeSpecimen, SafetyFactor};
pub use model::{
    breaking_load, breaking_load_coefficient, mass_to_working_load, quadratic_breaking_load,
    required_breaking_load, required_diameter, safe_working_load, RopeModel, KN_PER_TON,
    PAPER_BREAKING_LOAD_COEFFICIENT,
};
pub use sink::{Axis, Chart, ChartSink, JsonChartSink, ReportRow, Series, Threshold};
pub use sweep::{
    breaking_load_curve, linspace, required_diameter_curve, safe_working_load_curve,
    working_load_curve,
};
pub use units::{breaking_force, required_diameter_length, working_force};
