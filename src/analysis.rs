use moai_rope::{
    audit_production_timeline, audit_recorded_diameters, breaking_load, compare_breaking_loads,
    compare_required_diameters, compare_with_shorthand, mass_to_working_load,
    packing_diameter_underestimate, packing_load_overestimate, required_diameter, GripClass,
    ModelConfig, PackingComparison, ProductionDiscrepancy, RecordedDiscrepancy, ReportRow,
    SafetyFactor, ShorthandComparison, SizingError, DOCUMENTED_MOAI, HISTORICAL_GRIP_FIGURE,
    HISTORICAL_PRODUCTION_TABLE, MARKED_DIAMETERS, PAPER_BREAKING_LOAD_COEFFICIENT,
    PARO_MASS_REVISION, PARO_NEIGHBOURHOOD, REFERENCE_WORKING_LOADS, REQUIREMENT_MASSES,
    ROPE_PRODUCTION, TRANSPORT_SCENARIOS,
};

/// Largest accepted gap in days between a recorded production time and its stages.
pub const PRODUCTION_TOLERANCE_DAYS: f64 = 1.0;

/// Required diameter and grip class for one named statue.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecimenAssessment {
    /// Statue or category name.
    pub name: String,
    /// Mass in metric tons.
    pub mass_tons: f64,
    /// Required diameter in millimetres under the configured safety factor.
    pub diameter_mm: f64,
    /// Required diameter in millimetres with a safety factor of 5.
    pub reduced_diameter_mm: f64,
    /// Grip class of `diameter_mm`.
    pub grip: GripClass,
    /// People per rope team, known only for the transport scenarios.
    pub team_size: Option<u32>,
}

/// Breaking load for each diameter, as report rows.
pub fn breaking_load_rows(
    config: &ModelConfig,
    diameters_mm: &[f64],
) -> Result<Vec<ReportRow>, SizingError> {
    let model = config.model();
    diameters_mm
        .iter()
        .map(|&diameter| {
            let load = model.breaking_load(diameter)?;
            Ok(ReportRow::new(format!("{diameter} mm rope"), diameter, load))
        })
        .collect()
}

/// Required diameter for each mass, as report rows.
pub fn required_diameter_rows(
    config: &ModelConfig,
    masses_tons: &[f64],
) -> Result<Vec<ReportRow>, SizingError> {
    let model = config.model();
    masses_tons
        .iter()
        .map(|&mass| {
            let diameter = model.required_diameter_for_mass(mass)?;
            Ok(ReportRow::new(format!("{mass} t statue"), mass, diameter))
        })
        .collect()
}

/// Assess every documented statue and every transport scenario.
pub fn assess_specimens(config: &ModelConfig) -> Result<Vec<SpecimenAssessment>, SizingError> {
    let model = config.model();
    let reduced = model.with_safety_factor(SafetyFactor::REDUCED);
    let named = DOCUMENTED_MOAI
        .iter()
        .map(|moai| (moai.name, moai.mass_tons, None::<u32>))
        .chain(TRANSPORT_SCENARIOS.iter().map(|scenario| {
            (
                scenario.category,
                scenario.mass_tons,
                Some(scenario.team_size),
            )
        }));
    named
        .map(|(name, mass_tons, team_size)| {
            let diameter_mm = model.required_diameter_for_mass(mass_tons)?;
            Ok(SpecimenAssessment {
                name: name.to_string(),
                mass_tons,
                diameter_mm,
                reduced_diameter_mm: reduced.required_diameter_for_mass(mass_tons)?,
                grip: config.limits.classify(diameter_mm),
                team_size,
            })
        })
        .collect()
}

/// Breaking load of a reference rope next to its safe working load.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SafetyLineCheck {
    /// Diameter of the reference rope in millimetres.
    pub diameter_mm: f64,
    /// Margin used for the line.
    pub safety_factor: f64,
    /// Breaking load in kilonewtons.
    pub breaking_load: f64,
    /// Breaking load divided by the margin.
    pub safe_working_load: f64,
    /// Diameters required for the reference working loads under the same margin.
    pub requirements: [(f64, f64); 2],
}

/// Everything the `audit` command reports.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditSummary {
    /// Breaking loads at the marked diameters, both formulations.
    pub breaking_loads: Vec<PackingComparison>,
    /// Required diameters at the panel masses, both formulations.
    pub diameters: Vec<PackingComparison>,
    /// Required diameters for the transport scenarios, both formulations.
    pub scenarios: Vec<PackingComparison>,
    /// Exact breaking loads against the `0.35 · D²` shorthand.
    pub shorthand: Vec<ShorthandComparison>,
    /// Hand-picked diameters of the grip figure against the corrected model.
    pub grip_figure: Vec<RecordedDiscrepancy>,
    /// Production table diameters against the packing-omitted model.
    pub production_table: Vec<RecordedDiscrepancy>,
    /// The "breaking load / 8" line check.
    pub safety_line: SafetyLineCheck,
    /// Paro's required diameter before and after the mass revision.
    pub paro_revision: Vec<(f64, f64)>,
    /// Rope production records against their stage breakdown.
    pub production: Vec<ProductionDiscrepancy>,
    /// Fraction by which omitting packing overstates breaking load.
    pub load_overestimate: f64,
    /// Fraction by which omitting packing understates diameter.
    pub diameter_underestimate: f64,
}

/// Run every consistency check against the configured constants.
pub fn run_audit(config: &ModelConfig, tolerance_mm: f64) -> Result<AuditSummary, SizingError> {
    let constants = &config.constants;
    let safety_factor = config.safety_factor.value();
    // Recorded figures were all drawn with the paper's margin.
    let recorded_margin = SafetyFactor::PAPER.value();
    let scenario_masses: Vec<f64> = TRANSPORT_SCENARIOS
        .iter()
        .map(|scenario| scenario.mass_tons)
        .collect();

    let margin = SafetyFactor::WORKING_MARGIN.value();
    let reference = MARKED_DIAMETERS[0];
    let reference_load = breaking_load(reference, constants, true)?;
    let mut requirements = [(0.0, 0.0); 2];
    for (slot, &working_load) in requirements.iter_mut().zip(REFERENCE_WORKING_LOADS.iter()) {
        let diameter = required_diameter(working_load, margin, constants, true)?;
        *slot = (working_load, diameter);
    }

    let corrected = config.model().with_packing(true);
    let mut paro_revision = Vec::with_capacity(PARO_NEIGHBOURHOOD.len());
    for mass in PARO_NEIGHBOURHOOD {
        paro_revision.push((mass, corrected.required_diameter(mass_to_working_load(mass)?)?));
    }

    Ok(AuditSummary {
        breaking_loads: compare_breaking_loads(&MARKED_DIAMETERS, constants)?,
        diameters: compare_required_diameters(&REQUIREMENT_MASSES, safety_factor, constants)?,
        scenarios: compare_required_diameters(&scenario_masses, safety_factor, constants)?,
        shorthand: compare_with_shorthand(
            &MARKED_DIAMETERS,
            PAPER_BREAKING_LOAD_COEFFICIENT,
            constants,
        )?,
        grip_figure: audit_recorded_diameters(
            &HISTORICAL_GRIP_FIGURE,
            recorded_margin,
            constants,
            true,
            tolerance_mm,
        )?,
        production_table: audit_recorded_diameters(
            &HISTORICAL_PRODUCTION_TABLE,
            recorded_margin,
            constants,
            false,
            tolerance_mm,
        )?,
        safety_line: SafetyLineCheck {
            diameter_mm: reference,
            safety_factor: margin,
            breaking_load: reference_load,
            safe_working_load: reference_load / margin,
            requirements,
        },
        paro_revision,
        production: audit_production_timeline(&ROPE_PRODUCTION, PRODUCTION_TOLERANCE_DAYS),
        load_overestimate: packing_load_overestimate(constants),
        diameter_underestimate: packing_diameter_underestimate(constants),
    })
}

/// Paro's mass before and after revision, looked up in an audit's sensitivity rows.
pub fn paro_revision_pair(summary: &AuditSummary) -> Option<((f64, f64), (f64, f64))> {
    let (before, after) = PARO_MASS_REVISION;
    let find = |mass: f64| {
        summary
            .paro_revision
            .iter()
            .copied()
            .find(|&(candidate, _)| (candidate - mass).abs() < f64::EPSILON)
    };
    Some((find(before)?, find(after)?))
}
