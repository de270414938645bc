//! Chart data for the paper's figures, computed from the configured model.

use moai_rope::{
    breaking_load_curve, linspace, mass_to_working_load, required_diameter_curve,
    safe_working_load_curve, Axis, Chart, ModelConfig, SafetyFactor, Series, SizingError,
    Threshold, COMMUNITY_DAILY_CAPACITY, DOCUMENTED_MOAI, HAND_SIZES, MARKED_DIAMETERS,
    OBSERVED_TRANSPORT_LIMIT_TONS, REFERENCE_WORKING_LOADS, REQUIREMENT_MASSES, ROPE_PRODUCTION,
    TRANSPORT_DISTANCE_KM, TRANSPORT_ROPE_SETS, TRANSPORT_SCENARIOS,
};
use ndarray::Array1;

/// Masses whose required diameters are marked on the grip-limit figure, in tons.
const GRIP_REFERENCE_MASSES: [f64; 4] = [4.0, 15.0, 80.0, 86.0];

fn packing_label(include_packing: bool) -> &'static str {
    if include_packing {
        "with packing"
    } else {
        "without packing"
    }
}

/// Breaking load and safe working load against rope diameter.
pub fn breaking_load_chart(config: &ModelConfig) -> Result<Chart, SizingError> {
    let diameters = linspace(5.0, 60.0, 100);
    let margin = SafetyFactor::WORKING_MARGIN.value();
    let loads = breaking_load_curve(&diameters, &config.constants, config.include_packing)?;
    let safe = safe_working_load_curve(
        &diameters,
        margin,
        &config.constants,
        config.include_packing,
    )?;
    let marked = Array1::from_vec(MARKED_DIAMETERS.to_vec());
    let marked_loads = breaking_load_curve(&marked, &config.constants, config.include_packing)?;

    let thresholds = REFERENCE_WORKING_LOADS
        .iter()
        .map(|&load| Threshold::new(format!("Working load {load:.0} kN"), load, Axis::Y));

    Ok(Chart::new(
        format!(
            "Rope breaking load ({})",
            packing_label(config.include_packing)
        ),
        "Rope diameter (mm)",
        "Load (kN)",
    )
    .with_series(Series::from_xy(
        "Breaking load",
        diameters.iter().copied(),
        loads.iter().copied(),
    ))
    .with_series(Series::from_xy(
        format!("Safe working load (BL/{margin:.0})"),
        diameters.iter().copied(),
        safe.iter().copied(),
    ))
    .with_series(Series::from_xy(
        "Marked diameters",
        marked.iter().copied(),
        marked_loads.iter().copied(),
    ))
    .with_thresholds(thresholds))
}

/// Required diameter at the panel masses for the configured and reduced margins.
pub fn required_diameter_chart(config: &ModelConfig) -> Result<Chart, SizingError> {
    let masses = Array1::from_vec(REQUIREMENT_MASSES.to_vec());
    let mut chart = Chart::new(
        "Required rope diameter",
        "Statue mass (t)",
        "Rope diameter (mm)",
    );
    for safety_factor in [config.safety_factor, SafetyFactor::REDUCED] {
        let diameters = required_diameter_curve(
            &masses,
            safety_factor.value(),
            &config.constants,
            config.include_packing,
        )?;
        chart = chart.with_series(Series::from_xy(
            format!("SF = {}", safety_factor.value()),
            masses.iter().copied(),
            diameters.iter().copied(),
        ));
    }
    Ok(chart.with_thresholds([Threshold::new(
        format!("Practical limit ({:.0} mm)", config.limits.practical_mm()),
        config.limits.practical_mm(),
        Axis::Y,
    )]))
}

/// Required diameter across the full range of statue masses.
pub fn moai_progression_chart(config: &ModelConfig) -> Result<Chart, SizingError> {
    let masses = linspace(1.0, 300.0, 500);
    let mut chart = Chart::new(
        "Rope diameter for moai of increasing mass",
        "Statue mass (t)",
        "Rope diameter (mm)",
    );
    for safety_factor in [config.safety_factor, SafetyFactor::REDUCED] {
        let diameters = required_diameter_curve(
            &masses,
            safety_factor.value(),
            &config.constants,
            config.include_packing,
        )?;
        chart = chart.with_series(Series::from_xy(
            format!("SF = {}", safety_factor.value()),
            masses.iter().copied(),
            diameters.iter().copied(),
        ));
    }

    for (name, transported) in [("Transported moai", true), ("Never moved", false)] {
        let masses = Array1::from_iter(
            DOCUMENTED_MOAI
                .iter()
                .filter(|moai| moai.transported == transported)
                .map(|moai| moai.mass_tons),
        );
        let diameters = required_diameter_curve(
            &masses,
            config.safety_factor.value(),
            &config.constants,
            config.include_packing,
        )?;
        chart = chart.with_series(Series::from_xy(
            name,
            masses.iter().copied(),
            diameters.iter().copied(),
        ));
    }

    Ok(chart
        .with_thresholds(config.limits.thresholds())
        .with_thresholds([Threshold::new(
            format!("Largest transported ({OBSERVED_TRANSPORT_LIMIT_TONS:.0} t)"),
            OBSERVED_TRANSPORT_LIMIT_TONS,
            Axis::X,
        )]))
}

/// Grippable diameter against hand size, with the diameters the model asks for.
pub fn grip_limits_chart(config: &ModelConfig) -> Result<Chart, SizingError> {
    let model = config.model();
    let circumferences = HAND_SIZES.iter().map(|hand| hand.circumference_mm);

    let mut thresholds = Vec::with_capacity(GRIP_REFERENCE_MASSES.len());
    for mass in GRIP_REFERENCE_MASSES {
        let diameter = model.required_diameter(mass_to_working_load(mass)?)?;
        thresholds.push(Threshold::new(
            format!("{mass:.0} t moai ({diameter:.1} mm)"),
            diameter,
            Axis::Y,
        ));
    }

    Ok(Chart::new(
        "Grip limits by hand size",
        "Hand circumference (mm)",
        "Rope diameter (mm)",
    )
    .with_series(Series::from_xy(
        "Comfortable grip",
        circumferences.clone(),
        HAND_SIZES.iter().map(|hand| hand.comfortable_diameter()),
    ))
    .with_series(Series::from_xy(
        "Maximum grip",
        circumferences,
        HAND_SIZES.iter().map(|hand| hand.maximum_diameter()),
    ))
    .with_thresholds(thresholds))
}

/// Required diameter with and without the packing correction.
pub fn packing_comparison_chart(config: &ModelConfig) -> Result<Chart, SizingError> {
    let masses = linspace(1.0, 100.0, 100);
    let safety_factor = config.safety_factor.value();
    let mut chart = Chart::new(
        format!("Effect of the packing factor (SF = {safety_factor})"),
        "Statue mass (t)",
        "Rope diameter (mm)",
    );
    for include_packing in [true, false] {
        let diameters =
            required_diameter_curve(&masses, safety_factor, &config.constants, include_packing)?;
        chart = chart.with_series(Series::from_xy(
            packing_label(include_packing),
            masses.iter().copied(),
            diameters.iter().copied(),
        ));
    }
    Ok(chart.with_thresholds([Threshold::new(
        format!("Practical limit ({:.0} mm)", config.limits.practical_mm()),
        config.limits.practical_mm(),
        Axis::Y,
    )]))
}

/// Rope diameter and rope team size for each find-site category.
///
/// Categories are drawn in order of mass so the series read left to right.
pub fn transport_scenarios_chart(config: &ModelConfig) -> Result<Chart, SizingError> {
    let model = config.model();
    let mut scenarios = TRANSPORT_SCENARIOS;
    scenarios.sort_by(|a, b| a.mass_tons.total_cmp(&b.mass_tons));

    let mut diameters = Vec::with_capacity(scenarios.len());
    for scenario in &scenarios {
        diameters.push(model.required_diameter_for_mass(scenario.mass_tons)?);
    }
    let masses = scenarios.iter().map(|scenario| scenario.mass_tons);

    Ok(Chart::new(
        "Rope requirements across moai transport scenarios",
        "Statue mass (t)",
        "Rope diameter (mm) / people per rope team",
    )
    .with_series(Series::from_xy(
        "Rope diameter (mm)",
        masses.clone(),
        diameters,
    ))
    .with_series(Series::from_xy(
        "People per rope team",
        masses,
        scenarios.iter().map(|scenario| f64::from(scenario.team_size)),
    ))
    .with_thresholds([Threshold::new(
        format!(
            "Practical handling limit ({:.0} mm)",
            config.limits.practical_mm()
        ),
        config.limits.practical_mm(),
        Axis::Y,
    )]))
}

/// Production time and labour for the rope sets of each statue class.
#[must_use]
pub fn production_investment_chart() -> Chart {
    let masses = ROPE_PRODUCTION.iter().map(|row| row.mass_tons);
    Chart::new(
        "Rope production investment",
        "Statue mass (t)",
        "Days / person-days",
    )
    .with_series(Series::from_xy(
        "Production time per set (days)",
        masses.clone(),
        ROPE_PRODUCTION.iter().map(|row| row.production_days),
    ))
    .with_series(Series::from_xy(
        "Sum of production stages (days)",
        masses.clone(),
        ROPE_PRODUCTION.iter().map(|row| row.stage_total()),
    ))
    .with_series(Series::from_xy(
        "Labour per set (person-days)",
        masses.clone(),
        ROPE_PRODUCTION.iter().map(|row| row.person_days_per_set),
    ))
    .with_series(Series::from_xy(
        format!("{TRANSPORT_DISTANCE_KM:.0} km transport, {TRANSPORT_ROPE_SETS:.0} sets (person-days)"),
        masses,
        ROPE_PRODUCTION
            .iter()
            .map(|row| row.person_days_per_transport),
    ))
    .with_thresholds([Threshold::new(
        format!("Daily community capacity ({COMMUNITY_DAILY_CAPACITY:.0} person-days)"),
        COMMUNITY_DAILY_CAPACITY,
        Axis::Y,
    )])
}

/// Every figure, paired with the file stem it is written under.
pub fn all_charts(config: &ModelConfig) -> Result<Vec<(&'static str, Chart)>, SizingError> {
    Ok(vec![
        ("breaking_load", breaking_load_chart(config)?),
        ("required_diameter", required_diameter_chart(config)?),
        ("moai_progression", moai_progression_chart(config)?),
        ("grip_limits", grip_limits_chart(config)?),
        ("packing_comparison", packing_comparison_chart(config)?),
        ("transport_scenarios", transport_scenarios_chart(config)?),
        ("production_investment", production_investment_chart()),
    ])
}
