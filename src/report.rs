use crate::analysis::{paro_revision_pair, AuditSummary, SpecimenAssessment};
use moai_rope::{
    HandlingLimits, PackingComparison, RecordedDiscrepancy, ReportRow, TRANSPORT_ROPE_SETS,
};
use std::fmt::Write;

/// Render computed rows as an aligned table.
///
/// Values are printed to one decimal place, the precision the paper's tables use.
#[must_use]
pub fn render_rows(title: &str, unit: &str, rows: &[ReportRow]) -> String {
    let mut output = String::new();
    writeln!(&mut output, "{title}").expect("writing to string cannot fail");
    for row in rows {
        writeln!(&mut output, "  {:<28} {:>8.1} {unit}", row.label, row.result)
            .expect("writing to string cannot fail");
    }
    output
}

/// Render the required diameters and grip classes of the documented statues.
#[must_use]
pub fn render_verification(
    assessments: &[SpecimenAssessment],
    safety_factor: f64,
    include_packing: bool,
) -> String {
    let mut output = String::new();

    // State the formulation up front: the same statue can land in a different
    // grip class depending on the packing switch.
    writeln!(
        &mut output,
        "Required rope diameters (SF = {safety_factor}, packing {})",
        if include_packing { "included" } else { "omitted" }
    )
    .expect("writing to string cannot fail");
    writeln!(
        &mut output,
        "  {:<38} {:>8} {:>10} {:>10} {:>6}  {}",
        "Statue", "Mass (t)", "d (mm)", "SF=5 (mm)", "Team", "Grip"
    )
    .expect("writing to string cannot fail");

    for entry in assessments {
        let team = entry
            .team_size
            .map_or_else(|| "-".to_string(), |size| size.to_string());
        writeln!(
            &mut output,
            "  {:<38} {:>8.1} {:>10.1} {:>10.1} {:>6}  {}",
            entry.name,
            entry.mass_tons,
            entry.diameter_mm,
            entry.reduced_diameter_mm,
            team,
            entry.grip
        )
        .expect("writing to string cannot fail");
    }

    output
}

fn write_comparisons(output: &mut String, heading: &str, unit: &str, rows: &[PackingComparison]) {
    writeln!(output, "{heading}").expect("writing to string cannot fail");
    for row in rows {
        writeln!(
            output,
            "  {:>6.1} -> with packing {:>7.1} {unit}, without {:>7.1} {unit} ({:+.1}%)",
            row.input,
            row.with_packing,
            row.without_packing,
            row.relative_discrepancy() * 100.0
        )
        .expect("writing to string cannot fail");
    }
}

fn write_recorded(output: &mut String, heading: &str, rows: &[RecordedDiscrepancy]) {
    writeln!(output, "{heading}").expect("writing to string cannot fail");
    for row in rows {
        writeln!(
            output,
            "  {:>6.1} t: recorded {:>5.1} mm, computed {:>5.1} mm, error {:+.1} mm{}",
            row.mass_tons,
            row.recorded_mm,
            row.computed_mm,
            row.error_mm,
            if row.flagged { "  <-- flagged" } else { "" }
        )
        .expect("writing to string cannot fail");
    }
}

/// Render the consistency audit.
#[must_use]
pub fn render_audit(summary: &AuditSummary, limits: &HandlingLimits) -> String {
    let mut output = String::new();

    writeln!(
        &mut output,
        "Omitting packing overstates breaking load by {:.1}% and understates diameter by {:.1}%",
        summary.load_overestimate * 100.0,
        summary.diameter_underestimate * 100.0
    )
    .expect("writing to string cannot fail");

    write_comparisons(
        &mut output,
        "Breaking load at marked diameters (mm)",
        "kN",
        &summary.breaking_loads,
    );
    write_comparisons(
        &mut output,
        "Required diameter at panel masses (t)",
        "mm",
        &summary.diameters,
    );
    write_comparisons(
        &mut output,
        "Required diameter for transport scenarios (t)",
        "mm",
        &summary.scenarios,
    );

    // The shorthand only holds once packing is included; printing both columns
    // lets the reader see how far it drifts with diameter.
    writeln!(&mut output, "Breaking load against the 0.35 D^2 shorthand")
        .expect("writing to string cannot fail");
    for row in &summary.shorthand {
        writeln!(
            &mut output,
            "  {:>6.1} mm: exact {:>7.1} kN, shorthand {:>7.1} kN",
            row.diameter_mm, row.exact, row.shorthand
        )
        .expect("writing to string cannot fail");
    }

    write_recorded(
        &mut output,
        "Grip figure diameters against the corrected model",
        &summary.grip_figure,
    );
    write_recorded(
        &mut output,
        "Production table diameters against the packing-omitted model",
        &summary.production_table,
    );

    let line = &summary.safety_line;
    writeln!(
        &mut output,
        "{:.0} mm rope: breaking load {:.1} kN, safe working load (BL/{}) {:.1} kN",
        line.diameter_mm, line.breaking_load, line.safety_factor, line.safe_working_load
    )
    .expect("writing to string cannot fail");
    for (working_load, diameter) in line.requirements {
        writeln!(
            &mut output,
            "  {working_load:.0} kN working load needs {diameter:.1} mm at SF = {}",
            line.safety_factor
        )
        .expect("writing to string cannot fail");
    }

    writeln!(&mut output, "Paro mass sensitivity (packing included)")
        .expect("writing to string cannot fail");
    for &(mass, diameter) in &summary.paro_revision {
        writeln!(
            &mut output,
            "  {mass:>5.1} t -> {diameter:>5.1} mm ({:+.1} mm to the practical limit)",
            limits.margin_to_practical(diameter)
        )
        .expect("writing to string cannot fail");
    }
    if let Some(((before_mass, before), (after_mass, after))) = paro_revision_pair(summary) {
        writeln!(
            &mut output,
            "  Paro revised from {before_mass:.0} t to {after_mass:.0} t: {before:.1} mm -> {after:.1} mm ({:+.1} mm)",
            after - before
        )
        .expect("writing to string cannot fail");
    }

    // Production totals are compared with their own stage breakdown, so a
    // flagged row means the table is internally inconsistent.
    writeln!(
        &mut output,
        "Rope production per set (stages: harvesting, retting, preparation, construction)"
    )
    .expect("writing to string cannot fail");
    for row in &summary.production {
        writeln!(
            &mut output,
            "  {:>5.1} t: recorded {:>5.1} d, stages sum to {:>6.2} d ({:+.2} d); transport {:.0} pd ({TRANSPORT_ROPE_SETS:.0} sets = {:.0} pd){}",
            row.mass_tons,
            row.recorded_days,
            row.stage_total_days,
            row.error_days,
            row.recorded_transport_person_days,
            row.scaled_transport_person_days,
            if row.flagged { "  <-- flagged" } else { "" }
        )
        .expect("writing to string cannot fail");
    }

    output
}
