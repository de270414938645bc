use moai_rope::{mass_to_working_load, HandlingLimits, RopeModel, SafetyFactor, PARO_MASS_REVISION};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Start from the paper's parameters: 916 MPa fibre, packing and
    // construction efficiencies applied, safety factor of 10
    let model = RopeModel::paper();
    let limits = HandlingLimits::default();

    // Paro's mass was revised downwards after the figures were drawn
    let (original, revised) = PARO_MASS_REVISION;
    for mass in [original, revised] {
        let working_load = mass_to_working_load(mass)?;
        let diameter = model.required_diameter(working_load)?;
        let grip = limits.classify(diameter);
        println!(
            "Paro at {mass} t: {diameter:.1} mm ({grip}, {:+.1} mm to the practical limit)",
            limits.margin_to_practical(diameter)
        );
    }

    // A reduced margin shows how much headroom the team could trade for grip
    let reduced = model.with_safety_factor(SafetyFactor::REDUCED);
    let diameter = reduced.required_diameter_for_mass(original)?;
    println!("With SF = 5: {diameter:.1} mm ({})", limits.classify(diameter));

    // All done
    Ok(())
}
