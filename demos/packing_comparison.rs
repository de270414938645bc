use moai_rope::{
    compare_required_diameters, packing_diameter_underestimate, MaterialConstants,
    DOCUMENTED_MOAI,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let constants = MaterialConstants::triumfetta_cordifolia();

    // Recompute every documented statue with and without the packing factor
    let masses: Vec<f64> = DOCUMENTED_MOAI.iter().map(|moai| moai.mass_tons).collect();
    let comparisons = compare_required_diameters(&masses, 10.0, &constants)?;

    for (moai, row) in DOCUMENTED_MOAI.iter().zip(&comparisons) {
        println!(
            "{:<38} {:>6.1} t  with packing {:>5.1} mm  without {:>5.1} mm",
            moai.name, row.input, row.with_packing, row.without_packing
        );
    }

    // The gap is the same fraction for every mass
    println!(
        "Omitting packing understates every diameter by {:.1}%",
        packing_diameter_underestimate(&constants) * 100.0
    );

    Ok(())
}
