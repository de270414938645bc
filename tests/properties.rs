use moai_rope::{breaking_load, required_diameter, MaterialConstants};
use proptest::prelude::*;

fn constants() -> impl Strategy<Value = MaterialConstants> {
    (100.0..2000.0_f64, 0.05..=1.0_f64, 0.05..=1.0_f64).prop_map(
        |(tensile, packing, construction)| {
            MaterialConstants::new(tensile, packing, construction)
                .expect("strategy stays inside the valid domain")
        },
    )
}

proptest! {
    #[test]
    fn diameter_round_trips_through_breaking_load(
        diameter in 0.1..500.0_f64,
        constants in constants(),
        include_packing in any::<bool>(),
    ) {
        let load = breaking_load(diameter, &constants, include_packing).unwrap();
        let recovered = required_diameter(load, 1.0, &constants, include_packing).unwrap();
        prop_assert!(((recovered - diameter) / diameter).abs() < 1.0e-6);
    }

    #[test]
    fn required_diameter_increases_with_load(
        load in 0.1..1000.0_f64,
        step in 0.01..100.0_f64,
        safety_factor in 1.0..20.0_f64,
        include_packing in any::<bool>(),
    ) {
        let constants = MaterialConstants::triumfetta_cordifolia();
        let smaller = required_diameter(load, safety_factor, &constants, include_packing).unwrap();
        let larger =
            required_diameter(load + step, safety_factor, &constants, include_packing).unwrap();
        prop_assert!(smaller < larger);
    }

    #[test]
    fn packing_ratio_equals_efficiency(
        diameter in 0.1..500.0_f64,
        constants in constants(),
    ) {
        let with = breaking_load(diameter, &constants, true).unwrap();
        let without = breaking_load(diameter, &constants, false).unwrap();
        prop_assert!((with / without - constants.packing_efficiency()).abs() < 1.0e-12);
        prop_assert!(with <= without);
    }

    #[test]
    fn non_positive_inputs_are_rejected(
        value in -1000.0..=0.0_f64,
        include_packing in any::<bool>(),
    ) {
        let constants = MaterialConstants::triumfetta_cordifolia();
        prop_assert!(breaking_load(value, &constants, include_packing).is_err());
        prop_assert!(required_diameter(value, 10.0, &constants, include_packing).is_err());
        prop_assert!(required_diameter(10.0, value, &constants, include_packing).is_err());
    }
}
