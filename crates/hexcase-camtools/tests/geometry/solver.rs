//! Solver scenarios across the battery presets

use hexcase_camtools::battery_case::solver::{derive, is_feasible, solve, MIN_EXTERIOR_LEG};
use hexcase_core::{BatteryPreset, CaseParameters};
use proptest::prelude::*;

fn preset_params(preset: BatteryPreset, dimension: u32) -> CaseParameters {
    let size = preset.size();
    CaseParameters {
        dimension,
        hole: size.diameter,
        height: size.height,
        ..Default::default()
    }
}

#[test]
fn test_aa_grid_of_five() {
    let params = preset_params(BatteryPreset::Aa, 5);
    let geometry = solve(&params).unwrap();

    assert!(geometry.interior_edge > 0.0);
    assert!(geometry.n_hor_fingers >= 1);
    let expected = ((params.height + params.extra_height) / params.vertical_finger).floor() as u32;
    assert_eq!(geometry.n_ver_fingers, expected);
    assert_eq!(
        geometry.exterior_edge,
        geometry.interior_edge + 2.0 * params.thickness
    );
}

#[test]
fn test_every_preset_solves() {
    for preset in BatteryPreset::ALL {
        for dimension in [1, 3, 5, 7] {
            let geometry = solve(&preset_params(preset, dimension)).unwrap();
            assert!(
                geometry.exterior_leg > MIN_EXTERIOR_LEG,
                "{} x{} left a {:.3} mm leg",
                preset,
                dimension,
                geometry.exterior_leg
            );
        }
    }
}

#[test]
fn test_feasible_input_is_not_padded() {
    let params = preset_params(BatteryPreset::D, 3);
    assert!(is_feasible(&derive(&params, 0)));
    let geometry = solve(&params).unwrap();
    assert_eq!(geometry.padding_steps, 0);
    assert_eq!(geometry.params, params);
}

proptest! {
    #[test]
    fn solved_geometry_is_consistent(
        half in 0u32..5,
        hole in 8.0f64..40.0,
        thickness in 1.5f64..6.0,
        outside_padding in 0.0f64..10.0,
    ) {
        let params = CaseParameters {
            dimension: 2 * half + 1,
            hole,
            thickness,
            outside_padding,
            ..Default::default()
        };
        let geometry = solve(&params).unwrap();

        prop_assert_eq!(geometry.exterior_edge, geometry.interior_edge + 2.0 * geometry.params.thickness);
        prop_assert!(geometry.exterior_leg > MIN_EXTERIOR_LEG);
        prop_assert!(geometry.n_hor_fingers >= 1);
        prop_assert!(geometry.params.padding >= params.padding);
        prop_assert!(geometry.params.outside_padding >= params.outside_padding);

        let again = solve(&geometry.params).unwrap();
        prop_assert_eq!(again.padding_steps, 0);
        prop_assert_eq!(again.interior_edge, geometry.interior_edge);
    }
}
