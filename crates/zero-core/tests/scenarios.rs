// End-to-end checks on the calculator across every unit/adjustment pair.
// Asserts click counts are never negative, directions follow offset sign only,
// and click size scales linearly with distance.

use approx::assert_relative_eq;
use zero_core::{
    click_size, AdjustmentType, HorizontalDirection, UnitSystem, VerticalDirection,
    ZeroCalculator, ZeroInput,
};

const OFFSETS: [f64; 7] = [-12.3, -1.0, -0.04, 0.0, 0.04, 1.0, 12.3];
const DISTANCES: [f64; 4] = [10.0, 25.0, 100.0, 457.2];

fn every_input() -> impl Iterator<Item = ZeroInput> {
    UnitSystem::ALL.into_iter().flat_map(|unit| {
        AdjustmentType::ALL.into_iter().flat_map(move |adj| {
            DISTANCES.into_iter().flat_map(move |d| {
                OFFSETS.into_iter().flat_map(move |h| {
                    OFFSETS.into_iter().map(move |v| ZeroInput::new(d, unit, adj, h, v))
                })
            })
        })
    })
}

#[test]
fn directions_follow_sign_only() {
    let calc = ZeroCalculator::default();
    for input in every_input() {
        let r = calc.compute(&input).expect("positive distance always computes");

        let expected_h = if input.horizontal_offset > 0.0 {
            HorizontalDirection::Left
        } else if input.horizontal_offset < 0.0 {
            HorizontalDirection::Right
        } else {
            HorizontalDirection::None
        };
        let expected_v = if input.vertical_offset > 0.0 {
            VerticalDirection::Down
        } else if input.vertical_offset < 0.0 {
            VerticalDirection::Up
        } else {
            VerticalDirection::None
        };
        assert_eq!(r.horizontal_direction, expected_h, "{input:?}");
        assert_eq!(r.vertical_direction, expected_v, "{input:?}");

        // Zero offset gives zero clicks and no direction. A tiny non-zero offset
        // may also round to zero clicks, but it still carries a direction.
        if input.horizontal_offset == 0.0 {
            assert_eq!(r.horizontal_clicks, 0);
        } else {
            assert_ne!(r.horizontal_direction, HorizontalDirection::None);
        }
        if input.vertical_offset == 0.0 {
            assert_eq!(r.vertical_clicks, 0);
        } else {
            assert_ne!(r.vertical_direction, VerticalDirection::None);
        }
    }
}

#[test]
fn mirrored_offsets_give_same_clicks() {
    let calc = ZeroCalculator::default();
    for input in every_input() {
        let mirrored = ZeroInput {
            horizontal_offset: -input.horizontal_offset,
            vertical_offset: -input.vertical_offset,
            ..input
        };
        let a = calc.compute(&input).unwrap();
        let b = calc.compute(&mirrored).unwrap();
        assert_eq!(a.horizontal_clicks, b.horizontal_clicks);
        assert_eq!(a.vertical_clicks, b.vertical_clicks);
    }
}

#[test]
fn doubling_distance_doubles_click_size() {
    for unit in UnitSystem::ALL {
        for adj in AdjustmentType::ALL {
            for d in DISTANCES {
                let single = click_size(unit, adj, d);
                let double = click_size(unit, adj, 2.0 * d);
                assert_relative_eq!(double, 2.0 * single, max_relative = 1e-12);

                // Same offset at twice the distance needs about half the clicks.
                let calc = ZeroCalculator::default();
                let offset = 40.0 * single;
                let near = calc.compute(&ZeroInput::new(d, unit, adj, offset, 0.0)).unwrap();
                let far = calc.compute(&ZeroInput::new(2.0 * d, unit, adj, offset, 0.0)).unwrap();
                assert_eq!(near.horizontal_clicks, 40);
                assert_eq!(far.horizontal_clicks, 20);
            }
        }
    }
}

#[test]
fn worked_examples() {
    let calc = ZeroCalculator::default();

    let r = calc
        .compute(&ZeroInput::new(25.0, UnitSystem::Metric, AdjustmentType::MOA_1_4, 2.0, -1.0))
        .unwrap();
    assert_eq!((r.horizontal_clicks, r.horizontal_direction), (11, HorizontalDirection::Left));
    assert_eq!((r.vertical_clicks, r.vertical_direction), (6, VerticalDirection::Up));
    assert_relative_eq!(r.click_size, 0.181_75, epsilon = 1e-12);

    let r = calc
        .compute(&ZeroInput::new(100.0, UnitSystem::Imperial, AdjustmentType::MIL_0_1, -0.72, 0.0))
        .unwrap();
    assert_eq!((r.horizontal_clicks, r.horizontal_direction), (2, HorizontalDirection::Right));
    assert_eq!((r.vertical_clicks, r.vertical_direction), (0, VerticalDirection::None));
    assert_eq!(r.description, "Each click moves impact ~0.36 in at this distance.");
}

#[test]
fn zero_distance_never_computes() {
    let calc = ZeroCalculator::default();
    for unit in UnitSystem::ALL {
        for adj in AdjustmentType::ALL {
            assert!(calc.compute(&ZeroInput::new(0.0, unit, adj, 5.0, 5.0)).is_none());
        }
    }
}

#[test]
fn repeated_calls_are_identical() {
    let calc = ZeroCalculator::default();
    let input = ZeroInput::new(91.44, UnitSystem::Imperial, AdjustmentType::MOA_1_8, 1.7, 2.2);
    assert_eq!(calc.compute(&input), calc.compute(&input));
}
