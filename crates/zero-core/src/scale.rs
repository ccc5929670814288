//! Linear size of one click at distance.
//!
//!   click_size = K(unit, family) * distance / 100 * fraction
//!
//! K is the linear size (cm or in) subtended by one full MOA or MIL at
//! 100 distance units (m or yd). The constants are fixed small-angle values.

use crate::adjustment::{AdjustmentType, Family};
use crate::units::UnitSystem;

/// (unit, family) -> linear size per 100 distance units.
pub const SCALE_TABLE: [((UnitSystem, Family), f64); 4] = [
    ((UnitSystem::Metric, Family::Mil), 10.0),
    ((UnitSystem::Metric, Family::Moa), 2.908),
    ((UnitSystem::Imperial, Family::Moa), 1.047),
    ((UnitSystem::Imperial, Family::Mil), 3.6),
];

pub fn scale_constant(unit: UnitSystem, family: Family) -> f64 {
    SCALE_TABLE
        .iter()
        .find(|(key, _)| *key == (unit, family))
        .map_or(0.0, |(_, k)| *k)
}

/// Linear distance one click moves impact at `distance`, in the unit's linear unit.
pub fn click_size(unit: UnitSystem, adjustment: AdjustmentType, distance: f64) -> f64 {
    let spec = adjustment.spec();
    (scale_constant(unit, spec.family) * distance / 100.0) * spec.fraction
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn every_pair_has_a_constant() {
        for unit in UnitSystem::ALL {
            for family in [Family::Moa, Family::Mil] {
                assert!(scale_constant(unit, family) > 0.0, "{unit} / {family}");
            }
        }
    }

    #[test]
    fn metric_mil_is_distance_over_ten() {
        for d in [10.0, 25.0, 100.0, 300.0] {
            assert_relative_eq!(
                click_size(UnitSystem::Metric, AdjustmentType::MIL_0_1, d),
                (d / 10.0) * 0.1,
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn known_click_sizes() {
        assert_relative_eq!(
            click_size(UnitSystem::Metric, AdjustmentType::MOA_1_4, 25.0),
            0.181_75,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            click_size(UnitSystem::Imperial, AdjustmentType::MIL_0_1, 100.0),
            0.36,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            click_size(UnitSystem::Imperial, AdjustmentType::MOA_1_4, 100.0),
            0.261_75,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            click_size(UnitSystem::Metric, AdjustmentType::MIL_0_05, 100.0),
            0.5,
            epsilon = 1e-12
        );
    }

    #[test]
    fn zero_distance_gives_zero() {
        for adj in AdjustmentType::ALL {
            assert_eq!(click_size(UnitSystem::Imperial, adj, 0.0), 0.0);
        }
    }
}
