//! Unit systems & conversions (metric/imperial)
//!
//! Metric inputs are distance in meters and offsets in centimeters.
//! Imperial inputs are distance in yards and offsets in inches.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ZeroError;

/// -------------------------
/// Unit system
/// -------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    pub const ALL: [UnitSystem; 2] = [UnitSystem::Metric, UnitSystem::Imperial];

    /// Label of the linear unit used for offsets and click sizes.
    pub fn linear_label(self) -> &'static str {
        match self {
            UnitSystem::Metric => "cm",
            UnitSystem::Imperial => "in",
        }
    }

    /// Label of the distance unit.
    pub fn distance_label(self) -> &'static str {
        match self {
            UnitSystem::Metric => "m",
            UnitSystem::Imperial => "yd",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitSystem::Metric => f.write_str("metric"),
            UnitSystem::Imperial => f.write_str("imperial"),
        }
    }
}

impl FromStr for UnitSystem {
    type Err = ZeroError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "metric" | "m" | "cm" => Ok(UnitSystem::Metric),
            "imperial" | "yd" | "in" => Ok(UnitSystem::Imperial),
            _ => Err(ZeroError::UnknownUnit(s.to_string())),
        }
    }
}

/// -------------------------
/// Conversions
/// -------------------------

pub fn m_to_yards(m: f64) -> f64 { m * 1.093_613 }
pub fn yards_to_m(y: f64) -> f64 { y / 1.093_613 }

pub fn cm_to_inches(cm: f64) -> f64 { cm / 2.54 }
pub fn inches_to_cm(inches: f64) -> f64 { inches * 2.54 }

pub fn mil_to_moa(mil: f64) -> f64 { mil * 3.437_747 }
pub fn moa_to_mil(moa: f64) -> f64 { moa / 3.437_747 }

/// Convert a linear length from one unit system's offset unit to another's.
pub fn convert_linear(value: f64, from: UnitSystem, to: UnitSystem) -> f64 {
    match (from, to) {
        (UnitSystem::Metric, UnitSystem::Imperial) => cm_to_inches(value),
        (UnitSystem::Imperial, UnitSystem::Metric) => inches_to_cm(value),
        _ => value,
    }
}

/// Convert a distance from one unit system's distance unit to another's.
pub fn convert_distance(value: f64, from: UnitSystem, to: UnitSystem) -> f64 {
    match (from, to) {
        (UnitSystem::Metric, UnitSystem::Imperial) => m_to_yards(value),
        (UnitSystem::Imperial, UnitSystem::Metric) => yards_to_m(value),
        _ => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn parses_unit_names() {
        assert_eq!("metric".parse::<UnitSystem>().unwrap(), UnitSystem::Metric);
        assert_eq!("IMPERIAL".parse::<UnitSystem>().unwrap(), UnitSystem::Imperial);
        assert!("furlongs".parse::<UnitSystem>().is_err());
    }

    #[test]
    fn labels() {
        assert_eq!(UnitSystem::Metric.linear_label(), "cm");
        assert_eq!(UnitSystem::Imperial.linear_label(), "in");
        assert_eq!(UnitSystem::Imperial.distance_label(), "yd");
    }

    #[test]
    fn conversions_are_inverse() {
        assert_relative_eq!(inches_to_cm(cm_to_inches(7.5)), 7.5, epsilon = 1e-12);
        assert_relative_eq!(yards_to_m(m_to_yards(100.0)), 100.0, epsilon = 1e-9);
        assert_relative_eq!(moa_to_mil(mil_to_moa(0.1)), 0.1, epsilon = 1e-12);
        assert_relative_eq!(convert_linear(2.54, UnitSystem::Metric, UnitSystem::Imperial), 1.0);
        assert_relative_eq!(convert_distance(25.0, UnitSystem::Metric, UnitSystem::Metric), 25.0);
    }

    #[test]
    fn serde_names() {
        let json = serde_json::to_string(&UnitSystem::Imperial).unwrap();
        assert_eq!(json, "\"IMPERIAL\"");
    }
}
