//! Sight click standards.
//!
//! Each adjustment is a fraction of a base angular unit (1 MOA or 1 MIL).
//! The family and fraction are read from a fixed table instead of being
//! recovered from the display label.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ZeroError;
use crate::units::{mil_to_moa, moa_to_mil};

/// Angular unit a turret is graduated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Family {
    Moa,
    Mil,
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::Moa => f.write_str("MOA"),
            Family::Mil => f.write_str("MIL"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[allow(non_camel_case_types)]
pub enum AdjustmentType {
    #[default]
    MOA_1_4,
    MOA_1_8,
    MOA_1_2,
    MIL_0_1,
    MIL_0_05,
}

/// Family and per-click fraction of a click standard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickSpec {
    pub family: Family,
    pub fraction: f64,
}

pub const ADJUSTMENTS: [(AdjustmentType, ClickSpec); 5] = [
    (AdjustmentType::MOA_1_4, ClickSpec { family: Family::Moa, fraction: 0.25 }),
    (AdjustmentType::MOA_1_8, ClickSpec { family: Family::Moa, fraction: 0.125 }),
    (AdjustmentType::MOA_1_2, ClickSpec { family: Family::Moa, fraction: 0.5 }),
    (AdjustmentType::MIL_0_1, ClickSpec { family: Family::Mil, fraction: 0.1 }),
    (AdjustmentType::MIL_0_05, ClickSpec { family: Family::Mil, fraction: 0.05 }),
];

impl AdjustmentType {
    pub const ALL: [AdjustmentType; 5] = [
        AdjustmentType::MOA_1_4,
        AdjustmentType::MOA_1_8,
        AdjustmentType::MOA_1_2,
        AdjustmentType::MIL_0_1,
        AdjustmentType::MIL_0_05,
    ];

    pub fn spec(self) -> ClickSpec {
        ADJUSTMENTS[self.index()].1
    }

    pub fn family(self) -> Family {
        self.spec().family
    }

    pub fn fraction(self) -> f64 {
        self.spec().fraction
    }

    pub fn label(self) -> &'static str {
        match self {
            AdjustmentType::MOA_1_4 => "1/4 MOA",
            AdjustmentType::MOA_1_8 => "1/8 MOA",
            AdjustmentType::MOA_1_2 => "1/2 MOA",
            AdjustmentType::MIL_0_1 => "0.1 MIL (mrad)",
            AdjustmentType::MIL_0_05 => "0.05 MIL (mrad)",
        }
    }

    /// Variant name as used on the wire (`MOA_1_4`, ...).
    pub fn name(self) -> &'static str {
        match self {
            AdjustmentType::MOA_1_4 => "MOA_1_4",
            AdjustmentType::MOA_1_8 => "MOA_1_8",
            AdjustmentType::MOA_1_2 => "MOA_1_2",
            AdjustmentType::MIL_0_1 => "MIL_0_1",
            AdjustmentType::MIL_0_05 => "MIL_0_05",
        }
    }

    /// Angular value of one click, in MOA.
    pub fn click_angle_moa(self) -> f64 {
        let spec = self.spec();
        match spec.family {
            Family::Moa => spec.fraction,
            Family::Mil => mil_to_moa(spec.fraction),
        }
    }

    /// Angular value of one click, in MIL.
    pub fn click_angle_mil(self) -> f64 {
        let spec = self.spec();
        match spec.family {
            Family::Mil => spec.fraction,
            Family::Moa => moa_to_mil(spec.fraction),
        }
    }

    fn index(self) -> usize {
        match self {
            AdjustmentType::MOA_1_4 => 0,
            AdjustmentType::MOA_1_8 => 1,
            AdjustmentType::MOA_1_2 => 2,
            AdjustmentType::MIL_0_1 => 3,
            AdjustmentType::MIL_0_05 => 4,
        }
    }
}

impl fmt::Display for AdjustmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AdjustmentType {
    type Err = ZeroError;

    /// Accepts `MOA_1_4`, `moa-1-4` and the display label `1/4 MOA`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_uppercase().replace('-', "_");
        AdjustmentType::ALL
            .into_iter()
            .find(|a| a.name() == key || a.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ZeroError::UnknownAdjustment(s.to_string()))
    }
}
