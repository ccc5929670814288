//! Zero calculator
//!
//! Converts a point-of-impact offset at a known distance into turret clicks.
//!
//! Conventions:
//! - Horizontal offset > 0 means the impact is right of the aim point as drawn;
//!   the correction is LEFT. Negative offsets correct RIGHT.
//! - Vertical offset > 0 means the impact is above the aim point; the
//!   correction is DOWN. Negative offsets correct UP.
//! - An offset of exactly zero has no direction.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::adjustment::AdjustmentType;
use crate::error::ZeroError;
use crate::grid::SQUARE_SIZE_CM;
use crate::scale::click_size;
use crate::units::{cm_to_inches, convert_distance, convert_linear, UnitSystem};

/// How offsets were entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InputMode {
    /// Offsets in cm (metric) or inches (imperial).
    #[default]
    Measured,
    /// Offsets counted in 1.5 cm target squares.
    Squares,
}

impl FromStr for InputMode {
    type Err = ZeroError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "measured" => Ok(InputMode::Measured),
            "squares" => Ok(InputMode::Squares),
            _ => Err(ZeroError::UnknownInputMode(s.to_string())),
        }
    }
}

/// Rounding rule applied to `|offset| / click_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rounding {
    /// 5.5 -> 6, 4.5 -> 5.
    #[default]
    #[serde(alias = "half-away")]
    HalfAwayFromZero,
    /// 5.5 -> 6, 4.5 -> 4.
    #[serde(alias = "half-even")]
    HalfToEven,
}

impl Rounding {
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Rounding::HalfAwayFromZero => x.round(),
            Rounding::HalfToEven => x.round_ties_even(),
        }
    }
}

impl FromStr for Rounding {
    type Err = ZeroError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "half-away" | "half-away-from-zero" => Ok(Rounding::HalfAwayFromZero),
            "half-even" | "half-to-even" | "bankers" => Ok(Rounding::HalfToEven),
            _ => Err(ZeroError::UnknownRounding(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZeroInput {
    /// Meters (metric) or yards (imperial).
    pub distance: f64,
    pub unit: UnitSystem,
    pub adjustment: AdjustmentType,
    #[serde(default)]
    pub input_mode: InputMode,
    pub horizontal_offset: f64,
    pub vertical_offset: f64,
}

impl Default for ZeroInput {
    fn default() -> Self {
        Self {
            distance: 25.0,
            unit: UnitSystem::Metric,
            adjustment: AdjustmentType::MOA_1_4,
            input_mode: InputMode::Measured,
            horizontal_offset: 0.0,
            vertical_offset: 0.0,
        }
    }
}

impl ZeroInput {
    pub fn new(
        distance: f64,
        unit: UnitSystem,
        adjustment: AdjustmentType,
        horizontal_offset: f64,
        vertical_offset: f64,
    ) -> Self {
        Self {
            distance,
            unit,
            adjustment,
            input_mode: InputMode::Measured,
            horizontal_offset,
            vertical_offset,
        }
    }

    pub fn with_input_mode(mut self, mode: InputMode) -> Self {
        self.input_mode = mode;
        self
    }

    /// Offsets in the unit's linear unit, resolving square counts.
    pub fn linear_offsets(&self) -> (f64, f64) {
        match self.input_mode {
            InputMode::Measured => (self.horizontal_offset, self.vertical_offset),
            InputMode::Squares => {
                let square = match self.unit {
                    UnitSystem::Metric => SQUARE_SIZE_CM,
                    UnitSystem::Imperial => cm_to_inches(SQUARE_SIZE_CM),
                };
                (self.horizontal_offset * square, self.vertical_offset * square)
            }
        }
    }

    /// Same physical situation expressed in another unit system.
    ///
    /// Square counts are unit-independent and are left as they are.
    pub fn converted_to(&self, unit: UnitSystem) -> Self {
        if unit == self.unit {
            return *self;
        }
        let (h, v) = match self.input_mode {
            InputMode::Measured => (
                convert_linear(self.horizontal_offset, self.unit, unit),
                convert_linear(self.vertical_offset, self.unit, unit),
            ),
            InputMode::Squares => (self.horizontal_offset, self.vertical_offset),
        };
        Self {
            distance: convert_distance(self.distance, self.unit, unit),
            unit,
            horizontal_offset: h,
            vertical_offset: v,
            ..*self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HorizontalDirection {
    Left,
    Right,
    None,
}

impl HorizontalDirection {
    pub fn from_offset(offset: f64) -> Self {
        if offset > 0.0 {
            HorizontalDirection::Left
        } else if offset < 0.0 {
            HorizontalDirection::Right
        } else {
            HorizontalDirection::None
        }
    }
}

impl fmt::Display for HorizontalDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HorizontalDirection::Left => "LEFT",
            HorizontalDirection::Right => "RIGHT",
            HorizontalDirection::None => "NONE",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerticalDirection {
    Up,
    Down,
    None,
}

impl VerticalDirection {
    pub fn from_offset(offset: f64) -> Self {
        if offset > 0.0 {
            VerticalDirection::Down
        } else if offset < 0.0 {
            VerticalDirection::Up
        } else {
            VerticalDirection::None
        }
    }
}

impl fmt::Display for VerticalDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            VerticalDirection::Up => "UP",
            VerticalDirection::Down => "DOWN",
            VerticalDirection::None => "NONE",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZeroResult {
    pub horizontal_clicks: u32,
    pub horizontal_direction: HorizontalDirection,
    pub vertical_clicks: u32,
    pub vertical_direction: VerticalDirection,
    /// Linear size of one click at the input distance.
    pub click_size: f64,
    pub description: String,
}

/// Stateless click calculator. The only knob is the rounding rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZeroCalculator {
    pub rounding: Rounding,
}

impl ZeroCalculator {
    pub fn new(rounding: Rounding) -> Self {
        Self { rounding }
    }

    /// Compute the correction for `input`.
    ///
    /// Returns `None` (no-op) when the click size is not a finite positive
    /// number, e.g. distance 0, or when an offset is not finite. Callers keep
    /// whatever result they already had.
    pub fn compute(&self, input: &ZeroInput) -> Option<ZeroResult> {
        let size = click_size(input.unit, input.adjustment, input.distance);
        if !size.is_finite() || size <= 0.0 {
            return None;
        }

        let (h, v) = input.linear_offsets();
        if !h.is_finite() || !v.is_finite() {
            return None;
        }

        Some(ZeroResult {
            horizontal_clicks: self.clicks(h, size),
            horizontal_direction: HorizontalDirection::from_offset(h),
            vertical_clicks: self.clicks(v, size),
            vertical_direction: VerticalDirection::from_offset(v),
            click_size: size,
            description: describe(size, input.unit),
        })
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn clicks(&self, offset: f64, size: f64) -> u32 {
        // `as` saturates, so absurd offsets clamp to u32::MAX.
        self.rounding.apply(offset.abs() / size) as u32
    }
}

fn describe(size: f64, unit: UnitSystem) -> String {
    format!(
        "Each click moves impact ~{size:.2} {} at this distance.",
        unit.linear_label()
    )
}
