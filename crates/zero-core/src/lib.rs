//! Core sight zeroing math
//!
//! Includes:
//! - Units & conversions (metric/imperial)
//! - Click standards (MOA / MIL fractions)
//! - Click size at distance, keyed by (unit, family)
//! - Zero calculator: offsets -> windage/elevation clicks
//! - Recompute-on-demand session
//! - Target grid <-> offset mapping

pub mod adjustment;
pub mod calculator;
pub mod error;
pub mod grid;
pub mod scale;
pub mod session;
pub mod units;

pub use adjustment::{AdjustmentType, ClickSpec, Family, ADJUSTMENTS};
pub use calculator::{
    HorizontalDirection, InputMode, Rounding, VerticalDirection, ZeroCalculator, ZeroInput,
    ZeroResult,
};
pub use error::ZeroError;
pub use grid::{TargetGrid, SQUARE_SIZE_CM};
pub use scale::{click_size, scale_constant};
pub use session::ZeroSession;
pub use units::UnitSystem;
