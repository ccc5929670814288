use thiserror::Error;

/// Errors raised while reading user-facing names into the data model.
///
/// The calculator itself never fails; a degenerate input is a no-op, not an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ZeroError {
    #[error("unknown unit system `{0}` (expected metric or imperial)")]
    UnknownUnit(String),
    #[error("unknown adjustment `{0}` (expected one of MOA_1_4, MOA_1_8, MOA_1_2, MIL_0_1, MIL_0_05)")]
    UnknownAdjustment(String),
    #[error("unknown input mode `{0}` (expected measured or squares)")]
    UnknownInputMode(String),
    #[error("unknown rounding rule `{0}` (expected half-away or half-even)")]
    UnknownRounding(String),
}
