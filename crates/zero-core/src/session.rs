//! Recompute-on-demand holder for the current input and last correction.
//!
//! Setters only touch the input. `recompute` replaces the stored result in
//! one piece, or leaves the previous one in place when the calculator
//! declines (zero click size, non-finite input).

use tracing::debug;

use crate::adjustment::AdjustmentType;
use crate::calculator::{InputMode, ZeroCalculator, ZeroInput, ZeroResult};
use crate::grid::TargetGrid;
use crate::units::UnitSystem;

#[derive(Debug, Clone, Default)]
pub struct ZeroSession {
    input: ZeroInput,
    calculator: ZeroCalculator,
    grid: TargetGrid,
    result: Option<ZeroResult>,
}

impl ZeroSession {
    pub fn new(input: ZeroInput, calculator: ZeroCalculator) -> Self {
        Self { input, calculator, grid: TargetGrid::default(), result: None }
    }

    pub fn with_grid(mut self, grid: TargetGrid) -> Self {
        self.grid = grid;
        self
    }

    pub fn input(&self) -> &ZeroInput { &self.input }
    pub fn result(&self) -> Option<&ZeroResult> { self.result.as_ref() }
    pub fn grid(&self) -> &TargetGrid { &self.grid }

    pub fn set_distance(&mut self, distance: f64) { self.input.distance = distance; }
    pub fn set_unit(&mut self, unit: UnitSystem) { self.input.unit = unit; }
    pub fn set_adjustment(&mut self, adjustment: AdjustmentType) { self.input.adjustment = adjustment; }
    pub fn set_input_mode(&mut self, mode: InputMode) { self.input.input_mode = mode; }

    pub fn set_offsets(&mut self, horizontal: f64, vertical: f64) {
        self.input.horizontal_offset = horizontal;
        self.input.vertical_offset = vertical;
    }

    /// Take offsets from a pointer position on the target grid.
    pub fn select_point(&mut self, x: f64, y: f64) {
        let (h, v) = self.grid.point_to_offset(x, y);
        self.set_offsets(h, v);
    }

    /// Run the calculator on the current input. Returns the result now held,
    /// which is the previous one if this run was a no-op.
    pub fn recompute(&mut self) -> Option<&ZeroResult> {
        match self.calculator.compute(&self.input) {
            Some(result) => self.result = Some(result),
            None => debug!(
                distance = self.input.distance,
                unit = %self.input.unit,
                adjustment = %self.input.adjustment,
                "click size degenerate, keeping previous result"
            ),
        }
        self.result.as_ref()
    }

    /// Back to 25 m, metric, 1/4 MOA, centered, then recompute.
    pub fn reset(&mut self) -> Option<&ZeroResult> {
        self.input = ZeroInput::default();
        self.result = None;
        self.recompute()
    }
}
