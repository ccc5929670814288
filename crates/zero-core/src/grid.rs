//! Target grid <-> offset mapping.
//!
//! The target is a square view box with the aim point in the middle and
//! `squares_per_side` grid squares from the center to each edge. Each square
//! is `square_size` physical units. Screen Y grows downward, so a point above
//! the center maps to a positive vertical offset.

use serde::{Deserialize, Serialize};

/// Physical side of one target square, in cm.
pub const SQUARE_SIZE_CM: f64 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetGrid {
    /// View box side, in drawing units.
    pub view_box: f64,
    pub squares_per_side: u32,
    pub square_size: f64,
}

impl Default for TargetGrid {
    fn default() -> Self {
        Self {
            view_box: 400.0,
            squares_per_side: 10,
            square_size: SQUARE_SIZE_CM,
        }
    }
}

impl TargetGrid {
    pub fn center(&self) -> f64 {
        self.view_box / 2.0
    }

    /// Drawing units between two grid lines.
    pub fn step(&self) -> f64 {
        self.center() / f64::from(self.squares_per_side)
    }

    /// Pointer position (view box coordinates) -> (horizontal, vertical) offset,
    /// each rounded to one decimal.
    pub fn point_to_offset(&self, x: f64, y: f64) -> (f64, f64) {
        let c = self.center();
        let per_unit = self.square_size / self.step();
        (round1((x - c) * per_unit), round1((c - y) * per_unit))
    }

    /// Offset -> view box coordinates of the impact marker.
    pub fn offset_to_point(&self, horizontal: f64, vertical: f64) -> (f64, f64) {
        let c = self.center();
        let per_offset = self.step() / self.square_size;
        (c + horizontal * per_offset, c - vertical * per_offset)
    }

    /// Grid line positions, from the left/top edge to the right/bottom edge.
    #[allow(clippy::cast_precision_loss)]
    pub fn line_positions(&self) -> Vec<f64> {
        let n = i64::from(self.squares_per_side);
        (-n..=n).map(|i| self.center() + i as f64 * self.step()).collect()
    }
}

fn round1(x: f64) -> f64 {
    // + 0.0 turns -0.0 into 0.0
    (x * 10.0).round() / 10.0 + 0.0
}
