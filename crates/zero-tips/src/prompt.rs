use serde::{Deserialize, Serialize};
use zero_core::UnitSystem;

/// Mean of the absolute horizontal and vertical offsets.
pub fn average_offset(horizontal: f64, vertical: f64) -> f64 {
    (horizontal.abs() + vertical.abs()) / 2.0
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TipRequest {
    pub average_offset: f64,
    pub distance: f64,
    #[serde(default)]
    pub unit: UnitSystem,
}

impl TipRequest {
    pub fn new(average_offset: f64, distance: f64, unit: UnitSystem) -> Self {
        Self { average_offset, distance, unit }
    }

    pub fn from_offsets(horizontal: f64, vertical: f64, distance: f64, unit: UnitSystem) -> Self {
        Self::new(average_offset(horizontal, vertical), distance, unit)
    }
}

pub fn build_prompt(req: &TipRequest) -> String {
    format!(
        "The shooter is at {distance} {dist_unit} and had an average deviation of \
         {offset:.1} {lin_unit}.\n\
         Give 3 short, practical tips on shooting fundamentals (stance, breathing, \
         trigger press) that help a beginner tighten the group.\n\
         Keep the tone encouraging and the wording technically simple.",
        distance = req.distance,
        dist_unit = req.unit.distance_label(),
        offset = req.average_offset,
        lin_unit = req.unit.linear_label(),
    )
}
