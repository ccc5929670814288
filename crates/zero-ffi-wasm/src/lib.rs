// crates/zero-ffi-wasm/src/lib.rs
//
// WASM bindings: zero calculator + target grid exports.

use wasm_bindgen::prelude::*;
use serde::{Deserialize, Serialize};
use serde_wasm_bindgen as swb;

// --- our crates ---
use zero_core::{
    AdjustmentType, InputMode, Rounding, TargetGrid, UnitSystem, ZeroCalculator, ZeroInput,
    ZeroResult,
};

// Better panic messages in browser console
#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
}

/* --------------------------- Shared DTOs (JS) --------------------------- */

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsZeroInput {
    pub distance: f64,
    /// "METRIC" | "IMPERIAL"
    pub unit: String,
    /// "MOA_1_4" | "1/4 MOA" | ... (see `adjustment_labels_js`)
    pub adjustment: String,
    /// "measured" (default) | "squares"
    #[serde(default)]
    pub input_mode: Option<String>,
    /// "half-away" (default) | "half-even"
    #[serde(default)]
    pub rounding: Option<String>,
    pub horizontal_offset: f64,
    pub vertical_offset: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsZeroResult {
    pub horizontal_clicks: u32,
    pub horizontal_direction: String,
    pub vertical_clicks: u32,
    pub vertical_direction: String,
    pub click_size: f64,
    pub unit_label: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JsOffset {
    pub horizontal: f64,
    pub vertical: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JsPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsAdjustment {
    pub name: String,
    pub label: String,
    pub family: String,
    /// One click in MOA and in MIL, whatever the turret family.
    pub click_moa: f64,
    pub click_mil: f64,
}

impl JsZeroInput {
    fn to_core(&self) -> Result<(ZeroInput, ZeroCalculator), String> {
        let unit: UnitSystem = self.unit.parse().map_err(|e| format!("{e}"))?;
        let adjustment: AdjustmentType = self.adjustment.parse().map_err(|e| format!("{e}"))?;
        let input_mode: InputMode = match &self.input_mode {
            Some(m) => m.parse().map_err(|e| format!("{e}"))?,
            None => InputMode::Measured,
        };
        let rounding: Rounding = match &self.rounding {
            Some(r) => r.parse().map_err(|e| format!("{e}"))?,
            None => Rounding::default(),
        };
        let input = ZeroInput::new(
            self.distance,
            unit,
            adjustment,
            self.horizontal_offset,
            self.vertical_offset,
        )
        .with_input_mode(input_mode);
        Ok((input, ZeroCalculator::new(rounding)))
    }
}

fn to_js_result(r: ZeroResult, unit: UnitSystem) -> JsZeroResult {
    JsZeroResult {
        horizontal_clicks: r.horizontal_clicks,
        horizontal_direction: r.horizontal_direction.to_string(),
        vertical_clicks: r.vertical_clicks,
        vertical_direction: r.vertical_direction.to_string(),
        click_size: r.click_size,
        unit_label: unit.linear_label().to_string(),
        description: r.description,
    }
}

/// Plain-Rust core of `compute_zero_js`. `Ok(None)` is the no-op.
pub fn compute_zero(inp: &JsZeroInput) -> Result<Option<JsZeroResult>, String> {
    let (input, calc) = inp.to_core()?;
    Ok(calc.compute(&input).map(|r| to_js_result(r, input.unit)))
}

/* ------------------------------ Calculator ------------------------------ */

/// Returns the correction, or `null` when the input cannot produce one
/// (e.g. distance 0); the UI should then keep showing its previous result.
#[wasm_bindgen]
pub fn compute_zero_js(input: JsValue) -> Result<JsValue, JsValue> {
    let inp: JsZeroInput = swb::from_value(input)?;
    match compute_zero(&inp).map_err(|e| JsValue::from_str(&e))? {
        Some(out) => swb::to_value(&out).map_err(|e| e.into()),
        None => Ok(JsValue::NULL),
    }
}

#[wasm_bindgen]
pub fn adjustment_labels_js() -> Result<JsValue, JsValue> {
    swb::to_value(&adjustment_labels()).map_err(|e| e.into())
}

pub fn adjustment_labels() -> Vec<JsAdjustment> {
    AdjustmentType::ALL
        .into_iter()
        .map(|a| JsAdjustment {
            name: a.name().to_string(),
            label: a.label().to_string(),
            family: a.family().to_string(),
            click_moa: a.click_angle_moa(),
            click_mil: a.click_angle_mil(),
        })
        .collect()
}

/* --------------------------------- Grid --------------------------------- */

/// Pointer position in the 400x400 target view box -> offsets.
#[wasm_bindgen]
pub fn grid_point_to_offset_js(x: f64, y: f64) -> Result<JsValue, JsValue> {
    let (horizontal, vertical) = TargetGrid::default().point_to_offset(x, y);
    swb::to_value(&JsOffset { horizontal, vertical }).map_err(|e| e.into())
}

/// Offsets -> impact marker position in the target view box.
#[wasm_bindgen]
pub fn grid_offset_to_point_js(horizontal: f64, vertical: f64) -> Result<JsValue, JsValue> {
    let (x, y) = TargetGrid::default().offset_to_point(horizontal, vertical);
    swb::to_value(&JsPoint { x, y }).map_err(|e| e.into())
}

/// Grid line positions along either axis, edge to edge.
#[wasm_bindgen]
pub fn grid_lines_js() -> Vec<f64> {
    grid_lines()
}

pub fn grid_lines() -> Vec<f64> {
    TargetGrid::default().line_positions()
}

/* -------------------------------- tests -------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(distance: f64, unit: &str, adjustment: &str, h: f64, v: f64) -> JsZeroInput {
        JsZeroInput {
            distance,
            unit: unit.into(),
            adjustment: adjustment.into(),
            input_mode: None,
            rounding: None,
            horizontal_offset: h,
            vertical_offset: v,
        }
    }

    #[test]
    fn computes_through_dto() {
        let out = compute_zero(&dto(25.0, "METRIC", "1/4 MOA", 2.0, -1.0)).unwrap().unwrap();
        assert_eq!(out.horizontal_clicks, 11);
        assert_eq!(out.horizontal_direction, "LEFT");
        assert_eq!(out.vertical_clicks, 6);
        assert_eq!(out.vertical_direction, "UP");
        assert_eq!(out.unit_label, "cm");
    }

    #[test]
    fn zero_distance_is_none() {
        assert_eq!(compute_zero(&dto(0.0, "IMPERIAL", "MIL_0_1", 1.0, 1.0)).unwrap(), None);
    }

    #[test]
    fn bad_names_are_errors() {
        assert!(compute_zero(&dto(25.0, "parsecs", "MOA_1_4", 0.0, 0.0)).is_err());
        assert!(compute_zero(&dto(25.0, "METRIC", "MOA_1_3", 0.0, 0.0)).is_err());
        let mut d = dto(25.0, "METRIC", "MOA_1_4", 0.0, 0.0);
        d.rounding = Some("ceil".into());
        assert!(compute_zero(&d).is_err());
    }

    #[test]
    fn dto_accepts_js_shape() {
        let raw = r#"{"distance": 100, "unit": "IMPERIAL", "adjustment": "MIL_0_1",
                      "input_mode": "measured", "horizontal_offset": -0.72, "vertical_offset": 0}"#;
        let d: JsZeroInput = serde_json::from_str(raw).unwrap();
        let out = compute_zero(&d).unwrap().unwrap();
        assert_eq!(out.horizontal_clicks, 2);
        assert_eq!(out.horizontal_direction, "RIGHT");
        assert_eq!(out.vertical_direction, "NONE");
    }

    #[test]
    fn lists_all_adjustments() {
        let labels = adjustment_labels();
        assert_eq!(labels.len(), 5);
        assert_eq!(labels[3].name, "MIL_0_1");
        assert_eq!(labels[3].family, "MIL");
        assert_eq!(labels[3].click_mil, 0.1);
        assert!((labels[3].click_moa - 0.343_774_7).abs() < 1e-6);
        assert_eq!(labels[0].click_moa, 0.25);
    }

    #[test]
    fn grid_lines_cover_view_box() {
        let lines = grid_lines();
        assert_eq!(lines.len(), 21);
        assert_eq!(lines.first().copied(), Some(0.0));
        assert_eq!(lines.last().copied(), Some(400.0));
        assert!(lines.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn centered_point_has_no_negative_zero() {
        let (h, v) = TargetGrid::default().point_to_offset(199.9, 200.1);
        assert!(h.is_sign_positive() && v.is_sign_positive());
    }
}
