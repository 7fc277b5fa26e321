//! Body profile model
//!
//! Body metrics supplied by the profile provider. Every field is optional.

use serde::Serialize;

/// Body metrics (weights in kilograms, height in centimeters)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl BodyProfile {
    pub fn new(current_weight: Option<f64>, goal_weight: Option<f64>, height: Option<f64>) -> Self {
        Self {
            current_weight,
            goal_weight,
            height,
        }
    }

    /// Current weight, if present and usable
    pub fn current_weight_kg(&self) -> Option<f64> {
        self.current_weight.filter(|w| usable(*w))
    }

    /// Goal weight, if present and usable
    pub fn goal_weight_kg(&self) -> Option<f64> {
        self.goal_weight.filter(|w| usable(*w))
    }

    /// Current and goal weight together, or nothing
    pub fn weight_pair(&self) -> Option<(f64, f64)> {
        Some((self.current_weight_kg()?, self.goal_weight_kg()?))
    }
}

// Zero counts as missing, as does anything that is not a positive finite number
fn usable(v: f64) -> bool {
    v.is_finite() && v > 0.0
}
