//! Body mass index
//!
//! BMI computation and the four-band classification used by the snapshot.

use serde::{Deserialize, Serialize};

use super::numeric::round1;

// ============================================================================
// Band Thresholds (kg/m²)
// ============================================================================

/// Lower bound of the Fit band
pub const BMI_FIT_MIN: f64 = 18.5;
/// Lower bound of the Overweight band
pub const BMI_OVERWEIGHT_MIN: f64 = 25.0;
/// Lower bound of the Obese band
pub const BMI_OBESE_MIN: f64 = 30.0;

/// Centimeters per meter
const CM_PER_M: f64 = 100.0;

/// BMI classification band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BmiClass {
    Underweight,
    Fit,
    Overweight,
    Obese,
}

impl BmiClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            BmiClass::Underweight => "Underweight",
            BmiClass::Fit => "Fit",
            BmiClass::Overweight => "Overweight",
            BmiClass::Obese => "Obese",
        }
    }
}

impl std::fmt::Display for BmiClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compute BMI from weight in kilograms and height in centimeters
///
/// Returns `None` when either input is zero, negative or not finite.
/// The result is rounded to one decimal place.
pub fn compute_bmi(weight_kg: f64, height_cm: f64) -> Option<f64> {
    if !is_usable(weight_kg) || !is_usable(height_cm) {
        return None;
    }

    let height_m = height_cm / CM_PER_M;
    let bmi = weight_kg / (height_m * height_m);

    if bmi.is_finite() {
        Some(round1(bmi))
    } else {
        None
    }
}

/// Classify a BMI value; no value means no class, not a default band
pub fn classify_bmi(bmi: Option<f64>) -> Option<BmiClass> {
    let bmi = bmi.filter(|b| b.is_finite())?;

    let class = if bmi < BMI_FIT_MIN {
        BmiClass::Underweight
    } else if bmi < BMI_OVERWEIGHT_MIN {
        BmiClass::Fit
    } else if bmi < BMI_OBESE_MIN {
        BmiClass::Overweight
    } else {
        BmiClass::Obese
    };

    Some(class)
}

fn is_usable(v: f64) -> bool {
    v.is_finite() && v > 0.0
}
