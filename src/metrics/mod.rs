//! Metric primitives
//!
//! Pure numeric helpers shared by the analytics calculators.

pub mod bmi;
pub mod numeric;

pub use bmi::{classify_bmi, compute_bmi, BmiClass};
pub use numeric::{clamp_percent, round1, safe_number, NumericInput};
