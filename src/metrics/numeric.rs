//! Numeric coercion helpers
//!
//! Input records arrive from collaborators that are loose about numbers:
//! macros may be missing, null, or sent as strings. These helpers turn all of
//! that into finite `f64` values without ever panicking.

use serde_json::Value;

/// Anything `safe_number` knows how to read
pub trait NumericInput {
    fn as_finite_f64(&self) -> Option<f64>;
}

impl NumericInput for f64 {
    fn as_finite_f64(&self) -> Option<f64> {
        self.is_finite().then_some(*self)
    }
}

impl NumericInput for Value {
    fn as_finite_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
            Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
            _ => None,
        }
    }
}

impl NumericInput for str {
    fn as_finite_f64(&self) -> Option<f64> {
        self.trim().parse::<f64>().ok().filter(|v| v.is_finite())
    }
}

impl<T: NumericInput + ?Sized> NumericInput for &T {
    fn as_finite_f64(&self) -> Option<f64> {
        (**self).as_finite_f64()
    }
}

impl<T: NumericInput> NumericInput for Option<T> {
    fn as_finite_f64(&self) -> Option<f64> {
        self.as_ref().and_then(|v| v.as_finite_f64())
    }
}

/// Read a number, falling back for absent, null, non-numeric or non-finite input
pub fn safe_number<T: NumericInput + ?Sized>(value: &T, fallback: f64) -> f64 {
    value.as_finite_f64().unwrap_or(fallback)
}

/// Clamp a percentage to [0, 100]; NaN becomes 0
pub fn clamp_percent(v: f64) -> f64 {
    if v.is_nan() {
        return 0.0;
    }
    v.clamp(0.0, 100.0)
}

/// Round to one decimal place
///
/// Magnitudes too large to scale are returned as is.
pub fn round1(v: f64) -> f64 {
    let scaled = v * 10.0;
    if !scaled.is_finite() {
        return v;
    }
    scaled.round() / 10.0
}
