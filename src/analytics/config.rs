//! Analytics configuration
//!
//! Tunable constants of the weight-goal adherence bonus.

use serde::Serialize;

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::metrics::NumericInput;

/// Daily calorie target assumed for a loss goal
pub const DEFAULT_LOSS_TARGET_CALORIES: f64 = 1500.0;
/// Daily calorie target assumed for a gain goal
pub const DEFAULT_GAIN_TARGET_CALORIES: f64 = 2500.0;

/// Env var overriding the loss target
pub const LOSS_TARGET_ENV: &str = "NUTRILYTICS_LOSS_TARGET_CALORIES";
/// Env var overriding the gain target
pub const GAIN_TARGET_ENV: &str = "NUTRILYTICS_GAIN_TARGET_CALORIES";

/// Engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnalyticsConfig {
    pub loss_target_calories: f64,
    pub gain_target_calories: f64,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            loss_target_calories: DEFAULT_LOSS_TARGET_CALORIES,
            gain_target_calories: DEFAULT_GAIN_TARGET_CALORIES,
        }
    }
}

impl AnalyticsConfig {
    /// Defaults overridden by `NUTRILYTICS_*` environment variables
    pub fn from_env() -> AnalyticsResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable
    pub fn from_lookup<F>(lookup: F) -> AnalyticsResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(LOSS_TARGET_ENV) {
            config.loss_target_calories = parse_target(LOSS_TARGET_ENV, &raw)?;
        }
        if let Some(raw) = lookup(GAIN_TARGET_ENV) {
            config.gain_target_calories = parse_target(GAIN_TARGET_ENV, &raw)?;
        }

        tracing::debug!(
            loss_target = config.loss_target_calories,
            gain_target = config.gain_target_calories,
            "analytics config loaded"
        );

        Ok(config)
    }

    /// Calorie target used for calorie adherence
    pub fn target_calories(&self, is_loss: bool) -> f64 {
        if is_loss {
            self.loss_target_calories
        } else {
            self.gain_target_calories
        }
    }
}

fn parse_target(key: &str, raw: &str) -> AnalyticsResult<f64> {
    match raw.as_finite_f64() {
        Some(v) if v > 0.0 => Ok(v),
        _ => Err(AnalyticsError::Config(format!(
            "{} must be a positive number, got {:?}",
            key, raw
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AnalyticsConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, AnalyticsConfig::default());
        assert_eq!(config.target_calories(true), 1500.0);
        assert_eq!(config.target_calories(false), 2500.0);
    }

    #[test]
    fn test_overrides() {
        let config = AnalyticsConfig::from_lookup(lookup_from(&[
            (LOSS_TARGET_ENV, "1800"),
            (GAIN_TARGET_ENV, " 3000.5 "),
        ]))
        .unwrap();
        assert_eq!(config.loss_target_calories, 1800.0);
        assert_eq!(config.gain_target_calories, 3000.5);
    }

    #[test]
    fn test_rejects_bad_values() {
        for bad in ["abc", "0", "-100", "NaN"] {
            let result = AnalyticsConfig::from_lookup(lookup_from(&[(LOSS_TARGET_ENV, bad)]));
            assert!(matches!(result, Err(AnalyticsError::Config(_))), "accepted {:?}", bad);
        }
    }
}
