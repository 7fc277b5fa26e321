//! Shared nutrition data structure
//!
//! Used by planned meals, completed meals and the aggregator.

use serde::Serialize;

use crate::metrics::safe_number;

/// Macro-nutrient totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Nutrition {
    pub calories: f64,
    pub protein: f64, // grams
    pub carbs: f64,   // grams
    pub fat: f64,     // grams
}

impl Nutrition {
    /// Create a new Nutrition with all zeros
    pub fn zero() -> Self {
        Self::default()
    }

    /// Add another nutrition to this one
    pub fn add(&self, other: &Nutrition) -> Self {
        Self {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            carbs: self.carbs + other.carbs,
            fat: self.fat + other.fat,
        }
    }

    /// Replace NaN or infinite values with zero
    pub fn sanitized(&self) -> Self {
        Self {
            calories: safe_number(&self.calories, 0.0),
            protein: safe_number(&self.protein, 0.0),
            carbs: safe_number(&self.carbs, 0.0),
            fat: safe_number(&self.fat, 0.0),
        }
    }

    /// Replace negative totals with zero
    pub fn floor_at_zero(&self) -> Self {
        Self {
            calories: self.calories.max(0.0),
            protein: self.protein.max(0.0),
            carbs: self.carbs.max(0.0),
            fat: self.fat.max(0.0),
        }
    }
}

impl std::ops::Add for Nutrition {
    type Output = Nutrition;

    fn add(self, other: Nutrition) -> Nutrition {
        Nutrition::add(&self, &other)
    }
}

impl std::iter::Sum for Nutrition {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Nutrition::zero(), |acc, n| acc + n)
    }
}
