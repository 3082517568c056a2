use serde::{Deserialize, Serialize};

/// A nutrient category with its daily intake bounds.
///
/// `max` of `None` means the category is unbounded above.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientCategory {
    pub name: String,

    #[serde(default)]
    pub min: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl NutrientCategory {
    pub fn new(name: &str, min: f64, max: Option<f64>) -> Self {
        Self {
            name: name.to_string(),
            min,
            max,
        }
    }

    /// Upper bound as a float, +inf when unbounded.
    #[inline]
    pub fn upper(&self) -> f64 {
        self.max.unwrap_or(f64::INFINITY)
    }

    /// Whether an intake lies within the bounds, allowing `tol` slack.
    pub fn admits(&self, intake: f64, tol: f64) -> bool {
        intake >= self.min - tol && intake <= self.upper() + tol
    }
}
