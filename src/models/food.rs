use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::planner::weighting::CostMultiplier;

/// A food item with its per-serving cost and nutrition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Food {
    pub name: String,

    /// Base cost of one serving.
    pub cost: f64,

    /// Amount of each nutrient category in one serving.
    pub nutrition: BTreeMap<String, f64>,

    /// Optional group tag (e.g. "dairy") used by group limits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,

    /// Optional cost multiplier applied when weighting is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiplier: Option<CostMultiplier>,
}

impl Food {
    pub fn new(name: &str, cost: f64, nutrition: &[(&str, f64)]) -> Self {
        Self {
            name: name.to_string(),
            cost,
            nutrition: nutrition
                .iter()
                .map(|(category, amount)| (category.to_string(), *amount))
                .collect(),
            group: None,
            multiplier: None,
        }
    }

    pub fn with_group(mut self, group: &str) -> Self {
        self.group = Some(group.to_string());
        self
    }

    pub fn with_multiplier(mut self, multiplier: CostMultiplier) -> Self {
        self.multiplier = Some(multiplier);
        self
    }

    /// Amount of a nutrient per serving, 0 if the food does not list it.
    #[inline]
    pub fn amount(&self, category: &str) -> f64 {
        self.nutrition.get(category).copied().unwrap_or(0.0)
    }

    /// Whether the food belongs to the given group (case-insensitive).
    pub fn in_group(&self, group: &str) -> bool {
        self.group
            .as_deref()
            .is_some_and(|g| g.eq_ignore_ascii_case(group))
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

impl PartialEq for Food {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Food {}
