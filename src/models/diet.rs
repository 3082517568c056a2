use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{DietError, Result};
use crate::models::{Food, NutrientCategory};

/// The static diet table: nutrient categories and the foods on offer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diet {
    pub categories: Vec<NutrientCategory>,
    pub foods: Vec<Food>,
}

impl Diet {
    pub fn new(categories: Vec<NutrientCategory>, foods: Vec<Food>) -> Self {
        Self { categories, foods }
    }

    /// Get a food by name (case-insensitive).
    pub fn food(&self, name: &str) -> Option<&Food> {
        let key = name.to_lowercase();
        self.foods.iter().find(|f| f.key() == key)
    }

    /// Distinct group names in first-seen order.
    pub fn groups(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.foods
            .iter()
            .filter_map(|f| f.group.as_deref())
            .filter(|g| seen.insert(g.to_lowercase()))
            .collect()
    }

    /// Column indices of the foods in a group.
    pub fn group_members(&self, group: &str) -> Vec<usize> {
        self.foods
            .iter()
            .enumerate()
            .filter(|(_, f)| f.in_group(group))
            .map(|(i, _)| i)
            .collect()
    }

    /// Check the table is consistent enough to hand to the solver.
    ///
    /// Every food must list an amount for every category and nothing else.
    pub fn validate(&self) -> Result<()> {
        if self.foods.is_empty() {
            return Err(invalid("diet has no foods".to_string()));
        }

        let mut category_names = HashSet::new();
        for category in &self.categories {
            if !category_names.insert(category.name.as_str()) {
                return Err(invalid(format!("duplicate category '{}'", category.name)));
            }
            if !category.min.is_finite() {
                return Err(invalid(format!(
                    "category '{}' has a non-finite minimum",
                    category.name
                )));
            }
            if let Some(max) = category.max {
                if max.is_nan() || max < category.min {
                    return Err(invalid(format!(
                        "category '{}' has max {} below min {}",
                        category.name, max, category.min
                    )));
                }
            }
        }

        let mut food_keys = HashSet::new();
        for food in &self.foods {
            if !food_keys.insert(food.key()) {
                return Err(invalid(format!("duplicate food '{}'", food.name)));
            }
            if !food.cost.is_finite() || food.cost < 0.0 {
                return Err(invalid(format!(
                    "food '{}' has invalid cost {}",
                    food.name, food.cost
                )));
            }
            if let Some(multiplier) = &food.multiplier {
                multiplier
                    .validate()
                    .map_err(|msg| invalid(format!("food '{}': {}", food.name, msg)))?;
            }
            for category in &self.categories {
                match food.nutrition.get(&category.name) {
                    Some(amount) if amount.is_finite() => {}
                    Some(amount) => {
                        return Err(invalid(format!(
                            "food '{}' has invalid {} amount {}",
                            food.name, category.name, amount
                        )));
                    }
                    None => {
                        return Err(invalid(format!(
                            "food '{}' is missing a {} amount",
                            food.name, category.name
                        )));
                    }
                }
            }
            if let Some(unknown) = food
                .nutrition
                .keys()
                .find(|k| !category_names.contains(k.as_str()))
            {
                return Err(invalid(format!(
                    "food '{}' lists unknown category '{}'",
                    food.name, unknown
                )));
            }
        }

        Ok(())
    }
}

fn invalid(msg: String) -> DietError {
    DietError::InvalidData(msg)
}
