/// Outcome reported by the solver.
#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    Optimal,
    /// Anything short of an optimal solution, with the solver's reason.
    NoSolution(String),
}

/// Servings chosen for a single food.
#[derive(Debug, Clone)]
pub struct PlanItem {
    pub food_name: String,

    /// Servings to buy.
    pub quantity: f64,

    /// Cost per serving used by the objective (after weighting).
    pub unit_cost: f64,
}

/// Result of a diet solve.
#[derive(Debug, Clone)]
pub struct Plan {
    pub status: Status,

    /// Objective value at the optimum. Zero when there is no solution.
    pub objective: f64,

    /// One entry per food in diet order. Empty when there is no solution.
    pub items: Vec<PlanItem>,
}

impl Plan {
    pub fn no_solution(reason: String) -> Self {
        Self {
            status: Status::NoSolution(reason),
            objective: 0.0,
            items: Vec::new(),
        }
    }

    pub fn is_optimal(&self) -> bool {
        self.status == Status::Optimal
    }

    /// Items with a quantity strictly above `threshold` servings.
    pub fn selected(&self, threshold: f64) -> impl Iterator<Item = &PlanItem> {
        self.items.iter().filter(move |item| item.quantity > threshold)
    }

    /// Quantity bought of a food (case-insensitive), 0 if absent.
    pub fn quantity(&self, food_name: &str) -> f64 {
        self.items
            .iter()
            .find(|item| item.food_name.eq_ignore_ascii_case(food_name))
            .map(|item| item.quantity)
            .unwrap_or(0.0)
    }

    /// Amount spent, ignoring the objective's penalty shape.
    pub fn total_cost(&self) -> f64 {
        self.items.iter().map(|i| i.quantity * i.unit_cost).sum()
    }
}
