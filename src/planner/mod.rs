pub mod constants;
pub mod model;
pub mod objective;
pub mod solver;
pub mod weighting;

pub use constants::*;
pub use model::{DietModel, GroupLimit};
pub use objective::{Objective, Penalty};
pub use solver::{solve, SolveOptions};
pub use weighting::{day_of_year, today, weighted_costs, CostMultiplier};
