pub mod cli;
pub mod data;
pub mod error;
pub mod interface;
pub mod log;
pub mod models;
pub mod planner;

pub use error::{DietError, Result};
pub use models::{Diet, Food, NutrientCategory, Plan};
pub use planner::{solve, SolveOptions};
