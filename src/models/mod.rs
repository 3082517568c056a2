mod diet;
mod food;
mod nutrient;
mod plan;

pub use diet::Diet;
pub use food::Food;
pub use nutrient::NutrientCategory;
pub use plan::{Plan, PlanItem, Status};
