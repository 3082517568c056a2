pub mod output;
pub mod render;

pub use output::write_plan_csv;
pub use render::{display_diet, format_g, render_plan};
