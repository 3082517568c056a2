use std::path::Path;

use crate::error::Result;
use crate::models::Plan;
use crate::planner::constants::DISPLAY_THRESHOLD;

/// Write the foods bought above the display threshold to a CSV file.
///
/// Nothing is written for a plan without a solution.
pub fn write_plan_csv(plan: &Plan, path: &Path) -> Result<bool> {
    if !plan.is_optimal() {
        return Ok(false);
    }

    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(["food", "quantity", "unit_cost", "cost"])?;

    for item in plan.selected(DISPLAY_THRESHOLD) {
        wtr.write_record([
            item.food_name.clone(),
            format!("{:.4}", item.quantity),
            format!("{:.4}", item.unit_cost),
            format!("{:.4}", item.quantity * item.unit_cost),
        ])?;
    }

    wtr.flush()?;
    Ok(true)
}
