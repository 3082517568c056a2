use crate::models::{Diet, Plan, Status};
use crate::planner::constants::DISPLAY_THRESHOLD;

/// Format a number with six significant digits, trimming trailing zeros.
pub fn format_g(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    let exponent = value.abs().log10().floor() as i32;
    if !(-4..6).contains(&exponent) {
        let s = format!("{:.5e}", value);
        let (mantissa, exp) = s.split_once('e').unwrap_or((&s, "0"));
        return format!("{}e{}", trim_zeros(mantissa), exp);
    }

    let decimals = (5 - exponent).max(0) as usize;
    trim_zeros(&format!("{:.*}", decimals, value)).to_string()
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Render the plan: objective and the foods bought above the display threshold.
pub fn render_plan(plan: &Plan) -> String {
    let mut out = String::new();
    match &plan.status {
        Status::Optimal => {
            out.push('\n');
            out.push_str(&format!("Cost: {}\n", format_g(plan.objective)));
            out.push('\n');
            out.push_str("Buy:\n");
            for item in plan.selected(DISPLAY_THRESHOLD) {
                out.push_str(&format!("{} {}\n", item.food_name, format_g(item.quantity)));
            }
        }
        Status::NoSolution(_) => out.push_str("No solution\n"),
    }
    out
}

/// Display the diet table: bounds per category, then cost and nutrition per food.
pub fn display_diet(diet: &Diet) {
    println!();
    println!("=== Nutrient bounds ({} categories) ===", diet.categories.len());
    println!();

    let max_cat_len = diet
        .categories
        .iter()
        .map(|c| c.name.len())
        .max()
        .unwrap_or(10);

    for category in &diet.categories {
        let max = match category.max {
            Some(max) => format_g(max),
            None => "inf".to_string(),
        };
        println!(
            "  {:<width$}  [{}, {}]",
            category.name,
            format_g(category.min),
            max,
            width = max_cat_len
        );
    }

    println!();
    println!("=== Foods ({} items) ===", diet.foods.len());
    println!();

    let max_name_len = diet.foods.iter().map(|f| f.name.len()).max().unwrap_or(10);

    for food in &diet.foods {
        let nutrients: Vec<String> = diet
            .categories
            .iter()
            .map(|c| format!("{}:{}", c.name, format_g(food.amount(&c.name))))
            .collect();

        let mut tags = Vec::new();
        if let Some(group) = &food.group {
            tags.push(format!("[{}]", group));
        }
        if food.multiplier.is_some() {
            tags.push("[weighted]".to_string());
        }
        let tags_str = if tags.is_empty() {
            String::new()
        } else {
            format!("  {}", tags.join(" "))
        };

        println!(
            "  {:<width$}  {:>6.2}  {}{}",
            food.name,
            food.cost,
            nutrients.join(" "),
            tags_str,
            width = max_name_len
        );
    }

    println!();
}
