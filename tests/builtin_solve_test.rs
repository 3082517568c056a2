#[macro_use]
extern crate assert_float_eq;

use diet_planner_rs::data::builtin_diet;
use diet_planner_rs::models::Plan;
use diet_planner_rs::planner::{
    solve, DietModel, Penalty, SolveOptions, DISPLAY_THRESHOLD, FEASIBILITY_TOL,
};
use diet_planner_rs::Diet;

fn intake(diet: &Diet, plan: &Plan, category: &str) -> f64 {
    diet.foods
        .iter()
        .map(|f| f.amount(category) * plan.quantity(&f.name))
        .sum()
}

fn assert_within_bounds(diet: &Diet, plan: &Plan) {
    for category in &diet.categories {
        let total = intake(diet, plan, &category.name);
        assert!(
            category.admits(total, FEASIBILITY_TOL * 100.0),
            "{} intake {} outside [{}, {}]",
            category.name,
            total,
            category.min,
            category.upper()
        );
    }
}

#[test]
fn test_linear_cost_optimum() {
    let diet = builtin_diet();
    let plan = solve(&diet, &SolveOptions::default()).unwrap();

    assert!(plan.is_optimal());
    assert_float_absolute_eq!(plan.objective, 9.41268, 1e-3);
    assert_float_absolute_eq!(plan.quantity("chicken"), 1.72424, 1e-3);
    assert_float_absolute_eq!(plan.quantity("hot dog"), 0.992423, 1e-3);
    assert_float_absolute_eq!(plan.quantity("macaroni"), 0.793969, 1e-3);
    assert_float_absolute_eq!(plan.quantity("ice cream"), 0.806041, 1e-3);

    let bought: Vec<&str> = plan
        .selected(DISPLAY_THRESHOLD)
        .map(|item| item.food_name.as_str())
        .collect();
    assert_eq!(bought, vec!["chicken", "hot dog", "macaroni", "ice cream"]);

    assert_within_bounds(&diet, &plan);
}

#[test]
fn test_binding_dairy_limit_raises_cost() {
    let diet = builtin_diet();
    let options = SolveOptions {
        group_limits: vec!["dairy=0.5".parse().unwrap()],
        ..Default::default()
    };

    let plan = solve(&diet, &options).unwrap();
    assert!(plan.is_optimal());
    assert_float_absolute_eq!(plan.objective, 9.56065, 1e-3);
    assert_float_absolute_eq!(plan.quantity("ice cream"), 0.5, 1e-3);
    assert!(plan.quantity("milk") + plan.quantity("ice cream") <= 0.5 + 1e-4);
    assert_within_bounds(&diet, &plan);
}

#[test]
fn test_loose_dairy_limit_keeps_optimum() {
    let diet = builtin_diet();
    let options = SolveOptions {
        group_limits: vec!["dairy=6".parse().unwrap()],
        ..Default::default()
    };

    let plan = solve(&diet, &options).unwrap();
    assert!(plan.is_optimal());
    assert_float_absolute_eq!(plan.objective, 9.41268, 1e-3);
}

#[test]
fn test_fat_free_diet_has_no_solution() {
    // Every food carries some fat, so nothing can be bought and the calorie floor fails
    let mut diet = builtin_diet();
    let fat = diet.categories.iter_mut().find(|c| c.name == "fat").unwrap();
    fat.max = Some(0.0);

    let plan = solve(&diet, &SolveOptions::default()).unwrap();
    assert!(!plan.is_optimal());
    assert!(plan.items.is_empty());
}

#[test]
fn test_quadratic_penalty_spreads_purchase() {
    let diet = builtin_diet();
    let linear = solve(&diet, &SolveOptions::default()).unwrap();
    let options = SolveOptions {
        penalty: Penalty::Quadratic,
        ..Default::default()
    };
    let quadratic = solve(&diet, &options).unwrap();

    assert!(quadratic.is_optimal());
    assert_within_bounds(&diet, &quadratic);

    let count = |plan: &Plan| plan.selected(DISPLAY_THRESHOLD).count();
    assert!(count(&quadratic) > count(&linear));

    // Objective is sum(cost * x^2)
    let expected: f64 = quadratic
        .items
        .iter()
        .map(|i| i.unit_cost * i.quantity * i.quantity)
        .sum();
    assert_float_absolute_eq!(quadratic.objective, expected, 1e-6);

    let model = DietModel::build(&diet, &[]).unwrap();
    let x: Vec<f64> = quadratic.items.iter().map(|i| i.quantity).collect();
    assert!(model.max_violation(&x) < FEASIBILITY_TOL * 100.0);
}

#[test]
fn test_unknown_group_is_an_error() {
    let diet = builtin_diet();
    let options = SolveOptions {
        group_limits: vec!["meat=2".parse().unwrap()],
        ..Default::default()
    };
    assert!(solve(&diet, &options).is_err());
}
