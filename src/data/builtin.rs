use std::f64::consts::FRAC_PI_2;

use crate::models::{Diet, Food, NutrientCategory};
use crate::planner::weighting::CostMultiplier;

/// The classic diet table based on the USDA Dietary Guidelines (2005).
///
/// Salad is dearest in midwinter and ice cream in midsummer; chicken
/// carries a flat surcharge when weighting is on.
pub fn builtin_diet() -> Diet {
    let categories = vec![
        NutrientCategory::new("calories", 1800.0, Some(2200.0)),
        NutrientCategory::new("protein", 91.0, None),
        NutrientCategory::new("fat", 0.0, Some(65.0)),
        NutrientCategory::new("carbohydrates", 130.0, None),
    ];

    let foods = vec![
        food("hamburger", 2.49, [410.0, 24.0, 26.0, 40.0]),
        food("chicken", 2.89, [420.0, 32.0, 10.0, 0.0])
            .with_multiplier(CostMultiplier::Fixed { factor: 1.1 }),
        food("hot dog", 1.50, [560.0, 20.0, 32.0, 45.0]),
        food("fries", 1.89, [380.0, 4.0, 19.0, 39.0]),
        food("macaroni", 2.09, [320.0, 12.0, 10.0, 75.0]),
        food("pizza", 1.99, [320.0, 15.0, 12.0, 37.0]),
        food("salad", 2.49, [320.0, 31.0, 12.0, 25.0]).with_multiplier(
            CostMultiplier::Seasonal {
                amplitude: 0.3,
                phase: FRAC_PI_2,
            },
        ),
        food("milk", 0.89, [100.0, 8.0, 2.5, 13.0]).with_group("dairy"),
        food("ice cream", 1.59, [330.0, 8.0, 10.0, 32.0])
            .with_group("dairy")
            .with_multiplier(CostMultiplier::Seasonal {
                amplitude: 0.2,
                phase: -FRAC_PI_2,
            }),
    ];

    Diet::new(categories, foods)
}

/// Amounts in category order: calories, protein, fat, carbohydrates.
fn food(name: &str, cost: f64, amounts: [f64; 4]) -> Food {
    let [calories, protein, fat, carbohydrates] = amounts;
    Food::new(
        name,
        cost,
        &[
            ("calories", calories),
            ("protein", protein),
            ("fat", fat),
            ("carbohydrates", carbohydrates),
        ],
    )
}
