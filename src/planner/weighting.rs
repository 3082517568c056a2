use std::f64::consts::TAU;

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::Diet;
use crate::planner::constants::DAYS_PER_YEAR;

/// Per-food adjustment of the base serving cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CostMultiplier {
    /// Constant scale factor.
    Fixed { factor: f64 },

    /// `1 + amplitude * sin(t + phase)` where `t` is the season time in radians.
    Seasonal { amplitude: f64, phase: f64 },
}

impl CostMultiplier {
    /// Multiplier value at season time `t` (radians).
    pub fn factor(&self, t: f64) -> f64 {
        match *self {
            CostMultiplier::Fixed { factor } => factor,
            CostMultiplier::Seasonal { amplitude, phase } => 1.0 + amplitude * (t + phase).sin(),
        }
    }

    /// Multipliers must keep weighted costs strictly positive.
    pub fn validate(&self) -> std::result::Result<(), String> {
        match *self {
            CostMultiplier::Fixed { factor } if !(factor.is_finite() && factor > 0.0) => {
                Err(format!("fixed multiplier {} must be positive", factor))
            }
            CostMultiplier::Seasonal { amplitude, .. }
                if !(amplitude.is_finite() && amplitude.abs() < 1.0) =>
            {
                Err(format!(
                    "seasonal amplitude {} must lie strictly between -1 and 1",
                    amplitude
                ))
            }
            CostMultiplier::Seasonal { phase, .. } if !phase.is_finite() => {
                Err(format!("seasonal phase {} must be finite", phase))
            }
            _ => Ok(()),
        }
    }
}

/// Day of the year (1..=366) for a date.
pub fn day_of_year(date: NaiveDate) -> u32 {
    date.ordinal()
}

/// Day of the year for today's local date.
pub fn today() -> u32 {
    day_of_year(Local::now().date_naive())
}

/// Season time in radians: day 1 maps to 0, one year spans a full period.
pub fn season_time(day: u32) -> f64 {
    TAU * (day.saturating_sub(1)) as f64 / DAYS_PER_YEAR
}

/// Per-food cost vector in diet order.
///
/// With no day the base costs are returned unchanged. Foods without a
/// multiplier keep their base cost.
pub fn weighted_costs(diet: &Diet, day: Option<u32>) -> Vec<f64> {
    let Some(day) = day else {
        return diet.foods.iter().map(|f| f.cost).collect();
    };

    let t = season_time(day);
    diet.foods
        .iter()
        .map(|food| match &food.multiplier {
            Some(m) => food.cost * m.factor(t),
            None => food.cost,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Food, NutrientCategory};
    use std::f64::consts::FRAC_PI_2;

    fn sample_diet() -> Diet {
        Diet::new(
            vec![NutrientCategory::new("calories", 0.0, None)],
            vec![
                Food::new("Plain", 2.0, &[("calories", 1.0)]),
                Food::new("Fixed", 2.0, &[("calories", 1.0)])
                    .with_multiplier(CostMultiplier::Fixed { factor: 1.5 }),
                Food::new("Seasonal", 2.0, &[("calories", 1.0)]).with_multiplier(
                    CostMultiplier::Seasonal {
                        amplitude: 0.5,
                        phase: FRAC_PI_2,
                    },
                ),
            ],
        )
    }

    #[test]
    fn test_no_day_is_identity() {
        assert_eq!(weighted_costs(&sample_diet(), None), vec![2.0, 2.0, 2.0]);
    }

    #[test]
    fn test_weighting_on_first_day() {
        // sin(pi/2) = 1, so the seasonal food peaks on day 1
        let costs = weighted_costs(&sample_diet(), Some(1));
        assert!((costs[0] - 2.0).abs() < 1e-9);
        assert!((costs[1] - 3.0).abs() < 1e-9);
        assert!((costs[2] - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_phase_is_neutral_on_first_day() {
        for amplitude in [-0.9, -0.3, 0.0, 0.25, 0.9] {
            let m = CostMultiplier::Seasonal {
                amplitude,
                phase: 0.0,
            };
            assert_eq!(m.factor(season_time(1)), 1.0);
        }
    }

    #[test]
    fn test_non_finite_phase_reported_as_phase() {
        let err = CostMultiplier::Seasonal {
            amplitude: 0.2,
            phase: f64::NAN,
        }
        .validate()
        .unwrap_err();
        assert!(err.contains("phase"));
        assert!(!err.contains("amplitude"));
    }

    #[test]
    fn test_seasonal_factor_half_year() {
        let m = CostMultiplier::Seasonal {
            amplitude: 0.5,
            phase: FRAC_PI_2,
        };
        // Half a year later the cosine-shaped factor bottoms out
        let t = season_time(1 + (DAYS_PER_YEAR / 2.0) as u32);
        assert!((m.factor(t) - 0.5).abs() < 1e-3);
    }

    #[test]
    fn test_season_time_range() {
        assert_eq!(season_time(1), 0.0);
        assert!((season_time(366) - TAU).abs() < 1e-12);
        assert!(season_time(365) < TAU);
    }

    #[test]
    fn test_day_of_year() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(day_of_year(date), 366);
        let date = NaiveDate::from_ymd_opt(2023, 2, 1).unwrap();
        assert_eq!(day_of_year(date), 32);
    }

    #[test]
    fn test_validate() {
        assert!(CostMultiplier::Fixed { factor: 0.0 }.validate().is_err());
        assert!(CostMultiplier::Fixed { factor: 1.2 }.validate().is_ok());
        assert!(
            CostMultiplier::Seasonal {
                amplitude: -0.99,
                phase: 3.0
            }
            .validate()
            .is_ok()
        );
        assert!(
            CostMultiplier::Seasonal {
                amplitude: 1.0,
                phase: 0.0
            }
            .validate()
            .is_err()
        );
    }

    #[test]
    fn test_multiplier_json_shape() {
        let m: CostMultiplier =
            serde_json::from_str(r#"{"kind": "seasonal", "amplitude": 0.2, "phase": 0.0}"#)
                .unwrap();
        assert_eq!(
            m,
            CostMultiplier::Seasonal {
                amplitude: 0.2,
                phase: 0.0
            }
        );
    }
}
