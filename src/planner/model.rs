use std::str::FromStr;

use strsim::jaro_winkler;

use crate::error::{DietError, Result};
use crate::models::Diet;
use crate::planner::constants::SUGGESTION_MIN_SIMILARITY;

/// Cap on total servings from one food group, e.g. `dairy=6`.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupLimit {
    pub group: String,
    pub max_servings: f64,
}

impl FromStr for GroupLimit {
    type Err = DietError;

    fn from_str(s: &str) -> Result<Self> {
        let (group, max) = s
            .split_once('=')
            .ok_or_else(|| DietError::InvalidInput(format!("expected GROUP=MAX, got '{}'", s)))?;

        let group = group.trim();
        if group.is_empty() {
            return Err(DietError::InvalidInput(format!("missing group in '{}'", s)));
        }

        let max_servings: f64 = max
            .trim()
            .parse()
            .map_err(|_| DietError::InvalidInput(format!("invalid serving limit in '{}'", s)))?;
        if !max_servings.is_finite() || max_servings < 0.0 {
            return Err(DietError::InvalidInput(format!(
                "serving limit must be non-negative in '{}'",
                s
            )));
        }

        Ok(Self {
            group: group.to_string(),
            max_servings,
        })
    }
}

/// A single constraint row `coeffs . x <= rhs`, stored sparsely.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub coeffs: Vec<(usize, f64)>,
    pub rhs: f64,
}

/// Constraint matrix in compressed sparse column layout.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseColumns {
    pub n_rows: usize,
    pub n_cols: usize,
    pub colptr: Vec<usize>,
    pub rowval: Vec<usize>,
    pub nzval: Vec<f64>,
}

/// All `A x <= b` rows of a diet problem, one column per food.
#[derive(Debug, Clone)]
pub struct DietModel {
    pub n_vars: usize,
    pub rows: Vec<Row>,
}

impl DietModel {
    /// Build nutrient, non-negativity and group limit rows.
    pub fn build(diet: &Diet, limits: &[GroupLimit]) -> Result<Self> {
        let n_vars = diet.foods.len();
        let mut rows = Vec::new();

        for category in &diet.categories {
            let amounts: Vec<(usize, f64)> = diet
                .foods
                .iter()
                .enumerate()
                .map(|(i, f)| (i, f.amount(&category.name)))
                .filter(|(_, a)| *a != 0.0)
                .collect();

            // intake >= min, written as -intake <= -min
            rows.push(Row {
                coeffs: amounts.iter().map(|&(i, a)| (i, -a)).collect(),
                rhs: -category.min,
            });

            if let Some(max) = category.max {
                rows.push(Row {
                    coeffs: amounts,
                    rhs: max,
                });
            }
        }

        for i in 0..n_vars {
            rows.push(Row {
                coeffs: vec![(i, -1.0)],
                rhs: 0.0,
            });
        }

        for limit in limits {
            let members = diet.group_members(&limit.group);
            if members.is_empty() {
                return Err(DietError::UnknownGroup {
                    name: limit.group.clone(),
                    suggestion: suggest_group(diet, &limit.group),
                });
            }
            rows.push(Row {
                coeffs: members.into_iter().map(|i| (i, 1.0)).collect(),
                rhs: limit.max_servings,
            });
        }

        Ok(Self { n_vars, rows })
    }

    pub fn rhs(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.rhs).collect()
    }

    /// Lay the rows out column by column.
    pub fn to_columns(&self) -> SparseColumns {
        let mut rowval: Vec<Vec<usize>> = vec![Vec::new(); self.n_vars];
        let mut nzval: Vec<Vec<f64>> = vec![Vec::new(); self.n_vars];

        for (r, row) in self.rows.iter().enumerate() {
            for &(col, value) in &row.coeffs {
                rowval[col].push(r);
                nzval[col].push(value);
            }
        }

        let mut colptr = Vec::with_capacity(self.n_vars + 1);
        colptr.push(0);
        for col in &rowval {
            colptr.push(colptr[colptr.len() - 1] + col.len());
        }

        SparseColumns {
            n_rows: self.rows.len(),
            n_cols: self.n_vars,
            colptr,
            rowval: rowval.into_iter().flatten().collect(),
            nzval: nzval.into_iter().flatten().collect(),
        }
    }

    /// Largest violation of any row at `x`, 0 if all rows hold.
    pub fn max_violation(&self, x: &[f64]) -> f64 {
        self.rows
            .iter()
            .map(|row| {
                let lhs: f64 = row.coeffs.iter().map(|&(i, a)| a * x[i]).sum();
                (lhs - row.rhs).max(0.0)
            })
            .fold(0.0, f64::max)
    }
}

/// Closest known group name, if any is similar enough.
fn suggest_group(diet: &Diet, name: &str) -> Option<String> {
    let needle = name.to_lowercase();
    diet.groups()
        .into_iter()
        .map(|g| (g, jaro_winkler(&needle, &g.to_lowercase())))
        .filter(|(_, score)| *score >= SUGGESTION_MIN_SIMILARITY)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(g, _)| g.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Food, NutrientCategory};

    fn sample_diet() -> Diet {
        Diet::new(
            vec![
                NutrientCategory::new("calories", 1800.0, Some(2200.0)),
                NutrientCategory::new("protein", 91.0, None),
            ],
            vec![
                Food::new("Milk", 0.89, &[("calories", 100.0), ("protein", 8.0)])
                    .with_group("dairy"),
                Food::new("Chicken", 2.89, &[("calories", 420.0), ("protein", 32.0)]),
            ],
        )
    }

    #[test]
    fn test_row_count() {
        let model = DietModel::build(&sample_diet(), &[]).unwrap();
        // calories lower + upper, protein lower, two non-negativity rows
        assert_eq!(model.rows.len(), 5);
        assert_eq!(model.rhs(), vec![-1800.0, 2200.0, -91.0, 0.0, 0.0]);
    }

    #[test]
    fn test_group_limit_row() {
        let limit: GroupLimit = "dairy=6".parse().unwrap();
        let model = DietModel::build(&sample_diet(), &[limit]).unwrap();
        let last = model.rows.last().unwrap();
        assert_eq!(last.coeffs, vec![(0, 1.0)]);
        assert_eq!(last.rhs, 6.0);
    }

    #[test]
    fn test_unknown_group_suggests_closest() {
        let limit: GroupLimit = "diary=6".parse().unwrap();
        let err = DietModel::build(&sample_diet(), &[limit]).unwrap_err();
        match err {
            DietError::UnknownGroup { name, suggestion } => {
                assert_eq!(name, "diary");
                assert_eq!(suggestion.as_deref(), Some("dairy"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_group_limit() {
        let limit: GroupLimit = " dairy = 2.5 ".parse().unwrap();
        assert_eq!(limit.group, "dairy");
        assert_eq!(limit.max_servings, 2.5);
        assert!("dairy".parse::<GroupLimit>().is_err());
        assert!("=3".parse::<GroupLimit>().is_err());
        assert!("dairy=-1".parse::<GroupLimit>().is_err());
        assert!("dairy=lots".parse::<GroupLimit>().is_err());
    }

    #[test]
    fn test_sparse_columns() {
        let model = DietModel::build(&sample_diet(), &[]).unwrap();
        let csc = model.to_columns();
        assert_eq!(csc.n_rows, 5);
        assert_eq!(csc.n_cols, 2);
        // Each food appears in three nutrient rows and its own sign row
        assert_eq!(csc.colptr, vec![0, 4, 8]);
        assert_eq!(&csc.rowval[..4], &[0, 1, 2, 3]);
        assert_eq!(&csc.nzval[..4], &[-100.0, 100.0, -8.0, -1.0]);
        assert_eq!(&csc.rowval[4..], &[0, 1, 2, 4]);
    }

    #[test]
    fn test_max_violation() {
        let model = DietModel::build(&sample_diet(), &[]).unwrap();
        // 18 servings of milk: 1800 cal, 144 protein
        assert!(model.max_violation(&[18.0, 0.0]) < 1e-9);
        // Nothing bought: short of 1800 calories
        assert!((model.max_violation(&[0.0, 0.0]) - 1800.0).abs() < 1e-9);
    }
}
