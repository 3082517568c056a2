use clap::ValueEnum;

/// Shape of the cost term in the objective.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Penalty {
    /// Minimise `sum(cost * x)`.
    #[default]
    None,

    /// Minimise `sum(cost * x^2)`, spreading purchases over more foods.
    Quadratic,
}

/// Objective in the solver's `0.5 * x'Px + q'x` form.
///
/// `P` is diagonal, so only its diagonal is stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Objective {
    pub p_diag: Vec<f64>,
    pub q: Vec<f64>,
}

impl Objective {
    pub fn build(costs: &[f64], penalty: Penalty) -> Self {
        match penalty {
            Penalty::None => Self {
                p_diag: vec![0.0; costs.len()],
                q: costs.to_vec(),
            },
            Penalty::Quadratic => Self {
                p_diag: costs.iter().map(|c| 2.0 * c).collect(),
                q: vec![0.0; costs.len()],
            },
        }
    }

    pub fn is_quadratic(&self) -> bool {
        self.p_diag.iter().any(|&p| p != 0.0)
    }

    /// Objective value at `x`.
    pub fn evaluate(&self, x: &[f64]) -> f64 {
        self.p_diag
            .iter()
            .zip(&self.q)
            .zip(x)
            .map(|((p, q), xi)| 0.5 * p * xi * xi + q * xi)
            .sum()
    }
}
