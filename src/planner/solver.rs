use clarabel::algebra::CscMatrix;
use clarabel::solver::{
    DefaultSettingsBuilder, DefaultSolver, IPSolver, NonnegativeConeT, SolverStatus,
};
use log::{debug, info, warn};

use crate::error::{DietError, Result};
use crate::models::{Diet, Plan, PlanItem, Status};
use crate::planner::constants::{SOLVER_MAX_ITER, SOLVER_TOL_FEAS, ZERO_CLAMP};
use crate::planner::model::{DietModel, GroupLimit};
use crate::planner::objective::{Objective, Penalty};
use crate::planner::weighting::weighted_costs;

/// Knobs for a single solve.
#[derive(Debug, Clone, Default)]
pub struct SolveOptions {
    pub penalty: Penalty,

    /// Day of year used for cost weighting; `None` disables weighting.
    pub day: Option<u32>,

    pub group_limits: Vec<GroupLimit>,
}

/// Build the diet problem and hand it to the solver.
///
/// A non-optimal solver outcome is not an error: it is reported as
/// `Status::NoSolution` on the returned plan.
pub fn solve(diet: &Diet, options: &SolveOptions) -> Result<Plan> {
    diet.validate()?;

    let costs = weighted_costs(diet, options.day);
    log_costs(diet, &costs, options.day);

    let objective = Objective::build(&costs, options.penalty);
    let model = DietModel::build(diet, &options.group_limits)?;
    debug!(
        "Diet model: {} variables, {} constraint rows, {} objective",
        model.n_vars,
        model.rows.len(),
        if objective.is_quadratic() { "quadratic" } else { "linear" }
    );

    let (status, x) = run_solver(&objective, &model)?;

    if !is_optimal(&status) {
        warn!("Solver finished with status {:?}", status);
        return Ok(Plan::no_solution(format!("{:?}", status)));
    }

    let x: Vec<f64> = x
        .into_iter()
        .map(|v| if v.abs() < ZERO_CLAMP { 0.0 } else { v.max(0.0) })
        .collect();

    debug!("Largest constraint violation: {:.3e}", model.max_violation(&x));

    let items = diet
        .foods
        .iter()
        .zip(&costs)
        .zip(&x)
        .map(|((food, &unit_cost), &quantity)| PlanItem {
            food_name: food.name.clone(),
            quantity,
            unit_cost,
        })
        .collect();

    Ok(Plan {
        status: Status::Optimal,
        objective: objective.evaluate(&x),
        items,
    })
}

/// Solved to full or reduced accuracy.
fn is_optimal(status: &SolverStatus) -> bool {
    matches!(status, SolverStatus::Solved | SolverStatus::AlmostSolved)
}

fn run_solver(objective: &Objective, model: &DietModel) -> Result<(SolverStatus, Vec<f64>)> {
    let n = model.n_vars;

    // P is diagonal, hence upper triangular as the solver requires
    let p_entries: Vec<(usize, f64)> = objective
        .p_diag
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, v)| *v != 0.0)
        .collect();
    let mut p_colptr = Vec::with_capacity(n + 1);
    p_colptr.push(0);
    for col in 0..n {
        let filled = p_entries.iter().filter(|(i, _)| *i <= col).count();
        p_colptr.push(filled);
    }
    let p = CscMatrix::new(
        n,
        n,
        p_colptr,
        p_entries.iter().map(|(i, _)| *i).collect(),
        p_entries.iter().map(|(_, v)| *v).collect(),
    );

    let columns = model.to_columns();
    let a = CscMatrix::new(
        columns.n_rows,
        columns.n_cols,
        columns.colptr,
        columns.rowval,
        columns.nzval,
    );
    let b = model.rhs();
    let cones = [NonnegativeConeT(b.len())];

    let settings = DefaultSettingsBuilder::default()
        .verbose(false)
        .max_iter(SOLVER_MAX_ITER)
        .tol_feas(SOLVER_TOL_FEAS)
        .build()
        .map_err(|e| DietError::Solver(e.to_string()))?;

    let mut solver = DefaultSolver::new(&p, &objective.q, &a, &b, &cones, settings)
        .map_err(|e| DietError::Solver(format!("{:?}", e)))?;
    solver.solve();

    let solution = &solver.solution;
    debug!(
        "Solver finished: {:?} after {} iterations",
        solution.status, solution.iterations
    );

    Ok((solution.status.clone(), solution.x.clone()))
}

/// The few cost prints kept for checking the weighting by eye.
fn log_costs(diet: &Diet, costs: &[f64], day: Option<u32>) {
    match day {
        Some(day) => {
            info!("Weighting costs for day {} of the year", day);
            for (food, cost) in diet.foods.iter().zip(costs) {
                info!("  {}: base {:.2} -> weighted {:.4}", food.name, food.cost, cost);
            }
        }
        None => {
            for food in &diet.foods {
                debug!("  {}: cost {:.2}", food.name, food.cost);
            }
        }
    }
}
