/// Days in the weighting period of seasonal cost multipliers.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Minimum servings for a food to be listed in the plan output.
pub const DISPLAY_THRESHOLD: f64 = 0.1;

/// Absolute slack when checking a solution against nutrient bounds.
pub const FEASIBILITY_TOL: f64 = 1e-4;

/// Quantities below this are interior-point noise and are reported as zero.
pub const ZERO_CLAMP: f64 = 1e-9;

// ─────────────────────────────────────────────────────────────────────────────
// Solver settings
// ─────────────────────────────────────────────────────────────────────────────

/// Iteration cap handed to the interior-point solver.
pub const SOLVER_MAX_ITER: u32 = 200;

/// Feasibility tolerance handed to the interior-point solver.
pub const SOLVER_TOL_FEAS: f64 = 1e-9;

/// Minimum similarity before an unknown group name gets a suggestion.
pub const SUGGESTION_MIN_SIMILARITY: f64 = 0.8;
