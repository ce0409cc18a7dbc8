use crate::line_search::LineSearchError;

use super::trace::SolverTraceRecord;

/// Why a solver stopped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Termination {
    /// ‖grad‖∞ ≤ eps.
    GradientTolerance,
    /// The accepted step's contribution `alpha·‖q‖²` fell to eps or below.
    StepTolerance,
    /// Consecutive gradients were identical (`y·y ≤ 0`); the curvature
    /// history could not be extended.
    CurvatureBreakdown,
    /// `max_iters` outer iterations ran without meeting the tolerance.
    BudgetExhausted,
    /// The line search found no acceptable step; the point is the last
    /// accepted iterate.
    LineSearchFailed(LineSearchError),
}

impl Termination {
    /// True when a convergence test stopped the run.
    pub fn is_converged(&self) -> bool {
        matches!(self, Self::GradientTolerance | Self::StepTolerance)
    }
}

/// Summary of a `minimize` call. The minimizer itself is left in the
/// caller's point.
#[derive(Clone, Debug)]
pub struct MinimizeReport {
    /// Outer iterations executed.
    pub iters: usize,
    /// f at the returned point.
    pub f: f64,
    /// ‖grad‖∞ at the returned point.
    pub grad_norm: f64,
    pub termination: Termination,
    /// Times the search direction was reset to steepest descent.
    pub restarts: usize,
    pub trace: Option<Vec<SolverTraceRecord>>,
}

impl MinimizeReport {
    pub fn converged(&self) -> bool {
        self.termination.is_converged()
    }
}
