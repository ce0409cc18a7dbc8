use crate::error::{check_tolerance, OptResult};
use crate::line_search::{Backtracking, LineSearch};
use crate::spaces::{EuclideanSpace, Space};

/// Configuration for nonlinear conjugate gradient (Fletcher–Reeves).
#[derive(Clone, Debug)]
pub struct ConjugateGradient<S: Space = EuclideanSpace, LS: LineSearch = Backtracking> {
    /// Space to operate on.
    pub space: S,
    /// Step-length policy; every search starts from a unit step.
    pub line_search: LS,
    /// Maximum number of outer iterations.
    pub max_iters: usize,
    /// Converged when ‖grad‖∞ ≤ eps. 0 runs the full budget.
    pub eps: f64,
    /// If true, per-iteration rows are logged at info level.
    pub verbose: bool,
    /// If true, stores per-iteration trace rows into the report.
    pub collect_trace: bool,
}

impl<S: Space> ConjugateGradient<S> {
    /// Build a solver on an explicitly provided space.
    pub fn with_space(space: S) -> Self {
        Self {
            space,
            line_search: Backtracking::default(),
            max_iters: 100,
            eps: 0.0,
            verbose: false,
            collect_trace: false,
        }
    }
}

impl<S: Space, LS: LineSearch> ConjugateGradient<S, LS> {
    /// Swap the step-length policy.
    pub fn with_line_search<L: LineSearch>(self, line_search: L) -> ConjugateGradient<S, L> {
        ConjugateGradient {
            space: self.space,
            line_search,
            max_iters: self.max_iters,
            eps: self.eps,
            verbose: self.verbose,
            collect_trace: self.collect_trace,
        }
    }

    pub fn validate(&self) -> OptResult<()> {
        check_tolerance(self.eps)?;
        self.line_search.validate()
    }
}

impl ConjugateGradient<EuclideanSpace> {
    /// Build a solver with Euclidean space defaults.
    pub fn new() -> Self {
        Self::with_space(EuclideanSpace)
    }
}

impl Default for ConjugateGradient<EuclideanSpace> {
    fn default() -> Self {
        Self::new()
    }
}
