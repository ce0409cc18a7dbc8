use crate::error::{check_tolerance, OptError, OptResult};
use crate::line_search::{Backtracking, LineSearch};
use crate::spaces::{EuclideanSpace, Space};

/// Configuration for limited-memory BFGS.
///
/// The inverse Hessian is never formed: the last `m` correction pairs are
/// applied to the gradient through the two-loop recursion, seeded with the
/// Barzilai–Borwein scale of the most recent pair.
#[derive(Clone, Debug)]
pub struct Lbfgs<S: Space = EuclideanSpace, LS: LineSearch = Backtracking> {
    /// Space to operate on.
    pub space: S,
    /// Step-length policy.
    pub line_search: LS,
    /// Total number of outer iterations, restarts included.
    pub max_iters: usize,
    /// Converged when ‖grad‖∞ ≤ eps or the accepted step's `alpha·‖q‖²` ≤ eps.
    pub eps: f64,
    /// Inverse-Hessian scale used until the first correction pair is stored.
    pub init_hess: f64,
    /// History width (number of stored correction pairs).
    pub m: usize,
    /// If true, per-iteration rows are logged at info level.
    pub verbose: bool,
    /// If true, stores per-iteration trace rows into the report.
    pub collect_trace: bool,
}

impl<S: Space> Lbfgs<S> {
    /// Build a solver on an explicitly provided space.
    pub fn with_space(space: S) -> Self {
        Self {
            space,
            line_search: Backtracking::default(),
            max_iters: 30,
            eps: 0.0,
            init_hess: 1.0,
            m: 8,
            verbose: false,
            collect_trace: false,
        }
    }
}

impl<S: Space, LS: LineSearch> Lbfgs<S, LS> {
    /// Swap the step-length policy.
    pub fn with_line_search<L: LineSearch>(self, line_search: L) -> Lbfgs<S, L> {
        Lbfgs {
            space: self.space,
            line_search,
            max_iters: self.max_iters,
            eps: self.eps,
            init_hess: self.init_hess,
            m: self.m,
            verbose: self.verbose,
            collect_trace: self.collect_trace,
        }
    }

    pub fn validate(&self) -> OptResult<()> {
        check_tolerance(self.eps)?;
        if self.m == 0 {
            return Err(OptError::InvalidHistory {
                m: self.m,
                reason: "must store at least one correction pair",
            });
        }
        if !(self.init_hess.is_finite() && self.init_hess > 0.0) {
            return Err(OptError::InvalidInitHess {
                init_hess: self.init_hess,
                reason: "must be finite and > 0",
            });
        }
        self.line_search.validate()
    }
}

impl Lbfgs<EuclideanSpace> {
    /// Build a solver with Euclidean space defaults.
    pub fn new() -> Self {
        Self::with_space(EuclideanSpace)
    }
}

impl Default for Lbfgs<EuclideanSpace> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line_search::BacktrackingCurvature;

    #[test]
    fn defaults() {
        let solver = Lbfgs::new();
        assert_eq!(solver.max_iters, 30);
        assert_eq!(solver.eps, 0.0);
        assert_eq!(solver.init_hess, 1.0);
        assert_eq!(solver.m, 8);
        assert!(solver.validate().is_ok());
    }

    #[test]
    fn rejects_bad_configuration() {
        let solver = Lbfgs { m: 0, ..Lbfgs::new() };
        assert!(matches!(solver.validate(), Err(OptError::InvalidHistory { m: 0, .. })));

        for init_hess in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let solver = Lbfgs { init_hess, ..Lbfgs::new() };
            assert!(matches!(solver.validate(), Err(OptError::InvalidInitHess { .. })));
        }

        let solver = Lbfgs { eps: -1e-3, ..Lbfgs::new() };
        assert!(matches!(solver.validate(), Err(OptError::InvalidTolerance { .. })));
    }

    #[test]
    fn swapping_line_search_keeps_settings() {
        let solver = Lbfgs { m: 3, max_iters: 7, ..Lbfgs::new() }
            .with_line_search(BacktrackingCurvature::default());
        assert_eq!(solver.m, 3);
        assert_eq!(solver.max_iters, 7);
        assert!(solver.validate().is_ok());
    }
}
