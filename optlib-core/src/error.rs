use thiserror::Error;

/// Crate-wide result alias for configuration-checked entry points.
pub type OptResult<T> = Result<T, OptError>;

/// Configuration errors reported before a solver or line search evaluates
/// the objective.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptError {
    /// Convergence tolerance must be finite and non-negative.
    #[error("invalid tolerance eps = {eps}: {reason}")]
    InvalidTolerance { eps: f64, reason: &'static str },

    /// L-BFGS history width must hold at least one correction pair.
    #[error("invalid history width m = {m}: {reason}")]
    InvalidHistory { m: usize, reason: &'static str },

    /// Initial inverse-Hessian scale must be finite and positive.
    #[error("invalid initial inverse-Hessian scale {init_hess}: {reason}")]
    InvalidInitHess { init_hess: f64, reason: &'static str },

    /// A line search parameter is out of range.
    #[error("invalid line search parameter `{name}` = {value}: {reason}")]
    InvalidLineSearch {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
}

pub(crate) fn check_tolerance(eps: f64) -> OptResult<()> {
    if !eps.is_finite() {
        return Err(OptError::InvalidTolerance {
            eps,
            reason: "must be finite",
        });
    }
    if eps < 0.0 {
        return Err(OptError::InvalidTolerance {
            eps,
            reason: "must be >= 0 (0 disables early stopping)",
        });
    }
    Ok(())
}
