use crate::error::{OptError, OptResult};

use super::{check_origin, sufficient_decrease, LineSearch, LineSearchContext, LineSearchError};

/// Armijo backtracking with a fixed geometric shrink.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Backtracking {
    /// Sufficient-decrease constant, in (0, 1).
    pub decrease: f64,
    /// Maximum number of trial evaluations.
    pub max_iters: usize,
    /// Shrink factor applied to a rejected step, in (0, 1).
    pub tau: f64,
}

impl Backtracking {
    pub fn new(decrease: f64, max_iters: usize) -> Self {
        Self {
            decrease,
            max_iters,
            ..Self::default()
        }
    }
}

impl Default for Backtracking {
    fn default() -> Self {
        Self {
            decrease: 1e-4,
            max_iters: 100,
            tau: 0.7,
        }
    }
}

pub(crate) fn check_decrease(decrease: f64) -> OptResult<()> {
    if !(decrease > 0.0 && decrease < 1.0) {
        return Err(OptError::InvalidLineSearch {
            name: "decrease",
            value: decrease,
            reason: "must lie in (0, 1)",
        });
    }
    Ok(())
}

pub(crate) fn check_max_iters(max_iters: usize) -> OptResult<()> {
    if max_iters == 0 {
        return Err(OptError::InvalidLineSearch {
            name: "max_iters",
            value: 0.0,
            reason: "must allow at least one trial",
        });
    }
    Ok(())
}

impl LineSearch for Backtracking {
    fn validate(&self) -> OptResult<()> {
        check_decrease(self.decrease)?;
        check_max_iters(self.max_iters)?;
        if !(self.tau > 0.0 && self.tau < 1.0) {
            return Err(OptError::InvalidLineSearch {
                name: "tau",
                value: self.tau,
                reason: "must lie in (0, 1)",
            });
        }
        Ok(())
    }

    fn search(
        &self,
        ctx: &LineSearchContext,
        phi: &mut dyn FnMut(f64) -> f64,
    ) -> Result<f64, LineSearchError> {
        check_origin(ctx)?;

        let mut alpha = ctx.alpha0;
        for _ in 0..self.max_iters {
            let f_alpha = phi(alpha);
            if sufficient_decrease(f_alpha, ctx, self.decrease, alpha) {
                return Ok(alpha);
            }
            alpha *= self.tau;
        }

        log::warn!(
            "backtracking line search reached max_iters = {} without sufficient decrease",
            self.max_iters
        );
        Err(LineSearchError::Exhausted {
            trials: self.max_iters,
            last_alpha: alpha / self.tau,
        })
    }
}
