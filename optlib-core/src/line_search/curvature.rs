use crate::error::OptResult;

use super::backtracking::{check_decrease, check_max_iters};
use super::interpolate::{clamp_step, cubic_step, quadratic_step};
use super::{check_origin, sufficient_decrease, LineSearch, LineSearchContext, LineSearchError};

/// Armijo backtracking that refines rejected steps by interpolation.
///
/// The first rejection fits a quadratic through `f0`, `dphi0` and the trial
/// value; later rejections fit a cubic through the two most recent trials.
/// Every refined step is safeguarded into `[0.1 alpha, 0.5 alpha]` of the
/// step it replaces.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BacktrackingCurvature {
    /// Sufficient-decrease constant, in (0, 1).
    pub decrease: f64,
    /// Maximum number of trial evaluations.
    pub max_iters: usize,
}

impl BacktrackingCurvature {
    /// Lower safeguard, relative to the rejected step.
    pub const MIN_SHRINK: f64 = 0.1;
    /// Upper safeguard, relative to the rejected step.
    pub const MAX_SHRINK: f64 = 0.5;

    pub fn new(decrease: f64, max_iters: usize) -> Self {
        Self {
            decrease,
            max_iters,
        }
    }
}

impl Default for BacktrackingCurvature {
    fn default() -> Self {
        Self {
            decrease: 1e-4,
            max_iters: 100,
        }
    }
}

impl LineSearch for BacktrackingCurvature {
    fn validate(&self) -> OptResult<()> {
        check_decrease(self.decrease)?;
        check_max_iters(self.max_iters)
    }

    fn search(
        &self,
        ctx: &LineSearchContext,
        phi: &mut dyn FnMut(f64) -> f64,
    ) -> Result<f64, LineSearchError> {
        check_origin(ctx)?;

        let f0 = ctx.f0;
        let gtp = ctx.dphi0;
        let mut alpha = ctx.alpha0;
        let mut f_prev = f0;
        let mut alpha_prev = alpha;
        let mut last_tried = alpha;

        for iter in 0..self.max_iters {
            let f_alpha = phi(alpha);
            if sufficient_decrease(f_alpha, ctx, self.decrease, alpha) {
                return Ok(alpha);
            }
            last_tried = alpha;

            let candidate = if iter == 0 {
                quadratic_step(f0, gtp, f_alpha, alpha)
            } else {
                cubic_step(f0, gtp, f_alpha, alpha, f_prev, alpha_prev)
            };
            f_prev = f_alpha;
            alpha_prev = alpha;
            alpha = clamp_step(candidate, Self::MIN_SHRINK * alpha, Self::MAX_SHRINK * alpha);
        }

        log::warn!(
            "curvature backtracking line search reached max_iters = {} without sufficient decrease",
            self.max_iters
        );
        Err(LineSearchError::Exhausted {
            trials: self.max_iters,
            last_alpha: last_tried,
        })
    }
}
