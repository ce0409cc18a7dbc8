//! Inexact line searches enforcing the Armijo sufficient-decrease condition.
//!
//! A line search sees the objective only through `phi(alpha) = f(x + alpha p)`
//! together with `f(x)` and the directional derivative `grad(x)·p`, which
//! keeps the policies independent of the vector representation.

mod backtracking;
mod curvature;
pub mod interpolate;

use thiserror::Error;

use crate::error::OptResult;
use crate::problems::Objective;
use crate::spaces::Space;

pub use backtracking::Backtracking;
pub use curvature::BacktrackingCurvature;

/// Per-call context passed to a line search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSearchContext {
    /// First trial step.
    pub alpha0: f64,
    /// f(x) at the origin of the search.
    pub f0: f64,
    /// grad(x)·p at the origin of the search.
    pub dphi0: f64,
}

/// Why a line search could not produce a step.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LineSearchError {
    #[error("no step satisfied sufficient decrease within {trials} trials (last alpha = {last_alpha:e})")]
    Exhausted { trials: usize, last_alpha: f64 },

    #[error("objective or directional derivative is not finite at the line search origin")]
    NonFiniteOrigin,

    #[error("initial step must be finite and positive, got {alpha0}")]
    InvalidInitialStep { alpha0: f64 },
}

/// Policy interface for selecting a step length.
///
/// `phi(alpha)` must return f(x + alpha p). A returned step always satisfies
/// `phi(alpha) <= f0 + decrease * alpha * dphi0` for the policy's decrease
/// constant.
pub trait LineSearch {
    /// Check the policy's parameters.
    fn validate(&self) -> OptResult<()> {
        Ok(())
    }

    fn search(
        &self,
        ctx: &LineSearchContext,
        phi: &mut dyn FnMut(f64) -> f64,
    ) -> Result<f64, LineSearchError>;
}

/// Run `line_search` along `p` from `x`.
///
/// Evaluates f(x) and grad(x) once, forms `gtp = grad·p` and probes trial
/// points `x + alpha p` in a scratch buffer; `x` itself is not touched.
pub fn search_along<S, O, LS>(
    line_search: &LS,
    space: &S,
    obj: &O,
    x: &S::Point,
    p: &S::Point,
    alpha0: f64,
) -> Result<f64, LineSearchError>
where
    S: Space,
    O: Objective<S> + ?Sized,
    LS: LineSearch + ?Sized,
{
    let mut grad = space.zero_like(x);
    let f0 = obj.gradient(x, &mut grad);
    let dphi0 = space.dot(&grad, p);

    let mut trial = space.zero_like(x);
    let mut phi = |alpha: f64| {
        space.axpy_into(&mut trial, x, alpha, p);
        obj.value(&trial)
    };

    let ctx = LineSearchContext { alpha0, f0, dphi0 };
    line_search.search(&ctx, &mut phi)
}

pub(crate) fn check_origin(ctx: &LineSearchContext) -> Result<(), LineSearchError> {
    if !(ctx.alpha0.is_finite() && ctx.alpha0 > 0.0) {
        return Err(LineSearchError::InvalidInitialStep { alpha0: ctx.alpha0 });
    }
    if !(ctx.f0.is_finite() && ctx.dphi0.is_finite()) {
        return Err(LineSearchError::NonFiniteOrigin);
    }
    Ok(())
}

/// Armijo condition I.
#[inline]
pub(crate) fn sufficient_decrease(f_alpha: f64, ctx: &LineSearchContext, decrease: f64, alpha: f64) -> bool {
    f_alpha.is_finite() && f_alpha <= ctx.f0 + decrease * alpha * ctx.dphi0
}
