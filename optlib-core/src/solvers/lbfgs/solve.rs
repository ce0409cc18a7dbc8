use crate::error::OptResult;
use crate::line_search::{search_along, LineSearch};
use crate::problems::{FnObjective, Objective};
use crate::solvers::common::trace::{SolverTracer, TraceRow};
use crate::solvers::common::{MinimizeReport, Termination};
use crate::spaces::Space;

use super::history::CorrectionHistory;
use super::types::Lbfgs;

impl<S: Space, LS: LineSearch> Lbfgs<S, LS> {
    fn run<O>(&self, obj: &O, x: &mut S::Point, trace: &SolverTracer) -> MinimizeReport
    where
        O: Objective<S> + ?Sized,
    {
        let space = &self.space;
        let mut history = CorrectionHistory::new(space, &*x, self.m);

        let mut grad = space.zero_like(x);
        let mut grad_old = space.zero_like(x);
        let mut x_old = space.zero_like(x);
        let mut q = space.zero_like(x);
        let mut s = space.zero_like(x);
        let mut y = space.zero_like(x);
        let mut step = space.zero_like(x);

        let mut f = obj.gradient(x, &mut grad);
        let mut grad_norm = space.norm_inf(&grad);
        let mut gamma = self.init_hess;
        let mut alpha_init = 1.0;
        let mut restarts = 0;

        if grad_norm <= self.eps {
            trace.emit(TraceRow::iter(0).f(f).grad_norm(grad_norm).note("converged"));
            return self.report(0, f, grad_norm, Termination::GradientTolerance, restarts);
        }

        for iter in 0..self.max_iters {
            let iters = iter + 1;
            space.copy_into(&mut x_old, x);
            space.copy_into(&mut grad_old, &grad);

            space.copy_into(&mut q, &grad);
            history.apply_inverse_hessian(space, &mut q, gamma);

            if space.dot(&q, &grad) <= self.eps {
                log::debug!("lbfgs iter {iter}: quasi-Newton direction is not a descent direction, restarting");
                space.copy_into(&mut q, &grad);
                history.clear();
                alpha_init = (1.0 / grad_norm).min(1.0);
                restarts += 1;
                trace.emit(TraceRow::iter(iter).history(0).note("restart"));
            }

            space.scale_into(&mut step, &q, -1.0);
            let rate = match search_along(&self.line_search, space, obj, x, &step, alpha_init) {
                Ok(alpha) => alpha,
                Err(err) => {
                    trace.emit(TraceRow::iter(iter).f(f).grad_norm(grad_norm).note("line search failed"));
                    return self.report(iter, f, grad_norm, Termination::LineSearchFailed(err), restarts);
                }
            };

            space.axpy_in_place(x, -rate, &q);
            f = obj.gradient(x, &mut grad);
            grad_norm = space.norm_inf(&grad);

            trace.emit(
                TraceRow::iter(iter)
                    .f(f)
                    .grad_norm(grad_norm)
                    .alpha(rate)
                    .dphi0(-space.dot(&q, &grad_old))
                    .gamma(gamma)
                    .history(history.len()),
            );

            if rate * space.dot(&q, &q) <= self.eps {
                return self.report(iters, f, grad_norm, Termination::StepTolerance, restarts);
            }
            if grad_norm <= self.eps {
                return self.report(iters, f, grad_norm, Termination::GradientTolerance, restarts);
            }

            space.difference_into(&mut s, &x_old, x);
            space.difference_into(&mut y, &grad_old, &grad);
            let yy = space.dot(&y, &y);
            if !(yy > 0.0) {
                trace.emit(TraceRow::iter(iter).note("curvature breakdown"));
                return self.report(iters, f, grad_norm, Termination::CurvatureBreakdown, restarts);
            }

            let sy = space.dot(&s, &y);
            if sy > 0.0 {
                history.push(space, &s, &y, 1.0 / sy);
                gamma = sy / yy;
            } else {
                log::debug!("lbfgs iter {iter}: skipping correction pair with s·y = {sy:e}");
            }
            alpha_init = 1.0;
        }

        self.report(self.max_iters, f, grad_norm, Termination::BudgetExhausted, restarts)
    }

    fn report(
        &self,
        iters: usize,
        f: f64,
        grad_norm: f64,
        termination: Termination,
        restarts: usize,
    ) -> MinimizeReport {
        log::debug!("lbfgs stopped after {iters} iterations: {termination:?}");
        MinimizeReport {
            iters,
            f,
            grad_norm,
            termination,
            restarts,
            trace: None,
        }
    }

    /// Minimize `obj` starting from `x`; `x` is overwritten with the final
    /// iterate.
    ///
    /// Every outer iteration counts against `max_iters`, including the ones
    /// spent after a steepest-descent restart.
    pub fn minimize<O>(&self, obj: &O, x: &mut S::Point) -> OptResult<MinimizeReport>
    where
        O: Objective<S> + ?Sized,
    {
        self.validate()?;
        let trace = SolverTracer::new("lbfgs", self.verbose, self.collect_trace);
        let mut report = self.run(obj, x, &trace);
        report.trace = trace.into_history();
        Ok(report)
    }

    /// Minimize using user-provided value and gradient functions.
    ///
    /// `grad_fn(x, grad)` fills `grad` and returns f(x).
    pub fn minimize_with_fn<F, G>(
        &self,
        x: &mut S::Point,
        value_fn: F,
        grad_fn: G,
    ) -> OptResult<MinimizeReport>
    where
        F: Fn(&S::Point) -> f64,
        G: Fn(&S::Point, &mut S::Point) -> f64,
    {
        self.minimize(&FnObjective::new(value_fn, grad_fn), x)
    }
}
