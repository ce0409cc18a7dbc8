use crate::error::OptResult;
use crate::line_search::{search_along, LineSearch};
use crate::problems::{FnObjective, Objective};
use crate::solvers::common::trace::{SolverTracer, TraceRow};
use crate::solvers::common::{MinimizeReport, Termination};
use crate::spaces::Space;

use super::types::ConjugateGradient;

impl<S: Space, LS: LineSearch> ConjugateGradient<S, LS> {
    fn run<O>(&self, obj: &O, x: &mut S::Point, trace: &SolverTracer) -> MinimizeReport
    where
        O: Objective<S> + ?Sized,
    {
        let mut grad = self.space.zero_like(x);
        let mut grad_old = self.space.zero_like(x);
        let mut p = self.space.zero_like(x);
        let mut restarts = 0;

        for iter in 0..self.max_iters {
            let f = obj.gradient(x, &mut grad);
            let grad_norm = self.space.norm_inf(&grad);
            if grad_norm <= self.eps {
                trace.emit(TraceRow::iter(iter).f(f).grad_norm(grad_norm).note("converged"));
                return self.report(iter, f, grad_norm, Termination::GradientTolerance, restarts);
            }

            if iter == 0 {
                self.space.scale_into(&mut p, &grad, -1.0);
            } else {
                // p = -grad + beta p
                let beta = self.space.dot(&grad, &grad) / self.space.dot(&grad_old, &grad_old);
                self.space.scale_in_place(&mut p, beta);
                self.space.axpy_in_place(&mut p, -1.0, &grad);
            }

            let mut dphi0 = self.space.dot(&p, &grad);
            if !(dphi0 < 0.0) {
                // Inexact steps can cost the Fletcher–Reeves direction its descent property.
                log::debug!("cg iter {iter}: direction is not a descent direction, restarting");
                self.space.scale_into(&mut p, &grad, -1.0);
                dphi0 = self.space.dot(&p, &grad);
                restarts += 1;
                trace.emit(TraceRow::iter(iter).note("restart"));
            }

            let alpha = match search_along(&self.line_search, &self.space, obj, x, &p, 1.0) {
                Ok(alpha) => alpha,
                Err(err) => {
                    trace.emit(TraceRow::iter(iter).f(f).grad_norm(grad_norm).note("line search failed"));
                    return self.report(iter, f, grad_norm, Termination::LineSearchFailed(err), restarts);
                }
            };

            trace.emit(
                TraceRow::iter(iter)
                    .f(f)
                    .grad_norm(grad_norm)
                    .alpha(alpha)
                    .dphi0(dphi0),
            );

            self.space.axpy_in_place(x, alpha, &p);
            std::mem::swap(&mut grad_old, &mut grad);
        }

        let f = obj.gradient(x, &mut grad);
        let grad_norm = self.space.norm_inf(&grad);
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
        log::debug!("cg stopped after {iters} iterations: {termination:?}");
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
    pub fn minimize<O>(&self, obj: &O, x: &mut S::Point) -> OptResult<MinimizeReport>
    where
        O: Objective<S> + ?Sized,
    {
        self.validate()?;
        let trace = SolverTracer::new("cg", self.verbose, self.collect_trace);
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
