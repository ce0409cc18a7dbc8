use optlib::{ConjugateGradient, LineSearch, LineSearchContext, LineSearchError};

/// Halving search that gives up once the step gets too small.
#[derive(Clone, Copy, Debug)]
struct MyLineSearch {
    decrease: f64,
    min_alpha: f64,
}

impl Default for MyLineSearch {
    fn default() -> Self {
        Self {
            decrease: 1e-3,
            min_alpha: 1e-8,
        }
    }
}

impl LineSearch for MyLineSearch {
    fn search(
        &self,
        ctx: &LineSearchContext,
        phi: &mut dyn FnMut(f64) -> f64,
    ) -> Result<f64, LineSearchError> {
        let mut alpha = ctx.alpha0;
        let mut trials = 0;
        while alpha >= self.min_alpha {
            trials += 1;
            let f_trial = phi(alpha);
            if f_trial.is_finite() && f_trial <= ctx.f0 + self.decrease * alpha * ctx.dphi0 {
                return Ok(alpha);
            }
            alpha *= 0.5;
        }
        Err(LineSearchError::Exhausted {
            trials,
            last_alpha: 2.0 * alpha,
        })
    }
}

fn main() {
    let solver = ConjugateGradient {
        max_iters: 500,
        eps: 1e-8,
        ..ConjugateGradient::new()
    }
    .with_line_search(MyLineSearch::default());

    // Rosenbrock
    let mut x = vec![-1.2, 1.0];
    let report = solver
        .minimize_with_fn(
            &mut x,
            |x| (1.0 - x[0]).powi(2) + 100.0 * (x[1] - x[0] * x[0]).powi(2),
            |x, g| {
                let (a, b) = (1.0 - x[0], x[1] - x[0] * x[0]);
                g[0] = -2.0 * a - 400.0 * x[0] * b;
                g[1] = 200.0 * b;
                a * a + 100.0 * b * b
            },
        )
        .expect("valid configuration");

    println!(
        "converged={} restarts={} x={:?}",
        report.converged(),
        report.restarts,
        x
    );
}
