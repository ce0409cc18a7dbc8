use crate::spaces::Space;

/// Objective function to be minimized.
///
/// - `S::Point` represents points of the space
/// - `gradient` writes ∇f(x) into `grad` and returns f(x), so solvers that
///   need both pay for a single evaluation
///
/// Implementations must be deterministic: repeated calls at the same point
/// return the same values.
pub trait Objective<S: Space> {
    /// Function value f(x) at x.
    fn value(&self, x: &S::Point) -> f64;

    /// Write the gradient ∇f(x) at x into `grad` and return f(x).
    ///
    /// `grad` is pre-initialized with the extent of `x`, e.g. via
    /// `Space::zero_like`. The default uses central differences; override it
    /// whenever an analytic gradient is available.
    fn gradient(&self, x: &S::Point, grad: &mut S::Point) -> f64 {
        central_difference_gradient::<S, _>(|p| self.value(p), x, grad)
    }
}

/// Central-difference gradient of `value_fn` at `x`, written into `grad`.
///
/// Uses the per-coordinate step `h_i = cbrt(eps) * max(1, |x_i|)`. Returns
/// f(x). Costs `2n + 1` evaluations.
pub fn central_difference_gradient<S, F>(value_fn: F, x: &S::Point, grad: &mut S::Point) -> f64
where
    S: Space,
    F: Fn(&S::Point) -> f64,
{
    let step = f64::EPSILON.cbrt();
    let mut probe = x.clone();
    let n = S::as_slice(x).len();

    for i in 0..n {
        let xi = S::as_slice(x)[i];
        let h = step * xi.abs().max(1.0);

        S::as_mut_slice(&mut probe)[i] = xi + h;
        let f_plus = value_fn(&probe);
        S::as_mut_slice(&mut probe)[i] = xi - h;
        let f_minus = value_fn(&probe);
        S::as_mut_slice(&mut probe)[i] = xi;

        S::as_mut_slice(grad)[i] = (f_plus - f_minus) / (2.0 * h);
    }

    value_fn(x)
}

/// Adapts a pair of closures into an [`Objective`].
///
/// `grad_fn(x, grad)` fills `grad` and returns f(x).
#[derive(Clone, Copy, Debug)]
pub struct FnObjective<F, G> {
    pub value_fn: F,
    pub grad_fn: G,
}

impl<F, G> FnObjective<F, G> {
    pub fn new(value_fn: F, grad_fn: G) -> Self {
        Self { value_fn, grad_fn }
    }
}

impl<S, F, G> Objective<S> for FnObjective<F, G>
where
    S: Space,
    F: Fn(&S::Point) -> f64,
    G: Fn(&S::Point, &mut S::Point) -> f64,
{
    fn value(&self, x: &S::Point) -> f64 {
        (self.value_fn)(x)
    }

    fn gradient(&self, x: &S::Point, grad: &mut S::Point) -> f64 {
        (self.grad_fn)(x, grad)
    }
}
