//! Step-length models used to refine a rejected trial.
//!
//! Notation: `f0 = f(x)`, `gtp = grad(x)·p`, `fa = f(x + alpha p)`, and
//! `(alpha_prev, f_prev)` the trial before `alpha`.

/// Clamp `candidate` into `[low, high]`.
///
/// A non-finite candidate maps to `high`.
pub fn clamp_step(candidate: f64, low: f64, high: f64) -> f64 {
    if !candidate.is_finite() {
        return high;
    }
    candidate.max(low).min(high)
}

/// Minimizer of the quadratic through `f0`, `gtp` and the first rejected
/// value `fa` at `alpha`.
///
/// For `alpha = 1` this is `gtp / (2 (f0 + gtp - fa))`.
pub fn quadratic_step(f0: f64, gtp: f64, fa: f64, alpha: f64) -> f64 {
    -gtp * alpha * alpha / (2.0 * (fa - f0 - gtp * alpha))
}

/// Minimizer of the cubic `f0 + gtp a + r1 a^2 + r0 a^3` through the two most
/// recent trials.
///
/// Falls back to the quadratic minimizer `-gtp / (2 r1)` when the cubic term
/// vanishes. Returns NaN when the cubic has no real stationary point.
pub fn cubic_step(f0: f64, gtp: f64, fa: f64, alpha: f64, f_prev: f64, alpha_prev: f64) -> f64 {
    let a2 = alpha * alpha;
    let p2 = alpha_prev * alpha_prev;
    let mult = 1.0 / (a2 * p2 * (alpha - alpha_prev));

    let b0 = fa - f0 - alpha * gtp;
    let b1 = f_prev - f0 - alpha_prev * gtp;

    // [r0, r1] = mult * [[p2, -a2], [-p2 * alpha_prev, a2 * alpha]] * [b0, b1]
    let r0 = mult * (p2 * b0 - a2 * b1);
    let r1 = mult * (-p2 * alpha_prev * b0 + a2 * alpha * b1);

    if r0.abs() <= f64::EPSILON * r1.abs() {
        return -gtp / (2.0 * r1);
    }

    let disc = r1 * r1 - 3.0 * r0 * gtp;
    if disc < 0.0 {
        return f64::NAN;
    }
    let d = disc.sqrt();
    if r1 > 0.0 {
        // Same root as (-r1 + d) / (3 r0) without the cancellation.
        -gtp / (r1 + d)
    } else {
        (-r1 + d) / (3.0 * r0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn clamp_respects_bounds_and_nan() {
        assert_eq!(clamp_step(0.3, 0.1, 0.5), 0.3);
        assert_eq!(clamp_step(0.01, 0.1, 0.5), 0.1);
        assert_eq!(clamp_step(2.0, 0.1, 0.5), 0.5);
        assert_eq!(clamp_step(f64::NAN, 0.1, 0.5), 0.5);
        assert_eq!(clamp_step(f64::NEG_INFINITY, 0.1, 0.5), 0.5);
    }

    #[test]
    fn quadratic_step_recovers_parabola_minimum() {
        // phi(a) = 1 - 2a + 2a^2, minimum at a = 0.5; probe at a = 1.
        let (f0, gtp) = (1.0, -2.0);
        let fa = 1.0 - 2.0 + 2.0;
        assert_relative_eq!(quadratic_step(f0, gtp, fa, 1.0), 0.5, epsilon = 1e-12);
        assert_relative_eq!(
            quadratic_step(f0, gtp, fa, 1.0),
            gtp / (2.0 * (f0 + gtp - fa)),
            epsilon = 1e-15
        );
    }

    #[test]
    fn quadratic_step_scales_with_trial_length() {
        // Same parabola probed at a = 3.
        let phi = |a: f64| 1.0 - 2.0 * a + 2.0 * a * a;
        assert_relative_eq!(quadratic_step(1.0, -2.0, phi(3.0), 3.0), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn cubic_step_recovers_exact_cubic() {
        // phi(a) = 1 - a - a^2 + a^3, phi'(a) = -1 - 2a + 3a^2 = 0 at a = 1.
        let phi = |a: f64| 1.0 - a - a * a + a * a * a;
        let step = cubic_step(1.0, -1.0, phi(2.0), 2.0, phi(3.0), 3.0);
        assert_relative_eq!(step, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn cubic_step_degrades_to_quadratic() {
        // phi(a) = 1 - 2a + 2a^2 has no cubic term.
        let phi = |a: f64| 1.0 - 2.0 * a + 2.0 * a * a;
        let step = cubic_step(1.0, -2.0, phi(0.7), 0.7, phi(1.0), 1.0);
        assert_relative_eq!(step, 0.5, epsilon = 1e-9);
    }
}
