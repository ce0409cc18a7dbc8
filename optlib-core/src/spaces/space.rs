//! Vector-space abstraction consumed by the line searches and solvers.

/// Trait that represents the real vector space a solver iterates in.
///
/// Points, gradients, search directions and correction pairs all share the
/// `Point` representation. Only `zero_like` and the slice accessors are
/// required; the arithmetic has slice-based defaults that backends may
/// replace with native kernels.
pub trait Space {
    type Point: Clone;

    /// Zero vector with the same extent as `x`.
    fn zero_like(&self, x: &Self::Point) -> Self::Point;

    fn as_slice(v: &Self::Point) -> &[f64];
    fn as_mut_slice(v: &mut Self::Point) -> &mut [f64];

    fn dim(&self, v: &Self::Point) -> usize {
        Self::as_slice(v).len()
    }

    fn dot(&self, a: &Self::Point, b: &Self::Point) -> f64 {
        Self::as_slice(a)
            .iter()
            .zip(Self::as_slice(b))
            .map(|(ai, bi)| ai * bi)
            .sum()
    }

    fn norm(&self, v: &Self::Point) -> f64 {
        self.dot(v, v).sqrt()
    }

    /// max_i |v_i|
    fn norm_inf(&self, v: &Self::Point) -> f64 {
        Self::as_slice(v)
            .iter()
            .fold(0.0_f64, |acc, vi| acc.max(vi.abs()))
    }

    // --- core ops (allocation-free) ---

    fn copy_into(&self, out: &mut Self::Point, v: &Self::Point) {
        Self::as_mut_slice(out).copy_from_slice(Self::as_slice(v));
    }

    /// out = alpha * v
    fn scale_into(&self, out: &mut Self::Point, v: &Self::Point, alpha: f64) {
        for (o, vi) in Self::as_mut_slice(out).iter_mut().zip(Self::as_slice(v)) {
            *o = alpha * vi;
        }
    }

    /// v <- alpha * v
    fn scale_in_place(&self, v: &mut Self::Point, alpha: f64) {
        for vi in Self::as_mut_slice(v).iter_mut() {
            *vi *= alpha;
        }
    }

    /// out = x + alpha * p
    fn axpy_into(&self, out: &mut Self::Point, x: &Self::Point, alpha: f64, p: &Self::Point) {
        let out = Self::as_mut_slice(out);
        for ((o, xi), pi) in out.iter_mut().zip(Self::as_slice(x)).zip(Self::as_slice(p)) {
            *o = xi + alpha * pi;
        }
    }

    /// x <- x + alpha * p
    fn axpy_in_place(&self, x: &mut Self::Point, alpha: f64, p: &Self::Point) {
        for (xi, pi) in Self::as_mut_slice(x).iter_mut().zip(Self::as_slice(p)) {
            *xi += alpha * pi;
        }
    }

    /// out = y - x
    fn difference_into(&self, out: &mut Self::Point, x: &Self::Point, y: &Self::Point) {
        let out = Self::as_mut_slice(out);
        for ((o, xi), yi) in out.iter_mut().zip(Self::as_slice(x)).zip(Self::as_slice(y)) {
            *o = yi - xi;
        }
    }

    // --- convenience wrappers (allocate) ---

    fn scale(&self, v: &Self::Point, alpha: f64) -> Self::Point {
        let mut out = self.zero_like(v);
        self.scale_into(&mut out, v, alpha);
        out
    }

    fn axpy(&self, x: &Self::Point, alpha: f64, p: &Self::Point) -> Self::Point {
        let mut out = self.zero_like(x);
        self.axpy_into(&mut out, x, alpha, p);
        out
    }

    fn difference(&self, x: &Self::Point, y: &Self::Point) -> Self::Point {
        let mut out = self.zero_like(x);
        self.difference_into(&mut out, x, y);
        out
    }
}
