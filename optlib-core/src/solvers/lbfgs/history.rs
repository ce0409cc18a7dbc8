use crate::spaces::Space;

/// Fixed-capacity FIFO ring buffer of L-BFGS correction pairs.
///
/// Stores `m` pairs `(s, y)` plus `rho = 1 / (s·y)`. Once full, a push
/// overwrites the oldest slot in O(1) instead of shifting columns.
#[derive(Clone, Debug)]
pub(crate) struct CorrectionHistory<P> {
    s: Vec<P>,
    y: Vec<P>,
    rho: Vec<f64>,
    /// Two-loop scratch, one coefficient per pair.
    alpha: Vec<f64>,
    head: usize,
    len: usize,
}

impl<P: Clone> CorrectionHistory<P> {
    pub(crate) fn new<S: Space<Point = P>>(space: &S, like: &P, m: usize) -> Self {
        debug_assert!(m > 0, "L-BFGS history width m must be > 0");
        let zero = space.zero_like(like);
        Self {
            s: vec![zero.clone(); m],
            y: vec![zero; m],
            rho: vec![0.0; m],
            alpha: vec![0.0; m],
            head: 0,
            len: 0,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.rho.len()
    }

    pub(crate) fn clear(&mut self) {
        self.head = 0;
        self.len = 0;
    }

    /// Slot of logical index `i` (0 = oldest, len-1 = newest).
    #[inline]
    fn slot(&self, i: usize) -> usize {
        (self.head + i) % self.capacity()
    }

    /// Append a pair, evicting the oldest when full.
    pub(crate) fn push<S: Space<Point = P>>(&mut self, space: &S, s: &P, y: &P, rho: f64) {
        let m = self.capacity();
        let slot = if self.len < m {
            let slot = self.slot(self.len);
            self.len += 1;
            slot
        } else {
            let slot = self.head;
            self.head = (self.head + 1) % m;
            slot
        };
        space.copy_into(&mut self.s[slot], s);
        space.copy_into(&mut self.y[slot], y);
        self.rho[slot] = rho;
    }

    /// Two-loop recursion: q <- H q, with H the limited-memory inverse
    /// Hessian built on `gamma * I`.
    pub(crate) fn apply_inverse_hessian<S: Space<Point = P>>(&mut self, space: &S, q: &mut P, gamma: f64) {
        for i in (0..self.len).rev() {
            let k = self.slot(i);
            let a = self.rho[k] * space.dot(&self.s[k], q);
            self.alpha[k] = a;
            space.axpy_in_place(q, -a, &self.y[k]);
        }

        space.scale_in_place(q, gamma);

        for i in 0..self.len {
            let k = self.slot(i);
            let beta = self.rho[k] * space.dot(q, &self.y[k]);
            space.axpy_in_place(q, self.alpha[k] - beta, &self.s[k]);
        }
    }
}
