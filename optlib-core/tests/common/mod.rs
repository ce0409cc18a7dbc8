#![allow(dead_code)]

use nalgebra::{DMatrix, DVector};
use optlib::{Objective, Space};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// f(x) = 0.5 xᵀAx - bᵀx with A symmetric positive definite.
#[derive(Clone, Debug)]
pub struct Quadratic {
    pub a: DMatrix<f64>,
    pub b: DVector<f64>,
}

impl Quadratic {
    /// A = I + coupling · MᵀM / dim with M, b uniform in [-1, 1).
    ///
    /// The eigenvalues of A lie in [1, 1 + coupling · dim], so `coupling`
    /// controls the conditioning.
    pub fn random_spd(dim: usize, coupling: f64, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let m: DMatrix<f64> = DMatrix::from_fn(dim, dim, |_, _| rng.random_range(-1.0..1.0));
        let b: DVector<f64> = DVector::from_fn(dim, |_, _| rng.random_range(-1.0..1.0));
        let a = DMatrix::identity(dim, dim) + m.transpose() * &m * (coupling / dim as f64);
        Self { a, b }
    }

    pub fn dim(&self) -> usize {
        self.b.len()
    }

    /// A⁻¹b.
    pub fn minimizer(&self) -> DVector<f64> {
        self.a
            .clone()
            .cholesky()
            .expect("fixture matrix is SPD")
            .solve(&self.b)
    }

    pub fn error_inf(&self, x: &[f64]) -> f64 {
        let x_star = self.minimizer();
        x.iter()
            .zip(x_star.iter())
            .map(|(xi, si)| (xi - si).abs())
            .fold(0.0, f64::max)
    }
}

impl<S: Space> Objective<S> for Quadratic {
    fn value(&self, x: &S::Point) -> f64 {
        let x = DVector::from_column_slice(S::as_slice(x));
        0.5 * x.dot(&(&self.a * &x)) - self.b.dot(&x)
    }

    fn gradient(&self, x: &S::Point, grad: &mut S::Point) -> f64 {
        let x = DVector::from_column_slice(S::as_slice(x));
        let ax = &self.a * &x;
        let g = &ax - &self.b;
        S::as_mut_slice(grad).copy_from_slice(g.as_slice());
        0.5 * x.dot(&ax) - self.b.dot(&x)
    }
}

/// f(x, y) = (1 - x)² + 100 (y - x²)², minimum at (1, 1).
#[derive(Clone, Copy, Debug, Default)]
pub struct Rosenbrock;

impl<S: Space> Objective<S> for Rosenbrock {
    fn value(&self, x: &S::Point) -> f64 {
        let x = S::as_slice(x);
        let (a, b) = (1.0 - x[0], x[1] - x[0] * x[0]);
        a * a + 100.0 * b * b
    }

    fn gradient(&self, x: &S::Point, grad: &mut S::Point) -> f64 {
        let xs = S::as_slice(x);
        let (a, b) = (1.0 - xs[0], xs[1] - xs[0] * xs[0]);
        let g = S::as_mut_slice(grad);
        g[0] = -2.0 * a - 400.0 * xs[0] * b;
        g[1] = 200.0 * b;
        a * a + 100.0 * b * b
    }
}

/// f(x) = c·x. Unbounded below, constant gradient.
#[derive(Clone, Debug)]
pub struct LinearRamp {
    pub c: Vec<f64>,
}

impl<S: Space> Objective<S> for LinearRamp {
    fn value(&self, x: &S::Point) -> f64 {
        S::as_slice(x).iter().zip(&self.c).map(|(xi, ci)| xi * ci).sum()
    }

    fn gradient(&self, x: &S::Point, grad: &mut S::Point) -> f64 {
        S::as_mut_slice(grad).copy_from_slice(&self.c);
        <Self as Objective<S>>::value(self, x)
    }
}
