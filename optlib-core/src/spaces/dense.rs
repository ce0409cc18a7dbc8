//! `nalgebra`-backed vectors with compile-time or runtime extent.

use std::fmt;
use std::marker::PhantomData;

use nalgebra::{allocator::Allocator, Const, DefaultAllocator, Dim, Dyn, OVector};

use super::space::Space;

/// Space of `OVector<f64, D>`.
///
/// `D = Const<N>` keeps the dimension in the type (stack storage);
/// `D = Dyn` resolves it from the starting point.
pub struct DenseSpace<D> {
    _dim: PhantomData<D>,
}

/// `SVector<f64, N>` points.
pub type FixedSpace<const N: usize> = DenseSpace<Const<N>>;

/// `DVector<f64>` points.
pub type DynSpace = DenseSpace<Dyn>;

impl<D> DenseSpace<D> {
    pub const fn new() -> Self {
        Self { _dim: PhantomData }
    }
}

impl<D> Default for DenseSpace<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> Clone for DenseSpace<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for DenseSpace<D> {}

impl<D> fmt::Debug for DenseSpace<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DenseSpace")
    }
}

impl<D> Space for DenseSpace<D>
where
    D: Dim,
    DefaultAllocator: Allocator<D>,
{
    type Point = OVector<f64, D>;

    fn zero_like(&self, x: &Self::Point) -> Self::Point {
        let (rows, _) = x.shape_generic();
        OVector::<f64, D>::zeros_generic(rows, Const::<1>)
    }

    fn as_slice(v: &Self::Point) -> &[f64] {
        v.as_slice()
    }

    fn as_mut_slice(v: &mut Self::Point) -> &mut [f64] {
        v.as_mut_slice()
    }

    fn dim(&self, v: &Self::Point) -> usize {
        v.len()
    }

    fn dot(&self, a: &Self::Point, b: &Self::Point) -> f64 {
        a.dot(b)
    }

    fn norm(&self, v: &Self::Point) -> f64 {
        v.norm()
    }

    fn norm_inf(&self, v: &Self::Point) -> f64 {
        v.amax()
    }

    fn copy_into(&self, out: &mut Self::Point, v: &Self::Point) {
        out.copy_from(v);
    }

    fn scale_into(&self, out: &mut Self::Point, v: &Self::Point, alpha: f64) {
        out.copy_from(v);
        out.scale_mut(alpha);
    }

    fn scale_in_place(&self, v: &mut Self::Point, alpha: f64) {
        v.scale_mut(alpha);
    }

    fn axpy_into(&self, out: &mut Self::Point, x: &Self::Point, alpha: f64, p: &Self::Point) {
        out.copy_from(x);
        out.axpy(alpha, p, 1.0);
    }

    fn axpy_in_place(&self, x: &mut Self::Point, alpha: f64, p: &Self::Point) {
        x.axpy(alpha, p, 1.0);
    }

    fn difference_into(&self, out: &mut Self::Point, x: &Self::Point, y: &Self::Point) {
        out.copy_from(y);
        out.axpy(-1.0, x, 1.0);
    }
}
