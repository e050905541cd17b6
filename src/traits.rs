use core::fmt::Debug;
use num_traits::{Float, Num, One, Zero};

/// Trait for types that can be used as matrix elements.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, and all integer types.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for floating-point matrix elements.
///
/// Required by the solvers, which need `abs` and ordered comparison of
/// pivot magnitudes.
pub trait FloatScalar: Scalar + Float {}

impl<T: Scalar + Float> FloatScalar for T {}

/// Read-only access to a matrix-like type.
///
/// Implemented by owning storage ([`DynMatrix`](crate::DynMatrix),
/// [`DynVector`](crate::DynVector)) and by the borrowed block views, so the
/// elimination kernels run on either without copying.
///
/// `get` panics with `index out of range` when `row >= nrows()` or
/// `col >= ncols()`.
pub trait MatrixRef<T> {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
    fn get(&self, row: usize, col: usize) -> &T;
}

/// Mutable access to a matrix-like type.
///
/// Extends `MatrixRef` with mutable element access, enabling
/// in-place algorithms (Gauss-Jordan, LU) to work generically.
pub trait MatrixMut<T>: MatrixRef<T> {
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T;

    /// Swap two elements.
    #[inline]
    fn swap_elements(&mut self, a: (usize, usize), b: (usize, usize))
    where
        T: Copy,
    {
        let tmp = *self.get(a.0, a.1);
        *self.get_mut(a.0, a.1) = *self.get(b.0, b.1);
        *self.get_mut(b.0, b.1) = tmp;
    }
}

/// Panic with the index contract message.
///
/// Shared by storage and views so every out-of-range access reports the
/// same way.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn index_out_of_range(row: usize, col: usize, nrows: usize, ncols: usize) -> ! {
    panic!(
        "index out of range: ({}, {}) for {}x{} matrix",
        row, col, nrows, ncols
    )
}
