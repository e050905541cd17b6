pub mod aliases;
mod block;
mod ops;
mod slice;
mod vector;
mod view;

pub use aliases::*;
pub use vector::DynVector;
pub use view::{BlockView, BlockViewMut, VectorView, VectorViewMut};

use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::traits::{index_out_of_range, MatrixMut, MatrixRef, Scalar};

/// Dynamically-sized heap-allocated matrix.
///
/// Row-major `Vec<T>` storage with runtime dimensions. The matrix is the sole
/// owner of its buffer: `clone()` copies every element, and borrowed views
/// ([`BlockView`], [`VectorView`], and their mutable forms) tie their lifetime
/// to it, so a view cannot outlive the matrix or survive a [`resize`](Self::resize).
///
/// Out-of-range element access panics with `index out of range`.
///
/// # Examples
///
/// ```
/// use linsolve::DynMatrix;
///
/// let a = DynMatrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]);
/// assert_eq!(a[(0, 1)], 2.0);
/// assert_eq!(a.nrows(), 2);
/// assert_eq!(a.ncols(), 2);
///
/// let b = DynMatrix::eye(3, 0.0_f64);
/// assert_eq!(b[(0, 0)], 1.0);
/// assert_eq!(b[(0, 1)], 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DynMatrix<T> {
    data: Vec<T>,
    nrows: usize,
    ncols: usize,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Scalar> DynMatrix<T> {
    /// Create an `nrows x ncols` matrix of zeros.
    ///
    /// The `_zero` parameter is only used for type inference.
    ///
    /// ```
    /// use linsolve::DynMatrix;
    /// let m = DynMatrix::zeros(2, 3, 0.0_f64);
    /// assert_eq!(m.nrows(), 2);
    /// assert_eq!(m.ncols(), 3);
    /// assert_eq!(m[(1, 2)], 0.0);
    /// ```
    pub fn zeros(nrows: usize, ncols: usize, _zero: T) -> Self {
        Self {
            data: vec![T::zero(); nrows * ncols],
            nrows,
            ncols,
        }
    }

    /// Create a matrix filled with a given value.
    pub fn fill(nrows: usize, ncols: usize, value: T) -> Self {
        Self {
            data: vec![value; nrows * ncols],
            nrows,
            ncols,
        }
    }

    /// Create an `n x n` identity matrix.
    ///
    /// ```
    /// use linsolve::DynMatrix;
    /// let id = DynMatrix::eye(3, 0.0_f64);
    /// assert_eq!(id[(2, 2)], 1.0);
    /// assert_eq!(id[(2, 1)], 0.0);
    /// ```
    pub fn eye(n: usize, _zero: T) -> Self {
        let mut m = Self::zeros(n, n, T::zero());
        for i in 0..n {
            m[(i, i)] = T::one();
        }
        m
    }

    /// Create a matrix from a flat slice in row-major order.
    ///
    /// Panics if `row_major.len() != nrows * ncols`.
    ///
    /// ```
    /// use linsolve::DynMatrix;
    /// let m = DynMatrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// assert_eq!(m[(0, 2)], 3.0);
    /// assert_eq!(m[(1, 0)], 4.0);
    /// ```
    pub fn from_rows(nrows: usize, ncols: usize, row_major: &[T]) -> Self {
        assert_eq!(
            row_major.len(),
            nrows * ncols,
            "slice length {} does not match {}x{} matrix",
            row_major.len(),
            nrows,
            ncols,
        );
        Self {
            data: row_major.to_vec(),
            nrows,
            ncols,
        }
    }

    /// Resize to `nrows x ncols`, zeroing every element.
    ///
    /// The existing allocation is reused when it is large enough, so
    /// resizing to the same or a smaller shape never allocates. Views borrow
    /// the matrix, so none can be alive across this call.
    ///
    /// ```
    /// use linsolve::DynMatrix;
    /// let mut m = DynMatrix::fill(2, 2, 5.0_f64);
    /// m.resize(3, 4);
    /// assert_eq!((m.nrows(), m.ncols()), (3, 4));
    /// assert_eq!(m[(2, 3)], 0.0);
    /// ```
    pub fn resize(&mut self, nrows: usize, ncols: usize) {
        self.data.clear();
        self.data.resize(nrows * ncols, T::zero());
        self.nrows = nrows;
        self.ncols = ncols;
    }

    /// Copy every element from `src`, which must have the same shape.
    ///
    /// Accepts any [`MatrixRef`], including views into another matrix.
    pub fn copy_from(&mut self, src: &impl MatrixRef<T>) {
        assert_eq!(
            (self.nrows, self.ncols),
            (src.nrows(), src.ncols()),
            "dimension mismatch: copy {}x{} into {}x{}",
            src.nrows(),
            src.ncols(),
            self.nrows,
            self.ncols,
        );
        for i in 0..self.nrows {
            for j in 0..self.ncols {
                self.data[i * self.ncols + j] = *src.get(i, j);
            }
        }
    }
}

impl<T> DynMatrix<T> {
    /// Create a matrix from an owned `Vec<T>` in row-major order.
    ///
    /// Panics if `data.len() != nrows * ncols`.
    pub fn from_vec(nrows: usize, ncols: usize, data: Vec<T>) -> Self {
        assert_eq!(
            data.len(),
            nrows * ncols,
            "vec length {} does not match {}x{} matrix",
            data.len(),
            nrows,
            ncols,
        );
        Self { data, nrows, ncols }
    }

    /// Create a matrix by calling `f(row, col)` for each element.
    ///
    /// ```
    /// use linsolve::DynMatrix;
    /// let m = DynMatrix::from_fn(3, 3, |i, j| if i == j { 1.0_f64 } else { 0.0 });
    /// assert_eq!(m[(0, 0)], 1.0);
    /// assert_eq!(m[(0, 1)], 0.0);
    /// ```
    pub fn from_fn(nrows: usize, ncols: usize, f: impl Fn(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(nrows * ncols);
        for i in 0..nrows {
            for j in 0..ncols {
                data.push(f(i, j));
            }
        }
        Self { data, nrows, ncols }
    }

    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Whether the matrix is square.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Flat offset of `(row, col)`, checked against both dimensions.
    #[inline]
    #[track_caller]
    fn offset(&self, row: usize, col: usize) -> usize {
        if row >= self.nrows || col >= self.ncols {
            index_out_of_range(row, col, self.nrows, self.ncols);
        }
        row * self.ncols + col
    }
}

// ── MatrixRef / MatrixMut ───────────────────────────────────────────

impl<T> MatrixRef<T> for DynMatrix<T> {
    #[inline]
    fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.ncols
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> &T {
        &self.data[self.offset(row, col)]
    }
}

impl<T> MatrixMut<T> for DynMatrix<T> {
    #[inline]
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        let k = self.offset(row, col);
        &mut self.data[k]
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<(usize, usize)> for DynMatrix<T> {
    type Output = T;

    #[inline]
    #[track_caller]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[self.offset(row, col)]
    }
}

impl<T> IndexMut<(usize, usize)> for DynMatrix<T> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        let k = self.offset(row, col);
        &mut self.data[k]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeros() {
        let m = DynMatrix::zeros(3, 4, 0.0_f64);
        assert_eq!(m.nrows(), 3);
        assert_eq!(m.ncols(), 4);
        assert!(m.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn eye() {
        let m = DynMatrix::eye(3, 0.0_f64);
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_eq!(m[(i, j)], expected);
            }
        }
    }

    #[test]
    fn from_rows_is_row_major() {
        let m = DynMatrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(m[(0, 0)], 1.0);
        assert_eq!(m[(0, 2)], 3.0);
        assert_eq!(m[(1, 0)], 4.0);
        assert_eq!(m[(1, 2)], 6.0);
        assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    #[should_panic(expected = "slice length")]
    fn from_rows_wrong_length() {
        let _ = DynMatrix::from_rows(2, 2, &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn from_fn() {
        let m = DynMatrix::from_fn(3, 3, |i, j| (i * 3 + j) as f64);
        assert_eq!(m[(1, 1)], 4.0);
        assert_eq!(m[(2, 0)], 6.0);
    }

    #[test]
    fn index_mut() {
        let mut m = DynMatrix::zeros(2, 2, 0.0_f64);
        m[(0, 1)] = 5.0;
        assert_eq!(m[(0, 1)], 5.0);
        *m.get_mut(1, 0) = 7.0;
        assert_eq!(*m.get(1, 0), 7.0);
    }

    #[test]
    #[should_panic(expected = "index out of range")]
    fn row_out_of_range() {
        let m = DynMatrix::zeros(2, 3, 0.0_f64);
        let _ = m[(2, 0)];
    }

    #[test]
    #[should_panic(expected = "index out of range")]
    fn col_out_of_range_within_buffer() {
        // (0, 3) would land on (1, 0) in the flat buffer; it must still fail.
        let m = DynMatrix::zeros(2, 3, 0.0_f64);
        let _ = m[(0, 3)];
    }

    #[test]
    fn resize_zeroes() {
        let mut m = DynMatrix::fill(3, 3, 2.0_f64);
        m.resize(2, 3);
        assert_eq!((m.nrows(), m.ncols()), (2, 3));
        assert!(m.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn clone_is_deep() {
        let a = DynMatrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let mut b = a.clone();
        b[(0, 0)] = 9.0;
        assert_eq!(a[(0, 0)], 1.0);
        assert_ne!(a, b);
    }

    #[test]
    fn copy_from_view() {
        let src = DynMatrix::from_fn(3, 3, |i, j| (i * 3 + j) as i32);
        let mut dst = DynMatrix::zeros(2, 2, 0);
        dst.copy_from(&src.view(1, 1, 2, 2));
        assert_eq!(dst.as_slice(), &[4, 5, 7, 8]);
    }

    #[test]
    #[should_panic(expected = "dimension mismatch")]
    fn copy_from_wrong_shape() {
        let src = DynMatrix::zeros(2, 3, 0.0_f64);
        let mut dst = DynMatrix::zeros(3, 2, 0.0_f64);
        dst.copy_from(&src);
    }
}
