use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::traits::{MatrixMut, MatrixRef, Scalar};

use super::view::{VectorView, VectorViewMut};
use super::DynMatrix;

/// Dynamically-sized vector (wraps a 1×N `DynMatrix`).
///
/// Enforces single-row constraint and provides single-index access `v[i]`.
/// Used for right-hand sides and solutions; [`resize`](Self::resize) reuses
/// the allocation, so a solution vector handed to the same solver over and
/// over is only allocated once.
///
/// # Examples
///
/// ```
/// use linsolve::DynVector;
///
/// let v = DynVector::from_slice(&[1.0_f64, 2.0, 3.0]);
/// assert_eq!(v[0], 1.0);
/// assert_eq!(v.len(), 3);
/// assert!((v.dot(&v) - 14.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DynVector<T> {
    pub(crate) inner: DynMatrix<T>,
}

impl<T: Scalar> DynVector<T> {
    /// Create a vector from a flat slice.
    pub fn from_slice(data: &[T]) -> Self {
        Self {
            inner: DynMatrix::from_rows(1, data.len(), data),
        }
    }

    /// Create a zero vector of length `n`.
    ///
    /// ```
    /// use linsolve::DynVector;
    /// let v = DynVector::zeros(4, 0.0_f64);
    /// assert_eq!(v.len(), 4);
    /// assert_eq!(v[3], 0.0);
    /// ```
    pub fn zeros(n: usize, _zero: T) -> Self {
        Self {
            inner: DynMatrix::zeros(1, n, T::zero()),
        }
    }

    /// Resize to length `n`, zeroing every element.
    pub fn resize(&mut self, n: usize) {
        self.inner.resize(1, n);
    }

    /// Dot product.
    ///
    /// ```
    /// use linsolve::DynVector;
    /// let a = DynVector::from_slice(&[1.0, 2.0, 3.0]);
    /// let b = DynVector::from_slice(&[4.0, 5.0, 6.0]);
    /// assert_eq!(a.dot(&b), 32.0);
    /// ```
    pub fn dot(&self, rhs: &Self) -> T {
        assert_eq!(self.len(), rhs.len(), "vector length mismatch");
        self.iter()
            .zip(rhs.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
    }
}

impl<T> DynVector<T> {
    /// Create a vector from an owned `Vec`.
    ///
    /// ```
    /// use linsolve::DynVector;
    /// let v = DynVector::from_vec(vec![1.0, 2.0, 3.0]);
    /// assert_eq!(v[2], 3.0);
    /// ```
    pub fn from_vec(data: Vec<T>) -> Self {
        let n = data.len();
        Self {
            inner: DynMatrix::from_vec(1, n, data),
        }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.ncols()
    }

    /// Whether the vector is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// View the vector data as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.inner.as_slice()
    }

    /// View the vector data as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.inner.as_mut_slice()
    }

    /// Iterate over the elements.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.inner.iter()
    }

    /// Borrow `len` consecutive elements starting at `start`.
    ///
    /// ```
    /// use linsolve::DynVector;
    /// let v = DynVector::from_slice(&[1.0, 2.0, 3.0, 4.0]);
    /// let w = v.window(1, 2);
    /// assert_eq!(w[0], 2.0);
    /// assert_eq!(w[1], 3.0);
    /// ```
    pub fn window(&self, start: usize, len: usize) -> VectorView<'_, T> {
        assert!(
            start + len <= self.len(),
            "window {}..{} out of bounds for vector of length {}",
            start,
            start + len,
            self.len(),
        );
        VectorView::new(self.inner.as_slice(), start, 1, len)
    }

    /// Mutably borrow `len` consecutive elements starting at `start`.
    pub fn window_mut(&mut self, start: usize, len: usize) -> VectorViewMut<'_, T> {
        assert!(
            start + len <= self.len(),
            "window {}..{} out of bounds for vector of length {}",
            start,
            start + len,
            self.len(),
        );
        VectorViewMut::new(self.inner.as_mut_slice(), start, 1, len)
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<usize> for DynVector<T> {
    type Output = T;

    #[inline]
    #[track_caller]
    fn index(&self, i: usize) -> &T {
        &self.inner[(0, i)]
    }
}

impl<T> IndexMut<usize> for DynVector<T> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.inner[(0, i)]
    }
}

// ── MatrixRef / MatrixMut ───────────────────────────────────────────

impl<T> MatrixRef<T> for DynVector<T> {
    #[inline]
    fn nrows(&self) -> usize {
        1
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.inner.ncols()
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> &T {
        self.inner.get(row, col)
    }
}

impl<T> MatrixMut<T> for DynVector<T> {
    #[inline]
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        self.inner.get_mut(row, col)
    }
}

impl<T> From<DynVector<T>> for DynMatrix<T> {
    fn from(v: DynVector<T>) -> Self {
        v.inner
    }
}

impl<T> From<Vec<T>> for DynVector<T> {
    fn from(v: Vec<T>) -> Self {
        Self::from_vec(v)
    }
}
