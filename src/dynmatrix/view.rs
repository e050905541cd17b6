//! Borrowed windows into row-major storage.
//!
//! A view holds the backing buffer by reference together with an origin,
//! a row stride, and its own extent. Local indices are translated into the
//! backing coordinate space on every access; nothing is copied and nothing
//! is allocated. Because the buffer is borrowed, the borrow checker rejects
//! any use of a view after its owner is resized, moved, or dropped.
//!
//! Accessing a local index outside the view's extent panics with
//! `index out of range`, even if the translated coordinate would still be
//! inside the backing storage.
//!
//! ```compile_fail
//! use linsolve::DynMatrix;
//! let mut m = DynMatrix::zeros(2, 2, 0.0_f64);
//! let v = m.view(0, 0, 1, 1);
//! m.resize(3, 3); // cannot resize while `v` borrows `m`
//! let _ = v[(0, 0)];
//! ```

use core::ops::{Index, IndexMut};

use crate::traits::{index_out_of_range, MatrixMut, MatrixRef};

use super::{DynMatrix, DynVector};

#[cold]
#[inline(never)]
#[track_caller]
fn vector_index_out_of_range(i: usize, len: usize) -> ! {
    panic!("index out of range: {} for vector view of length {}", i, len)
}

// ── BlockView ───────────────────────────────────────────────────────

/// Read-only rectangular window into a row-major buffer.
///
/// Local `(i, j)` maps to backing `(row0 + i, col0 + j)`.
///
/// ```
/// use linsolve::DynMatrix;
/// let m = DynMatrix::from_fn(3, 4, |i, j| (i * 4 + j) as f64);
/// let v = m.view(1, 1, 2, 3);
/// assert_eq!(v[(0, 0)], 5.0);
/// assert_eq!(v[(1, 2)], 11.0);
/// assert_eq!(v.origin(), (1, 1));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BlockView<'a, T> {
    data: &'a [T],
    stride: usize,
    row0: usize,
    col0: usize,
    nrows: usize,
    ncols: usize,
}

impl<'a, T> BlockView<'a, T> {
    pub(crate) fn new(
        data: &'a [T],
        stride: usize,
        (row0, col0): (usize, usize),
        (nrows, ncols): (usize, usize),
    ) -> Self {
        Self { data, stride, row0, col0, nrows, ncols }
    }

    /// Number of rows in the view.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns in the view.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Backing coordinates of the view's `(0, 0)` element.
    #[inline]
    pub fn origin(&self) -> (usize, usize) {
        (self.row0, self.col0)
    }

    #[inline]
    #[track_caller]
    fn offset(&self, i: usize, j: usize) -> usize {
        if i >= self.nrows || j >= self.ncols {
            index_out_of_range(i, j, self.nrows, self.ncols);
        }
        (self.row0 + i) * self.stride + self.col0 + j
    }

    /// Sub-window of this view, in local coordinates.
    pub fn view(&self, i: usize, j: usize, rows: usize, cols: usize) -> BlockView<'a, T> {
        assert!(
            i + rows <= self.nrows && j + cols <= self.ncols,
            "view ({},{}) size {}x{} out of bounds for {}x{} view",
            i, j, rows, cols, self.nrows, self.ncols,
        );
        BlockView::new(
            self.data,
            self.stride,
            (self.row0 + i, self.col0 + j),
            (rows, cols),
        )
    }

    /// Local row `i` as a vector view.
    pub fn row(&self, i: usize) -> VectorView<'a, T> {
        assert!(
            i < self.nrows,
            "row {} out of bounds for {}x{} view",
            i, self.nrows, self.ncols,
        );
        VectorView::new(self.data, (self.row0 + i) * self.stride + self.col0, 1, self.ncols)
    }

    /// Local column `j` as a vector view.
    pub fn col(&self, j: usize) -> VectorView<'a, T> {
        assert!(
            j < self.ncols,
            "col {} out of bounds for {}x{} view",
            j, self.nrows, self.ncols,
        );
        VectorView::new(
            self.data,
            self.row0 * self.stride + self.col0 + j,
            self.stride,
            self.nrows,
        )
    }

    /// Copy the window into a new owning matrix.
    pub fn to_matrix(&self) -> DynMatrix<T>
    where
        T: Copy,
    {
        DynMatrix::from_fn(self.nrows, self.ncols, |i, j| self[(i, j)])
    }
}

impl<T> MatrixRef<T> for BlockView<'_, T> {
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

impl<T> Index<(usize, usize)> for BlockView<'_, T> {
    type Output = T;

    #[inline]
    #[track_caller]
    fn index(&self, (i, j): (usize, usize)) -> &T {
        &self.data[self.offset(i, j)]
    }
}

// ── BlockViewMut ────────────────────────────────────────────────────

/// Mutable rectangular window into a row-major buffer.
///
/// Writes land directly in the backing storage.
///
/// ```
/// use linsolve::DynMatrix;
/// let mut m = DynMatrix::zeros(3, 3, 0.0_f64);
/// {
///     let mut v = m.view_mut(1, 1, 2, 2);
///     v[(1, 1)] = 4.0;
///     v.row_mut(0).fill(1.0);
/// }
/// assert_eq!(m[(2, 2)], 4.0);
/// assert_eq!(m[(1, 2)], 1.0);
/// ```
#[derive(Debug)]
pub struct BlockViewMut<'a, T> {
    data: &'a mut [T],
    stride: usize,
    row0: usize,
    col0: usize,
    nrows: usize,
    ncols: usize,
}

impl<'a, T> BlockViewMut<'a, T> {
    pub(crate) fn new(
        data: &'a mut [T],
        stride: usize,
        (row0, col0): (usize, usize),
        (nrows, ncols): (usize, usize),
    ) -> Self {
        Self { data, stride, row0, col0, nrows, ncols }
    }

    /// Number of rows in the view.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns in the view.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Backing coordinates of the view's `(0, 0)` element.
    #[inline]
    pub fn origin(&self) -> (usize, usize) {
        (self.row0, self.col0)
    }

    #[inline]
    #[track_caller]
    fn offset(&self, i: usize, j: usize) -> usize {
        if i >= self.nrows || j >= self.ncols {
            index_out_of_range(i, j, self.nrows, self.ncols);
        }
        (self.row0 + i) * self.stride + self.col0 + j
    }

    /// Reborrow as a read-only view.
    pub fn as_view(&self) -> BlockView<'_, T> {
        BlockView::new(
            &*self.data,
            self.stride,
            (self.row0, self.col0),
            (self.nrows, self.ncols),
        )
    }

    /// Mutable sub-window of this view, in local coordinates.
    pub fn view_mut(&mut self, i: usize, j: usize, rows: usize, cols: usize) -> BlockViewMut<'_, T> {
        assert!(
            i + rows <= self.nrows && j + cols <= self.ncols,
            "view ({},{}) size {}x{} out of bounds for {}x{} view",
            i, j, rows, cols, self.nrows, self.ncols,
        );
        BlockViewMut::new(
            &mut *self.data,
            self.stride,
            (self.row0 + i, self.col0 + j),
            (rows, cols),
        )
    }

    /// Local row `i` as a mutable vector view.
    pub fn row_mut(&mut self, i: usize) -> VectorViewMut<'_, T> {
        assert!(
            i < self.nrows,
            "row {} out of bounds for {}x{} view",
            i, self.nrows, self.ncols,
        );
        let start = (self.row0 + i) * self.stride + self.col0;
        VectorViewMut::new(&mut *self.data, start, 1, self.ncols)
    }

    /// Local column `j` as a mutable vector view.
    pub fn col_mut(&mut self, j: usize) -> VectorViewMut<'_, T> {
        assert!(
            j < self.ncols,
            "col {} out of bounds for {}x{} view",
            j, self.nrows, self.ncols,
        );
        let start = self.row0 * self.stride + self.col0 + j;
        VectorViewMut::new(&mut *self.data, start, self.stride, self.nrows)
    }

    /// Set every element of the window to `value`.
    pub fn fill(&mut self, value: T)
    where
        T: Copy,
    {
        for i in 0..self.nrows {
            let start = (self.row0 + i) * self.stride + self.col0;
            self.data[start..start + self.ncols].fill(value);
        }
    }

    /// Copy every element from `src`, which must match the window's shape.
    pub fn copy_from(&mut self, src: &impl MatrixRef<T>)
    where
        T: Copy,
    {
        assert_eq!(
            (self.nrows, self.ncols),
            (src.nrows(), src.ncols()),
            "dimension mismatch: copy {}x{} into {}x{} view",
            src.nrows(),
            src.ncols(),
            self.nrows,
            self.ncols,
        );
        for i in 0..self.nrows {
            let start = (self.row0 + i) * self.stride + self.col0;
            for (j, dst) in self.data[start..start + self.ncols].iter_mut().enumerate() {
                *dst = *src.get(i, j);
            }
        }
    }
}

impl<T> MatrixRef<T> for BlockViewMut<'_, T> {
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

impl<T> MatrixMut<T> for BlockViewMut<'_, T> {
    #[inline]
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        let k = self.offset(row, col);
        &mut self.data[k]
    }
}

impl<T> Index<(usize, usize)> for BlockViewMut<'_, T> {
    type Output = T;

    #[inline]
    #[track_caller]
    fn index(&self, (i, j): (usize, usize)) -> &T {
        &self.data[self.offset(i, j)]
    }
}

impl<T> IndexMut<(usize, usize)> for BlockViewMut<'_, T> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        let k = self.offset(i, j);
        &mut self.data[k]
    }
}

// ── VectorView ──────────────────────────────────────────────────────

/// Read-only strided 1-D window.
///
/// Element `i` lives at flat offset `start + i * stride` of the backing
/// buffer. Rows of a row-major matrix are stride-1 windows, columns are
/// stride-`ncols` windows.
///
/// ```
/// use linsolve::DynMatrix;
/// let m = DynMatrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
/// let c = m.col(1);
/// assert_eq!(c.len(), 2);
/// assert_eq!(c[1], 5.0);
/// assert_eq!(c.iter().copied().sum::<f64>(), 7.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct VectorView<'a, T> {
    data: &'a [T],
    start: usize,
    stride: usize,
    len: usize,
}

impl<'a, T> VectorView<'a, T> {
    pub(crate) fn new(data: &'a [T], start: usize, stride: usize, len: usize) -> Self {
        debug_assert!(stride > 0);
        debug_assert!(len == 0 || start + (len - 1) * stride < data.len());
        Self { data, start, stride, len }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the view is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    #[track_caller]
    fn offset(&self, i: usize) -> usize {
        if i >= self.len {
            vector_index_out_of_range(i, self.len);
        }
        self.start + i * self.stride
    }

    /// Iterate over the elements in order.
    pub fn iter(&self) -> core::iter::Take<core::iter::StepBy<core::slice::Iter<'a, T>>> {
        let data: &'a [T] = self.data;
        let start = self.start.min(data.len());
        data[start..].iter().step_by(self.stride).take(self.len)
    }

    /// Copy the window into a new owning vector.
    pub fn to_vector(&self) -> DynVector<T>
    where
        T: Copy,
    {
        DynVector::from_vec(self.iter().copied().collect())
    }
}

impl<T> Index<usize> for VectorView<'_, T> {
    type Output = T;

    #[inline]
    #[track_caller]
    fn index(&self, i: usize) -> &T {
        &self.data[self.offset(i)]
    }
}

// ── VectorViewMut ───────────────────────────────────────────────────

/// Mutable strided 1-D window.
#[derive(Debug)]
pub struct VectorViewMut<'a, T> {
    data: &'a mut [T],
    start: usize,
    stride: usize,
    len: usize,
}

impl<'a, T> VectorViewMut<'a, T> {
    pub(crate) fn new(data: &'a mut [T], start: usize, stride: usize, len: usize) -> Self {
        debug_assert!(stride > 0);
        debug_assert!(len == 0 || start + (len - 1) * stride < data.len());
        Self { data, start, stride, len }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the view is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    #[track_caller]
    fn offset(&self, i: usize) -> usize {
        if i >= self.len {
            vector_index_out_of_range(i, self.len);
        }
        self.start + i * self.stride
    }

    /// Reborrow as a read-only view.
    pub fn as_view(&self) -> VectorView<'_, T> {
        VectorView::new(&*self.data, self.start, self.stride, self.len)
    }

    /// Iterate mutably over the elements in order.
    pub fn iter_mut(
        &mut self,
    ) -> core::iter::Take<core::iter::StepBy<core::slice::IterMut<'_, T>>> {
        let start = self.start.min(self.data.len());
        self.data[start..].iter_mut().step_by(self.stride).take(self.len)
    }

    /// Set every element to `value`.
    pub fn fill(&mut self, value: T)
    where
        T: Copy,
    {
        for x in self.iter_mut() {
            *x = value;
        }
    }

    /// Copy from a slice of the same length.
    pub fn copy_from_slice(&mut self, src: &[T])
    where
        T: Copy,
    {
        assert_eq!(
            self.len,
            src.len(),
            "dimension mismatch: copy {} elements into vector view of length {}",
            src.len(),
            self.len,
        );
        for (dst, &s) in self.iter_mut().zip(src) {
            *dst = s;
        }
    }
}

impl<T> Index<usize> for VectorViewMut<'_, T> {
    type Output = T;

    #[inline]
    #[track_caller]
    fn index(&self, i: usize) -> &T {
        &self.data[self.offset(i)]
    }
}

impl<T> IndexMut<usize> for VectorViewMut<'_, T> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, i: usize) -> &mut T {
        let k = self.offset(i);
        &mut self.data[k]
    }
}
