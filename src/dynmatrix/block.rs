use crate::traits::Scalar;

use super::view::{BlockView, BlockViewMut, VectorView, VectorViewMut};
use super::DynMatrix;

// ── Borrowed windows ────────────────────────────────────────────────

impl<T> DynMatrix<T> {
    /// Borrow a `rows x cols` window starting at `(i, j)`.
    ///
    /// Panics if the window extends beyond the matrix bounds.
    ///
    /// ```
    /// use linsolve::DynMatrix;
    /// let m = DynMatrix::from_fn(3, 3, |i, j| (i * 3 + j) as f64);
    /// let b = m.view(1, 1, 2, 2);
    /// assert_eq!(b[(0, 0)], 4.0);
    /// assert_eq!(b[(1, 1)], 8.0);
    /// ```
    pub fn view(&self, i: usize, j: usize, rows: usize, cols: usize) -> BlockView<'_, T> {
        assert!(
            i + rows <= self.nrows && j + cols <= self.ncols,
            "view ({},{}) size {}x{} out of bounds for {}x{} matrix",
            i, j, rows, cols, self.nrows, self.ncols,
        );
        BlockView::new(&self.data, self.ncols, (i, j), (rows, cols))
    }

    /// Mutably borrow a `rows x cols` window starting at `(i, j)`.
    pub fn view_mut(&mut self, i: usize, j: usize, rows: usize, cols: usize) -> BlockViewMut<'_, T> {
        assert!(
            i + rows <= self.nrows && j + cols <= self.ncols,
            "view ({},{}) size {}x{} out of bounds for {}x{} matrix",
            i, j, rows, cols, self.nrows, self.ncols,
        );
        let stride = self.ncols;
        BlockViewMut::new(&mut self.data, stride, (i, j), (rows, cols))
    }

    /// Borrow the whole matrix as a window.
    #[inline]
    pub fn as_view(&self) -> BlockView<'_, T> {
        self.view(0, 0, self.nrows, self.ncols)
    }

    /// Mutably borrow the whole matrix as a window.
    #[inline]
    pub fn as_view_mut(&mut self) -> BlockViewMut<'_, T> {
        let (r, c) = (self.nrows, self.ncols);
        self.view_mut(0, 0, r, c)
    }

    /// Borrow row `i`.
    ///
    /// ```
    /// use linsolve::DynMatrix;
    /// let m = DynMatrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// assert_eq!(m.row(1)[2], 6.0);
    /// ```
    pub fn row(&self, i: usize) -> VectorView<'_, T> {
        assert!(
            i < self.nrows,
            "row {} out of bounds for {}x{} matrix",
            i, self.nrows, self.ncols,
        );
        VectorView::new(&self.data, i * self.ncols, 1, self.ncols)
    }

    /// Mutably borrow row `i`.
    pub fn row_mut(&mut self, i: usize) -> VectorViewMut<'_, T> {
        assert!(
            i < self.nrows,
            "row {} out of bounds for {}x{} matrix",
            i, self.nrows, self.ncols,
        );
        let n = self.ncols;
        VectorViewMut::new(&mut self.data, i * n, 1, n)
    }

    /// Borrow column `j`.
    ///
    /// ```
    /// use linsolve::DynMatrix;
    /// let m = DynMatrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// assert_eq!(m.col(2)[1], 6.0);
    /// ```
    pub fn col(&self, j: usize) -> VectorView<'_, T> {
        assert!(
            j < self.ncols,
            "col {} out of bounds for {}x{} matrix",
            j, self.nrows, self.ncols,
        );
        VectorView::new(&self.data, j, self.ncols, self.nrows)
    }

    /// Mutably borrow column `j`.
    pub fn col_mut(&mut self, j: usize) -> VectorViewMut<'_, T> {
        assert!(
            j < self.ncols,
            "col {} out of bounds for {}x{} matrix",
            j, self.nrows, self.ncols,
        );
        let (m, n) = (self.nrows, self.ncols);
        VectorViewMut::new(&mut self.data, j, n, m)
    }
}

// ── Owned block copies ──────────────────────────────────────────────

impl<T: Scalar> DynMatrix<T> {
    /// Copy a `rows x cols` sub-matrix starting at `(i, j)` into a new matrix.
    ///
    /// ```
    /// use linsolve::DynMatrix;
    /// let m = DynMatrix::from_fn(3, 3, |i, j| (i * 3 + j) as f64);
    /// let b = m.block(0, 1, 2, 2);
    /// assert_eq!(b.as_slice(), &[1.0, 2.0, 4.0, 5.0]);
    /// ```
    pub fn block(&self, i: usize, j: usize, rows: usize, cols: usize) -> Self {
        self.view(i, j, rows, cols).to_matrix()
    }

    /// Write `src` into self starting at position `(i, j)`.
    ///
    /// Panics if the block extends beyond the matrix bounds.
    pub fn set_block(&mut self, i: usize, j: usize, src: &DynMatrix<T>) {
        self.view_mut(i, j, src.nrows, src.ncols).copy_from(src);
    }
}
