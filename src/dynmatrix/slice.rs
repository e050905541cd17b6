use super::DynMatrix;

impl<T> DynMatrix<T> {
    /// View the entire matrix as a flat slice in row-major order.
    ///
    /// ```
    /// use linsolve::DynMatrix;
    /// let m = DynMatrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    /// ```
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// View the entire matrix as a mutable flat slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Row `i` as a contiguous slice.
    ///
    /// ```
    /// use linsolve::DynMatrix;
    /// let m = DynMatrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// assert_eq!(m.row_slice(1), &[4.0, 5.0, 6.0]);
    /// ```
    #[inline]
    pub fn row_slice(&self, i: usize) -> &[T] {
        assert!(
            i < self.nrows,
            "row {} out of bounds for {}x{} matrix",
            i, self.nrows, self.ncols,
        );
        let start = i * self.ncols;
        &self.data[start..start + self.ncols]
    }

    /// Row `i` as a mutable contiguous slice.
    #[inline]
    pub fn row_slice_mut(&mut self, i: usize) -> &mut [T] {
        assert!(
            i < self.nrows,
            "row {} out of bounds for {}x{} matrix",
            i, self.nrows, self.ncols,
        );
        let start = i * self.ncols;
        let end = start + self.ncols;
        &mut self.data[start..end]
    }

    /// Iterate over all elements in row-major order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Iterate mutably over all elements in row-major order.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }
}

impl<'a, T> IntoIterator for &'a DynMatrix<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynMatrix<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_slice() {
        let m = DynMatrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(m.row_slice(0), &[1.0, 2.0, 3.0]);
        assert_eq!(m.row_slice(1), &[4.0, 5.0, 6.0]);
    }

    #[test]
    fn row_slice_mut() {
        let mut m = DynMatrix::from_rows(2, 2, &[1, 2, 3, 4]);
        m.row_slice_mut(1)[0] = 30;
        assert_eq!(m[(1, 0)], 30);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn row_slice_out_of_bounds() {
        let m = DynMatrix::from_rows(1, 2, &[1, 2]);
        let _ = m.row_slice(1);
    }

    #[test]
    fn into_iter_for_loop() {
        let m = DynMatrix::from_rows(2, 2, &[1, 2, 3, 4]);
        let mut sum = 0;
        for &x in &m {
            sum += x;
        }
        assert_eq!(sum, 10);
    }

    #[test]
    fn iter_mut() {
        let mut m = DynMatrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        for x in &mut m {
            *x *= 2.0;
        }
        assert_eq!(m[(1, 1)], 8.0);
    }
}
