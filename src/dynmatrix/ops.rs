use alloc::vec::Vec;
use core::ops::{Mul, Sub};

use crate::traits::{MatrixRef, Scalar};

use super::vector::DynVector;
use super::DynMatrix;

// ── Matrix × vector ─────────────────────────────────────────────────

impl<T: Scalar> DynMatrix<T> {
    /// Matrix-vector product `A·x`.
    ///
    /// Accepts any single-row [`MatrixRef`] as `x`, so vector views and
    /// solution vectors work alike.
    ///
    /// ```
    /// use linsolve::{DynMatrix, DynVector};
    /// let a = DynMatrix::from_rows(2, 2, &[2.0, 1.0, 1.0, 3.0]);
    /// let x = DynVector::from_slice(&[1.0, 3.0]);
    /// assert_eq!(a.mul_vec(&x).as_slice(), &[5.0, 10.0]);
    /// ```
    pub fn mul_vec(&self, x: &impl MatrixRef<T>) -> DynVector<T> {
        assert_eq!(
            (1, self.ncols),
            (x.nrows(), x.ncols()),
            "dimension mismatch: {}x{} * {}x{}",
            self.nrows, self.ncols, x.nrows(), x.ncols(),
        );
        let data: Vec<T> = (0..self.nrows)
            .map(|i| {
                self.row_slice(i)
                    .iter()
                    .enumerate()
                    .fold(T::zero(), |acc, (j, &a)| acc + a * *x.get(0, j))
            })
            .collect();
        DynVector::from_vec(data)
    }
}

impl<T: Scalar> Mul<&DynVector<T>> for &DynMatrix<T> {
    type Output = DynVector<T>;

    fn mul(self, rhs: &DynVector<T>) -> DynVector<T> {
        self.mul_vec(rhs)
    }
}

// ── Vector subtraction ──────────────────────────────────────────────

impl<T: Scalar> Sub<&DynVector<T>> for &DynVector<T> {
    type Output = DynVector<T>;

    fn sub(self, rhs: &DynVector<T>) -> DynVector<T> {
        assert_eq!(
            self.len(),
            rhs.len(),
            "dimension mismatch: vector {} - vector {}",
            self.len(),
            rhs.len(),
        );
        let data: Vec<T> = self.iter().zip(rhs.iter()).map(|(&a, &b)| a - b).collect();
        DynVector::from_vec(data)
    }
}
