use alloc::vec::Vec;

use crate::dynmatrix::{BlockView, DynMatrix, DynVector};
use crate::linalg::{LinalgError, LinearSolver, LinearSystem, PivotSettings};
use crate::traits::{FloatScalar, MatrixMut};

/// Gauss-Jordan elimination with rank detection, in place.
///
/// `aug` is an `n x (n+1)` augmented matrix `[A | b]`. Rows are never
/// moved: `avail_rows` is a permutation of physical row indices, where
/// entries `k..n` are the rows still eligible as pivots at step `k`, and
/// `pivot_row[k]` records the physical row chosen at step `k`.
///
/// At each step the pivot is the eligible row with the largest magnitude in
/// column `k`; ties go to the first candidate in `avail_rows` order. If that
/// magnitude fails [`PivotSettings`]' relative test, elimination stops and
/// the remaining logical indices take the unused rows in `avail_rows` order,
/// with their right-hand side forced to zero. The solution is then
/// `x[k] = aug[(pivot_row[k], n)]` for every `k`.
///
/// Returns the number of completed steps (the effective rank).
///
/// ```
/// use linsolve::DynMatrix;
/// use linsolve::linalg::{gauss_jordan_in_place, PivotSettings};
///
/// // [A | b] with A = [[0, 1], [1, 0]], b = [3, 5]
/// let mut aug = DynMatrix::from_rows(2, 3, &[0.0_f64, 1.0, 3.0, 1.0, 0.0, 5.0]);
/// let mut avail = [0usize; 2];
/// let mut pivots = [0usize; 2];
/// let rank = gauss_jordan_in_place(&mut aug, &mut avail, &mut pivots, &PivotSettings::default());
/// assert_eq!(rank, 2);
/// assert_eq!(pivots, [1, 0]);
/// assert_eq!(aug[(pivots[0], 2)], 5.0);
/// assert_eq!(aug[(pivots[1], 2)], 3.0);
/// ```
pub fn gauss_jordan_in_place<T: FloatScalar>(
    aug: &mut impl MatrixMut<T>,
    avail_rows: &mut [usize],
    pivot_row: &mut [usize],
    settings: &PivotSettings<T>,
) -> usize {
    let n = aug.nrows();
    assert_eq!(
        aug.ncols(),
        n + 1,
        "augmented matrix must be n x (n+1), got {}x{}",
        n,
        aug.ncols(),
    );
    assert_eq!(n, avail_rows.len(), "row permutation length must match system size");
    assert_eq!(n, pivot_row.len(), "pivot record length must match system size");

    for (k, r) in avail_rows.iter_mut().enumerate() {
        *r = k;
    }

    let mut max_pivot = settings.pivot_floor;
    let mut rank = 0;

    for k in 0..n {
        // Largest magnitude among eligible rows; strict `>` keeps the first on ties.
        let mut best = k;
        let mut best_mag = aug.get(avail_rows[k], k).abs();
        for (idx, &row) in avail_rows.iter().enumerate().skip(k + 1) {
            let mag = aug.get(row, k).abs();
            if mag > best_mag {
                best = idx;
                best_mag = mag;
            }
        }

        if !settings.accepts(best_mag, max_pivot) {
            log::debug!(
                "gauss-jordan: degenerate pivot {:?} at step {} (max pivot {:?}), rank {} of {}",
                best_mag,
                k,
                max_pivot,
                k,
                n
            );
            break;
        }
        if best_mag > max_pivot {
            max_pivot = best_mag;
        }

        avail_rows.swap(k, best);
        let p = avail_rows[k];
        pivot_row[k] = p;
        log::trace!("gauss-jordan: step {} pivots on row {} ({:?})", k, p, best_mag);

        let pivot = *aug.get(p, k);
        for j in (k + 1)..=n {
            let v = *aug.get(p, j);
            *aug.get_mut(p, j) = v / pivot;
        }
        *aug.get_mut(p, k) = T::one();

        // Columns < k of the pivot row are already zero, so the update
        // only needs to cover [k, n].
        for r in (0..n).filter(|&r| r != p) {
            let factor = *aug.get(r, k);
            for j in (k + 1)..=n {
                let v = *aug.get(r, j) - factor * *aug.get(p, j);
                *aug.get_mut(r, j) = v;
            }
            *aug.get_mut(r, k) = T::zero();
        }

        rank = k + 1;
    }

    for k in rank..n {
        let r = avail_rows[k];
        pivot_row[k] = r;
        *aug.get_mut(r, n) = T::zero();
    }

    rank
}

/// Direct solver using Gauss-Jordan elimination with rank detection.
///
/// Owns the caller-populated `A` and `b`, an `n x (n+1)` augmented work
/// buffer, and the two permutation arrays. All of them are sized by
/// [`configure`](LinearSolver::configure) and reused by every
/// [`solve`](LinearSolver::solve), so repeated solves of a fixed size do not
/// allocate. `A` and `b` are copied into the work buffer on each solve and
/// left untouched, so solving twice gives bit-identical results.
///
/// Singular systems are solved partially: components past the effective
/// rank are fixed at exactly zero. This is not a least-squares or
/// minimum-norm answer.
///
/// # Example
///
/// ```
/// use linsolve::{DynMatrix, GaussJordan, LinearSolver};
///
/// let mut gj = GaussJordan::<f64>::new();
/// gj.configure(2);
/// let a = DynMatrix::from_rows(2, 2, &[1.0, 2.0, 2.0, 4.0]);
/// gj.set_system(&a, &[3.0, 6.0]).unwrap();
///
/// let (x, rank) = gj.solve_new();
/// assert_eq!(rank, 1);
/// assert_eq!(x.as_slice(), &[3.0, 0.0]);
/// ```
#[derive(Debug, Clone)]
pub struct GaussJordan<T> {
    system: LinearSystem<T>,
    aug: DynMatrix<T>,
    avail_rows: Vec<usize>,
    pivot_row: Vec<usize>,
    settings: PivotSettings<T>,
}

impl<T: FloatScalar> GaussJordan<T>
where
    PivotSettings<T>: Default,
{
    /// Create an unconfigured solver with default pivot settings.
    pub fn new() -> Self {
        Self::with_settings(PivotSettings::default())
    }

    /// Create a solver already configured for size `n`.
    pub fn with_dim(n: usize) -> Self {
        let mut s = Self::new();
        s.configure(n);
        s
    }
}

impl<T: FloatScalar> Default for GaussJordan<T>
where
    PivotSettings<T>: Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FloatScalar> GaussJordan<T> {
    /// Create an unconfigured solver with custom pivot settings.
    pub fn with_settings(settings: PivotSettings<T>) -> Self {
        Self {
            system: LinearSystem::new(),
            aug: DynMatrix::zeros(0, 0, T::zero()),
            avail_rows: Vec::new(),
            pivot_row: Vec::new(),
            settings,
        }
    }

    /// Pivot thresholds in use.
    #[inline]
    pub fn settings(&self) -> &PivotSettings<T> {
        &self.settings
    }

    /// Physical pivot row for each logical step of the last solve.
    ///
    /// Entries past the returned rank are the unused rows assigned to the
    /// zero-filled tail.
    #[inline]
    pub fn pivot_rows(&self) -> &[usize] {
        &self.pivot_row
    }

    /// The augmented work buffer as left by the last solve.
    pub fn augmented(&self) -> BlockView<'_, T> {
        self.aug.as_view()
    }
}

impl<T: FloatScalar> LinearSolver<T> for GaussJordan<T> {
    fn configure(&mut self, n: usize) {
        self.system.configure(n);
        if self.aug.nrows() != n {
            log::debug!("gauss-jordan: configured for {}x{} system", n, n);
        }
        self.aug.resize(n, n + 1);
        self.avail_rows.clear();
        self.avail_rows.resize(n, 0);
        self.pivot_row.clear();
        self.pivot_row.resize(n, 0);
    }

    #[inline]
    fn dim(&self) -> usize {
        self.system.dim()
    }

    fn a_view(&self) -> BlockView<'_, T> {
        self.system.a.as_view()
    }

    #[inline]
    fn a_mut(&mut self, i: usize, j: usize) -> &mut T {
        &mut self.system.a[(i, j)]
    }

    #[inline]
    fn b(&self, i: usize) -> T {
        self.system.b[i]
    }

    #[inline]
    fn b_mut(&mut self, i: usize) -> &mut T {
        &mut self.system.b[i]
    }

    fn solve(&mut self, x: &mut DynVector<T>) -> usize {
        let n = self.system.assert_configured();

        self.aug.view_mut(0, 0, n, n).copy_from(&self.system.a);
        self.aug.col_mut(n).copy_from_slice(self.system.b.as_slice());

        let rank = gauss_jordan_in_place(
            &mut self.aug,
            &mut self.avail_rows,
            &mut self.pivot_row,
            &self.settings,
        );

        if x.len() != n {
            x.resize(n);
        }
        let rhs = self.aug.col(n);
        for (xk, &p) in x.as_mut_slice().iter_mut().zip(&self.pivot_row) {
            *xk = rhs[p];
        }
        rank
    }
}

// ── Convenience ─────────────────────────────────────────────────────

impl<T: FloatScalar> DynMatrix<T>
where
    PivotSettings<T>: Default,
{
    /// Solve `self · x = b` with a one-off [`GaussJordan`] solver.
    ///
    /// Returns `(x, rank)`, or an error if `self` is not square or `b` does
    /// not match it. Allocates a solver per call; keep a [`GaussJordan`]
    /// around instead when solving repeatedly.
    ///
    /// ```
    /// use linsolve::{DynMatrix, DynVector};
    /// let a = DynMatrix::from_rows(2, 2, &[2.0_f64, 1.0, 1.0, 3.0]);
    /// let b = DynVector::from_slice(&[5.0, 10.0]);
    /// let (x, rank) = a.gauss_jordan(&b).unwrap();
    /// assert_eq!(rank, 2);
    /// assert!((x[0] - 1.0).abs() < 1e-12);
    /// assert!((x[1] - 3.0).abs() < 1e-12);
    /// ```
    pub fn gauss_jordan(&self, b: &DynVector<T>) -> Result<(DynVector<T>, usize), LinalgError> {
        if !self.is_square() || self.nrows() == 0 {
            return Err(LinalgError::DimensionMismatch {
                expected: (self.nrows().max(1), self.nrows().max(1)),
                got: (self.nrows(), self.ncols()),
            });
        }
        let mut solver = GaussJordan::with_dim(self.nrows());
        solver.set_system(self, b.as_slice())?;
        Ok(solver.solve_new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solver_for(n: usize, a: &[f64], b: &[f64]) -> GaussJordan<f64> {
        let mut gj = GaussJordan::with_dim(n);
        gj.set_system(&DynMatrix::from_rows(n, n, a), b).unwrap();
        gj
    }

    #[test]
    fn solve_2x2() {
        let mut gj = solver_for(2, &[2.0, 1.0, 1.0, 3.0], &[5.0, 10.0]);
        let mut x = DynVector::zeros(2, 0.0);
        assert_eq!(gj.solve(&mut x), 2);
        assert!((x[0] - 1.0).abs() < 1e-12);
        assert!((x[1] - 3.0).abs() < 1e-12);
        // |2| > |1| in column 0, so row 0 pivots first.
        assert_eq!(gj.pivot_rows(), &[0, 1]);
    }

    #[test]
    fn singular_zero_fills_tail() {
        let mut gj = solver_for(2, &[1.0, 2.0, 2.0, 4.0], &[3.0, 6.0]);
        let mut x = DynVector::zeros(2, 0.0);
        assert_eq!(gj.solve(&mut x), 1);
        assert_eq!(x[0], 3.0);
        assert_eq!(x[1], 0.0);
        assert_eq!(gj.pivot_rows(), &[1, 0]);
    }

    #[test]
    fn identity_needs_no_swaps() {
        let mut gj = solver_for(
            3,
            &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
            &[1.0, 2.0, 3.0],
        );
        let mut x = DynVector::zeros(3, 0.0);
        assert_eq!(gj.solve(&mut x), 3);
        assert_eq!(x.as_slice(), &[1.0, 2.0, 3.0]);
        assert_eq!(gj.pivot_rows(), &[0, 1, 2]);
    }

    #[test]
    fn ties_resolve_to_first_candidate() {
        // Column 0 holds equal magnitudes in every row.
        let mut gj = solver_for(3, &[-2.0, 1.0, 0.0, 2.0, 0.0, 1.0, 2.0, 1.0, 1.0], &[0.0, 2.0, 4.0]);
        let rank = gj.solve(&mut DynVector::zeros(3, 0.0));
        assert_eq!(rank, 3);
        assert_eq!(gj.pivot_rows()[0], 0);
    }

    #[test]
    fn ties_follow_scan_order_after_reordering() {
        // Step 0 pivots on row 2, leaving rows 1 and 0 (in that scan order)
        // tied at 1.0 in column 1.
        let mut gj = solver_for(3, &[1.0, 1.0, 0.0, 0.0, 1.0, 1.0, 2.0, 0.0, 1.0], &[1.0, 1.0, 1.0]);
        let rank = gj.solve(&mut DynVector::zeros(3, 0.0));
        assert_eq!(rank, 3);
        assert_eq!(gj.pivot_rows(), &[2, 1, 0]);
    }

    #[test]
    fn picks_largest_not_adjacent() {
        let mut gj = solver_for(3, &[1.0, 0.0, 0.0, 2.0, 1.0, 0.0, 5.0, 0.0, 1.0], &[1.0, 1.0, 1.0]);
        gj.solve(&mut DynVector::zeros(3, 0.0));
        assert_eq!(gj.pivot_rows()[0], 2);
    }

    #[test]
    fn zero_matrix_has_rank_zero() {
        let mut gj = solver_for(2, &[0.0; 4], &[1.0, 2.0]);
        let mut x = DynVector::zeros(2, 0.0);
        assert_eq!(gj.solve(&mut x), 0);
        assert_eq!(x.as_slice(), &[0.0, 0.0]);
        assert_eq!(gj.pivot_rows(), &[0, 1]);
    }

    #[test]
    fn pivot_floor_applies_to_tiny_systems() {
        // Every entry is below 1e-8 * 1e-2, so nothing is accepted.
        let mut gj = solver_for(2, &[1e-11, 0.0, 0.0, 1e-11], &[1e-11, 1e-11]);
        assert_eq!(gj.solve(&mut DynVector::zeros(2, 0.0)), 0);

        let mut relaxed = GaussJordan::with_settings(PivotSettings {
            pivot_floor: 0.0,
            degeneracy_ratio: 1e-8,
        });
        relaxed.configure(2);
        relaxed
            .set_system(&DynMatrix::from_rows(2, 2, &[1e-11, 0.0, 0.0, 1e-11]), &[1e-11, 1e-11])
            .unwrap();
        let (x, rank) = relaxed.solve_new();
        assert_eq!(rank, 2);
        assert_eq!(x.as_slice(), &[1.0, 1.0]);
    }

    #[test]
    fn zero_pivot_never_committed() {
        let mut gj = GaussJordan::with_settings(PivotSettings {
            pivot_floor: 0.0,
            degeneracy_ratio: 1e-8,
        });
        gj.configure(2);
        gj.set_system(&DynMatrix::from_rows(2, 2, &[0.0, 1.0, 0.0, 2.0]), &[1.0, 2.0])
            .unwrap();
        let (x, rank) = gj.solve_new();
        assert_eq!(rank, 0);
        assert_eq!(x.as_slice(), &[0.0, 0.0]);
    }

    #[test]
    fn solve_resizes_output() {
        let mut gj = solver_for(2, &[1.0, 0.0, 0.0, 1.0], &[4.0, 5.0]);
        let mut x = DynVector::from_slice(&[9.0; 5]);
        gj.solve(&mut x);
        assert_eq!(x.as_slice(), &[4.0, 5.0]);
    }

    #[test]
    fn inputs_survive_solve() {
        let mut gj = solver_for(2, &[2.0, 1.0, 1.0, 3.0], &[5.0, 10.0]);
        gj.solve(&mut DynVector::zeros(2, 0.0));
        assert_eq!(gj.a(0, 0), 2.0);
        assert_eq!(gj.a(1, 1), 3.0);
        assert_eq!(gj.b(1), 10.0);
    }

    #[test]
    fn reconfigure_changes_size() {
        let mut gj = GaussJordan::<f64>::with_dim(3);
        gj.configure(2);
        assert_eq!(gj.dim(), 2);
        assert_eq!(gj.augmented().ncols(), 3);
        assert_eq!(gj.a(1, 1), 0.0);
    }

    #[test]
    #[should_panic(expected = "solver is not configured")]
    fn solve_unconfigured_panics() {
        let mut gj = GaussJordan::<f64>::new();
        gj.solve(&mut DynVector::zeros(0, 0.0));
    }

    #[test]
    #[should_panic(expected = "index out of range")]
    fn a_mut_out_of_range_panics() {
        let mut gj = GaussJordan::<f64>::with_dim(2);
        *gj.a_mut(0, 2) = 1.0;
    }

    #[test]
    fn set_system_before_configure() {
        let mut gj = GaussJordan::<f64>::new();
        let a = DynMatrix::eye(2, 0.0);
        assert_eq!(gj.set_system(&a, &[1.0, 1.0]), Err(LinalgError::NotConfigured));
    }

    #[test]
    fn set_system_rhs_length() {
        let mut gj = GaussJordan::<f64>::with_dim(2);
        let a = DynMatrix::eye(2, 0.0);
        assert_eq!(
            gj.set_system(&a, &[1.0]),
            Err(LinalgError::DimensionMismatch {
                expected: (2, 1),
                got: (1, 1)
            })
        );
    }

    #[test]
    fn kernel_on_view() {
        // Run the kernel on a window of a larger buffer.
        let mut buf = DynMatrix::fill(3, 4, 7.0_f64);
        buf.set_block(1, 1, &DynMatrix::from_rows(2, 3, &[4.0, 0.0, 8.0, 0.0, 2.0, 2.0]));
        let mut avail = [0usize; 2];
        let mut pivots = [0usize; 2];
        let rank = {
            let mut v = buf.view_mut(1, 1, 2, 3);
            gauss_jordan_in_place(&mut v, &mut avail, &mut pivots, &PivotSettings::default())
        };
        assert_eq!(rank, 2);
        assert_eq!(buf[(1, 3)], 2.0);
        assert_eq!(buf[(2, 3)], 1.0);
        assert_eq!(buf[(0, 0)], 7.0);
    }

    #[test]
    #[should_panic(expected = "augmented matrix must be n x (n+1)")]
    fn kernel_rejects_square_buffer() {
        let mut m = DynMatrix::eye(2, 0.0_f64);
        gauss_jordan_in_place(&mut m, &mut [0; 2], &mut [0; 2], &PivotSettings::default());
    }

    #[test]
    fn convenience_rejects_non_square() {
        let a = DynMatrix::zeros(2, 3, 0.0_f64);
        let b = DynVector::zeros(2, 0.0);
        assert!(a.gauss_jordan(&b).is_err());
    }

    #[test]
    fn f32_small_relative_pivot_is_kept() {
        let mut gj = GaussJordan::<f32>::with_dim(2);
        gj.set_system(&DynMatrix::from_rows(2, 2, &[1.0_f32, 0.0, 0.0, 1e-7]), &[1.0, 1e-7])
            .unwrap();
        let (x, rank) = gj.solve_new();
        assert_eq!(rank, 2);
        assert_eq!(x[0], 1.0);
        assert!((x[1] - 1.0).abs() < 1e-5);
    }

    #[test]
    fn f32_solve() {
        let mut gj = GaussJordan::<f32>::with_dim(2);
        gj.set_system(&DynMatrix::from_rows(2, 2, &[4.0_f32, 1.0, 2.0, 3.0]), &[1.0, 2.0])
            .unwrap();
        let (x, rank) = gj.solve_new();
        assert_eq!(rank, 2);
        assert!((4.0 * x[0] + x[1] - 1.0).abs() < 1e-6);
        assert!((2.0 * x[0] + 3.0 * x[1] - 2.0).abs() < 1e-6);
    }
}
