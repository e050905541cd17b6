use alloc::vec::Vec;

use crate::dynmatrix::{BlockView, DynMatrix, DynVector};
use crate::linalg::{LinalgError, LinearSolver, LinearSystem, PivotSettings};
use crate::traits::{FloatScalar, MatrixMut, MatrixRef};

/// Perform LU decomposition with partial pivoting, in place.
///
/// On return, `a` contains both L and U packed together:
/// - Upper triangle (including diagonal): U
/// - Lower triangle (excluding diagonal): L (diagonal of L is implicitly 1)
///
/// `perm` is filled with the row permutation indices. Pivots are judged with
/// the same relative test as the Gauss-Jordan kernel.
/// Returns `true` if the number of row swaps was even, or
/// [`LinalgError::Singular`] carrying the number of columns factored before a
/// degenerate pivot was met.
pub fn lu_in_place<T: FloatScalar>(
    a: &mut impl MatrixMut<T>,
    perm: &mut [usize],
    settings: &PivotSettings<T>,
) -> Result<bool, LinalgError> {
    let n = a.nrows();
    assert_eq!(n, a.ncols(), "LU decomposition requires a square matrix");
    assert_eq!(n, perm.len(), "permutation slice length must match matrix size");

    for (i, p) in perm.iter_mut().enumerate() {
        *p = i;
    }

    let mut even = true;
    let mut max_pivot = settings.pivot_floor;

    for col in 0..n {
        let mut max_row = col;
        let mut max_val = a.get(col, col).abs();
        for row in (col + 1)..n {
            let val = a.get(row, col).abs();
            if val > max_val {
                max_val = val;
                max_row = row;
            }
        }

        if !settings.accepts(max_val, max_pivot) {
            return Err(LinalgError::Singular { rank: col });
        }
        if max_val > max_pivot {
            max_pivot = max_val;
        }

        if max_row != col {
            perm.swap(col, max_row);
            for j in 0..n {
                a.swap_elements((col, j), (max_row, j));
            }
            even = !even;
        }

        let pivot = *a.get(col, col);
        for row in (col + 1)..n {
            let factor = *a.get(row, col) / pivot;
            *a.get_mut(row, col) = factor;
            for j in (col + 1)..n {
                let v = *a.get(row, j) - factor * *a.get(col, j);
                *a.get_mut(row, j) = v;
            }
        }
    }

    Ok(even)
}

/// Solve Ax = b given the packed LU decomposition and permutation.
///
/// `lu` is the packed L/U matrix from `lu_in_place`.
/// `perm` is the row permutation from `lu_in_place`.
/// `b` (input) and `x` (output) are separate slices of length n.
pub fn lu_solve<T: FloatScalar>(lu: &impl MatrixRef<T>, perm: &[usize], b: &[T], x: &mut [T]) {
    let n = lu.nrows();
    assert_eq!(b.len(), n, "rhs length mismatch");
    assert_eq!(x.len(), n, "solution length mismatch");

    // Forward: L y = P b
    for i in 0..n {
        let s = (0..i).fold(b[perm[i]], |acc, j| acc - *lu.get(i, j) * x[j]);
        x[i] = s;
    }

    // Backward: U x = y
    for i in (0..n).rev() {
        let s = ((i + 1)..n).fold(x[i], |acc, j| acc - *lu.get(i, j) * x[j]);
        x[i] = s / *lu.get(i, i);
    }
}

/// Direct solver using LU decomposition with partial pivoting.
///
/// An alternative strategy behind [`LinearSolver`]. For a non-singular
/// system it agrees with [`GaussJordan`](crate::GaussJordan) to rounding.
/// When factorisation meets a degenerate pivot the rank is the number of
/// columns factored so far and `x` is all zeros; unlike Gauss-Jordan it
/// does not produce a partial solution.
///
/// ```
/// use linsolve::{DynMatrix, LinearSolver, LuSolver};
///
/// let mut lu = LuSolver::<f64>::with_dim(3);
/// let a = DynMatrix::from_rows(3, 3, &[2.0, 1.0, -1.0, -3.0, -1.0, 2.0, -2.0, 1.0, 2.0]);
/// lu.set_system(&a, &[8.0, -11.0, -3.0]).unwrap();
/// let (x, rank) = lu.solve_new();
/// assert_eq!(rank, 3);
/// assert!((x[0] - 2.0).abs() < 1e-12);
/// assert!((x[1] - 3.0).abs() < 1e-12);
/// assert!((x[2] + 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct LuSolver<T> {
    system: LinearSystem<T>,
    lu: DynMatrix<T>,
    perm: Vec<usize>,
    settings: PivotSettings<T>,
}

impl<T: FloatScalar> LuSolver<T>
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

impl<T: FloatScalar> Default for LuSolver<T>
where
    PivotSettings<T>: Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FloatScalar> LuSolver<T> {
    /// Create an unconfigured solver with custom pivot settings.
    pub fn with_settings(settings: PivotSettings<T>) -> Self {
        Self {
            system: LinearSystem::new(),
            lu: DynMatrix::zeros(0, 0, T::zero()),
            perm: Vec::new(),
            settings,
        }
    }

    /// Determinant of the current `A`.
    ///
    /// Refactorises into the work buffer. Returns zero when a degenerate
    /// pivot is met.
    pub fn det(&mut self) -> T {
        let n = self.system.assert_configured();
        self.lu.copy_from(&self.system.a);
        match lu_in_place(&mut self.lu, &mut self.perm, &self.settings) {
            Ok(even) => {
                let d = (0..n).fold(T::one(), |acc, i| acc * self.lu[(i, i)]);
                if even {
                    d
                } else {
                    -d
                }
            }
            Err(_) => T::zero(),
        }
    }
}

impl<T: FloatScalar> LinearSolver<T> for LuSolver<T> {
    fn configure(&mut self, n: usize) {
        self.system.configure(n);
        if self.lu.nrows() != n {
            log::debug!("lu: configured for {}x{} system", n, n);
        }
        self.lu.resize(n, n);
        self.perm.clear();
        self.perm.resize(n, 0);
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
        if x.len() != n {
            x.resize(n);
        }

        self.lu.copy_from(&self.system.a);
        match lu_in_place(&mut self.lu, &mut self.perm, &self.settings) {
            Ok(_) => {
                lu_solve(&self.lu, &self.perm, self.system.b.as_slice(), x.as_mut_slice());
                n
            }
            Err(err) => {
                log::debug!("lu: {}", err);
                x.as_mut_slice().fill(T::zero());
                match err {
                    LinalgError::Singular { rank } => rank,
                    _ => 0,
                }
            }
        }
    }
}
