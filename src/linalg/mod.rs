pub(crate) mod gauss_jordan;
pub(crate) mod lu;

pub use gauss_jordan::{gauss_jordan_in_place, GaussJordan};
pub use lu::{lu_in_place, lu_solve, LuSolver};

use crate::dynmatrix::{BlockView, DynMatrix, DynVector};
use crate::traits::{FloatScalar, MatrixRef, Scalar};

/// Errors from linear algebra operations.
///
/// Rank deficiency is *not* an error at the [`LinearSolver`] level: `solve`
/// reports it through the returned rank. `Singular` only surfaces from the
/// low-level [`lu_in_place`] kernel.
///
/// ```
/// use linsolve::{DynMatrix, LinearSolver, GaussJordan};
/// use linsolve::linalg::LinalgError;
///
/// let mut gj = GaussJordan::<f64>::new();
/// gj.configure(2);
/// let a = DynMatrix::zeros(3, 3, 0.0);
/// assert_eq!(
///     gj.set_system(&a, &[1.0, 2.0]).unwrap_err(),
///     LinalgError::DimensionMismatch { expected: (2, 2), got: (3, 3) },
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LinalgError {
    /// Runtime shape does not match the configured system size.
    DimensionMismatch {
        /// Expected `(rows, cols)`.
        expected: (usize, usize),
        /// Got `(rows, cols)`.
        got: (usize, usize),
    },
    /// The solver has not been sized with `configure`.
    NotConfigured,
    /// Elimination met a degenerate pivot after `rank` successful columns.
    Singular { rank: usize },
}

impl core::fmt::Display for LinalgError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LinalgError::DimensionMismatch { expected, got } => write!(
                f,
                "dimension mismatch: expected {}x{}, got {}x{}",
                expected.0, expected.1, got.0, got.1
            ),
            LinalgError::NotConfigured => write!(f, "solver is not configured"),
            LinalgError::Singular { rank } => {
                write!(f, "matrix is singular (rank {})", rank)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LinalgError {}

/// Pivot thresholds shared by the elimination kernels.
///
/// A candidate pivot `p` at a given step is accepted only if
/// `|p| >= degeneracy_ratio * max_pivot`, where `max_pivot` starts at
/// `pivot_floor` and grows to the largest accepted pivot magnitude. The floor
/// keeps a system made entirely of tiny entries from being judged
/// relative to itself.
///
/// ```
/// use linsolve::linalg::PivotSettings;
/// let s = PivotSettings::<f64>::default();
/// assert_eq!(s.pivot_floor, 1e-2);
/// assert_eq!(s.degeneracy_ratio, 1e-8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PivotSettings<T> {
    /// Initial value of the running maximum pivot (default: 1e-2).
    pub pivot_floor: T,
    /// Relative magnitude below which a pivot is degenerate (default: 1e-8).
    pub degeneracy_ratio: T,
}

impl Default for PivotSettings<f64> {
    fn default() -> Self {
        Self {
            pivot_floor: 1e-2,
            degeneracy_ratio: 1e-8,
        }
    }
}

impl Default for PivotSettings<f32> {
    fn default() -> Self {
        Self {
            pivot_floor: 1e-2,
            degeneracy_ratio: 1e-8,
        }
    }
}

impl<T: FloatScalar> PivotSettings<T> {
    /// Whether `magnitude` is an acceptable pivot given the running maximum.
    ///
    /// Zero and NaN magnitudes are never acceptable, whatever the settings.
    #[inline]
    pub(crate) fn accepts(&self, magnitude: T, max_pivot: T) -> bool {
        magnitude > T::zero() && magnitude >= self.degeneracy_ratio * max_pivot
    }
}

/// Caller-populated `A` and `b`, sized by `configure`.
#[derive(Debug, Clone)]
pub(crate) struct LinearSystem<T> {
    pub(crate) a: DynMatrix<T>,
    pub(crate) b: DynVector<T>,
}

impl<T: Scalar> LinearSystem<T> {
    pub(crate) fn new() -> Self {
        Self {
            a: DynMatrix::zeros(0, 0, T::zero()),
            b: DynVector::zeros(0, T::zero()),
        }
    }

    /// Resize to `n`, zeroing `A` and `b`. Reuses existing allocations.
    pub(crate) fn configure(&mut self, n: usize) {
        assert!(n > 0, "system size must be positive");
        self.a.resize(n, n);
        self.b.resize(n);
    }

    #[inline]
    pub(crate) fn dim(&self) -> usize {
        self.b.len()
    }

    #[inline]
    #[track_caller]
    pub(crate) fn assert_configured(&self) -> usize {
        let n = self.dim();
        assert!(n > 0, "solver is not configured");
        n
    }
}

/// A direct solver for square systems `A·x = b`.
///
/// The caller sizes the solver with [`configure`](Self::configure), fills
/// `A` and `b` through the element accessors (or [`set_system`](Self::set_system)),
/// and calls [`solve`](Self::solve), which writes `x` and returns the
/// effective rank. A rank below `n` is a normal outcome signalling a
/// degenerate system, not an error.
///
/// The trait is object safe, so callers can hold `&mut dyn LinearSolver<T>`
/// and stay independent of the strategy.
///
/// ```
/// use linsolve::{DynVector, GaussJordan, LinearSolver};
///
/// let mut solver = GaussJordan::<f64>::new();
/// solver.configure(2);
/// *solver.a_mut(0, 0) = 2.0;
/// *solver.a_mut(0, 1) = 1.0;
/// *solver.a_mut(1, 0) = 1.0;
/// *solver.a_mut(1, 1) = 3.0;
/// *solver.b_mut(0) = 5.0;
/// *solver.b_mut(1) = 10.0;
///
/// let mut x = DynVector::zeros(0, 0.0);
/// let rank = solver.solve(&mut x);
/// assert_eq!(rank, 2);
/// assert!((x[0] - 1.0).abs() < 1e-12);
/// assert!((x[1] - 3.0).abs() < 1e-12);
/// ```
pub trait LinearSolver<T: FloatScalar> {
    /// Set the system size to `n`, (re)allocating internal storage and
    /// zeroing `A` and `b`. Panics if `n == 0`.
    fn configure(&mut self, n: usize);

    /// Configured system size, or 0 before the first `configure`.
    fn dim(&self) -> usize;

    /// Read-only view of the coefficient matrix `A`.
    fn a_view(&self) -> BlockView<'_, T>;

    /// Element `A[i][j]`.
    fn a(&self, i: usize, j: usize) -> T {
        self.a_view()[(i, j)]
    }

    /// Mutable element `A[i][j]`.
    fn a_mut(&mut self, i: usize, j: usize) -> &mut T;

    /// Element `b[i]`.
    fn b(&self, i: usize) -> T;

    /// Mutable element `b[i]`.
    fn b_mut(&mut self, i: usize) -> &mut T;

    /// Solve the configured system into `x`, resizing it to `n` if needed.
    ///
    /// Returns the effective rank in `[0, n]`. Panics if the solver has not
    /// been configured.
    fn solve(&mut self, x: &mut DynVector<T>) -> usize;

    /// Load `A` and `b` in bulk, checking their shapes against `dim()`.
    fn set_system(&mut self, a: &dyn MatrixRef<T>, b: &[T]) -> Result<(), LinalgError> {
        let n = self.dim();
        if n == 0 {
            return Err(LinalgError::NotConfigured);
        }
        if (a.nrows(), a.ncols()) != (n, n) {
            return Err(LinalgError::DimensionMismatch {
                expected: (n, n),
                got: (a.nrows(), a.ncols()),
            });
        }
        if b.len() != n {
            return Err(LinalgError::DimensionMismatch {
                expected: (n, 1),
                got: (b.len(), 1),
            });
        }
        for i in 0..n {
            for j in 0..n {
                *self.a_mut(i, j) = *a.get(i, j);
            }
            *self.b_mut(i) = b[i];
        }
        Ok(())
    }

    /// Solve into a freshly allocated vector, returning it with the rank.
    fn solve_new(&mut self) -> (DynVector<T>, usize) {
        let mut x = DynVector::zeros(self.dim(), T::zero());
        let rank = self.solve(&mut x);
        (x, rank)
    }
}
