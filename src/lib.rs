//! # linsolve
//!
//! Dense matrix storage, borrowed views, and direct solvers for small to
//! moderate square systems `A·x = b`, no-std compatible (requires `alloc`).
//! Built for callers that solve the same size of system over and over:
//! solvers size their buffers once and reuse them on every call.
//!
//! ## Quick start
//!
//! ```
//! use linsolve::{DynVector, GaussJordan, LinearSolver};
//!
//! let mut solver = GaussJordan::<f64>::new();
//! solver.configure(2);
//! *solver.a_mut(0, 0) = 2.0;
//! *solver.a_mut(0, 1) = 1.0;
//! *solver.a_mut(1, 0) = 1.0;
//! *solver.a_mut(1, 1) = 3.0;
//! *solver.b_mut(0) = 5.0;
//! *solver.b_mut(1) = 10.0;
//!
//! let mut x = DynVector::zeros(2, 0.0);
//! let rank = solver.solve(&mut x); // x = [1, 3]
//! assert_eq!(rank, 2);
//! ```
//!
//! ## Modules
//!
//! - [`dynmatrix`] — Heap-allocated `DynMatrix<T>` with runtime dimensions and
//!   row-major `Vec<T>` storage, plus the [`DynVector<T>`] newtype. Borrowed
//!   views ([`BlockView`], [`VectorView`] and their `Mut` forms) address rows,
//!   columns, rectangular blocks and vector windows without copying; their
//!   lifetimes are tied to the owner, so a view cannot outlive a resize.
//!
//! - [`linalg`] — The [`LinearSolver`] trait and two strategies:
//!   [`GaussJordan`] (pivoting over all remaining rows, rank-revealing, with a
//!   zero-filled tail for singular systems) and [`LuSolver`] (partial-pivoting
//!   LU). The elimination kernels are also exposed as free functions on
//!   `&mut impl MatrixMut<T>` for in-place use on caller-owned buffers.
//!
//! - [`traits`] — Element trait hierarchy:
//!   - [`Scalar`] — all matrix elements (`Copy + PartialEq + Debug + Zero + One + Num`)
//!   - [`FloatScalar`] — real floats (`Scalar + Float`), used by the solvers
//!   - [`MatrixRef`] / [`MatrixMut`] — generic read/write access for algorithms
//!
//! ## Rank deficiency
//!
//! A singular or nearly singular system is a normal outcome, not an error:
//! `solve` returns the effective rank, and callers treat `rank < n` as a
//! degeneracy signal. Out-of-range indices, solving before `configure`, and
//! shape mismatches in bulk copies are caller bugs and panic.
//!
//! ## Logging
//!
//! Solvers emit `trace` records per pivot and `debug` records on
//! reconfiguration and on early termination through the [`log`] facade.
//! No logger is installed by the library.
//!
//! ## Cargo features
//!
//! | Feature   | Default  | Description |
//! |-----------|----------|-------------|
//! | `std`     | yes      | Hardware FPU via system libm, `std::error::Error` for [`linalg::LinalgError`] |
//! | `libm`    | baseline | Pure-Rust software float fallback for `no_std` targets |

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod dynmatrix;
pub mod linalg;
pub mod traits;

pub use dynmatrix::{
    BlockView, BlockViewMut, DynMatrix, DynMatrixf32, DynMatrixf64, DynVector, DynVectorf32,
    DynVectorf64, VectorView, VectorViewMut,
};
pub use linalg::{GaussJordan, LinearSolver, LuSolver};
pub use traits::{FloatScalar, MatrixMut, MatrixRef, Scalar};
