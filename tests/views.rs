use linsolve::{DynMatrix, DynVector, GaussJordan, LinearSolver, MatrixRef};

/// Split one `n x (n+1)` buffer into its coefficient block and rhs column.
#[test]
fn augmented_buffer_through_views() {
    let n = 3;
    let mut aug = DynMatrix::zeros(n, n + 1, 0.0_f64);
    let a = DynMatrix::from_rows(n, n, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 10.0]);
    aug.view_mut(0, 0, n, n).copy_from(&a);
    aug.col_mut(n).copy_from_slice(&[1.0, 2.0, 3.0]);

    assert_eq!(aug.row_slice(0), &[1.0, 2.0, 3.0, 1.0]);
    assert_eq!(aug.row_slice(2), &[7.0, 8.0, 10.0, 3.0]);

    let block = aug.view(0, 0, n, n);
    assert_eq!(block.to_matrix(), a);
    let rhs = aug.col(n);
    assert_eq!(rhs.to_vector().as_slice(), &[1.0, 2.0, 3.0]);
}

#[test]
fn views_translate_into_backing_coordinates() {
    let m = DynMatrix::from_fn(5, 6, |i, j| (10 * i + j) as f64);
    let v = m.view(1, 2, 3, 3);
    for i in 0..3 {
        for j in 0..3 {
            assert_eq!(v[(i, j)], m[(1 + i, 2 + j)]);
        }
    }
    assert_eq!(v.row(2)[0], 32.0);
    assert_eq!(v.col(1)[2], 33.0);
    assert_eq!(MatrixRef::nrows(&v), 3);
}

#[test]
#[should_panic(expected = "index out of range")]
fn view_rejects_local_overflow() {
    let m = DynMatrix::zeros(4, 4, 0.0_f64);
    let v = m.view(0, 0, 2, 2);
    // (2, 0) is inside the backing matrix but outside the view.
    let _ = v[(2, 0)];
}

#[test]
fn vector_window_over_solution() {
    let mut solver = GaussJordan::<f64>::with_dim(4);
    for i in 0..4 {
        *solver.a_mut(i, i) = 2.0;
        *solver.b_mut(i) = (i + 1) as f64;
    }
    let mut x = DynVector::zeros(4, 0.0);
    solver.solve(&mut x);
    let tail = x.window(2, 2);
    assert_eq!(tail[0], 1.5);
    assert_eq!(tail[1], 2.0);
}

#[test]
fn solver_exposes_coefficients_as_view() {
    let mut solver = GaussJordan::<f64>::with_dim(2);
    *solver.a_mut(1, 0) = 5.0;
    let a = solver.a_view();
    assert_eq!(a.row(1).to_vector().as_slice(), &[5.0, 0.0]);
    assert_eq!(solver.a(1, 0), 5.0);
}
