#![allow(non_snake_case)]
use matsolve::{algebra::*, solver::*};

#[test]
fn basic_triangular_lower() {
    let A = Matrix::from(&[
        [9., 0., 0.], //
        [4., 9., 0.], //
        [7., 8., 9.],
    ]);
    let b = vec![1., 1., 1.];

    assert_eq!(A.triangle_orientation(0.0), MatrixTriangle::Tril);

    let a = MatrixHandle::new(A.clone(), Some(MatrixFormat::Triangular));
    let x = solve(&a, &b).unwrap();

    // forward substitution by hand: x = [1/9, 5/81, -22/729]
    assert!(x.norm_inf_diff(&[1. / 9., 5. / 81., -22. / 729.]) < 1e-14);

    let mut r = vec![0.; 3];
    A.gemv(&x, &mut r, 1.0, 0.0);
    assert!(r.norm_inf_diff(&b) < 1e-14);
}

#[test]
fn basic_triangular_upper() {
    let A = Matrix::from(&[
        [6., 8., 7.], //
        [0., 5., 4.], //
        [0., 0., 4.],
    ]);
    let b = vec![1., 1., 1.];

    assert_eq!(A.triangle_orientation(0.0), MatrixTriangle::Triu);

    let a = MatrixHandle::new(A.clone(), Some(MatrixFormat::Triangular));
    let x = solve(&a, &b).unwrap();

    let mut r = vec![0.; 3];
    A.gemv(&x, &mut r, 1.0, 0.0);
    assert!(r.norm_inf_diff(&b) < 1e-14);
}

#[test]
fn basic_triangular_zero_diagonal() {
    let A = Matrix::from(&[
        [1., 0.], //
        [1., 0.],
    ]);
    let a = MatrixHandle::new(A, Some(MatrixFormat::Triangular));
    assert!(matches!(
        solve(&a, &[1., 1.]),
        Err(SolveError::Factorization(FactorizationError::ZeroPivot))
    ));
}
