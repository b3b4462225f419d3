#![allow(non_snake_case)]
use crate::algebra::*;

#[test]
fn test_band_detection_kl1_ku2() {
    //     [5  2 -1  0  0]
    //     [1  4  2 -1  0]
    // A = [0  1  3  2 -1]
    //     [0  0  1  2  2]
    //     [0  0  0  1  1]
    // nonzero diagonals: 1 below, 2 above
    let A = Matrix::from(&[
        [5., 2., -1., 0., 0.], //
        [1., 4., 2., -1., 0.], //
        [0., 1., 3., 2., -1.], //
        [0., 0., 1., 2., 2.],  //
        [0., 0., 0., 1., 1.],
    ]);

    let band = BandedMatrix::from_dense(&A);
    assert_eq!(band.bandwidths(), (1, 2));
    assert_eq!(band.order(), 5);

    let packed = Matrix::from(&[
        [0., 0., -1., -1., -1.], //
        [0., 2., 2., 2., 2.],    //
        [5., 4., 3., 2., 1.],    //
        [1., 1., 1., 1., 0.],
    ]);
    assert_eq!(band.packed, packed);
}

#[test]
fn test_band_detection_kl1_ku1() {
    //     [4  0  0  0]
    //     [2  3  1  0]
    // A = [0  1  2  2]
    //     [0  0  0  1]
    let A = Matrix::from(&[
        [4., 0., 0., 0.], //
        [2., 3., 1., 0.], //
        [0., 1., 2., 2.], //
        [0., 0., 0., 1.],
    ]);

    let band = BandedMatrix::from_dense(&A);
    assert_eq!(band.bandwidths(), (1, 1));

    let packed = Matrix::from(&[
        [0., 0., 1., 2.], //
        [4., 3., 2., 1.], //
        [2., 1., 0., 0.],
    ]);
    assert_eq!(band.packed, packed);
}

#[test]
fn test_band_detection_diagonal() {
    let A = Matrix::from(&[
        [1., 0., 0.], //
        [0., 2., 0.], //
        [0., 0., 3.],
    ]);

    let band = BandedMatrix::from_dense(&A);
    assert_eq!(band.bandwidths(), (0, 0));
    assert_eq!(band.packed, Matrix::from(&[[1., 2., 3.]]));
}

#[test]
fn test_band_detection_full_band() {
    // corner entries nonzero, so the band covers the whole matrix
    let A = Matrix::from(&[
        [1., 2., 3.], //
        [4., 5., 6.], //
        [7., 8., 9.],
    ]);

    let band = BandedMatrix::from_dense(&A);
    assert_eq!(band.bandwidths(), (2, 2));

    let packed = Matrix::from(&[
        [0., 0., 3.], //
        [0., 2., 6.], //
        [1., 5., 9.], //
        [4., 8., 0.], //
        [7., 0., 0.],
    ]);
    assert_eq!(band.packed, packed);
}

#[test]
fn test_band_detection_1x1() {
    let A = Matrix::from(&[[7.]]);
    let band = BandedMatrix::from_dense(&A);
    assert_eq!(band.bandwidths(), (0, 0));
    assert_eq!(band.packed, Matrix::from(&[[7.]]));
}
