use linal::{errors::ShapeError, matrix::Matrix, square::SquareMatrix};
use proptest::prelude::*;
use seq_macro::seq;

extern crate linal;

#[test]
fn test_det_non_square() {
    let a: Matrix<f64> = Matrix::zeros(3, 4);

    assert_eq!(
        a.det(),
        Err(ShapeError::NotSquare {
            rows: 3,
            columns: 4
        })
    );
    assert!(a.into_square().is_err());
}

#[test]
fn test_det_singular() {
    let a = Matrix::from([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);

    assert_eq!(a.det(), Ok(0));
}

#[test]
fn test_det_float() {
    let a = Matrix::from([[0.5, 1.0, 0.0], [2.0, -1.0, 3.0], [1.0, 0.0, 4.0]]);
    let want: f64 = 0.5 * (-4.0 - 0.0) - 1.0 * (8.0 - 3.0) + 0.0;

    assert!((a.det().unwrap() - want).abs() < 1e-12);
}

proptest! {
    #[test]
    fn test_det_2x2(a in -1000i64..1000, b in -1000i64..1000, c in -1000i64..1000, d in -1000i64..1000) {
        let m = Matrix::from([[a, b], [c, d]]);
        prop_assert_eq!(m.det(), Ok(a * d - b * c));
    }

    #[test]
    fn test_det_1x1(a in -1000i64..1000) {
        prop_assert_eq!(Matrix::from([[a]]).det(), Ok(a));
    }

    #[test]
    fn test_det_swap_rows_negates(v in prop::collection::vec(-20i64..20, 9)) {
        let m = Matrix::from_vec(3, 3, v.clone()).unwrap();
        let mut swapped = v;
        for j in 0..3 {
            swapped.swap(j, 3 + j);
        }
        let s = Matrix::from_vec(3, 3, swapped).unwrap();

        prop_assert_eq!(s.det().unwrap(), -m.det().unwrap());
    }

    #[test]
    fn test_det_transpose(v in prop::collection::vec(-20i64..20, 16)) {
        let m = Matrix::from_vec(4, 4, v).unwrap();
        prop_assert_eq!(m.transpose().det(), m.det());
    }
}

seq!(N in 1..=7 {
    #[test]
    fn test_det_identity_~N() {
        assert_eq!(Matrix::<f64>::identity(N).det(), Ok(1.0));
        assert_eq!(SquareMatrix::<i32>::identity(N).det(), 1);
    }
});

seq!(N in 8..=9 {
    #[test]
    #[cfg(feature = "slow_tests")]
    fn test_det_identity_~N() {
        assert_eq!(Matrix::<i64>::identity(N).det(), Ok(1));
    }
});
