use linal::{errors::ShapeError, matrix::Matrix};
use proptest::prelude::*;
use seq_macro::seq;

extern crate linal;

fn int_matrix(rows: usize, columns: usize) -> impl Strategy<Value = Matrix<i64>> {
    prop::collection::vec(-100i64..100, rows * columns)
        .prop_map(move |v| Matrix::from_vec(rows, columns, v).unwrap())
}

fn float_matrix(rows: usize, columns: usize) -> impl Strategy<Value = Matrix<f64>> {
    prop::collection::vec(-10.0..10.0, rows * columns)
        .prop_map(move |v| Matrix::from_vec(rows, columns, v).unwrap())
}

fn assert_eq_within_tolerance(a: &Matrix<f64>, b: &Matrix<f64>) {
    const TOLERANCE: f64 = 0.00001;
    assert_eq!(a.shape(), b.shape());
    for (x, y) in a.iter().zip(b.iter()) {
        assert!((x - y).abs() < TOLERANCE * (1.0 + x.abs()), "{} != {}", x, y);
    }
}

#[test]
fn test_matmul_example() {
    let a = Matrix::from([[1, 2], [3, 4]]);
    let b = Matrix::from([[5, 6], [7, 8]]);

    assert_eq!(&a + &b, Matrix::from([[6, 8], [10, 12]]));
    assert_eq!(&a * &b, Matrix::from([[19, 22], [43, 50]]));
    assert_eq!(a.det(), Ok(-2));
}

#[test]
fn test_shape_mismatch() {
    let a: Matrix<f64> = Matrix::zeros(2, 3);
    let b: Matrix<f64> = Matrix::zeros(3, 2);
    let c: Matrix<f64> = Matrix::zeros(4, 2);

    assert!(matches!(a.try_add(&b), Err(ShapeError::Mismatch { .. })));
    assert!(matches!(
        a.matmul(&c),
        Err(ShapeError::IncompatibleProduct { .. })
    ));
}

#[test]
fn test_out_of_range_access() {
    let a: Matrix<i32> = Matrix::zeros(3, 2);

    assert!(a.at(3, 0).is_err());
    assert!(a.at(0, 2).is_err());
    assert!(a.at(2, 1).is_ok());
}

seq!(N in 1..=6 {
    proptest! {
        #[test]
        fn test_identity_~N(x in int_matrix(N, N)) {
            let i = Matrix::<i64>::identity(N);

            prop_assert_eq!(&i * &x, x.clone());
            prop_assert_eq!(&x * &i, x);
        }

        #[test]
        fn test_add_laws_~N(a in int_matrix(N, N + 1),
                            b in int_matrix(N, N + 1),
                            c in int_matrix(N, N + 1)) {
            prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
            prop_assert_eq!(&a + &b, &b + &a);
            prop_assert_eq!(&(&a + &b) - &b, a);
        }

        #[test]
        fn test_double_transpose_~N(a in int_matrix(N, 7 - N)) {
            prop_assert_eq!(a.transpose().transpose(), a);
        }
    }
});

seq!(N in 1..=3 {
    proptest! {
        #[test]
        fn test_matmul_associative_~N(a in int_matrix(N, N + 1),
                                      b in int_matrix(N + 1, 2),
                                      c in int_matrix(2, N)) {
            prop_assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
        }

        #[test]
        fn test_matmul_associative_float_~N(a in float_matrix(N, N + 1),
                                            b in float_matrix(N + 1, 2),
                                            c in float_matrix(2, N)) {
            assert_eq_within_tolerance(&(&(&a * &b) * &c), &(&a * &(&b * &c)));
        }

        #[test]
        fn test_matmul_distributive_~N(a in int_matrix(N, N + 1),
                                       b in int_matrix(N + 1, 2),
                                       c in int_matrix(N + 1, 2)) {
            prop_assert_eq!(&a * &(b.clone() + &c), (&a * &b) + &(&a * &c));
        }

        #[test]
        fn test_det_of_product_~N(a in int_matrix(N, N), b in int_matrix(N, N)) {
            prop_assert_eq!((&a * &b).det().unwrap(), a.det().unwrap() * b.det().unwrap());
        }
    }
});

seq!(M in 1..=5 {
    seq!(N in 1..=5 {
        seq!(P in 1..=5 {
            proptest! {
                #[test]
                #[cfg(feature = "slow_tests")]
                #[allow(clippy::identity_op)]
                fn test_matmul_~M~N~P(a in float_matrix(M, N), b in float_matrix(N, P)) {
                    let c = &a * &b;

                    for i in 0..M {
                        for j in 0..P {
                            let mut want = 0.0;
                            for k in 0..N {
                                want += a[&[i, k]] * b[&[k, j]];
                            }
                            const TOLERANCE: f64 = 0.00001;
                            assert!((want - c[&[i, j]]).abs() < TOLERANCE);
                        }
                    }
                }

                #[test]
                #[cfg(feature = "slow_tests")]
                #[allow(clippy::identity_op)]
                fn test_matmul_transpose_~M~N~P(a in float_matrix(M, N), b in float_matrix(N, P)) {
                    assert_eq_within_tolerance(
                        &(&a * &b),
                        &(&b.transpose() * &a.transpose()).transpose(),
                    );
                }
            }
        });
    });
});
