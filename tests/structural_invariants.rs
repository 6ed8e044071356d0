//! Structural invariants of every creator, checked through the logical view.

use std::cell::Cell;

use matgen::testing::{
    init_tracing, is_banded, is_diagonal, is_hermitian, is_lower, is_strictly_lower,
    is_strictly_upper, is_symmetric, is_uni_lower, is_uni_upper, is_upper,
};
use matgen::{
    create, random, BandCreator, BandMatrix, ColumnMajor, CompressedMatrix, CompressedVector,
    ConstantCreator, DenseCreator, DiagonalCreator, DiagonalMatrix, DynamicMatrix, DynamicVector,
    FnCreator, Generator, HermitianCreator, HermitianMatrix, LowerCreator, LowerMatrix,
    MatrixView, RowMajor, SparseCreator, SparseVectorCreator, StorageOrder, StrictlyLowerCreator,
    StrictlyUpperCreator, SymmetricCreator, SymmetricMatrix, UniLowerCreator, UniUpperCreator,
    UniformCreator, UpperCreator, UpperMatrix, VectorCreator, DEFAULT_SIZE,
};
use num_complex::Complex;

fn counting(calls: &Cell<usize>) -> FnCreator<impl Fn() -> f64 + '_> {
    FnCreator::new(move || {
        calls.set(calls.get() + 1);
        1.0
    })
}

fn check_random_structures<SO: StorageOrder>() {
    for seed in 0..20u64 {
        random::set_seed(seed);
        let n = (seed % 7) as usize;
        let element = UniformCreator::<f64>::with_range(-1.0, 1.0).unwrap();

        assert!(is_upper(&UpperCreator::<_, SO>::with_size(n, element).generate()));
        assert!(is_lower(&LowerCreator::<_, SO>::with_size(n, element).generate()));
        assert!(is_uni_upper(&UniUpperCreator::<_, SO>::with_size(n, element).generate()));
        assert!(is_uni_lower(&UniLowerCreator::<_, SO>::with_size(n, element).generate()));
        assert!(is_strictly_upper(
            &StrictlyUpperCreator::<_, SO>::with_size(n, element).generate()
        ));
        assert!(is_strictly_lower(
            &StrictlyLowerCreator::<_, SO>::with_size(n, element).generate()
        ));
        assert!(is_diagonal(&DiagonalCreator::<_, SO>::with_size(n, element).generate()));
        assert!(is_symmetric(&SymmetricCreator::<_, SO>::with_size(n, element).generate()));

        let band = BandCreator::<_, SO>::with_dims(n + 1, n + 2, 1, 2, element).generate();
        assert!(is_banded(&band, 1, 2));

        let complex = UniformCreator::<Complex<f64>>::new();
        let hermitian = HermitianCreator::<_, SO>::with_size(n, complex).generate();
        assert!(is_hermitian(&hermitian));
    }
}

#[test]
fn test_random_structures_row_major() {
    init_tracing();
    check_random_structures::<RowMajor>();
}

#[test]
fn test_random_structures_column_major() {
    init_tracing();
    check_random_structures::<ColumnMajor>();
}

#[test]
fn test_upper_of_ones() {
    for upper in [
        UpperCreator::<_, RowMajor>::with_size(4, ConstantCreator(1.0))
            .generate()
            .to_row_major_vec(),
        UpperCreator::<_, ColumnMajor>::with_size(4, ConstantCreator(1.0))
            .generate()
            .to_row_major_vec(),
    ] {
        assert_eq!(upper.iter().filter(|&&v| v == 1.0).count(), 10);
        assert_eq!(upper.iter().filter(|&&v| v == 0.0).count(), 6);
    }
}

#[test]
fn test_default_size() {
    assert_eq!(DEFAULT_SIZE, 3);

    let dense: DynamicMatrix<f64> = create();
    assert_eq!((dense.rows(), dense.columns()), (3, 3));

    let upper: UpperMatrix<i32, ColumnMajor> = create();
    assert_eq!(upper.size(), 3);

    let lower: LowerMatrix<f32> = create();
    assert_eq!(lower.size(), 3);

    let diagonal: DiagonalMatrix<u8> = create();
    assert_eq!(diagonal.size(), 3);

    let band: BandMatrix<f64, ColumnMajor> = create();
    assert_eq!((band.rows(), band.columns()), (3, 3));
    assert_eq!((band.lower_bandwidth(), band.upper_bandwidth()), (1, 1));

    let symmetric: SymmetricMatrix<i64> = create();
    assert_eq!(symmetric.size(), 3);

    let hermitian: HermitianMatrix<Complex<f64>> = create();
    assert_eq!(hermitian.size(), 3);
    assert!(is_hermitian(&hermitian));

    let sparse: CompressedMatrix<f64, ColumnMajor> = create();
    assert_eq!((sparse.rows(), sparse.columns(), sparse.non_zeros()), (3, 3, 3));

    let vector: DynamicVector<u16> = create();
    assert_eq!(vector.size(), 3);

    let sparse_vector: CompressedVector<f64> = create();
    assert_eq!((sparse_vector.size(), sparse_vector.non_zeros()), (3, 3));
}

#[test]
fn test_empty_fixtures() {
    let one = ConstantCreator(1.0f64);

    assert_eq!(DenseCreator::<_, ColumnMajor>::with_size(0, one).generate().rows(), 0);
    assert_eq!(UpperCreator::<_, RowMajor>::with_size(0, one).generate().size(), 0);
    assert_eq!(UniLowerCreator::<_, ColumnMajor>::with_size(0, one).generate().size(), 0);
    assert_eq!(DiagonalCreator::<_, RowMajor>::with_size(0, one).generate().size(), 0);
    assert_eq!(BandCreator::<_, RowMajor>::with_size(0, 1, 1, one).generate().rows(), 0);
    assert_eq!(SymmetricCreator::<_, ColumnMajor>::with_size(0, one).generate().size(), 0);

    let complex = ConstantCreator(Complex::new(1.0f64, 0.0));
    assert_eq!(HermitianCreator::<_, RowMajor>::with_size(0, complex).generate().size(), 0);

    let sparse = SparseCreator::<_, ColumnMajor>::with_dims(0, 0, 0, one).generate();
    assert_eq!(sparse.non_zeros(), 0);
    assert_eq!(SparseVectorCreator::with_size(0, 0, one).generate().size(), 0);
    assert_eq!(VectorCreator::with_size(0, one).generate().size(), 0);
}

#[test]
fn test_single_cell_fixtures() {
    let seven = ConstantCreator(7i32);
    assert_eq!(UpperCreator::<_, RowMajor>::with_size(1, seven).generate()[(0, 0)], 7);
    assert_eq!(UniUpperCreator::<_, RowMajor>::with_size(1, seven).generate()[(0, 0)], 1);
    assert_eq!(StrictlyLowerCreator::<_, ColumnMajor>::with_size(1, seven).generate()[(0, 0)], 0);
    assert_eq!(DiagonalCreator::<_, ColumnMajor>::with_size(1, seven).generate()[(0, 0)], 7);
}

#[test]
fn test_draw_counts() {
    for n in 0..6usize {
        let full = n * n;
        let triangle = n * (n + 1) / 2;
        let strict = n * n.saturating_sub(1) / 2;

        let calls = Cell::new(0);
        DenseCreator::<_, RowMajor>::with_size(n, counting(&calls)).generate();
        assert_eq!(calls.get(), full, "dense n={n}");

        let calls = Cell::new(0);
        UpperCreator::<_, ColumnMajor>::with_size(n, counting(&calls)).generate();
        assert_eq!(calls.get(), triangle, "upper n={n}");

        let calls = Cell::new(0);
        UniLowerCreator::<_, RowMajor>::with_size(n, counting(&calls)).generate();
        assert_eq!(calls.get(), strict, "uni_lower n={n}");

        let calls = Cell::new(0);
        StrictlyUpperCreator::<_, ColumnMajor>::with_size(n, counting(&calls)).generate();
        assert_eq!(calls.get(), strict, "strictly_upper n={n}");

        let calls = Cell::new(0);
        DiagonalCreator::<_, RowMajor>::with_size(n, counting(&calls)).generate();
        assert_eq!(calls.get(), n, "diagonal n={n}");

        let calls = Cell::new(0);
        SymmetricCreator::<_, ColumnMajor>::with_size(n, counting(&calls)).generate();
        assert_eq!(calls.get(), triangle, "symmetric n={n}");

        let calls = Cell::new(0);
        SymmetricCreator::<_, RowMajor>::with_size(n, counting(&calls)).generate();
        assert_eq!(calls.get(), triangle, "symmetric n={n}");

        let calls = Cell::new(0);
        let tridiagonal =
            BandCreator::<_, RowMajor>::with_size(n, 1, 1, counting(&calls)).generate();
        assert_eq!(calls.get(), tridiagonal.as_inner().non_zeros(), "band n={n}");
    }
}

#[test]
fn test_hermitian_draw_count() {
    let calls = Cell::new(0);
    let element = FnCreator::new(|| {
        calls.set(calls.get() + 1);
        Complex::new(2.0f64, 3.0)
    });
    let hermitian = HermitianCreator::<_, ColumnMajor>::with_size(5, element).generate();
    assert_eq!(calls.get(), 15);
    assert_eq!(hermitian[(0, 0)], Complex::new(2.0, 0.0));
    assert_eq!(hermitian[(0, 4)], Complex::new(2.0, 3.0));
    assert_eq!(hermitian[(4, 0)], Complex::new(2.0, -3.0));
}
