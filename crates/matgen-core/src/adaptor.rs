//! Structured adaptors around [`DynamicMatrix`].
//!
//! An adaptor owns a dense matrix and guards its element access so that the
//! structural invariant of its category can never be broken through it:
//!
//! - [`StructuredMatrix`] covers the triangular family and diagonal matrices,
//!   where a fixed set of cells holds a fixed value (zero, or one on a unit
//!   diagonal).
//! - [`BandMatrix`] fixes every cell outside a diagonal band to zero.
//! - [`SymmetricMatrix`] and [`HermitianMatrix`] mirror every write into the
//!   transposed cell.
//!
//! Writes come in two flavours: `try_set` reports a rejected write as a
//! [`StructureError`], `set` treats it as a caller bug and panics.

use crate::dense::DynamicMatrix;
use crate::error::StructureError;
use crate::order::{RowMajor, StorageOrder};
use crate::scalar::Scalar;
use crate::shape::{
    Band, LowerTriangle, MainDiagonal, Shape, StrictlyLowerTriangle, StrictlyUpperTriangle,
    UpperTriangle,
};
use crate::view::MatrixView;
use std::fmt::Debug;
use std::marker::PhantomData;
use std::ops::Index;

/// Square structural category with a fixed value for every non-free cell.
pub trait Structure: Copy + Default + Debug + Send + Sync + 'static {
    /// Free cells of the category.
    type Shape: Shape + Default;

    /// Whether the diagonal is fixed to one.
    const UNIT_DIAGONAL: bool;

    /// Human readable name, used in log output.
    const NAME: &'static str;

    /// Value a non-free cell must hold.
    fn fixed_value<T: Scalar>(i: usize, j: usize) -> T {
        if Self::UNIT_DIAGONAL && i == j {
            T::one()
        } else {
            T::zero()
        }
    }
}

macro_rules! structure {
    ($(#[$doc:meta])* $kind:ident, $shape:ty, $unit:expr, $name:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $kind;

        impl Structure for $kind {
            type Shape = $shape;
            const UNIT_DIAGONAL: bool = $unit;
            const NAME: &'static str = $name;
        }
    };
}

structure!(
    /// Zero below the diagonal.
    Upper, UpperTriangle, false, "upper"
);
structure!(
    /// Zero below the diagonal, one on it.
    UniUpper, StrictlyUpperTriangle, true, "uni_upper"
);
structure!(
    /// Zero on and below the diagonal.
    StrictlyUpper, StrictlyUpperTriangle, false, "strictly_upper"
);
structure!(
    /// Zero above the diagonal.
    Lower, LowerTriangle, false, "lower"
);
structure!(
    /// Zero above the diagonal, one on it.
    UniLower, StrictlyLowerTriangle, true, "uni_lower"
);
structure!(
    /// Zero on and above the diagonal.
    StrictlyLower, StrictlyLowerTriangle, false, "strictly_lower"
);
structure!(
    /// Zero off the diagonal.
    Diagonal, MainDiagonal, false, "diagonal"
);

/// Square matrix whose non-free cells are fixed by `K`.
#[derive(Debug, Clone, PartialEq)]
pub struct StructuredMatrix<T, K, SO = RowMajor> {
    inner: DynamicMatrix<T, SO>,
    kind: PhantomData<K>,
}

pub type UpperMatrix<T, SO = RowMajor> = StructuredMatrix<T, Upper, SO>;
pub type UniUpperMatrix<T, SO = RowMajor> = StructuredMatrix<T, UniUpper, SO>;
pub type StrictlyUpperMatrix<T, SO = RowMajor> = StructuredMatrix<T, StrictlyUpper, SO>;
pub type LowerMatrix<T, SO = RowMajor> = StructuredMatrix<T, Lower, SO>;
pub type UniLowerMatrix<T, SO = RowMajor> = StructuredMatrix<T, UniLower, SO>;
pub type StrictlyLowerMatrix<T, SO = RowMajor> = StructuredMatrix<T, StrictlyLower, SO>;
pub type DiagonalMatrix<T, SO = RowMajor> = StructuredMatrix<T, Diagonal, SO>;

fn check_square<T: Scalar, SO: StorageOrder>(
    matrix: &DynamicMatrix<T, SO>,
) -> Result<(), StructureError> {
    if matrix.is_square() {
        Ok(())
    } else {
        Err(StructureError::NotSquare {
            rows: matrix.rows(),
            columns: matrix.columns(),
        })
    }
}

impl<T: Scalar, K: Structure, SO: StorageOrder> StructuredMatrix<T, K, SO> {
    /// Create an `n x n` matrix holding only the fixed values.
    pub fn new(n: usize) -> Self {
        let mut inner = DynamicMatrix::new(n, n);
        if K::UNIT_DIAGONAL {
            for i in 0..n {
                inner[(i, i)] = T::one();
            }
        }
        Self {
            inner,
            kind: PhantomData,
        }
    }

    /// Adopt an existing matrix, verifying it satisfies the structure.
    pub fn from_inner(inner: DynamicMatrix<T, SO>) -> Result<Self, StructureError> {
        Self::check(&inner)?;
        Ok(Self {
            inner,
            kind: PhantomData,
        })
    }

    /// Verify every non-free cell of `matrix` holds its fixed value.
    pub fn check(matrix: &DynamicMatrix<T, SO>) -> Result<(), StructureError> {
        check_square(matrix)?;
        let shape = K::Shape::default();
        for (i, j, value) in matrix.iter() {
            if !shape.contains(i, j) && *value != K::fixed_value::<T>(i, j) {
                return Err(StructureError::FixedCell { row: i, column: j });
            }
        }
        Ok(())
    }

    /// Write `value` to `(i, j)`.
    ///
    /// Writing a non-free cell succeeds only if `value` equals the fixed value.
    pub fn try_set(&mut self, i: usize, j: usize, value: T) -> Result<(), StructureError> {
        if K::Shape::default().contains(i, j) {
            self.inner[(i, j)] = value;
            Ok(())
        } else if value == K::fixed_value::<T>(i, j) {
            Ok(())
        } else {
            Err(StructureError::FixedCell { row: i, column: j })
        }
    }

    /// Write `value` to `(i, j)`.
    ///
    /// # Panics
    ///
    /// Panics if the write would break the structure.
    pub fn set(&mut self, i: usize, j: usize, value: T) {
        if let Err(err) = self.try_set(i, j, value) {
            panic!("{err}");
        }
    }

    pub fn size(&self) -> usize {
        self.inner.rows()
    }

    pub fn as_inner(&self) -> &DynamicMatrix<T, SO> {
        &self.inner
    }

    pub fn into_inner(self) -> DynamicMatrix<T, SO> {
        self.inner
    }
}

impl<T: Scalar, K: Structure, SO: StorageOrder> Index<(usize, usize)>
    for StructuredMatrix<T, K, SO>
{
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &T {
        &self.inner[index]
    }
}

impl<T: Scalar, K: Structure, SO: StorageOrder> MatrixView for StructuredMatrix<T, K, SO> {
    type Element = T;

    fn rows(&self) -> usize {
        self.inner.rows()
    }

    fn columns(&self) -> usize {
        self.inner.columns()
    }

    fn element(&self, i: usize, j: usize) -> T {
        self.inner[(i, j)]
    }
}

/// Matrix with zeros outside `lower` sub-diagonals and `upper` super-diagonals.
#[derive(Debug, Clone, PartialEq)]
pub struct BandMatrix<T, SO = RowMajor> {
    inner: DynamicMatrix<T, SO>,
    band: Band,
}

impl<T: Scalar, SO: StorageOrder> BandMatrix<T, SO> {
    pub fn new(rows: usize, columns: usize, lower: usize, upper: usize) -> Self {
        Self {
            inner: DynamicMatrix::new(rows, columns),
            band: Band::new(lower, upper),
        }
    }

    pub fn from_inner(
        inner: DynamicMatrix<T, SO>,
        lower: usize,
        upper: usize,
    ) -> Result<Self, StructureError> {
        let band = Band::new(lower, upper);
        for (i, j, value) in inner.iter() {
            if !band.contains(i, j) && !value.is_zero() {
                return Err(StructureError::FixedCell { row: i, column: j });
            }
        }
        Ok(Self { inner, band })
    }

    pub fn try_set(&mut self, i: usize, j: usize, value: T) -> Result<(), StructureError> {
        if self.band.contains(i, j) {
            self.inner[(i, j)] = value;
            Ok(())
        } else if value.is_zero() {
            Ok(())
        } else {
            Err(StructureError::FixedCell { row: i, column: j })
        }
    }

    /// # Panics
    ///
    /// Panics when writing a non-zero value outside the band.
    pub fn set(&mut self, i: usize, j: usize, value: T) {
        if let Err(err) = self.try_set(i, j, value) {
            panic!("{err}");
        }
    }

    pub fn band(&self) -> Band {
        self.band
    }

    pub fn lower_bandwidth(&self) -> usize {
        self.band.lower
    }

    pub fn upper_bandwidth(&self) -> usize {
        self.band.upper
    }

    pub fn as_inner(&self) -> &DynamicMatrix<T, SO> {
        &self.inner
    }

    pub fn into_inner(self) -> DynamicMatrix<T, SO> {
        self.inner
    }
}

impl<T: Scalar, SO: StorageOrder> Index<(usize, usize)> for BandMatrix<T, SO> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &T {
        &self.inner[index]
    }
}

impl<T: Scalar, SO: StorageOrder> MatrixView for BandMatrix<T, SO> {
    type Element = T;

    fn rows(&self) -> usize {
        self.inner.rows()
    }

    fn columns(&self) -> usize {
        self.inner.columns()
    }

    fn element(&self, i: usize, j: usize) -> T {
        self.inner[(i, j)]
    }
}

/// Square matrix with `A(i, j) == A(j, i)`.
#[derive(Debug, Clone, PartialEq)]
pub struct SymmetricMatrix<T, SO = RowMajor> {
    inner: DynamicMatrix<T, SO>,
}

impl<T: Scalar, SO: StorageOrder> SymmetricMatrix<T, SO> {
    pub fn new(n: usize) -> Self {
        Self {
            inner: DynamicMatrix::new(n, n),
        }
    }

    pub fn from_inner(inner: DynamicMatrix<T, SO>) -> Result<Self, StructureError> {
        check_square(&inner)?;
        for (i, j, value) in inner.iter() {
            if i < j && *value != inner[(j, i)] {
                return Err(StructureError::Asymmetric { row: i, column: j });
            }
        }
        Ok(Self { inner })
    }

    /// Write `value` to `(i, j)` and `(j, i)`.
    ///
    /// Every cell is free, so this never fails.
    pub fn try_set(&mut self, i: usize, j: usize, value: T) -> Result<(), StructureError> {
        self.inner[(i, j)] = value;
        self.inner[(j, i)] = value;
        Ok(())
    }

    /// Write `value` to `(i, j)` and `(j, i)`.
    pub fn set(&mut self, i: usize, j: usize, value: T) {
        self.inner[(i, j)] = value;
        self.inner[(j, i)] = value;
    }

    pub fn size(&self) -> usize {
        self.inner.rows()
    }

    pub fn as_inner(&self) -> &DynamicMatrix<T, SO> {
        &self.inner
    }

    pub fn into_inner(self) -> DynamicMatrix<T, SO> {
        self.inner
    }
}

impl<T: Scalar, SO: StorageOrder> Index<(usize, usize)> for SymmetricMatrix<T, SO> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &T {
        &self.inner[index]
    }
}

impl<T: Scalar, SO: StorageOrder> MatrixView for SymmetricMatrix<T, SO> {
    type Element = T;

    fn rows(&self) -> usize {
        self.inner.rows()
    }

    fn columns(&self) -> usize {
        self.inner.columns()
    }

    fn element(&self, i: usize, j: usize) -> T {
        self.inner[(i, j)]
    }
}

/// Square matrix with `A(i, j) == conj(A(j, i))` and a real diagonal.
#[derive(Debug, Clone, PartialEq)]
pub struct HermitianMatrix<T, SO = RowMajor> {
    inner: DynamicMatrix<T, SO>,
}

impl<T: Scalar, SO: StorageOrder> HermitianMatrix<T, SO> {
    pub fn new(n: usize) -> Self {
        Self {
            inner: DynamicMatrix::new(n, n),
        }
    }

    pub fn from_inner(inner: DynamicMatrix<T, SO>) -> Result<Self, StructureError> {
        check_square(&inner)?;
        for (i, j, value) in inner.iter() {
            if i == j && !value.is_real() {
                return Err(StructureError::NonRealDiagonal { index: i });
            }
            if i < j && *value != inner[(j, i)].conj() {
                return Err(StructureError::Asymmetric { row: i, column: j });
            }
        }
        Ok(Self { inner })
    }

    /// Write `value` to `(i, j)` and its conjugate to `(j, i)`.
    pub fn try_set(&mut self, i: usize, j: usize, value: T) -> Result<(), StructureError> {
        if i == j {
            if !value.is_real() {
                return Err(StructureError::NonRealDiagonal { index: i });
            }
            self.inner[(i, i)] = value;
        } else {
            self.inner[(i, j)] = value;
            self.inner[(j, i)] = value.conj();
        }
        Ok(())
    }

    /// # Panics
    ///
    /// Panics when writing a non-real value to the diagonal.
    pub fn set(&mut self, i: usize, j: usize, value: T) {
        if let Err(err) = self.try_set(i, j, value) {
            panic!("{err}");
        }
    }

    pub fn size(&self) -> usize {
        self.inner.rows()
    }

    pub fn as_inner(&self) -> &DynamicMatrix<T, SO> {
        &self.inner
    }

    pub fn into_inner(self) -> DynamicMatrix<T, SO> {
        self.inner
    }
}

impl<T: Scalar, SO: StorageOrder> Index<(usize, usize)> for HermitianMatrix<T, SO> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &T {
        &self.inner[index]
    }
}

impl<T: Scalar, SO: StorageOrder> MatrixView for HermitianMatrix<T, SO> {
    type Element = T;

    fn rows(&self) -> usize {
        self.inner.rows()
    }

    fn columns(&self) -> usize {
        self.inner.columns()
    }

    fn element(&self, i: usize, j: usize) -> T {
        self.inner[(i, j)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::ColumnMajor;
    use num_complex::Complex;

    #[test]
    fn test_upper_rejects_lower_writes() {
        let mut m = UpperMatrix::<i32, ColumnMajor>::new(3);
        m.set(0, 2, 7);
        assert_eq!(m[(0, 2)], 7);
        assert_eq!(
            m.try_set(2, 0, 1),
            Err(StructureError::FixedCell { row: 2, column: 0 })
        );
        // Zero is the fixed value below the diagonal, so writing it is allowed.
        assert!(m.try_set(2, 0, 0).is_ok());
        assert_eq!(m[(2, 0)], 0);
    }

    #[test]
    #[should_panic(expected = "restricted element")]
    fn test_set_panics_on_fixed_cell() {
        let mut m = LowerMatrix::<f64>::new(2);
        m.set(0, 1, 1.0);
    }

    #[test]
    fn test_uni_upper_diagonal_is_one() {
        let mut m = UniUpperMatrix::<f64>::new(3);
        for i in 0..3 {
            assert_eq!(m[(i, i)], 1.0);
        }
        assert!(m.try_set(1, 1, 2.0).is_err());
        assert!(m.try_set(1, 1, 1.0).is_ok());
        assert!(m.try_set(0, 1, 2.0).is_ok());
    }

    #[test]
    fn test_strictly_lower() {
        let mut m = StrictlyLowerMatrix::<i64>::new(3);
        assert!(m.try_set(1, 1, 4).is_err());
        assert!(m.try_set(0, 2, 4).is_err());
        m.set(2, 0, 4);
        assert_eq!(m.as_inner().non_zeros(), 1);
    }

    #[test]
    fn test_diagonal_from_inner() {
        let mut dense = DynamicMatrix::<i32>::new(2, 2);
        dense[(0, 0)] = 3;
        assert!(DiagonalMatrix::from_inner(dense.clone()).is_ok());
        dense[(1, 0)] = 1;
        assert_eq!(
            DiagonalMatrix::from_inner(dense),
            Err(StructureError::FixedCell { row: 1, column: 0 })
        );
        assert_eq!(
            DiagonalMatrix::from_inner(DynamicMatrix::<i32>::new(2, 3)),
            Err(StructureError::NotSquare { rows: 2, columns: 3 })
        );
    }

    #[test]
    fn test_band_matrix() {
        let mut m = BandMatrix::<f64, ColumnMajor>::new(4, 4, 1, 0);
        m.set(1, 0, 2.0);
        m.set(3, 3, 1.0);
        assert!(m.try_set(0, 1, 1.0).is_err());
        assert!(m.try_set(3, 1, 1.0).is_err());
        assert_eq!(m.lower_bandwidth(), 1);
        assert_eq!(m.upper_bandwidth(), 0);
    }

    #[test]
    fn test_symmetric_try_set_always_succeeds() {
        let mut m = SymmetricMatrix::<f64, RowMajor>::new(4);
        assert_eq!(m.try_set(3, 1, -2.5), Ok(()));
        assert_eq!(m.try_set(2, 2, 7.0), Ok(()));
        assert_eq!(m[(1, 3)], -2.5);
        assert_eq!(m[(3, 1)], -2.5);
        assert_eq!(m[(2, 2)], 7.0);
    }

    #[test]
    fn test_symmetric_mirrors_writes() {
        let mut m = SymmetricMatrix::<i32, ColumnMajor>::new(3);
        m.set(0, 2, 5);
        assert_eq!(m[(2, 0)], 5);
        assert!(SymmetricMatrix::from_inner(m.clone().into_inner()).is_ok());

        let mut dense = m.into_inner();
        dense[(1, 0)] = 9;
        assert_eq!(
            SymmetricMatrix::from_inner(dense),
            Err(StructureError::Asymmetric { row: 0, column: 1 })
        );
    }

    #[test]
    fn test_hermitian_mirrors_conjugate() {
        let mut m = HermitianMatrix::<Complex<f64>>::new(2);
        m.set(0, 1, Complex::new(1.0, 2.0));
        assert_eq!(m[(1, 0)], Complex::new(1.0, -2.0));
        assert_eq!(
            m.try_set(1, 1, Complex::new(0.0, 1.0)),
            Err(StructureError::NonRealDiagonal { index: 1 })
        );
        m.set(1, 1, Complex::new(3.0, 0.0));
        assert!(HermitianMatrix::from_inner(m.into_inner()).is_ok());
    }
}
