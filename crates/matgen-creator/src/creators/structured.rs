//! Creators for structured square and banded matrices.
//!
//! Each creator writes only through the adaptor's element access, and only
//! to cells its category leaves free, so the produced matrix satisfies the
//! structural invariant by construction:
//!
//! - column-major: for each column `j`, the free rows of `j` top to bottom
//! - row-major: for each row `i`, the free columns of `i` left to right
//!
//! Symmetric and Hermitian creators draw the upper triangle only; the lower
//! triangle is the mirrored (conjugated) write, not a second draw.

use crate::creator::{CreatorOf, Fixture, Generator, DEFAULT_SIZE};
use matgen_core::adaptor::{
    Diagonal, Lower, StrictlyLower, StrictlyUpper, UniLower, UniUpper, Upper,
};
use matgen_core::shape::UpperTriangle;
use matgen_core::{
    BandMatrix, HermitianMatrix, RowMajor, Scalar, StorageOrder, Structure, StructuredMatrix,
    SymmetricMatrix,
};
use std::marker::PhantomData;

/// Creator for the triangular family and diagonal matrices.
#[derive(Debug, Clone)]
pub struct StructuredCreator<E, K, SO = RowMajor> {
    n: usize,
    element: E,
    kind: PhantomData<(K, SO)>,
}

pub type UpperCreator<E, SO = RowMajor> = StructuredCreator<E, Upper, SO>;
pub type UniUpperCreator<E, SO = RowMajor> = StructuredCreator<E, UniUpper, SO>;
pub type StrictlyUpperCreator<E, SO = RowMajor> = StructuredCreator<E, StrictlyUpper, SO>;
pub type LowerCreator<E, SO = RowMajor> = StructuredCreator<E, Lower, SO>;
pub type UniLowerCreator<E, SO = RowMajor> = StructuredCreator<E, UniLower, SO>;
pub type StrictlyLowerCreator<E, SO = RowMajor> = StructuredCreator<E, StrictlyLower, SO>;
pub type DiagonalCreator<E, SO = RowMajor> = StructuredCreator<E, Diagonal, SO>;

impl<E, K, SO> StructuredCreator<E, K, SO> {
    pub fn new(element: E) -> Self {
        Self::with_size(DEFAULT_SIZE, element)
    }

    pub fn with_size(n: usize, element: E) -> Self {
        Self {
            n,
            element,
            kind: PhantomData,
        }
    }

    pub fn size(&self) -> usize {
        self.n
    }
}

impl<E: Default, K, SO> Default for StructuredCreator<E, K, SO> {
    fn default() -> Self {
        Self::new(E::default())
    }
}

impl<E, K, SO> Generator for StructuredCreator<E, K, SO>
where
    E: Generator,
    E::Output: Scalar,
    K: Structure,
    SO: StorageOrder,
{
    type Output = StructuredMatrix<E::Output, K, SO>;

    fn generate(&self) -> Self::Output {
        let mut matrix = StructuredMatrix::new(self.n);
        SO::traverse(&K::Shape::default(), self.n, self.n, |i, j| {
            matrix.set(i, j, self.element.generate());
        });
        tracing::trace!(category = K::NAME, order = SO::NAME, size = self.n, "Created fixture");
        matrix
    }
}

impl<T, K, SO> Fixture for StructuredMatrix<T, K, SO>
where
    T: Scalar + Fixture,
    K: Structure,
    SO: StorageOrder,
{
    type Creator = StructuredCreator<CreatorOf<T>, K, SO>;
}

/// Creator for [`BandMatrix`].
///
/// Defaults to a `DEFAULT_SIZE` square tridiagonal matrix.
#[derive(Debug, Clone)]
pub struct BandCreator<E, SO = RowMajor> {
    rows: usize,
    columns: usize,
    lower: usize,
    upper: usize,
    element: E,
    order: PhantomData<SO>,
}

impl<E, SO> BandCreator<E, SO> {
    pub fn new(element: E) -> Self {
        Self::with_size(DEFAULT_SIZE, 1, 1, element)
    }

    /// Square `n x n` band matrix.
    pub fn with_size(n: usize, lower: usize, upper: usize, element: E) -> Self {
        Self::with_dims(n, n, lower, upper, element)
    }

    pub fn with_dims(rows: usize, columns: usize, lower: usize, upper: usize, element: E) -> Self {
        Self {
            rows,
            columns,
            lower,
            upper,
            element,
            order: PhantomData,
        }
    }
}

impl<E: Default, SO> Default for BandCreator<E, SO> {
    fn default() -> Self {
        Self::new(E::default())
    }
}

impl<E, SO> Generator for BandCreator<E, SO>
where
    E: Generator,
    E::Output: Scalar,
    SO: StorageOrder,
{
    type Output = BandMatrix<E::Output, SO>;

    fn generate(&self) -> Self::Output {
        let mut matrix = BandMatrix::new(self.rows, self.columns, self.lower, self.upper);
        let band = matrix.band();
        SO::traverse(&band, self.rows, self.columns, |i, j| {
            matrix.set(i, j, self.element.generate());
        });
        tracing::trace!(
            category = "band",
            order = SO::NAME,
            rows = self.rows,
            columns = self.columns,
            lower = self.lower,
            upper = self.upper,
            "Created fixture"
        );
        matrix
    }
}

impl<T, SO> Fixture for BandMatrix<T, SO>
where
    T: Scalar + Fixture,
    SO: StorageOrder,
{
    type Creator = BandCreator<CreatorOf<T>, SO>;
}

/// Creator for [`SymmetricMatrix`]: draws `n(n+1)/2` elements.
#[derive(Debug, Clone)]
pub struct SymmetricCreator<E, SO = RowMajor> {
    n: usize,
    element: E,
    order: PhantomData<SO>,
}

impl<E, SO> SymmetricCreator<E, SO> {
    pub fn new(element: E) -> Self {
        Self::with_size(DEFAULT_SIZE, element)
    }

    pub fn with_size(n: usize, element: E) -> Self {
        Self {
            n,
            element,
            order: PhantomData,
        }
    }

    pub fn size(&self) -> usize {
        self.n
    }
}

impl<E: Default, SO> Default for SymmetricCreator<E, SO> {
    fn default() -> Self {
        Self::new(E::default())
    }
}

impl<E, SO> Generator for SymmetricCreator<E, SO>
where
    E: Generator,
    E::Output: Scalar,
    SO: StorageOrder,
{
    type Output = SymmetricMatrix<E::Output, SO>;

    fn generate(&self) -> Self::Output {
        let mut matrix = SymmetricMatrix::new(self.n);
        SO::traverse(&UpperTriangle, self.n, self.n, |i, j| {
            matrix.set(i, j, self.element.generate());
        });
        tracing::trace!(category = "symmetric", order = SO::NAME, size = self.n, "Created fixture");
        matrix
    }
}

impl<T, SO> Fixture for SymmetricMatrix<T, SO>
where
    T: Scalar + Fixture,
    SO: StorageOrder,
{
    type Creator = SymmetricCreator<CreatorOf<T>, SO>;
}

/// Creator for [`HermitianMatrix`].
///
/// Draws `n(n+1)/2` elements; diagonal draws are projected onto the real axis.
#[derive(Debug, Clone)]
pub struct HermitianCreator<E, SO = RowMajor> {
    n: usize,
    element: E,
    order: PhantomData<SO>,
}

impl<E, SO> HermitianCreator<E, SO> {
    pub fn new(element: E) -> Self {
        Self::with_size(DEFAULT_SIZE, element)
    }

    pub fn with_size(n: usize, element: E) -> Self {
        Self {
            n,
            element,
            order: PhantomData,
        }
    }

    pub fn size(&self) -> usize {
        self.n
    }
}

impl<E: Default, SO> Default for HermitianCreator<E, SO> {
    fn default() -> Self {
        Self::new(E::default())
    }
}

impl<E, SO> Generator for HermitianCreator<E, SO>
where
    E: Generator,
    E::Output: Scalar,
    SO: StorageOrder,
{
    type Output = HermitianMatrix<E::Output, SO>;

    fn generate(&self) -> Self::Output {
        let mut matrix = HermitianMatrix::new(self.n);
        SO::traverse(&UpperTriangle, self.n, self.n, |i, j| {
            let value = self.element.generate();
            let value = if i == j { value.real_part() } else { value };
            matrix.set(i, j, value);
        });
        tracing::trace!(category = "hermitian", order = SO::NAME, size = self.n, "Created fixture");
        matrix
    }
}

impl<T, SO> Fixture for HermitianMatrix<T, SO>
where
    T: Scalar + Fixture,
    SO: StorageOrder,
{
    type Creator = HermitianCreator<CreatorOf<T>, SO>;
}
