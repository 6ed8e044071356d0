//! Sparse matrices and vectors.
//!
//! Positions are chosen uniformly without replacement, then values are drawn
//! in storage order, one per stored entry.

use crate::creator::{CreatorOf, Fixture, Generator, DEFAULT_SIZE};
use crate::random;
use matgen_core::{CompressedMatrix, CompressedVector, RowMajor, Scalar, StorageOrder};
use rand::seq::index;
use std::marker::PhantomData;

/// Creator for [`CompressedMatrix`].
#[derive(Debug, Clone)]
pub struct SparseCreator<E, SO = RowMajor> {
    rows: usize,
    columns: usize,
    non_zeros: usize,
    element: E,
    order: PhantomData<SO>,
}

impl<E, SO> SparseCreator<E, SO> {
    /// `DEFAULT_SIZE x DEFAULT_SIZE` with `DEFAULT_SIZE` entries.
    pub fn new(element: E) -> Self {
        Self::with_dims(DEFAULT_SIZE, DEFAULT_SIZE, DEFAULT_SIZE, element)
    }

    /// # Panics
    ///
    /// Panics if `non_zeros` exceeds `rows * columns`.
    pub fn with_dims(rows: usize, columns: usize, non_zeros: usize, element: E) -> Self {
        assert!(
            non_zeros <= rows * columns,
            "{non_zeros} non-zero elements do not fit a {rows}x{columns} matrix"
        );
        Self {
            rows,
            columns,
            non_zeros,
            element,
            order: PhantomData,
        }
    }

    pub fn non_zeros(&self) -> usize {
        self.non_zeros
    }
}

impl<E: Default, SO> Default for SparseCreator<E, SO> {
    fn default() -> Self {
        Self::new(E::default())
    }
}

impl<E, SO> Generator for SparseCreator<E, SO>
where
    E: Generator,
    E::Output: Scalar,
    SO: StorageOrder,
{
    type Output = CompressedMatrix<E::Output, SO>;

    fn generate(&self) -> Self::Output {
        let columns = self.columns;
        let mut positions: Vec<(usize, usize)> = random::with_rng(|rng| {
            index::sample(rng, self.rows * columns, self.non_zeros)
                .into_iter()
                .map(|linear| SO::major_minor(linear / columns, linear % columns))
                .collect()
        });
        positions.sort_unstable();

        let mut matrix = CompressedMatrix::with_capacity(self.rows, self.columns, self.non_zeros);
        for (major, minor) in positions {
            let (i, j) = SO::logical(major, minor);
            matrix.append(i, j, self.element.generate());
        }
        tracing::trace!(
            category = "sparse",
            order = SO::NAME,
            rows = self.rows,
            columns = self.columns,
            non_zeros = self.non_zeros,
            "Created fixture"
        );
        matrix
    }
}

impl<T, SO> Fixture for CompressedMatrix<T, SO>
where
    T: Scalar + Fixture,
    SO: StorageOrder,
{
    type Creator = SparseCreator<CreatorOf<T>, SO>;
}

/// Creator for [`CompressedVector`].
#[derive(Debug, Clone)]
pub struct SparseVectorCreator<E> {
    size: usize,
    non_zeros: usize,
    element: E,
}

impl<E> SparseVectorCreator<E> {
    pub fn new(element: E) -> Self {
        Self::with_size(DEFAULT_SIZE, DEFAULT_SIZE, element)
    }

    /// # Panics
    ///
    /// Panics if `non_zeros` exceeds `size`.
    pub fn with_size(size: usize, non_zeros: usize, element: E) -> Self {
        assert!(
            non_zeros <= size,
            "{non_zeros} non-zero elements do not fit a vector of size {size}"
        );
        Self {
            size,
            non_zeros,
            element,
        }
    }
}

impl<E: Default> Default for SparseVectorCreator<E> {
    fn default() -> Self {
        Self::new(E::default())
    }
}

impl<E> Generator for SparseVectorCreator<E>
where
    E: Generator,
    E::Output: Scalar,
{
    type Output = CompressedVector<E::Output>;

    fn generate(&self) -> Self::Output {
        let mut positions =
            random::with_rng(|rng| index::sample(rng, self.size, self.non_zeros).into_vec());
        positions.sort_unstable();

        let mut vector = CompressedVector::new(self.size);
        for i in positions {
            vector.set(i, self.element.generate());
        }
        tracing::trace!(
            category = "sparse_vector",
            size = self.size,
            non_zeros = self.non_zeros,
            "Created fixture"
        );
        vector
    }
}

impl<T> Fixture for CompressedVector<T>
where
    T: Scalar + Fixture,
{
    type Creator = SparseVectorCreator<CreatorOf<T>>;
}
