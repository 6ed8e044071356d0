//! General dense matrices.

use crate::creator::{CreatorOf, Fixture, Generator, DEFAULT_SIZE};
use matgen_core::shape::Full;
use matgen_core::{DynamicMatrix, RowMajor, Scalar, StorageOrder};
use std::marker::PhantomData;

/// Creator for [`DynamicMatrix`]: every cell is drawn from the element creator.
#[derive(Debug, Clone)]
pub struct DenseCreator<E, SO = RowMajor> {
    rows: usize,
    columns: usize,
    element: E,
    order: PhantomData<SO>,
}

impl<E, SO> DenseCreator<E, SO> {
    /// Creator for `DEFAULT_SIZE x DEFAULT_SIZE` matrices.
    pub fn new(element: E) -> Self {
        Self::with_dims(DEFAULT_SIZE, DEFAULT_SIZE, element)
    }

    /// Creator for `n x n` matrices.
    pub fn with_size(n: usize, element: E) -> Self {
        Self::with_dims(n, n, element)
    }

    /// Creator for `rows x columns` matrices.
    pub fn with_dims(rows: usize, columns: usize, element: E) -> Self {
        Self {
            rows,
            columns,
            element,
            order: PhantomData,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }
}

impl<E: Default, SO> Default for DenseCreator<E, SO> {
    fn default() -> Self {
        Self::new(E::default())
    }
}

impl<E, SO> Generator for DenseCreator<E, SO>
where
    E: Generator,
    E::Output: Scalar,
    SO: StorageOrder,
{
    type Output = DynamicMatrix<E::Output, SO>;

    fn generate(&self) -> Self::Output {
        let mut matrix = DynamicMatrix::new(self.rows, self.columns);
        SO::traverse(&Full, self.rows, self.columns, |i, j| {
            matrix[(i, j)] = self.element.generate();
        });
        tracing::trace!(
            category = "general",
            order = SO::NAME,
            rows = self.rows,
            columns = self.columns,
            "Created fixture"
        );
        matrix
    }
}

impl<T, SO> Fixture for DynamicMatrix<T, SO>
where
    T: Scalar + Fixture,
    SO: StorageOrder,
{
    type Creator = DenseCreator<CreatorOf<T>, SO>;
}
