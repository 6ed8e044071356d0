//! Read-only logical views shared by all containers.
//!
//! Dense, structured and sparse containers differ in how they store their
//! elements, but all of them can answer "what is the value at (i, j)". Code
//! that inspects fixtures (invariant checks, snapshots) works against these
//! traits only.

use crate::scalar::Scalar;

/// Logical read access to a matrix.
pub trait MatrixView {
    type Element: Scalar;

    fn rows(&self) -> usize;

    fn columns(&self) -> usize;

    /// Value at `(i, j)`. Panics if the index is out of bounds.
    fn element(&self, i: usize, j: usize) -> Self::Element;

    /// Dense copy of all cells in logical row-major order.
    fn to_row_major_vec(&self) -> Vec<Self::Element> {
        let mut cells = Vec::with_capacity(self.rows() * self.columns());
        for i in 0..self.rows() {
            for j in 0..self.columns() {
                cells.push(self.element(i, j));
            }
        }
        cells
    }
}

/// Logical read access to a vector.
pub trait VectorView {
    type Element: Scalar;

    fn size(&self) -> usize;

    /// Value at `i`. Panics if the index is out of bounds.
    fn element(&self, i: usize) -> Self::Element;

    fn to_vec(&self) -> Vec<Self::Element> {
        (0..self.size()).map(|i| self.element(i)).collect()
    }
}
