//! Error types for structured container access.

/// Error type for writes and conversions that would break a structural invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StructureError {
    /// Write to a cell whose value is fixed by the structure
    #[error("Invalid assignment to restricted element ({row}, {column})")]
    FixedCell { row: usize, column: usize },

    /// Hermitian diagonal elements must be real
    #[error("Invalid non-real diagonal element at index {index}")]
    NonRealDiagonal { index: usize },

    /// Mirrored cells of a symmetric or Hermitian matrix disagree
    #[error("Elements ({row}, {column}) and ({column}, {row}) are not mirrored")]
    Asymmetric { row: usize, column: usize },

    /// Square structure requested for a non-square matrix
    #[error("Matrix of size {rows}x{columns} is not square")]
    NotSquare { rows: usize, columns: usize },
}
