//! Core container types for the matgen fixture framework.
//!
//! This crate provides the value types that fixtures are made of. It holds no
//! randomness; the `matgen-creator` crate builds on these types to produce
//! randomized instances.
//!
//! - [`Scalar`] - Element types (integers, floats, complex numbers)
//! - [`StorageOrder`] - Row-major / column-major layout markers
//! - [`Shape`] - Which cells of a matrix a structural category leaves free
//! - [`DynamicMatrix`] - General dense matrix
//! - [`StructuredMatrix`] - Triangular and diagonal adaptors
//! - [`BandMatrix`], [`SymmetricMatrix`], [`HermitianMatrix`] - Further adaptors
//! - [`CompressedMatrix`], [`CompressedVector`] - Sparse storage
//! - [`DynamicVector`], [`StaticVector`] - Dense vectors
//!
//! # Architecture
//!
//! ```text
//! matgen-core (this crate)
//!    │
//!    ├─── matgen-creator  (generators producing these containers)
//!    │
//!    └─── matgen          (execution configuration, test helpers)
//! ```
//!
//! # Example
//!
//! ```rust
//! use matgen_core::{ColumnMajor, UpperMatrix};
//!
//! let mut upper = UpperMatrix::<f64, ColumnMajor>::new(3);
//! upper.set(0, 2, 4.0);
//! assert_eq!(upper[(0, 2)], 4.0);
//! assert!(upper.try_set(2, 0, 1.0).is_err());
//! ```

pub mod adaptor;
pub mod dense;
pub mod error;
pub mod order;
pub mod scalar;
pub mod shape;
pub mod sparse;
pub mod view;

// Re-exports for convenience
pub use adaptor::{
    BandMatrix, DiagonalMatrix, HermitianMatrix, LowerMatrix, StrictlyLowerMatrix,
    StrictlyUpperMatrix, Structure, StructuredMatrix, SymmetricMatrix, UniLowerMatrix,
    UniUpperMatrix, UpperMatrix,
};
pub use dense::{DynamicMatrix, DynamicVector, StaticVector};
pub use error::StructureError;
pub use order::{ColumnMajor, RowMajor, StorageOrder};
pub use scalar::Scalar;
pub use shape::Shape;
pub use sparse::{CompressedMatrix, CompressedVector};
pub use view::{MatrixView, VectorView};
