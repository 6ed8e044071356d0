//! Creators for every fixture category.
//!
//! Element creators produce single scalars. Structural creators assemble a
//! container by walking the free cells of its category in storage order and
//! asking a nested element creator for one value per free cell. Cells fixed
//! by the structure are never written.
//!
//! | Fixture | Creator |
//! |---------|---------|
//! | scalars | [`UniformCreator`] |
//! | [`DynamicMatrix`](matgen_core::DynamicMatrix) | [`DenseCreator`] |
//! | [`StructuredMatrix`](matgen_core::StructuredMatrix) | [`StructuredCreator`] |
//! | [`BandMatrix`](matgen_core::BandMatrix) | [`BandCreator`] |
//! | [`SymmetricMatrix`](matgen_core::SymmetricMatrix) | [`SymmetricCreator`] |
//! | [`HermitianMatrix`](matgen_core::HermitianMatrix) | [`HermitianCreator`] |
//! | [`CompressedMatrix`](matgen_core::CompressedMatrix) | [`SparseCreator`] |
//! | [`DynamicVector`](matgen_core::DynamicVector) | [`VectorCreator`] |
//! | [`StaticVector`](matgen_core::StaticVector) | [`StaticVectorCreator`] |
//! | [`CompressedVector`](matgen_core::CompressedVector) | [`SparseVectorCreator`] |

pub mod dense;
pub mod element;
pub mod sparse;
pub mod structured;
pub mod vector;

pub use dense::DenseCreator;
pub use element::{RandomScalar, UniformCreator};
pub use sparse::{SparseCreator, SparseVectorCreator};
pub use structured::{
    BandCreator, DiagonalCreator, HermitianCreator, LowerCreator, StrictlyLowerCreator,
    StrictlyUpperCreator, StructuredCreator, SymmetricCreator, UniLowerCreator, UniUpperCreator,
    UpperCreator,
};
pub use vector::{StaticVectorCreator, VectorCreator};
