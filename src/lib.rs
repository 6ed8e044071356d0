//! matgen library
//!
//! Randomized, structurally valid fixtures for testing dense and sparse
//! linear-algebra kernels, plus the execution configuration those kernels
//! run under.
//!
//! # Crates
//!
//! - `matgen_core` (re-exported as [`containers`]) - dense, structured and sparse containers
//! - `matgen_creator` (re-exported as [`creator`]) - the creators producing random fixtures
//! - [`smp`] - process-wide thread bound for parallel evaluation
//! - [`testing`] - invariant checks and test setup helpers
//!
//! # Example
//!
//! ```rust
//! use matgen::{smp, ColumnMajor, Generator, HermitianCreator, UniformCreator};
//! use num_complex::Complex;
//!
//! smp::set_num_threads(2).unwrap();
//! assert_eq!(smp::num_threads(), 2);
//!
//! let creator =
//!     HermitianCreator::<_, ColumnMajor>::with_size(4, UniformCreator::<Complex<f64>>::new());
//! let fixture = creator.generate();
//! assert_eq!(fixture[(1, 2)], fixture[(2, 1)].conj());
//! ```

pub mod smp;
pub mod testing;

pub use matgen_core as containers;
pub use matgen_creator as creator;

pub use matgen_core::{
    BandMatrix, ColumnMajor, CompressedMatrix, CompressedVector, DiagonalMatrix, DynamicMatrix,
    DynamicVector, HermitianMatrix, LowerMatrix, MatrixView, RowMajor, Scalar, StaticVector,
    StorageOrder, StrictlyLowerMatrix, StrictlyUpperMatrix, StructureError, StructuredMatrix,
    SymmetricMatrix, UniLowerMatrix, UniUpperMatrix, UpperMatrix, VectorView,
};
pub use matgen_creator::{
    create, random, BandCreator, ConstantCreator, CreatorOf, DenseCreator, DiagonalCreator,
    Fixture, FixturePlan, FixtureSnapshot, FnCreator, Generator, HermitianCreator, LowerCreator,
    PlanError, SparseCreator, SparseVectorCreator, StaticVectorCreator, StrictlyLowerCreator,
    StrictlyUpperCreator, SymmetricCreator, UniLowerCreator, UniUpperCreator, UniformCreator,
    UpperCreator, VectorCreator, DEFAULT_SIZE,
};
pub use smp::SmpError;

/// Apply the execution settings of a fixture plan.
///
/// Sets the thread bound when the plan names one. The plan seed is applied
/// by [`FixturePlan::generate_all`] itself.
pub fn apply_plan_settings(plan: &FixturePlan) -> Result<(), SmpError> {
    if let Some(threads) = plan.threads {
        smp::set_num_threads(threads)?;
    }
    Ok(())
}
