//! Randomized fixture creators for the matgen framework.
//!
//! This crate turns the container types of `matgen-core` into random test
//! fixtures. Every fixture type is registered with a creator through the
//! [`Fixture`] trait; a creator is built once with a size and a nested
//! element creator, then asked for any number of independent values.
//!
//! # Architecture
//!
//! ```text
//! Fixture type ──► CreatorOf<T>
//!                      │
//!                      ▼
//! ┌──────────────────────────────┐
//! │  Structural creator          │
//! │                              │
//! │  - size                      │
//! │  - element creator (owned)   │
//! └──────────────┬───────────────┘
//!                │ one draw per free cell, in storage order
//!                ▼
//!        thread-local StdRng (random)
//! ```
//!
//! # Example
//!
//! ```rust
//! use matgen_core::{ColumnMajor, UpperMatrix};
//! use matgen_creator::{random, ConstantCreator, Generator, UpperCreator};
//!
//! random::set_seed(42);
//! let upper = UpperCreator::<_, ColumnMajor>::with_size(4, ConstantCreator(1.0)).generate();
//! assert_eq!(upper[(0, 3)], 1.0);
//! assert_eq!(upper[(3, 0)], 0.0);
//!
//! let random_upper: UpperMatrix<f64, ColumnMajor> = matgen_creator::create();
//! assert_eq!(random_upper.size(), 3);
//! ```
//!
//! # Creators
//!
//! - `UniformCreator` - Uniform scalars in a closed range
//! - `ConstantCreator` - The same scalar every time
//! - `FnCreator` - Any closure
//! - `DenseCreator` - General dense matrices
//! - `UpperCreator`, `LowerCreator`, `UniUpperCreator`, `UniLowerCreator`,
//!   `StrictlyUpperCreator`, `StrictlyLowerCreator`, `DiagonalCreator` - Triangular family
//! - `BandCreator` - Banded matrices
//! - `SymmetricCreator`, `HermitianCreator` - Mirrored matrices
//! - `SparseCreator`, `SparseVectorCreator` - Compressed storage
//! - `VectorCreator`, `StaticVectorCreator` - Dense vectors

pub mod creator;
pub mod creators;
pub mod plan;
pub mod random;

// Re-exports for convenience
pub use creator::{
    create, ConstantCreator, CreatorError, CreatorOf, Fixture, FnCreator, Generator, DEFAULT_SIZE,
};
pub use creators::{
    BandCreator, DenseCreator, DiagonalCreator, HermitianCreator, LowerCreator, RandomScalar,
    SparseCreator, SparseVectorCreator, StaticVectorCreator, StrictlyLowerCreator,
    StrictlyUpperCreator, StructuredCreator, SymmetricCreator, UniLowerCreator, UniUpperCreator,
    UniformCreator, UpperCreator, VectorCreator,
};
pub use plan::{
    Category, ElementConfig, ElementValue, FixturePlan, FixtureSnapshot, FixtureSpec, Order,
    PlanError,
};
