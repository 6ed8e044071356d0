//! Test infrastructure for structured fixtures
//!
//! Predicates that check a fixture's structural invariants through its
//! logical view, and the setup helpers shared by unit and integration tests.

pub mod invariants;
pub mod test_helpers;

pub use invariants::{
    is_banded, is_diagonal, is_hermitian, is_lower, is_strictly_lower, is_strictly_upper,
    is_symmetric, is_uni_lower, is_uni_upper, is_upper,
};
pub use test_helpers::{init_tracing, thread_config_lock};
