//! The generator protocol shared by every creator.

/// Number of rows and columns a creator uses when no size is given.
pub const DEFAULT_SIZE: usize = 3;

/// Error type for creator construction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CreatorError {
    /// Value range is empty or not finite
    #[error("Invalid value range [{min}, {max}]")]
    InvalidRange { min: String, max: String },
}

/// Something that produces a fresh value on every call.
///
/// Creators are immutable after construction. Any randomness is drawn from
/// the shared source in [`crate::random`], never from creator-local state,
/// so one creator can be reused any number of times.
pub trait Generator {
    type Output;

    fn generate(&self) -> Self::Output;
}

impl<G: Generator + ?Sized> Generator for &G {
    type Output = G::Output;

    fn generate(&self) -> G::Output {
        (**self).generate()
    }
}

/// Type-indexed creator registry.
///
/// Every fixture type names the creator that knows how to assemble it, so
/// `CreatorOf<UpperMatrix<f64, ColumnMajor>>` resolves at compile time to
/// the upper-triangular, column-major assembly.
pub trait Fixture: Sized {
    type Creator: Generator<Output = Self> + Default;
}

/// Creator registered for `T`.
pub type CreatorOf<T> = <T as Fixture>::Creator;

/// Produce one `T` with default creator parameters.
pub fn create<T: Fixture>() -> T {
    T::Creator::default().generate()
}

/// Creator backed by a closure.
///
/// # Example
///
/// ```
/// use matgen_creator::{FnCreator, Generator};
///
/// let ones = FnCreator::new(|| 1.0f64);
/// assert_eq!(ones.generate(), 1.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnCreator<F>(F);

impl<F> FnCreator<F> {
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<T, F: Fn() -> T> Generator for FnCreator<F> {
    type Output = T;

    fn generate(&self) -> T {
        (self.0)()
    }
}

/// Creator that always returns the same value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ConstantCreator<T>(pub T);

impl<T: Copy> Generator for ConstantCreator<T> {
    type Output = T;

    fn generate(&self) -> T {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_fn_creator_is_called_per_generate() {
        let calls = Cell::new(0);
        let creator = FnCreator::new(|| {
            calls.set(calls.get() + 1);
            calls.get()
        });
        assert_eq!(creator.generate(), 1);
        assert_eq!(creator.generate(), 2);
        assert_eq!((&creator).generate(), 3);
    }

    #[test]
    fn test_constant_creator() {
        let creator = ConstantCreator(7u8);
        assert_eq!(creator.generate(), 7);
        assert_eq!(creator.generate(), 7);
    }
}
