//! Element creators: single random scalars.

use crate::creator::{CreatorError, Fixture, Generator};
use crate::random;
use matgen_core::Scalar;
use num_complex::Complex;
use rand::Rng;

/// Scalar that can be drawn uniformly from a closed range.
pub trait RandomScalar: Scalar {
    /// Range used by [`UniformCreator::new`].
    fn default_range() -> (Self, Self);

    /// Whether `[min, max]` is a non-empty, finite range.
    fn is_valid_range(min: Self, max: Self) -> bool;

    /// Draw a value from `[min, max]`. The range must be valid.
    fn sample<R: Rng + ?Sized>(rng: &mut R, min: Self, max: Self) -> Self;
}

macro_rules! impl_random_integer {
    ($($t:ty),*) => {
        $(
            impl RandomScalar for $t {
                fn default_range() -> (Self, Self) {
                    (0, 10)
                }

                fn is_valid_range(min: Self, max: Self) -> bool {
                    min <= max
                }

                fn sample<R: Rng + ?Sized>(rng: &mut R, min: Self, max: Self) -> Self {
                    rng.gen_range(min..=max)
                }
            }
        )*
    };
}

macro_rules! impl_random_float {
    ($($t:ty),*) => {
        $(
            impl RandomScalar for $t {
                fn default_range() -> (Self, Self) {
                    (0.0, 1.0)
                }

                fn is_valid_range(min: Self, max: Self) -> bool {
                    // The sampler scales by the width over the largest unit draw,
                    // which must stay finite too.
                    min.is_finite()
                        && max.is_finite()
                        && min <= max
                        && ((max - min) / (1.0 - <$t>::EPSILON)).is_finite()
                }

                fn sample<R: Rng + ?Sized>(rng: &mut R, min: Self, max: Self) -> Self {
                    rng.gen_range(min..=max)
                }
            }

            impl RandomScalar for Complex<$t> {
                fn default_range() -> (Self, Self) {
                    (Complex::new(0.0, 0.0), Complex::new(1.0, 1.0))
                }

                fn is_valid_range(min: Self, max: Self) -> bool {
                    <$t>::is_valid_range(min.re, max.re) && <$t>::is_valid_range(min.im, max.im)
                }

                fn sample<R: Rng + ?Sized>(rng: &mut R, min: Self, max: Self) -> Self {
                    let re = <$t>::sample(rng, min.re, max.re);
                    let im = <$t>::sample(rng, min.im, max.im);
                    Complex::new(re, im)
                }
            }
        )*
    };
}

impl_random_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_random_float!(f32, f64);

/// Creator drawing scalars uniformly from a closed range.
///
/// Complex ranges apply to the real and imaginary parts independently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformCreator<T> {
    min: T,
    max: T,
}

impl<T: RandomScalar> UniformCreator<T> {
    /// Creator over the default range of `T`: `[0, 10]` for integers,
    /// `[0, 1]` for floats and for both parts of complex numbers.
    pub fn new() -> Self {
        let (min, max) = T::default_range();
        Self { min, max }
    }

    /// Creator over `[min, max]`.
    pub fn with_range(min: T, max: T) -> Result<Self, CreatorError> {
        if !T::is_valid_range(min, max) {
            return Err(CreatorError::InvalidRange {
                min: format!("{min:?}"),
                max: format!("{max:?}"),
            });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> T {
        self.min
    }

    pub fn max(&self) -> T {
        self.max
    }
}

impl<T: RandomScalar> Default for UniformCreator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: RandomScalar> Generator for UniformCreator<T> {
    type Output = T;

    fn generate(&self) -> T {
        random::with_rng(|rng| T::sample(rng, self.min, self.max))
    }
}

macro_rules! impl_scalar_fixture {
    ($($t:ty),*) => {
        $(
            impl Fixture for $t {
                type Creator = UniformCreator<$t>;
            }
        )*
    };
}

impl_scalar_fixture!(
    i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64,
    Complex<f32>, Complex<f64>
);
