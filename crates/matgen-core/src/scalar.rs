//! Element types stored in matgen containers.

use num_complex::Complex;
use std::fmt::Debug;

/// Element type of a matrix or vector.
///
/// `Default` must be the additive identity: freshly allocated containers are
/// filled with it and structural categories use it for their fixed cells.
pub trait Scalar: Copy + Default + PartialEq + Debug + Send + Sync + 'static {
    /// Additive identity.
    fn zero() -> Self {
        Self::default()
    }

    /// Multiplicative identity.
    fn one() -> Self;

    /// Complex conjugate; the identity for real types.
    fn conj(self) -> Self;

    /// Whether the value has no imaginary component.
    fn is_real(self) -> bool;

    /// Projection onto the real axis.
    fn real_part(self) -> Self;

    fn is_zero(self) -> bool {
        self == Self::zero()
    }
}

macro_rules! impl_real_scalar {
    ($one:expr => $($t:ty),*) => {
        $(
            impl Scalar for $t {
                fn one() -> Self {
                    $one
                }

                fn conj(self) -> Self {
                    self
                }

                fn is_real(self) -> bool {
                    true
                }

                fn real_part(self) -> Self {
                    self
                }
            }
        )*
    };
}

impl_real_scalar!(1 => i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_real_scalar!(1.0 => f32, f64);

macro_rules! impl_complex_scalar {
    ($($t:ty),*) => {
        $(
            impl Scalar for Complex<$t> {
                fn one() -> Self {
                    Complex::new(1.0, 0.0)
                }

                fn conj(self) -> Self {
                    Complex::conj(&self)
                }

                fn is_real(self) -> bool {
                    self.im == 0.0
                }

                fn real_part(self) -> Self {
                    Complex::new(self.re, 0.0)
                }
            }
        )*
    };
}

impl_complex_scalar!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_real_conjugate_is_identity() {
        assert_eq!(3i32.conj(), 3);
        assert_eq!((-2.5f64).conj(), -2.5);
        assert!(7u8.is_real());
    }

    #[test]
    fn test_complex_conjugate() {
        let z = Complex::new(1.0f64, 2.0);
        assert_eq!(z.conj(), Complex::new(1.0, -2.0));
        assert_eq!(z.conj().conj(), z);
        assert!(!z.is_real());
        assert!(z.real_part().is_real());
        assert_eq!(z.real_part(), Complex::new(1.0, 0.0));
    }

    #[test]
    fn test_identities() {
        assert!(f32::zero().is_zero());
        assert_eq!(i64::one(), 1);
        assert_eq!(Complex::<f32>::one(), Complex::new(1.0, 0.0));
    }
}
