//! Dense vectors.

use crate::creator::{CreatorOf, Fixture, Generator, DEFAULT_SIZE};
use matgen_core::{DynamicVector, Scalar, StaticVector};

/// Creator for [`DynamicVector`].
#[derive(Debug, Clone)]
pub struct VectorCreator<E> {
    size: usize,
    element: E,
}

impl<E> VectorCreator<E> {
    pub fn new(element: E) -> Self {
        Self::with_size(DEFAULT_SIZE, element)
    }

    pub fn with_size(size: usize, element: E) -> Self {
        Self { size, element }
    }

    pub fn size(&self) -> usize {
        self.size
    }
}

impl<E: Default> Default for VectorCreator<E> {
    fn default() -> Self {
        Self::new(E::default())
    }
}

impl<E> Generator for VectorCreator<E>
where
    E: Generator,
    E::Output: Scalar,
{
    type Output = DynamicVector<E::Output>;

    fn generate(&self) -> Self::Output {
        let values = (0..self.size).map(|_| self.element.generate()).collect();
        tracing::trace!(category = "vector", size = self.size, "Created fixture");
        DynamicVector::from_vec(values)
    }
}

impl<T: Scalar + Fixture> Fixture for DynamicVector<T> {
    type Creator = VectorCreator<CreatorOf<T>>;
}

/// Creator for [`StaticVector`]; the size is fixed by the type.
#[derive(Debug, Clone, Default)]
pub struct StaticVectorCreator<E, const N: usize> {
    element: E,
}

impl<E, const N: usize> StaticVectorCreator<E, N> {
    pub fn new(element: E) -> Self {
        Self { element }
    }
}

impl<E, const N: usize> Generator for StaticVectorCreator<E, N>
where
    E: Generator,
    E::Output: Scalar,
{
    type Output = StaticVector<E::Output, N>;

    fn generate(&self) -> Self::Output {
        StaticVector::from_array(std::array::from_fn(|_| self.element.generate()))
    }
}

impl<T: Scalar + Fixture, const N: usize> Fixture for StaticVector<T, N> {
    type Creator = StaticVectorCreator<CreatorOf<T>, N>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::creator::{create, ConstantCreator};
    use crate::random::set_seed;

    #[test]
    fn test_default_vector_size() {
        let vector: DynamicVector<f64> = create();
        assert_eq!(vector.size(), DEFAULT_SIZE);
    }

    #[test]
    fn test_vector_of_constants() {
        let vector = VectorCreator::with_size(5, ConstantCreator(2i8)).generate();
        assert_eq!(vector.as_slice(), &[2, 2, 2, 2, 2]);
    }

    #[test]
    fn test_empty_vector() {
        assert_eq!(VectorCreator::with_size(0, ConstantCreator(1u8)).generate().size(), 0);
    }

    #[test]
    fn test_static_vector() {
        set_seed(30);
        let vector: StaticVector<u32, 4> = create();
        assert_eq!(vector.size(), 4);
        assert!(vector.as_slice().iter().all(|&v| v <= 10));
    }
}
