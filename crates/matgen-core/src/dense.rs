//! Dense matrix and vector storage.

use crate::order::{RowMajor, StorageOrder};
use crate::scalar::Scalar;
use crate::view::{MatrixView, VectorView};
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

/// Dense matrix with runtime dimensions.
///
/// Elements live in a single buffer laid out according to `SO`. A new matrix
/// is filled with the additive identity.
///
/// # Example
///
/// ```
/// use matgen_core::{ColumnMajor, DynamicMatrix};
///
/// let mut m = DynamicMatrix::<i32, ColumnMajor>::new(2, 3);
/// m[(1, 0)] = 5;
/// assert_eq!(m.as_slice(), &[0, 5, 0, 0, 0, 0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DynamicMatrix<T, SO = RowMajor> {
    rows: usize,
    columns: usize,
    data: Vec<T>,
    order: PhantomData<SO>,
}

impl<T: Scalar, SO: StorageOrder> DynamicMatrix<T, SO> {
    /// Create a `rows x columns` matrix of zeros.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            data: vec![T::zero(); rows * columns],
            order: PhantomData,
        }
    }

    /// Create a matrix whose cell `(i, j)` is `f(i, j)`.
    ///
    /// `f` is called in memory order.
    pub fn from_fn<F>(rows: usize, columns: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut matrix = Self::new(rows, columns);
        SO::traverse(&crate::shape::Full, rows, columns, |i, j| {
            matrix[(i, j)] = f(i, j);
        });
        matrix
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.columns
    }

    /// Get a reference to `(i, j)`, or `None` when out of bounds.
    pub fn get(&self, i: usize, j: usize) -> Option<&T> {
        if i < self.rows && j < self.columns {
            self.data.get(SO::offset(i, j, self.rows, self.columns))
        } else {
            None
        }
    }

    /// The underlying buffer in storage order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Number of cells that are not zero.
    pub fn non_zeros(&self) -> usize {
        self.data.iter().filter(|v| !v.is_zero()).count()
    }

    /// Iterate over `(i, j, value)` in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> + '_ {
        let majors = SO::majors(self.rows, self.columns);
        let minors = if majors == 0 { 0 } else { self.data.len() / majors };
        self.data.iter().enumerate().map(move |(offset, value)| {
            let (i, j) = SO::logical(offset / minors, offset % minors);
            (i, j, value)
        })
    }

    fn checked_offset(&self, i: usize, j: usize) -> usize {
        assert!(
            i < self.rows && j < self.columns,
            "index ({i}, {j}) out of bounds for {}x{} matrix",
            self.rows,
            self.columns
        );
        SO::offset(i, j, self.rows, self.columns)
    }
}

impl<T: Scalar, SO: StorageOrder> Index<(usize, usize)> for DynamicMatrix<T, SO> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        &self.data[self.checked_offset(i, j)]
    }
}

impl<T: Scalar, SO: StorageOrder> IndexMut<(usize, usize)> for DynamicMatrix<T, SO> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        let offset = self.checked_offset(i, j);
        &mut self.data[offset]
    }
}

impl<T: Scalar, SO: StorageOrder> MatrixView for DynamicMatrix<T, SO> {
    type Element = T;

    fn rows(&self) -> usize {
        self.rows
    }

    fn columns(&self) -> usize {
        self.columns
    }

    fn element(&self, i: usize, j: usize) -> T {
        self[(i, j)]
    }
}

/// Dense vector with a runtime size.
#[derive(Debug, Clone, PartialEq)]
pub struct DynamicVector<T> {
    data: Vec<T>,
}

impl<T: Scalar> DynamicVector<T> {
    /// Create a vector of `size` zeros.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![T::zero(); size],
        }
    }

    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T> Index<usize> for DynamicVector<T> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T> IndexMut<usize> for DynamicVector<T> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }
}

impl<T: Scalar> VectorView for DynamicVector<T> {
    type Element = T;

    fn size(&self) -> usize {
        self.data.len()
    }

    fn element(&self, i: usize) -> T {
        self.data[i]
    }
}

/// Dense vector whose size is part of its type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticVector<T, const N: usize> {
    data: [T; N],
}

impl<T: Scalar, const N: usize> StaticVector<T, N> {
    pub fn new() -> Self {
        Self {
            data: [T::zero(); N],
        }
    }

    pub fn from_array(data: [T; N]) -> Self {
        Self { data }
    }

    pub const fn size(&self) -> usize {
        N
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T: Scalar, const N: usize> Default for StaticVector<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> Index<usize> for StaticVector<T, N> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T, const N: usize> IndexMut<usize> for StaticVector<T, N> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }
}

impl<T: Scalar, const N: usize> VectorView for StaticVector<T, N> {
    type Element = T;

    fn size(&self) -> usize {
        N
    }

    fn element(&self, i: usize) -> T {
        self.data[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::ColumnMajor;

    #[test]
    fn test_new_matrix_is_zero() {
        let m = DynamicMatrix::<f64>::new(2, 3);
        assert_eq!(m.rows(), 2);
        assert_eq!(m.columns(), 3);
        assert_eq!(m.non_zeros(), 0);
        assert_eq!(m.as_slice().len(), 6);
    }

    #[test]
    fn test_layout_depends_on_storage_order() {
        let row = DynamicMatrix::<i32, RowMajor>::from_fn(2, 2, |i, j| (i * 2 + j) as i32);
        let column = DynamicMatrix::<i32, ColumnMajor>::from_fn(2, 2, |i, j| (i * 2 + j) as i32);

        assert_eq!(row.as_slice(), &[0, 1, 2, 3]);
        assert_eq!(column.as_slice(), &[0, 2, 1, 3]);
        assert_eq!(row.to_row_major_vec(), column.to_row_major_vec());
    }

    #[test]
    fn test_iter_yields_logical_indices() {
        let m = DynamicMatrix::<i32, ColumnMajor>::from_fn(2, 3, |i, j| (10 * i + j) as i32);
        for (i, j, value) in m.iter() {
            assert_eq!(*value, (10 * i + j) as i32);
        }
        let order: Vec<_> = m.iter().map(|(i, j, _)| (i, j)).collect();
        assert_eq!(order[..3], [(0, 0), (1, 0), (0, 1)]);
    }

    #[test]
    fn test_get_out_of_bounds() {
        let m = DynamicMatrix::<u8>::new(1, 1);
        assert_eq!(m.get(0, 0), Some(&0));
        assert_eq!(m.get(1, 0), None);
        assert_eq!(m.get(0, 1), None);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_index_out_of_bounds_panics() {
        let m = DynamicMatrix::<u8>::new(2, 2);
        let _ = m[(2, 0)];
    }

    #[test]
    fn test_empty_matrix() {
        let m = DynamicMatrix::<f32, ColumnMajor>::new(0, 0);
        assert_eq!(m.iter().count(), 0);
        assert!(m.is_square());
    }

    #[test]
    fn test_vectors() {
        let mut v = DynamicVector::<i64>::new(3);
        v[1] = 4;
        assert_eq!(v.to_vec(), vec![0, 4, 0]);

        let mut s = StaticVector::<f32, 2>::new();
        s[0] = 1.5;
        assert_eq!(s.size(), 2);
        assert_eq!(s.as_slice(), &[1.5, 0.0]);
    }
}
