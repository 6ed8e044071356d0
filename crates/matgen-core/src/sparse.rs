//! Compressed sparse storage.
//!
//! [`CompressedMatrix`] stores its non-zero entries lane by lane: rows for
//! row-major (CSR), columns for column-major (CSC). Entries inside a lane
//! are kept sorted by their minor index.

use crate::dense::DynamicMatrix;
use crate::order::{RowMajor, StorageOrder};
use crate::scalar::Scalar;
use crate::view::{MatrixView, VectorView};
use std::marker::PhantomData;

/// Compressed sparse matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct CompressedMatrix<T, SO = RowMajor> {
    rows: usize,
    columns: usize,
    /// Start of each lane in `indices`/`values`, plus a trailing end marker
    offsets: Vec<usize>,
    indices: Vec<usize>,
    values: Vec<T>,
    order: PhantomData<SO>,
}

impl<T: Scalar, SO: StorageOrder> CompressedMatrix<T, SO> {
    /// Create an empty `rows x columns` matrix.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self::with_capacity(rows, columns, 0)
    }

    pub fn with_capacity(rows: usize, columns: usize, non_zeros: usize) -> Self {
        Self {
            rows,
            columns,
            offsets: vec![0; SO::majors(rows, columns) + 1],
            indices: Vec::with_capacity(non_zeros),
            values: Vec::with_capacity(non_zeros),
            order: PhantomData,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of stored entries.
    pub fn non_zeros(&self) -> usize {
        self.values.len()
    }

    fn check_bounds(&self, i: usize, j: usize) {
        assert!(
            i < self.rows && j < self.columns,
            "index ({i}, {j}) out of bounds for {}x{} matrix",
            self.rows,
            self.columns
        );
    }

    fn lane(&self, major: usize) -> std::ops::Range<usize> {
        self.offsets[major]..self.offsets[major + 1]
    }

    /// Stored entry at `(i, j)`, if any.
    pub fn find(&self, i: usize, j: usize) -> Option<&T> {
        self.check_bounds(i, j);
        let (major, minor) = SO::major_minor(i, j);
        let lane = self.lane(major);
        self.indices[lane.clone()]
            .binary_search(&minor)
            .ok()
            .map(|pos| &self.values[lane.start + pos])
    }

    /// Value at `(i, j)`; zero when no entry is stored.
    pub fn get(&self, i: usize, j: usize) -> T {
        self.find(i, j).copied().unwrap_or_else(T::zero)
    }

    /// Store `value` at `(i, j)`, replacing an existing entry.
    pub fn set(&mut self, i: usize, j: usize, value: T) {
        self.check_bounds(i, j);
        let (major, minor) = SO::major_minor(i, j);
        let lane = self.lane(major);
        match self.indices[lane.clone()].binary_search(&minor) {
            Ok(pos) => self.values[lane.start + pos] = value,
            Err(pos) => {
                self.indices.insert(lane.start + pos, minor);
                self.values.insert(lane.start + pos, value);
                for offset in &mut self.offsets[major + 1..] {
                    *offset += 1;
                }
            }
        }
    }

    /// Append an entry behind every entry stored so far.
    ///
    /// # Panics
    ///
    /// Panics if `(i, j)` does not come strictly after the last stored entry
    /// in storage order.
    pub fn append(&mut self, i: usize, j: usize, value: T) {
        self.check_bounds(i, j);
        let (major, minor) = SO::major_minor(i, j);
        if let Some(last) = self.last_position() {
            assert!(
                (major, minor) > last,
                "entry ({i}, {j}) appended out of storage order"
            );
        }
        self.indices.push(minor);
        self.values.push(value);
        let end = self.values.len();
        for offset in &mut self.offsets[major + 1..] {
            *offset = end;
        }
    }

    fn last_position(&self) -> Option<(usize, usize)> {
        let minor = *self.indices.last()?;
        let end = self.values.len();
        // The last lane whose start lies before the final entry owns it.
        let major = self.offsets.iter().rposition(|&offset| offset < end)?;
        Some((major, minor))
    }

    /// Iterate over stored `(i, j, value)` entries in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> + '_ {
        (0..self.offsets.len() - 1).flat_map(move |major| {
            self.lane(major).map(move |pos| {
                let (i, j) = SO::logical(major, self.indices[pos]);
                (i, j, &self.values[pos])
            })
        })
    }

    /// Dense copy with the same storage order.
    pub fn to_dense(&self) -> DynamicMatrix<T, SO> {
        let mut dense = DynamicMatrix::new(self.rows, self.columns);
        for (i, j, value) in self.iter() {
            dense[(i, j)] = *value;
        }
        dense
    }
}

impl<T: Scalar, SO: StorageOrder> MatrixView for CompressedMatrix<T, SO> {
    type Element = T;

    fn rows(&self) -> usize {
        self.rows
    }

    fn columns(&self) -> usize {
        self.columns
    }

    fn element(&self, i: usize, j: usize) -> T {
        self.get(i, j)
    }
}

/// Sparse vector with sorted indices.
#[derive(Debug, Clone, PartialEq)]
pub struct CompressedVector<T> {
    size: usize,
    indices: Vec<usize>,
    values: Vec<T>,
}

impl<T: Scalar> CompressedVector<T> {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            indices: Vec::new(),
            values: Vec::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn non_zeros(&self) -> usize {
        self.values.len()
    }

    pub fn find(&self, i: usize) -> Option<&T> {
        assert!(i < self.size, "index {i} out of bounds for vector of size {}", self.size);
        self.indices
            .binary_search(&i)
            .ok()
            .map(|pos| &self.values[pos])
    }

    pub fn get(&self, i: usize) -> T {
        self.find(i).copied().unwrap_or_else(T::zero)
    }

    pub fn set(&mut self, i: usize, value: T) {
        assert!(i < self.size, "index {i} out of bounds for vector of size {}", self.size);
        match self.indices.binary_search(&i) {
            Ok(pos) => self.values[pos] = value,
            Err(pos) => {
                self.indices.insert(pos, i);
                self.values.insert(pos, value);
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.indices.iter().copied().zip(self.values.iter())
    }
}

impl<T: Scalar> VectorView for CompressedVector<T> {
    type Element = T;

    fn size(&self) -> usize {
        self.size
    }

    fn element(&self, i: usize) -> T {
        self.get(i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::ColumnMajor;

    #[test]
    fn test_set_and_get() {
        let mut m = CompressedMatrix::<f64>::new(3, 4);
        m.set(2, 1, 1.5);
        m.set(0, 3, 2.0);
        m.set(0, 1, 3.0);
        m.set(0, 3, 4.0);

        assert_eq!(m.non_zeros(), 3);
        assert_eq!(m.get(0, 3), 4.0);
        assert_eq!(m.get(1, 1), 0.0);
        assert_eq!(m.find(1, 1), None);

        let entries: Vec<_> = m.iter().map(|(i, j, v)| (i, j, *v)).collect();
        assert_eq!(entries, vec![(0, 1, 3.0), (0, 3, 4.0), (2, 1, 1.5)]);
    }

    #[test]
    fn test_column_major_iteration() {
        let mut m = CompressedMatrix::<i32, ColumnMajor>::new(3, 3);
        m.set(2, 0, 1);
        m.set(0, 2, 2);
        m.set(1, 0, 3);

        let positions: Vec<_> = m.iter().map(|(i, j, _)| (i, j)).collect();
        assert_eq!(positions, vec![(1, 0), (2, 0), (0, 2)]);
    }

    #[test]
    fn test_append_in_order() {
        let mut m = CompressedMatrix::<i32, ColumnMajor>::new(3, 3);
        m.append(1, 0, 1);
        m.append(0, 2, 2);
        m.append(2, 2, 3);

        assert_eq!(m.get(1, 0), 1);
        assert_eq!(m.get(0, 2), 2);
        assert_eq!(m.get(2, 2), 3);
        assert_eq!(m.non_zeros(), 3);

        let dense = m.to_dense();
        assert_eq!(dense.non_zeros(), 3);
        assert_eq!(dense[(2, 2)], 3);
    }

    #[test]
    #[should_panic(expected = "out of storage order")]
    fn test_append_out_of_order_panics() {
        let mut m = CompressedMatrix::<i32>::new(3, 3);
        m.append(1, 1, 1);
        m.append(0, 2, 2);
    }

    #[test]
    fn test_empty_matrix() {
        let m = CompressedMatrix::<f32>::new(0, 0);
        assert_eq!(m.iter().count(), 0);
        assert_eq!(m.to_dense().rows(), 0);
    }

    #[test]
    fn test_compressed_vector() {
        let mut v = CompressedVector::<i64>::new(5);
        v.set(3, 7);
        v.set(1, 2);
        assert_eq!(v.non_zeros(), 2);
        assert_eq!(v.to_vec(), vec![0, 2, 0, 7, 0]);
        let indices: Vec<_> = v.iter().map(|(i, _)| i).collect();
        assert_eq!(indices, vec![1, 3]);
    }
}
