//! Storage order markers.
//!
//! The storage order of a container is part of its type. It decides how a
//! logical `(row, column)` index maps onto memory and in which order the
//! cells of a [`Shape`] are walked when a container is assembled.

use crate::shape::Shape;
use std::fmt::Debug;

mod sealed {
    pub trait Sealed {}
}

/// Memory layout of a matrix.
pub trait StorageOrder:
    sealed::Sealed + Copy + Default + Debug + PartialEq + Send + Sync + 'static
{
    /// Human readable name, used in log output.
    const NAME: &'static str;

    /// Number of major lanes (rows for row-major, columns for column-major).
    fn majors(rows: usize, columns: usize) -> usize;

    /// Split a logical index into (major, minor) lane coordinates.
    fn major_minor(i: usize, j: usize) -> (usize, usize);

    /// Inverse of [`StorageOrder::major_minor`].
    fn logical(major: usize, minor: usize) -> (usize, usize);

    /// Offset of `(i, j)` in a dense buffer of the given dimensions.
    fn offset(i: usize, j: usize, rows: usize, columns: usize) -> usize;

    /// Visit every free cell of `shape` in memory order.
    fn traverse<S, F>(shape: &S, rows: usize, columns: usize, visit: F)
    where
        S: Shape + ?Sized,
        F: FnMut(usize, usize);
}

/// Row-major (C) layout: elements of a row are contiguous.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowMajor;

/// Column-major (Fortran) layout: elements of a column are contiguous.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnMajor;

impl sealed::Sealed for RowMajor {}
impl sealed::Sealed for ColumnMajor {}

impl StorageOrder for RowMajor {
    const NAME: &'static str = "row_major";

    fn majors(rows: usize, _columns: usize) -> usize {
        rows
    }

    fn major_minor(i: usize, j: usize) -> (usize, usize) {
        (i, j)
    }

    fn logical(major: usize, minor: usize) -> (usize, usize) {
        (major, minor)
    }

    fn offset(i: usize, j: usize, _rows: usize, columns: usize) -> usize {
        i * columns + j
    }

    fn traverse<S, F>(shape: &S, rows: usize, columns: usize, mut visit: F)
    where
        S: Shape + ?Sized,
        F: FnMut(usize, usize),
    {
        for i in 0..rows {
            for j in shape.row_span(i, columns) {
                visit(i, j);
            }
        }
    }
}

impl StorageOrder for ColumnMajor {
    const NAME: &'static str = "column_major";

    fn majors(_rows: usize, columns: usize) -> usize {
        columns
    }

    fn major_minor(i: usize, j: usize) -> (usize, usize) {
        (j, i)
    }

    fn logical(major: usize, minor: usize) -> (usize, usize) {
        (minor, major)
    }

    fn offset(i: usize, j: usize, rows: usize, _columns: usize) -> usize {
        j * rows + i
    }

    fn traverse<S, F>(shape: &S, rows: usize, columns: usize, mut visit: F)
    where
        S: Shape + ?Sized,
        F: FnMut(usize, usize),
    {
        for j in 0..columns {
            for i in shape.column_span(j, rows) {
                visit(i, j);
            }
        }
    }
}
