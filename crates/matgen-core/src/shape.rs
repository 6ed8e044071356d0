//! Structural predicates: which cells of a matrix a category leaves free.
//!
//! A free cell may hold any value; every other cell is fixed by the
//! structure. Each shape describes its free cells twice, once per row and
//! once per column, so that both storage orders can walk them contiguously.
//! The two descriptions always enumerate the same cell set.

use std::ops::Range;

/// Free-cell predicate of a structural category.
pub trait Shape {
    /// Free columns of row `i` in a matrix with `columns` columns.
    fn row_span(&self, i: usize, columns: usize) -> Range<usize>;

    /// Free rows of column `j` in a matrix with `rows` rows.
    fn column_span(&self, j: usize, rows: usize) -> Range<usize>;

    /// Whether cell `(i, j)` is free.
    fn contains(&self, i: usize, j: usize) -> bool;
}

/// Every cell is free.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Full;

/// Cells on or above the diagonal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpperTriangle;

/// Cells strictly above the diagonal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StrictlyUpperTriangle;

/// Cells on or below the diagonal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LowerTriangle;

/// Cells strictly below the diagonal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StrictlyLowerTriangle;

/// Cells on the diagonal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MainDiagonal;

/// Cells within `lower` sub-diagonals and `upper` super-diagonals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Band {
    pub lower: usize,
    pub upper: usize,
}

impl Band {
    pub fn new(lower: usize, upper: usize) -> Self {
        Self { lower, upper }
    }
}

fn clamp(start: usize, end: usize, limit: usize) -> Range<usize> {
    let end = end.min(limit);
    start.min(end)..end
}

impl Shape for Full {
    fn row_span(&self, _i: usize, columns: usize) -> Range<usize> {
        0..columns
    }

    fn column_span(&self, _j: usize, rows: usize) -> Range<usize> {
        0..rows
    }

    fn contains(&self, _i: usize, _j: usize) -> bool {
        true
    }
}

impl Shape for UpperTriangle {
    fn row_span(&self, i: usize, columns: usize) -> Range<usize> {
        clamp(i, columns, columns)
    }

    fn column_span(&self, j: usize, rows: usize) -> Range<usize> {
        clamp(0, j + 1, rows)
    }

    fn contains(&self, i: usize, j: usize) -> bool {
        i <= j
    }
}

impl Shape for StrictlyUpperTriangle {
    fn row_span(&self, i: usize, columns: usize) -> Range<usize> {
        clamp(i + 1, columns, columns)
    }

    fn column_span(&self, j: usize, rows: usize) -> Range<usize> {
        clamp(0, j, rows)
    }

    fn contains(&self, i: usize, j: usize) -> bool {
        i < j
    }
}

impl Shape for LowerTriangle {
    fn row_span(&self, i: usize, columns: usize) -> Range<usize> {
        clamp(0, i + 1, columns)
    }

    fn column_span(&self, j: usize, rows: usize) -> Range<usize> {
        clamp(j, rows, rows)
    }

    fn contains(&self, i: usize, j: usize) -> bool {
        i >= j
    }
}

impl Shape for StrictlyLowerTriangle {
    fn row_span(&self, i: usize, columns: usize) -> Range<usize> {
        clamp(0, i, columns)
    }

    fn column_span(&self, j: usize, rows: usize) -> Range<usize> {
        clamp(j + 1, rows, rows)
    }

    fn contains(&self, i: usize, j: usize) -> bool {
        i > j
    }
}

impl Shape for MainDiagonal {
    fn row_span(&self, i: usize, columns: usize) -> Range<usize> {
        clamp(i, i + 1, columns)
    }

    fn column_span(&self, j: usize, rows: usize) -> Range<usize> {
        clamp(j, j + 1, rows)
    }

    fn contains(&self, i: usize, j: usize) -> bool {
        i == j
    }
}

impl Shape for Band {
    fn row_span(&self, i: usize, columns: usize) -> Range<usize> {
        clamp(i.saturating_sub(self.lower), i.saturating_add(self.upper).saturating_add(1), columns)
    }

    fn column_span(&self, j: usize, rows: usize) -> Range<usize> {
        clamp(j.saturating_sub(self.upper), j.saturating_add(self.lower).saturating_add(1), rows)
    }

    fn contains(&self, i: usize, j: usize) -> bool {
        i <= j.saturating_add(self.lower) && j <= i.saturating_add(self.upper)
    }
}
