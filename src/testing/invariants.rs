//! Structural invariant checks.
//!
//! Every predicate inspects the logical view only, so the same check applies
//! to raw dense matrices, adaptors and compressed matrices in either storage
//! order. Non-square inputs fail the square-only predicates.

use matgen_core::{MatrixView, Scalar};

fn is_square<M: MatrixView + ?Sized>(m: &M) -> bool {
    m.rows() == m.columns()
}

fn all_cells<M, F>(m: &M, mut predicate: F) -> bool
where
    M: MatrixView + ?Sized,
    F: FnMut(usize, usize, M::Element) -> bool,
{
    (0..m.rows()).all(|i| (0..m.columns()).all(|j| predicate(i, j, m.element(i, j))))
}

/// Zero strictly below the diagonal.
pub fn is_upper<M: MatrixView + ?Sized>(m: &M) -> bool {
    is_square(m) && all_cells(m, |i, j, v| i <= j || v.is_zero())
}

/// Zero strictly above the diagonal.
pub fn is_lower<M: MatrixView + ?Sized>(m: &M) -> bool {
    is_square(m) && all_cells(m, |i, j, v| i >= j || v.is_zero())
}

/// Upper with a unit diagonal.
pub fn is_uni_upper<M: MatrixView + ?Sized>(m: &M) -> bool {
    is_upper(m) && unit_diagonal(m)
}

/// Lower with a unit diagonal.
pub fn is_uni_lower<M: MatrixView + ?Sized>(m: &M) -> bool {
    is_lower(m) && unit_diagonal(m)
}

/// Upper with a zero diagonal.
pub fn is_strictly_upper<M: MatrixView + ?Sized>(m: &M) -> bool {
    is_square(m) && all_cells(m, |i, j, v| i < j || v.is_zero())
}

/// Lower with a zero diagonal.
pub fn is_strictly_lower<M: MatrixView + ?Sized>(m: &M) -> bool {
    is_square(m) && all_cells(m, |i, j, v| i > j || v.is_zero())
}

pub fn is_diagonal<M: MatrixView + ?Sized>(m: &M) -> bool {
    is_square(m) && all_cells(m, |i, j, v| i == j || v.is_zero())
}

/// Zero outside `lower` sub-diagonals and `upper` super-diagonals.
///
/// Rectangular inputs are allowed.
pub fn is_banded<M: MatrixView + ?Sized>(m: &M, lower: usize, upper: usize) -> bool {
    all_cells(m, |i, j, v| {
        let inside = if i >= j { i - j <= lower } else { j - i <= upper };
        inside || v.is_zero()
    })
}

pub fn is_symmetric<M: MatrixView + ?Sized>(m: &M) -> bool {
    is_square(m) && all_cells(m, |i, j, v| j < i || v == m.element(j, i))
}

/// Equal to its own conjugate transpose. Diagonal cells must be real.
pub fn is_hermitian<M: MatrixView + ?Sized>(m: &M) -> bool {
    is_square(m)
        && all_cells(m, |i, j, v| {
            if i == j {
                v.is_real()
            } else {
                j < i || v == m.element(j, i).conj()
            }
        })
}

fn unit_diagonal<M: MatrixView + ?Sized>(m: &M) -> bool {
    (0..m.rows()).all(|i| m.element(i, i) == M::Element::one())
}
