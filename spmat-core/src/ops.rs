//! Sparse matrix arithmetic
//!
//! All operators are pure: they read both operands and return a freshly
//! allocated result. Every intermediate sum and product uses checked
//! arithmetic or exact wide accumulation, so overflow surfaces as
//! [`SpmatError::Overflow`] instead of wrapping.

use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::matrix::SparseMatrix;
use crate::traits::{MatrixElement, SparseStorage, WideInt};
use crate::{Operation, Result, SpmatError};

/// Element-wise sum `a + b`
///
/// Entries that cancel to zero are not stored in the result.
pub fn add<T: MatrixElement>(
    a: &SparseMatrix<T>,
    b: &SparseMatrix<T>,
) -> Result<SparseMatrix<T>> {
    combine(a, b, Operation::Addition, T::checked_add)
}

/// Element-wise difference `a - b`
pub fn subtract<T: MatrixElement>(
    a: &SparseMatrix<T>,
    b: &SparseMatrix<T>,
) -> Result<SparseMatrix<T>> {
    combine(a, b, Operation::Subtraction, T::checked_sub)
}

/// Matrix product `a * b`
///
/// The result has shape `(a.rows, b.cols)`. Non-zeros of `b` are grouped by
/// row once, so each non-zero of `a` only visits the matching row of `b`.
/// Entries of `b` at or beyond `b.cols` never contribute.
pub fn multiply<T: MatrixElement>(
    a: &SparseMatrix<T>,
    b: &SparseMatrix<T>,
) -> Result<SparseMatrix<T>> {
    let operation = Operation::Multiplication;
    if a.cols() != b.rows() {
        return Err(mismatch(operation, a, b));
    }

    let mut b_rows: HashMap<usize, Vec<(usize, T)>> = HashMap::new();
    for (row, col, value) in b.iter() {
        if col < b.cols() {
            b_rows.entry(row).or_default().push((col, value));
        }
    }

    let overflow = SpmatError::Overflow { operation };
    let mut sums: HashMap<(usize, usize), CellSum<T::Wide>> = HashMap::new();
    for (i, k, lhs) in a.iter() {
        let Some(b_row) = b_rows.get(&k) else {
            continue;
        };
        for &(j, rhs) in b_row {
            let product = lhs.wide_mul(rhs).ok_or_else(|| overflow.clone())?;
            sums.entry((i, j)).or_default().push(product);
        }
    }

    let mut result = SparseMatrix::new(a.rows(), b.cols());
    for ((i, j), sum) in sums {
        let value = sum.finish::<T>().ok_or_else(|| overflow.clone())?;
        result.set_element(i, j, value);
    }

    log::debug!(
        "{operation}: {}x{} * {}x{} -> {} non-zeros",
        a.rows(),
        a.cols(),
        b.rows(),
        b.cols(),
        result.nnz()
    );
    Ok(result)
}

/// Running sum of one output cell
///
/// Additions wrap and every wrap is counted with its direction. The true
/// total is `wrapped + carries * 2^BITS`, so it is representable exactly
/// when the carries cancel out, whatever order the terms arrive in.
#[derive(Debug, Clone, Copy)]
struct CellSum<W> {
    wrapped: W,
    carries: i64,
}

impl<W: WideInt> Default for CellSum<W> {
    fn default() -> Self {
        Self {
            wrapped: W::ZERO,
            carries: 0,
        }
    }
}

impl<W: WideInt> CellSum<W> {
    fn push(&mut self, term: W) {
        let (wrapped, wrapped_around) = self.wrapped.overflowing_add(term);
        if wrapped_around {
            self.carries += if term.is_negative() { -1 } else { 1 };
        }
        self.wrapped = wrapped;
    }

    fn finish<T: MatrixElement<Wide = W>>(self) -> Option<T> {
        if self.carries != 0 {
            return None;
        }
        T::narrow(self.wrapped)
    }
}

/// Seed the result with `a` and fold every entry of `b` into it
fn combine<T: MatrixElement>(
    a: &SparseMatrix<T>,
    b: &SparseMatrix<T>,
    operation: Operation,
    apply: fn(T, T) -> Option<T>,
) -> Result<SparseMatrix<T>> {
    if a.dimensions() != b.dimensions() {
        return Err(mismatch(operation, a, b));
    }

    let mut result = a.clone();
    for (row, col, value) in b.iter() {
        let current = result.get_element(row, col);
        let combined = apply(current, value).ok_or(SpmatError::Overflow { operation })?;
        result.set_element(row, col, combined);
    }

    log::debug!(
        "{operation}: {}x{} -> {} non-zeros",
        result.rows(),
        result.cols(),
        result.nnz()
    );
    Ok(result)
}

fn mismatch<T: MatrixElement>(
    operation: Operation,
    a: &SparseMatrix<T>,
    b: &SparseMatrix<T>,
) -> SpmatError {
    SpmatError::DimensionMismatch {
        operation,
        left: a.dimensions(),
        right: b.dimensions(),
    }
}
