//! Map-backed sparse matrix
//!
//! Non-zero values are keyed by `(row, col)`. Zero is represented by
//! absence: no mutation path ever stores an explicit zero.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;

use crate::format;
use crate::ops;
use crate::traits::{MatrixElement, MatrixOperations, SparseStorage};
use crate::validation::validate_index;
use crate::Result;

/// Sparse matrix over integer elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseMatrix<T: MatrixElement = i64> {
    rows: usize,
    cols: usize,
    entries: HashMap<(usize, usize), T>,
}

impl<T: MatrixElement> SparseMatrix<T> {
    /// Create an empty (all-zero) matrix with the given shape
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            entries: HashMap::new(),
        }
    }

    /// Square matrix with ones on the diagonal
    pub fn identity(n: usize) -> Self {
        let mut matrix = Self::new(n, n);
        for i in 0..n {
            matrix.set_element(i, i, T::ONE);
        }
        matrix
    }

    /// Build a matrix from `(row, col, value)` triples
    ///
    /// Every coordinate is bounds checked. Later triples overwrite earlier
    /// ones and zero values are dropped.
    pub fn from_triplets<I>(rows: usize, cols: usize, triplets: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, T)>,
    {
        let mut matrix = Self::new(rows, cols);
        for (row, col, value) in triplets {
            matrix.try_set_element(row, col, value)?;
        }
        Ok(matrix)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether no non-zero entry is stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Store `value` at `(row, col)`, or remove the entry when `value` is zero
    ///
    /// The coordinate is not checked against the shape; use
    /// [`SparseMatrix::try_set_element`] for that.
    pub fn set_element(&mut self, row: usize, col: usize, value: T) {
        if value.is_zero() {
            self.entries.remove(&(row, col));
        } else {
            self.entries.insert((row, col), value);
        }
    }

    /// Bounds-checked [`SparseMatrix::set_element`]
    pub fn try_set_element(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        validate_index(row, col, self.rows, self.cols)?;
        self.set_element(row, col, value);
        Ok(())
    }

    /// Iterate over stored `(row, col, value)` entries in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        self.entries
            .iter()
            .map(|(&(row, col), &value)| (row, col, value))
    }

    /// Stored entries sorted in row-major order
    pub fn triplets(&self) -> Vec<(usize, usize, T)> {
        let mut triplets: Vec<_> = self.iter().collect();
        triplets.sort_unstable_by_key(|&(row, col, _)| (row, col));
        triplets
    }

    /// Dense text rendering, one line per row
    pub fn render(&self) -> Vec<String> {
        format::render(self)
    }

    /// Element-wise sum, see [`ops::add`]
    pub fn add(&self, other: &Self) -> Result<Self> {
        ops::add(self, other)
    }

    /// Element-wise difference, see [`ops::subtract`]
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        ops::subtract(self, other)
    }

    /// Matrix product, see [`ops::multiply`]
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        ops::multiply(self, other)
    }
}

impl<T: MatrixElement> SparseStorage for SparseMatrix<T> {
    type Element = T;

    fn get_element(&self, row: usize, col: usize) -> T {
        self.entries.get(&(row, col)).copied().unwrap_or(T::ZERO)
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn nnz(&self) -> usize {
        self.entries.len()
    }
}

impl<T: MatrixElement> MatrixOperations for SparseMatrix<T> {
    fn row(&self, row_index: usize) -> Vec<(usize, T)> {
        let mut values: Vec<_> = self
            .iter()
            .filter(|&(row, _, _)| row == row_index)
            .map(|(_, col, value)| (col, value))
            .collect();
        values.sort_unstable_by_key(|&(col, _)| col);
        values
    }

    fn col(&self, col_index: usize) -> Vec<(usize, T)> {
        let mut values: Vec<_> = self
            .iter()
            .filter(|&(_, col, _)| col == col_index)
            .map(|(row, _, value)| (row, value))
            .collect();
        values.sort_unstable_by_key(|&(row, _)| row);
        values
    }
}

impl<T: MatrixElement> fmt::Display for SparseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.render().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{line}")?;
        }
        Ok(())
    }
}
