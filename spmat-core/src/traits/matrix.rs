//! Core matrix abstraction traits
//!
//! These traits describe read access to a sparse matrix independently of
//! how the non-zero entries are stored.

use alloc::vec::Vec;

use super::element::MatrixElement;

/// Read access shared by all sparse matrix representations
pub trait SparseStorage {
    /// The element type stored in this matrix
    type Element: MatrixElement;

    /// Get the element at the specified position
    ///
    /// Returns zero when nothing is stored there, including positions
    /// outside the matrix.
    fn get_element(&self, row: usize, col: usize) -> Self::Element;

    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Get number of non-zero elements stored
    fn nnz(&self) -> usize;
}

/// Row and column slicing over the stored non-zeros
pub trait MatrixOperations: SparseStorage {
    /// Non-zero `(col, value)` pairs of a row, in column order
    fn row(&self, row_index: usize) -> Vec<(usize, Self::Element)>;

    /// Non-zero `(row, value)` pairs of a column, in row order
    fn col(&self, col_index: usize) -> Vec<(usize, Self::Element)>;
}
