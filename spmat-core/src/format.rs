//! Text format definitions
//!
//! A matrix description is two header lines followed by one parenthesised
//! triple per non-zero entry:
//!
//! ```text
//! rows=2
//! cols=3
//! (0,0,1)
//! (1,2,-4)
//! ```
//!
//! Blank entry lines are ignored. This module also holds the dense text
//! rendering used to display results.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::traits::SparseStorage;

/// Prefix of the first header line
pub const ROWS_KEY: &str = "rows=";

/// Prefix of the second header line
pub const COLS_KEY: &str = "cols=";

/// Opening delimiter of an entry line
pub const ENTRY_OPEN: char = '(';

/// Closing delimiter of an entry line
pub const ENTRY_CLOSE: char = ')';

/// Separator between the fields of an entry line
pub const FIELD_SEPARATOR: char = ',';

/// Number of fields in an entry line: row, column, value
pub const ENTRY_FIELDS: usize = 3;

/// Separator between values in a rendered row
pub const RENDER_SEPARATOR: &str = " ";

/// Render every row of a matrix as space-separated values
///
/// Absent entries render as `0`. Returns one string per row, so a matrix
/// with zero rows renders nothing.
pub fn render<M: SparseStorage>(matrix: &M) -> Vec<String> {
    let (rows, cols) = matrix.dimensions();

    (0..rows)
        .map(|row| {
            (0..cols)
                .map(|col| matrix.get_element(row, col).to_string())
                .collect::<Vec<_>>()
                .join(RENDER_SEPARATOR)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::SparseMatrix;
    use alloc::vec;

    #[test]
    fn test_render_fills_absent_entries() {
        let m: SparseMatrix = SparseMatrix::from_triplets(2, 3, [(0, 0, 7), (1, 2, -4)]).unwrap();
        assert_eq!(render(&m), vec!["7 0 0", "0 0 -4"]);
    }

    #[test]
    fn test_render_degenerate_shapes() {
        let no_rows: SparseMatrix = SparseMatrix::new(0, 4);
        assert!(render(&no_rows).is_empty());

        let no_cols: SparseMatrix = SparseMatrix::new(2, 0);
        assert_eq!(render(&no_cols), vec!["", ""]);
    }
}
