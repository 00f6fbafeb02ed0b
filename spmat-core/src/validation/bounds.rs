//! Coordinate bounds validation
//!
//! Pure checks that a (row, col) pair lies inside a declared shape.

use crate::SpmatError;

/// Whether `(row, col)` lies inside a `rows x cols` matrix
pub const fn in_bounds(row: usize, col: usize, rows: usize, cols: usize) -> bool {
    row < rows && col < cols
}

/// Validate that `(row, col)` lies inside a `rows x cols` matrix
pub fn validate_index(
    row: usize,
    col: usize,
    rows: usize,
    cols: usize,
) -> Result<(), SpmatError> {
    if !in_bounds(row, col, rows, cols) {
        return Err(SpmatError::IndexOutOfBounds {
            row,
            col,
            rows,
            cols,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_bounds() {
        assert!(in_bounds(0, 0, 1, 1));
        assert!(in_bounds(2, 3, 3, 4));

        assert!(!in_bounds(3, 0, 3, 4));
        assert!(!in_bounds(0, 4, 3, 4));

        // Nothing fits in an empty shape
        assert!(!in_bounds(0, 0, 0, 5));
        assert!(!in_bounds(0, 0, 5, 0));
    }

    #[test]
    fn test_validate_index() {
        assert_eq!(validate_index(1, 1, 2, 2), Ok(()));
        assert_eq!(
            validate_index(2, 0, 2, 2),
            Err(SpmatError::IndexOutOfBounds {
                row: 2,
                col: 0,
                rows: 2,
                cols: 2
            })
        );
    }
}
