//! Text to matrix parsing
//!
//! Assembles the line-level parsers from [`crate::validation::parsing`] into
//! a complete matrix. Parsing either succeeds with a fully populated matrix
//! or fails on the first offending line.

use alloc::format;

use crate::matrix::SparseMatrix;
use crate::traits::{MatrixElement, SparseStorage};
use crate::validation::{in_bounds, parse_entry, parse_header};
use crate::{Result, SpmatError};

/// Configuration for parsing matrix descriptions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseConfig {
    /// Reject entries outside the declared `rows x cols` shape
    pub bounds_check: bool,
}

impl ParseConfig {
    /// Config that accepts entries outside the declared shape as-is
    pub fn lenient() -> Self {
        Self {
            bounds_check: false,
        }
    }

    /// Enable or disable the entry bounds check
    pub fn with_bounds_check(mut self, bounds_check: bool) -> Self {
        self.bounds_check = bounds_check;
        self
    }
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self { bounds_check: true }
    }
}

/// Parse a matrix description with the default (bounds-checked) config
pub fn parse_matrix<T: MatrixElement>(text: &str) -> Result<SparseMatrix<T>> {
    parse_matrix_with_config(text, &ParseConfig::default())
}

/// Parse a matrix description
pub fn parse_matrix_with_config<T: MatrixElement>(
    text: &str,
    config: &ParseConfig,
) -> Result<SparseMatrix<T>> {
    parse_lines(text.lines(), config)
}

/// Parse a matrix from an iterator of lines
///
/// The first two lines are the `rows=` and `cols=` headers. Every later
/// non-blank line is one `(row,col,value)` entry; a repeated coordinate
/// overwrites the earlier value.
pub fn parse_lines<'a, T, I>(lines: I, config: &ParseConfig) -> Result<SparseMatrix<T>>
where
    T: MatrixElement,
    I: IntoIterator<Item = &'a str>,
{
    let mut lines = lines.into_iter();
    let (rows, cols) = parse_header(lines.next(), lines.next())?;
    let mut matrix = SparseMatrix::new(rows, cols);

    for line in lines.map(str::trim).filter(|line| !line.is_empty()) {
        let (row, col, value) = parse_entry(line)?;
        if config.bounds_check && !in_bounds(row, col, rows, cols) {
            return Err(SpmatError::invalid_format(format!(
                "Entry out of bounds for {rows}x{cols} matrix: {line}"
            )));
        }
        matrix.set_element(row, col, value);
    }

    log::debug!(
        "parsed {}x{} matrix with {} non-zeros",
        rows,
        cols,
        matrix.nnz()
    );
    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorCategory;
    use alloc::vec;

    const SAMPLE: &str = "rows=3\ncols=3\n(0,0,1)\n(1,2,5)\n\n(2,1,-3)\n";

    #[test]
    fn test_parse_and_render() {
        let matrix: SparseMatrix = parse_matrix(SAMPLE).unwrap();
        assert_eq!(matrix.dimensions(), (3, 3));
        assert_eq!(matrix.render(), vec!["1 0 0", "0 0 5", "0 -3 0"]);
    }

    #[test]
    fn test_whitespace_tolerance() {
        let text = "rows= 2 \r\ncols=2\r\n   ( 0 , 1 , 4 )   \r\n\t\r\n(1,0,2)";
        let matrix: SparseMatrix = parse_matrix(text).unwrap();
        assert_eq!(matrix.triplets(), vec![(0, 1, 4), (1, 0, 2)]);
    }

    #[test]
    fn test_header_only() {
        let matrix: SparseMatrix = parse_matrix("rows=4\ncols=5").unwrap();
        assert_eq!(matrix.dimensions(), (4, 5));
        assert!(matrix.is_empty());
    }

    #[test]
    fn test_last_write_wins_and_zero_entries() {
        let text = "rows=2\ncols=2\n(0,0,1)\n(0,0,8)\n(1,1,3)\n(1,1,0)\n(0,1,0)";
        let matrix: SparseMatrix = parse_matrix(text).unwrap();
        assert_eq!(matrix.triplets(), vec![(0, 0, 8)]);
    }

    #[test]
    fn test_structural_errors() {
        let cases = [
            ("cols=2\nrows=2\n", "Missing rows/cols headers"),
            ("rows=2\n", "Missing rows/cols headers"),
            ("", "Missing rows/cols headers"),
            ("\nrows=2\ncols=2", "Missing rows/cols headers"),
            ("rows=2\ncols=2\n0,0,1", "Invalid line format: 0,0,1"),
            ("rows=2\ncols=2\n(1,2)", "Expected 3 elements per entry: (1,2)"),
        ];

        for (text, message) in cases {
            let result: Result<SparseMatrix> = parse_matrix(text);
            assert_eq!(
                result,
                Err(SpmatError::InvalidFormat(message.into())),
                "input: {text:?}"
            );
        }
    }

    #[test]
    fn test_numeric_errors() {
        let cases = [
            "rows=abc\ncols=2",
            "rows=2\ncols=2.5",
            "rows=2\ncols=2\n(0,0,x)",
            "rows=2\ncols=2\n(0,-1,4)",
            "rows=2\ncols=2\n(0,0,99999999999999999999)",
        ];

        for text in cases {
            let result: Result<SparseMatrix> = parse_matrix(text);
            let err = result.unwrap_err();
            assert_eq!(err, SpmatError::WrongFormat, "input: {text:?}");
            assert_eq!(err.category(), ErrorCategory::Format);
        }
    }

    #[test]
    fn test_first_error_wins() {
        // Structural error on line 3 is reported before the numeric one on line 4
        let text = "rows=2\ncols=2\n(0,0)\n(x,0,1)";
        let result: Result<SparseMatrix> = parse_matrix(text);
        assert_eq!(
            result,
            Err(SpmatError::InvalidFormat(
                "Expected 3 elements per entry: (0,0)".into()
            ))
        );
    }

    #[test]
    fn test_bounds_check() {
        let text = "rows=2\ncols=2\n(0,0,1)\n(2,0,5)";

        let result: Result<SparseMatrix> = parse_matrix(text);
        assert_eq!(
            result,
            Err(SpmatError::InvalidFormat(
                "Entry out of bounds for 2x2 matrix: (2,0,5)".into()
            ))
        );

        let lenient: SparseMatrix =
            parse_matrix_with_config(text, &ParseConfig::lenient()).unwrap();
        assert_eq!(lenient.triplets(), vec![(0, 0, 1), (2, 0, 5)]);
        // Out-of-shape entries are stored but never rendered
        assert_eq!(lenient.render(), vec!["1 0", "0 0"]);
    }

    #[test]
    fn test_config_builder() {
        assert!(ParseConfig::default().bounds_check);
        assert_eq!(
            ParseConfig::default().with_bounds_check(false),
            ParseConfig::lenient()
        );
    }

    #[test]
    fn test_parse_lines_from_iterator() {
        let lines = ["rows=1", "cols=2", "(0,1,7)"];
        let matrix: SparseMatrix<i32> =
            parse_lines(lines.iter().copied(), &ParseConfig::default()).unwrap();
        assert_eq!(matrix.get_element(0, 1), 7);
    }
}
