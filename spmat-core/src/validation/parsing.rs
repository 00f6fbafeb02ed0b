//! Line-level parsing for the SPMAT text format
//!
//! This module provides pure parsing functions for the individual lines of
//! a matrix description. Assembling lines into a matrix happens in
//! [`crate::parser`].

use alloc::format;
use core::str::FromStr;

use crate::format::{COLS_KEY, ENTRY_CLOSE, ENTRY_FIELDS, ENTRY_OPEN, FIELD_SEPARATOR, ROWS_KEY};
use crate::SpmatError;

/// Parse an integer field, tolerating surrounding whitespace
///
/// Every failure collapses into [`SpmatError::WrongFormat`] regardless of
/// which field or line it came from.
pub fn parse_integer<N: FromStr>(field: &str) -> Result<N, SpmatError> {
    field.trim().parse().map_err(|_| SpmatError::WrongFormat)
}

/// Split the `rows=` and `cols=` header lines into their raw values
///
/// Both prefixes are checked before either value is parsed, so a misordered
/// header is reported as a structural error even when a value is also bad.
pub fn split_header<'a>(
    rows_line: Option<&'a str>,
    cols_line: Option<&'a str>,
) -> Result<(&'a str, &'a str), SpmatError> {
    let rows = rows_line.and_then(|line| line.strip_prefix(ROWS_KEY));
    let cols = cols_line.and_then(|line| line.strip_prefix(COLS_KEY));

    match (rows, cols) {
        (Some(rows), Some(cols)) => Ok((rows, cols)),
        _ => Err(SpmatError::invalid_format("Missing rows/cols headers")),
    }
}

/// Parse the two header lines into `(rows, cols)`
pub fn parse_header(
    rows_line: Option<&str>,
    cols_line: Option<&str>,
) -> Result<(usize, usize), SpmatError> {
    let (rows, cols) = split_header(rows_line, cols_line)?;
    Ok((parse_integer(rows)?, parse_integer(cols)?))
}

/// Parse one `(row,col,value)` entry line
///
/// The line must already be trimmed and non-empty.
pub fn parse_entry<T: FromStr>(line: &str) -> Result<(usize, usize, T), SpmatError> {
    let inner = line
        .strip_prefix(ENTRY_OPEN)
        .and_then(|rest| rest.strip_suffix(ENTRY_CLOSE))
        .ok_or_else(|| SpmatError::invalid_format(format!("Invalid line format: {line}")))?;

    let mut fields = inner.split(FIELD_SEPARATOR);
    let (Some(row), Some(col), Some(value), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(SpmatError::invalid_format(format!(
            "Expected {ENTRY_FIELDS} elements per entry: {line}"
        )));
    };

    Ok((
        parse_integer(row)?,
        parse_integer(col)?,
        parse_integer(value)?,
    ))
}
