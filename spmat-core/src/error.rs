//! Error types for SPMAT operations

use alloc::string::String;
use core::fmt;
use thiserror::Error;

/// Arithmetic operation that produced an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
}

impl Operation {
    /// Operator symbol used when printing results
    pub const fn symbol(self) -> &'static str {
        match self {
            Operation::Addition => "+",
            Operation::Subtraction => "-",
            Operation::Multiplication => "*",
        }
    }

    /// Message reported when operand shapes are incompatible
    pub const fn mismatch_message(self) -> &'static str {
        match self {
            Operation::Addition => "Matrix dimensions must match for addition.",
            Operation::Subtraction => "Matrix dimensions must match for subtraction.",
            Operation::Multiplication => "Matrix dimensions mismatch for multiplication.",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Addition => "addition",
            Operation::Subtraction => "subtraction",
            Operation::Multiplication => "multiplication",
        };
        write!(f, "{name}")
    }
}

/// Errors that can occur while parsing or combining sparse matrices
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpmatError {
    /// Structural violation of the text format (headers, parentheses, field count)
    #[error("{0}")]
    InvalidFormat(String),
    /// A header or entry field is not an integer
    #[error("Input file has wrong format")]
    WrongFormat,
    /// Operand shapes are incompatible for the requested operation
    #[error("{}", .operation.mismatch_message())]
    DimensionMismatch {
        operation: Operation,
        left: (usize, usize),
        right: (usize, usize),
    },
    /// A checked mutation targeted a coordinate outside the matrix
    #[error("Index ({row}, {col}) out of bounds for {rows}x{cols} matrix")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    /// Fixed-width integer overflow during arithmetic
    #[error("Integer overflow during {operation}")]
    Overflow { operation: Operation },
}

/// Coarse grouping of [`SpmatError`] variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Format,
    Dimension,
    Bounds,
    Arithmetic,
}

impl SpmatError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SpmatError::InvalidFormat(_) | SpmatError::WrongFormat => ErrorCategory::Format,
            SpmatError::DimensionMismatch { .. } => ErrorCategory::Dimension,
            SpmatError::IndexOutOfBounds { .. } => ErrorCategory::Bounds,
            SpmatError::Overflow { .. } => ErrorCategory::Arithmetic,
        }
    }

    pub(crate) fn invalid_format(message: impl Into<String>) -> Self {
        SpmatError::InvalidFormat(message.into())
    }
}

/// Result type for SPMAT operations
pub type Result<T> = core::result::Result<T, SpmatError>;
