//! SPMAT - Sparse integer matrix arithmetic
//!
//! This library loads sparse matrices from plain-text description files and
//! combines them with addition, subtraction and multiplication.
//!
//! ## Architecture
//!
//! - **spmat-core**: Matrix storage, arithmetic, text format parsing (no I/O)
//! - **spmat**: File loading and the `spmat` command-line tool
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use spmat::{LoadError, MatrixFile, SparseMatrix};
//!
//! fn example() -> Result<(), LoadError> {
//!     let a: SparseMatrix = MatrixFile::read_matrix("a.txt")?;
//!     let b: SparseMatrix = MatrixFile::read_matrix("b.txt")?;
//!
//!     for line in a.multiply(&b)?.render() {
//!         println!("{line}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## File Format
//!
//! ```text
//! rows=3
//! cols=3
//! (0,0,1)
//! (2,1,-4)
//! ```

// Re-export core abstractions
pub use spmat_core::{
    // Matrix and arithmetic
    add, multiply, subtract, SparseMatrix,
    // Traits
    MatrixElement, MatrixOperations, SparseStorage,
    // Parsing
    parse_matrix, parse_matrix_with_config, ParseConfig,
    // Error handling
    ErrorCategory, Operation, Result, SpmatError,
};

pub mod file_io;

pub use file_io::{LoadError, MatrixFile};
