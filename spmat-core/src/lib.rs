#![no_std]

//! SPMAT Core - Sparse integer matrices
//!
//! This crate provides the sparse matrix data structure, its arithmetic
//! operators and the parser for the plain-text matrix format. It performs
//! no I/O; reading files lives in the `spmat` crate.
//!
//! ```rust
//! use spmat_core::{parse_matrix, SparseMatrix};
//!
//! let a: SparseMatrix = parse_matrix("rows=2\ncols=2\n(0,0,1)\n(1,1,2)").unwrap();
//! let b: SparseMatrix = parse_matrix("rows=2\ncols=2\n(0,1,3)").unwrap();
//!
//! let product = a.multiply(&b).unwrap();
//! assert_eq!(product.render(), ["0 3", "0 0"]);
//! ```

extern crate alloc;

pub mod error;
pub mod format;
pub mod matrix;
pub mod ops;
pub mod parser;
pub mod traits;
pub mod validation;

pub use error::*;
pub use matrix::SparseMatrix;
pub use ops::{add, multiply, subtract};
pub use parser::{parse_lines, parse_matrix, parse_matrix_with_config, ParseConfig};
pub use traits::{MatrixElement, MatrixOperations, SparseStorage, WideInt};
pub use validation::{in_bounds, validate_index};
