//! Abstract interfaces for SPMAT
//!
//! Traits are pure interfaces; the concrete map-backed matrix lives in
//! [`crate::matrix`].

pub mod element;
pub mod matrix;

pub use element::{MatrixElement, WideInt};
pub use matrix::{MatrixOperations, SparseStorage};
