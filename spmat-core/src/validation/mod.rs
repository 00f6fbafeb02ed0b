//! Validation utilities for the SPMAT text format
//!
//! Pure functions with no I/O dependencies: coordinate bounds checks and
//! line-level parsing.

pub mod bounds;
pub mod parsing;

pub use bounds::{in_bounds, validate_index};
pub use parsing::{parse_entry, parse_header, parse_integer};
