//! Utilities Module - shared helpers
//!
//! Leaf functions the template engine is built on:
//! - `strings`: whitespace normalization and wrap/unwrap helpers
//! - `values`: predicates classifying replacement values

pub mod strings;
pub mod values;

// Re-export the full helper surface
pub use strings::{clean, first_char, last_char, split, unwrap, wrap};
pub use values::{
    constant, display_value, is_defined, is_defined_primitive, is_non_nullable, is_primitive,
};
