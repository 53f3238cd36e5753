//! Utility functions for code generation and URL processing.
//!
//! - [`code_generator`] - Short code generators
//! - [`url_normalizer`] - Long URL sanitization
//! - [`db_error`] - Database error classification

pub mod code_generator;
pub mod db_error;
pub mod url_normalizer;
