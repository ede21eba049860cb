//! Error types and error reporting for the parser.
//!
//! This module defines:
//!
//! - Error structures tagged with the source line
//! - Specific error variants for lexical and structural problems
//! - The reporter that accumulates errors during a parse
//! - Error formatting and suggestions

pub mod errors;
pub mod reporter;
