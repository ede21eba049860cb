//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source text using anchored regex patterns
//! - Recognition of keywords, identifiers, literals, and operators
//! - Line tracking for diagnostics
//! - Comments and whitespace handling
//!
//! It also provides the `TokenSource` abstraction the parser reads from and
//! the one-token pushback stream layered on top of it.

pub mod lexer;
pub mod source;
pub mod tokens;
