#![allow(clippy::module_inception)]

use crate::{
    ast::ast::Node,
    errors::errors::ParseFailure,
    lexer::lexer::Lexer,
    parser::{config::ParserConfig, parser::prog},
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// Source line number, starting at 1.
pub type Line = u32;

/// Lexes and parses a complete program with the default configuration.
///
/// Diagnostics are echoed as they are reported; the returned error carries
/// the same list for callers that want to inspect it.
pub fn parse_source(source: &str) -> Result<Node, ParseFailure> {
    prog(Lexer::new(source), ParserConfig::default())
}

/// Same as [`parse_source`], but with an explicit configuration.
pub fn parse_source_with(source: &str, config: ParserConfig) -> Result<Node, ParseFailure> {
    prog(Lexer::new(source), config)
}
