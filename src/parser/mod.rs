//! Parser module for building the parse tree.
//!
//! This module contains a recursive-descent parser with one function per
//! grammar rule. Lookahead is limited to a single pushed-back token.
//!
//! Precedence, loosest first:
//!
//! - Assignment `=` (right-associative)
//! - Logic `&&`, `||` (right-chaining)
//! - Compare `==`, `!=`, `>`, `>=`, `<`, `<=` (right-chaining)
//! - Add `+`, `-` (left-associative)
//! - Mul `*`, `/` (left-associative)
//! - Unary minus, encoded as `-1 * operand`
//!
//! Errors are collected rather than returned: each rule reports what it
//! finds and yields no node, and the whole parse only succeeds if nothing
//! was reported.

pub mod config;
pub mod expr;
pub mod parser;
pub mod stmt;

#[cfg(test)]
mod tests;
