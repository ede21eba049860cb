//! Parser state and the top-level entry points.
//!
//! The grammar rules themselves live in `stmt` (statement level) and `expr`
//! (the expression precedence chain). They are plain functions that share
//! one `Parser` value, which holds everything that outlives a single rule:
//!
//! - The token stream with its one-token pushback slot
//! - The error reporter
//! - The identifier usage table
//! - The current nesting depth

use std::collections::HashMap;

use tracing::debug;

use crate::{
    ast::ast::Node,
    errors::{
        errors::{Error, ErrorImpl, ParseFailure},
        reporter::ErrorReporter,
    },
    lexer::{
        source::{TokenSource, TokenStream},
        tokens::Token,
    },
    Line,
};

use super::{config::ParserConfig, stmt::parse_program};

pub type Rule<S> = fn(&mut Parser<S>) -> Option<Node>;

pub struct Parser<S: TokenSource> {
    /// Tokens still to be read, plus at most one pushed back
    tokens: TokenStream<S>,
    /// Every error reported so far in this parse
    errors: ErrorReporter,
    /// How many times each identifier was used as a primary
    identifiers: HashMap<String, usize>,
    config: ParserConfig,
    depth: usize,
}

impl<S: TokenSource> Parser<S> {
    pub fn new(source: S, config: ParserConfig) -> Self {
        Parser {
            tokens: TokenStream::new(source),
            errors: ErrorReporter::new(config.echo_diagnostics),
            identifiers: HashMap::new(),
            config,
            depth: 0,
        }
    }

    pub fn next(&mut self) -> Token {
        self.tokens.next()
    }

    pub fn push_back(&mut self, token: Token) {
        self.tokens.push_back(token);
    }

    /// The line the token source is currently on.
    pub fn line(&self) -> Line {
        self.tokens.line()
    }

    pub fn report(&mut self, error: ErrorImpl) {
        let line = self.line();
        self.errors.report(line, error);
    }

    /// Reports `error` only if nothing was reported since `before` was taken
    /// from [`Parser::error_count`]. Used when a sub-rule failed and may or may
    /// not have explained why.
    pub fn report_unless_reported(&mut self, before: usize, error: ErrorImpl) {
        if self.errors.count() == before {
            self.report(error);
        }
    }

    pub fn error_count(&self) -> usize {
        self.errors.count()
    }

    pub fn errors(&self) -> &[Error] {
        self.errors.errors()
    }

    pub fn record_identifier(&mut self, name: &str) {
        *self.identifiers.entry(name.to_string()).or_insert(0) += 1;
    }

    pub fn identifiers(&self) -> &HashMap<String, usize> {
        &self.identifiers
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Runs `rule` one nesting level deeper, failing with a diagnostic once
    /// the configured depth is reached.
    pub fn descend(&mut self, rule: Rule<S>) -> Option<Node> {
        if self.depth >= self.config.max_depth {
            self.report(ErrorImpl::NestingTooDeep {
                limit: self.config.max_depth,
            });
            return None;
        }

        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;

        result
    }

    pub fn into_source(self) -> S {
        self.tokens.into_inner()
    }
}

/// Parses a whole program from `source`.
///
/// Returns the parser (for its identifier table and diagnostics) alongside the
/// outcome. The outcome is only `Ok` when at least one statement was parsed
/// and no error was reported anywhere in the parse, even if a partial tree was
/// built along the way.
pub fn parse<S: TokenSource>(source: S, config: ParserConfig) -> (Parser<S>, Result<Node, ParseFailure>) {
    let mut parser = Parser::new(source, config);
    let program = parse_program(&mut parser);

    let result = match program {
        Some(tree) if parser.error_count() == 0 => Ok(tree),
        _ => Err(ParseFailure {
            errors: parser.errors().to_vec(),
        }),
    };

    debug!(
        errors = parser.error_count(),
        identifiers = parser.identifiers().len(),
        ok = result.is_ok(),
        "parse finished"
    );

    (parser, result)
}

/// Parses a whole program and returns only the outcome.
pub fn prog<S: TokenSource>(source: S, config: ParserConfig) -> Result<Node, ParseFailure> {
    parse(source, config).1
}
