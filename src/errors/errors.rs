use std::fmt::Display;

use thiserror::Error;

use crate::Line;

/// A single parse diagnostic, tagged with the line it was reported on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
    line: Line,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, line: Line) -> Self {
        Error {
            internal_error: error_impl,
            line,
        }
    }

    pub fn get_line(&self) -> Line {
        self.line
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::InvalidToken { .. } => "InvalidToken",
            ErrorImpl::MissingSemicolon => "MissingSemicolon",
            ErrorImpl::InvalidStatement => "InvalidStatement",
            ErrorImpl::NoStatements => "NoStatements",
            ErrorImpl::MissingThen => "MissingThen",
            ErrorImpl::MissingBranch => "MissingBranch",
            ErrorImpl::MissingPrimary => "MissingPrimary",
            ErrorImpl::MissingCloseParen => "MissingCloseParen",
            ErrorImpl::IntegerOutOfRange { .. } => "IntegerOutOfRange",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::InvalidToken { token } => {
                ErrorTip::Suggestion(format!("Unrecognised input: `{}`", token))
            }
            ErrorImpl::MissingSemicolon => {
                ErrorTip::Suggestion(String::from("Every statement must end with `;`"))
            }
            ErrorImpl::InvalidStatement => ErrorTip::None,
            ErrorImpl::NoStatements => ErrorTip::None,
            ErrorImpl::MissingThen => ErrorTip::Suggestion(String::from(
                "An `if` condition must be followed by `then`",
            )),
            ErrorImpl::MissingBranch => ErrorTip::Suggestion(String::from(
                "Expected a statement after `then`",
            )),
            ErrorImpl::MissingPrimary => ErrorTip::Suggestion(String::from(
                "Expected an identifier, a constant or a parenthesised expression",
            )),
            ErrorImpl::MissingCloseParen => {
                ErrorTip::Suggestion(String::from("Did you forget a `)`?"))
            }
            ErrorImpl::IntegerOutOfRange { token } => ErrorTip::Suggestion(format!(
                "Invalid integer: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "Nesting is limited to {} levels",
                limit
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.line, self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("Invalid token")]
    InvalidToken { token: String },
    #[error("Missing semicolon")]
    MissingSemicolon,
    #[error("Invalid statement")]
    InvalidStatement,
    #[error("No statements in program")]
    NoStatements,
    #[error("Missing THEN after if condition")]
    MissingThen,
    #[error("Missing statement after THEN")]
    MissingBranch,
    #[error("Missing primary")]
    MissingPrimary,
    #[error("Missing right parenthesis")]
    MissingCloseParen,
    #[error("Integer constant out of range: {token}")]
    IntegerOutOfRange { token: String },
    #[error("Nesting too deep (limit {limit})")]
    NestingTooDeep { limit: usize },
}

/// Returned in place of a tree when a parse reported any error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("parse failed with {} error(s)", .errors.len())]
pub struct ParseFailure {
    pub errors: Vec<Error>,
}

impl ParseFailure {
    pub fn count(&self) -> usize {
        self.errors.len()
    }
}
