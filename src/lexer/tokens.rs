use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Line;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("if", TokenKind::If);
        map.insert("then", TokenKind::Then);
        map.insert("print", TokenKind::Print);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Ident,
    IConst,
    SConst,
    True,
    False,

    // Reserved
    If,
    Then,
    Print,

    Assign,     // =
    Eq,         // ==
    NotEq,      // !=
    Greater,
    GreaterEq,
    Less,
    LessEq,

    Plus,
    Minus,
    Star,
    Slash,

    LogicAnd,
    LogicOr,

    LParen,
    RParen,
    Semicolon,

    Done,
    Err,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A lexed token.
///
/// `value` holds the lexeme for identifiers and integers, the decoded text for
/// string constants, and the offending text for `Err` tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub line: Line,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.carries_value() {
            write!(f, "{}({})", self.kind, self.value)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}

impl PartialEq<TokenKind> for Token {
    fn eq(&self, other: &TokenKind) -> bool {
        self.kind == *other
    }
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>, line: Line) -> Self {
        Token {
            kind,
            value: value.into(),
            line,
        }
    }

    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    fn carries_value(&self) -> bool {
        self.is_one_of_many(&[
            TokenKind::Ident,
            TokenKind::IConst,
            TokenKind::SConst,
            TokenKind::Err,
        ])
    }
}
