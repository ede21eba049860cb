use std::collections::VecDeque;

use crate::Line;

use super::tokens::{Token, TokenKind};

/// Anything that can hand the parser tokens one at a time.
pub trait TokenSource {
    /// Returns the next token. Once input is exhausted this keeps returning
    /// `Done`.
    fn next_token(&mut self) -> Token;

    /// The line the source is currently positioned on, used to tag
    /// diagnostics.
    fn line(&self) -> Line;
}

/// A token source over tokens that were produced up front.
#[derive(Debug, Clone, Default)]
pub struct TokenList {
    tokens: VecDeque<Token>,
    line: Line,
}

impl TokenList {
    pub fn new(tokens: Vec<Token>) -> Self {
        TokenList {
            tokens: tokens.into(),
            line: 1,
        }
    }
}

impl From<Vec<Token>> for TokenList {
    fn from(tokens: Vec<Token>) -> Self {
        TokenList::new(tokens)
    }
}

impl TokenSource for TokenList {
    fn next_token(&mut self) -> Token {
        match self.tokens.pop_front() {
            Some(token) => {
                self.line = token.line;
                token
            }
            None => Token::new(TokenKind::Done, "", self.line),
        }
    }

    fn line(&self) -> Line {
        self.line
    }
}

/// Wraps a token source with a single slot of pushback.
///
/// This is the only lookahead the grammar gets: a rule reads a token, and if
/// it does not belong to it, hands it back for the next reader.
pub struct TokenStream<S: TokenSource> {
    source: S,
    pushed_back: Option<Token>,
}

impl<S: TokenSource> TokenStream<S> {
    pub fn new(source: S) -> Self {
        TokenStream {
            source,
            pushed_back: None,
        }
    }

    /// Returns the pushed-back token if there is one, otherwise pulls a fresh
    /// token from the underlying source.
    pub fn next(&mut self) -> Token {
        match self.pushed_back.take() {
            Some(token) => token,
            None => self.source.next_token(),
        }
    }

    /// Stores `token` to be returned by the next call to [`TokenStream::next`].
    ///
    /// # Panics
    ///
    /// Panics if a token is already pushed back. Only a broken grammar rule
    /// can do this, so it is not reported as a parse error.
    pub fn push_back(&mut self, token: Token) {
        if let Some(pending) = &self.pushed_back {
            panic!(
                "pushed back {} while {} is still pending; at most one token of lookahead is allowed",
                token, pending
            );
        }

        self.pushed_back = Some(token);
    }

    pub fn has_pushed_back(&self) -> bool {
        self.pushed_back.is_some()
    }

    pub fn line(&self) -> Line {
        self.source.line()
    }

    pub fn into_inner(self) -> S {
        self.source
    }
}
