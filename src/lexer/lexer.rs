use lazy_static::lazy_static;
use regex::Regex;

use crate::{Line, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::{
    source::TokenSource,
    tokens::{Token, TokenKind, RESERVED_LOOKUP},
};

pub type RegexHandler = fn(&mut Lexer, &str) -> Token;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

// Every pattern is anchored at the start of the remaining input. Longer
// operators come before their single-character prefixes.
lazy_static! {
    static ref TRIVIA: Vec<Regex> = vec![
        Regex::new(r"^\s+").unwrap(),
        Regex::new(r"^//[^\n]*").unwrap(),
    ];
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new(r"^[0-9]+").unwrap(), handler: integer_handler },
        RegexPattern { regex: Regex::new(r#"^"(\\.|[^"\\\n])*""#).unwrap(), handler: string_handler },
        RegexPattern { regex: Regex::new(r#"^"[^\n]*"#).unwrap(), handler: unterminated_string_handler },
        RegexPattern { regex: Regex::new(r"^==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Eq, "==") },
        RegexPattern { regex: Regex::new(r"^!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEq, "!=") },
        RegexPattern { regex: Regex::new(r"^>=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::GreaterEq, ">=") },
        RegexPattern { regex: Regex::new(r"^<=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LessEq, "<=") },
        RegexPattern { regex: Regex::new(r"^&&").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LogicAnd, "&&") },
        RegexPattern { regex: Regex::new(r"^\|\|").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LogicOr, "||") },
        RegexPattern { regex: Regex::new(r"^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assign, "=") },
        RegexPattern { regex: Regex::new(r"^>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater, ">") },
        RegexPattern { regex: Regex::new(r"^<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Less, "<") },
        RegexPattern { regex: Regex::new(r"^\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
        RegexPattern { regex: Regex::new(r"^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Minus, "-") },
        RegexPattern { regex: Regex::new(r"^\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*") },
        RegexPattern { regex: Regex::new(r"^/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
        RegexPattern { regex: Regex::new(r"^\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LParen, "(") },
        RegexPattern { regex: Regex::new(r"^\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::RParen, ")") },
        RegexPattern { regex: Regex::new(r"^;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";") },
    ];
}

/// Pulls tokens out of a source string one at a time, tracking the current
/// line as it goes.
pub struct Lexer {
    source: String,
    pos: usize,
    pub line: Line,
}

impl Lexer {
    pub fn new(source: impl Into<String>) -> Lexer {
        Lexer {
            source: source.into(),
            pos: 0,
            line: 1,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Skips whitespace and comments, counting the newlines passed over.
    fn skip_trivia(&mut self) {
        loop {
            let skipped = TRIVIA
                .iter()
                .find_map(|regex| regex.find(self.remainder()).map(|m| m.as_str().to_string()));

            match skipped {
                Some(text) => {
                    self.line += text.matches('\n').count() as Line;
                    self.advance_n(text.len());
                }
                None => break,
            }
        }
    }

    pub fn lex_token(&mut self) -> Token {
        self.skip_trivia();

        if self.at_eof() {
            return MK_TOKEN!(TokenKind::Done, String::new(), self.line);
        }

        let found = PATTERNS.iter().find_map(|pattern| {
            pattern
                .regex
                .find(self.remainder())
                .map(|m| (pattern.handler, m.as_str().to_string()))
        });

        if let Some((handler, matched)) = found {
            return handler(self, &matched);
        }

        let bad: String = self.remainder().chars().take(1).collect();
        self.advance_n(bad.len());
        MK_TOKEN!(TokenKind::Err, bad, self.line)
    }
}

impl TokenSource for Lexer {
    fn next_token(&mut self) -> Token {
        self.lex_token()
    }

    fn line(&self) -> Line {
        self.line
    }
}

fn integer_handler(lexer: &mut Lexer, matched: &str) -> Token {
    lexer.advance_n(matched.len());
    MK_TOKEN!(TokenKind::IConst, matched.to_string(), lexer.line)
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) -> Token {
    lexer.advance_n(matched.len());

    let kind = RESERVED_LOOKUP
        .get(matched)
        .copied()
        .unwrap_or(TokenKind::Ident);

    MK_TOKEN!(kind, matched.to_string(), lexer.line)
}

fn string_handler(lexer: &mut Lexer, matched: &str) -> Token {
    lexer.advance_n(matched.len());

    let body = &matched[1..matched.len() - 1];
    let mut result = String::new();
    let mut chars = body.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }

        match chars.next() {
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some('\\') => result.push('\\'),
            Some('"') => result.push('"'),
            Some(other) => {
                // Unknown escapes are kept verbatim
                result.push('\\');
                result.push(other);
            }
            None => result.push('\\'),
        }
    }

    MK_TOKEN!(TokenKind::SConst, result, lexer.line)
}

fn unterminated_string_handler(lexer: &mut Lexer, matched: &str) -> Token {
    lexer.advance_n(matched.len());
    MK_TOKEN!(TokenKind::Err, matched.to_string(), lexer.line)
}

/// Lexes the whole input, up to and including the `Done` token.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lex = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lex.lex_token();
        let done = token == TokenKind::Done;
        tokens.push(token);

        if done {
            return tokens;
        }
    }
}
