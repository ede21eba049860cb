use tracing::trace;

use crate::{
    ast::ast::{BinaryOp, Node},
    errors::errors::ErrorImpl,
    lexer::{source::TokenSource, tokens::TokenKind},
};

use super::parser::Parser;

/// Expr := LogicExpr [ '=' Expr ]
///
/// Assignment is right-associative: `a = b = 3` is `a = (b = 3)`.
pub fn parse_expr<S: TokenSource>(parser: &mut Parser<S>) -> Option<Node> {
    parser.descend(assignment_expr)
}

fn assignment_expr<S: TokenSource>(parser: &mut Parser<S>) -> Option<Node> {
    trace!("parsing expression");
    let target = parse_logic_expr(parser)?;

    let token = parser.next();
    if token != TokenKind::Assign {
        parser.push_back(token);
        return Some(target);
    }

    let value = parse_expr(parser)?;

    Some(Node::Assignment {
        line: token.line,
        target: Box::new(target),
        value: Box::new(value),
    })
}

/// LogicExpr := CompareExpr [ ('&&' | '||') LogicExpr ]
///
/// Chains group to the right, so `a && b || c` is `a && (b || c)`.
pub fn parse_logic_expr<S: TokenSource>(parser: &mut Parser<S>) -> Option<Node> {
    parser.descend(logic_expr)
}

fn logic_expr<S: TokenSource>(parser: &mut Parser<S>) -> Option<Node> {
    trace!("parsing logic expression");
    let left = parse_compare_expr(parser)?;

    let token = parser.next();
    let Some(op) = BinaryOp::logic(token.kind) else {
        parser.push_back(token);
        return Some(left);
    };

    let right = parse_logic_expr(parser)?;
    Some(Node::binary(token.line, op, left, right))
}

/// CompareExpr := AddExpr [ ('==' | '!=' | '>' | '>=' | '<' | '<=') CompareExpr ]
///
/// Chains group to the right, so `a < b < c` is `a < (b < c)`.
pub fn parse_compare_expr<S: TokenSource>(parser: &mut Parser<S>) -> Option<Node> {
    parser.descend(compare_expr)
}

fn compare_expr<S: TokenSource>(parser: &mut Parser<S>) -> Option<Node> {
    trace!("parsing compare expression");
    let left = parse_add_expr(parser)?;

    let token = parser.next();
    let Some(op) = BinaryOp::compare(token.kind) else {
        parser.push_back(token);
        return Some(left);
    };

    let right = parse_compare_expr(parser)?;
    Some(Node::binary(token.line, op, left, right))
}

/// AddExpr := MulExpr { ('+' | '-') MulExpr }, folded to the left.
pub fn parse_add_expr<S: TokenSource>(parser: &mut Parser<S>) -> Option<Node> {
    trace!("parsing add expression");
    let mut left = parse_mul_expr(parser)?;

    loop {
        let token = parser.next();
        let Some(op) = BinaryOp::additive(token.kind) else {
            parser.push_back(token);
            return Some(left);
        };

        let right = parse_mul_expr(parser)?;
        left = Node::binary(token.line, op, left, right);
    }
}

/// MulExpr := Factor { ('*' | '/') Factor }, folded to the left.
pub fn parse_mul_expr<S: TokenSource>(parser: &mut Parser<S>) -> Option<Node> {
    trace!("parsing mul expression");
    let mut left = parse_factor(parser)?;

    loop {
        let token = parser.next();
        let Some(op) = BinaryOp::multiplicative(token.kind) else {
            parser.push_back(token);
            return Some(left);
        };

        let right = parse_factor(parser)?;
        left = Node::binary(token.line, op, left, right);
    }
}

/// Factor := [ '-' ] Primary
///
/// A leading minus becomes `-1 * Primary`; there is no negation node.
pub fn parse_factor<S: TokenSource>(parser: &mut Parser<S>) -> Option<Node> {
    trace!("parsing factor");
    let token = parser.next();

    let minus_line = if token == TokenKind::Minus {
        Some(token.line)
    } else {
        parser.push_back(token);
        None
    };

    let before = parser.error_count();
    let Some(primary) = parse_primary(parser) else {
        parser.report_unless_reported(before, ErrorImpl::MissingPrimary);
        return None;
    };

    match minus_line {
        Some(line) => Some(Node::binary(
            line,
            BinaryOp::Times,
            Node::IConst { line, value: -1 },
            primary,
        )),
        None => Some(primary),
    }
}

/// Primary := IDENT | ICONST | SCONST | 'true' | 'false' | '(' Expr ')'
///
/// A token that cannot start a primary is consumed, not pushed back, and the
/// rule fails without reporting; the caller explains the failure.
pub fn parse_primary<S: TokenSource>(parser: &mut Parser<S>) -> Option<Node> {
    trace!("parsing primary");
    let token = parser.next();

    match token.kind {
        TokenKind::Ident => {
            parser.record_identifier(&token.value);
            Some(Node::Ident {
                line: token.line,
                name: token.value,
            })
        }
        TokenKind::IConst => match token.value.parse::<i64>() {
            Ok(value) => Some(Node::IConst {
                line: token.line,
                value,
            }),
            Err(_) => {
                parser.report(ErrorImpl::IntegerOutOfRange { token: token.value });
                None
            }
        },
        TokenKind::SConst => Some(Node::SConst {
            line: token.line,
            value: token.value,
        }),
        TokenKind::True => Some(Node::BoolConst {
            line: token.line,
            value: true,
        }),
        TokenKind::False => Some(Node::BoolConst {
            line: token.line,
            value: false,
        }),
        TokenKind::LParen => {
            let inner = parse_expr(parser)?;

            if parser.next() != TokenKind::RParen {
                parser.report(ErrorImpl::MissingCloseParen);
                return None;
            }

            Some(inner)
        }
        TokenKind::Err => {
            parser.report(ErrorImpl::InvalidToken { token: token.value });
            None
        }
        _ => None,
    }
}
