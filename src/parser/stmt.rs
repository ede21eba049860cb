use tracing::trace;

use crate::{
    ast::ast::Node,
    errors::errors::ErrorImpl,
    lexer::{source::TokenSource, tokens::TokenKind},
};

use super::{expr::parse_expr, parser::Parser};

/// Program := StatementList
pub fn parse_program<S: TokenSource>(parser: &mut Parser<S>) -> Option<Node> {
    let list = parse_stmt_list(parser);

    if list.is_none() {
        parser.report(ErrorImpl::NoStatements);
    }

    list
}

/// StatementList := Statement ';' [ StatementList ]
///
/// The list ends quietly when no further statement starts. A statement without
/// its semicolon ends the list with an error; the statements before it are
/// kept, matching the tail-recursive form where only the innermost list fails.
pub fn parse_stmt_list<S: TokenSource>(parser: &mut Parser<S>) -> Option<Node> {
    trace!("parsing statement list");
    let mut stmts = vec![];

    while let Some(stmt) = parse_stmt(parser) {
        if parser.next() != TokenKind::Semicolon {
            parser.report(ErrorImpl::MissingSemicolon);
            break;
        }

        stmts.push(stmt);
    }

    let line = stmts.first()?.line();
    Some(Node::StmtList { line, stmts })
}

pub fn parse_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Option<Node> {
    parser.descend(stmt)
}

// Statement := 'if' IfStmt | 'print' PrintStmt | Expr
fn stmt<S: TokenSource>(parser: &mut Parser<S>) -> Option<Node> {
    trace!("parsing statement");
    let token = parser.next();

    match token.kind {
        TokenKind::If => parse_if_stmt(parser),
        TokenKind::Print => parse_print_stmt(parser),
        TokenKind::Done => None,
        TokenKind::Err => {
            parser.report(ErrorImpl::InvalidToken { token: token.value });
            None
        }
        _ => {
            parser.push_back(token);
            let expr = parse_expr(parser);

            if expr.is_none() {
                parser.report(ErrorImpl::InvalidStatement);
            }

            expr
        }
    }
}

/// IfStmt := Expr 'then' Statement, with `if` already consumed.
///
/// The node takes its line from the `then` token.
pub fn parse_if_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Option<Node> {
    trace!("parsing if statement");
    let condition = parse_expr(parser)?;

    let then = parser.next();
    if then != TokenKind::Then {
        parser.report(ErrorImpl::MissingThen);
        return None;
    }

    let before = parser.error_count();
    let Some(branch) = parse_stmt(parser) else {
        parser.report_unless_reported(before, ErrorImpl::MissingBranch);
        return None;
    };

    Some(Node::IfStatement {
        line: then.line,
        condition: Box::new(condition),
        branch: Box::new(branch),
    })
}

/// PrintStmt := Expr, with `print` already consumed.
pub fn parse_print_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Option<Node> {
    trace!("parsing print statement");
    let expr = parse_expr(parser)?;

    Some(Node::PrintStatement {
        line: expr.line(),
        expr: Box::new(expr),
    })
}
