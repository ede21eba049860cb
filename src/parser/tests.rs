//! Unit tests for the parser module.
//!
//! This module contains tests for:
//! - Precedence and associativity of every operator level
//! - Statement forms (expression, print, if)
//! - Error reporting and the success gate
//! - The identifier usage table
//! - The nesting limit

use crate::{
    ast::ast::{BinaryOp, Node},
    errors::errors::{ErrorImpl, ParseFailure},
    lexer::{
        lexer::Lexer,
        source::TokenList,
        tokens::{Token, TokenKind},
    },
};

use super::{
    config::ParserConfig,
    parser::{parse, prog, Parser},
};

fn parse_quiet(source: &str) -> (Parser<Lexer>, Result<Node, ParseFailure>) {
    parse(Lexer::new(source), ParserConfig::default().quiet())
}

/// Parses a one-statement program and renders that statement.
fn shape(source: &str) -> String {
    let tree = prog(Lexer::new(source), ParserConfig::default().quiet()).unwrap();
    assert_eq!(tree.statements().len(), 1);
    tree.statements()[0].to_string()
}

fn error_kinds(failure: &ParseFailure) -> Vec<ErrorImpl> {
    failure.errors.iter().map(|e| e.get_kind().clone()).collect()
}

#[test]
fn test_parse_multiplication_binds_tighter() {
    assert_eq!(shape("1 + 2 * 3;"), "(1 + (2 * 3))");
    assert_eq!(shape("1 * 2 + 3;"), "((1 * 2) + 3)");
}

#[test]
fn test_parse_additive_is_left_associative() {
    assert_eq!(shape("1 - 2 - 3;"), "((1 - 2) - 3)");
    assert_eq!(shape("1 + 2 - 3 + 4;"), "(((1 + 2) - 3) + 4)");
}

#[test]
fn test_parse_multiplicative_is_left_associative() {
    assert_eq!(shape("8 / 4 / 2;"), "((8 / 4) / 2)");
    assert_eq!(shape("2 * 3 / 4 * 5;"), "(((2 * 3) / 4) * 5)");
}

#[test]
fn test_parse_divide_builds_divide_node() {
    let tree = parse_quiet("a / b;").1.unwrap();

    match &tree.statements()[0] {
        Node::Binary { op, .. } => assert_eq!(*op, BinaryOp::Divide),
        other => panic!("Expected divide node, got {:?}", other),
    }
}

#[test]
fn test_parse_parentheses_override_precedence() {
    assert_eq!(shape("(1 + 2) * 3;"), "((1 + 2) * 3)");
}

#[test]
fn test_parenthesised_rendering_reparses_to_same_tree() {
    for source in ["(1 + 2) * 3;", "1 - 2 - 3 * 4;", "a = b < c && d;", "x * (y / 2);"] {
        let rendered = shape(source);
        assert_eq!(shape(&format!("{};", rendered)), rendered);
    }
}

#[test]
fn test_parse_assignment_is_right_associative() {
    assert_eq!(shape("a = b = 3;"), "(a = (b = 3))");
}

#[test]
fn test_parse_assignment_target_not_validated() {
    assert_eq!(shape("1 + 2 = 3;"), "((1 + 2) = 3)");
}

#[test]
fn test_parse_comparison_chains_to_the_right() {
    assert_eq!(shape("a < b < c;"), "(a < (b < c))");
    assert_eq!(shape("a == b != c;"), "(a == (b != c))");
}

#[test]
fn test_parse_all_comparison_operators() {
    assert_eq!(shape("a == b;"), "(a == b)");
    assert_eq!(shape("a != b;"), "(a != b)");
    assert_eq!(shape("a > b;"), "(a > b)");
    assert_eq!(shape("a >= b;"), "(a >= b)");
    assert_eq!(shape("a < b;"), "(a < b)");
    assert_eq!(shape("a <= b;"), "(a <= b)");
}

#[test]
fn test_parse_logic_chains_to_the_right() {
    assert_eq!(shape("a && b || c;"), "(a && (b || c))");
    assert_eq!(shape("a || b || c;"), "(a || (b || c))");
}

#[test]
fn test_parse_level_ordering() {
    assert_eq!(shape("x = y + 1 > 2 && z;"), "(x = (((y + 1) > 2) && z))");
}

#[test]
fn test_parse_unary_minus_is_multiply_by_minus_one() {
    let tree = parse_quiet("-5;").1.unwrap();

    let expected = Node::binary(
        1,
        BinaryOp::Times,
        Node::IConst { line: 1, value: -1 },
        Node::IConst { line: 1, value: 5 },
    );
    assert_eq!(tree.statements()[0], expected);
}

#[test]
fn test_parse_unary_minus_inside_product() {
    assert_eq!(shape("2 * -3;"), "(2 * (-1 * 3))");
}

#[test]
fn test_parse_literals() {
    let tree = parse_quiet("print \"hi\"; x = true; y = false;").1.unwrap();

    assert_eq!(
        tree.to_string(),
        "print \"hi\";\n(x = true);\n(y = false);\n"
    );
}

#[test]
fn test_parse_multiple_statements() {
    let tree = parse_quiet("x = 1; y = x * (2 + 3); if y > 4 then print y; print \"done\";")
        .1
        .unwrap();

    assert_eq!(tree.statements().len(), 4);
    assert!(matches!(tree.statements()[2], Node::IfStatement { .. }));
}

#[test]
fn test_parse_nested_if() {
    let tree = parse_quiet("if a then if b then print c;").1.unwrap();

    assert_eq!(tree.to_string(), "if a then if b then print c;\n");
}

#[test]
fn test_if_statement_takes_line_of_then() {
    let tree = parse_quiet("if x\n\nthen\nprint 1;").1.unwrap();

    let stmt = &tree.statements()[0];
    assert_eq!(stmt.line(), 3);

    match stmt {
        Node::IfStatement { branch, .. } => assert_eq!(branch.line(), 4),
        other => panic!("Expected if statement, got {:?}", other),
    }
}

#[test]
fn test_node_lines_follow_defining_tokens() {
    let tree = parse_quiet("a =\n b\n + c;").1.unwrap();

    match &tree.statements()[0] {
        Node::Assignment { line, value, .. } => {
            assert_eq!(*line, 1);
            assert_eq!(value.line(), 3);
        }
        other => panic!("Expected assignment, got {:?}", other),
    }
}

#[test]
fn test_missing_semicolon_fails_parse() {
    let (parser, result) = parse_quiet("print 1 print 2;");

    let failure = result.unwrap_err();
    assert_eq!(
        error_kinds(&failure),
        vec![ErrorImpl::MissingSemicolon, ErrorImpl::NoStatements]
    );
    assert_eq!(parser.error_count(), 2);
}

#[test]
fn test_missing_semicolon_after_later_statement() {
    let (_, result) = parse_quiet("print 1;\nprint 2 print 3;");

    let failure = result.unwrap_err();
    assert_eq!(error_kinds(&failure), vec![ErrorImpl::MissingSemicolon]);
    assert_eq!(failure.errors[0].get_line(), 2);
}

#[test]
fn test_empty_program_fails() {
    let (_, result) = parse_quiet("");

    let failure = result.unwrap_err();
    assert_eq!(error_kinds(&failure), vec![ErrorImpl::NoStatements]);
    assert_eq!(failure.errors[0].to_string(), "1: No statements in program");
}

#[test]
fn test_comment_only_program_fails() {
    let (_, result) = parse_quiet("// nothing here\n");

    assert_eq!(error_kinds(&result.unwrap_err()), vec![ErrorImpl::NoStatements]);
}

#[test]
fn test_unbalanced_parenthesis_fails() {
    let (_, result) = parse_quiet("(1 + 2;");

    let kinds = error_kinds(&result.unwrap_err());
    assert_eq!(kinds[0], ErrorImpl::MissingCloseParen);
    // Nothing between the primary and the statement adds its own report
    assert!(!kinds.contains(&ErrorImpl::MissingPrimary));
}

#[test]
fn test_missing_then() {
    let (_, result) = parse_quiet("if x print 1;");

    assert_eq!(error_kinds(&result.unwrap_err())[0], ErrorImpl::MissingThen);
}

#[test]
fn test_missing_branch_after_then() {
    let (_, result) = parse_quiet("if x then");

    assert_eq!(
        error_kinds(&result.unwrap_err()),
        vec![ErrorImpl::MissingBranch, ErrorImpl::NoStatements]
    );
}

#[test]
fn test_invalid_token_at_statement_start() {
    let (_, result) = parse_quiet("print 1;\n@;");

    let failure = result.unwrap_err();
    assert_eq!(
        error_kinds(&failure),
        vec![ErrorImpl::InvalidToken {
            token: "@".to_string()
        }]
    );
    assert_eq!(failure.errors[0].to_string(), "2: Invalid token");
}

#[test]
fn test_invalid_token_inside_expression() {
    let (_, result) = parse_quiet("print 1 + $;");

    assert_eq!(
        error_kinds(&result.unwrap_err()),
        vec![
            ErrorImpl::InvalidToken {
                token: "$".to_string()
            },
            ErrorImpl::NoStatements
        ]
    );
}

#[test]
fn test_invalid_statement() {
    let (_, result) = parse_quiet(";");

    assert_eq!(
        error_kinds(&result.unwrap_err()),
        vec![
            ErrorImpl::MissingPrimary,
            ErrorImpl::InvalidStatement,
            ErrorImpl::NoStatements
        ]
    );
}

#[test]
fn test_failed_later_statement_fails_whole_parse() {
    let (_, result) = parse_quiet("print 1; print ;");

    assert_eq!(error_kinds(&result.unwrap_err()), vec![ErrorImpl::MissingPrimary]);
}

#[test]
fn test_integer_out_of_range() {
    let (_, result) = parse_quiet("x = 99999999999999999999;");

    assert_eq!(
        error_kinds(&result.unwrap_err()),
        vec![
            ErrorImpl::IntegerOutOfRange {
                token: "99999999999999999999".to_string()
            },
            ErrorImpl::InvalidStatement,
            ErrorImpl::NoStatements
        ]
    );
}

#[test]
fn test_identifier_usage_table() {
    let (parser, result) = parse_quiet("a = b + a; print a;");

    assert!(result.is_ok());
    assert_eq!(parser.identifiers().get("a"), Some(&3));
    assert_eq!(parser.identifiers().get("b"), Some(&1));
    assert_eq!(parser.identifiers().get("c"), None);
}

#[test]
fn test_identifier_usage_counted_in_failed_statement() {
    let (parser, result) = parse_quiet("x + ;");

    assert!(result.is_err());
    assert_eq!(parser.identifiers().get("x"), Some(&1));
}

#[test]
fn test_nesting_limit() {
    let config = ParserConfig::default().quiet().with_max_depth(10);
    let (_, result) = parse(Lexer::new("((((((((((1))))))))));"), config);

    let kinds = error_kinds(&result.unwrap_err());
    assert!(kinds.contains(&ErrorImpl::NestingTooDeep { limit: 10 }));
}

#[test]
fn test_default_nesting_limit_allows_reasonable_depth() {
    let source = format!("{}1{};", "(".repeat(50), ")".repeat(50));

    assert_eq!(shape(&source), "1");
}

#[test]
fn test_parse_from_token_list() {
    let tokens = vec![
        Token::new(TokenKind::Ident, "a", 1),
        Token::new(TokenKind::Assign, "=", 1),
        Token::new(TokenKind::IConst, "3", 1),
        Token::new(TokenKind::Semicolon, ";", 1),
        Token::new(TokenKind::Print, "print", 2),
        Token::new(TokenKind::Ident, "a", 2),
        Token::new(TokenKind::Semicolon, ";", 2),
    ];

    let (parser, result) = parse(TokenList::new(tokens), ParserConfig::default().quiet());

    let tree = result.unwrap();
    assert_eq!(tree.to_string(), "(a = 3);\nprint a;\n");
    assert_eq!(tree.statements()[1].line(), 2);
    assert_eq!(parser.identifiers().get("a"), Some(&2));
}

#[test]
fn test_token_list_error_uses_last_line() {
    let tokens = vec![
        Token::new(TokenKind::Print, "print", 5),
        Token::new(TokenKind::IConst, "1", 5),
    ];

    let (_, result) = parse(TokenList::new(tokens), ParserConfig::default().quiet());

    let failure = result.unwrap_err();
    assert_eq!(failure.errors[0].get_kind(), &ErrorImpl::MissingSemicolon);
    assert_eq!(failure.errors[0].get_line(), 5);
}
