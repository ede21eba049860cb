use std::fmt::Display;

use crate::{lexer::tokens::TokenKind, Line};

/// Binary operators, grouped by the precedence level that builds them.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum BinaryOp {
    // Logic
    LogicAnd,
    LogicOr,

    // Compare
    Eq,
    NotEq,
    Greater,
    GreaterEq,
    Less,
    LessEq,

    // Add
    Plus,
    Minus,

    // Mul
    Times,
    Divide,
}

impl BinaryOp {
    pub fn logic(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::LogicAnd => Some(BinaryOp::LogicAnd),
            TokenKind::LogicOr => Some(BinaryOp::LogicOr),
            _ => None,
        }
    }

    pub fn compare(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Eq => Some(BinaryOp::Eq),
            TokenKind::NotEq => Some(BinaryOp::NotEq),
            TokenKind::Greater => Some(BinaryOp::Greater),
            TokenKind::GreaterEq => Some(BinaryOp::GreaterEq),
            TokenKind::Less => Some(BinaryOp::Less),
            TokenKind::LessEq => Some(BinaryOp::LessEq),
            _ => None,
        }
    }

    pub fn additive(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(BinaryOp::Plus),
            TokenKind::Minus => Some(BinaryOp::Minus),
            _ => None,
        }
    }

    pub fn multiplicative(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Star => Some(BinaryOp::Times),
            TokenKind::Slash => Some(BinaryOp::Divide),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::LogicAnd => "&&",
            BinaryOp::LogicOr => "||",
            BinaryOp::Eq => "==",
            BinaryOp::NotEq => "!=",
            BinaryOp::Greater => ">",
            BinaryOp::GreaterEq => ">=",
            BinaryOp::Less => "<",
            BinaryOp::LessEq => "<=",
            BinaryOp::Plus => "+",
            BinaryOp::Minus => "-",
            BinaryOp::Times => "*",
            BinaryOp::Divide => "/",
        }
    }
}

impl Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A parse tree node.
///
/// Every node records the line of the token that defined it. Children are
/// owned outright; a node is built once by the rule that recognises it and
/// never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    StmtList {
        line: Line,
        stmts: Vec<Node>,
    },
    IfStatement {
        line: Line,
        condition: Box<Node>,
        branch: Box<Node>,
    },
    PrintStatement {
        line: Line,
        expr: Box<Node>,
    },
    /// The target is whatever expression appeared left of `=`; assignability
    /// is left to later stages.
    Assignment {
        line: Line,
        target: Box<Node>,
        value: Box<Node>,
    },
    Binary {
        line: Line,
        op: BinaryOp,
        left: Box<Node>,
        right: Box<Node>,
    },
    Ident {
        line: Line,
        name: String,
    },
    IConst {
        line: Line,
        value: i64,
    },
    SConst {
        line: Line,
        value: String,
    },
    BoolConst {
        line: Line,
        value: bool,
    },
}

impl Node {
    pub fn binary(line: Line, op: BinaryOp, left: Node, right: Node) -> Node {
        Node::Binary {
            line,
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn line(&self) -> Line {
        match self {
            Node::StmtList { line, .. }
            | Node::IfStatement { line, .. }
            | Node::PrintStatement { line, .. }
            | Node::Assignment { line, .. }
            | Node::Binary { line, .. }
            | Node::Ident { line, .. }
            | Node::IConst { line, .. }
            | Node::SConst { line, .. }
            | Node::BoolConst { line, .. } => *line,
        }
    }

    /// The statements of a statement list, in source order. Empty for any
    /// other node.
    pub fn statements(&self) -> &[Node] {
        match self {
            Node::StmtList { stmts, .. } => stmts.as_slice(),
            _ => &[],
        }
    }
}

// Binary and assignment nodes are always wrapped in parentheses so the
// grouping the parser chose is visible and re-parses to the same tree shape.
impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Node::StmtList { stmts, .. } => {
                for stmt in stmts {
                    writeln!(f, "{};", stmt)?;
                }
                Ok(())
            }
            Node::IfStatement {
                condition, branch, ..
            } => write!(f, "if {} then {}", condition, branch),
            Node::PrintStatement { expr, .. } => write!(f, "print {}", expr),
            Node::Assignment { target, value, .. } => write!(f, "({} = {})", target, value),
            Node::Binary {
                op, left, right, ..
            } => write!(f, "({} {} {})", left, op, right),
            Node::Ident { name, .. } => write!(f, "{}", name),
            Node::IConst { value, .. } => write!(f, "{}", value),
            Node::SConst { value, .. } => write!(f, "{:?}", value),
            Node::BoolConst { value, .. } => write!(f, "{}", value),
        }
    }
}
