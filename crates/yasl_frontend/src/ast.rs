use std::fmt;

use yasl_diagnostic::span::Span;

use crate::{Node, NodeCopy};

#[derive(Node!)]
pub struct Program {
    pub name: Ident,
    pub block: Block,
    pub span: Span,
}

#[derive(Node!)]
pub struct Block {
    pub consts: Vec<ConstDecl>,
    pub stmts: Vec<Stmt>,
    pub span: Span,
}

#[derive(Node!)]
pub struct ConstDecl {
    pub name: Ident,
    pub value: i64,
    pub span: Span,
}

#[derive(Node!)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

#[derive(Node!)]
pub enum StmtKind {
    Print(Expr),
}

#[derive(Node!)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Self { kind, span }
    }
}

#[derive(Node!)]
pub enum ExprKind {
    Literal(i64),
    Var(Ident),

    BinOp {
        op: BinOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

#[derive(NodeCopy!)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl BinOp {
    pub fn as_str(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "div",
            BinOp::Mod => "mod",
        }
    }
}

#[derive(Node!)]
pub struct Ident {
    pub name: String,
    pub span: Span,
}

/// Equality that ignores spans, for comparing trees parsed from differently
/// formatted sources.
pub trait SameStructure {
    fn same_structure(&self, other: &Self) -> bool;
}

impl<T: SameStructure> SameStructure for [T] {
    fn same_structure(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.same_structure(b))
    }
}

impl SameStructure for Program {
    fn same_structure(&self, other: &Self) -> bool {
        self.name.same_structure(&other.name) && self.block.same_structure(&other.block)
    }
}

impl SameStructure for Block {
    fn same_structure(&self, other: &Self) -> bool {
        self.consts.same_structure(&other.consts) && self.stmts.same_structure(&other.stmts)
    }
}

impl SameStructure for ConstDecl {
    fn same_structure(&self, other: &Self) -> bool {
        self.name.same_structure(&other.name) && self.value == other.value
    }
}

impl SameStructure for Stmt {
    fn same_structure(&self, other: &Self) -> bool {
        match (&self.kind, &other.kind) {
            (StmtKind::Print(a), StmtKind::Print(b)) => a.same_structure(b),
        }
    }
}

impl SameStructure for Expr {
    fn same_structure(&self, other: &Self) -> bool {
        match (&self.kind, &other.kind) {
            (ExprKind::Literal(a), ExprKind::Literal(b)) => a == b,
            (ExprKind::Var(a), ExprKind::Var(b)) => a.same_structure(b),
            (
                ExprKind::BinOp { op, lhs, rhs },
                ExprKind::BinOp {
                    op: other_op,
                    lhs: other_lhs,
                    rhs: other_rhs,
                },
            ) => op == other_op && lhs.same_structure(other_lhs) && rhs.same_structure(other_rhs),
            _ => false,
        }
    }
}

impl SameStructure for Ident {
    fn same_structure(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

// Canonical source form. Expressions are fully parenthesized so that the
// printed text re-parses to the same tree.

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "program {};", self.name)?;
        write!(f, "{}.", self.block)
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for decl in &self.consts {
            writeln!(f, "{decl}")?;
        }

        writeln!(f, "begin")?;
        for stmt in &self.stmts {
            writeln!(f, "  {stmt}")?;
        }
        write!(f, "end")
    }
}

impl fmt::Display for ConstDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "const {} = {};", self.name, self.value)
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            StmtKind::Print(expr) => write!(f, "print {expr};"),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExprKind::Literal(n) => write!(f, "{n}"),
            ExprKind::Var(ident) => write!(f, "{ident}"),
            ExprKind::BinOp { op, lhs, rhs } => write!(f, "({lhs} {} {rhs})", op.as_str()),
        }
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
