#[macro_use]
extern crate macro_rules_attribute;

mod lexer;
mod parser;

pub mod ast;
pub mod token;

pub use lexer::{Lexer, LexerError, LexerErrorKind, LexerResult, TokenIter, TokenSource};
pub use parser::{ParseError, ParseResult, Parser};

use ast::{Expr, Program};
use token::Token;

derive_alias! {
    #[derive(Node!)] = #[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)];
    #[derive(NodeCopy!)] = #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)];
}

/// Lexes a whole source string. The returned list always ends with a single
/// end-of-file token.
#[tracing::instrument(level = "trace", skip_all)]
pub fn tokenize(source: &str) -> LexerResult<Vec<Token>> {
    Lexer::new(source).collect()
}

#[tracing::instrument(level = "trace", skip_all)]
pub fn parse(tokens: impl TokenSource) -> ParseResult<Program> {
    Parser::new(tokens).parse_program()
}

pub fn parse_source(source: &str) -> ParseResult<Program> {
    parse(Lexer::new(source))
}

pub fn parse_expression(source: &str) -> ParseResult<Expr> {
    Parser::new(Lexer::new(source)).parse_standalone_expr()
}
