
mod expr;

use yasl_session::diagnostics::prelude::*;

use crate::ast::*;
use crate::lexer::{LexerError, TokenSource};
use crate::token::{Keyword, Token, TokenKind};

#[derive(serde::Serialize, thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("{}: expected {expected}, found {}", .found.pos, .found.describe())]
    Expected { expected: String, found: Token },

    #[error("{}: unexpected trailing input, found {}", .found.pos, .found.describe())]
    TrailingInput { found: Token },

    #[error("{}: parentheses nested more than {MAX_NESTING} deep", .found.pos)]
    NestedTooDeeply { found: Token },

    #[error("{}: expression has more than {MAX_OPERATORS} operators", .found.pos)]
    TooManyOperators { found: Token },

    #[error(transparent)]
    Lexer(#[from] LexerError),
}

impl ParseError {
    pub fn span(&self) -> Span {
        match self {
            ParseError::Expected { found, .. }
            | ParseError::TrailingInput { found }
            | ParseError::NestedTooDeeply { found }
            | ParseError::TooManyOperators { found } => found.span,
            ParseError::Lexer(err) => err.span,
        }
    }
}

impl IntoDiagnostic<SourceId> for ParseError {
    fn into_diagnostic(self, source_id: &SourceId) -> Diagnostic {
        let label = match &self {
            ParseError::Expected { expected, found } => {
                format!("expected {expected}, found {}", found.describe())
            }
            ParseError::TrailingInput { found } => {
                format!("unexpected {} after the end of the program", found.describe())
            }
            ParseError::NestedTooDeeply { .. } => {
                format!("parentheses nested more than {MAX_NESTING} deep")
            }
            ParseError::TooManyOperators { .. } => {
                format!("more than {MAX_OPERATORS} operators in one expression")
            }
            ParseError::Lexer(err) => return err.clone().into_diagnostic(source_id),
        };

        Diagnostic::error("syntax error", *source_id, self.span()).with_label(label)
    }
}

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest parenthesis nesting accepted in an expression.
pub const MAX_NESTING: usize = 256;

/// Most binary operators accepted in one expression, parenthesized parts
/// included.
pub const MAX_OPERATORS: usize = 1024;

/// A recursive descent parser pulling tokens on demand, with one token of
/// lookahead.
pub struct Parser<T: TokenSource> {
    tokens: T,
    peeked: Option<Token>,

    nesting: usize,
    operators: usize,
}

impl<T: TokenSource> Parser<T> {
    pub fn new(tokens: T) -> Self {
        Self {
            tokens,
            peeked: None,

            nesting: 0,
            operators: 0,
        }
    }

    /// Parses a whole program, which must be followed by the end of input.
    pub fn parse_program(mut self) -> ParseResult<Program> {
        tracing::debug!("parsing program");

        let program_kw = self.expect(TokenKind::Keyword(Keyword::Program))?;
        let name = self.parse_ident()?;
        self.expect(TokenKind::Semicolon)?;

        let block = self.parse_block()?;

        let period = self.expect(TokenKind::Period)?;
        self.expect_eof()?;

        tracing::debug!(
            name = %name,
            consts = block.consts.len(),
            stmts = block.stmts.len(),
            "parsed program"
        );

        Ok(Program {
            name,
            block,
            span: program_kw.span.union(period.span),
        })
    }

    /// Parses a single expression, which must be followed by the end of
    /// input.
    pub fn parse_standalone_expr(mut self) -> ParseResult<Expr> {
        let expr = self.parse_expr()?;
        self.expect_eof()?;
        Ok(expr)
    }

    fn parse_block(&mut self) -> ParseResult<Block> {
        let start = self.peek()?.span;

        let mut consts = vec![];
        while self.peek_kind()? == TokenKind::Keyword(Keyword::Const) {
            consts.push(self.parse_const_decl()?);
        }

        self.expect(TokenKind::Keyword(Keyword::Begin))?;

        let mut stmts = vec![];
        while self.peek_kind()? == TokenKind::Keyword(Keyword::Print) {
            stmts.push(self.parse_statement()?);
        }

        let end = self.expect(TokenKind::Keyword(Keyword::End))?;

        Ok(Block {
            consts,
            stmts,
            span: start.union(end.span),
        })
    }

    fn parse_const_decl(&mut self) -> ParseResult<ConstDecl> {
        let const_kw = self.expect(TokenKind::Keyword(Keyword::Const))?;
        let name = self.parse_ident()?;
        self.expect(TokenKind::Assign)?;
        let value = self.parse_number()?;
        let semicolon = self.expect(TokenKind::Semicolon)?;

        Ok(ConstDecl {
            name,
            value,
            span: const_kw.span.union(semicolon.span),
        })
    }

    fn parse_statement(&mut self) -> ParseResult<Stmt> {
        let token = self.next()?;
        match token.kind {
            TokenKind::Keyword(Keyword::Print) => {
                let expr = self.parse_expr()?;
                let semicolon = self.expect(TokenKind::Semicolon)?;

                Ok(Stmt {
                    kind: StmtKind::Print(expr),
                    span: token.span.union(semicolon.span),
                })
            }

            _ => Err(error_expected("a statement", token)),
        }
    }

    fn parse_ident(&mut self) -> ParseResult<Ident> {
        let token = self.next()?;
        match token.kind {
            TokenKind::Identifier => Ok(Ident {
                name: token.lexeme,
                span: token.span,
            }),
            _ => Err(error_expected("an identifier", token)),
        }
    }

    fn parse_number(&mut self) -> ParseResult<i64> {
        let token = self.next()?;
        match token.kind {
            TokenKind::Number(n) => Ok(n),
            _ => Err(error_expected("a number", token)),
        }
    }

    fn expect(&mut self, kind: TokenKind) -> ParseResult<Token> {
        let token = self.next()?;
        if token.kind == kind {
            Ok(token)
        } else {
            Err(error_expected(kind.token_name(), token))
        }
    }

    fn expect_eof(&mut self) -> ParseResult<()> {
        let token = self.next()?;
        match token.kind {
            TokenKind::Eof => Ok(()),
            _ => Err(ParseError::TrailingInput { found: token }),
        }
    }

    fn peek(&mut self) -> ParseResult<&Token> {
        let token = match self.peeked.take() {
            Some(token) => token,
            None => self.tokens.next_token()?,
        };
        Ok(self.peeked.insert(token))
    }

    fn peek_kind(&mut self) -> ParseResult<TokenKind> {
        self.peek().map(|t| t.kind)
    }

    fn next(&mut self) -> ParseResult<Token> {
        match self.peeked.take() {
            Some(token) => Ok(token),
            None => Ok(self.tokens.next_token()?),
        }
    }
}

fn error_expected(expected: impl Into<String>, found: Token) -> ParseError {
    ParseError::Expected {
        expected: expected.into(),
        found,
    }
}
