use super::{error_expected, ParseError, ParseResult, Parser, MAX_NESTING, MAX_OPERATORS};
use crate::ast::*;
use crate::lexer::TokenSource;
use crate::token::*;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Prec {
    Lowest,

    Additive,
    Multiplicative,
}

fn binop_prec(binop: BinOp) -> Prec {
    match binop {
        BinOp::Add | BinOp::Sub => Prec::Additive,
        BinOp::Mul | BinOp::Div | BinOp::Mod => Prec::Multiplicative,
    }
}

impl<T: TokenSource> Parser<T> {
    /// Parses a whole expression, counting its operators from zero.
    pub(super) fn parse_expr(&mut self) -> ParseResult<Expr> {
        self.operators = 0;
        self.parse_prec(Prec::Lowest)
    }

    /// Parses operands joined by operators binding tighter than `prec`.
    /// Operators of equal precedence fold to the left.
    fn parse_prec(&mut self, prec: Prec) -> ParseResult<Expr> {
        let mut expr = self.parse_lhs()?;

        while let Some(op) = self.peek_bin_op(prec)? {
            let token = self.next()?;

            // trees are only as deep as their operator count, keep that bounded
            self.operators += 1;
            if self.operators > MAX_OPERATORS {
                return Err(ParseError::TooManyOperators { found: token });
            }

            let rhs = self.parse_prec(binop_prec(op))?;

            let span = expr.span.union(rhs.span);
            expr = Expr::new(
                ExprKind::BinOp {
                    op,
                    lhs: Box::new(expr),
                    rhs: Box::new(rhs),
                },
                span,
            );
        }

        Ok(expr)
    }

    fn parse_lhs(&mut self) -> ParseResult<Expr> {
        let token = self.next()?;

        match token.kind {
            TokenKind::Number(n) => Ok(Expr::new(ExprKind::Literal(n), token.span)),

            TokenKind::Identifier => {
                let span = token.span;
                let ident = Ident {
                    name: token.lexeme,
                    span,
                };
                Ok(Expr::new(ExprKind::Var(ident), span))
            }

            TokenKind::LParen => {
                if self.nesting == MAX_NESTING {
                    return Err(ParseError::NestedTooDeeply { found: token });
                }

                self.nesting += 1;
                let expr = self.parse_prec(Prec::Lowest);
                self.nesting -= 1;

                let mut expr = expr?;
                let rparen = self.expect(TokenKind::RParen)?;

                expr.span = token.span.union(rparen.span);
                Ok(expr)
            }

            _ => Err(error_expected("an expression", token)),
        }
    }

    fn peek_bin_op(&mut self, in_prec: Prec) -> ParseResult<Option<BinOp>> {
        let op = match self.peek_kind()? {
            TokenKind::Add => BinOp::Add,
            TokenKind::Sub => BinOp::Sub,
            TokenKind::Mul => BinOp::Mul,
            TokenKind::Keyword(Keyword::Div) => BinOp::Div,
            TokenKind::Keyword(Keyword::Mod) => BinOp::Mod,
            _ => return Ok(None),
        };

        Ok((binop_prec(op) > in_prec).then_some(op))
    }
}
