
use std::str::Chars;

use yasl_session::diagnostics::prelude::*;
use yasl_utils::peek::Peek;

use crate::token::*;

#[derive(serde::Serialize, thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{pos}: {kind}")]
pub struct LexerError {
    pub kind: LexerErrorKind,
    pub span: Span,
    pub pos: Position,
}

#[derive(serde::Serialize, thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexerErrorKind {
    #[error("unexpected character {0:?}")]
    UnexpectedChar(char),

    #[error("unterminated string literal")]
    UnterminatedString,

    #[error("unterminated comment")]
    UnterminatedComment,

    #[error("integer overflow")]
    IntegerOverflow,
}

impl IntoDiagnostic<SourceId> for LexerError {
    fn into_diagnostic(self, source_id: &SourceId) -> Diagnostic {
        Diagnostic::error("lexical error", *source_id, self.span).with_label(self.kind.to_string())
    }
}

pub type LexerResult<T> = Result<T, LexerError>;

/// Anything the parser can pull tokens from.
///
/// Once the end of input is reached, every further call yields another
/// [`TokenKind::Eof`] token.
pub trait TokenSource {
    fn next_token(&mut self) -> LexerResult<Token>;
}

/// An on-demand tokenizer over a source string.
pub struct Lexer<'src> {
    all: &'src str,
    chars: Chars<'src>,

    token_start: usize,
    token_pos: Position,

    // position tracking lags behind `chars` and is caught up at token starts
    pos_byte: usize,
    pos: Position,

    finished: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            all: source,
            chars: source.chars(),

            token_start: 0,
            token_pos: Position::start(),

            pos_byte: 0,
            pos: Position::start(),

            finished: false,
        }
    }

    pub fn next_token(&mut self) -> LexerResult<Token> {
        loop {
            self.start_token();

            let Some(ch) = self.chars.next() else {
                return Ok(self.token(TokenKind::Eof, String::new()));
            };

            let kind = match ch {
                ' ' | '\t' | '\r' | '\n' => continue,

                // comments
                '{' => {
                    self.skip_brace_comment()?;
                    continue;
                }
                '/' if self.chars.eat('/') => {
                    while !matches!(self.chars.peek(), Some('\n') | None) {
                        self.chars.next();
                    }
                    continue;
                }

                ';' => TokenKind::Semicolon,
                '.' => TokenKind::Period,
                ':' => TokenKind::Colon,
                '(' => TokenKind::LParen,
                ')' => TokenKind::RParen,
                ',' => TokenKind::Comma,

                '+' => TokenKind::Add,
                '-' => TokenKind::Sub,
                '*' => TokenKind::Mul,

                '=' if self.chars.eat('=') => TokenKind::EqEq,
                '=' => TokenKind::Assign,
                '<' if self.chars.eat('>') => TokenKind::NotEq,
                '<' if self.chars.eat('=') => TokenKind::LtEq,
                '<' => TokenKind::Lt,
                '>' if self.chars.eat('=') => TokenKind::GtEq,
                '>' => TokenKind::Gt,

                '"' => {
                    let body = self.lex_string()?;
                    return Ok(self.token(TokenKind::String, body));
                }

                // a leading zero is a number on its own
                '0' => TokenKind::Number(0),
                ch @ '1'..='9' => self.lex_number(ch)?,

                ch if ch.is_ascii_alphabetic() => self.lex_alpha(),

                ch => return Err(self.error(LexerErrorKind::UnexpectedChar(ch))),
            };

            let lexeme = self.all[self.token_start..self.byte_pos()].to_owned();
            return Ok(self.token(kind, lexeme));
        }
    }

    /// Skips the body of a `{ ... }` comment. The opening brace has already
    /// been consumed. Comments don't nest.
    fn skip_brace_comment(&mut self) -> LexerResult<()> {
        loop {
            match self.chars.next() {
                Some('}') => return Ok(()),
                Some(_) => {}
                None => return Err(self.error(LexerErrorKind::UnterminatedComment)),
            }
        }
    }

    /// Lexes the body of a string literal after its opening quote, returning
    /// the decoded contents.
    fn lex_string(&mut self) -> LexerResult<String> {
        let mut body = String::new();

        loop {
            match self.chars.next() {
                Some('"') if self.chars.eat('"') => body.push('"'),
                Some('"') => return Ok(body),
                Some(ch) => body.push(ch),
                None => return Err(self.error(LexerErrorKind::UnterminatedString)),
            }
        }
    }

    fn lex_number(&mut self, first: char) -> LexerResult<TokenKind> {
        let mut n = first.to_digit(10).map(i64::from);

        while let Some(ch) = self.chars.eat_if(char::is_ascii_digit) {
            let digit = ch.to_digit(10).map(i64::from);

            n = n.and_then(|n| n.checked_mul(10));
            n = n.and_then(|n| digit.and_then(|d| n.checked_add(d)));
        }

        n.map(TokenKind::Number)
            .ok_or_else(|| self.error(LexerErrorKind::IntegerOverflow))
    }

    fn lex_alpha(&mut self) -> TokenKind {
        while self.chars.eat_if(char::is_ascii_alphanumeric).is_some() {}

        let s = &self.all[self.token_start..self.byte_pos()];

        match Keyword::lookup(s) {
            Some(kw) => TokenKind::Keyword(kw),
            None => TokenKind::Identifier,
        }
    }

    fn start_token(&mut self) {
        self.token_start = self.byte_pos();

        for ch in self.all[self.pos_byte..self.token_start].chars() {
            if ch == '\n' {
                self.pos.line += 1;
                self.pos.column = 1;
            } else {
                self.pos.column += 1;
            }
        }

        self.pos_byte = self.token_start;
        self.token_pos = self.pos;
    }

    fn token(&self, kind: TokenKind, lexeme: String) -> Token {
        tracing::trace!(?kind, %lexeme, "token");

        Token {
            kind,
            lexeme,
            span: self.token_span(),
            pos: self.token_pos,
        }
    }

    fn error(&self, kind: LexerErrorKind) -> LexerError {
        LexerError {
            kind,
            span: self.token_span(),
            pos: self.token_pos,
        }
    }

    fn token_span(&self) -> Span {
        Span::new(self.token_start, self.byte_pos())
    }

    fn byte_pos(&self) -> usize {
        self.all.len() - self.chars.as_str().len()
    }
}

impl TokenSource for Lexer<'_> {
    fn next_token(&mut self) -> LexerResult<Token> {
        Lexer::next_token(self)
    }
}

/// Yields every token once, ending after the end-of-file token or the first
/// error.
impl Iterator for Lexer<'_> {
    type Item = LexerResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let result = self.next_token();
        self.finished = match &result {
            Ok(token) => token.kind == TokenKind::Eof,
            Err(_) => true,
        };

        Some(result)
    }
}

/// A token source over an already lexed token list.
pub struct TokenIter {
    tokens: std::vec::IntoIter<Token>,
    eof: Token,
}

impl TokenIter {
    pub fn new(tokens: Vec<Token>) -> Self {
        let eof = match tokens.last() {
            Some(last) if last.kind == TokenKind::Eof => last.clone(),
            Some(last) => Token {
                kind: TokenKind::Eof,
                lexeme: String::new(),
                span: Span::empty(last.span.end),
                pos: last.end_pos(),
            },
            None => Token {
                kind: TokenKind::Eof,
                lexeme: String::new(),
                span: Span::empty(0),
                pos: Position::start(),
            },
        };

        Self {
            tokens: tokens.into_iter(),
            eof,
        }
    }
}

impl From<Vec<Token>> for TokenIter {
    fn from(tokens: Vec<Token>) -> Self {
        Self::new(tokens)
    }
}

impl TokenSource for TokenIter {
    fn next_token(&mut self) -> LexerResult<Token> {
        match self.tokens.next() {
            Some(token) if token.kind == TokenKind::Eof => {
                // nothing after the first end-of-file token is ever yielded
                self.tokens = Vec::new().into_iter();
                self.eof = token.clone();
                Ok(token)
            }
            Some(token) => Ok(token),
            None => Ok(self.eof.clone()),
        }
    }
}
