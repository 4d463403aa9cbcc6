use std::fmt;

use yasl_diagnostic::span::Span;

use crate::{Node, NodeCopy};

#[derive(Node!)]
pub struct Token {
    pub kind: TokenKind,
    /// Source text of the token. For strings this is the decoded body.
    pub lexeme: String,
    pub span: Span,
    pub pos: Position,
}

impl Token {
    /// The token name used in error messages, with the lexeme for tokens
    /// whose kind alone doesn't say what was written.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Identifier | TokenKind::Number(_) => {
                format!("{} `{}`", self.kind.token_name(), self.lexeme)
            }
            TokenKind::String => format!("string {:?}", self.lexeme),
            _ => self.kind.token_name().to_owned(),
        }
    }

    /// The position just past the token's last character.
    pub fn end_pos(&self) -> Position {
        let mut pos = self.pos;
        let mut advance = |ch: char| {
            if ch == '\n' {
                pos.line += 1;
                pos.column = 1;
            } else {
                pos.column += 1;
            }
        };

        if self.kind == TokenKind::String {
            // the lexeme is decoded, so re-add the quotes
            advance('"');
            for ch in self.lexeme.chars() {
                advance(ch);
                if ch == '"' {
                    advance(ch);
                }
            }
            advance('"');
        } else {
            self.lexeme.chars().for_each(advance);
        }

        pos
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.pos, self.describe())
    }
}

/// One-based line and column (in characters) of a token's first character.
#[derive(NodeCopy!)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn start() -> Self {
        Self { line: 1, column: 1 }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(NodeCopy!)]
pub enum TokenKind {
    Keyword(Keyword),
    Identifier,
    Number(i64),
    String,

    Semicolon,
    Period,
    Colon,
    LParen,
    RParen,
    Comma,

    Add,
    Sub,
    Mul,
    Assign,
    EqEq,
    NotEq,
    LtEq,
    GtEq,
    Lt,
    Gt,

    Eof,
}

#[derive(NodeCopy!)]
pub enum Keyword {
    Program,
    Const,
    Begin,
    Print,
    End,
    Div,
    Mod,
    Var,
    Int,
    Bool,
    Proc,
    If,
    Then,
    Else,
    While,
    Do,
    Prompt,
    And,
    Or,
    Not,
    True,
    False,
}

impl Keyword {
    pub const ALL: [Keyword; 22] = [
        Keyword::Program,
        Keyword::Const,
        Keyword::Begin,
        Keyword::Print,
        Keyword::End,
        Keyword::Div,
        Keyword::Mod,
        Keyword::Var,
        Keyword::Int,
        Keyword::Bool,
        Keyword::Proc,
        Keyword::If,
        Keyword::Then,
        Keyword::Else,
        Keyword::While,
        Keyword::Do,
        Keyword::Prompt,
        Keyword::And,
        Keyword::Or,
        Keyword::Not,
        Keyword::True,
        Keyword::False,
    ];

    pub fn lookup(s: &str) -> Option<Self> {
        let kw = match s {
            "program" => Keyword::Program,
            "const" => Keyword::Const,
            "begin" => Keyword::Begin,
            "print" => Keyword::Print,
            "end" => Keyword::End,
            "div" => Keyword::Div,
            "mod" => Keyword::Mod,
            "var" => Keyword::Var,
            "int" => Keyword::Int,
            "bool" => Keyword::Bool,
            "proc" => Keyword::Proc,
            "if" => Keyword::If,
            "then" => Keyword::Then,
            "else" => Keyword::Else,
            "while" => Keyword::While,
            "do" => Keyword::Do,
            "prompt" => Keyword::Prompt,
            "and" => Keyword::And,
            "or" => Keyword::Or,
            "not" => Keyword::Not,
            "true" => Keyword::True,
            "false" => Keyword::False,
            _ => return None,
        };

        Some(kw)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Program => "program",
            Keyword::Const => "const",
            Keyword::Begin => "begin",
            Keyword::Print => "print",
            Keyword::End => "end",
            Keyword::Div => "div",
            Keyword::Mod => "mod",
            Keyword::Var => "var",
            Keyword::Int => "int",
            Keyword::Bool => "bool",
            Keyword::Proc => "proc",
            Keyword::If => "if",
            Keyword::Then => "then",
            Keyword::Else => "else",
            Keyword::While => "while",
            Keyword::Do => "do",
            Keyword::Prompt => "prompt",
            Keyword::And => "and",
            Keyword::Or => "or",
            Keyword::Not => "not",
            Keyword::True => "true",
            Keyword::False => "false",
        }
    }
}

impl TokenKind {
    pub fn token_name(&self) -> &'static str {
        match self {
            TokenKind::Keyword(kw) => match kw {
                Keyword::Program => "keyword `program`",
                Keyword::Const => "keyword `const`",
                Keyword::Begin => "keyword `begin`",
                Keyword::Print => "keyword `print`",
                Keyword::End => "keyword `end`",
                Keyword::Div => "keyword `div`",
                Keyword::Mod => "keyword `mod`",
                Keyword::Var => "keyword `var`",
                Keyword::Int => "keyword `int`",
                Keyword::Bool => "keyword `bool`",
                Keyword::Proc => "keyword `proc`",
                Keyword::If => "keyword `if`",
                Keyword::Then => "keyword `then`",
                Keyword::Else => "keyword `else`",
                Keyword::While => "keyword `while`",
                Keyword::Do => "keyword `do`",
                Keyword::Prompt => "keyword `prompt`",
                Keyword::And => "keyword `and`",
                Keyword::Or => "keyword `or`",
                Keyword::Not => "keyword `not`",
                Keyword::True => "keyword `true`",
                Keyword::False => "keyword `false`",
            },
            TokenKind::Identifier => "identifier",
            TokenKind::Number(_) => "number",
            TokenKind::String => "string",
            TokenKind::Semicolon => "`;`",
            TokenKind::Period => "`.`",
            TokenKind::Colon => "`:`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::Comma => "`,`",
            TokenKind::Add => "`+`",
            TokenKind::Sub => "`-`",
            TokenKind::Mul => "`*`",
            TokenKind::Assign => "`=`",
            TokenKind::EqEq => "`==`",
            TokenKind::NotEq => "`<>`",
            TokenKind::LtEq => "`<=`",
            TokenKind::GtEq => "`>=`",
            TokenKind::Lt => "`<`",
            TokenKind::Gt => "`>`",
            TokenKind::Eof => "end of file",
        }
    }
}
