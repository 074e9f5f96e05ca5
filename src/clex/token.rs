//! Core token types shared by the lexer, the checks, and the report formats.
//!
//! Token Layers
//!
//!     Raw Tokens:
//!         Lexemes cut out of a single line by the tokenizer. They carry their text and the
//!         number of the line they came from, nothing else. See [tokenizer](crate::clex::lexing::tokenizer).
//!
//!     Classified Tokens:
//!         Raw tokens after the classifier assigned them a [TokenKind] and its report code.
//!         A raw token that matches no rule is kept as [TokenKind::Invalid] so scanning never
//!         stops on a malformed line.
//!
//!     Tokens have no identity beyond text and position: two tokens with the same text always
//!     classify the same way, but are reported separately by line.

pub mod tables;

pub use tables::{KeywordTable, LexTables};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of token categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Operator,
    Delimiter,
    Number,
    String,
    Char,
    Invalid,
}

impl TokenKind {
    /// Stable integer code used by the report format. `Invalid` has none.
    pub fn code(self) -> Option<u8> {
        match self {
            TokenKind::Keyword => Some(1),
            TokenKind::Identifier => Some(2),
            TokenKind::Operator => Some(3),
            TokenKind::Delimiter => Some(4),
            TokenKind::Number => Some(5),
            TokenKind::String => Some(6),
            TokenKind::Char => Some(7),
            TokenKind::Invalid => None,
        }
    }

    /// Label printed in the `TIPO:` field of the text report.
    pub fn label(self) -> &'static str {
        match self {
            TokenKind::Keyword => "PALAVRACHAVE",
            TokenKind::Identifier => "IDENTIFICADOR",
            TokenKind::Operator => "OPERADOR",
            TokenKind::Delimiter => "DELIMITADOR",
            TokenKind::Number => "NUMERO",
            TokenKind::String => "STRING",
            TokenKind::Char => "CHAR",
            TokenKind::Invalid => "INVALIDO",
        }
    }

    pub fn is_invalid(self) -> bool {
        matches!(self, TokenKind::Invalid)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An unclassified lexeme and the line it was cut from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawToken {
    pub text: String,
    pub line: usize,
}

impl RawToken {
    pub fn new(text: impl Into<String>, line: usize) -> Self {
        RawToken {
            text: text.into(),
            line,
        }
    }
}

/// A classified token: `(text, kind, code, line)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
    pub code: Option<u8>,
    pub line: usize,
}

impl Token {
    pub fn new(text: impl Into<String>, kind: TokenKind, line: usize) -> Self {
        Token {
            text: text.into(),
            kind,
            code: kind.code(),
            line,
        }
    }

    pub fn is_invalid(&self) -> bool {
        self.kind.is_invalid()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(
                f,
                "LINHA: {}, TOKEN: '{}', TIPO: {}, CODIGO: {}",
                self.line, self.text, self.kind, code
            ),
            None => write!(f, "LINHA: {}, TOKEN INVALIDO: {}", self.line, self.text),
        }
    }
}
