//! Lexer
//!
//!     This module holds the four lexical stages of the analyzer. Each consumes the whole
//!     output of the previous one:
//!
//!         1. Comment stripping over the full source. See [comments].
//!            Block comments span lines, so this cannot run per line.
//!
//!         2. Line splitting. See [lines].
//!            Line numbers are fixed here and referenced by every diagnostic afterwards.
//!
//!         3. Tokenization, one line at a time. See [tokenizer].
//!
//!         4. Classification of every raw lexeme. See [classifier].
//!
//!     The checks in [checks](crate::clex::checks) read the same lines and tokens but never
//!     feed back into lexing.

pub mod classifier;
pub mod comments;
pub mod lines;
pub mod tokenizer;

pub use classifier::Classifier;
pub use comments::{strip_comments, CleanedText, CommentStripper};
pub use lines::{split_lines, Line};
pub use tokenizer::{tokenize_line, tokenize_lines};

use crate::clex::token::{LexTables, Token};

/// Tokenizes and classifies the given lines.
pub fn lex_lines(lines: &[Line], tables: &LexTables) -> Vec<Token> {
    Classifier::new(tables).classify_all(tokenize_lines(lines))
}
