//! Line tokenizer
//!
//!     Cuts one line into raw lexemes with a single regex whose alternatives are tried in a
//!     fixed order at every position (leftmost-first, as the `regex` crate matches):
//!
//!         1. double-quoted string, escapes allowed
//!         2. single-quoted char, one char or one escape
//!         3. multi-character operators, longest first
//!         4. identifiers and keywords
//!         5. floating-point numbers
//!         6. integers
//!         7. single-character operators and delimiters
//!         8. anything else that is not whitespace
//!
//!     The order is load-bearing. Moving identifiers or single symbols ahead of the compound
//!     operators splits `==` into two `=`. Alternative 8 exists so stray characters surface as
//!     invalid tokens instead of vanishing; adjacent stray characters are merged into one run.
//!
//!     Whitespace is never emitted.

use crate::clex::lexing::lines::Line;
use crate::clex::token::tables::{DELIMITERS, OPERATORS};
use crate::clex::token::RawToken;
use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

const STRING_LITERAL: &str = r#""(?:\\.|[^"\\])*""#;
const CHAR_LITERAL: &str = r"'(?:\\.|[^'\\])'";
const IDENTIFIER: &str = r"[A-Za-z_][A-Za-z0-9_]*";
const FLOAT: &str = r"[0-9]+\.[0-9]+(?:[eE][-+]?[0-9]+)?|[0-9]+[eE][-+]?[0-9]+";
const INTEGER: &str = r"[0-9]+";

static LEXEME: Lazy<Regex> = Lazy::new(|| {
    let compound = OPERATORS
        .iter()
        .filter(|op| op.len() > 1)
        .map(|op| regex::escape(op))
        .collect::<Vec<_>>()
        .join("|");
    let single = OPERATORS
        .iter()
        .chain(DELIMITERS.iter())
        .filter(|sym| sym.len() == 1)
        .map(|sym| regex::escape(sym))
        .collect::<Vec<_>>()
        .join("|");
    let pattern = format!(
        "{STRING_LITERAL}|{CHAR_LITERAL}|{compound}|{IDENTIFIER}|{FLOAT}|{INTEGER}|{single}|(?P<stray>\\S)"
    );
    Regex::new(&pattern).expect("lexeme pattern is valid")
});

/// Byte span of a lexeme within its line, and whether it came from the stray-character branch.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Lexeme {
    span: Range<usize>,
    stray: bool,
}

fn scan(text: &str) -> Vec<Lexeme> {
    let mut lexemes: Vec<Lexeme> = Vec::new();

    for caps in LEXEME.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        let stray = caps.name("stray").is_some();

        if stray {
            if let Some(last) = lexemes.last_mut() {
                if last.stray && last.span.end == whole.start() {
                    last.span.end = whole.end();
                    continue;
                }
            }
        }

        lexemes.push(Lexeme {
            span: whole.range(),
            stray,
        });
    }

    lexemes
}

/// Tokenizes a single line, left to right.
pub fn tokenize_line(line: &Line) -> Vec<RawToken> {
    scan(&line.text)
        .into_iter()
        .map(|lexeme| RawToken::new(&line.text[lexeme.span], line.number))
        .collect()
}

/// Tokenizes every line in order.
pub fn tokenize_lines(lines: &[Line]) -> Vec<RawToken> {
    let tokens: Vec<RawToken> = lines.iter().flat_map(tokenize_line).collect();
    tracing::debug!(lines = lines.len(), tokens = tokens.len(), "tokenized");
    tokens
}
