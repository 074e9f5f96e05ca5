//! Testing helpers
//!
//! Factories for building expected values in tests without spelling out every struct field.
//! They are public so integration tests under `tests/` can share them.

pub mod factories {
    use crate::clex::lexing::Line;
    use crate::clex::token::{Token, TokenKind};

    /// Builds classified tokens from `(text, kind, line)` triples.
    pub fn mk_tokens(specs: &[(&str, TokenKind, usize)]) -> Vec<Token> {
        specs
            .iter()
            .map(|(text, kind, line)| Token::new(*text, *kind, *line))
            .collect()
    }

    /// Numbers the given texts from 1.
    pub fn mk_lines(texts: &[&str]) -> Vec<Line> {
        texts
            .iter()
            .enumerate()
            .map(|(index, text)| Line::new(index + 1, *text))
            .collect()
    }
}
