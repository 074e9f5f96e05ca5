//! The record stream.

use crate::clex::checks::{BalanceError, DuplicateIdentifier, TerminatorWarning};
use crate::clex::token::Token;
use std::fmt;

/// Width of the console separator printed after each line's tokens.
pub const SEPARATOR_WIDTH: usize = 60;

/// One reportable event, borrowing from an [`Analysis`](crate::clex::analysis::Analysis).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Record<'a> {
    /// A classified token, valid or not.
    Token(&'a Token),
    Terminator(&'a TerminatorWarning),
    Balance(&'a BalanceError),
    Duplicate(&'a DuplicateIdentifier),
    /// Stands in for the duplicate list when it is empty.
    NoDuplicates,
    /// All records of this source line have been emitted. Not part of the report proper.
    LineEnd(usize),
}

impl Record<'_> {
    /// Structural markers carry no report text of their own.
    pub fn is_marker(&self) -> bool {
        matches!(self, Record::LineEnd(_))
    }
}

impl fmt::Display for Record<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Record::Token(token) => fmt::Display::fmt(*token, f),
            Record::Terminator(warning) => fmt::Display::fmt(*warning, f),
            Record::Balance(error) => fmt::Display::fmt(*error, f),
            Record::Duplicate(duplicate) => fmt::Display::fmt(*duplicate, f),
            Record::NoDuplicates => f.write_str("Nenhum identificador repetido encontrado."),
            Record::LineEnd(_) => f.write_str(&"-".repeat(SEPARATOR_WIDTH)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clex::token::TokenKind;

    #[test]
    fn test_balance_record_uses_error_wording() {
        let error = BalanceError::MismatchedPair {
            open: '(',
            open_line: 2,
            close: ']',
            close_line: 6,
        };
        assert_eq!(
            Record::Balance(&error).to_string(),
            "Erro: Delimitador '(' aberto na linha 2 não corresponde ao fechamento ']' na linha 6."
        );
    }

    #[test]
    fn test_display_delegates() {
        let token = Token::new("x", TokenKind::Identifier, 1);
        assert_eq!(
            Record::Token(&token).to_string(),
            "LINHA: 1, TOKEN: 'x', TIPO: IDENTIFICADOR, CODIGO: 2"
        );
        assert_eq!(
            Record::NoDuplicates.to_string(),
            "Nenhum identificador repetido encontrado."
        );
    }

    #[test]
    fn test_line_end_is_a_marker() {
        assert!(Record::LineEnd(3).is_marker());
        assert!(!Record::NoDuplicates.is_marker());
        assert_eq!(Record::LineEnd(3).to_string().len(), SEPARATOR_WIDTH);
    }
}
