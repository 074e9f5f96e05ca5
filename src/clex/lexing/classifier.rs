//! Token classification
//!
//! Each raw lexeme goes through a fixed decision list, first hit wins:
//! keyword, operator, delimiter, number, string, char, identifier, otherwise invalid.
//! Table lookups come before the identifier pattern so `if` is a keyword even though it
//! also looks like a name.

use crate::clex::token::{LexTables, RawToken, Token, TokenKind};
use once_cell::sync::Lazy;
use regex::Regex;

static NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]+(?:\.[0-9]+)?(?:[eE][-+]?[0-9]+)?$").expect("number pattern is valid")
});
static STRING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^"(?:\\.|[^"\\])*"$"#).expect("string pattern is valid"));
static CHAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^'(?:\\.|[^'\\])'$").expect("char pattern is valid"));
static IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier pattern is valid"));

/// Classifies lexemes against one set of tables.
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'t> {
    tables: &'t LexTables,
}

impl<'t> Classifier<'t> {
    pub fn new(tables: &'t LexTables) -> Self {
        Classifier { tables }
    }

    pub fn kind_of(&self, text: &str) -> TokenKind {
        if self.tables.is_keyword(text) {
            TokenKind::Keyword
        } else if self.tables.is_operator(text) {
            TokenKind::Operator
        } else if self.tables.is_delimiter(text) {
            TokenKind::Delimiter
        } else if NUMBER.is_match(text) {
            TokenKind::Number
        } else if STRING.is_match(text) {
            TokenKind::String
        } else if CHAR.is_match(text) {
            TokenKind::Char
        } else if IDENTIFIER.is_match(text) {
            TokenKind::Identifier
        } else {
            TokenKind::Invalid
        }
    }

    /// `(kind, code)` for a lexeme; the code is `None` only for invalid text.
    pub fn classify_text(&self, text: &str) -> (TokenKind, Option<u8>) {
        let kind = self.kind_of(text);
        (kind, kind.code())
    }

    pub fn classify(&self, raw: RawToken) -> Token {
        let kind = self.kind_of(&raw.text);
        Token::new(raw.text, kind, raw.line)
    }

    pub fn classify_all(&self, raw: Vec<RawToken>) -> Vec<Token> {
        let tokens: Vec<Token> = raw.into_iter().map(|r| self.classify(r)).collect();
        let invalid = tokens.iter().filter(|t| t.is_invalid()).count();
        tracing::debug!(tokens = tokens.len(), invalid, "classified");
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clex::token::KeywordTable;
    use rstest::rstest;

    #[rstest]
    #[case("int", TokenKind::Keyword, Some(1))]
    #[case("while", TokenKind::Keyword, Some(1))]
    #[case("counter", TokenKind::Identifier, Some(2))]
    #[case("_tmp1", TokenKind::Identifier, Some(2))]
    #[case("==", TokenKind::Operator, Some(3))]
    #[case("%", TokenKind::Operator, Some(3))]
    #[case("{", TokenKind::Delimiter, Some(4))]
    #[case("?", TokenKind::Delimiter, Some(4))]
    #[case("42", TokenKind::Number, Some(5))]
    #[case("3.14", TokenKind::Number, Some(5))]
    #[case("6.02e23", TokenKind::Number, Some(5))]
    #[case(r#""hello world""#, TokenKind::String, Some(6))]
    #[case(r#""""#, TokenKind::String, Some(6))]
    #[case("'x'", TokenKind::Char, Some(7))]
    #[case(r"'\0'", TokenKind::Char, Some(7))]
    #[case("@", TokenKind::Invalid, None)]
    #[case("\"", TokenKind::Invalid, None)]
    #[case("'ab'", TokenKind::Invalid, None)]
    #[case("1abc", TokenKind::Invalid, None)]
    fn test_classify_text(#[case] text: &str, #[case] kind: TokenKind, #[case] code: Option<u8>) {
        let tables = LexTables::default();
        let classifier = Classifier::new(&tables);
        assert_eq!(classifier.classify_text(text), (kind, code));
    }

    #[test]
    fn test_keyword_table_decides_main() {
        let standard = LexTables::new(KeywordTable::Standard);
        let extended = LexTables::new(KeywordTable::Extended);
        assert_eq!(Classifier::new(&standard).kind_of("main"), TokenKind::Identifier);
        assert_eq!(Classifier::new(&extended).kind_of("main"), TokenKind::Keyword);
    }

    #[test]
    fn test_classify_keeps_text_and_line() {
        let tables = LexTables::default();
        let token = Classifier::new(&tables).classify(RawToken::new("x", 12));
        assert_eq!(token, Token::new("x", TokenKind::Identifier, 12));
    }
}
