//! Static lookup tables for classification.
//!
//! Tables are fixed for the lifetime of a run. They are built once from a [KeywordTable]
//! choice and then shared by reference (or `Arc`) with every stage that classifies.

use serde::{Deserialize, Serialize};

/// ANSI C / C99 keywords.
const STANDARD_KEYWORDS: &[&str] = &[
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
    "enum", "extern", "float", "for", "goto", "if", "inline", "int", "long", "register",
    "restrict", "return", "short", "signed", "sizeof", "static", "struct", "switch", "typedef",
    "union", "unsigned", "void", "volatile", "while",
];

/// Names the extended table treats as reserved on top of the standard ones.
const EXTENDED_KEYWORDS: &[&str] = &[
    "main", "printf", "scanf", "include", "define", "NULL", "true", "false", "bool", "string",
    "class", "delete",
];

/// Longest lexemes first; the tokenizer relies on the same ordering.
pub const OPERATORS: &[&str] = &[
    "==", "!=", "<=", ">=", "&&", "||", "++", "--", "+=", "-=", "*=", "/=", "%=", "<<", ">>", "+",
    "-", "*", "/", "=", "<", ">", "!", "&", "|", "^", "~", "%",
];

pub const DELIMITERS: &[&str] = &["(", ")", "{", "}", "[", "]", ";", ",", ".", ":", "?"];

/// Which keyword table a run classifies against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeywordTable {
    /// The C language keywords only.
    Standard,
    /// C keywords plus common library and preprocessor names (`main`, `printf`, `include`, ...).
    #[default]
    Extended,
}

impl KeywordTable {
    pub fn name(self) -> &'static str {
        match self {
            KeywordTable::Standard => "standard",
            KeywordTable::Extended => "extended",
        }
    }
}

/// KeywordSet, OperatorSet and DelimiterSet for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexTables {
    table: KeywordTable,
    keywords: Vec<&'static str>,
}

impl LexTables {
    pub fn new(table: KeywordTable) -> Self {
        let mut keywords = STANDARD_KEYWORDS.to_vec();
        if table == KeywordTable::Extended {
            keywords.extend_from_slice(EXTENDED_KEYWORDS);
        }
        LexTables { table, keywords }
    }

    pub fn keyword_table(&self) -> KeywordTable {
        self.table
    }

    pub fn keywords(&self) -> &[&'static str] {
        &self.keywords
    }

    pub fn is_keyword(&self, text: &str) -> bool {
        self.keywords.contains(&text)
    }

    pub fn is_operator(&self, text: &str) -> bool {
        OPERATORS.contains(&text)
    }

    pub fn is_delimiter(&self, text: &str) -> bool {
        DELIMITERS.contains(&text)
    }
}

impl Default for LexTables {
    fn default() -> Self {
        Self::new(KeywordTable::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_excludes_library_names() {
        let tables = LexTables::new(KeywordTable::Standard);
        assert!(tables.is_keyword("while"));
        assert!(!tables.is_keyword("main"));
        assert!(!tables.is_keyword("printf"));
        assert_eq!(tables.keywords().len(), 34);
    }

    #[test]
    fn test_extended_table_is_default() {
        let tables = LexTables::default();
        assert_eq!(tables.keyword_table(), KeywordTable::Extended);
        assert!(tables.is_keyword("main"));
        assert!(tables.is_keyword("NULL"));
        assert!(tables.is_keyword("int"));
    }

    #[test]
    fn test_membership_is_exact() {
        let tables = LexTables::default();
        assert!(!tables.is_keyword("If"));
        assert!(!tables.is_keyword("int "));
        assert!(tables.is_operator("<<"));
        assert!(!tables.is_operator("<<="));
        assert!(tables.is_delimiter("?"));
        assert!(!tables.is_delimiter("\""));
    }

    #[test]
    fn test_two_char_operators_precede_their_prefixes() {
        for (i, op) in OPERATORS.iter().enumerate() {
            for shorter in &OPERATORS[..i] {
                assert!(
                    !(op.len() > shorter.len() && op.starts_with(shorter)),
                    "{op} listed after its prefix {shorter}"
                );
            }
        }
    }

    #[test]
    fn test_keyword_table_names() {
        assert_eq!(KeywordTable::Standard.name(), "standard");
        assert_eq!(KeywordTable::Extended.name(), "extended");
    }
}
