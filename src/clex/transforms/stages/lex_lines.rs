//! Tokenize-and-classify stage

use crate::clex::lexing::{lex_lines, Line};
use crate::clex::token::{LexTables, Token};
use crate::clex::transforms::{Runnable, TransformError};
use std::sync::Arc;

/// Tokenizes and classifies every line against a fixed set of tables.
///
/// # Input
/// - `Vec<Line>` - numbered lines
///
/// # Output
/// - `Vec<Token>` - classified tokens, invalid ones included
#[derive(Debug, Clone, Default)]
pub struct LexLines {
    tables: Arc<LexTables>,
}

impl LexLines {
    pub fn new(tables: Arc<LexTables>) -> Self {
        LexLines { tables }
    }
}

impl Runnable<Vec<Line>, Vec<Token>> for LexLines {
    fn run(&self, input: Vec<Line>) -> Result<Vec<Token>, TransformError> {
        Ok(lex_lines(&input, &self.tables))
    }
}
