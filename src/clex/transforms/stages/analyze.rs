//! Analysis stage
//!
//! Final stage of the standard pipeline: lexes the lines and runs the three checks over
//! them, bundling everything into an [`Analysis`].

use crate::clex::analysis::Analysis;
use crate::clex::lexing::Line;
use crate::clex::token::LexTables;
use crate::clex::transforms::{Runnable, TransformError};
use std::sync::Arc;

/// # Input
/// - `Vec<Line>` - numbered lines
///
/// # Output
/// - `Analysis` - tokens plus terminator, balance and duplicate diagnostics
#[derive(Debug, Clone, Default)]
pub struct Analyze {
    tables: Arc<LexTables>,
}

impl Analyze {
    pub fn new(tables: Arc<LexTables>) -> Self {
        Analyze { tables }
    }
}

impl Runnable<Vec<Line>, Analysis> for Analyze {
    fn run(&self, input: Vec<Line>) -> Result<Analysis, TransformError> {
        Ok(Analysis::from_lines(input, &self.tables))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clex::testing::factories::mk_lines;

    #[test]
    fn test_collects_every_category() {
        let lines = mk_lines(&["int x = 1", "x = (2;", "}"]);
        let analysis = Analyze::default().run(lines).unwrap();

        assert_eq!(analysis.tokens.len(), 10);
        assert_eq!(analysis.terminator_warnings.len(), 1);
        assert_eq!(analysis.balance_errors.len(), 1);
        assert_eq!(analysis.duplicates.len(), 1);
    }
}
