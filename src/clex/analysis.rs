//! Analysis results and the configurable driver.
//!
//! [`Analysis`] is everything one run produces: the numbered lines, the classified tokens and
//! the three independent diagnostic lists. It is a pure function of the source text and the
//! [`AnalyzerOptions`]; nothing is printed or written here. Turning an analysis into output
//! is the job of [formats](crate::clex::formats).

use crate::clex::checks::{
    check_balance, check_terminators, find_duplicates, BalanceError, DuplicateIdentifier,
    TerminatorWarning,
};
use crate::clex::formats::Record;
use crate::clex::lexing::{lex_lines, Line};
use crate::clex::token::{KeywordTable, LexTables, Token};
use crate::clex::transforms::stages::{Analyze, SplitLines, StripComments};
use crate::clex::transforms::{Transform, TransformError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub keyword_table: KeywordTable,
    #[serde(skip)]
    pub lines: Vec<Line>,
    pub tokens: Vec<Token>,
    pub terminator_warnings: Vec<TerminatorWarning>,
    pub balance_errors: Vec<BalanceError>,
    pub duplicates: Vec<DuplicateIdentifier>,
}

impl Analysis {
    /// Lexes the lines and runs every check over them.
    pub fn from_lines(lines: Vec<Line>, tables: &LexTables) -> Self {
        let tokens = lex_lines(&lines, tables);
        let terminator_warnings = check_terminators(&lines);
        let balance_errors = check_balance(&lines);
        let duplicates = find_duplicates(&lines, tables);

        tracing::debug!(
            tokens = tokens.len(),
            warnings = terminator_warnings.len(),
            balance_errors = balance_errors.len(),
            duplicates = duplicates.len(),
            "analysis complete"
        );

        Analysis {
            keyword_table: tables.keyword_table(),
            lines,
            tokens,
            terminator_warnings,
            balance_errors,
            duplicates,
        }
    }

    pub fn invalid_tokens(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|t| t.is_invalid())
    }

    /// Invalid tokens or unbalanced delimiters were found.
    pub fn has_errors(&self) -> bool {
        !self.balance_errors.is_empty() || self.invalid_tokens().next().is_some()
    }

    /// The canonical record stream.
    ///
    /// Per non-blank line in order: its tokens, a line-end marker, then its terminator
    /// warning. After all lines: the balance errors, then the duplicate identifiers (or one
    /// record saying there are none).
    pub fn records(&self) -> Vec<Record<'_>> {
        let mut records = Vec::with_capacity(self.tokens.len() + self.lines.len());
        let mut tokens = self.tokens.iter().peekable();
        let mut warnings = self.terminator_warnings.iter().peekable();

        for line in self.lines.iter().filter(|l| !l.is_blank()) {
            while let Some(token) = tokens.next_if(|t| t.line == line.number) {
                records.push(Record::Token(token));
            }
            records.push(Record::LineEnd(line.number));
            while let Some(warning) = warnings.next_if(|w| w.line == line.number) {
                records.push(Record::Terminator(warning));
            }
        }

        records.extend(self.balance_errors.iter().map(Record::Balance));

        if self.duplicates.is_empty() {
            records.push(Record::NoDuplicates);
        } else {
            records.extend(self.duplicates.iter().map(Record::Duplicate));
        }

        records
    }
}

/// Knobs for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnalyzerOptions {
    #[serde(rename = "keywords", default)]
    pub keyword_table: KeywordTable,
    #[serde(default)]
    pub drop_blank_lines: bool,
}

/// Runs the full pipeline for a fixed set of options.
///
/// The lookup tables are built once here and shared with the stages.
#[derive(Debug)]
pub struct Analyzer {
    pipeline: Transform<String, Analysis>,
}

impl Analyzer {
    pub fn new(options: AnalyzerOptions) -> Self {
        let tables = Arc::new(LexTables::new(options.keyword_table));
        let pipeline = Transform::from_fn(Ok)
            .then(StripComments::dropping_blank_lines(options.drop_blank_lines))
            .then(SplitLines)
            .then(Analyze::new(tables));
        Analyzer { pipeline }
    }

    pub fn analyze(&self, source: &str) -> Result<Analysis, TransformError> {
        self.pipeline.run(source.to_string())
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(AnalyzerOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clex::token::TokenKind;

    fn analyze(source: &str) -> Analysis {
        Analyzer::default().analyze(source).unwrap()
    }

    #[test]
    fn test_clean_program_has_no_errors() {
        let analysis = analyze("int main() {\n    return 0;\n}\n");
        assert!(!analysis.has_errors());
        assert!(analysis.terminator_warnings.is_empty());
        assert!(analysis.duplicates.is_empty());
    }

    #[test]
    fn test_invalid_token_is_an_error_but_scanning_continues() {
        let analysis = analyze("int a = 1;\nint b = @;\nint c = 3;");
        assert!(analysis.has_errors());
        assert_eq!(analysis.invalid_tokens().count(), 1);
        assert_eq!(analysis.tokens.last().map(|t| t.line), Some(3));
    }

    #[test]
    fn test_standard_keywords_option() {
        let analyzer = Analyzer::new(AnalyzerOptions {
            keyword_table: KeywordTable::Standard,
            drop_blank_lines: false,
        });
        let analysis = analyzer.analyze("main();").unwrap();
        assert_eq!(analysis.keyword_table, KeywordTable::Standard);
        assert_eq!(analysis.tokens[0].kind, TokenKind::Identifier);
    }

    #[test]
    fn test_dropping_blank_lines_keeps_numbering() {
        let analyzer = Analyzer::new(AnalyzerOptions {
            keyword_table: KeywordTable::Extended,
            drop_blank_lines: true,
        });
        let analysis = analyzer.analyze("a;\n\n\nb = 1").unwrap();
        assert_eq!(analysis.lines.len(), 2);
        assert_eq!(analysis.terminator_warnings[0].line, 4);
    }

    #[test]
    fn test_records_order() {
        let analysis = analyze("x = 1\n\ny = (x;\n");
        let rendered: Vec<String> = analysis
            .records()
            .iter()
            .filter(|r| !r.is_marker())
            .map(|r| r.to_string())
            .collect();

        assert_eq!(
            rendered,
            vec![
                "LINHA: 1, TOKEN: 'x', TIPO: IDENTIFICADOR, CODIGO: 2",
                "LINHA: 1, TOKEN: '=', TIPO: OPERADOR, CODIGO: 3",
                "LINHA: 1, TOKEN: '1', TIPO: NUMERO, CODIGO: 5",
                "Aviso: A linha 1 pode estar faltando um ponto e virgula.",
                "LINHA: 3, TOKEN: 'y', TIPO: IDENTIFICADOR, CODIGO: 2",
                "LINHA: 3, TOKEN: '=', TIPO: OPERADOR, CODIGO: 3",
                "LINHA: 3, TOKEN: '(', TIPO: DELIMITADOR, CODIGO: 4",
                "LINHA: 3, TOKEN: 'x', TIPO: IDENTIFICADOR, CODIGO: 2",
                "LINHA: 3, TOKEN: ';', TIPO: DELIMITADOR, CODIGO: 4",
                "Erro: Delimitador de abertura '(' na linha 3 não foi fechado.",
                "Identificador 'x' repetido. Ultima ocorrencia na linha 3.",
            ]
        );
    }

    #[test]
    fn test_records_mark_each_non_blank_line() {
        let analysis = analyze("a;\n\nb;");
        let markers: Vec<usize> = analysis
            .records()
            .iter()
            .filter_map(|r| match r {
                Record::LineEnd(n) => Some(*n),
                _ => None,
            })
            .collect();
        assert_eq!(markers, vec![1, 3]);
    }

    #[test]
    fn test_line_end_precedes_the_terminator_warning() {
        let analysis = analyze("x = 1\ny;");
        let records = analysis.records();
        assert_eq!(records[3], Record::LineEnd(1));
        assert_eq!(records[4], Record::Terminator(&analysis.terminator_warnings[0]));
        assert_eq!(records[5], Record::Token(&analysis.tokens[3]));
    }

    #[test]
    fn test_duplicates_scan_raw_line_text() {
        let analysis = analyze("printf(\"count\");\ncount = 1;");
        assert_eq!(analysis.duplicates.len(), 1);
        assert_eq!(analysis.duplicates[0].name, "count");
        assert_eq!(analysis.duplicates[0].line, 2);
    }

    #[test]
    fn test_no_duplicates_record() {
        let analysis = analyze("a;");
        assert_eq!(analysis.records().last(), Some(&Record::NoDuplicates));
    }
}
