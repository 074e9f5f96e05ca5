//! Standard transform definitions
//!
//! Pre-built pipelines over the default tables (extended keyword set, blank lines kept).
//! All are `once_cell::sync::Lazy` statics so they are built once per process.
//! Use [`Analyzer`](crate::clex::analysis::Analyzer) for any other configuration.

use crate::clex::analysis::Analysis;
use crate::clex::lexing::{CleanedText, Line};
use crate::clex::token::{LexTables, Token};
use crate::clex::transforms::stages::{Analyze, LexLines, SplitLines, StripComments};
use crate::clex::transforms::Transform;
use once_cell::sync::Lazy;
use std::sync::Arc;

pub type CleaningTransform = Transform<String, CleanedText>;
pub type LinesTransform = Transform<String, Vec<Line>>;
pub type TokensTransform = Transform<String, Vec<Token>>;
pub type AnalysisTransform = Transform<String, Analysis>;

static DEFAULT_TABLES: Lazy<Arc<LexTables>> = Lazy::new(|| Arc::new(LexTables::default()));

/// String → CleanedText
pub static CLEANING: Lazy<CleaningTransform> =
    Lazy::new(|| Transform::from_fn(Ok).then(StripComments::new()));

/// String → Vec<Line>
pub static LINES: Lazy<LinesTransform> = Lazy::new(|| {
    Transform::from_fn(Ok)
        .then(StripComments::new())
        .then(SplitLines)
});

/// String → Vec<Token>: comment stripping, line splitting, tokenizing and classifying.
pub static TOKENS: Lazy<TokensTransform> = Lazy::new(|| {
    Transform::from_fn(Ok)
        .then(StripComments::new())
        .then(SplitLines)
        .then(LexLines::new(DEFAULT_TABLES.clone()))
});

/// String → Analysis: the full pipeline, tokens and all three checks.
pub static ANALYSIS: Lazy<AnalysisTransform> = Lazy::new(|| {
    Transform::from_fn(Ok)
        .then(StripComments::new())
        .then(SplitLines)
        .then(Analyze::new(DEFAULT_TABLES.clone()))
});
