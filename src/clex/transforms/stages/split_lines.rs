//! Line splitting stage

use crate::clex::lexing::{split_lines, CleanedText, Line};
use crate::clex::transforms::{Runnable, TransformError};

/// Line splitting stage
///
/// # Input
/// - `CleanedText` - comment-free source
///
/// # Output
/// - `Vec<Line>` - numbered lines; blank ones omitted if the text asks for it
#[derive(Debug, Clone, Copy, Default)]
pub struct SplitLines;

impl Runnable<CleanedText, Vec<Line>> for SplitLines {
    fn run(&self, input: CleanedText) -> Result<Vec<Line>, TransformError> {
        let lines = split_lines(&input);
        tracing::debug!(lines = lines.len(), "split lines");
        Ok(lines)
    }
}
