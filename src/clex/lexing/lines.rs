//! Line splitting
//!
//! Numbers are assigned before any line is dropped, so an elided blank line leaves a gap
//! in the numbering instead of shifting everything after it.

use crate::clex::lexing::comments::CleanedText;
use serde::Serialize;

/// A numbered physical line. Numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    pub number: usize,
    pub text: String,
}

impl Line {
    pub fn new(number: usize, text: impl Into<String>) -> Self {
        Line {
            number,
            text: text.into(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Splits cleaned text into numbered lines.
///
/// A trailing `\r` is removed from each line. Blank lines are kept unless the cleaned text
/// was produced with blank-line dropping on.
pub fn split_lines(cleaned: &CleanedText) -> Vec<Line> {
    number_lines(cleaned.as_str())
        .filter(|line| !(cleaned.drops_blank_lines() && line.is_blank()))
        .collect()
}

fn number_lines(text: &str) -> impl Iterator<Item = Line> + '_ {
    text.split('\n').enumerate().map(|(index, raw)| {
        let raw = raw.strip_suffix('\r').unwrap_or(raw);
        Line::new(index + 1, raw)
    })
}
