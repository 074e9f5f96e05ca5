//! Missing-terminator heuristic
//!
//! A non-blank line is suspicious unless, after trimming trailing whitespace, it ends in
//! `;`, `{` or `}`, or its text starts with a control keyword. Leading whitespace is kept,
//! so an indented `if (...)` line is not exempt. The test is textual and per physical
//! line: a statement wrapped over several lines warns on every line but the last.

use crate::clex::lexing::Line;
use serde::Serialize;
use std::fmt;

/// Prefixes that exempt a line. Matched as plain prefixes, not whole words.
pub const CONTROL_PREFIXES: &[&str] = &["if", "else", "while", "for", "switch", "do"];

const TERMINATORS: &[char] = &[';', '{', '}'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TerminatorWarning {
    pub line: usize,
}

impl fmt::Display for TerminatorWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Aviso: A linha {} pode estar faltando um ponto e virgula.",
            self.line
        )
    }
}

pub fn check_line(line: &Line) -> Option<TerminatorWarning> {
    let trimmed = line.text.trim_end();
    if trimmed.is_empty() || trimmed.ends_with(TERMINATORS) {
        return None;
    }

    if CONTROL_PREFIXES.iter().any(|prefix| trimmed.starts_with(prefix)) {
        return None;
    }

    tracing::trace!(line = line.number, "possible missing terminator");
    Some(TerminatorWarning { line: line.number })
}

pub fn check_terminators(lines: &[Line]) -> Vec<TerminatorWarning> {
    lines.iter().filter_map(check_line).collect()
}
