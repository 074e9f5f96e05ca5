//! Repeated identifier detection
//!
//! Flat, whole-file, case-sensitive name count over the raw text of every line. Any run
//! shaped like an identifier counts, including words inside string or char literals and
//! the tail of an exponent such as `e5` in `1e5`. Keywords of the active table are
//! skipped. There is no notion of scope: a parameter that shadows a global is reported.
//!
//! A name enters the report when its count passes one and its line is then moved forward
//! on every later occurrence, so the report carries the last line the name was seen on.

use crate::clex::lexing::Line;
use crate::clex::token::LexTables;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

static IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z_][A-Za-z0-9_]*").expect("identifier pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateIdentifier {
    pub name: String,
    pub line: usize,
}

impl fmt::Display for DuplicateIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Identificador '{}' repetido. Ultima ocorrencia na linha {}.",
            self.name, self.line
        )
    }
}

/// Returns one record per repeated identifier, ordered by reported line.
pub fn find_duplicates(lines: &[Line], tables: &LexTables) -> Vec<DuplicateIdentifier> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut report: Vec<DuplicateIdentifier> = Vec::new();

    let names = lines.iter().flat_map(|line| {
        IDENTIFIER
            .find_iter(&line.text)
            .map(move |m| (m.as_str(), line.number))
    });

    for (name, line) in names.filter(|(name, _)| !tables.is_keyword(name)) {
        let count = counts.entry(name).or_insert(0);
        *count += 1;
        if *count < 2 {
            continue;
        }

        match slots.get(name) {
            Some(&slot) => report[slot].line = line,
            None => {
                slots.insert(name, report.len());
                report.push(DuplicateIdentifier {
                    name: name.to_string(),
                    line,
                });
            }
        }
    }

    report.sort_by_key(|d| d.line);
    tracing::debug!(duplicates = report.len(), "duplicate identifiers collected");
    report
}
