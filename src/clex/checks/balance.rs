//! Delimiter balance
//!
//!     Character-level scan of `()`, `[]` and `{}` across the whole source with a stack of
//!     `(opener, line)`. It works on raw line text, not on tokens, so brackets inside string
//!     literals count too and the check still runs on lines the tokenizer could not make
//!     sense of.
//!
//!     Closers with an empty stack and closers that do not match the popped opener are
//!     reported as they are met. Openers still on the stack at the end are reported last,
//!     most recent first.

use crate::clex::lexing::Line;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BalanceError {
    UnmatchedClose {
        close: char,
        line: usize,
    },
    MismatchedPair {
        open: char,
        open_line: usize,
        close: char,
        close_line: usize,
    },
    UnclosedOpen {
        open: char,
        line: usize,
    },
}

impl fmt::Display for BalanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BalanceError::UnmatchedClose { close, line } => write!(
                f,
                "Erro: Delimitador de fechamento '{close}' na linha {line} não tem um correspondente de abertura."
            ),
            BalanceError::MismatchedPair {
                open,
                open_line,
                close,
                close_line,
            } => write!(
                f,
                "Erro: Delimitador '{open}' aberto na linha {open_line} não corresponde ao fechamento '{close}' na linha {close_line}."
            ),
            BalanceError::UnclosedOpen { open, line } => write!(
                f,
                "Erro: Delimitador de abertura '{open}' na linha {line} não foi fechado."
            ),
        }
    }
}

fn closer_for(open: char) -> Option<char> {
    match open {
        '(' => Some(')'),
        '[' => Some(']'),
        '{' => Some('}'),
        _ => None,
    }
}

fn is_closer(c: char) -> bool {
    matches!(c, ')' | ']' | '}')
}

pub fn check_balance(lines: &[Line]) -> Vec<BalanceError> {
    let mut stack: Vec<(char, usize)> = Vec::new();
    let mut errors = Vec::new();

    for line in lines {
        for c in line.text.chars() {
            if closer_for(c).is_some() {
                stack.push((c, line.number));
            } else if is_closer(c) {
                match stack.pop() {
                    None => errors.push(BalanceError::UnmatchedClose {
                        close: c,
                        line: line.number,
                    }),
                    Some((open, open_line)) if closer_for(open) != Some(c) => {
                        errors.push(BalanceError::MismatchedPair {
                            open,
                            open_line,
                            close: c,
                            close_line: line.number,
                        })
                    }
                    Some(_) => {}
                }
            }
        }
    }

    while let Some((open, line)) = stack.pop() {
        errors.push(BalanceError::UnclosedOpen { open, line });
    }

    tracing::debug!(errors = errors.len(), "balance checked");
    errors
}
