//! # clex
//!
//! A lexical analyzer and sanity checker for C-like source code.
//!
//! The source is stripped of comments, split into numbered lines, tokenized and classified.
//! Three independent checks then run over the result: missing statement terminators,
//! delimiter balance and repeated identifiers. See [clex](crate::clex) for the layout.

pub mod clex;
