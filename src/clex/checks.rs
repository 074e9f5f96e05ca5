//! Sanity checks layered over the lines and tokens.
//!
//! The three checks are independent of each other and of classification order. None of them
//! stops the run: each returns a list that is merged with the others only when reporting.
//! They are heuristics, not a grammar.

pub mod balance;
pub mod duplicates;
pub mod terminator;

pub use balance::{check_balance, BalanceError};
pub use duplicates::{find_duplicates, DuplicateIdentifier};
pub use terminator::{check_terminators, TerminatorWarning};
