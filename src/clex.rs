//! Lexing and checking for C-like sources.
//!
//!     - [token]: token kinds, their numeric codes and the fixed lookup tables.
//!     - [lexing]: comment stripping, line splitting, tokenizing and classifying.
//!     - [checks]: terminator, balance and duplicate identifier checks.
//!     - [analysis]: one run's results and the configurable [Analyzer].
//!     - [transforms]: the stage pipeline everything above is wired through.
//!     - [formats]: the record stream, its sinks and whole-report formatters.
//!     - [loader]: reading sources from disk or strings.

pub mod analysis;
pub mod checks;
pub mod formats;
pub mod lexing;
pub mod loader;
pub mod testing;
pub mod token;
pub mod transforms;

pub use analysis::{Analysis, Analyzer, AnalyzerOptions};
pub use loader::{LoaderError, SourceLoader};
pub use token::{KeywordTable, Token, TokenKind};
