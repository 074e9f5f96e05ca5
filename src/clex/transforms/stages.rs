//! Individual transformation stages
//!
//! Each stage implements [`Runnable`](crate::clex::transforms::Runnable) and wraps one step
//! of the analyzer so it can be chained into a pipeline.

pub mod analyze;
pub mod lex_lines;
pub mod split_lines;
pub mod strip_comments;

pub use analyze::Analyze;
pub use lex_lines::LexLines;
pub use split_lines::SplitLines;
pub use strip_comments::StripComments;
