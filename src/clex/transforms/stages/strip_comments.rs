//! Comment stripping stage

use crate::clex::lexing::{CleanedText, CommentStripper};
use crate::clex::transforms::{Runnable, TransformError};

/// Comment stripping stage
///
/// # Input
/// - `String` - raw source text
///
/// # Output
/// - `CleanedText` - source without comments, line breaks preserved
#[derive(Debug, Clone, Copy, Default)]
pub struct StripComments {
    stripper: CommentStripper,
}

impl StripComments {
    pub fn new() -> Self {
        StripComments::default()
    }

    pub fn dropping_blank_lines(drop: bool) -> Self {
        StripComments {
            stripper: CommentStripper::new().dropping_blank_lines(drop),
        }
    }
}

impl Runnable<String, CleanedText> for StripComments {
    fn run(&self, input: String) -> Result<CleanedText, TransformError> {
        Ok(self.stripper.strip(&input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_both_comment_kinds() {
        let cleaned = StripComments::new()
            .run("a; /* b */ // c\nd;".to_string())
            .unwrap();
        assert_eq!(cleaned.as_str(), "a;  \nd;");
    }

    #[test]
    fn test_carries_blank_line_choice() {
        let cleaned = StripComments::dropping_blank_lines(true)
            .run("a;\n\nb;".to_string())
            .unwrap();
        assert!(cleaned.drops_blank_lines());
    }
}
