//! Comment stripping
//!
//!     Removes `/* ... */` blocks and `// ...` line suffixes from the whole source at once.
//!     Block comments go first: a `//` inside a block comment must disappear with the block
//!     and never be matched on its own. Blocks are matched non-greedily, so nesting is not
//!     supported and the first `*/` closes the comment.
//!
//!     A block comment keeps the line breaks it spanned. Only its text is removed, which keeps
//!     every later line number pointing at the same line of the original file.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static BLOCK_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("block comment pattern is valid"));

static LINE_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"//[^\n]*").expect("line comment pattern is valid"));

/// Source text with comments removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedText {
    text: String,
    drop_blank_lines: bool,
}

impl CleanedText {
    pub fn new(text: impl Into<String>, drop_blank_lines: bool) -> Self {
        CleanedText {
            text: text.into(),
            drop_blank_lines,
        }
    }

    /// The stripped text, every original line break still in place.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether blank lines are elided downstream.
    pub fn drops_blank_lines(&self) -> bool {
        self.drop_blank_lines
    }
}

/// Strips comments, optionally marking blank lines for removal.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommentStripper {
    drop_blank_lines: bool,
}

impl CommentStripper {
    pub fn new() -> Self {
        CommentStripper::default()
    }

    pub fn dropping_blank_lines(mut self, drop: bool) -> Self {
        self.drop_blank_lines = drop;
        self
    }

    pub fn strip(&self, source: &str) -> CleanedText {
        CleanedText::new(strip_comments(source), self.drop_blank_lines)
    }
}

/// Removes block comments, then line comments.
pub fn strip_comments(source: &str) -> String {
    let without_blocks = BLOCK_COMMENT.replace_all(source, |caps: &Captures| {
        caps[0].chars().filter(|c| *c == '\n').collect::<String>()
    });
    LINE_COMMENT.replace_all(&without_blocks, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_line_comment_suffix() {
        assert_eq!(strip_comments("int x; // counter\n"), "int x; \n");
    }

    #[test]
    fn test_removes_inline_block_comment() {
        assert_eq!(strip_comments("int /* hidden */ x;"), "int  x;");
    }

    #[test]
    fn test_block_comment_keeps_spanned_newlines() {
        let source = "a;\n/* one\ntwo\nthree */ b;\nc;";
        assert_eq!(strip_comments(source), "a;\n\n\n b;\nc;");
    }

    #[test]
    fn test_line_comment_inside_block_goes_with_the_block() {
        assert_eq!(strip_comments("/* see // here */x"), "x");
    }

    #[test]
    fn test_block_is_non_greedy() {
        assert_eq!(strip_comments("/* a */ keep /* b */"), " keep ");
    }

    #[test]
    fn test_nested_block_closes_at_first_terminator() {
        assert_eq!(strip_comments("/* outer /* inner */ tail */"), " tail */");
    }

    #[test]
    fn test_unterminated_block_is_left_alone() {
        assert_eq!(strip_comments("x; /* never closed"), "x; /* never closed");
    }

    #[test]
    fn test_both_kinds_on_one_line_leave_it_empty() {
        assert_eq!(strip_comments("/* a */ // b\n\nint x;"), " \n\nint x;");
    }

    #[test]
    fn test_dropping_keeps_the_text_and_marks_it() {
        let cleaned = CommentStripper::new()
            .dropping_blank_lines(true)
            .strip("int a;\n// gone\n\nint b;");
        assert_eq!(cleaned.as_str(), "int a;\n\n\nint b;");
        assert!(cleaned.drops_blank_lines());
    }

    #[test]
    fn test_blank_lines_kept_by_default() {
        let cleaned = CommentStripper::new().strip("a;\n\nb;");
        assert!(!cleaned.drops_blank_lines());
    }
}
