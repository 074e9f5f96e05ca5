//! Transform pipeline infrastructure
//!
//! The analyzer is a straight line of batch stages, each consuming the whole output of the
//! previous one. Stages implement [`Runnable`]; a [`Transform`] chains them with `.then()`
//! and the compiler checks that each stage's input matches the previous output:
//!
//! ```rust,ignore
//! let pipeline = Transform::from_fn(Ok)
//!     .then(StripComments::new())   // String      -> CleanedText
//!     .then(SplitLines)             // CleanedText -> Vec<Line>
//!     .then(Analyze::new(tables));  // Vec<Line>   -> Analysis
//! ```
//!
//! Pre-built pipelines over the default tables live in [`standard`]; the
//! [`Analyzer`](crate::clex::analysis::Analyzer) builds one for a given configuration.

pub mod stages;
pub mod standard;

use std::fmt;

/// Error that can occur during transformation
#[derive(Debug, Clone, PartialEq)]
pub enum TransformError {
    /// Generic error with message
    Error(String),
    /// Stage failed with specific error
    StageFailed { stage: String, message: String },
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformError::Error(msg) => write!(f, "{}", msg),
            TransformError::StageFailed { stage, message } => {
                write!(f, "Stage '{}' failed: {}", stage, message)
            }
        }
    }
}

impl std::error::Error for TransformError {}

impl From<String> for TransformError {
    fn from(s: String) -> Self {
        TransformError::Error(s)
    }
}

impl From<&str> for TransformError {
    fn from(s: &str) -> Self {
        TransformError::Error(s.to_string())
    }
}

/// A single stage turning an `I` into an `O`.
pub trait Runnable<I, O> {
    fn run(&self, input: I) -> Result<O, TransformError>;
}

/// A chain of stages from `I` to `O`.
pub struct Transform<I, O> {
    run_fn: Box<dyn Fn(I) -> Result<O, TransformError> + Send + Sync>,
}

impl<I, O> Transform<I, O> {
    /// Create a transform from a function
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(I) -> Result<O, TransformError> + Send + Sync + 'static,
    {
        Transform {
            run_fn: Box::new(f),
        }
    }

    /// Append a stage, feeding this transform's output into it.
    pub fn then<O2, S>(self, stage: S) -> Transform<I, O2>
    where
        S: Runnable<O, O2> + Send + Sync + 'static,
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| {
                let intermediate = prev_run(input)?;
                stage.run(intermediate)
            }),
        }
    }

    /// Execute this transform on the given input
    pub fn run(&self, input: I) -> Result<O, TransformError> {
        (self.run_fn)(input)
    }
}

impl<I, O> Runnable<I, O> for Transform<I, O>
where
    I: 'static,
    O: 'static,
{
    fn run(&self, input: I) -> Result<O, TransformError> {
        Transform::run(self, input)
    }
}

impl<I, O> fmt::Debug for Transform<I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transform").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Trim;
    impl Runnable<String, String> for Trim {
        fn run(&self, input: String) -> Result<String, TransformError> {
            Ok(input.trim().to_string())
        }
    }

    struct CountLines;
    impl Runnable<String, usize> for CountLines {
        fn run(&self, input: String) -> Result<usize, TransformError> {
            Ok(input.lines().count())
        }
    }

    struct RejectEmpty;
    impl Runnable<String, String> for RejectEmpty {
        fn run(&self, input: String) -> Result<String, TransformError> {
            if input.is_empty() {
                Err(TransformError::StageFailed {
                    stage: "RejectEmpty".to_string(),
                    message: "no source".to_string(),
                })
            } else {
                Ok(input)
            }
        }
    }

    #[test]
    fn test_from_fn() {
        let transform = Transform::from_fn(|s: String| Ok(s.len()));
        assert_eq!(transform.run("int".to_string()).unwrap(), 3);
    }

    #[test]
    fn test_type_changing_chain() {
        let transform = Transform::from_fn(Ok).then(Trim).then(CountLines);
        assert_eq!(transform.run("\n a;\n b;\n\n".to_string()).unwrap(), 2);
    }

    #[test]
    fn test_error_stops_the_chain() {
        let transform = Transform::from_fn(Ok)
            .then(Trim)
            .then(RejectEmpty)
            .then(CountLines);

        assert_eq!(
            transform.run("   ".to_string()).unwrap_err(),
            TransformError::StageFailed {
                stage: "RejectEmpty".to_string(),
                message: "no source".to_string(),
            }
        );
    }

    #[test]
    fn test_transform_is_a_stage() {
        let inner = Transform::from_fn(Ok).then(Trim);
        let outer = Transform::from_fn(Ok).then(inner).then(CountLines);
        assert_eq!(outer.run(" x ".to_string()).unwrap(), 1);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(TransformError::from("bad input").to_string(), "bad input");
        let stage_err = TransformError::StageFailed {
            stage: "tokenize".to_string(),
            message: "line too long".to_string(),
        };
        assert_eq!(stage_err.to_string(), "Stage 'tokenize' failed: line too long");
    }
}
