//! Source loading utilities
//!
//! `SourceLoader` reads C source text from a file or a string and runs transforms on it.
//! Both the CLI and the tests go through it.
//!
//! # Example
//!
//! ```rust
//! use clex::clex::loader::SourceLoader;
//!
//! let analysis = SourceLoader::from_path("codigo-c.c")?.analyze()?;
//! let tokens = SourceLoader::from_string("int x;").tokenize()?;
//! ```

use crate::clex::analysis::{Analysis, Analyzer};
use crate::clex::lexing::CleanedText;
use crate::clex::token::Token;
use crate::clex::transforms::standard::{ANALYSIS, CLEANING, TOKENS};
use crate::clex::transforms::{Transform, TransformError};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Error that can occur when loading source files
#[derive(Debug, Clone, PartialEq)]
pub enum LoaderError {
    /// The input file does not exist
    InputNotFound(PathBuf),
    /// Any other IO error when reading the file
    Io(String),
    /// Transform error
    Transform(TransformError),
}

impl fmt::Display for LoaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoaderError::InputNotFound(path) => {
                write!(f, "Arquivo '{}' nao encontrado.", path.display())
            }
            LoaderError::Io(msg) => write!(f, "IO error: {}", msg),
            LoaderError::Transform(err) => write!(f, "Transform error: {}", err),
        }
    }
}

impl std::error::Error for LoaderError {}

impl From<io::Error> for LoaderError {
    fn from(err: io::Error) -> Self {
        LoaderError::Io(err.to_string())
    }
}

impl From<TransformError> for LoaderError {
    fn from(err: TransformError) -> Self {
        LoaderError::Transform(err)
    }
}

/// Source loader with transform shortcuts
pub struct SourceLoader {
    source: String,
}

impl SourceLoader {
    /// Load from a file path.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected; the tokenizer
    /// reports them as invalid tokens.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => LoaderError::InputNotFound(path.to_path_buf()),
            _ => LoaderError::from(err),
        })?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "loaded source");
        Ok(SourceLoader {
            source: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }

    pub fn from_string<S: Into<String>>(source: S) -> Self {
        SourceLoader {
            source: source.into(),
        }
    }

    /// Run a custom transform on the source
    ///
    /// This is the generic method that all shortcuts use internally.
    pub fn with<O: 'static>(&self, transform: &Transform<String, O>) -> Result<O, LoaderError> {
        Ok(transform.run(self.source.clone())?)
    }

    /// Full analysis with the default tables.
    ///
    /// This is a shortcut for `.with(&ANALYSIS)`.
    pub fn analyze(&self) -> Result<Analysis, LoaderError> {
        self.with(&ANALYSIS)
    }

    pub fn analyze_with(&self, analyzer: &Analyzer) -> Result<Analysis, LoaderError> {
        Ok(analyzer.analyze(&self.source)?)
    }

    /// This is a shortcut for `.with(&TOKENS)`.
    pub fn tokenize(&self) -> Result<Vec<Token>, LoaderError> {
        self.with(&TOKENS)
    }

    /// The source with comments removed.
    pub fn clean(&self) -> Result<CleanedText, LoaderError> {
        self.with(&CLEANING)
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}
