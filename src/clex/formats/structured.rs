//! Structured serializations of an analysis.
//!
//! Both carry the same fields as the text report (line, token text, kind, code) and the
//! four diagnostic categories, as data instead of sentences.

use crate::clex::analysis::Analysis;
use crate::clex::formats::{FormatError, Formatter};

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, analysis: &Analysis) -> Result<String, FormatError> {
        serde_json::to_string_pretty(analysis)
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Pretty-printed JSON document"
    }
}

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, analysis: &Analysis) -> Result<String, FormatError> {
        serde_yaml::to_string(analysis).map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "YAML document"
    }
}
