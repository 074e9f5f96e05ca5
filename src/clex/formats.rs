//! Output side of the analyzer
//!
//! Everything a run reports flows through one ordered stream of [`Record`]s built by
//! [`Analysis::records`](crate::clex::analysis::Analysis::records). Consumers are either:
//!
//! - [`RecordSink`]s, fed record by record (a report file, the console, a buffer), or
//! - whole-report [`Formatter`]s looked up by name in the [`FormatRegistry`]
//!   (`text`, `json`, `yaml`).
//!
//! Nothing in the core writes anywhere by itself; the CLI decides which sinks exist.

pub mod record;
pub mod registry;
pub mod sink;
pub mod structured;
pub mod text;

pub use record::Record;
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use sink::{drain, ConsoleEcho, RecordSink, ReportWriter};
pub use structured::{JsonFormatter, YamlFormatter};
pub use text::TextFormatter;
