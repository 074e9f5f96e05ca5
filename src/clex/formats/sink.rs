//! Record sinks
//!
//! A sink receives records one at a time. [`drain`] feeds the same stream to any number of
//! sinks in a single pass, so a report file and the console never disagree on content or
//! order.

use crate::clex::formats::Record;
use std::io::{self, Write};

pub trait RecordSink {
    fn emit(&mut self, record: &Record<'_>) -> io::Result<()>;

    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Feeds every record to every sink, then finishes them.
pub fn drain(records: &[Record<'_>], sinks: &mut [&mut dyn RecordSink]) -> io::Result<()> {
    for record in records {
        for sink in sinks.iter_mut() {
            sink.emit(record)?;
        }
    }
    for sink in sinks.iter_mut() {
        sink.finish()?;
    }
    Ok(())
}

/// Writes the report proper: one line per record, markers skipped.
#[derive(Debug)]
pub struct ReportWriter<W: Write> {
    out: W,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(out: W) -> Self {
        ReportWriter { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RecordSink for ReportWriter<W> {
    fn emit(&mut self, record: &Record<'_>) -> io::Result<()> {
        if record.is_marker() {
            return Ok(());
        }
        writeln!(self.out, "{record}")
    }

    fn finish(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

/// Console rendering: invalid tokens read as errors and each source line is closed by a
/// separator.
#[derive(Debug)]
pub struct ConsoleEcho<W: Write> {
    out: W,
}

impl<W: Write> ConsoleEcho<W> {
    pub fn new(out: W) -> Self {
        ConsoleEcho { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl ConsoleEcho<io::Stdout> {
    pub fn stdout() -> Self {
        ConsoleEcho::new(io::stdout())
    }
}

impl<W: Write> RecordSink for ConsoleEcho<W> {
    fn emit(&mut self, record: &Record<'_>) -> io::Result<()> {
        match record {
            Record::Token(token) if token.is_invalid() => writeln!(
                self.out,
                "Erro: Token invalido '{}' na linha {}",
                token.text, token.line
            ),
            _ => writeln!(self.out, "{record}"),
        }
    }

    fn finish(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
