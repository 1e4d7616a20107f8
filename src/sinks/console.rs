//! Console sinks used to mirror records on the terminal

use crate::core::{LogLevel, Result, Sink};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stream {
    Stdout,
    Stderr,
}

pub struct ConsoleSink {
    stream: Stream,
}

impl ConsoleSink {
    pub fn stdout() -> Self {
        Self {
            stream: Stream::Stdout,
        }
    }

    pub fn stderr() -> Self {
        Self {
            stream: Stream::Stderr,
        }
    }
}

impl Sink for ConsoleSink {
    fn write_line(&self, line: &str) -> Result<()> {
        match self.stream {
            Stream::Stdout => writeln!(std::io::stdout().lock(), "{}", line)?,
            Stream::Stderr => writeln!(std::io::stderr().lock(), "{}", line)?,
        }
        Ok(())
    }

    fn sync(&self) -> Result<()> {
        match self.stream {
            Stream::Stdout => std::io::stdout().flush()?,
            Stream::Stderr => std::io::stderr().flush()?,
        }
        Ok(())
    }

    fn name(&self) -> &str {
        match self.stream {
            Stream::Stdout => "stdout",
            Stream::Stderr => "stderr",
        }
    }
}

/// Terminal copy of every routed record: Error and above go to stderr,
/// everything else to stdout
pub struct ConsoleMirror {
    out: Box<dyn Sink>,
    err: Box<dyn Sink>,
}

impl ConsoleMirror {
    pub fn new() -> Self {
        Self::with_sinks(Box::new(ConsoleSink::stdout()), Box::new(ConsoleSink::stderr()))
    }

    /// Mirror into arbitrary sinks instead of the process streams
    pub fn with_sinks(out: Box<dyn Sink>, err: Box<dyn Sink>) -> Self {
        Self { out, err }
    }

    pub fn sink_for(&self, level: LogLevel) -> &dyn Sink {
        if level >= LogLevel::Error {
            self.err.as_ref()
        } else {
            self.out.as_ref()
        }
    }
}

impl Default for ConsoleMirror {
    fn default() -> Self {
        Self::new()
    }
}
