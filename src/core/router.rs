//! Level router: one core per level, each accepting only its own level
//!
//! Routing is a partition, not the usual at-or-above cascade. A Warn record
//! lands in `warn.log` and nowhere else; `error.log` never sees it. Existing
//! deployments depend on this layout, so it must stay exact-match.

use super::config::LogConfiguration;
use super::error::Result;
use super::log_entry::LogEntry;
use super::log_level::LogLevel;
use super::metrics::LoggerMetrics;
use super::output_format::Encoder;
use super::sink::Sink;
use crate::sinks::{self, ConsoleMirror};

/// A sink paired with the one level it accepts
pub struct LevelCore {
    level: LogLevel,
    sink: Box<dyn Sink>,
}

impl LevelCore {
    pub fn new(level: LogLevel, sink: Box<dyn Sink>) -> Self {
        Self { level, sink }
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Exact match only
    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        level == self.level
    }

    pub fn sink(&self) -> &dyn Sink {
        self.sink.as_ref()
    }
}

pub struct LevelRouter {
    cores: Vec<LevelCore>,
    encoder: Encoder,
    console: Option<ConsoleMirror>,
    metrics: LoggerMetrics,
}

impl LevelRouter {
    /// Open one file per level under `config.director`, in level order.
    ///
    /// The directory must already exist. The first sink that fails to open
    /// aborts the build; files opened before it are closed again on return.
    pub fn build(config: &LogConfiguration, encoder: Encoder) -> Result<Self> {
        let mut cores = Vec::with_capacity(LogLevel::ALL.len());
        for level in LogLevel::ALL {
            let sink = sinks::open_sink(&config.director, level)?;
            cores.push(LevelCore::new(level, Box::new(sink)));
        }

        let router = Self::from_cores(cores, encoder);
        Ok(if config.log_in_console {
            router.with_console(ConsoleMirror::new())
        } else {
            router
        })
    }

    /// Assemble a router from prepared cores
    pub fn from_cores(cores: Vec<LevelCore>, encoder: Encoder) -> Self {
        Self {
            cores,
            encoder,
            console: None,
            metrics: LoggerMetrics::new(),
        }
    }

    #[must_use]
    pub fn with_console(mut self, console: ConsoleMirror) -> Self {
        self.console = Some(console);
        self
    }

    pub fn cores(&self) -> &[LevelCore] {
        &self.cores
    }

    pub fn console(&self) -> Option<&ConsoleMirror> {
        self.console.as_ref()
    }

    pub fn encoder(&self) -> &Encoder {
        &self.encoder
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Write `entry` to the core matching its level.
    ///
    /// Returns `false` when no core accepts the level or the file write
    /// failed. Failures, console mirror included, are reported on stderr and
    /// counted, never raised. A failed mirror does not affect the result.
    pub fn route(&self, entry: &LogEntry) -> bool {
        let Some(core) = self.cores.iter().find(|c| c.enabled(entry.level)) else {
            return false;
        };

        let line = self.encoder.encode(entry);
        let written = match core.sink().write_line(&line) {
            Ok(()) => {
                self.metrics.record_written(entry.level);
                true
            }
            Err(e) => {
                self.metrics.record_dropped();
                eprintln!(
                    "[LOGGER ERROR] Sink '{}' failed to write {} record: {}",
                    core.sink().name(),
                    entry.level,
                    e
                );
                false
            }
        };

        if let Some(ref console) = self.console {
            let sink = console.sink_for(entry.level);
            if let Err(e) = sink.write_line(&line) {
                self.metrics.record_mirror_failed();
                eprintln!(
                    "[LOGGER ERROR] Console mirror '{}' failed to write {} record: {}",
                    sink.name(),
                    entry.level,
                    e
                );
            }
        }

        written
    }

    /// Sync the sink of one level
    pub fn sync_level(&self, level: LogLevel) -> Result<()> {
        for core in self.cores.iter().filter(|c| c.enabled(level)) {
            core.sink().sync()?;
        }
        Ok(())
    }

    /// Sync every sink, returning the first error after trying all of them
    pub fn sync(&self) -> Result<()> {
        let mut first_error = None;
        for core in &self.cores {
            if let Err(e) = core.sink().sync() {
                eprintln!("[LOGGER ERROR] Sink '{}' sync failed: {}", core.sink().name(), e);
                first_error.get_or_insert(e);
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
