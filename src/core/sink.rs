//! Sink trait for log output destinations

use super::error::Result;

/// Destination for encoded lines.
///
/// Implementations serialize concurrent writers internally; one call to
/// `write_line` lands as one contiguous record.
pub trait Sink: Send + Sync {
    /// Append `line` plus a line terminator
    fn write_line(&self, line: &str) -> Result<()>;
    /// Push written data to stable storage
    fn sync(&self) -> Result<()>;
    fn name(&self) -> &str;
}
