//! Logger metrics for observability
//!
//! Counters for records written, records lost to write failures, and records
//! suppressed by the threshold pre-filter.

use super::log_level::LogLevel;
use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use level_partition_logger::{LogLevel, LoggerMetrics};
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_written(LogLevel::Warn);
/// metrics.record_dropped();
///
/// assert_eq!(metrics.total_written(), 1);
/// assert_eq!(metrics.written_at(LogLevel::Warn), 1);
/// assert_eq!(metrics.dropped_count(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Records written to their level file, indexed by level
    written: [AtomicU64; 6],

    /// Records lost because a sink write failed
    dropped_count: AtomicU64,

    /// Records suppressed by the threshold before routing
    filtered_count: AtomicU64,

    /// Console copies that failed; the file write is unaffected
    mirror_failed_count: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            written: [
                AtomicU64::new(0),
                AtomicU64::new(0),
                AtomicU64::new(0),
                AtomicU64::new(0),
                AtomicU64::new(0),
                AtomicU64::new(0),
            ],
            dropped_count: AtomicU64::new(0),
            filtered_count: AtomicU64::new(0),
            mirror_failed_count: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn written_at(&self, level: LogLevel) -> u64 {
        self.written[level as usize].load(Ordering::Relaxed)
    }

    /// Total records written across all levels
    pub fn total_written(&self) -> u64 {
        self.written.iter().map(|c| c.load(Ordering::Relaxed)).sum()
    }

    #[inline]
    pub fn dropped_count(&self) -> u64 {
        self.dropped_count.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn filtered_count(&self) -> u64 {
        self.filtered_count.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn mirror_failed_count(&self) -> u64 {
        self.mirror_failed_count.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_written(&self, level: LogLevel) -> u64 {
        self.written[level as usize].fetch_add(1, Ordering::Relaxed)
    }

    /// Record a dropped log, returning the previous count
    #[inline]
    pub fn record_dropped(&self) -> u64 {
        self.dropped_count.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_filtered(&self) -> u64 {
        self.filtered_count.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_mirror_failed(&self) -> u64 {
        self.mirror_failed_count.fetch_add(1, Ordering::Relaxed)
    }

    /// Get drop rate as a percentage (0.0 - 100.0)
    ///
    /// Returns 0.0 if no logs have been processed.
    pub fn drop_rate(&self) -> f64 {
        let dropped = self.dropped_count() as f64;
        let total = self.total_written() as f64 + dropped;
        if total == 0.0 {
            0.0
        } else {
            (dropped / total) * 100.0
        }
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_new() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.total_written(), 0);
        assert_eq!(metrics.dropped_count(), 0);
        assert_eq!(metrics.filtered_count(), 0);
        assert_eq!(metrics.mirror_failed_count(), 0);
    }

    #[test]
    fn test_written_per_level() {
        let metrics = LoggerMetrics::new();
        metrics.record_written(LogLevel::Debug);
        metrics.record_written(LogLevel::Fatal);
        metrics.record_written(LogLevel::Fatal);

        assert_eq!(metrics.written_at(LogLevel::Debug), 1);
        assert_eq!(metrics.written_at(LogLevel::Fatal), 2);
        assert_eq!(metrics.written_at(LogLevel::Info), 0);
        assert_eq!(metrics.total_written(), 3);
    }

    #[test]
    fn test_metrics_record_dropped() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.record_dropped(), 0); // Returns previous value
        assert_eq!(metrics.dropped_count(), 1);
    }

    #[test]
    fn test_metrics_drop_rate() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.drop_rate(), 0.0);

        for _ in 0..100 {
            metrics.record_written(LogLevel::Info);
        }
        assert_eq!(metrics.drop_rate(), 0.0);

        // 100 written, 10 dropped - ~9.09% drop rate
        for _ in 0..10 {
            metrics.record_dropped();
        }
        let rate = metrics.drop_rate();
        assert!(rate > 9.0 && rate < 10.0, "Drop rate was {}", rate);
    }
}
