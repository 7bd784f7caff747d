//! Basic metrics instrumentation for tracking handler activity.
//!
//! Provides counters and duration tracking for handled, rejected, and slow messages.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Metrics collector for a request handler.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// Messages forwarded to the sender
    handled_total: Arc<AtomicU64>,

    /// Messages rejected before forwarding
    rejected_total: Arc<AtomicU64>,

    /// Messages that took the slow path
    slow_path_total: Arc<AtomicU64>,

    /// Total processing time of handled messages in milliseconds
    processing_ms_total: Arc<AtomicU64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            handled_total: Arc::new(AtomicU64::new(0)),
            rejected_total: Arc::new(AtomicU64::new(0)),
            slow_path_total: Arc::new(AtomicU64::new(0)),
            processing_ms_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record a handled message with its processing time.
    pub fn record_handled(&self, duration: Duration) {
        self.handled_total.fetch_add(1, Ordering::Relaxed);
        self.processing_ms_total
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    pub fn record_rejected(&self) {
        self.rejected_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_slow_path(&self) {
        self.slow_path_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn handled_total(&self) -> u64 {
        self.handled_total.load(Ordering::Relaxed)
    }

    pub fn rejected_total(&self) -> u64 {
        self.rejected_total.load(Ordering::Relaxed)
    }

    pub fn slow_path_total(&self) -> u64 {
        self.slow_path_total.load(Ordering::Relaxed)
    }

    pub fn processing_ms_total(&self) -> u64 {
        self.processing_ms_total.load(Ordering::Relaxed)
    }

    /// Get average processing time of handled messages in milliseconds.
    pub fn processing_avg_ms(&self) -> f64 {
        let total = self.processing_ms_total.load(Ordering::Relaxed);
        let count = self.handled_total.load(Ordering::Relaxed);
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            handled_total: self.handled_total(),
            rejected_total: self.rejected_total(),
            slow_path_total: self.slow_path_total(),
            processing_ms_total: self.processing_ms_total(),
            processing_avg_ms: self.processing_avg_ms(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone)]
pub struct MetricsSummary {
    pub handled_total: u64,
    pub rejected_total: u64,
    pub slow_path_total: u64,
    pub processing_ms_total: u64,
    pub processing_avg_ms: f64,
}

/// Times one message from validation to forwarding.
pub struct HandleTimer {
    start: Instant,
    metrics: Metrics,
}

impl HandleTimer {
    pub fn new(metrics: Metrics) -> Self {
        Self {
            start: Instant::now(),
            metrics,
        }
    }

    /// Complete the timing and record the message as handled.
    pub fn complete(self) {
        let duration = self.start.elapsed();
        self.metrics.record_handled(duration);
    }
}
