//! Translation metrics and observability module.
//!
//! Tracks how many messages went to the provider, how many of those failed,
//! how many needed no provider round-trip, and how many results were
//! broadcast.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counters for relay translation activity.
///
/// Shared between connections through the application state.
#[derive(Debug, Default)]
pub struct TranslationMetrics {
    /// Number of API calls made to the translation provider
    api_calls: AtomicUsize,

    /// Number of API calls that failed
    api_failures: AtomicUsize,

    /// Number of messages returned unchanged without an API call
    skipped: AtomicUsize,

    /// Number of translated messages broadcast to clients
    broadcasts: AtomicUsize,
}

impl TranslationMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an API call to the translation provider.
    pub fn record_api_call(&self) {
        self.api_calls.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an API call failure.
    pub fn record_api_failure(&self) {
        self.api_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a message that needed no translation.
    pub fn record_skipped(&self) {
        self.skipped.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a broadcast of a translated message.
    pub fn record_broadcast(&self) {
        self.broadcasts.fetch_add(1, Ordering::Relaxed);
    }

    pub fn api_calls(&self) -> usize {
        self.api_calls.load(Ordering::Relaxed)
    }

    pub fn api_failures(&self) -> usize {
        self.api_failures.load(Ordering::Relaxed)
    }

    pub fn skipped(&self) -> usize {
        self.skipped.load(Ordering::Relaxed)
    }

    pub fn broadcasts(&self) -> usize {
        self.broadcasts.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let calls = self.api_calls();
        let failures = self.api_failures();
        let api_success_rate = if calls > 0 {
            (calls.saturating_sub(failures) as f64 / calls as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            api_calls: calls,
            api_failures: failures,
            api_success_rate,
            skipped: self.skipped(),
            broadcasts: self.broadcasts(),
        }
    }
}

/// Metrics report containing current translation statistics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub api_calls: usize,
    pub api_failures: usize,

    /// API success rate as a percentage (0-100)
    pub api_success_rate: f64,

    pub skipped: usize,
    pub broadcasts: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Counter Tests ====================

    #[test]
    fn test_record_api_call() {
        let metrics = TranslationMetrics::new();

        assert_eq!(metrics.api_calls(), 0);
        metrics.record_api_call();
        metrics.record_api_call();
        assert_eq!(metrics.api_calls(), 2);
    }

    #[test]
    fn test_record_api_failure() {
        let metrics = TranslationMetrics::new();

        metrics.record_api_failure();
        assert_eq!(metrics.api_failures(), 1);
    }

    #[test]
    fn test_record_skipped_and_broadcast() {
        let metrics = TranslationMetrics::new();

        metrics.record_skipped();
        metrics.record_broadcast();
        metrics.record_broadcast();
        assert_eq!(metrics.skipped(), 1);
        assert_eq!(metrics.broadcasts(), 2);
    }

    // ==================== Report Tests ====================

    #[test]
    fn test_report_empty() {
        let report = TranslationMetrics::new().report();

        assert_eq!(report.api_calls, 0);
        assert_eq!(report.api_failures, 0);
        assert_eq!(report.api_success_rate, 0.0);
        assert_eq!(report.skipped, 0);
        assert_eq!(report.broadcasts, 0);
    }

    #[test]
    fn test_report_api_success_rate() {
        let metrics = TranslationMetrics::new();

        // 4 calls, 1 failure = 75% success rate
        for _ in 0..4 {
            metrics.record_api_call();
        }
        metrics.record_api_failure();

        let report = metrics.report();
        assert_eq!(report.api_calls, 4);
        assert_eq!(report.api_failures, 1);
        assert_eq!(report.api_success_rate, 75.0);
    }

    #[test]
    fn test_report_all_api_failures() {
        let metrics = TranslationMetrics::new();

        metrics.record_api_call();
        metrics.record_api_failure();
        metrics.record_api_call();
        metrics.record_api_failure();

        assert_eq!(metrics.report().api_success_rate, 0.0);
    }

    #[test]
    fn test_report_serializes() {
        let metrics = TranslationMetrics::new();
        metrics.record_api_call();

        let json = serde_json::to_value(metrics.report()).unwrap();
        assert_eq!(json["api_calls"], 1);
        assert_eq!(json["api_success_rate"], 100.0);
    }
}
