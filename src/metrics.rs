//! Site metrics and observability module.
//!
//! Process-wide counters for page views, form submissions and backend
//! failures, reported as JSON on `/metrics`.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Global site metrics singleton.
pub struct SiteMetrics {
    /// Pages rendered (including 404 pages)
    page_views: AtomicUsize,

    /// Contact submissions forwarded to the backend
    contact_submissions: AtomicUsize,

    /// Booking submissions forwarded to the backend
    booking_submissions: AtomicUsize,

    /// Forwarded submissions the backend rejected or that failed in transit
    submission_failures: AtomicUsize,

    /// Submissions refused by form validation (never forwarded)
    validation_rejections: AtomicUsize,

    /// Failed news/horses/reviews fetches
    content_fetch_failures: AtomicUsize,
}

/// Global metrics instance (initialized lazily)
static METRICS: OnceLock<SiteMetrics> = OnceLock::new();

impl SiteMetrics {
    /// Get the global site metrics instance.
    pub fn global() -> &'static SiteMetrics {
        METRICS.get_or_init(|| SiteMetrics {
            page_views: AtomicUsize::new(0),
            contact_submissions: AtomicUsize::new(0),
            booking_submissions: AtomicUsize::new(0),
            submission_failures: AtomicUsize::new(0),
            validation_rejections: AtomicUsize::new(0),
            content_fetch_failures: AtomicUsize::new(0),
        })
    }

    pub fn record_page_view(&self) {
        self.page_views.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_contact_submission(&self) {
        self.contact_submissions.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_booking_submission(&self) {
        self.booking_submissions.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_submission_failure(&self) {
        self.submission_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_validation_rejection(&self) {
        self.validation_rejections.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_content_fetch_failure(&self) {
        self.content_fetch_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let contact = self.contact_submissions.load(Ordering::Relaxed);
        let booking = self.booking_submissions.load(Ordering::Relaxed);
        let failures = self.submission_failures.load(Ordering::Relaxed);

        MetricsReport {
            page_views: self.page_views.load(Ordering::Relaxed),
            contact_submissions: contact,
            booking_submissions: booking,
            submission_failures: failures,
            submission_success_rate: success_rate(contact + booking, failures),
            validation_rejections: self.validation_rejections.load(Ordering::Relaxed),
            content_fetch_failures: self.content_fetch_failures.load(Ordering::Relaxed),
        }
    }

    /// Reset all metrics to zero (useful for testing).
    #[cfg(test)]
    pub fn reset(&self) {
        self.page_views.store(0, Ordering::Relaxed);
        self.contact_submissions.store(0, Ordering::Relaxed);
        self.booking_submissions.store(0, Ordering::Relaxed);
        self.submission_failures.store(0, Ordering::Relaxed);
        self.validation_rejections.store(0, Ordering::Relaxed);
        self.content_fetch_failures.store(0, Ordering::Relaxed);
    }
}

/// Percentage of forwarded submissions that succeeded; 0 when none were sent.
fn success_rate(total: usize, failures: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (total.saturating_sub(failures) as f64 / total as f64) * 100.0
}

/// Snapshot of the site metrics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub page_views: usize,
    pub contact_submissions: usize,
    pub booking_submissions: usize,
    pub submission_failures: usize,
    /// Percentage (0-100)
    pub submission_success_rate: f64,
    pub validation_rejections: usize,
    pub content_fetch_failures: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_rate() {
        assert_eq!(success_rate(0, 0), 0.0);
        assert_eq!(success_rate(4, 1), 75.0);
        assert_eq!(success_rate(2, 0), 100.0);
    }

    #[test]
    fn test_report_serializes() {
        let report = MetricsReport {
            page_views: 3,
            contact_submissions: 1,
            booking_submissions: 1,
            submission_failures: 1,
            submission_success_rate: 50.0,
            validation_rejections: 0,
            content_fetch_failures: 2,
        };

        let json = serde_json::to_value(&report).expect("serialize");
        assert_eq!(json["page_views"], 3);
        assert_eq!(json["submission_success_rate"], 50.0);
        assert_eq!(json["content_fetch_failures"], 2);
    }

    #[test]
    fn test_global_is_singleton() {
        assert!(std::ptr::eq(SiteMetrics::global(), SiteMetrics::global()));
    }

    #[test]
    fn test_local_counters() {
        // A private instance keeps this test independent of other tests
        let metrics = SiteMetrics {
            page_views: AtomicUsize::new(0),
            contact_submissions: AtomicUsize::new(0),
            booking_submissions: AtomicUsize::new(0),
            submission_failures: AtomicUsize::new(0),
            validation_rejections: AtomicUsize::new(0),
            content_fetch_failures: AtomicUsize::new(0),
        };

        metrics.record_page_view();
        metrics.record_contact_submission();
        metrics.record_booking_submission();
        metrics.record_submission_failure();
        metrics.record_validation_rejection();

        let report = metrics.report();
        assert_eq!(report.page_views, 1);
        assert_eq!(report.contact_submissions, 1);
        assert_eq!(report.booking_submissions, 1);
        assert_eq!(report.submission_success_rate, 50.0);
        assert_eq!(report.validation_rejections, 1);

        metrics.reset();
        assert_eq!(metrics.report().page_views, 0);
    }
}
