//! Reporting fetch gate
//!
//! Reports fetch once per mount and once per timeframe change. Aggregation
//! is server-computed, so a timeframe change is always a new fetch, and a
//! response to a superseded fetch is discarded, since two in-flight fetches
//! are not guaranteed to resolve in dispatch order.

use crate::list::FetchTicket;
use lms_core::types::Timeframe;

/// Lifecycle of one fetched report payload
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ReportState<T> {
    /// Nothing fetched yet
    #[default]
    Idle,
    /// A fetch is in flight
    Loading,
    /// The payload is available
    Loaded(T),
    /// The fetch failed; terminal until an explicit new fetch
    Errored(String),
}

/// Controller for a timeframe-parameterized report view
#[derive(Debug)]
pub struct ReportController<T> {
    timeframe: Timeframe,
    generation: u64,
    state: ReportState<T>,
}

impl<T> Default for ReportController<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ReportController<T> {
    /// Create a controller at the default timeframe (daily)
    #[must_use]
    pub fn new() -> Self {
        Self {
            timeframe: Timeframe::default(),
            generation: 0,
            state: ReportState::Idle,
        }
    }

    /// Currently selected timeframe
    #[must_use]
    pub const fn timeframe(&self) -> Timeframe {
        self.timeframe
    }

    /// Current report state
    #[must_use]
    pub const fn state(&self) -> &ReportState<T> {
        &self.state
    }

    /// Start the mount-time fetch (or an explicit refetch).
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.state = ReportState::Loading;
        FetchTicket(self.generation)
    }

    /// Select a timeframe. Always triggers a fresh fetch and invalidates
    /// every earlier ticket, even when the timeframe is unchanged.
    pub fn set_timeframe(&mut self, timeframe: Timeframe) -> FetchTicket {
        self.timeframe = timeframe;
        self.begin_fetch()
    }

    /// Deliver a successful fetch. A stale ticket is discarded.
    pub fn resolve_ok(&mut self, ticket: FetchTicket, payload: T) {
        if ticket.0 != self.generation {
            return;
        }
        self.state = ReportState::Loaded(payload);
    }

    /// Deliver a failed fetch. A stale ticket is discarded.
    pub fn resolve_err(&mut self, ticket: FetchTicket, message: impl Into<String>) {
        if ticket.0 != self.generation {
            return;
        }
        self.state = ReportState::Errored(message.into());
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use lms_core::types::{RevenuePoint, RevenueReport};
    use pretty_assertions::assert_eq;

    fn report(total: f64) -> RevenueReport {
        RevenueReport {
            total_revenue: total,
            breakdown: vec![RevenuePoint {
                period: "2025-05-21".to_string(),
                amount: total,
            }],
        }
    }

    #[test]
    fn test_mount_fetch_then_loaded() {
        let mut controller: ReportController<RevenueReport> = ReportController::new();
        assert_eq!(controller.timeframe(), Timeframe::Day);

        let ticket = controller.begin_fetch();
        assert!(matches!(controller.state(), ReportState::Loading));

        controller.resolve_ok(ticket, report(100.0));
        assert!(matches!(controller.state(), ReportState::Loaded(_)));
    }

    #[test]
    fn test_timeframe_change_supersedes_inflight_fetch() {
        let mut controller: ReportController<RevenueReport> = ReportController::new();

        let daily = controller.begin_fetch();
        let monthly = controller.set_timeframe(Timeframe::Month);
        assert_eq!(controller.timeframe(), Timeframe::Month);

        // The monthly response arrives first and wins.
        controller.resolve_ok(monthly, report(4200.0));
        // The daily response straggles in afterwards and is discarded.
        controller.resolve_ok(daily, report(100.0));

        match controller.state() {
            ReportState::Loaded(loaded) => {
                assert!((loaded.total_revenue - 4200.0).abs() < f64::EPSILON);
            }
            other => panic!("expected Loaded, got {other:?}"),
        }
    }

    #[test]
    fn test_stale_error_is_discarded_too() {
        let mut controller: ReportController<RevenueReport> = ReportController::new();

        let stale = controller.begin_fetch();
        let fresh = controller.set_timeframe(Timeframe::Year);

        controller.resolve_ok(fresh, report(9000.0));
        controller.resolve_err(stale, "timed out");

        assert!(matches!(controller.state(), ReportState::Loaded(_)));
    }

    #[test]
    fn test_fetch_failure_is_surfaced() {
        let mut controller: ReportController<RevenueReport> = ReportController::new();
        let ticket = controller.begin_fetch();
        controller.resolve_err(ticket, "Failed to fetch payment data");

        assert_eq!(
            controller.state(),
            &ReportState::Errored("Failed to fetch payment data".to_string())
        );
    }
}
