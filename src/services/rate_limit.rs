// src/services/rate_limit.rs
// DOCUMENTATION: Admission control for the /api surface
// PURPOSE: Per-client request ceiling over a sliding window

use std::num::NonZeroU32;
use std::time::Duration;

use governor::clock::{Clock, DefaultClock};
use governor::middleware::NoOpMiddleware;
use governor::state::keyed::DashMapStateStore;
use governor::{Quota, RateLimiter};

/// Keyed admission controller
/// DOCUMENTATION: Wraps a governor keyed rate limiter; each client
/// identifier (IP address) gets an independent budget of
/// `max_requests` per `window`. The clock is generic so tests can
/// drive time with `FakeRelativeClock`; the concurrent DashMap state
/// store needs no external locking.
pub struct AdmissionControl<C: Clock = DefaultClock> {
    limiter: RateLimiter<String, DashMapStateStore<String>, C, NoOpMiddleware<C::Instant>>,
}

impl AdmissionControl {
    /// Controller against the real (monotonic) clock
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self::with_clock(max_requests, window, &DefaultClock::default())
    }
}

impl<C: Clock> AdmissionControl<C> {
    /// Controller with an explicit clock, for tests
    pub fn with_clock(max_requests: u32, window: Duration, clock: &C) -> Self {
        let burst = NonZeroU32::new(max_requests).unwrap_or(NonZeroU32::MIN);

        // One cell replenishes every window/max_requests; a full burst
        // admits max_requests back-to-back before the first rejection.
        let period = window
            .checked_div(burst.get())
            .filter(|p| !p.is_zero())
            .unwrap_or(Duration::from_millis(1));

        let quota = Quota::with_period(period)
            .unwrap_or_else(|| Quota::per_second(NonZeroU32::MIN))
            .allow_burst(burst);

        Self {
            limiter: RateLimiter::new(quota, DashMapStateStore::default(), clock),
        }
    }

    /// Returns true when the client is within its budget; counting the
    /// request against the budget happens as part of the check.
    pub fn try_acquire(&self, client: &str) -> bool {
        self.limiter.check_key(&client.to_string()).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use governor::clock::FakeRelativeClock;

    const WINDOW: Duration = Duration::from_secs(900);

    #[test]
    fn ceiling_admits_exactly_max_requests() {
        let clock = FakeRelativeClock::default();
        let admission = AdmissionControl::with_clock(100, WINDOW, &clock);

        for i in 0..100 {
            assert!(admission.try_acquire("10.0.0.1"), "request {} rejected", i + 1);
        }
        assert!(!admission.try_acquire("10.0.0.1"), "101st request admitted");
    }

    #[test]
    fn budget_recovers_after_a_full_window() {
        let clock = FakeRelativeClock::default();
        let admission = AdmissionControl::with_clock(100, WINDOW, &clock);

        for _ in 0..100 {
            assert!(admission.try_acquire("10.0.0.1"));
        }
        assert!(!admission.try_acquire("10.0.0.1"));

        clock.advance(WINDOW);
        assert!(admission.try_acquire("10.0.0.1"));
    }

    #[test]
    fn clients_do_not_share_budgets() {
        let clock = FakeRelativeClock::default();
        let admission = AdmissionControl::with_clock(1, WINDOW, &clock);

        assert!(admission.try_acquire("10.0.0.1"));
        assert!(!admission.try_acquire("10.0.0.1"));
        assert!(admission.try_acquire("10.0.0.2"));
    }
}
