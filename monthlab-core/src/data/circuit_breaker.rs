//! Circuit breaker for provider rate limiting and IP bans.
//!
//! HTTP 403 trips the breaker at once; repeated failures trip it after a
//! threshold. While open, every request is refused until the cooldown
//! (30 minutes by default) has passed.

use std::sync::Mutex;
use std::time::{Duration, Instant};

use tracing::{info, warn};

/// State of the circuit breaker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakerState {
    /// Requests are allowed.
    Closed,
    /// Requests are refused until cooldown expires.
    Open { tripped_at: Instant },
}

#[derive(Debug)]
struct Inner {
    state: BreakerState,
    consecutive_failures: u32,
}

/// Refuses requests to a provider after a ban or repeated failures.
#[derive(Debug)]
pub struct CircuitBreaker {
    inner: Mutex<Inner>,
    cooldown: Duration,
    failure_threshold: u32,
}

impl CircuitBreaker {
    pub fn new(cooldown: Duration, failure_threshold: u32) -> Self {
        Self {
            inner: Mutex::new(Inner {
                state: BreakerState::Closed,
                consecutive_failures: 0,
            }),
            cooldown,
            failure_threshold: failure_threshold.max(1),
        }
    }

    /// 30-minute cooldown, trips after 3 consecutive failures.
    pub fn default_provider() -> Self {
        Self::new(Duration::from_secs(30 * 60), 3)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        // A poisoned lock still holds a valid counter and state.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Check if requests are currently allowed. Resets an expired breaker.
    pub fn is_allowed(&self) -> bool {
        let mut inner = self.lock();
        match inner.state {
            BreakerState::Closed => true,
            BreakerState::Open { tripped_at } if tripped_at.elapsed() >= self.cooldown => {
                info!("circuit breaker cooldown expired, closing");
                inner.state = BreakerState::Closed;
                inner.consecutive_failures = 0;
                true
            }
            BreakerState::Open { .. } => false,
        }
    }

    pub fn state(&self) -> BreakerState {
        self.lock().state
    }

    pub fn record_success(&self) {
        self.lock().consecutive_failures = 0;
    }

    /// Count a failure; trips once the threshold is reached.
    pub fn record_failure(&self) {
        let mut inner = self.lock();
        inner.consecutive_failures += 1;
        if inner.consecutive_failures >= self.failure_threshold {
            warn!(
                failures = inner.consecutive_failures,
                "circuit breaker tripped after consecutive failures"
            );
            inner.state = BreakerState::Open {
                tripped_at: Instant::now(),
            };
        }
    }

    /// Trip immediately (403 Forbidden).
    pub fn trip(&self) {
        warn!("circuit breaker tripped");
        self.lock().state = BreakerState::Open {
            tripped_at: Instant::now(),
        };
    }

    /// Remaining cooldown, zero when closed.
    pub fn remaining_cooldown(&self) -> Duration {
        match self.lock().state {
            BreakerState::Closed => Duration::ZERO,
            BreakerState::Open { tripped_at } => self.cooldown.saturating_sub(tripped_at.elapsed()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let cb = CircuitBreaker::new(Duration::from_secs(60), 3);
        assert!(cb.is_allowed());
        assert_eq!(cb.state(), BreakerState::Closed);
        assert_eq!(cb.remaining_cooldown(), Duration::ZERO);
    }

    #[test]
    fn trips_at_threshold() {
        let cb = CircuitBreaker::new(Duration::from_secs(60), 3);
        cb.record_failure();
        cb.record_failure();
        assert!(cb.is_allowed());
        cb.record_failure();
        assert!(!cb.is_allowed());
        assert!(cb.remaining_cooldown() > Duration::ZERO);
    }

    #[test]
    fn success_resets_counter() {
        let cb = CircuitBreaker::new(Duration::from_secs(60), 2);
        cb.record_failure();
        cb.record_success();
        cb.record_failure();
        assert!(cb.is_allowed());
    }

    #[test]
    fn forbidden_trips_immediately() {
        let cb = CircuitBreaker::default_provider();
        cb.trip();
        assert!(!cb.is_allowed());
    }

    #[test]
    fn closes_after_cooldown() {
        let cb = CircuitBreaker::new(Duration::from_millis(10), 3);
        cb.trip();
        assert!(!cb.is_allowed());
        std::thread::sleep(Duration::from_millis(15));
        assert!(cb.is_allowed());
        assert_eq!(cb.state(), BreakerState::Closed);
    }
}
