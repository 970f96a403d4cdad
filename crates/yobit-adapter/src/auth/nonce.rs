/*
[INPUT]:  Wall-clock readings from a Clock implementation
[OUTPUT]: Strictly increasing nonce values per credential
[POS]:    Auth layer - replay-protection counter for the private API
[UPDATE]: When changing nonce policy, bounds or the waiting strategy
*/

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::http::{Result, YobitError};

/// Largest nonce the exchange accepts
pub const MAX_NONCE: u64 = 2_147_483_646;

/// Extra time slept past the second boundary so the next reading lands in the new second
const TICK_SLACK: Duration = Duration::from_millis(5);

/// Source of wall-clock time, expressed as the offset from the Unix epoch
pub trait Clock: Send + Sync + fmt::Debug {
    fn now(&self) -> Duration;
}

/// `SystemTime`-backed clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or(Duration::ZERO)
    }
}

/// Per-credential monotonic counter.
///
/// Values are wall-clock seconds. Issuance is serialized through an async mutex,
/// so concurrent callers sharing one counter never see the same or a smaller
/// value. When the clock has not moved past the last issued value, `next` sleeps
/// until the next whole second (at most one second) while holding the lock. This
/// throttles callers to one signed request per second per credential. If the
/// clock still lags after that wait, the counter issues `last + 1`.
///
/// The counter starts at the current wall-clock second, so the first request
/// from a fresh counter may also wait. Issued values are never handed out twice,
/// even when the request that consumed one fails.
#[derive(Debug)]
pub struct NonceCounter {
    last_issued: Mutex<u64>,
    clock: Arc<dyn Clock>,
}

impl NonceCounter {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        let start = clock.now().as_secs();
        Self {
            last_issued: Mutex::new(start),
            clock,
        }
    }

    /// Last value handed out (or the initial clock reading)
    pub async fn last_issued(&self) -> u64 {
        *self.last_issued.lock().await
    }

    /// Issue the next nonce
    pub async fn next(&self) -> Result<u64> {
        let mut last = self.last_issued.lock().await;

        let mut candidate = self.clock.now().as_secs();
        if candidate <= *last {
            let wait = until_next_second(self.clock.now());
            debug!(
                last_issued = *last,
                wait_ms = wait.as_millis() as u64,
                "waiting for nonce clock tick"
            );
            tokio::time::sleep(wait).await;

            candidate = self.clock.now().as_secs();
            if candidate <= *last {
                warn!(
                    last_issued = *last,
                    clock = candidate,
                    "clock did not advance past last nonce; incrementing"
                );
                candidate = *last + 1;
            }
        }

        if candidate > MAX_NONCE {
            return Err(YobitError::validation(format!(
                "nonce {candidate} exceeds maximum {MAX_NONCE}; issue a new API key"
            )));
        }

        *last = candidate;
        Ok(candidate)
    }
}

impl Default for NonceCounter {
    fn default() -> Self {
        Self::new()
    }
}

fn until_next_second(now: Duration) -> Duration {
    Duration::from_secs(1) - Duration::from_nanos(u64::from(now.subsec_nanos())) + TICK_SLACK
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};

    /// Clock driven by tokio's (pausable) time
    #[derive(Debug)]
    struct TokioClock {
        base: Duration,
        origin: tokio::time::Instant,
    }

    impl TokioClock {
        fn starting_at(base: Duration) -> Self {
            Self {
                base,
                origin: tokio::time::Instant::now(),
            }
        }
    }

    impl Clock for TokioClock {
        fn now(&self) -> Duration {
            self.base + self.origin.elapsed()
        }
    }

    /// Clock frozen at a fixed reading
    #[derive(Debug)]
    struct FrozenClock(AtomicU64);

    impl Clock for FrozenClock {
        fn now(&self) -> Duration {
            Duration::from_secs(self.0.load(Ordering::SeqCst))
        }
    }

    #[test]
    fn test_until_next_second() {
        let wait = until_next_second(Duration::from_millis(1_700_000_000_250));
        assert_eq!(wait, Duration::from_millis(755));

        let wait = until_next_second(Duration::from_secs(1_700_000_000));
        assert_eq!(wait, Duration::from_millis(1_005));
    }

    #[tokio::test(start_paused = true)]
    async fn test_sequential_nonces_strictly_increase() {
        let clock = Arc::new(TokioClock::starting_at(Duration::from_millis(
            1_700_000_000_400,
        )));
        let counter = NonceCounter::with_clock(clock);

        let mut previous = counter.last_issued().await;
        for _ in 0..5 {
            let nonce = counter.next().await.expect("nonce");
            assert!(nonce > previous, "{nonce} not greater than {previous}");
            previous = nonce;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_same_tick_waits_for_next_second() {
        let clock = Arc::new(TokioClock::starting_at(Duration::from_millis(
            1_700_000_000_400,
        )));
        let counter = NonceCounter::with_clock(clock);

        let start = tokio::time::Instant::now();
        let first = counter.next().await.expect("first nonce");
        let second = counter.next().await.expect("second nonce");

        assert_eq!(first, 1_700_000_001);
        assert_eq!(second, 1_700_000_002);
        // 600ms to reach the first boundary, a full second for the next one
        assert!(start.elapsed() >= Duration::from_millis(1_600));
        assert!(start.elapsed() <= Duration::from_millis(1_700));
    }

    #[tokio::test(start_paused = true)]
    async fn test_frozen_clock_falls_back_to_increment() {
        let clock = Arc::new(FrozenClock(AtomicU64::new(1_700_000_000)));
        let counter = NonceCounter::with_clock(clock.clone());

        assert_eq!(counter.next().await.expect("nonce"), 1_700_000_001);
        assert_eq!(counter.next().await.expect("nonce"), 1_700_000_002);

        // Clock stepping backwards never lowers the counter
        clock.0.store(1_600_000_000, Ordering::SeqCst);
        assert_eq!(counter.next().await.expect("nonce"), 1_700_000_003);
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_callers_never_share_a_value() {
        let clock = Arc::new(TokioClock::starting_at(Duration::from_secs(1_700_000_000)));
        let counter = Arc::new(NonceCounter::with_clock(clock));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let counter = Arc::clone(&counter);
            handles.push(tokio::spawn(async move { counter.next().await }));
        }

        let mut issued = Vec::new();
        for handle in handles {
            issued.push(handle.await.expect("join").expect("nonce"));
        }
        issued.sort_unstable();
        issued.dedup();
        assert_eq!(issued.len(), 8);
    }

    #[tokio::test(start_paused = true)]
    async fn test_exhausted_range_is_rejected() {
        let clock = Arc::new(FrozenClock(AtomicU64::new(MAX_NONCE)));
        let counter = NonceCounter::with_clock(clock);

        let err = counter.next().await.expect_err("range exhausted");
        assert!(err.is_validation_error());
        assert_eq!(counter.last_issued().await, MAX_NONCE);
    }

    #[tokio::test]
    async fn test_system_clock_counter_waits_within_one_second() {
        let counter = NonceCounter::new();
        let first = counter.next().await.expect("first nonce");

        let start = std::time::Instant::now();
        let second = counter.next().await.expect("second nonce");

        assert!(second > first);
        assert!(start.elapsed() <= Duration::from_millis(1_100));
    }
}
