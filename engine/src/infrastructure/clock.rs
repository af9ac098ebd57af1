//! Clock adapters for admission timestamps.

use crate::constants::clock::DEFAULT_STEP_SEC;
use crate::domain::ports::Clock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, SystemTime};

/// Wall clock backed by `SystemTime::now()`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// Deterministic clock that moves forward by a fixed step on every reading
///
/// The first reading is `origin + step`, the second `origin + 2 * step`, and so
/// on. Readings are strictly increasing, which makes admission order and
/// admission time agree exactly. Used for reproducible replays and tests.
#[derive(Debug)]
pub struct SteppingClock {
    origin: SystemTime,
    step: Duration,
    ticks: AtomicU64,
}

impl SteppingClock {
    pub fn new(origin: SystemTime, step: Duration) -> Self {
        Self {
            origin,
            step,
            ticks: AtomicU64::new(0),
        }
    }

    /// Number of readings taken so far
    pub fn readings(&self) -> u64 {
        self.ticks.load(Ordering::SeqCst)
    }
}

impl Default for SteppingClock {
    /// Starts one step after the Unix epoch, one second apart
    fn default() -> Self {
        Self::new(SystemTime::UNIX_EPOCH, Duration::from_secs(DEFAULT_STEP_SEC))
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> SystemTime {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst) + 1;
        let tick = u32::try_from(tick).unwrap_or(u32::MAX);
        self.origin + self.step * tick
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock() {
        let clock = SystemClock::new();
        let t1 = clock.now();
        std::thread::sleep(Duration::from_millis(10));
        let t2 = clock.now();

        assert!(t2 > t1);
    }

    #[test]
    fn test_stepping_clock_is_strictly_increasing() {
        let clock = SteppingClock::default();

        assert_eq!(clock.now(), SystemTime::UNIX_EPOCH + Duration::from_secs(1));
        assert_eq!(clock.now(), SystemTime::UNIX_EPOCH + Duration::from_secs(2));
        assert_eq!(clock.now(), SystemTime::UNIX_EPOCH + Duration::from_secs(3));
        assert_eq!(clock.readings(), 3);
    }

    #[test]
    fn test_stepping_clock_custom_origin_and_step() {
        let origin = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000);
        let clock = SteppingClock::new(origin, Duration::from_millis(250));

        assert_eq!(clock.now(), origin + Duration::from_millis(250));
        assert_eq!(clock.now(), origin + Duration::from_millis(500));
    }

    #[test]
    fn test_stepping_clock_shared_across_threads() {
        let clock = std::sync::Arc::new(SteppingClock::default());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let clock = clock.clone();
                std::thread::spawn(move || (0..25).map(|_| clock.now()).collect::<Vec<_>>())
            })
            .collect();

        let mut readings: Vec<SystemTime> = handles
            .into_iter()
            .flat_map(|handle| handle.join().unwrap())
            .collect();
        readings.sort();
        readings.dedup();

        // Every reading is distinct
        assert_eq!(readings.len(), 100);
        assert_eq!(clock.readings(), 100);
    }
}
