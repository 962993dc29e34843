//! Wall-clock access for the generator
//!
//! The time bucket and the "Generation" date stamp both come from the clock,
//! so it sits behind a trait that tests and the offline renderer can pin.

use chrono::{DateTime, Utc};

/// Source of the current instant
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Pin the clock to a unix timestamp in milliseconds
    pub fn from_millis(millis: i64) -> Option<Self> {
        DateTime::from_timestamp_millis(millis).map(Self)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_is_stable() {
        let clock = FixedClock::from_millis(1_700_000_000_000).unwrap();
        assert_eq!(clock.now(), clock.now());
        assert_eq!(clock.now().timestamp_millis(), 1_700_000_000_000);
    }
}
