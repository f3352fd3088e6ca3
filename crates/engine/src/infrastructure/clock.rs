//! Clock and random implementations.

#[cfg(test)]
use std::sync::atomic::{AtomicU64, Ordering};

use crate::infrastructure::ports::{ClockPort, RandomPort};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// System clock - uses real time.
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockPort for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// System random - uses real randomness.
pub struct SystemRandom;

impl SystemRandom {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPort for SystemRandom {
    fn gen_range(&self, min: usize, max: usize) -> usize {
        use rand::Rng;
        if max <= min {
            return min;
        }
        rand::thread_rng().gen_range(min..=max)
    }

    fn gen_uuid(&self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Fixed clock for testing.
#[cfg(test)]
pub struct FixedClock(pub DateTime<Utc>);

#[cfg(test)]
impl ClockPort for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Deterministic random for testing.
///
/// `gen_range` always returns `min + offset` (capped at `max`); `gen_uuid`
/// counts up from 1 so every generated identity is distinct and ordered.
#[cfg(test)]
pub struct FixedRandom {
    offset: usize,
    next_uuid: AtomicU64,
}

#[cfg(test)]
impl FixedRandom {
    pub fn new(offset: usize) -> Self {
        Self {
            offset,
            next_uuid: AtomicU64::new(1),
        }
    }
}

#[cfg(test)]
impl RandomPort for FixedRandom {
    fn gen_range(&self, min: usize, max: usize) -> usize {
        (min + self.offset).min(max)
    }

    fn gen_uuid(&self) -> Uuid {
        let n = self.next_uuid.fetch_add(1, Ordering::Relaxed);
        Uuid::from_u64_pair(0, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_random_stays_in_range() {
        let random = SystemRandom::new();
        for _ in 0..100 {
            let n = random.gen_range(2, 5);
            assert!((2..=5).contains(&n));
        }
        assert_eq!(random.gen_range(3, 3), 3);
    }

    #[test]
    fn fixed_random_hands_out_distinct_ordered_uuids() {
        let random = FixedRandom::new(0);
        let a = random.gen_uuid();
        let b = random.gen_uuid();
        assert!(a < b);
    }

    #[test]
    fn fixed_random_caps_at_max() {
        assert_eq!(FixedRandom::new(10).gen_range(0, 2), 2);
        assert_eq!(FixedRandom::new(1).gen_range(0, 2), 1);
    }
}
