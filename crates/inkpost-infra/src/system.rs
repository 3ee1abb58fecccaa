//! Clock and identifier providers.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use inkpost_core::ports::{Clock, UuidGenerator};

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Random v4 UUIDs rendered as hyphenated strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomUuidGenerator;

impl UuidGenerator for RandomUuidGenerator {
    fn random(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Returns `None` if `millis` is outside chrono's range.
    pub fn from_millis(millis: i64) -> Option<Self> {
        DateTime::from_timestamp_millis(millis).map(Self)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Always hands out the same token.
#[derive(Debug, Clone)]
pub struct FixedUuidGenerator(pub String);

impl UuidGenerator for FixedUuidGenerator {
    fn random(&self) -> String {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_codes_differ_and_parse() {
        let generator = RandomUuidGenerator;

        let a = generator.random();
        let b = generator.random();

        assert_ne!(a, b);
        assert!(Uuid::parse_str(&a).is_ok());
    }

    #[test]
    fn test_fixed_clock_from_millis() {
        let clock = FixedClock::from_millis(1678530673958).unwrap();
        assert_eq!(clock.now().timestamp_millis(), 1678530673958);
    }
}
