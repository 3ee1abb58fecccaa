//! Time and identifier providers.

use chrono::{DateTime, Utc};

/// Source of the current time. Injected so lifecycle timestamps are testable.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Source of opaque random tokens (certification codes).
pub trait UuidGenerator: Send + Sync {
    fn random(&self) -> String;
}
