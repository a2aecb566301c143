//! TTL Module
//!
//! Time-to-live arguments accepted by every backend, either a plain number
//! of seconds or a calendar interval.

use std::time::Duration;

use chrono::{DateTime, Months, Utc};

// == Ttl ==
/// Lifetime of a cache entry.
///
/// Zero seconds means the entry never expires; an interval that resolves
/// before now means it is already expired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ttl {
    /// Whole seconds.
    Seconds(u64),
    /// Calendar months plus a fixed span, resolved against the Unix epoch.
    Interval {
        months: u32,
        span: chrono::Duration,
    },
}

impl Ttl {
    // == Constructors ==
    /// Creates an interval TTL of `months` calendar months plus `span`.
    pub fn interval(months: u32, span: chrono::Duration) -> Self {
        Ttl::Interval { months, span }
    }

    // == Signed Seconds ==
    /// Normalizes the TTL into whole seconds, negative when it lies in the past.
    ///
    /// Intervals are added to the Unix epoch and measured back from it, so a
    /// one-month interval is always 31 days (January).
    pub fn signed_seconds(&self) -> i64 {
        match *self {
            Ttl::Seconds(secs) => i64::try_from(secs).unwrap_or(i64::MAX),
            Ttl::Interval { months, span } => {
                let Some(reference) = DateTime::<Utc>::from_timestamp(0, 0) else {
                    return 0;
                };
                reference
                    .checked_add_months(Months::new(months))
                    .and_then(|t| t.checked_add_signed(span))
                    .map(|end| (end - reference).num_seconds())
                    .unwrap_or(0)
            }
        }
    }

    /// Whole seconds for facilities that take an unsigned TTL. Past TTLs give 0.
    pub fn as_seconds(&self) -> u64 {
        self.signed_seconds().max(0) as u64
    }

    /// Returns true if the TTL resolves before now, so the entry is already expired.
    pub fn is_past(&self) -> bool {
        self.signed_seconds() < 0
    }
}

impl From<u64> for Ttl {
    fn from(secs: u64) -> Self {
        Ttl::Seconds(secs)
    }
}

/// Sub-second remainders round up so a non-zero duration never becomes "forever".
impl From<Duration> for Ttl {
    fn from(d: Duration) -> Self {
        let secs = d.as_secs() + u64::from(d.subsec_nanos() > 0);
        Ttl::Seconds(secs)
    }
}

impl From<chrono::Duration> for Ttl {
    fn from(span: chrono::Duration) -> Self {
        Ttl::Interval { months: 0, span }
    }
}
