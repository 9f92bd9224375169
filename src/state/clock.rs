use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};
use tracing::warn;

/// Provides the local wall-clock time used to stamp player updates.
pub trait Clock: Send + Sync {
    /// Current local date and time, without offset.
    fn now(&self) -> PrimitiveDateTime;
}

/// [`Clock`] reading the host clock in the local offset captured at startup.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    offset: UtcOffset,
}

impl SystemClock {
    /// Capture the host's local offset.
    ///
    /// Must run before any other thread is spawned: the lookup is refused in
    /// multi-threaded processes on some platforms, in which case UTC is used.
    pub fn detect() -> Self {
        let offset = UtcOffset::current_local_offset().unwrap_or_else(|err| {
            warn!(error = %err, "local offset unavailable; falling back to UTC");
            UtcOffset::UTC
        });
        Self { offset }
    }

    /// Clock reporting wall-clock time at a fixed `offset`.
    pub fn with_offset(offset: UtcOffset) -> Self {
        Self { offset }
    }

    /// Offset applied to the UTC clock.
    pub fn offset(&self) -> UtcOffset {
        self.offset
    }
}

impl Clock for SystemClock {
    fn now(&self) -> PrimitiveDateTime {
        let now = OffsetDateTime::now_utc().to_offset(self.offset);
        PrimitiveDateTime::new(now.date(), now.time())
    }
}

/// [`Clock`] that always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub PrimitiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> PrimitiveDateTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn fixed_clock_is_stable() {
        let clock = FixedClock(datetime!(2024-03-05 14:07:09));
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn system_clock_applies_offset() {
        let utc = SystemClock::with_offset(UtcOffset::UTC);
        let ahead = SystemClock::with_offset(UtcOffset::from_hms(2, 0, 0).unwrap());
        assert_eq!(ahead.offset().whole_hours(), 2);

        let delta = ahead.now() - utc.now();
        assert!((delta.whole_minutes() - 120).abs() <= 1, "delta was {delta}");
    }

    #[test]
    fn system_clock_is_in_four_digit_range() {
        let year = SystemClock::with_offset(UtcOffset::UTC).now().year();
        assert!((1970..=9999).contains(&year));
    }
}
