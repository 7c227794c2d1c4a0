// LogLedger - core/clock.rs
//
// Time source for entry timestamps. The writer never reads the system
// clock directly so tests can pin "now".

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};

/// A source of the current UTC instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Truncate to whole seconds and render as ISO-8601 with a `Z` suffix.
///
/// Seconds are always present, including `:00`.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.trunc_subsecs(0).to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_truncates_subseconds() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 9, 15, 2).unwrap()
            + chrono::Duration::milliseconds(999);
        assert_eq!(format_timestamp(at), "2024-03-01T09:15:02Z");
    }

    #[test]
    fn test_format_keeps_zero_seconds() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 9, 15, 0).unwrap();
        assert_eq!(format_timestamp(at), "2024-03-01T09:15:00Z");
    }

    #[test]
    fn test_fixed_clock_is_frozen() {
        let at = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        let clock = FixedClock(at);
        assert_eq!(clock.now(), at);
        assert_eq!(clock.now(), clock.now());
    }
}
