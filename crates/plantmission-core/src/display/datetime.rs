//! Date and duration display utilities.

use std::fmt;

use jiff::{tz::TimeZone, SignedDuration, Timestamp};

/// A `Timestamp` rendered in a given time zone.
///
/// # Format
///
/// `YYYY-MM-DD HH:MM TZ`, 24-hour clock with the zone abbreviation.
pub struct LocalDateTime<'a>(pub &'a Timestamp, pub &'a TimeZone);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0.to_zoned(self.1.clone()).strftime("%Y-%m-%d %H:%M %Z")
        )
    }
}

/// Remaining mission validity, e.g. `5h 30m left` or `expired 2h ago`.
pub struct TimeLeft(pub SignedDuration);

impl fmt::Display for TimeLeft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let expired = !self.0.is_positive();
        let minutes = self.0.as_secs().unsigned_abs() / 60;
        let (days, hours, minutes) = (minutes / 1440, (minutes / 60) % 24, minutes % 60);

        let amount = if days > 0 {
            format!("{days}d {hours}h")
        } else if hours > 0 {
            format!("{hours}h {minutes}m")
        } else {
            format!("{minutes}m")
        };

        if expired {
            write!(f, "expired {amount} ago")
        } else {
            write!(f, "{amount} left")
        }
    }
}
