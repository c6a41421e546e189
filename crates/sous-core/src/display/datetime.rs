//! DateTime and duration display utilities.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// A wrapper around `Timestamp` that formats it in the system timezone as
/// `YYYY-MM-DD HH:MM:SS TZ`.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// A number of seconds shown as a rough cooking time: `45s`, `12m`,
/// `1h 05m`.
///
/// ```rust
/// use sous_core::display::TotalTime;
///
/// assert_eq!(TotalTime(45).to_string(), "45s");
/// assert_eq!(TotalTime(750).to_string(), "12m 30s");
/// assert_eq!(TotalTime(3900).to_string(), "1h 05m");
/// ```
pub struct TotalTime(pub u64);

impl fmt::Display for TotalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = self.0 / 3600;
        let minutes = (self.0 % 3600) / 60;
        let seconds = self.0 % 60;

        if hours > 0 {
            write!(f, "{hours}h {minutes:02}m")
        } else if minutes > 0 && seconds > 0 {
            write!(f, "{minutes}m {seconds:02}s")
        } else if minutes > 0 {
            write!(f, "{minutes}m")
        } else {
            write!(f, "{seconds}s")
        }
    }
}
