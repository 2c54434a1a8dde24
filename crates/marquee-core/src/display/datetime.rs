//! DateTime display utilities.
//!
//! Stored times are instants; these wrappers decide how one is shown to a
//! person. Formatting is a pure function of the timestamp, a style and a
//! time zone, so callers that need stable output pass the zone explicitly.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// A wrapper around `Timestamp` that provides system timezone formatting via
/// the `Display` trait.
///
/// The display format follows the pattern: `YYYY-MM-DD HH:MM:SS TZ`
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl<'a> fmt::Display for LocalDateTime<'a> {
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

/// How much of a show time to spell out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateStyle {
    /// `Tuesday May, 21, 2019 at 9:30PM`
    #[default]
    Full,
    /// `Tue 05, 21, 2019 9:30PM`
    Medium,
}

impl DateStyle {
    fn pattern(self) -> &'static str {
        match self {
            DateStyle::Full => "%A %B, %-d, %Y at %-I:%M%p",
            DateStyle::Medium => "%a %m, %d, %Y %-I:%M%p",
        }
    }
}

/// A show start time rendered in a given style and zone.
///
/// # Examples
///
/// ```rust
/// use jiff::tz::TimeZone;
/// use marquee_core::display::{DateStyle, ShowTime};
///
/// let start = "2019-05-21T21:30:00Z".parse().unwrap();
///
/// let full = ShowTime::new(start, DateStyle::Full, TimeZone::UTC);
/// assert_eq!(full.to_string(), "Tuesday May, 21, 2019 at 9:30PM");
///
/// let medium = ShowTime::new(start, DateStyle::Medium, TimeZone::UTC);
/// assert_eq!(medium.to_string(), "Tue 05, 21, 2019 9:30PM");
/// ```
#[derive(Debug, Clone)]
pub struct ShowTime {
    pub timestamp: Timestamp,
    pub style: DateStyle,
    pub tz: TimeZone,
}

impl ShowTime {
    pub fn new(timestamp: Timestamp, style: DateStyle, tz: TimeZone) -> Self {
        Self {
            timestamp,
            style,
            tz,
        }
    }

    /// Render in the system time zone.
    pub fn local(timestamp: Timestamp, style: DateStyle) -> Self {
        Self::new(timestamp, style, TimeZone::system())
    }

    /// Render a canonical start time string, falling back to the raw text
    /// when it does not parse.
    pub fn render_canonical(start_time: &str, style: DateStyle) -> String {
        match start_time.parse::<Timestamp>() {
            Ok(timestamp) => Self::local(timestamp, style).to_string(),
            Err(_) => start_time.to_string(),
        }
    }
}

impl fmt::Display for ShowTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.timestamp
                .to_zoned(self.tz.clone())
                .strftime(self.style.pattern())
        )
    }
}
