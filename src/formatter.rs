//! Terminal line formatting.
use std::{fmt, io};

use chrono::{DateTime, Local, SecondsFormat, TimeZone};

use crate::{colors::WithSeverityColor, Severity};

/// Formats the current local time the way terminal lines are stamped:
/// RFC 3339 at second precision, with `Z` for UTC.
pub fn timestamp_now() -> String {
    timestamp(&Local::now())
}

/// Formats any time the way terminal lines are stamped.
pub fn timestamp<Tz>(time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    time.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// A single terminal line, without its trailing newline.
///
/// Displays as `<timestamp> - <header> <message>`, where the header is the
/// padded severity label, wrapped in its colors when `color` is set.
pub struct Line<'a> {
    /// Already formatted timestamp, see [`timestamp`].
    pub timestamp: &'a str,
    /// Severity shown in the header.
    pub severity: Severity,
    /// The message itself.
    pub message: &'a str,
    /// Whether the header gets its colors.
    pub color: bool,
}

impl fmt::Display for Line<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = WithSeverityColor::new(self.severity.label(), self.severity, self.color);
        write!(f, "{} - {} {}", self.timestamp, header, self.message)
    }
}

/// Writes one complete line, newline included, and flushes.
pub fn write_line<W: io::Write + ?Sized>(out: &mut W, line: &Line<'_>) -> io::Result<()> {
    writeln!(out, "{}", line)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn utc_uses_z() {
        let time = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(timestamp(&time), "2024-01-01T00:00:00Z");
    }

    #[test]
    fn offsets_are_kept() {
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let time = offset.with_ymd_and_hms(2018, 6, 30, 14, 5, 9).unwrap();
        assert_eq!(timestamp(&time), "2018-06-30T14:05:09+02:00");
    }

    #[test]
    fn plain_line() {
        let line = Line {
            timestamp: "2024-01-01T00:00:00Z",
            severity: Severity::Warning,
            message: "disk full",
            color: false,
        };
        assert_eq!(line.to_string(), "2024-01-01T00:00:00Z - WARNING   disk full");
    }

    #[test]
    fn colored_line() {
        let line = Line {
            timestamp: "2024-01-01T00:00:00Z",
            severity: Severity::Debug,
            message: "x",
            color: true,
        };
        assert_eq!(
            line.to_string(),
            "2024-01-01T00:00:00Z - \x1B[97;42mDEBUG    \x1B[0m x"
        );
    }

    #[test]
    fn written_lines_end_in_newline() {
        let mut out = Vec::new();
        let line = Line {
            timestamp: "t",
            severity: Severity::Emergency,
            message: "m",
            color: false,
        };
        write_line(&mut out, &line).unwrap();
        assert_eq!(out, b"t - EMERGENCY m\n");
    }
}
