use std::{error, fmt, str::FromStr};

/// A syslog severity. Ordered by decreasing urgency, so `Emergency` is the
/// smallest value and `Debug` the largest, matching the numeric syslog
/// priorities (`LOG_EMERG` is 0, `LOG_DEBUG` is 7).
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(u8)]
pub enum Severity {
    /// The system is unusable.
    ///
    /// Messages at this level are always printed to the terminal *and* sent
    /// to the system log, no matter how the facade is configured.
    Emergency = 0,
    /// Action must be taken immediately.
    Alert = 1,
    /// Critical conditions.
    Critical = 2,
    /// Error conditions.
    Error = 3,
    /// Warning conditions.
    Warning = 4,
    /// Normal but significant condition.
    Notice = 5,
    /// Informational. Only emitted in verbose mode.
    Info = 6,
    /// Debug-level messages. Only emitted in verbose mode.
    Debug = 7,
}

// Indexed by ordinal.
const LABELS: [&str; 8] = [
    "EMERGENCY",
    "ALERT    ",
    "CRITICAL ",
    "ERROR    ",
    "WARNING  ",
    "NOTICE   ",
    "INFO     ",
    "DEBUG    ",
];

const NAMES: [&str; 8] = [
    "emergency",
    "alert",
    "critical",
    "error",
    "warning",
    "notice",
    "info",
    "debug",
];

impl Severity {
    /// Every severity, most urgent first.
    pub const ALL: [Severity; 8] = [
        Severity::Emergency,
        Severity::Alert,
        Severity::Critical,
        Severity::Error,
        Severity::Warning,
        Severity::Notice,
        Severity::Info,
        Severity::Debug,
    ];

    /// The syslog priority number of this severity, `0` through `7`.
    #[inline]
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Converts a syslog priority number back to a `Severity`.
    ///
    /// Returns `None` for anything above `7`.
    pub fn from_ordinal(value: u8) -> Option<Severity> {
        Severity::ALL.get(value as usize).copied()
    }

    /// The terminal header for this severity, padded to nine characters so
    /// messages line up.
    #[inline]
    pub fn label(self) -> &'static str {
        LABELS[self as usize]
    }

    /// Lowercase name, like `emergency` or `notice`.
    #[inline]
    pub fn name(self) -> &'static str {
        NAMES[self as usize]
    }

    /// Whether this severity is held back unless verbose mode is on.
    #[inline]
    pub fn is_verbose_only(self) -> bool {
        self >= Severity::Info
    }

    /// Maps a [`log::Level`] onto a severity.
    ///
    /// `log` has no equivalent of the three most urgent syslog severities
    /// or of `Notice`; `Trace` collapses into `Debug`.
    pub fn from_log(level: log::Level) -> Severity {
        match level {
            log::Level::Error => Severity::Error,
            log::Level::Warn => Severity::Warning,
            log::Level::Info => Severity::Info,
            log::Level::Debug | log::Level::Trace => Severity::Debug,
        }
    }
}

impl From<log::Level> for Severity {
    fn from(level: log::Level) -> Self {
        Severity::from_log(level)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label().trim_end())
    }
}

/// Error returned when parsing an unknown severity name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownSeverityError(String);

impl fmt::Display for UnknownSeverityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized severity: {:?}", self.0)
    }
}

impl error::Error for UnknownSeverityError {}

impl FromStr for Severity {
    type Err = UnknownSeverityError;

    /// Accepts the full names case-insensitively, plus the short syslog
    /// spellings (`emerg`, `crit`, `err`, `warn`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        let severity = match lower.as_str() {
            "emerg" | "panic" => Severity::Emergency,
            "crit" => Severity::Critical,
            "err" => Severity::Error,
            "warn" => Severity::Warning,
            other => match NAMES.iter().position(|name| *name == other) {
                Some(index) => Severity::ALL[index],
                None => return Err(UnknownSeverityError(s.to_owned())),
            },
        };
        Ok(severity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_follow_syslog() {
        for (i, severity) in Severity::ALL.iter().enumerate() {
            assert_eq!(severity.ordinal() as usize, i);
            assert_eq!(Severity::from_ordinal(i as u8), Some(*severity));
        }
        assert_eq!(Severity::from_ordinal(8), None);
    }

    #[test]
    fn ordering_is_by_urgency() {
        assert!(Severity::Emergency < Severity::Alert);
        assert!(Severity::Notice < Severity::Info);
        let mut sorted = Severity::ALL;
        sorted.sort();
        assert_eq!(sorted, Severity::ALL);
    }

    #[test]
    fn labels_are_nine_wide() {
        for severity in Severity::ALL.iter() {
            assert_eq!(severity.label().len(), 9, "{:?}", severity);
        }
        assert_eq!(Severity::Warning.label(), "WARNING  ");
        assert_eq!(Severity::Emergency.label(), "EMERGENCY");
    }

    #[test]
    fn display_trims_padding() {
        assert_eq!(Severity::Debug.to_string(), "DEBUG");
        assert_eq!(format!("[{:<7}]", Severity::Info), "[INFO   ]");
    }

    #[test]
    fn only_info_and_debug_are_verbose_only() {
        let gated: Vec<_> = Severity::ALL
            .iter()
            .filter(|s| s.is_verbose_only())
            .collect();
        assert_eq!(gated, vec![&Severity::Info, &Severity::Debug]);
    }

    #[test]
    fn parse_names_and_aliases() {
        assert_eq!("Notice".parse::<Severity>(), Ok(Severity::Notice));
        assert_eq!("EMERG".parse::<Severity>(), Ok(Severity::Emergency));
        assert_eq!("crit".parse::<Severity>(), Ok(Severity::Critical));
        assert_eq!("err".parse::<Severity>(), Ok(Severity::Error));
        assert_eq!("warn".parse::<Severity>(), Ok(Severity::Warning));
        assert!("verbose".parse::<Severity>().is_err());
    }

    #[test]
    fn log_levels_map_down() {
        assert_eq!(Severity::from(log::Level::Error), Severity::Error);
        assert_eq!(Severity::from(log::Level::Warn), Severity::Warning);
        assert_eq!(Severity::from(log::Level::Info), Severity::Info);
        assert_eq!(Severity::from(log::Level::Trace), Severity::Debug);
    }
}
