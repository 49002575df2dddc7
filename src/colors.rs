//! Severity colors for terminal output, using [`colored::Color`] for the
//! escape codes.
//!
//! The table is fixed: each severity is shown as a block of background
//! color, with a foreground picked to stay readable on it.
use std::fmt;

use colored::Color;

use crate::Severity;

/// The sequence which ends every colored header.
pub const RESET: &str = "\x1B[0m";

/// Background colors, indexed by severity ordinal.
const BACKGROUNDS: [Color; 8] = [
    Color::Red,     // emergency
    Color::Red,     // alert
    Color::Yellow,  // critical
    Color::Yellow,  // error
    Color::Magenta, // warning
    Color::Cyan,    // notice
    Color::White,   // info
    Color::Green,   // debug
];

/// Retrieves the color a severity is displayed with.
#[inline]
pub fn color_of(severity: Severity) -> Color {
    BACKGROUNDS[severity as usize]
}

/// The foreground drawn on top of `background`.
fn foreground_for(background: Color) -> Color {
    match background {
        Color::White | Color::BrightWhite => Color::BrightBlack,
        _ => Color::BrightWhite,
    }
}

/// The escape sequence which starts a header of the given severity.
///
/// This will output ANSI escapes which are understood by any Unix terminal
/// and by recent Windows consoles.
pub fn prefix(severity: Severity) -> String {
    let background = color_of(severity);
    format!(
        "\x1B[{};{}m",
        foreground_for(background).to_fg_str(),
        background.to_bg_str()
    )
}

/// Text which, when displayed, is wrapped in the colors of a severity.
///
/// With `enabled` false it displays the text untouched.
#[derive(Copy, Clone, Debug)]
pub struct WithSeverityColor<T> {
    pub(crate) text: T,
    pub(crate) severity: Severity,
    pub(crate) enabled: bool,
}

impl<T> WithSeverityColor<T> {
    /// Wraps `text` in the colors of `severity`, if `enabled`.
    pub fn new(text: T, severity: Severity, enabled: bool) -> Self {
        WithSeverityColor {
            text,
            severity,
            enabled,
        }
    }
}

impl<T: fmt::Display> fmt::Display for WithSeverityColor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.enabled {
            f.write_str(&prefix(self.severity))?;
            fmt::Display::fmt(&self.text, f)?;
            f.write_str(RESET)
        } else {
            fmt::Display::fmt(&self.text, f)
        }
    }
}
