//! Terminal capability queries.
//!
//! Color is only worth emitting when someone is watching: the facade asks a
//! [`TerminalProbe`] once, when it is opened.
use std::{env, io};

use is_terminal::IsTerminal;

/// Something which can answer whether the terminal output is a real,
/// color-capable terminal.
pub trait TerminalProbe {
    /// Whether the output stream is an interactive terminal.
    fn is_interactive(&self) -> bool;

    /// Whether the output stream is a terminal emulation which doesn't look
    /// like a native terminal but still renders escapes (MSYS2, Cygwin).
    fn is_passthrough(&self) -> bool;

    /// Value of the terminal type variable, `TERM`.
    fn term(&self) -> Option<String>;

    /// Whether colored headers should be written.
    ///
    /// `TERM=dumb` always wins; otherwise any kind of terminal will do.
    fn supports_color(&self) -> bool {
        if self.term().as_deref() == Some("dumb") {
            return false;
        }
        self.is_interactive() || self.is_passthrough()
    }
}

/// Probes the process's standard output and environment.
#[derive(Copy, Clone, Debug, Default)]
pub struct StdoutProbe;

impl TerminalProbe for StdoutProbe {
    fn is_interactive(&self) -> bool {
        io::stdout().is_terminal()
    }

    // `is_terminal` already recognizes MSYS2 and Cygwin ptys by their pipe
    // handle, so they are reported as interactive.
    fn is_passthrough(&self) -> bool {
        false
    }

    fn term(&self) -> Option<String> {
        env::var("TERM").ok()
    }
}
