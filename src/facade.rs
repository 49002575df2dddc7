use std::{fmt, io};

use crate::{
    formatter::{self, Line},
    target::{Connector, Target},
    Builder, Error, Severity,
};

/// An open logging facade.
///
/// A facade owns a connection to the system log and decides, message by
/// message, where each one goes:
///
/// - `emergency` messages are printed on the terminal *and* sent to the
///   system log, always.
/// - `alert` through `notice` are sent to the system log, or printed on the
///   terminal instead when debug mode is on.
/// - `info` and `debug` are dropped unless verbose mode is on; when they
///   aren't, they're routed like `alert` through `notice`.
///
/// Example usage:
///
/// ```no_run
/// # fn run() -> Result<(), logswitch::Error> {
/// let mut log = logswitch::Facade::open("backup")?;
///
/// if std::env::args().any(|arg| arg == "--debug") {
///     log.set_debug(true);
///     log.set_verbose(true);
/// }
///
/// log.notice("backup started")?;
/// log.debug("scanning /home")?;
/// log.error("/home/shared is not readable")?;
///
/// log.close()?;
/// # Ok(())
/// # }
/// # fn main() { run().ok(); }
/// ```
pub struct Facade {
    target: Box<dyn Target>,
    terminal: Box<dyn io::Write + Send>,
    debug: bool,
    verbose: bool,
    color: bool,
}

impl Facade {
    pub(crate) fn new(
        target: Box<dyn Target>,
        terminal: Box<dyn io::Write + Send>,
        debug: bool,
        verbose: bool,
        color: bool,
    ) -> Self {
        Facade {
            target,
            terminal,
            debug,
            verbose,
            color,
        }
    }

    /// Starts configuring a facade. See [`Builder`].
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// Opens a facade connected to the local syslog daemon, with the
    /// `daemon` facility.
    ///
    /// `tag` names the program in the system log; it can't be empty.
    ///
    /// Colored output is turned off if standard output isn't a terminal, or
    /// if `TERM` is `dumb`.
    #[cfg(all(not(windows), feature = "syslog-6"))]
    pub fn open(tag: &str) -> Result<Facade, Error> {
        Builder::new().open(tag)
    }

    /// Opens a facade connected through `connector`, with all other settings
    /// at their defaults.
    pub fn open_with<C: Connector>(connector: C, tag: &str) -> Result<Facade, Error> {
        Builder::new().open_with(connector, tag)
    }

    /// Closes the system-log connection.
    pub fn close(self) -> Result<(), Error> {
        let Facade {
            target,
            mut terminal,
            ..
        } = self;
        let _ = terminal.flush();
        target.close().map_err(Error::Connection)
    }

    /// Sets debug mode. When on, everything but `emergency` messages is
    /// printed on the terminal instead of being sent to the system log.
    ///
    /// Off by default.
    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    /// Sets verbose mode. When on, `info` and `debug` messages are logged;
    /// otherwise they're ignored.
    ///
    /// Off by default.
    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    /// Disables colors in messages printed on the terminal.
    ///
    /// There is deliberately no way to turn them back on.
    pub fn disable_color(&mut self) {
        self.color = false;
    }

    /// Whether debug mode is on.
    pub fn is_debug(&self) -> bool {
        self.debug
    }

    /// Whether verbose mode is on.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Whether terminal lines get colored headers.
    pub fn color_enabled(&self) -> bool {
        self.color
    }

    /// Whether a message of this severity would be emitted anywhere.
    pub fn enabled(&self, severity: Severity) -> bool {
        self.verbose || !severity.is_verbose_only()
    }

    /// Logs `message` with the given severity.
    ///
    /// Only failures of the system log are reported; terminal output is
    /// best-effort.
    pub fn emit(&mut self, severity: Severity, message: &str) -> Result<(), Error> {
        if severity == Severity::Emergency {
            self.print_to_terminal(severity, message);
            return self.forward(severity, message);
        }

        if !self.enabled(severity) {
            return Ok(());
        }

        if self.debug {
            self.print_to_terminal(severity, message);
            Ok(())
        } else {
            self.forward(severity, message)
        }
    }

    fn forward(&mut self, severity: Severity, message: &str) -> Result<(), Error> {
        self.target
            .send(severity, message)
            .map_err(|source| Error::Emission { severity, source })
    }

    /// Prints a message on the terminal, regardless of mode.
    pub fn print_to_terminal(&mut self, severity: Severity, message: &str) {
        let timestamp = formatter::timestamp_now();
        let line = Line {
            timestamp: &timestamp,
            severity,
            message,
            color: self.color,
        };
        let _ = formatter::write_line(&mut *self.terminal, &line);
    }

    /// Flushes the terminal output.
    pub fn flush(&mut self) {
        let _ = self.terminal.flush();
    }

    /// Logs an emergency message.
    ///
    /// It is printed on the terminal and sent to the system log, whatever
    /// the mode. The system log can still fail in debug mode, so the result
    /// matters even then.
    pub fn emergency(&mut self, message: &str) -> Result<(), Error> {
        self.emit(Severity::Emergency, message)
    }

    /// Logs an alert message.
    pub fn alert(&mut self, message: &str) -> Result<(), Error> {
        self.emit(Severity::Alert, message)
    }

    /// Logs a critical message.
    pub fn critical(&mut self, message: &str) -> Result<(), Error> {
        self.emit(Severity::Critical, message)
    }

    /// Logs an error message.
    pub fn error(&mut self, message: &str) -> Result<(), Error> {
        self.emit(Severity::Error, message)
    }

    /// Logs a warning message.
    pub fn warning(&mut self, message: &str) -> Result<(), Error> {
        self.emit(Severity::Warning, message)
    }

    /// Logs a notice message.
    pub fn notice(&mut self, message: &str) -> Result<(), Error> {
        self.emit(Severity::Notice, message)
    }

    /// Logs an informational message. Ignored unless verbose.
    pub fn info(&mut self, message: &str) -> Result<(), Error> {
        self.emit(Severity::Info, message)
    }

    /// Logs a debug message. Ignored unless verbose.
    pub fn debug(&mut self, message: &str) -> Result<(), Error> {
        self.emit(Severity::Debug, message)
    }
}

impl fmt::Debug for Facade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Facade")
            .field("target", &"<system log>")
            .field("terminal", &"<writer>")
            .field("debug", &self.debug)
            .field("verbose", &self.verbose)
            .field("color", &self.color)
            .finish()
    }
}
