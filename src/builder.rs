use std::{fmt, io};

use crate::{
    target::{ConnectOptions, Connector, Facility},
    terminal::{StdoutProbe, TerminalProbe},
    Error, Facade, Severity,
};

/// Configuration for a [`Facade`], consumed when the facade is opened.
///
/// All settings have defaults matching [`Facade::open`]: `daemon` facility,
/// connection severity `warning`, debug and verbose modes off, color on
/// (subject to terminal detection), output to stdout.
///
/// Example usage:
///
/// ```no_run
/// # fn setup_logging() -> Result<(), logswitch::Error> {
/// let verbose = std::env::args().any(|arg| arg == "-v");
///
/// let mut log = logswitch::Facade::builder()
///     .facility(logswitch::Facility::Local0)
///     .verbose(verbose)
///     .open("cmd-program")?;
///
/// log.info("only shown with -v")?;
/// # Ok(())
/// # }
/// # fn main() { setup_logging().ok(); }
/// ```
#[must_use = "this is only a configuration and does nothing until opened"]
pub struct Builder {
    facility: Facility,
    default_severity: Severity,
    debug: bool,
    verbose: bool,
    color: bool,
    terminal: Option<Box<dyn io::Write + Send>>,
    probe: Option<Box<dyn TerminalProbe>>,
}

impl Default for Builder {
    fn default() -> Self {
        Builder {
            facility: Facility::Daemon,
            default_severity: Severity::Warning,
            debug: false,
            verbose: false,
            color: true,
            terminal: None,
            probe: None,
        }
    }
}

impl Builder {
    /// Creates a configuration with every setting at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the facility messages are filed under.
    pub fn facility(mut self, facility: Facility) -> Self {
        self.facility = facility;
        self
    }

    /// Sets the nominal severity the connection is opened with.
    ///
    /// This is only passed on to the connector in [`ConnectOptions`]. The
    /// syslog backend has no per-connection severity and ignores it: every
    /// message is sent with its own severity.
    pub fn default_severity(mut self, severity: Severity) -> Self {
        self.default_severity = severity;
        self
    }

    /// Starts in debug mode: messages go to the terminal, not the system log.
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Starts in verbose mode: `info` and `debug` messages are emitted.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Turns colored headers off when `false`.
    ///
    /// `true` is the default and only *allows* color: it is still dropped if
    /// the output turns out not to be a terminal.
    pub fn color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Sends terminal lines to `writer` instead of stdout.
    pub fn terminal<W: io::Write + Send + 'static>(mut self, writer: W) -> Self {
        self.terminal = Some(Box::new(writer));
        self
    }

    /// Replaces the probe used to decide whether color is supported.
    pub fn probe<P: TerminalProbe + 'static>(mut self, probe: P) -> Self {
        self.probe = Some(Box::new(probe));
        self
    }

    /// Opens a facade connected to the local syslog daemon.
    ///
    /// `tag` names the program in the system log and must not be empty.
    #[cfg(all(not(windows), feature = "syslog-6"))]
    pub fn open(self, tag: &str) -> Result<Facade, Error> {
        self.open_with(crate::syslog::Syslog, tag)
    }

    /// Opens a facade connected through `connector`.
    ///
    /// An empty `tag` is rejected before the connector is ever called.
    pub fn open_with<C: Connector>(self, connector: C, tag: &str) -> Result<Facade, Error> {
        if tag.is_empty() {
            return Err(Error::Configuration("tag cannot be empty"));
        }

        let options = ConnectOptions {
            tag,
            facility: self.facility,
            default_severity: self.default_severity,
        };
        let target = connector.connect(&options).map_err(Error::Connection)?;

        let supports_color = match &self.probe {
            Some(probe) => probe.supports_color(),
            None => StdoutProbe.supports_color(),
        };

        let terminal: Box<dyn io::Write + Send> = match self.terminal {
            Some(terminal) => terminal,
            None => Box::new(io::stdout()),
        };

        Ok(Facade::new(
            Box::new(target),
            terminal,
            self.debug,
            self.verbose,
            self.color && supports_color,
        ))
    }
}

impl fmt::Debug for Builder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builder")
            .field("facility", &self.facility)
            .field("default_severity", &self.default_severity)
            .field("debug", &self.debug)
            .field("verbose", &self.verbose)
            .field("color", &self.color)
            .field("terminal", &self.terminal.as_ref().map(|_| "<writer>"))
            .field("probe", &self.probe.as_ref().map(|_| "<probe>"))
            .finish()
    }
}
