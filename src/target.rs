//! The contract between the facade and the system log.
//!
//! A [`Connector`] opens a connection; the [`Target`] it returns receives
//! messages at a given severity until it is closed. The syslog adapter in
//! [`crate::syslog`] is the implementation used by [`Facade::open`], but any
//! backend can be plugged in with [`Facade::open_with`].
//!
//! [`Facade::open`]: crate::Facade::open
//! [`Facade::open_with`]: crate::Facade::open_with
use std::error;

use crate::Severity;

/// Errors produced by a system-log backend.
pub type BackendError = Box<dyn error::Error + Send + 'static>;

/// A syslog facility: the kind of program a message comes from.
///
/// The default facility is [`Daemon`].
///
/// [`Daemon`]: #variant.Daemon
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum Facility {
    /// Operating system kernel.
    Kern,
    /// Ordinary user programs.
    User,
    /// The mail system.
    Mail,
    /// Daemons without a more specific facility.
    Daemon,
    /// Authentication and authorization.
    Auth,
    /// Messages generated by the syslog daemon itself.
    Syslog,
    /// Line printer subsystem.
    Lpr,
    /// Network news subsystem.
    News,
    /// UUCP subsystem.
    Uucp,
    /// Periodic task scheduling.
    Cron,
    /// Private authentication messages.
    AuthPriv,
    /// FTP server.
    Ftp,
    /// Reserved for local use.
    Local0,
    /// Reserved for local use.
    Local1,
    /// Reserved for local use.
    Local2,
    /// Reserved for local use.
    Local3,
    /// Reserved for local use.
    Local4,
    /// Reserved for local use.
    Local5,
    /// Reserved for local use.
    Local6,
    /// Reserved for local use.
    Local7,
}

impl Default for Facility {
    fn default() -> Self {
        Facility::Daemon
    }
}

/// Everything a [`Connector`] needs to open a connection.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ConnectOptions<'a> {
    /// Name of the program, as it will appear in the system log.
    pub tag: &'a str,
    /// Facility every message is filed under.
    pub facility: Facility,
    /// Nominal severity of the connection itself.
    ///
    /// Every message carries its own severity, so backends are free to
    /// ignore this.
    pub default_severity: Severity,
}

/// Opens connections to a system log.
pub trait Connector {
    /// The connection type.
    type Target: Target + 'static;

    /// Opens a new connection.
    fn connect(&self, options: &ConnectOptions<'_>) -> Result<Self::Target, BackendError>;
}

impl<C: Connector + ?Sized> Connector for &C {
    type Target = C::Target;

    fn connect(&self, options: &ConnectOptions<'_>) -> Result<Self::Target, BackendError> {
        (**self).connect(options)
    }
}

/// An open system-log connection, with one method per severity.
pub trait Target: Send {
    /// Sends an emergency message.
    fn emergency(&mut self, message: &str) -> Result<(), BackendError>;
    /// Sends an alert message.
    fn alert(&mut self, message: &str) -> Result<(), BackendError>;
    /// Sends a critical message.
    fn critical(&mut self, message: &str) -> Result<(), BackendError>;
    /// Sends an error message.
    fn error(&mut self, message: &str) -> Result<(), BackendError>;
    /// Sends a warning message.
    fn warning(&mut self, message: &str) -> Result<(), BackendError>;
    /// Sends a notice message.
    fn notice(&mut self, message: &str) -> Result<(), BackendError>;
    /// Sends an informational message.
    fn info(&mut self, message: &str) -> Result<(), BackendError>;
    /// Sends a debug message.
    fn debug(&mut self, message: &str) -> Result<(), BackendError>;

    /// Closes the connection.
    fn close(self: Box<Self>) -> Result<(), BackendError>;

    /// Sends `message` with the given severity.
    fn send(&mut self, severity: Severity, message: &str) -> Result<(), BackendError> {
        match severity {
            Severity::Emergency => self.emergency(message),
            Severity::Alert => self.alert(message),
            Severity::Critical => self.critical(message),
            Severity::Error => self.error(message),
            Severity::Warning => self.warning(message),
            Severity::Notice => self.notice(message),
            Severity::Info => self.info(message),
            Severity::Debug => self.debug(message),
        }
    }
}
