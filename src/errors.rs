use std::{error, fmt};

use crate::{target::BackendError, Severity};

/// Error returned by the facade's operations.
#[derive(Debug)]
pub enum Error {
    /// The facade was configured with something unusable, like an empty tag.
    Configuration(&'static str),
    /// Opening or closing the system-log connection failed.
    Connection(BackendError),
    /// The system log refused a message.
    Emission {
        /// Severity of the message which couldn't be sent.
        severity: Severity,
        /// What the backend reported.
        source: BackendError,
    },
    /// Installing the facade as the global `log` logger failed, because a
    /// logger was already installed.
    SetLogger(log::SetLoggerError),
}

impl From<log::SetLoggerError> for Error {
    fn from(error: log::SetLoggerError) -> Self {
        Error::SetLogger(error)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Configuration(msg) => write!(f, "invalid configuration: {}", msg),
            Error::Connection(e) => write!(f, "system log connection failed: {}", e),
            Error::Emission { severity, source } => {
                write!(f, "failed to send {} message to the system log: {}", severity.name(), source)
            }
            Error::SetLogger(e) => write!(f, "global logger already initialized: {}", e),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Configuration(_) => None,
            Error::Connection(e) => Some(&**e),
            Error::Emission { source, .. } => Some(&**source),
            Error::SetLogger(e) => Some(e),
        }
    }
}
