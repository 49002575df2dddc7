#![cfg(all(not(windows), feature = "syslog-6"))]
/*!
System log backend built on the `syslog` crate.

This is what [`Facade::open`] connects to: RFC 3164 messages, sent over the
local syslog socket, with the tag as process name.

```no_run
# fn setup_logging() -> Result<(), logswitch::Error> {
let mut log = logswitch::Facade::open("my-daemon")?;

log.notice("starting up")?;
log.close()?;
# Ok(())
# }
# fn main() { setup_logging().ok(); }
```

To pick another facility, go through the builder:

```no_run
# fn setup_logging() -> Result<(), logswitch::Error> {
let log = logswitch::Facade::builder()
    .facility(logswitch::Facility::Local3)
    .open("my-daemon")?;
# Ok(())
# }
# fn main() { setup_logging().ok(); }
```

[`Facade::open`]: crate::Facade::open
*/
use std::process;

use syslog6::{Formatter3164, Logger, LoggerBackend};

use crate::target::{BackendError, ConnectOptions, Connector, Facility, Target};

/// Connects to the local syslog daemon over its unix socket.
#[derive(Copy, Clone, Debug, Default)]
pub struct Syslog;

/// An open connection to the local syslog daemon.
pub struct SyslogTarget {
    inner: Logger<LoggerBackend, Formatter3164>,
}

impl From<Facility> for syslog6::Facility {
    fn from(facility: Facility) -> Self {
        use syslog6::Facility::*;
        match facility {
            Facility::Kern => LOG_KERN,
            Facility::User => LOG_USER,
            Facility::Mail => LOG_MAIL,
            Facility::Daemon => LOG_DAEMON,
            Facility::Auth => LOG_AUTH,
            Facility::Syslog => LOG_SYSLOG,
            Facility::Lpr => LOG_LPR,
            Facility::News => LOG_NEWS,
            Facility::Uucp => LOG_UUCP,
            Facility::Cron => LOG_CRON,
            Facility::AuthPriv => LOG_AUTHPRIV,
            Facility::Ftp => LOG_FTP,
            Facility::Local0 => LOG_LOCAL0,
            Facility::Local1 => LOG_LOCAL1,
            Facility::Local2 => LOG_LOCAL2,
            Facility::Local3 => LOG_LOCAL3,
            Facility::Local4 => LOG_LOCAL4,
            Facility::Local5 => LOG_LOCAL5,
            Facility::Local6 => LOG_LOCAL6,
            Facility::Local7 => LOG_LOCAL7,
        }
    }
}

fn boxed(error: syslog6::Error) -> BackendError {
    Box::new(error)
}

impl Connector for Syslog {
    type Target = SyslogTarget;

    fn connect(&self, options: &ConnectOptions<'_>) -> Result<SyslogTarget, BackendError> {
        let formatter = Formatter3164 {
            facility: options.facility.into(),
            hostname: None,
            process: options.tag.to_owned(),
            pid: process::id(),
        };
        let inner = syslog6::unix(formatter).map_err(boxed)?;
        Ok(SyslogTarget { inner })
    }
}

impl Target for SyslogTarget {
    fn emergency(&mut self, message: &str) -> Result<(), BackendError> {
        self.inner.emerg(message).map_err(boxed)
    }

    fn alert(&mut self, message: &str) -> Result<(), BackendError> {
        self.inner.alert(message).map_err(boxed)
    }

    fn critical(&mut self, message: &str) -> Result<(), BackendError> {
        self.inner.crit(message).map_err(boxed)
    }

    fn error(&mut self, message: &str) -> Result<(), BackendError> {
        self.inner.err(message).map_err(boxed)
    }

    fn warning(&mut self, message: &str) -> Result<(), BackendError> {
        self.inner.warning(message).map_err(boxed)
    }

    fn notice(&mut self, message: &str) -> Result<(), BackendError> {
        self.inner.notice(message).map_err(boxed)
    }

    fn info(&mut self, message: &str) -> Result<(), BackendError> {
        self.inner.info(message).map_err(boxed)
    }

    fn debug(&mut self, message: &str) -> Result<(), BackendError> {
        self.inner.debug(message).map_err(boxed)
    }

    // The socket is released when the logger is dropped; stream backends
    // buffer, so flush what is left first.
    fn close(self: Box<Self>) -> Result<(), BackendError> {
        let mut inner = self.inner;
        std::io::Write::flush(&mut inner.backend).map_err(|e| Box::new(e) as BackendError)
    }
}
