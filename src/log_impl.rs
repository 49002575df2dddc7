use std::{
    fmt,
    io::{self, Write},
    sync::{Arc, Mutex, MutexGuard, TryLockError},
};

use log::{self, Log};

use crate::{Error, Facade, Severity};

/// A [`Facade`] which can be shared between threads and used as a backend
/// for the [`log`] crate.
///
/// Cloning is cheap; all clones drive the same facade.
///
/// `log` levels are mapped onto severities with [`Severity::from_log`], so
/// `info!`, `debug!` and `trace!` only come through in verbose mode.
///
/// ```no_run
/// # fn setup_logging() -> Result<(), logswitch::Error> {
/// let shared = logswitch::Facade::open("my-daemon")?.into_shared();
/// shared.apply()?;
///
/// log::warn!("running with default configuration");
///
/// // settings can still be changed through the shared handle
/// shared.lock().set_verbose(true);
/// log::info!("now this is logged as well");
/// # Ok(())
/// # }
/// # fn main() { setup_logging().ok(); }
/// ```
#[derive(Clone)]
pub struct SharedFacade {
    inner: Arc<Mutex<Facade>>,
}

impl Facade {
    /// Wraps this facade so it can be shared, and installed as the global
    /// `log` logger.
    pub fn into_shared(self) -> SharedFacade {
        SharedFacade {
            inner: Arc::new(Mutex::new(self)),
        }
    }
}

impl SharedFacade {
    /// Locks the facade for direct use.
    ///
    /// A panic while the lock was held doesn't make the facade unusable.
    pub fn lock(&self) -> MutexGuard<'_, Facade> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Logs `message` with the given severity. See [`Facade::emit`].
    pub fn emit(&self, severity: Severity, message: &str) -> Result<(), Error> {
        self.lock().emit(severity, message)
    }

    /// Installs a clone of this facade as the global `log` logger.
    ///
    /// This will fail if another global logger was already set.
    pub fn apply(&self) -> Result<(), Error> {
        log::set_boxed_logger(Box::new(self.clone()))?;
        log::set_max_level(log::LevelFilter::Trace);
        Ok(())
    }
}

impl Log for SharedFacade {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        self.lock().enabled(Severity::from_log(metadata.level()))
    }

    fn log(&self, record: &log::Record) {
        let severity = Severity::from_log(record.level());
        let message = record.args().to_string();

        let mut facade = self.lock();
        if !facade.enabled(severity) {
            return;
        }
        if let Err(error) = facade.emit(severity, &message) {
            drop(facade);
            backup_logging(record, &error);
        }
    }

    fn flush(&self) {
        self.lock().flush();
    }
}

impl fmt::Debug for SharedFacade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.try_lock() {
            Ok(facade) => f.debug_tuple("SharedFacade").field(&*facade).finish(),
            Err(TryLockError::Poisoned(e)) => {
                f.debug_tuple("SharedFacade").field(&*e.into_inner()).finish()
            }
            Err(TryLockError::WouldBlock) => f.debug_tuple("SharedFacade").field(&"<locked>").finish(),
        }
    }
}

// `log::Log` has no way to hand errors back, so report them on stderr.
fn backup_logging(record: &log::Record, error: &Error) {
    let second = write!(
        io::stderr(),
        "Error performing logging.\
         \n\tattempted to log: {}\
         \n\trecord: {:?}\
         \n\tlogging error: {}\n",
        record.args(),
        record,
        error
    );

    if let Err(second_error) = second {
        panic!(
            "Error performing stderr logging after error occurred during regular logging.\
             \n\tattempted to log: {}\
             \n\trecord: {:?}\
             \n\tfirst logging error: {}\
             \n\tstderr error: {}",
            record.args(),
            record,
            error,
            second_error,
        );
    }
}
