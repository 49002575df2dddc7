#![deny(missing_docs)]
#![doc(html_root_url = "https://docs.rs/logswitch/0.1.0")]
//! Logswitch: syslog-style logging which can be switched to the terminal.
//!
//! Current features:
//! - Eight syslog severities, from `emergency` down to `debug`
//! - Messages go to the system log, or to the terminal in debug mode
//! - Verbose mode gating `info` and `debug` messages
//! - Colored, timestamped terminal lines, disabled automatically when
//!   output is not a terminal
//! - Pluggable system-log backends through the [`Connector`] trait
//! - Usable as a backend for the `log` crate
//!
//! Adding logswitch as a dependency
//! ================================
//!
//! ```toml
//! [dependencies]
//! logswitch = "0.1"
//! ```
//!
//! Usage example
//! =============
//!
//! ```no_run
//! # fn run() -> Result<(), logswitch::Error> {
//! let mut log = logswitch::Facade::open("my-program")?;
//!
//! let debug = std::env::args().any(|arg| arg == "-d");
//! log.set_debug(debug);
//! log.set_verbose(debug);
//!
//! log.notice("my-program v0.1.0 starting")?;
//! log.info("reading configuration")?;
//! log.warning("configuration file missing, using defaults")?;
//!
//! log.close()?;
//! # Ok(())
//! # }
//! # fn main() { run().ok(); }
//! ```
//!
//! `Facade::open` connects to the local syslog daemon, as the `daemon`
//! facility, with the given tag as program name. Every message is sent
//! there, except:
//!
//! - with `set_debug(true)`, messages are printed on the terminal instead.
//! - `info` and `debug` messages are dropped unless `set_verbose(true)` was
//!   called.
//! - `emergency` messages always go to both the terminal and syslog.
//!
//! Terminal lines look like:
//!
//! ```text
//! 2024-01-01T00:00:00Z - WARNING   configuration file missing, using defaults
//! ```
//!
//! with the header colored when standard output is a terminal.
//!
//! For other facilities, or to write terminal lines somewhere other than
//! stdout, see [`Builder`]. To use the facade from several threads or through
//! the `log` macros, see [`SharedFacade`].

pub use crate::{
    builder::Builder,
    errors::Error,
    facade::Facade,
    log_impl::SharedFacade,
    severity::{Severity, UnknownSeverityError},
    target::{BackendError, ConnectOptions, Connector, Facility, Target},
    terminal::{StdoutProbe, TerminalProbe},
};

mod builder;
pub mod colors;
mod errors;
mod facade;
pub mod formatter;
mod log_impl;
mod severity;
pub mod syslog;
pub mod target;
pub mod terminal;
