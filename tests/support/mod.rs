//! Shared test doubles: a recording system log, an in-memory terminal and
//! fixed terminal probes.
#![allow(dead_code)]

use std::{
    fmt, io,
    sync::{Arc, Mutex},
};

use logswitch::{BackendError, Builder, ConnectOptions, Connector, Facade, Facility, Severity, Target, TerminalProbe};

/// What the system log has been asked to do, in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Connect {
        tag: String,
        facility: Facility,
        default_severity: Severity,
    },
    Send(Severity, String),
    Close,
}

#[derive(Debug)]
pub struct Refused(pub &'static str);

impl fmt::Display for Refused {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "refused: {}", self.0)
    }
}

impl std::error::Error for Refused {}

/// A system log which records every call, and fails on demand.
#[derive(Clone, Default)]
pub struct Recorder {
    calls: Arc<Mutex<Vec<Call>>>,
    pub fail_connect: bool,
    pub fail_send: bool,
    pub fail_close: bool,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_sends() -> Self {
        Recorder {
            fail_send: true,
            ..Self::default()
        }
    }

    pub fn failing_connects() -> Self {
        Recorder {
            fail_connect: true,
            ..Self::default()
        }
    }

    pub fn failing_closes() -> Self {
        Recorder {
            fail_close: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Only the messages, skipping connect and close.
    pub fn sent(&self) -> Vec<(Severity, String)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Send(severity, message) => Some((severity, message)),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

impl Connector for Recorder {
    type Target = Recorder;

    fn connect(&self, options: &ConnectOptions<'_>) -> Result<Recorder, BackendError> {
        self.record(Call::Connect {
            tag: options.tag.to_owned(),
            facility: options.facility,
            default_severity: options.default_severity,
        });
        if self.fail_connect {
            return Err(Box::new(Refused("connect")));
        }
        Ok(self.clone())
    }
}

impl Recorder {
    fn sent_as(&mut self, severity: Severity, message: &str) -> Result<(), BackendError> {
        self.record(Call::Send(severity, message.to_owned()));
        if self.fail_send {
            return Err(Box::new(Refused("send")));
        }
        Ok(())
    }
}

impl Target for Recorder {
    fn emergency(&mut self, message: &str) -> Result<(), BackendError> {
        self.sent_as(Severity::Emergency, message)
    }

    fn alert(&mut self, message: &str) -> Result<(), BackendError> {
        self.sent_as(Severity::Alert, message)
    }

    fn critical(&mut self, message: &str) -> Result<(), BackendError> {
        self.sent_as(Severity::Critical, message)
    }

    fn error(&mut self, message: &str) -> Result<(), BackendError> {
        self.sent_as(Severity::Error, message)
    }

    fn warning(&mut self, message: &str) -> Result<(), BackendError> {
        self.sent_as(Severity::Warning, message)
    }

    fn notice(&mut self, message: &str) -> Result<(), BackendError> {
        self.sent_as(Severity::Notice, message)
    }

    fn info(&mut self, message: &str) -> Result<(), BackendError> {
        self.sent_as(Severity::Info, message)
    }

    fn debug(&mut self, message: &str) -> Result<(), BackendError> {
        self.sent_as(Severity::Debug, message)
    }

    fn close(self: Box<Self>) -> Result<(), BackendError> {
        self.record(Call::Close);
        if self.fail_close {
            return Err(Box::new(Refused("close")));
        }
        Ok(())
    }
}

/// A terminal which keeps everything written to it.
#[derive(Clone, Default)]
pub struct Screen(Arc<Mutex<Vec<u8>>>);

impl Screen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).expect("terminal output is utf-8")
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(String::from).collect()
    }
}

impl io::Write for Screen {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A probe with fixed answers.
#[derive(Clone, Debug)]
pub struct Probe {
    pub interactive: bool,
    pub passthrough: bool,
    pub term: Option<&'static str>,
}

impl Probe {
    pub fn terminal() -> Self {
        Probe {
            interactive: true,
            passthrough: false,
            term: Some("xterm-256color"),
        }
    }

    pub fn pipe() -> Self {
        Probe {
            interactive: false,
            passthrough: false,
            term: Some("xterm-256color"),
        }
    }
}

impl TerminalProbe for Probe {
    fn is_interactive(&self) -> bool {
        self.interactive
    }

    fn is_passthrough(&self) -> bool {
        self.passthrough
    }

    fn term(&self) -> Option<String> {
        self.term.map(String::from)
    }
}

/// A builder writing to `screen`, as if it were a color terminal.
pub fn on_screen(screen: &Screen) -> Builder {
    Facade::builder().terminal(screen.clone()).probe(Probe::terminal())
}

/// Opens a facade on a color terminal, logging to `recorder`.
pub fn open(recorder: &Recorder, screen: &Screen) -> Facade {
    on_screen(screen)
        .open_with(recorder.clone(), "svc")
        .expect("opening with a working connector succeeds")
}

/// Splits a terminal line into its timestamp and the rest.
pub fn split_line(line: &str) -> (&str, &str) {
    let at = line.find(" - ").expect("line has a timestamp separator");
    (&line[..at], &line[at + 3..])
}
