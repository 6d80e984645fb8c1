//! The terminal handle boundary.
//!
//! [`EventSource`](crate::EventSource) never opens, closes, or reconfigures
//! a terminal; it borrows an already-open handle through [`TerminalInput`]
//! and consumes events from it. The handle must stay valid for every call.

use std::io;
use std::time::Duration;

use crossterm::event as ct_event;

/// An open terminal device, seen purely as a source of input events.
///
/// Implementations back [`poll`](TerminalInput::poll) /
/// [`read`](TerminalInput::read) with whatever queue the device has. The
/// trait takes `&mut self` deliberately: one outstanding read per handle,
/// callers wanting to share a handle across threads must synchronize
/// externally.
pub trait TerminalInput {
    /// Wait up to `timeout` for an event to become ready. `None` waits
    /// indefinitely. Returns whether [`read`](TerminalInput::read) would
    /// yield an event without blocking.
    fn poll(&mut self, timeout: Option<Duration>) -> io::Result<bool>;

    /// Consume exactly one ready event. Only called after `poll` returned
    /// true; may block otherwise.
    fn read(&mut self) -> io::Result<ct_event::Event>;
}

/// The process's controlling terminal, via crossterm's event queue.
///
/// Opening it does not touch terminal modes; enabling raw mode (and
/// restoring it) is the caller's job before and after using this.
#[derive(Debug, Default)]
pub struct TtyInput {
    _private: (),
}

impl TtyInput {
    pub fn open() -> Self {
        Self { _private: () }
    }
}

// crossterm's poll takes a bounded duration, so an indefinite wait is a
// chunked loop. The chunk size only bounds how stale a spurious wakeup
// can be; it adds no latency when input arrives.
const INDEFINITE_CHUNK: Duration = Duration::from_secs(1);

impl TerminalInput for TtyInput {
    fn poll(&mut self, timeout: Option<Duration>) -> io::Result<bool> {
        match timeout {
            Some(bound) => ct_event::poll(bound),
            None => loop {
                if ct_event::poll(INDEFINITE_CHUNK)? {
                    return Ok(true);
                }
            },
        }
    }

    fn read(&mut self) -> io::Result<ct_event::Event> {
        ct_event::read()
    }
}
