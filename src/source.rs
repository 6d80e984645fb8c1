//! The one real operation: block until the terminal yields an event, the
//! caller's wait budget runs out, or the device fails.

use std::time::{Duration, Instant};

use crossterm::event::{Event as RawEvent, KeyEventKind};
use tracing::trace;

use crate::error::ReadError;
use crate::event::Event;
use crate::key;
use crate::terminal::TerminalInput;

/// How long one read call may suspend the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wait {
    /// Block until an event arrives, however long that takes.
    Indefinite,
    /// Return immediately; report [`Event::None`] if nothing is pending.
    Poll,
    /// Block at most this long; report [`Event::Timeout`] if it elapses.
    For(Duration),
}

impl Wait {
    /// Map a signed millisecond count onto a wait mode: negative waits
    /// indefinitely, zero polls, positive bounds the wait.
    pub fn from_millis(ms: i32) -> Self {
        match ms {
            i32::MIN..=-1 => Wait::Indefinite,
            0 => Wait::Poll,
            _ => Wait::For(Duration::from_millis(ms as u64)),
        }
    }
}

/// Reads input events from a borrowed terminal handle.
///
/// The source borrows the handle exclusively, so there is at most one
/// outstanding read per handle by construction. Each call is independent:
/// no state is kept between reads, and exactly one event (or one error)
/// comes back per call.
pub struct EventSource<'t, T: TerminalInput> {
    terminal: &'t mut T,
}

impl<'t, T: TerminalInput> EventSource<'t, T> {
    pub fn new(terminal: &'t mut T) -> Self {
        Self { terminal }
    }

    /// Wait up to `wait` for the next input event.
    ///
    /// Consumes at most one key or resize event from the terminal's queue.
    /// Raw events outside this contract (mouse, focus, paste) and key
    /// releases are consumed and discarded without extending the deadline.
    /// Sequential calls observe events in the order they became available.
    pub fn read_event(&mut self, wait: Wait) -> Result<Event, ReadError> {
        let deadline = match wait {
            Wait::For(bound) => Some(Instant::now() + bound),
            _ => None,
        };

        loop {
            let timeout = match wait {
                Wait::Poll => Some(Duration::ZERO),
                Wait::For(_) => {
                    // Recomputed every pass so discarded events eat into
                    // the budget instead of restarting it.
                    let deadline = deadline.unwrap_or_else(Instant::now);
                    Some(deadline.saturating_duration_since(Instant::now()))
                }
                Wait::Indefinite => None,
            };

            if !self.terminal.poll(timeout)? {
                match wait {
                    Wait::Poll => return Ok(Event::None),
                    Wait::For(_) => return Ok(Event::Timeout),
                    Wait::Indefinite => continue,
                }
            }

            match self.terminal.read()? {
                RawEvent::Key(k) if k.kind != KeyEventKind::Release => {
                    return Ok(Event::Key(key::encode(&k)));
                }
                RawEvent::Resize(_, _) => return Ok(Event::Resize),
                other => trace!(?other, "discarding event outside the read contract"),
            }
        }
    }

    /// [`read_event`](Self::read_event) with the timeout as signed
    /// milliseconds, for callers keeping the classic C-style boundary.
    pub fn read_event_ms(&mut self, timeout_ms: i32) -> Result<Event, ReadError> {
        self.read_event(Wait::from_millis(timeout_ms))
    }
}
