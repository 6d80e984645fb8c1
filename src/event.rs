/// One discrete input notification produced by a single read call.
///
/// `Timeout` and `None` both mean "no input arrived"; which one you get
/// depends on the wait mode that was requested, not on a failure path.
/// A bounded wait that expires yields `Timeout`; a zero-duration poll
/// that finds nothing pending yields `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A key was pressed. The payload is the 16-bit key code; see
    /// [`crate::key`] for the encoding.
    Key(u16),
    /// The terminal dimensions changed. Carries no payload — callers that
    /// need the new size query the terminal after seeing this.
    Resize,
    /// Nothing was pending at a zero-duration poll.
    None,
    /// A bounded wait elapsed without input.
    Timeout,
}

impl Event {
    /// The key code, if this is a key event.
    pub fn key(self) -> Option<u16> {
        match self {
            Event::Key(code) => Some(code),
            _ => None,
        }
    }
}
