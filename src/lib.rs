//! Blocking terminal event reads with a caller-bounded timeout.
//!
//! One operation matters here: [`EventSource::read_event`] suspends the
//! calling thread until the terminal yields an input event, the wait budget
//! runs out, or the device fails — whichever comes first. Everything else
//! (raw mode, alternate screen, rendering) belongs to the caller.
//!
//! ```no_run
//! use thermit::{Event, EventSource, TtyInput, Wait};
//!
//! let mut tty = TtyInput::open();
//! let mut source = EventSource::new(&mut tty);
//! match source.read_event(Wait::from_millis(500))? {
//!     Event::Key(code) => println!("key {code:#06x}"),
//!     Event::Resize => println!("terminal resized"),
//!     Event::Timeout | Event::None => println!("no input"),
//! }
//! # Ok::<(), thermit::ReadError>(())
//! ```

mod error;
mod event;
pub mod key;
mod source;
mod terminal;

pub use error::ReadError;
pub use event::Event;
pub use source::{EventSource, Wait};
pub use terminal::{TerminalInput, TtyInput};
