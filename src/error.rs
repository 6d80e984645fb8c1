use std::io;

/// Failure of a single read call.
///
/// There is exactly one failure kind: something went wrong below the event
/// boundary (device error, handle invalidated, interrupted I/O). "No input
/// yet" is not a failure — it comes back as [`crate::Event::Timeout`] or
/// [`crate::Event::None`]. The call never retries and never logs; both are
/// the caller's responsibility, and the terminal may only be temporarily
/// unavailable, so treat this as retryable absent better knowledge.
#[derive(Debug, thiserror::Error)]
#[error("terminal read failed: {source}")]
pub struct ReadError {
    #[from]
    source: io::Error,
}

impl ReadError {
    /// The underlying I/O error.
    pub fn io_error(&self) -> &io::Error {
        &self.source
    }
}
