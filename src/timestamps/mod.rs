//! Time handling for the two encodings the platform uses.
//!
//! Messages are keyed by a fractional-second text timestamp ([`SlackTs`]), files carry a
//! plain Unix creation time. A [`Cutoff`] holds the same instant in both encodings so the
//! message and file filters can never drift apart.

pub mod codec;
pub mod cutoff;
pub mod format;

pub use codec::SlackTs;
pub use cutoff::{CUTOFF_FORMAT, Cutoff};
pub use format::{pretty_date, pretty_ts};

/// Errors produced while decoding timestamps or the cutoff argument
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimestampError {
    /// Text is not `<seconds>.<fraction>` with integer parts
    #[error("malformed timestamp '{0}': expected <seconds>.<microseconds>")]
    MalformedTimestamp(String),
    /// Cutoff argument does not match `YYYYMMDD-HHMM`
    #[error("malformed cutoff '{0}': expected format YYYYMMDD-HHMM (UTC)")]
    MalformedCutoff(String),
    /// Value cannot be represented as a point in time
    #[error("timestamp out of range: {0}")]
    OutOfRange(String),
}
