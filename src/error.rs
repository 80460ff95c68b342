//! Error types for termflow.

use std::fmt;

/// Result type alias for termflow operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for termflow operations.
///
/// Normalization itself is total: malformed input falls through the
/// pass-through path and the mouse normalizer has a defined outcome for
/// every state. Errors only arise from invalid configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The escape-disambiguation window was configured as zero.
    ///
    /// A zero window would flush every Escape before a second token could
    /// arrive, making the Alt and keypad idioms unreachable.
    ZeroTimeout,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroTimeout => {
                write!(f, "escape disambiguation timeout must be non-zero")
            }
        }
    }
}

impl std::error::Error for Error {}
