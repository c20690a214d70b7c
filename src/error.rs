//! Crate-level error types.

use std::fmt;

/// Errors produced by the quanto-view crate.
#[derive(Debug)]
pub enum QuantoViewError {
    /// The delegate layout has no target for a vertex it still lists.
    MissingTarget(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// Failed to spawn a background thread.
    ThreadSpawn(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for QuantoViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTarget(vertex) => {
                write!(f, "delegate layout has no target for vertex {vertex}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ThreadSpawn(e) => {
                write!(f, "failed to spawn thread: {e}")
            }
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for QuantoViewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) | Self::ThreadSpawn(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for QuantoViewError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
