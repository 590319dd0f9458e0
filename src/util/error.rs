// MwIcons - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// All errors preserve the causal chain for diagnostic logging.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all icon generation operations.
#[derive(Debug)]
pub enum IconError {
    /// A requested icon size cannot produce a document.
    InvalidSize { size: u32 },

    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl IconError {
    /// Build an `Io` variant; used with `map_err` at every filesystem call.
    pub fn io(path: impl Into<PathBuf>, operation: &'static str, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            operation,
            source,
        }
    }

    /// The closest `std::io::ErrorKind` for this error.
    ///
    /// Invalid sizes report `InvalidInput`; I/O failures report the kind of
    /// the underlying error.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            Self::InvalidSize { .. } => io::ErrorKind::InvalidInput,
            Self::Io { source, .. } => source.kind(),
        }
    }
}

impl fmt::Display for IconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { size } => {
                write!(f, "Invalid icon size {size}: size must be a positive integer")
            }
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for IconError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidSize { .. } => None,
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// Convenience type alias for icon generation results.
pub type Result<T> = std::result::Result<T, IconError>;
