//! Errors surfaced by the command-line layer.
//!
//! Drawing and formatting never fail; only argument handling and output do.

use std::fmt;
use std::io;

#[derive(Debug)]
pub enum Error {
    /// A count was malformed or out of range.
    InvalidArgument(String),
    UnknownArg(String),
    /// A flag that takes a value came last.
    MissingValue(String),
    Clipboard(String),
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(s) => write!(f, "Invalid argument: {}", s),
            Error::UnknownArg(s) => write!(f, "Unknown argument: {}", s),
            Error::MissingValue(s) => write!(f, "Missing value for {}", s),
            Error::Clipboard(s) => write!(f, "Clipboard error: {}", s),
            Error::Io(e) => write!(f, "Output error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
