//! Error types for shipdoc core.

use std::{error::Error, fmt, io};

/// Error type for shipdoc core operations.
#[derive(Debug)]
pub enum ShipDocError {
    /// An underlying I/O error.
    Io(io::Error),
    /// The ship definition is not well-formed XML.
    Xml(roxmltree::Error),
    /// No destination path was given for the generated page.
    MissingOutput,
}

impl fmt::Display for ShipDocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "io error: {err}"),
            Self::Xml(err) => write!(f, "xml error: {err}"),
            Self::MissingOutput => write!(f, "no output path given (use -o <OUTPUT>)"),
        }
    }
}

impl Error for ShipDocError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Xml(err) => Some(err),
            Self::MissingOutput => None,
        }
    }
}

impl From<io::Error> for ShipDocError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<roxmltree::Error> for ShipDocError {
    fn from(value: roxmltree::Error) -> Self {
        Self::Xml(value)
    }
}

/// Convenience result type for shipdoc core.
pub type Result<T> = std::result::Result<T, ShipDocError>;
