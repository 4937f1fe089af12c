use std::fmt::{self, Display};
use std::io;

use thiserror::Error;

/// Common error for loading inputs and running a session
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StencilError {
    #[error("{0} file name is empty!")]
    MissingInputError(InputKind),
    #[error("{0} file does not exist!")]
    FileNotFoundError(InputKind),
    #[error("JSON file is malformed: {0}")]
    MalformedDataError(String),
    #[error("{0}")]
    IoError(String),
    #[error("Input stream closed")]
    EndOfInputError,
}

impl From<io::Error> for StencilError {
    fn from(e: io::Error) -> Self {
        StencilError::IoError(e.to_string())
    }
}

/// Which named input an error is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Template,
    Fields,
    Output,
}

impl Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputKind::Template => write!(f, "Template"),
            InputKind::Fields => write!(f, "JSON"),
            InputKind::Output => write!(f, "Output"),
        }
    }
}
