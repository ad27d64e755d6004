use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Everything that can go wrong while configuring, feeding or querying a bootstrap.
#[derive(Debug)]
pub enum Error {
    /// Bad replicate count or resampling parameter at construction time.
    InvalidConfiguration(String),
    /// Merging or differencing replicate sets that cannot be combined.
    IncompatibleOperation(String),
    /// Unrecognized confidence interval method name.
    UnsupportedMethod(String),
    /// Confidence level outside of `(0, 1)`.
    InvalidArgument(String),
    /// A statistic was requested before any observation was ingested.
    InsufficientData(&'static str),
    AccessError {
        path: PathBuf,
        inner: io::Error,
    },
    SerdeError {
        path: PathBuf,
        inner: serde_json::error::Error,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidConfiguration(msg) => write!(f, "Invalid configuration: {}", msg),
            Error::IncompatibleOperation(msg) => write!(f, "Incompatible operation: {}", msg),
            Error::UnsupportedMethod(name) => {
                write!(f, "Unsupported confidence interval method: {:?}", name)
            }
            Error::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Error::InsufficientData(what) => {
                write!(f, "Cannot compute {} before any observation", what)
            }
            Error::AccessError { path, inner } => {
                write!(f, "Failed to access file {:?}: {}", path, inner)
            }
            Error::SerdeError { path, inner } => write!(
                f,
                "Failed to read or write file {:?} due to serialization error: {}",
                path, inner
            ),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::AccessError { inner, .. } => Some(inner),
            Error::SerdeError { inner, .. } => Some(inner),
            _ => None,
        }
    }
}

pub type Result<T> = ::std::result::Result<T, Error>;
