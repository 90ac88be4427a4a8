//! # Errors
//! Errors emitted by photref_core

/// Define all errors which may be raised by this crate, as well as optionally provide
/// conversion to pyo3 error types which allow for the errors to be raised in Python.
use std::{error, fmt};

/// photref specific result.
pub type PhotrefResult<T> = Result<T, Error>;

/// Possible Errors which may be raised by this crate.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Filter name is not one of the known photometric filters.
    UnknownFilter(String),

    /// Observatory name is not present in the observatory table.
    UnknownObservatory(String),

    /// A row of the observatory table is malformed.
    ValueError(String),

    /// Error related to reading numbers out of a table row.
    IOError(String),
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::UnknownFilter(s) => {
                write!(f, "Unknown filter {:?}, expected one of u', g', r', i', z'", s)
            }
            Error::UnknownObservatory(s) => {
                write!(f, "Unknown observatory {:?}", s)
            }
            Error::ValueError(s) => {
                write!(f, "{}", s)
            }
            Error::IOError(s) => {
                write!(f, "{}", s)
            }
        }
    }
}

#[cfg(feature = "pyo3")]
use pyo3::{exceptions, PyErr};

#[cfg(feature = "pyo3")]
impl From<Error> for PyErr {
    fn from(err: Error) -> PyErr {
        match err {
            Error::UnknownFilter(_) | Error::UnknownObservatory(_) => {
                PyErr::new::<exceptions::PyKeyError, _>(err.to_string())
            }

            Error::ValueError(s) => PyErr::new::<exceptions::PyValueError, _>(s),

            Error::IOError(s) => PyErr::new::<exceptions::PyValueError, _>(s),
        }
    }
}

impl From<std::num::ParseFloatError> for Error {
    fn from(value: std::num::ParseFloatError) -> Self {
        Error::IOError(value.to_string())
    }
}
