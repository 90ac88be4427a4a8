//! # Constants
//! Constant values for the photometric systems known to photref.
//!
mod sloan;

pub use sloan::*;
