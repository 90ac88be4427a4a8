//! # photref Core
//! Reference tables used during photometric and astrometric data reduction:
//! effective wavelengths of the Sloan filters, and the geodetic position of the
//! observatories whose data is reduced.
//!
//! Both tables are immutable for the life of the process. Lookups never panic,
//! unknown names are returned as `None`, or as an [`errors::Error`] from the
//! `Result` flavoured functions.
//!
//! This crate is independent of the Python wrappers, which live in the `_core`
//! extension module.
//!

#![deny(
    bad_style,
    dead_code,
    improper_ctypes,
    non_shorthand_field_patterns,
    no_mangle_generic_items,
    overflowing_literals,
    path_statements,
    patterns_in_fns_without_body,
    unconditional_recursion,
    unused,
    while_true,
    missing_debug_implementations,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications,
    unused_results
)]

pub mod constants;
pub mod errors;
pub mod filters;
pub mod observatories;

/// Common useful imports
pub mod prelude {
    pub use crate::errors::{Error, PhotrefResult};
    pub use crate::filters::{effwav, SloanFilter};
    pub use crate::observatories::{observatoryephem, try_observatory, ObsSite, OBSERVATORIES};
}
