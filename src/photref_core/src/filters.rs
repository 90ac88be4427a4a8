//! # Photometric filters
//! Lookup of effective wavelengths for the Sloan u', g', r', i', z' filters.
//!
//! Filter names are matched exactly. No trimming or case folding is done, so `"u"`
//! and `"U'"` are both unknown filters.

use std::{fmt::Display, str::FromStr};

use crate::constants::{SLOAN_BANDS, SLOAN_FILTER_NAMES};
use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// Sloan filters.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, Serialize, Deserialize)]
pub enum SloanFilter {
    /// u' Band Filter
    U,

    /// g' Band Filter
    G,

    /// r' Band Filter
    R,

    /// i' Band Filter
    I,

    /// z' Band Filter
    Z,
}

impl SloanFilter {
    /// All filters, ordered by increasing wavelength.
    pub const ALL: [SloanFilter; 5] = [
        SloanFilter::U,
        SloanFilter::G,
        SloanFilter::R,
        SloanFilter::I,
        SloanFilter::Z,
    ];

    fn index(&self) -> usize {
        match self {
            SloanFilter::U => 0,
            SloanFilter::G => 1,
            SloanFilter::R => 2,
            SloanFilter::I => 3,
            SloanFilter::Z => 4,
        }
    }

    /// Identifier of the filter, including the trailing quote.
    pub fn name(&self) -> &'static str {
        SLOAN_FILTER_NAMES[self.index()]
    }

    /// Effective wavelength of the filter in Angstrom.
    pub fn effective_wavelength(&self) -> f64 {
        SLOAN_BANDS[self.index()]
    }
}

impl Display for SloanFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SloanFilter {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SloanFilter::ALL
            .into_iter()
            .find(|filter| filter.name() == s)
            .ok_or_else(|| Error::UnknownFilter(s.into()))
    }
}

/// Effective wavelength in Angstrom of the named filter.
///
/// Returns `None` if the name is not exactly one of `u'`, `g'`, `r'`, `i'`, `z'`.
///
/// ```
/// use photref_core::filters::effwav;
///
/// assert_eq!(effwav("r'"), Some(6231.0));
/// assert_eq!(effwav("r"), None);
/// ```
pub fn effwav(name: &str) -> Option<f64> {
    match SloanFilter::from_str(name) {
        Ok(filter) => Some(filter.effective_wavelength()),
        Err(err) => {
            log::debug!("{}", err);
            None
        }
    }
}
