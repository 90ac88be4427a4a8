//! Observatory sites with their geodetic coordinates.
//!
//! Sites are loaded once from a tab separated table embedded in the binary, rows
//! are only ever appended to that table.
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::prelude::{Error, PhotrefResult};
use std::str::FromStr;

/// Observatory information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObsSite {
    /// short identifier used for lookups
    pub name: String,

    /// latitude in degrees, north positive
    pub lat: f64,

    /// longitude in degrees, east positive
    pub lon: f64,

    /// elevation in meters above sea level
    pub elevation: f64,

    /// descriptive name of the observatory
    pub full_name: String,
}

impl FromStr for ObsSite {
    type Err = Error;

    /// Load an ObsSite from a single tab separated row.
    fn from_str(row: &str) -> PhotrefResult<Self> {
        let cols: Vec<&str> = row.split('\t').map(str::trim).collect();
        if cols.len() != 5 {
            return Err(Error::ValueError(format!(
                "Observatory row must have 5 columns, found {}: {:?}",
                cols.len(),
                row
            )));
        }
        if cols[0].is_empty() {
            return Err(Error::ValueError(format!(
                "Observatory row has no name: {:?}",
                row
            )));
        }
        Ok(ObsSite {
            name: cols[0].to_string(),
            lat: f64::from_str(cols[1])?,
            lon: f64::from_str(cols[2])?,
            elevation: f64::from_str(cols[3])?,
            full_name: cols[4].to_string(),
        })
    }
}

impl ObsSite {
    /// Latitude, longitude and elevation of the site.
    pub fn ephem(&self) -> (f64, f64, f64) {
        (self.lat, self.lon, self.elevation)
    }
}

const PRELOAD_SITES: &str = include_str!("../data/observatories.tsv");

fn parse_sites(text: &str) -> Vec<ObsSite> {
    let mut sites = Vec::new();
    for row in text.lines().skip(1) {
        if row.trim().is_empty() {
            continue;
        }
        match ObsSite::from_str(row) {
            Ok(site) => sites.push(site),
            Err(err) => log::warn!("Skipping observatory row: {}", err),
        }
    }
    sites
}

lazy_static! {
    /// Known observatory sites, in table order.
    pub static ref OBSERVATORIES: Vec<ObsSite> = parse_sites(PRELOAD_SITES);
}

/// Find the observatory with exactly this name.
pub fn try_observatory(name: &str) -> PhotrefResult<&'static ObsSite> {
    OBSERVATORIES
        .iter()
        .find(|site| site.name == name)
        .ok_or_else(|| Error::UnknownObservatory(name.into()))
}

/// Latitude (deg N), longitude (deg E) and elevation (m) of the named observatory.
///
/// Returns `None` if the observatory is not known.
///
/// ```
/// use photref_core::observatories::observatoryephem;
///
/// assert_eq!(observatoryephem("skinakas"), Some((35.2119, 24.8992, 1750.0)));
/// assert_eq!(observatoryephem("unknown"), None);
/// ```
pub fn observatoryephem(name: &str) -> Option<(f64, f64, f64)> {
    match try_observatory(name) {
        Ok(site) => Some(site.ephem()),
        Err(err) => {
            log::debug!("{}", err);
            None
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_known_sites() {
        assert_eq!(
            observatoryephem("skinakas"),
            Some((35.2119, 24.8992, 1750.0))
        );
        assert_eq!(observatoryephem("roque"), Some((28.7606, -17.8816, 2326.0)));
        assert_eq!(observatoryephem("helmos"), Some((37.9844, 22.1961, 2340.0)));
        assert_eq!(observatoryephem("kryoneri"), Some((37.9719, 22.6186, 930.0)));
    }

    #[test]
    fn test_unknown_site() {
        assert_eq!(observatoryephem("unknown"), None);
        assert_eq!(observatoryephem(""), None);
        assert_eq!(observatoryephem("Skinakas"), None);
        assert_eq!(
            try_observatory("unknown"),
            Err(Error::UnknownObservatory("unknown".into()))
        );
    }

    #[test]
    fn test_repeatable() {
        let first = observatoryephem("roque");
        for _ in 0..10 {
            assert_eq!(observatoryephem("roque"), first);
        }
    }

    #[test]
    fn test_table_fully_loaded() {
        let rows = PRELOAD_SITES
            .lines()
            .skip(1)
            .filter(|row| !row.trim().is_empty())
            .count();
        assert_eq!(OBSERVATORIES.len(), rows);

        let names: HashSet<_> = OBSERVATORIES.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names.len(), OBSERVATORIES.len());
        assert_eq!(OBSERVATORIES[0].name, "skinakas");
    }

    #[test]
    fn test_bad_rows() {
        assert!(matches!(
            ObsSite::from_str("roque\t28.7606\t-17.8816"),
            Err(Error::ValueError(_))
        ));
        assert!(matches!(
            ObsSite::from_str("roque\tnorth\t-17.8816\t2326.0\tRoque"),
            Err(Error::IOError(_))
        ));
        assert!(matches!(
            ObsSite::from_str("\t1.0\t2.0\t3.0\tNo name"),
            Err(Error::ValueError(_))
        ));

        let sites = parse_sites("header\nbad row\n\nsite\t1.0\t2.0\t3.0\tSite\n");
        assert_eq!(sites.len(), 1);
        assert_eq!(sites[0].ephem(), (1.0, 2.0, 3.0));
    }
}
