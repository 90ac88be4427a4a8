//! Python wrappers over the photref_core rust package.
//! Exposes the filter and observatory lookups to the reduction pipeline.

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

use photref_core::prelude::*;
use pyo3::prelude::*;

/// Effective wavelength of a Sloan filter in Angstrom.
///
/// Parameters
/// ----------
/// fil :
///     Filter name, one of "u'", "g'", "r'", "i'", "z'". Matching is exact.
///
/// Returns None if the filter is not known.
#[pyfunction]
#[pyo3(name = "effwav")]
pub fn effwav_py(fil: String) -> Option<f64> {
    effwav(&fil)
}

/// Latitude (degrees north), longitude (degrees east), and elevation (meters) of an
/// observatory, as a list.
///
/// Parameters
/// ----------
/// obs :
///     Short observatory name, for example "skinakas".
///
/// Returns None if the observatory is not known.
#[pyfunction]
#[pyo3(name = "observatoryephem")]
pub fn observatoryephem_py(obs: String) -> Option<Vec<f64>> {
    observatoryephem(&obs).map(|(lat, lon, elevation)| vec![lat, lon, elevation])
}

/// Return the list of known observatories, as the name, latitude, longitude (deg),
/// elevation (m), and full name.
#[pyfunction]
#[pyo3(name = "observatories")]
pub fn observatories_py() -> Vec<(String, f64, f64, f64, String)> {
    OBSERVATORIES
        .iter()
        .map(|site| {
            (
                site.name.clone(),
                site.lat,
                site.lon,
                site.elevation,
                site.full_name.clone(),
            )
        })
        .collect()
}

/// Return the list of known filters and their effective wavelengths in Angstrom.
#[pyfunction]
#[pyo3(name = "sloan_filters")]
pub fn sloan_filters_py() -> Vec<(&'static str, f64)> {
    SloanFilter::ALL
        .iter()
        .map(|filter| (filter.name(), filter.effective_wavelength()))
        .collect()
}

/// Look up an observatory, raising a KeyError if it is not known.
///
/// Parameters
/// ----------
/// obs :
///     Short observatory name.
#[pyfunction]
#[pyo3(name = "observatory")]
pub fn observatory_py(obs: String) -> PyResult<(f64, f64, f64, String)> {
    let site = try_observatory(&obs)?;
    Ok((site.lat, site.lon, site.elevation, site.full_name.clone()))
}

/// Python module which exposes all of the compiled rust functions.
#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(effwav_py, m)?)?;
    m.add_function(wrap_pyfunction!(sloan_filters_py, m)?)?;

    m.add_function(wrap_pyfunction!(observatoryephem_py, m)?)?;
    m.add_function(wrap_pyfunction!(observatories_py, m)?)?;
    m.add_function(wrap_pyfunction!(observatory_py, m)?)?;

    Ok(())
}
