/// Sloan (SDSS) filter identifiers, the trailing quote is part of the name.
pub const SLOAN_FILTER_NAMES: [&str; 5] = ["u'", "g'", "r'", "i'", "z'"];

/// Sloan effective wavelengths of u', g', r', i', z' in Angstrom.
pub const SLOAN_BANDS: [f64; 5] = [3543.0, 4770.0, 6231.0, 7625.0, 9134.0];
