//! CODATA-2018 physical constants, in SI units.

/// Speed of light in vacuum \[m/s\].
pub const C: f64 = 2.99792458e8;

/// Elementary charge \[C\].
pub const E: f64 = 1.602176634e-19;

/// Vacuum magnetic permeability \[N/A²\].
pub const MU0: f64 = 1.25663706212e-6;

/// Alpha-particle mass \[kg\].
pub const M_ALPHA: f64 = 6.6446573357e-27;

/// Proton mass \[kg\].
pub const M_PROTON: f64 = 1.67262192369e-27;

/// Neutron mass \[kg\].
pub const M_NEUTRON: f64 = 1.67492749804e-27;

/// Electron mass \[kg\].
pub const M_ELECTRON: f64 = 9.1093837015e-31;
