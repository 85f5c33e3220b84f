//! Physical constants used across the reaction and decay calculations
//!
//! Values follow CODATA 2010, matching the NUBASE2012/AME2012 evaluation that
//! the bundled nuclide table is taken from.

/// Avogadro constant (mol^-1)
pub const AVOGADRO: f64 = 6.02214129e23;

/// Energy conversion (J/MeV)
pub const JOULES_PER_MEV: f64 = 1.602176565e-13;

/// Atomic mass unit (MeV)
pub const ATOMIC_MASS_UNIT_MEV: f64 = 931.494061;

/// Coulomb constant e^2/(4 pi eps0) (MeV fm)
pub const COULOMB_MEV_FM: f64 = 1.439976;

/// Reduced Planck constant (MeV ps)
pub const HBAR_MEV_PS: f64 = 6.58211928e-10;

/// Reduced Planck constant times the speed of light (MeV fm)
pub const HBARC_MEV_FM: f64 = 197.33;

/// Speed of light, rounded (m/s)
pub const SPEED_OF_LIGHT: f64 = 3e8;

/// ln(2) to the usual engineering precision
pub const LN2: f64 = 0.693;
