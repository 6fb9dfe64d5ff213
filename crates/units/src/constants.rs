//! Physical and astronomical constants in SI units unless noted.

/// Newtonian gravitational constant (m³ kg⁻¹ s⁻²)
pub const G: f64 = 6.674e-11;

/// Gravitational constant in AU³ M☉⁻¹ yr⁻² (4π²)
pub const G_AU_SOLAR_YEAR: f64 = 4.0 * std::f64::consts::PI * std::f64::consts::PI;

/// Astronomical unit (m)
pub const AU_M: f64 = 1.495_978_707e11;

/// Solar mass (kg)
pub const SOLAR_MASS_KG: f64 = 1.988_47e30;
/// Jupiter mass (kg)
pub const JUPITER_MASS_KG: f64 = 1.898e27;
/// Earth mass (kg)
pub const EARTH_MASS_KG: f64 = 5.972e24;

/// Solar radius (m)
pub const SOLAR_RADIUS_M: f64 = 6.957e8;
/// Jupiter equatorial radius (m)
pub const JUPITER_RADIUS_M: f64 = 6.9911e7;
/// Earth mean radius (m)
pub const EARTH_RADIUS_M: f64 = 6.371e6;

/// Nominal solar luminosity (W)
pub const SOLAR_LUMINOSITY_W: f64 = 3.828e26;
/// Solar effective temperature (K)
pub const SOLAR_TEMPERATURE_K: f64 = 5778.0;

/// Stefan–Boltzmann constant (W m⁻² K⁻⁴)
pub const STEFAN_BOLTZMANN: f64 = 5.670_374_419e-8;
/// Boltzmann constant (J K⁻¹)
pub const BOLTZMANN: f64 = 1.380_649e-23;
/// Molar gas constant (J mol⁻¹ K⁻¹)
pub const GAS_CONSTANT: f64 = 8.314_462_618;
/// Mass of a hydrogen molecule, the lightest gas an atmosphere can retain (kg)
pub const HYDROGEN_MOLECULE_KG: f64 = 2.0 * 1.672_621_92e-27;

/// Julian year (days)
pub const DAYS_PER_YEAR: f64 = 365.25;
/// Julian year (s)
pub const SECONDS_PER_YEAR: f64 = DAYS_PER_YEAR * 86_400.0;
