use std::fmt;

use serde::{Deserialize, Serialize};

/// Harvard spectral class of a main-sequence star
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpectralType {
    O,
    B,
    A,
    F,
    G,
    K,
    M,
}

/// Lower temperature bound (K) for each class, hottest first
const TEMPERATURE_THRESHOLDS: [(f64, SpectralType); 6] = [
    (30_000.0, SpectralType::O),
    (10_000.0, SpectralType::B),
    (7_500.0, SpectralType::A),
    (6_000.0, SpectralType::F),
    (5_200.0, SpectralType::G),
    (3_700.0, SpectralType::K),
];

impl SpectralType {
    /// Classify by effective temperature; anything at or below 3700 K is M.
    pub fn from_temperature(temperature: f64) -> Self {
        TEMPERATURE_THRESHOLDS
            .iter()
            .find(|(bound, _)| temperature > *bound)
            .map(|(_, class)| *class)
            .unwrap_or(SpectralType::M)
    }
}

impl fmt::Display for SpectralType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            SpectralType::O => "O",
            SpectralType::B => "B",
            SpectralType::A => "A",
            SpectralType::F => "F",
            SpectralType::G => "G",
            SpectralType::K => "K",
            SpectralType::M => "M",
        };
        write!(f, "{}", str)
    }
}

/// Yerkes luminosity class, reduced to the three branches the generator emits
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LuminosityClass {
    I,   // Supergiants
    III, // Normal giants
    V,   // Main sequence
}

/// Fraction of the main-sequence lifetime after which a star leaves class V
pub const MAIN_SEQUENCE_TURNOFF: f64 = 0.9;

impl LuminosityClass {
    /// Classify from the elapsed lifetime fraction and the stellar mass.
    ///
    /// Stars below 0.5 M☉ never leave the main sequence within the age of the
    /// universe; evolved stars below 8 M☉ become giants, heavier ones
    /// supergiants.
    pub fn from_evolution(age_fraction: f64, mass: f64) -> Self {
        match (age_fraction, mass) {
            (f, _) if f < MAIN_SEQUENCE_TURNOFF => LuminosityClass::V,
            (_, m) if m < 0.5 => LuminosityClass::V,
            (_, m) if m < 8.0 => LuminosityClass::III,
            _ => LuminosityClass::I,
        }
    }
}

impl fmt::Display for LuminosityClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            LuminosityClass::I => "I",
            LuminosityClass::III => "III",
            LuminosityClass::V => "V",
        };
        write!(f, "{}", str)
    }
}
