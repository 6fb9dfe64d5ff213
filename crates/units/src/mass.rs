use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

use crate::constants::{EARTH_MASS_KG, JUPITER_MASS_KG, SOLAR_MASS_KG};

/// Mass stored in kilograms.
///
/// The base unit is the kilogram so planet records can be filled directly,
/// while the astronomical constructors keep generator code readable.
///
/// # Examples
///
/// ```rust
/// use units::Mass;
///
/// let jupiter = Mass::from_jupiter_masses(1.0);
/// assert!(jupiter > Mass::from_earth_masses(300.0));
///
/// let earth = Mass::from_earth_masses(1.0);
/// assert!((earth.to_kg() - 5.972e24).abs() < 1e18);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Mass(f64); // Base unit: kilograms

impl Mass {
    pub fn from_kg(value: f64) -> Self {
        Self(value)
    }

    /// From Earth masses (M⊕), the unit planet seeds are sampled in.
    pub fn from_earth_masses(value: f64) -> Self {
        Self(value * EARTH_MASS_KG)
    }

    /// One Jupiter mass is about 317.8 M⊕.
    pub fn from_jupiter_masses(value: f64) -> Self {
        Self(value * JUPITER_MASS_KG)
    }

    /// From solar masses (M☉).
    ///
    /// ```rust
    /// use units::Mass;
    ///
    /// let star = Mass::from_solar_masses(1.0);
    /// assert!((star.to_earth_masses() - 332_946.0).abs() < 100.0);
    /// ```
    pub fn from_solar_masses(value: f64) -> Self {
        Self(value * SOLAR_MASS_KG)
    }

    pub fn to_kg(&self) -> f64 {
        self.0
    }

    pub fn to_earth_masses(&self) -> f64 {
        self.0 / EARTH_MASS_KG
    }

    pub fn to_jupiter_masses(&self) -> f64 {
        self.0 / JUPITER_MASS_KG
    }

    /// The N-body integrator works in M☉, so this is the bridge between
    /// planet records and the integrator state.
    pub fn to_solar_masses(&self) -> f64 {
        self.0 / SOLAR_MASS_KG
    }

    pub fn max(self, other: Self) -> Self {
        Self(self.0.max(other.0))
    }
}

impl Add for Mass {
    type Output = Mass;

    fn add(self, rhs: Mass) -> Mass {
        Mass(self.0 + rhs.0)
    }
}

impl Sub for Mass {
    type Output = Mass;

    fn sub(self, rhs: Mass) -> Mass {
        Mass(self.0 - rhs.0)
    }
}

impl Mul<f64> for Mass {
    type Output = Mass;

    fn mul(self, rhs: f64) -> Mass {
        Mass(self.0 * rhs)
    }
}

impl Mul<Mass> for f64 {
    type Output = Mass;

    fn mul(self, rhs: Mass) -> Mass {
        rhs * self
    }
}

impl Div<f64> for Mass {
    type Output = Mass;

    fn div(self, rhs: f64) -> Mass {
        Mass(self.0 / rhs)
    }
}

/// Mass ratios are dimensionless
impl Div for Mass {
    type Output = f64;

    fn div(self, rhs: Mass) -> f64 {
        self.0 / rhs.0
    }
}
