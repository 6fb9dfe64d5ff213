use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

use crate::constants::{AU_M, EARTH_RADIUS_M, JUPITER_RADIUS_M, SOLAR_RADIUS_M};

/// A physical length quantity, stored in meters.
///
/// # Examples
///
/// ```rust
/// use units::Length;
///
/// let orbit = Length::from_au(1.0);
/// assert!((orbit.to_km() - 1.496e8).abs() < 1e5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Length(f64); // Base unit: meters

impl Length {
    pub fn from_meters(value: f64) -> Self {
        Self(value)
    }

    pub fn from_km(value: f64) -> Self {
        Self(value * 1_000.0)
    }

    pub fn from_au(value: f64) -> Self {
        Self(value * AU_M)
    }

    pub fn from_earth_radii(value: f64) -> Self {
        Self(value * EARTH_RADIUS_M)
    }

    pub fn from_jupiter_radii(value: f64) -> Self {
        Self(value * JUPITER_RADIUS_M)
    }

    pub fn from_solar_radii(value: f64) -> Self {
        Self(value * SOLAR_RADIUS_M)
    }

    pub fn to_meters(&self) -> f64 {
        self.0
    }

    pub fn to_km(&self) -> f64 {
        self.0 / 1_000.0
    }

    pub fn to_au(&self) -> f64 {
        self.0 / AU_M
    }

    pub fn to_earth_radii(&self) -> f64 {
        self.0 / EARTH_RADIUS_M
    }

    pub fn to_jupiter_radii(&self) -> f64 {
        self.0 / JUPITER_RADIUS_M
    }

    pub fn max(self, other: Self) -> Self {
        Self(self.0.max(other.0))
    }
}

impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        Length(self.0 + rhs.0)
    }
}

impl Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Length {
        Length(self.0 - rhs.0)
    }
}

impl Mul<f64> for Length {
    type Output = Length;

    fn mul(self, rhs: f64) -> Length {
        Length(self.0 * rhs)
    }
}

/// Length ratios are dimensionless
impl Div for Length {
    type Output = f64;

    fn div(self, rhs: Length) -> f64 {
        self.0 / rhs.0
    }
}
