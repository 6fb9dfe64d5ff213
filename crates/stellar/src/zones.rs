//! Orbital zones around a star.

use serde::{Deserialize, Serialize};
use units::{checked_sqrt, with_fallback};

/// Temperature at which water ice condenses in the disk (K)
pub const ICE_CONDENSATION_TEMPERATURE: f64 = 170.0;

/// Disk temperature at 1 AU around a 1 L☉ star (K)
const DISK_TEMPERATURE_AT_1AU: f64 = 280.0;

/// Frost line distance in AU for a star of `luminosity` L☉.
///
/// Solves the disk temperature profile T(d) = 280 L^¼ d^-½ for
/// T = 170 K: d = (280 L^¼ / 170)².
pub fn frost_line(luminosity: f64) -> f64 {
    let t_1au = DISK_TEMPERATURE_AT_1AU * luminosity.max(0.0).powf(0.25);
    (t_1au / ICE_CONDENSATION_TEMPERATURE).powi(2)
}

/// Conservative habitable zone boundaries in AU
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitableZone {
    /// Runaway greenhouse limit: √(L / 1.1)
    pub inner_edge: f64,
    /// Earth-equivalent insolation: √L
    pub optimal: f64,
    /// Maximum greenhouse limit: √(L / 0.53)
    pub outer_edge: f64,
}

impl HabitableZone {
    pub fn from_luminosity(luminosity: f64) -> Self {
        let root = |x: f64| with_fallback(checked_sqrt(x), 0.0, "habitable zone edge");
        Self {
            inner_edge: root(luminosity / 1.1),
            optimal: root(luminosity),
            outer_edge: root(luminosity / 0.53),
        }
    }

    /// Whether an orbit (AU) lies within the zone, edges included.
    pub fn contains(&self, orbital_radius: f64) -> bool {
        (self.inner_edge..=self.outer_edge).contains(&orbital_radius)
    }
}
