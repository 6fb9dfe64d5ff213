//! Habitability assessment

use serde::{Deserialize, Serialize};
use stellar::Star;

use crate::planet::Planet;

/// Freezing point of water at 1 bar (K)
pub const WATER_FREEZING_K: f64 = 273.0;
/// Boiling point of water at 1 bar (K)
pub const WATER_BOILING_K: f64 = 373.0;
/// Weakest surface field (T) counted as a protective magnetosphere
pub const MIN_PROTECTIVE_FIELD: f64 = 1.0e-6;

const ZONE_WEIGHT: f64 = 0.3;
const WATER_WEIGHT: f64 = 0.4;
const ATMOSPHERE_WEIGHT: f64 = 0.2;
const FIELD_WEIGHT: f64 = 0.1;

/// Derived habitability flags and their weighted score in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habitability {
    pub in_habitable_zone: bool,
    pub has_liquid_water: bool,
    pub has_atmosphere: bool,
    pub has_magnetic_field: bool,
    pub score: f64,
}

/// Assess a planet against its host star.
///
/// Pure: reads only the planet's orbit, temperature, atmosphere and field,
/// so repeated calls return identical results.
///
/// Score = 0.3·zone + 0.4·water + 0.2·atmosphere + 0.1·field. The weights
/// sum to 1, so the score never exceeds 1.
pub fn assess(planet: &Planet, star: &Star) -> Habitability {
    let in_habitable_zone = star.habitable_zone().contains(planet.orbital_radius);
    let has_atmosphere = planet.atmosphere.is_some();
    let has_liquid_water = has_atmosphere
        && planet.surface_temperature > WATER_FREEZING_K
        && planet.surface_temperature < WATER_BOILING_K;
    let has_magnetic_field = planet.magnetic_field >= MIN_PROTECTIVE_FIELD;

    let weight = |flag: bool, w: f64| if flag { w } else { 0.0 };
    let score = weight(in_habitable_zone, ZONE_WEIGHT)
        + weight(has_liquid_water, WATER_WEIGHT)
        + weight(has_atmosphere, ATMOSPHERE_WEIGHT)
        + weight(has_magnetic_field, FIELD_WEIGHT);

    Habitability {
        in_habitable_zone,
        has_liquid_water,
        has_atmosphere,
        has_magnetic_field,
        score: score.min(1.0),
    }
}
