//! Planet records and their characterization from an orbit and a mass

use serde::{Deserialize, Serialize};
use seeded_random::RandomStream;
use stellar::Star;
use tracing::trace;
use units::Mass;

use crate::atmosphere::Atmosphere;
use crate::composition::Composition;
use crate::habitability::{assess, Habitability};
use crate::physics;

/// Beyond the frost line, cores above this mass (M⊕) run away into gas giants
pub const FROST_LINE_GIANT_MASS: f64 = 10.0;
/// Inside the frost line only migrated giants this heavy (M⊕) keep an envelope
pub const INNER_GIANT_MASS: f64 = 100.0;

/// Shortest rotation period (hours)
const MIN_ROTATION_HOURS: f64 = 2.0;

/// Rocky versus gas-giant regime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlanetKind {
    Rocky,
    GasGiant,
}

impl PlanetKind {
    /// Classify by mass and position relative to the frost line.
    ///
    /// # Examples
    /// ```
    /// use planetary::PlanetKind;
    ///
    /// assert_eq!(PlanetKind::classify(15.0, 5.0, 2.7), PlanetKind::GasGiant);
    /// assert_eq!(PlanetKind::classify(15.0, 1.0, 2.7), PlanetKind::Rocky);
    /// ```
    pub fn classify(mass_earth: f64, orbital_radius: f64, frost_line: f64) -> Self {
        let threshold = if orbital_radius >= frost_line {
            FROST_LINE_GIANT_MASS
        } else {
            INNER_GIANT_MASS
        };
        if mass_earth >= threshold {
            PlanetKind::GasGiant
        } else {
            PlanetKind::Rocky
        }
    }

    pub fn composition(&self) -> Composition {
        match self {
            PlanetKind::Rocky => Composition::rocky(),
            PlanetKind::GasGiant => Composition::gas_giant(),
        }
    }
}

/// Orbit and mass produced by a formation strategy, before characterization
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetSeed {
    /// Orbital radius in AU
    pub orbital_radius: f64,
    /// Mass in Earth masses
    pub mass_earth: f64,
    pub eccentricity: f64,
    pub kind: PlanetKind,
    /// Period (years) measured from simulated kinematics, if any
    pub measured_period: Option<f64>,
}

/// A fully characterized planet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Planet {
    pub name: String,
    /// Mass (kg)
    pub mass: f64,
    /// Radius (m)
    pub radius: f64,
    /// Bulk density (kg/m³)
    pub density: f64,
    /// Orbital radius (AU)
    pub orbital_radius: f64,
    /// Orbital period (years)
    pub orbital_period: f64,
    pub eccentricity: f64,
    /// Surface gravity (m/s²)
    pub surface_gravity: f64,
    /// Escape velocity (m/s)
    pub escape_velocity: f64,
    /// Surface temperature (K)
    pub surface_temperature: f64,
    pub composition: Composition,
    pub atmosphere: Option<Atmosphere>,
    /// Surface magnetic field (T)
    pub magnetic_field: f64,
    /// Sidereal rotation period (hours)
    pub rotation_period: f64,
    /// Obliquity in degrees, 0–180
    pub axial_tilt: f64,
    pub habitability: Habitability,
}

impl Planet {
    /// Characterize a planet from its formation seed.
    ///
    /// Draws exactly two values from `stream` (rotation, then tilt); all
    /// other properties are closed-form. A measured period from an N-body
    /// run takes precedence over Kepler's law.
    pub fn characterize(
        name: impl Into<String>,
        seed: &PlanetSeed,
        star: &Star,
        stream: &mut RandomStream,
    ) -> Self {
        let gas_giant = seed.kind == PlanetKind::GasGiant;
        let mass = Mass::from_earth_masses(seed.mass_earth.max(f64::MIN_POSITIVE));
        let radius = physics::planet_radius(mass, gas_giant);

        let surface_gravity = physics::surface_gravity(mass, radius);
        let escape_velocity = physics::escape_velocity(mass, radius);
        let surface_temperature =
            physics::equilibrium_temperature(star.luminosity, seed.orbital_radius);
        let orbital_period = seed
            .measured_period
            .filter(|p| p.is_finite() && *p > 0.0)
            .unwrap_or_else(|| physics::orbital_period_years(star.mass, seed.orbital_radius));

        let composition = seed.kind.composition();
        let atmosphere =
            Atmosphere::for_planet(gas_giant, surface_temperature, surface_gravity, escape_velocity);
        let magnetic_field = physics::magnetic_field(mass, &composition);

        let rotation_period = stream.normal(24.0, 12.0).abs().max(MIN_ROTATION_HOURS);
        let axial_tilt = (stream.beta(1.2, 4.8) * 180.0).clamp(0.0, 180.0);

        let mut planet = Self {
            name: name.into(),
            mass: mass.to_kg(),
            radius: radius.to_meters(),
            density: physics::density(mass, radius),
            orbital_radius: seed.orbital_radius,
            orbital_period,
            eccentricity: seed.eccentricity,
            surface_gravity,
            escape_velocity,
            surface_temperature,
            composition,
            atmosphere,
            magnetic_field,
            rotation_period,
            axial_tilt,
            habitability: Habitability::default(),
        };
        planet.habitability = assess(&planet, star);

        trace!(
            name = %planet.name,
            orbit = planet.orbital_radius,
            mass_earth = seed.mass_earth,
            score = planet.habitability.score,
            "characterized planet"
        );
        planet
    }

    pub fn is_gas_giant(&self) -> bool {
        self.composition.is_gas_giant()
    }

    pub fn mass_earth(&self) -> f64 {
        Mass::from_kg(self.mass).to_earth_masses()
    }
}

/// Catalog letter for the planet at `index` in orbital order: b, c, d, ...
///
/// Past `z` the letters continue as `z1`, `z2`, ...
pub fn planet_letter(index: usize) -> String {
    const LETTERS: &[u8] = b"bcdefghijklmnopqrstuvwxyz";
    match LETTERS.get(index) {
        Some(&c) => (c as char).to_string(),
        None => format!("z{}", index + 1 - LETTERS.len()),
    }
}
