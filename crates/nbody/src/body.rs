use nalgebra::{Point2, Vector2};

use crate::forces::G;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(pub u32);

#[derive(Debug, Clone, Copy)]
pub struct Body {
    pub id: BodyId,
    pub mass: f64,              // Solar masses
    pub position: Point2<f64>,  // AU (star-centred, 2D)
    pub velocity: Vector2<f64>, // AU/year
}

impl Body {
    pub fn momentum(&self) -> Vector2<f64> {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.magnitude_squared()
    }

    /// Distance from the central star in AU
    pub fn orbital_radius(&self) -> f64 {
        self.position.coords.magnitude()
    }

    /// Speed relative to the central star in AU/year
    pub fn speed(&self) -> f64 {
        self.velocity.magnitude()
    }

    /// Polar angle of the position in radians, in (−π, π]
    pub fn angle(&self) -> f64 {
        self.position.y.atan2(self.position.x)
    }

    /// Two-body energy per unit mass, ½v² − GM/r, relative to a star of
    /// `central_mass` M☉. Non-negative means unbound.
    pub fn specific_orbital_energy(&self, central_mass: f64) -> f64 {
        0.5 * self.velocity.magnitude_squared() - G * central_mass / self.orbital_radius()
    }

    /// z-component of r × v (per unit mass)
    pub fn specific_angular_momentum(&self) -> f64 {
        self.position.x * self.velocity.y - self.position.y * self.velocity.x
    }
}
