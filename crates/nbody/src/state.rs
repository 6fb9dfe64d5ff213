use crate::body::{Body, BodyId};
use nalgebra::{Point2, Vector2};

/// Complete state of a planetary N-body system at a given time
///
/// The star is held fixed at the origin and enters only through its mass.
#[derive(Debug, Clone)]
pub struct SystemState {
    /// Current simulation time in years
    pub time: f64,
    /// Mass of the central star in solar masses
    pub central_mass: f64,
    /// Collection of orbiting bodies
    pub bodies: Vec<Body>,
    next_id: u32,
}

impl SystemState {
    /// Creates an empty system around a star of `central_mass` M☉
    ///
    /// # Examples
    ///
    /// ```
    /// use nbody::SystemState;
    ///
    /// let system = SystemState::new(1.0);
    /// assert_eq!(system.body_count(), 0);
    /// assert_eq!(system.time, 0.0);
    /// ```
    pub fn new(central_mass: f64) -> Self {
        Self {
            time: 0.0,
            central_mass,
            bodies: Vec::new(),
            next_id: 0,
        }
    }

    /// Adds a body and returns its ID
    ///
    /// # Arguments
    ///
    /// * `mass` - Body mass in solar masses
    /// * `position` - Position in AU relative to the star
    /// * `velocity` - Velocity in AU/year
    pub fn add_body(&mut self, mass: f64, position: Point2<f64>, velocity: Vector2<f64>) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        self.bodies.push(Body {
            id,
            mass,
            position,
            velocity,
        });
        id
    }

    pub fn get_body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Total kinetic energy of the orbiting bodies
    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(|b| b.kinetic_energy()).sum()
    }

    /// Total angular momentum of the orbiting bodies
    ///
    /// Conserved by the integrator for any central force model.
    pub fn total_angular_momentum(&self) -> f64 {
        self.bodies
            .iter()
            .map(|b| b.specific_angular_momentum() * b.mass)
            .sum()
    }
}
