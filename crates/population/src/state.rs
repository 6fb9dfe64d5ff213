//! Population records and lifecycle phases

use serde::{Deserialize, Serialize};

/// One species' population at a point in a simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulationState {
    pub species: String,
    /// Individuals; fractional during SDE integration, never negative
    pub count: f64,
    /// Adult body mass (kg)
    pub mass: f64,
    /// Metabolic rate (W)
    pub metabolic_rate: f64,
    /// 1 for producers, 2 for herbivores, and so on; may be fractional
    pub trophic_level: f64,
}

impl PopulationState {
    pub fn new(species: impl Into<String>, count: f64, mass: f64, trophic_level: f64) -> Self {
        Self {
            species: species.into(),
            count: count.max(0.0),
            mass,
            metabolic_rate: kleiber_metabolic_rate(mass),
            trophic_level,
        }
    }

    /// Count rounded to whole individuals for reporting.
    pub fn reported_count(&self) -> u64 {
        if self.count.is_finite() && self.count > 0.0 {
            self.count.round() as u64
        } else {
            0
        }
    }

    pub fn is_extinct(&self) -> bool {
        !(self.count > 0.0)
    }

    /// Replace the count, flooring at zero.
    pub(crate) fn set_count(&mut self, count: f64) {
        self.count = if count.is_finite() { count.max(0.0) } else { 0.0 };
    }
}

/// Kleiber's law: basal metabolic rate ≈ 3.4 W · m^0.75 for m in kg
pub fn kleiber_metabolic_rate(mass: f64) -> f64 {
    3.4 * mass.max(0.0).powf(0.75)
}

/// Lifecycle of a simulated population
///
/// `Extinct` is absorbing: once a population reaches zero it stays there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PopulationPhase {
    Growing,
    Stable,
    Declining,
    Extinct,
}

impl PopulationPhase {
    /// Phase implied by a change from `previous` to `current`.
    ///
    /// Relative changes within `tolerance` count as stable.
    ///
    /// # Examples
    /// ```
    /// use population::PopulationPhase;
    ///
    /// assert_eq!(PopulationPhase::classify(100.0, 120.0, 0.01), PopulationPhase::Growing);
    /// assert_eq!(PopulationPhase::classify(100.0, 100.5, 0.01), PopulationPhase::Stable);
    /// assert_eq!(PopulationPhase::classify(100.0, 0.0, 0.01), PopulationPhase::Extinct);
    /// ```
    pub fn classify(previous: f64, current: f64, tolerance: f64) -> Self {
        if !(current > 0.0) {
            return PopulationPhase::Extinct;
        }
        if !(previous > 0.0) {
            return PopulationPhase::Growing;
        }
        let change = (current - previous) / previous;
        if change > tolerance {
            PopulationPhase::Growing
        } else if change < -tolerance {
            PopulationPhase::Declining
        } else {
            PopulationPhase::Stable
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, PopulationPhase::Extinct)
    }
}

/// A point on an exact (Gillespie) birth–death path
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrajectoryPoint {
    pub time: f64,
    pub population: u64,
}

/// A point on a predator–prey SDE path
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredatorPreyPoint {
    pub time: f64,
    pub prey: f64,
    pub predator: f64,
}
