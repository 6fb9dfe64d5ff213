//! Model parameters
//!
//! Every parameter set is immutable for the length of a run and validated
//! before the first draw.

use serde::{Deserialize, Serialize};

use crate::error::{require_non_negative, require_positive, PopulationError, PopulationResult};

/// Single-species birth–death parameters with noise strengths
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StochasticParams {
    /// Per-capita births per year
    pub birth_rate: f64,
    /// Per-capita deaths per year
    pub death_rate: f64,
    /// σ_env, scales with N
    pub environmental_noise: f64,
    /// σ_demo, scales with √N
    pub demographic_noise: f64,
}

impl StochasticParams {
    pub fn new(
        birth_rate: f64,
        death_rate: f64,
        environmental_noise: f64,
        demographic_noise: f64,
    ) -> PopulationResult<Self> {
        let params = Self {
            birth_rate,
            death_rate,
            environmental_noise,
            demographic_noise,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> PopulationResult<()> {
        require_non_negative("birthRate", self.birth_rate)?;
        require_non_negative("deathRate", self.death_rate)?;
        require_non_negative("environmentalNoise", self.environmental_noise)?;
        require_non_negative("demographicNoise", self.demographic_noise)
    }

    /// Net per-capita growth rate b − d
    pub fn net_growth_rate(&self) -> f64 {
        self.birth_rate - self.death_rate
    }
}

/// Stochastic Lotka–Volterra parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredatorPreyParams {
    /// Prey birth rate α
    pub alpha: f64,
    /// Predation rate β
    pub beta: f64,
    /// Predator conversion efficiency δ
    pub delta: f64,
    /// Predator death rate γ
    pub gamma: f64,
    pub sigma_env: f64,
    pub sigma_demog: f64,
}

impl PredatorPreyParams {
    pub fn validate(&self) -> PopulationResult<()> {
        require_non_negative("alpha", self.alpha)?;
        require_non_negative("beta", self.beta)?;
        require_non_negative("delta", self.delta)?;
        require_non_negative("gamma", self.gamma)?;
        require_non_negative("sigmaEnv", self.sigma_env)?;
        require_non_negative("sigmaDemog", self.sigma_demog)
    }
}

/// Multi-species Lotka–Volterra competition parameters
///
/// `competition[i][j]` is the effect of species `j` on species `i`; the
/// diagonal is normally 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionParams {
    pub growth_rates: Vec<f64>,
    pub carrying_capacities: Vec<f64>,
    pub competition: Vec<Vec<f64>>,
    pub sigma_env: f64,
    pub sigma_demog: f64,
}

impl CompetitionParams {
    pub fn species_count(&self) -> usize {
        self.growth_rates.len()
    }

    /// Check that every vector matches `species` and every capacity is positive.
    pub fn validate(&self, species: usize) -> PopulationResult<()> {
        if species == 0 {
            return Err(PopulationError::EmptySpeciesList);
        }
        check_len("growthRates", species, self.growth_rates.len())?;
        check_len("carryingCapacities", species, self.carrying_capacities.len())?;
        check_len("competition", species, self.competition.len())?;
        for row in &self.competition {
            check_len("competition row", species, row.len())?;
        }

        for &k in &self.carrying_capacities {
            require_positive("carryingCapacity", k)?;
        }
        if self.growth_rates.iter().any(|r| !r.is_finite())
            || self.competition.iter().flatten().any(|a| !a.is_finite())
        {
            return Err(PopulationError::InvalidConfiguration(
                "growth rates and competition coefficients must be finite".to_string(),
            ));
        }
        require_non_negative("sigmaEnv", self.sigma_env)?;
        require_non_negative("sigmaDemog", self.sigma_demog)
    }
}

fn check_len(field: &'static str, expected: usize, found: usize) -> PopulationResult<()> {
    if expected == found {
        Ok(())
    } else {
        Err(PopulationError::DimensionMismatch {
            field,
            expected,
            found,
        })
    }
}
