//! Stochastic population dynamics
//!
//! Continuous models are integrated with Euler–Maruyama: each population
//! gets an environmental noise term σ_env·N·dW and a demographic term
//! σ_demo·√N·dW, with dW ~ N(0, dt). Small populations can instead be run
//! exactly with the Gillespie birth–death algorithm; the caller chooses.
//!
//! Populations are floored at zero after every update and zero is
//! absorbing: no step can bring an extinct population back.

use seeded_random::RandomStream;
use tracing::trace;

use crate::error::{require_non_negative, PopulationError, PopulationResult};
use crate::params::{CompetitionParams, PredatorPreyParams};
use crate::state::{PopulationPhase, PopulationState, PredatorPreyPoint, TrajectoryPoint};

/// Stream label for population dynamics under a run's seed
pub const POPULATION_SCOPE: &str = "population";

/// Horizon of each short Gillespie run in the quasi-stationary estimate
const QSD_RUN_YEARS: f64 = 10.0;

/// Largest carrying capacity accepted by the quasi-stationary estimate
pub const MAX_QSD_CAPACITY: u64 = 1_000_000;

/// Relative change below which a step counts as stable
pub const STABLE_TOLERANCE: f64 = 1.0e-3;

/// Drives stochastic population models from a single random stream
///
/// Calls consume the stream in sequence, so the same stream and the same
/// sequence of calls always reproduce the same trajectories.
#[derive(Debug, Clone)]
pub struct StochasticPopulationEngine {
    stream: RandomStream,
}

impl StochasticPopulationEngine {
    /// Engine on the `"population"` scope of `seed`
    pub fn new(seed: &str) -> Self {
        Self::from_stream(RandomStream::new(seed).scoped(POPULATION_SCOPE))
    }

    pub fn from_stream(stream: RandomStream) -> Self {
        Self { stream }
    }

    pub fn stream(&self) -> &RandomStream {
        &self.stream
    }

    /// One Euler–Maruyama update of a single population.
    ///
    /// Always draws two normals, environmental then demographic, so the
    /// stream advances identically whether or not the population is alive.
    fn noisy_update(&mut self, n: f64, drift: f64, sigma_env: f64, sigma_demog: f64, sqrt_dt: f64) -> f64 {
        let dw_env = self.stream.normal(0.0, sqrt_dt);
        let dw_demog = self.stream.normal(0.0, sqrt_dt);
        if !(n > 0.0) {
            return 0.0;
        }

        let next = n + drift + sigma_env * n * dw_env + sigma_demog * n.sqrt() * dw_demog;
        if next.is_finite() {
            next.max(0.0)
        } else {
            0.0
        }
    }

    // =========================================================================
    // Predator–prey
    // =========================================================================

    /// Advance a stochastic Lotka–Volterra pair by `dt`.
    ///
    /// dN = (αN − βNP)dt + σ_env·N·dW₁ + σ_demo·√N·dW₂
    /// dP = (δNP − γP)dt + σ_env·P·dW₃ + σ_demo·√P·dW₄
    ///
    /// Returns `(prey, predator)`, both ≥ 0.
    pub fn step_predator_prey(
        &mut self,
        prey: f64,
        predator: f64,
        params: &PredatorPreyParams,
        dt: f64,
    ) -> (f64, f64) {
        let dt = dt.max(0.0);
        let sqrt_dt = dt.sqrt();
        let prey_drift = (params.alpha * prey - params.beta * prey * predator) * dt;
        let predator_drift = (params.delta * prey * predator - params.gamma * predator) * dt;

        let next_prey =
            self.noisy_update(prey, prey_drift, params.sigma_env, params.sigma_demog, sqrt_dt);
        let next_predator = self.noisy_update(
            predator,
            predator_drift,
            params.sigma_env,
            params.sigma_demog,
            sqrt_dt,
        );
        (next_prey, next_predator)
    }

    /// Step two population records in place and report their phases.
    pub fn advance_predator_prey(
        &mut self,
        prey: &mut PopulationState,
        predator: &mut PopulationState,
        params: &PredatorPreyParams,
        dt: f64,
    ) -> (PopulationPhase, PopulationPhase) {
        let (before_prey, before_predator) = (prey.count, predator.count);
        let (next_prey, next_predator) = self.step_predator_prey(before_prey, before_predator, params, dt);
        prey.set_count(next_prey);
        predator.set_count(next_predator);
        (
            PopulationPhase::classify(before_prey, prey.count, STABLE_TOLERANCE),
            PopulationPhase::classify(before_predator, predator.count, STABLE_TOLERANCE),
        )
    }

    /// Run `steps` predator–prey updates, recording the start and every step.
    pub fn simulate_predator_prey(
        &mut self,
        prey: f64,
        predator: f64,
        params: &PredatorPreyParams,
        dt: f64,
        steps: usize,
    ) -> PopulationResult<Vec<PredatorPreyPoint>> {
        params.validate()?;
        crate::error::require_positive("dt", dt)?;

        let mut point = PredatorPreyPoint {
            time: 0.0,
            prey: prey.max(0.0),
            predator: predator.max(0.0),
        };
        let mut path = Vec::with_capacity(steps + 1);
        path.push(point);

        for step in 1..=steps {
            let (next_prey, next_predator) =
                self.step_predator_prey(point.prey, point.predator, params, dt);
            point = PredatorPreyPoint {
                time: step as f64 * dt,
                prey: next_prey,
                predator: next_predator,
            };
            path.push(point);
        }
        trace!(steps, prey = point.prey, predator = point.predator, "predator-prey run");
        Ok(path)
    }

    // =========================================================================
    // Competition
    // =========================================================================

    /// Advance N competing species by `dt`.
    ///
    /// Growth of species i is r_i·N_i·(K_i − Σ_j α_ij·N_j)/K_i, with the same
    /// noise structure as the predator–prey step.
    pub fn step_competition(
        &mut self,
        populations: &[f64],
        params: &CompetitionParams,
        dt: f64,
    ) -> PopulationResult<Vec<f64>> {
        params.validate(populations.len())?;
        let dt = dt.max(0.0);
        let sqrt_dt = dt.sqrt();

        let next = populations
            .iter()
            .enumerate()
            .map(|(i, &n)| {
                let pressure: f64 = params.competition[i]
                    .iter()
                    .zip(populations.iter())
                    .map(|(alpha, n_j)| alpha * n_j)
                    .sum();
                let k = params.carrying_capacities[i];
                let drift = params.growth_rates[i] * n * (k - pressure) / k * dt;
                self.noisy_update(n, drift, params.sigma_env, params.sigma_demog, sqrt_dt)
            })
            .collect();
        Ok(next)
    }

    /// Step competing population records in place and report their phases.
    pub fn advance_competition(
        &mut self,
        states: &mut [PopulationState],
        params: &CompetitionParams,
        dt: f64,
    ) -> PopulationResult<Vec<PopulationPhase>> {
        if states.is_empty() {
            return Err(PopulationError::EmptySpeciesList);
        }
        let before: Vec<f64> = states.iter().map(|s| s.count).collect();
        let next = self.step_competition(&before, params, dt)?;

        Ok(states
            .iter_mut()
            .zip(before.iter().zip(next))
            .map(|(state, (&previous, count))| {
                state.set_count(count);
                PopulationPhase::classify(previous, state.count, STABLE_TOLERANCE)
            })
            .collect())
    }

    // =========================================================================
    // Exact and discrete events
    // =========================================================================

    /// Exact birth–death sample path (Gillespie).
    ///
    /// Starts with `(0, initial)` and records every event up to `max_time`.
    /// Stops at extinction, when the next event would fall past `max_time`,
    /// or when the total rate is zero and no event can ever occur.
    ///
    /// # Examples
    /// ```
    /// use population::StochasticPopulationEngine;
    ///
    /// let mut engine = StochasticPopulationEngine::new("gillespie");
    /// let path = engine.gillespie(10, 0.5, 0.5, 10.0);
    /// assert_eq!(path[0].population, 10);
    /// assert!(path.iter().all(|p| p.time <= 10.0));
    /// ```
    pub fn gillespie(
        &mut self,
        initial: u64,
        birth_rate: f64,
        death_rate: f64,
        max_time: f64,
    ) -> Vec<TrajectoryPoint> {
        let birth_rate = birth_rate.max(0.0);
        let death_rate = death_rate.max(0.0);
        let mut population = initial;
        let mut time = 0.0;
        let mut path = vec![TrajectoryPoint { time, population }];

        while time < max_time && population > 0 {
            let births = birth_rate * population as f64;
            let deaths = death_rate * population as f64;
            let total = births + deaths;

            let Some(tau) = self.stream.gillespie_waiting_time(total) else {
                break;
            };
            time += tau;
            if time > max_time {
                break;
            }

            if self.stream.uniform() < births / total {
                population = population.saturating_add(1);
            } else {
                population -= 1;
            }
            path.push(TrajectoryPoint { time, population });
        }
        path
    }

    /// Survivors of a catastrophe that kills each individual independently
    /// with probability `severity`.
    pub fn catastrophe(&mut self, population: u64, severity: f64) -> u64 {
        let severity = if severity.is_finite() { severity.clamp(0.0, 1.0) } else { 1.0 };
        self.stream.binomial(population, 1.0 - severity)
    }

    /// Empirical quasi-stationary distribution of a birth–death process.
    ///
    /// Runs `samples` short Gillespie paths from uniform starting sizes in
    /// `[0, K)` and records one uniformly chosen point of each. Returns
    /// probabilities for sizes `0..=K`; all zeros if nothing was recorded.
    /// `K` above [`MAX_QSD_CAPACITY`] is rejected.
    pub fn quasi_stationary_distribution(
        &mut self,
        birth_rate: f64,
        death_rate: f64,
        carrying_capacity: u64,
        samples: usize,
    ) -> PopulationResult<Vec<f64>> {
        require_non_negative("birth_rate", birth_rate)?;
        require_non_negative("death_rate", death_rate)?;
        if carrying_capacity > MAX_QSD_CAPACITY {
            return Err(PopulationError::InvalidConfiguration(format!(
                "carrying_capacity must be at most {MAX_QSD_CAPACITY}, got {carrying_capacity}"
            )));
        }

        // At most MAX_QSD_CAPACITY + 1 slots, which fits any usize
        let size = carrying_capacity as usize + 1;
        let mut counts = vec![0u64; size];

        for _ in 0..samples {
            let start = (self.stream.uniform() * carrying_capacity as f64).floor() as u64;
            let path = self.gillespie(start, birth_rate, death_rate, QSD_RUN_YEARS);
            let pick = ((self.stream.uniform() * path.len() as f64) as usize).min(path.len() - 1);
            if let Some(slot) = usize::try_from(path[pick].population)
                .ok()
                .and_then(|p| counts.get_mut(p))
            {
                *slot += 1;
            }
        }

        let total: u64 = counts.iter().sum();
        if total == 0 {
            return Ok(vec![0.0; size]);
        }
        Ok(counts.iter().map(|&c| c as f64 / total as f64).collect())
    }
}

/// Per-capita growth rate with an Allee effect.
///
/// Below `threshold` the logistic rate is scaled by `population / threshold`;
/// at or above it the full logistic rate r·(1 − N/K) applies.
///
/// # Examples
/// ```
/// use population::allee_growth_rate;
///
/// let sparse = allee_growth_rate(5.0, 20.0, 0.5, 1000.0);
/// let dense = allee_growth_rate(50.0, 20.0, 0.5, 1000.0);
/// assert!(sparse < dense);
/// ```
pub fn allee_growth_rate(
    population: f64,
    threshold: f64,
    max_growth_rate: f64,
    carrying_capacity: f64,
) -> f64 {
    if !(carrying_capacity > 0.0) {
        return 0.0;
    }
    let population = population.max(0.0);
    let modifier = if threshold > 0.0 && population < threshold {
        population / threshold
    } else {
        1.0
    };
    max_growth_rate * modifier * (1.0 - population / carrying_capacity)
}

/// Ultimate extinction probability of a linear birth–death process.
///
/// (d/b)^N when births outpace deaths, otherwise certain. A population with
/// neither births nor deaths never goes extinct.
pub fn analytic_extinction_probability(population: u64, birth_rate: f64, death_rate: f64) -> f64 {
    if population == 0 {
        return 1.0;
    }
    if birth_rate == 0.0 && death_rate == 0.0 {
        return 0.0;
    }
    if birth_rate > death_rate {
        let exponent = i32::try_from(population).unwrap_or(i32::MAX);
        (death_rate.max(0.0) / birth_rate).powi(exponent)
    } else {
        1.0
    }
}
