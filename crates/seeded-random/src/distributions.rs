//! Distribution samplers on [`RandomStream`].
//!
//! Each sampler accepts degenerate parameters (zero rates, inverted bounds)
//! and still returns a finite value, so callers never see `NaN`.

use std::f64::consts::PI;

use units::{checked_divide, finite_or};

use crate::stream::RandomStream;

/// Floor applied to rates and shape parameters before they are used.
pub const MIN_PARAMETER: f64 = 1e-12;

/// Above this mean, Poisson draws use a rounded normal approximation.
const POISSON_NORMAL_THRESHOLD: f64 = 30.0;

/// Above this trial count, binomial draws use a normal approximation.
const BINOMIAL_EXACT_LIMIT: u64 = 1_000;

/// Tolerance for treating a power-law exponent as exactly 1.
const POWER_LAW_LOG_TOLERANCE: f64 = 1e-9;

impl RandomStream {
    /// Sample from N(mean, std_dev²) using the Box–Muller transform.
    ///
    /// One uniform pair is consumed per call.
    pub fn normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.uniform_open_zero();
        let u2 = self.uniform();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
        mean + std_dev * z
    }

    /// Sample from an exponential distribution with the given rate.
    ///
    /// `-ln(u) / rate` with `u ∈ (0, 1]`; the rate is floored at
    /// [`MIN_PARAMETER`].
    pub fn exponential(&mut self, rate: f64) -> f64 {
        let rate = if rate.is_finite() { rate.max(MIN_PARAMETER) } else { MIN_PARAMETER };
        -self.uniform_open_zero().ln() / rate
    }

    /// Time until the next event of a process with `total_rate` events per
    /// unit time, or `None` when no event can ever occur.
    pub fn gillespie_waiting_time(&mut self, total_rate: f64) -> Option<f64> {
        if total_rate.is_finite() && total_rate > 0.0 {
            Some(-self.uniform_open_zero().ln() / total_rate)
        } else {
            None
        }
    }

    /// Sample from a truncated power law `p(x) ∝ x^(-exponent)` on `[min, max]`.
    ///
    /// Uses inverse-transform sampling; an exponent of 1 falls back to the
    /// log-uniform form. Returns `min` for an empty or non-positive range.
    ///
    /// # Examples
    /// ```
    /// use seeded_random::RandomStream;
    ///
    /// let mut stream = RandomStream::new("imf");
    /// let mass = stream.power_law(2.35, 0.08, 100.0);
    /// assert!((0.08..=100.0).contains(&mass));
    /// ```
    pub fn power_law(&mut self, exponent: f64, min: f64, max: f64) -> f64 {
        if !(min > 0.0) || !(max > min) {
            return min;
        }
        let u = self.uniform();
        let k = 1.0 - exponent;
        let x = if k.abs() < POWER_LAW_LOG_TOLERANCE {
            min * (max / min).powf(u)
        } else {
            let lo = min.powf(k);
            let hi = max.powf(k);
            (lo + u * (hi - lo)).powf(1.0 / k)
        };
        finite_or(x, min).clamp(min, max)
    }

    /// Sample `exp(N(mu_log, sigma_log²))`.
    pub fn log_normal(&mut self, mu_log: f64, sigma_log: f64) -> f64 {
        finite_or(self.normal(mu_log, sigma_log).exp(), f64::MAX)
    }

    /// Sample a Poisson-distributed count.
    ///
    /// Knuth's multiplication method for small means, a rounded normal
    /// approximation above 30. Non-positive means return 0.
    pub fn poisson(&mut self, lambda: f64) -> u64 {
        if !(lambda > 0.0) || !lambda.is_finite() {
            return 0;
        }
        if lambda > POISSON_NORMAL_THRESHOLD {
            return self.normal(lambda, lambda.sqrt()).round().max(0.0) as u64;
        }
        let limit = (-lambda).exp();
        let mut k = 0u64;
        let mut p = 1.0;
        loop {
            p *= self.uniform();
            if p <= limit {
                return k;
            }
            k += 1;
        }
    }

    /// Sample from Gamma(shape, scale) with the Marsaglia–Tsang method.
    ///
    /// Shapes below 1 are boosted by one and corrected with `u^(1/shape)`.
    pub fn gamma(&mut self, shape: f64, scale: f64) -> f64 {
        let shape = if shape.is_finite() { shape.max(MIN_PARAMETER) } else { 1.0 };
        if shape < 1.0 {
            let boost = self.uniform_open_zero().powf(1.0 / shape);
            return finite_or(self.gamma(shape + 1.0, scale) * boost, 0.0);
        }

        let d = shape - 1.0 / 3.0;
        let c = 1.0 / (9.0 * d).sqrt();
        loop {
            let x = self.normal(0.0, 1.0);
            let v = 1.0 + c * x;
            if v <= 0.0 {
                continue;
            }
            let v = v * v * v;
            let u = self.uniform_open_zero();
            if u.ln() < 0.5 * x * x + d - d * v + d * v.ln() {
                return finite_or(d * v * scale, 0.0);
            }
        }
    }

    /// Sample from Beta(alpha, beta) in `[0, 1]` as a ratio of gammas.
    ///
    /// # Examples
    /// ```
    /// use seeded_random::RandomStream;
    ///
    /// let mut stream = RandomStream::new("age");
    /// let fraction = stream.beta(2.0, 5.0);
    /// assert!((0.0..=1.0).contains(&fraction));
    /// ```
    pub fn beta(&mut self, alpha: f64, beta: f64) -> f64 {
        let x = self.gamma(alpha, 1.0);
        let y = self.gamma(beta, 1.0);
        checked_divide(x, x + y).unwrap_or(0.5).clamp(0.0, 1.0)
    }

    /// Pick an index with probability proportional to its weight.
    ///
    /// Negative and non-finite weights count as zero. Returns `None` for an
    /// empty slice or when no weight is positive.
    pub fn choice(&mut self, weights: &[f64]) -> Option<usize> {
        let usable = |w: f64| if w.is_finite() && w > 0.0 { w } else { 0.0 };
        let total: f64 = weights.iter().copied().map(usable).sum();
        if !(total > 0.0) || !total.is_finite() {
            return None;
        }

        let target = self.uniform() * total;
        let mut cumulative = 0.0;
        let mut last_positive = None;
        for (i, w) in weights.iter().copied().map(usable).enumerate() {
            if w == 0.0 {
                continue;
            }
            cumulative += w;
            last_positive = Some(i);
            if target < cumulative {
                return Some(i);
            }
        }
        last_positive
    }

    /// Bernoulli trial with success probability `p`.
    pub fn chance(&mut self, p: f64) -> bool {
        self.uniform() < p
    }

    /// Number of successes in `trials` Bernoulli trials with probability `p`.
    pub fn binomial(&mut self, trials: u64, p: f64) -> u64 {
        if trials == 0 || !(p > 0.0) {
            return 0;
        }
        if p >= 1.0 {
            return trials;
        }
        if trials > BINOMIAL_EXACT_LIMIT {
            let n = trials as f64;
            let draw = self.normal(n * p, (n * p * (1.0 - p)).sqrt()).round();
            return draw.clamp(0.0, n) as u64;
        }
        (0..trials).filter(|_| self.chance(p)).count() as u64
    }

    /// Fisher–Yates shuffle driven by the stream.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.index(i + 1);
            items.swap(i, j);
        }
    }
}
