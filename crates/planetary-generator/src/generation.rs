//! Seed-to-universe generation
//!
//! The root stream is split by label into independent sub-streams, one per
//! stage, so a change in how many draws one stage makes never shifts the
//! values another stage sees.

use planetary::{planet_letter, Planet, PlanetSeed};
use seeded_random::RandomStream;
use star_system::{SystemMetadata, Universe};
use stellar::{generate_star, Star};
use tracing::info;

use crate::config::GenerationConfig;
use crate::error::GenerationResult;
use crate::strategy::FormationStrategy;

/// Sub-stream labels
pub const STELLAR_SCOPE: &str = "stellar";
pub const FORMATION_SCOPE: &str = "formation";
pub const PLANETS_SCOPE: &str = "planets";

/// Generate a complete universe from a seed string
///
/// The same seed and configuration always produce an identical
/// [`Universe`]; invalid configurations fail before any draw is made.
///
/// # Example
/// ```
/// use planetary_generator::{generate_universe, GenerationConfig};
///
/// let a = generate_universe("test-seed-1", &GenerationConfig::default()).unwrap();
/// let b = generate_universe("test-seed-1", &GenerationConfig::default()).unwrap();
/// assert_eq!(a, b);
/// assert!(a.planet_count() >= 1);
/// ```
pub fn generate_universe(seed: &str, config: &GenerationConfig) -> GenerationResult<Universe> {
    config.validate()?;

    let root = RandomStream::new(seed);
    let star = generate_star(&mut root.scoped(STELLAR_SCOPE));

    let metadata = SystemMetadata::from_seed(seed, config.strategy.method());
    let mut formation = root.scoped(FORMATION_SCOPE);
    let mut details = root.scoped(PLANETS_SCOPE);
    let planets = generate_planets(&metadata.catalog_name(), &star, config, &mut formation, &mut details)?;

    let universe = Universe::new(seed, config.strategy.method(), star, planets);
    info!(
        seed,
        method = ?universe.generation_method(),
        spectral_type = %universe.star.spectral_type,
        planets = universe.planet_count(),
        habitable = universe.habitable_planet.is_some(),
        "generated universe"
    );
    Ok(universe)
}

/// Form and characterize the planets of `star`
///
/// Seeds from the strategy are sorted outward before characterization, so
/// planet letters and per-planet draws follow orbital order. Planets are
/// named `"{system_name} {letter}"`.
pub fn generate_planets(
    system_name: &str,
    star: &Star,
    config: &GenerationConfig,
    formation: &mut RandomStream,
    details: &mut RandomStream,
) -> GenerationResult<Vec<Planet>> {
    let mut seeds: Vec<PlanetSeed> = config.strategy.form(star, formation)?;
    seeds.sort_by(|a, b| a.orbital_radius.total_cmp(&b.orbital_radius));

    Ok(seeds
        .iter()
        .enumerate()
        .map(|(i, seed)| {
            let name = format!("{} {}", system_name, planet_letter(i));
            Planet::characterize(name, seed, star, details)
        })
        .collect())
}
