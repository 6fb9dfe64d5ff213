//! Generate a universe and print it as JSON
//!
//! Usage: cargo run -p planetary-generator --example generate_universe -- <seed> [direct|accretion|nbody]
//!
//! Set `RUST_LOG=debug` to see per-stage logging.

use planetary_generator::{generate_universe, GenerationConfig};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let seed = args.next().unwrap_or_else(|| "test-seed-1".to_string());
    let config = match args.next().as_deref() {
        Some("accretion") => GenerationConfig::monte_carlo_accretion(),
        Some("nbody") => GenerationConfig::n_body(),
        _ => GenerationConfig::direct_sampling(),
    };

    let universe = match generate_universe(&seed, &config) {
        Ok(universe) => universe,
        Err(err) => {
            eprintln!("generation failed: {}", err);
            std::process::exit(1);
        }
    };

    eprintln!(
        "{}: {}{} star, {} planets, habitable: {}",
        universe.metadata.catalog_name(),
        universe.star.spectral_type,
        universe.star.luminosity_class,
        universe.planet_count(),
        universe
            .habitable_planet()
            .map(|p| p.name.as_str())
            .unwrap_or("none"),
    );

    match serde_json::to_string_pretty(&universe) {
        Ok(json) => println!("{}", json),
        Err(err) => {
            eprintln!("serialization failed: {}", err);
            std::process::exit(1);
        }
    }
}
