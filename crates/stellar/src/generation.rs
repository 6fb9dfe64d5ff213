//! Star generation from a random stream.

use seeded_random::RandomStream;
use tracing::debug;

use crate::sampling::{sample_age_fraction, sample_mass_kroupa};
use crate::star::Star;

/// Generate a main-sequence star.
///
/// Draws the mass from the Kroupa IMF, then the age as a Beta(2, 5) fraction
/// of the resulting lifetime. Consumes the stream in a fixed order, so a
/// stream in a given state always yields the same star.
///
/// # Example
/// ```
/// use seeded_random::RandomStream;
/// use stellar::generate_star;
///
/// let mut stream = RandomStream::new("test-seed-1").scoped("stellar");
/// let star = generate_star(&mut stream);
/// assert!((0.08..=100.0).contains(&star.mass));
/// ```
pub fn generate_star(stream: &mut RandomStream) -> Star {
    let mass = sample_mass_kroupa(stream);
    let age_fraction = sample_age_fraction(stream);
    let star = Star::main_sequence(mass, age_fraction);

    debug!(
        mass = star.mass,
        luminosity = star.luminosity,
        spectral_type = %star.spectral_type,
        luminosity_class = %star.luminosity_class,
        "generated star"
    );
    star
}
