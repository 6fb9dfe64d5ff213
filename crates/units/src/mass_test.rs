use approx::assert_relative_eq;

use crate::constants::{EARTH_MASS_KG, SOLAR_MASS_KG};
use crate::mass::Mass;

#[test]
fn test_mass_conversions() {
    let sun = Mass::from_solar_masses(1.0);
    assert_relative_eq!(sun.to_kg(), SOLAR_MASS_KG);

    let earth = Mass::from_kg(EARTH_MASS_KG);
    assert_relative_eq!(earth.to_earth_masses(), 1.0);

    let jupiter = Mass::from_jupiter_masses(1.0);
    assert_relative_eq!(jupiter.to_earth_masses(), 317.8, epsilon = 0.5);
    assert_relative_eq!(jupiter.to_jupiter_masses(), 1.0);
}

#[test]
fn test_mass_arithmetic_operations() {
    let a = Mass::from_earth_masses(2.0);
    let b = Mass::from_earth_masses(1.5);

    assert_relative_eq!((a + b).to_earth_masses(), 3.5);
    assert_relative_eq!((a - b).to_earth_masses(), 0.5);
    assert_relative_eq!((a * 3.0).to_earth_masses(), 6.0);
    assert_relative_eq!((2.5 * a).to_earth_masses(), 5.0);
    assert_relative_eq!((a / 4.0).to_earth_masses(), 0.5);
    assert_relative_eq!(a / b, 2.0 / 1.5);
    assert_eq!(a.max(b), a);
}
