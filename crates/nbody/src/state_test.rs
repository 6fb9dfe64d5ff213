use nalgebra::{Point2, Vector2};

use crate::body::BodyId;
use crate::state::SystemState;

#[test]
fn test_add_body_assigns_sequential_ids() {
    let mut system = SystemState::new(1.0);
    let a = system.add_body(0.001, Point2::new(1.0, 0.0), Vector2::new(0.0, 6.28));
    let b = system.add_body(0.002, Point2::new(2.0, 0.0), Vector2::new(0.0, 4.44));

    assert_eq!(a, BodyId(0));
    assert_eq!(b, BodyId(1));
    assert_eq!(system.body_count(), 2);
    assert_eq!(system.get_body(b).map(|body| body.mass), Some(0.002));
    assert!(system.get_body(BodyId(7)).is_none());
}

#[test]
fn test_energy_and_angular_momentum_totals() {
    let mut system = SystemState::new(1.0);
    system.add_body(1.0, Point2::new(1.0, 0.0), Vector2::new(0.0, 2.0));
    system.add_body(2.0, Point2::new(0.0, 2.0), Vector2::new(-1.0, 0.0));

    // KE = 0.5·1·4 + 0.5·2·1
    assert_eq!(system.kinetic_energy(), 3.0);
    // L = 1·(1·2) + 2·(0·0 − 2·(−1))
    assert_eq!(system.total_angular_momentum(), 6.0);
}
