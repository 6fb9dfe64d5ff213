use approx::assert_relative_eq;
use proptest::prelude::*;

use crate::stream::RandomStream;

fn mean(samples: &[f64]) -> f64 {
    samples.iter().sum::<f64>() / samples.len() as f64
}

#[test]
fn test_normal_moments() {
    let mut stream = RandomStream::new("normal");
    let samples: Vec<f64> = (0..20_000).map(|_| stream.normal(24.0, 12.0)).collect();
    let m = mean(&samples);
    let var = samples.iter().map(|x| (x - m).powi(2)).sum::<f64>() / samples.len() as f64;

    assert_relative_eq!(m, 24.0, epsilon = 0.5);
    assert_relative_eq!(var.sqrt(), 12.0, epsilon = 0.5);
}

#[test]
fn test_exponential_mean_and_zero_rate() {
    let mut stream = RandomStream::new("exponential");
    let samples: Vec<f64> = (0..20_000).map(|_| stream.exponential(2.0)).collect();
    assert_relative_eq!(mean(&samples), 0.5, epsilon = 0.03);

    let degenerate = stream.exponential(0.0);
    assert!(degenerate.is_finite() && degenerate >= 0.0);
}

#[test]
fn test_gillespie_waiting_time_requires_positive_rate() {
    let mut stream = RandomStream::new("waiting");
    assert_eq!(stream.gillespie_waiting_time(0.0), None);
    assert_eq!(stream.gillespie_waiting_time(f64::NAN), None);
    assert!(stream.gillespie_waiting_time(10.0).is_some_and(|t| t >= 0.0));
}

#[test]
fn test_power_law_favours_low_values() {
    let mut stream = RandomStream::new("power-law");
    let samples: Vec<f64> = (0..5_000).map(|_| stream.power_law(2.35, 0.08, 100.0)).collect();
    let below_one = samples.iter().filter(|&&m| m < 1.0).count();

    assert!(samples.iter().all(|m| (0.08..=100.0).contains(m)));
    assert!(below_one > 4_000, "only {} samples below 1", below_one);
}

#[test]
fn test_power_law_degenerate_ranges() {
    let mut stream = RandomStream::new("power-law");
    assert_eq!(stream.power_law(2.35, 1.0, 1.0), 1.0);
    assert_eq!(stream.power_law(2.35, 0.0, 1.0), 0.0);
    let flat = stream.power_law(1.0, 1.0, 10.0);
    assert!((1.0..=10.0).contains(&flat));
}

#[test]
fn test_poisson_mean() {
    let mut stream = RandomStream::new("poisson");
    let small: Vec<f64> = (0..20_000).map(|_| stream.poisson(2.5) as f64).collect();
    let large: Vec<f64> = (0..5_000).map(|_| stream.poisson(80.0) as f64).collect();

    assert_relative_eq!(mean(&small), 2.5, epsilon = 0.1);
    assert_relative_eq!(mean(&large), 80.0, epsilon = 1.0);
    assert_eq!(stream.poisson(0.0), 0);
    assert_eq!(stream.poisson(-3.0), 0);
}

#[test]
fn test_beta_mean() {
    let mut stream = RandomStream::new("beta");
    let samples: Vec<f64> = (0..20_000).map(|_| stream.beta(2.0, 5.0)).collect();
    assert_relative_eq!(mean(&samples), 2.0 / 7.0, epsilon = 0.01);
}

#[test]
fn test_gamma_small_shape_is_finite() {
    let mut stream = RandomStream::new("gamma");
    for _ in 0..1_000 {
        let x = stream.gamma(0.3, 1.0);
        assert!(x.is_finite() && x >= 0.0);
    }
}

#[test]
fn test_choice_respects_weights() {
    let mut stream = RandomStream::new("choice");
    let mut counts = [0usize; 3];
    for _ in 0..10_000 {
        let i = stream.choice(&[1.0, 0.0, 3.0]).expect("positive weights");
        counts[i] += 1;
    }

    assert_eq!(counts[1], 0);
    assert_relative_eq!(counts[2] as f64 / 10_000.0, 0.75, epsilon = 0.03);
}

#[test]
fn test_choice_without_usable_weights() {
    let mut stream = RandomStream::new("choice");
    assert_eq!(stream.choice(&[]), None);
    assert_eq!(stream.choice(&[0.0, -1.0, f64::NAN]), None);
}

#[test]
fn test_binomial_edges() {
    let mut stream = RandomStream::new("binomial");
    assert_eq!(stream.binomial(100, 0.0), 0);
    assert_eq!(stream.binomial(100, 1.0), 100);
    assert_eq!(stream.binomial(0, 0.5), 0);

    let samples: Vec<f64> = (0..2_000).map(|_| stream.binomial(50, 0.3) as f64).collect();
    assert_relative_eq!(mean(&samples), 15.0, epsilon = 0.5);
    assert!(stream.binomial(10_000, 0.5) <= 10_000);
}

#[test]
fn test_shuffle_is_a_permutation() {
    let mut stream = RandomStream::new("shuffle");
    let mut items: Vec<u32> = (0..50).collect();
    stream.shuffle(&mut items);
    let mut sorted = items.clone();
    sorted.sort_unstable();

    assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    assert_ne!(items, sorted);
}

proptest! {
    #[test]
    fn samplers_never_produce_non_finite_values(
        seed in "[a-z0-9-]{1,16}",
        rate in -10.0f64..10.0,
        shape in 0.0f64..10.0,
        lo in 0.0f64..5.0,
        span in 0.0f64..100.0,
    ) {
        let mut stream = RandomStream::new(seed);
        prop_assert!(stream.normal(0.0, 1.0).is_finite());
        prop_assert!(stream.exponential(rate).is_finite());
        prop_assert!(stream.power_law(2.35, lo, lo + span).is_finite());
        prop_assert!(stream.log_normal(0.0, 1.5).is_finite());
        let b = stream.beta(shape, shape + 0.5);
        prop_assert!((0.0..=1.0).contains(&b));
        prop_assert!(stream.gamma(shape, 1.0).is_finite());
    }
}
