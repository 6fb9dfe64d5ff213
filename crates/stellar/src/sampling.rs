use seeded_random::RandomStream;

/// Lowest stellar mass (hydrogen-burning limit) in M☉
pub const MIN_STELLAR_MASS: f64 = 0.08;
/// Highest stellar mass produced by the IMF in M☉
pub const MAX_STELLAR_MASS: f64 = 100.0;

/// Kroupa (2001) IMF segments as `(lower, upper, exponent)` with
/// ξ(M) ∝ M^(-exponent)
pub const KROUPA_SEGMENTS: [(f64, f64, f64); 3] = [
    (MIN_STELLAR_MASS, 0.5, 1.3),
    (0.5, 1.0, 2.3),
    (1.0, MAX_STELLAR_MASS, 2.7),
];

/// Relative number of stars in each Kroupa segment.
///
/// Integrates the continuous IMF over each segment, with the normalization
/// constants chosen so ξ(M) is continuous at the 0.5 and 1.0 M☉ breaks.
/// For the default bounds this is roughly 78% / 15% / 8%.
pub fn kroupa_segment_weights() -> [f64; 3] {
    let mut weights = [0.0; 3];
    let mut k = 1.0;
    for (i, &(lo, hi, alpha)) in KROUPA_SEGMENTS.iter().enumerate() {
        if i > 0 {
            // continuity at the lower edge of this segment
            let (_, _, prev_alpha) = KROUPA_SEGMENTS[i - 1];
            k *= lo.powf(alpha - prev_alpha);
        }
        let p = 1.0 - alpha;
        weights[i] = k * (hi.powf(p) - lo.powf(p)) / p;
    }
    weights
}

/// Sample stellar mass from the Kroupa (2001) Initial Mass Function
///
/// The IMF is a broken power law:
/// - 0.08 ≤ M < 0.5 M☉: α = 1.3
/// - 0.5 ≤ M < 1.0 M☉: α = 2.3
/// - M ≥ 1.0 M☉: α = 2.7
///
/// A segment is chosen by its integrated weight, then a mass is drawn from
/// that segment's power law. The result always lies in `[0.08, 100]` M☉.
///
/// # Example
/// ```
/// use seeded_random::RandomStream;
/// use stellar::sampling::sample_mass_kroupa;
///
/// let mut stream = RandomStream::new("imf");
/// let mass = sample_mass_kroupa(&mut stream);
/// assert!((0.08..=100.0).contains(&mass));
/// ```
pub fn sample_mass_kroupa(stream: &mut RandomStream) -> f64 {
    let weights = kroupa_segment_weights();
    let segment = stream.choice(&weights).unwrap_or(0);
    let (lo, hi, alpha) = KROUPA_SEGMENTS[segment];
    stream
        .power_law(alpha, lo, hi)
        .clamp(MIN_STELLAR_MASS, MAX_STELLAR_MASS)
}

/// Fraction of the main-sequence lifetime already elapsed.
///
/// Drawn from Beta(2, 5), which favours young stars (mean ≈ 0.29).
pub fn sample_age_fraction(stream: &mut RandomStream) -> f64 {
    stream.beta(2.0, 5.0)
}
