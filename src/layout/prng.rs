//! Seeded noise
//!
//! A cheap deterministic hash from a numeric seed into [0, 1). Good enough for
//! visually plausible scatter; not suitable for anything statistical.

const SEED_SCALE: f64 = 12.9898;
const SEED_OFFSET: f64 = 78.233;
const AMPLITUDE: f64 = 43758.5453;

/// `fract(sin(seed * k1 + k2) * k3)`. Identical seeds give identical output.
#[inline]
pub fn seeded_random(seed: f64) -> f64 {
    let x = (seed * SEED_SCALE + SEED_OFFSET).sin() * AMPLITUDE;
    if !x.is_finite() {
        return 0.0;
    }
    let fraction = x - x.floor();
    // tiny negative x rounds up to exactly 1.0
    if fraction >= 1.0 {
        0.0
    } else {
        fraction
    }
}
