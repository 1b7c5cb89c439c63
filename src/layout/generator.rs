//! Deterministic Layout Generator
//!
//! Assigns each item of an ordered collection a displacement (offset, rotation,
//! scale, skew) derived only from its index, so re-renders never reshuffle.

use serde::{Deserialize, Serialize};

use super::prng::seeded_random;
use crate::aesthetics::{get_intensity, is_feature_enabled, AestheticConfig, FeatureKey, IntensityKey};

pub const MAX_TRANSLATE_PX: f64 = 120.0;
pub const MAX_ROTATION_DEG: f64 = 24.0;
pub const MAX_SCALE_DELTA: f64 = 0.3;
pub const MAX_SKEW_DEG: f64 = 8.0;

/// Per-axis seed derivation: `index * mul + offset`
#[derive(Clone, Copy)]
struct Salt {
    mul: f64,
    offset: f64,
}

const SALT_X: Salt = Salt { mul: 3.0, offset: 1.0 };
const SALT_Y: Salt = Salt { mul: 3.0, offset: 2.0 };
const SALT_ROTATION: Salt = Salt { mul: 3.0, offset: 3.0 };
const SALT_SCALE: Salt = Salt { mul: 5.0, offset: 0.5 };
const SALT_SKEW: Salt = Salt { mul: 7.0, offset: 0.25 };

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Displacement {
    /// Horizontal offset in px
    pub x: f64,
    /// Vertical offset in px
    pub y: f64,
    /// Degrees
    pub rotation: f64,
    pub scale: f64,
    /// Degrees
    pub skew: f64,
}

impl Displacement {
    pub const IDENTITY: Displacement = Displacement {
        x: 0.0,
        y: 0.0,
        rotation: 0.0,
        scale: 1.0,
        skew: 0.0,
    };

    /// Two decimal places, for emitting into markup
    pub fn rounded(&self) -> Self {
        // adding 0.0 turns -0.0 into 0.0
        let round = |v: f64| (v * 100.0).round() / 100.0 + 0.0;
        Self {
            x: round(self.x),
            y: round(self.y),
            rotation: round(self.rotation),
            scale: round(self.scale),
            skew: round(self.skew),
        }
    }
}

/// Multipliers in [0, 1] scaling each axis' maximum range
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutIntensity {
    pub translate: f64,
    pub rotate: f64,
    pub scale: f64,
    pub skew: f64,
}

impl LayoutIntensity {
    pub const NONE: LayoutIntensity = LayoutIntensity::uniform(0.0);

    pub const fn uniform(value: f64) -> Self {
        Self {
            translate: value,
            rotate: value,
            scale: value,
            skew: value,
        }
    }

    /// Offsets and scale follow `scatter` while `scatterEntrance` is live;
    /// rotation and skew follow `tilt` while `tiltedGrid` is live.
    pub fn from_config(config: &AestheticConfig) -> Self {
        let scatter = if is_feature_enabled(config, FeatureKey::ScatterEntrance) {
            get_intensity(config, IntensityKey::Scatter)
        } else {
            0.0
        };
        let tilt = if is_feature_enabled(config, FeatureKey::TiltedGrid) {
            get_intensity(config, IntensityKey::Tilt)
        } else {
            0.0
        };
        Self {
            translate: scatter,
            rotate: tilt,
            scale: scatter,
            skew: tilt,
        }
    }

    fn clamped(&self) -> Self {
        Self {
            translate: clamp_unit(self.translate),
            rotate: clamp_unit(self.rotate),
            scale: clamp_unit(self.scale),
            skew: clamp_unit(self.skew),
        }
    }

    pub(crate) fn to_bits(self) -> [u64; 4] {
        [
            self.translate.to_bits(),
            self.rotate.to_bits(),
            self.scale.to_bits(),
            self.skew.to_bits(),
        ]
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

#[inline]
fn sample(index: usize, salt: Salt) -> f64 {
    seeded_random(index as f64 * salt.mul + salt.offset)
}

/// Map a unit sample to [-half_range, half_range]
#[inline]
fn symmetric(unit: f64, half_range: f64) -> f64 {
    (unit * 2.0 - 1.0) * half_range
}

pub fn displacement_at(index: usize, intensity: &LayoutIntensity) -> Displacement {
    let k = intensity.clamped();
    let translate = MAX_TRANSLATE_PX * k.translate;

    Displacement {
        x: symmetric(sample(index, SALT_X), translate),
        y: symmetric(sample(index, SALT_Y), translate),
        rotation: symmetric(sample(index, SALT_ROTATION), MAX_ROTATION_DEG * k.rotate / 2.0),
        scale: 1.0 + symmetric(sample(index, SALT_SCALE), MAX_SCALE_DELTA * k.scale),
        skew: symmetric(sample(index, SALT_SKEW), MAX_SKEW_DEG * k.skew / 2.0),
    }
}

/// One displacement per index in `0..count`
pub fn generate_layout(count: usize, intensity: &LayoutIntensity) -> Vec<Displacement> {
    (0..count).map(|index| displacement_at(index, intensity)).collect()
}
