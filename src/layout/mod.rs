//! Layout Module
//!
//! Seeded noise and the deterministic scatter/tilt layouts built on it.

pub mod generator;
pub mod memo;
pub mod prng;

pub use generator::{
    displacement_at, generate_layout, Displacement, LayoutIntensity, MAX_ROTATION_DEG, MAX_SCALE_DELTA,
    MAX_SKEW_DEG, MAX_TRANSLATE_PX,
};
pub use memo::LayoutMemo;
pub use prng::seeded_random;
