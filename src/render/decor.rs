//! Decorations
//!
//! Purely visual elements driven by the effective aesthetic configuration.
//! Nothing here decides *whether* to decorate; a closed gate already arrives
//! as all-off features and zero intensities.

use serde::Serialize;

use crate::aesthetics::{get_intensity, is_feature_enabled, AestheticConfig, FeatureKey, IntensityKey};
use crate::layout::seeded_random;

pub const MAX_STARS: usize = 48;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Star {
    /// Percent of viewport width
    pub left: f64,
    /// Percent of viewport height
    pub top: f64,
    /// px
    pub size: f64,
    pub opacity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TelemetryReading {
    pub label: &'static str,
    pub value: String,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Star count scales with motif density; positions depend only on index.
pub fn starfield(config: &AestheticConfig) -> Vec<Star> {
    if !is_feature_enabled(config, FeatureKey::Starfield) {
        return Vec::new();
    }
    let density = get_intensity(config, IntensityKey::MotifDensity);
    let glow = get_intensity(config, IntensityKey::Glow);
    let count = (density * MAX_STARS as f64).round() as usize;

    (0..count)
        .map(|i| {
            let seed = i as f64;
            Star {
                left: round2(seeded_random(seed * 1.7 + 0.3) * 100.0),
                top: round2(seeded_random(seed * 2.3 + 0.6) * 100.0),
                size: round2(1.0 + seeded_random(seed * 3.1 + 0.9) * 2.0),
                opacity: round2(0.3 + 0.7 * glow * seeded_random(seed * 4.7 + 0.1)),
            }
        })
        .collect()
}

/// Readout for the telemetry side panel
pub fn telemetry_readings(config: &AestheticConfig) -> Vec<TelemetryReading> {
    if !is_feature_enabled(config, FeatureKey::TelemetryPanels) {
        return Vec::new();
    }
    IntensityKey::ALL
        .iter()
        .map(|key| TelemetryReading {
            label: key.as_str(),
            value: format!("{:.2}", get_intensity(config, *key)),
        })
        .collect()
}

/// Space-separated body classes: page type marker plus live features
pub fn body_class(page_type: &str, config: &AestheticConfig) -> String {
    let mut classes = vec![format!("page-{}", page_type)];
    classes.extend(config.live_features().map(|key| key.css_class().to_string()));
    classes.join(" ")
}

/// Intensities as CSS custom properties
pub fn fx_style(config: &AestheticConfig) -> String {
    IntensityKey::ALL
        .iter()
        .map(|key| format!("{}:{:.2}", key.css_var(), get_intensity(config, *key)))
        .collect::<Vec<_>>()
        .join(";")
}
