//! Aesthetic Configuration
//!
//! Validated settings for the decorative layer: one global gate, a closed set
//! of six feature toggles and four intensity scalars bounded to [0, 1].
//! Invalid input never reaches rendering; it is replaced by the default.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, warn};

/// Decorative capabilities that can be toggled individually
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FeatureKey {
    Starfield,
    CollageFragments,
    WaveDividers,
    TelemetryPanels,
    ScatterEntrance,
    TiltedGrid,
}

impl FeatureKey {
    pub const ALL: [FeatureKey; 6] = [
        FeatureKey::Starfield,
        FeatureKey::CollageFragments,
        FeatureKey::WaveDividers,
        FeatureKey::TelemetryPanels,
        FeatureKey::ScatterEntrance,
        FeatureKey::TiltedGrid,
    ];

    /// Key as it appears in serialized configuration
    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureKey::Starfield => "starfield",
            FeatureKey::CollageFragments => "collageFragments",
            FeatureKey::WaveDividers => "waveDividers",
            FeatureKey::TelemetryPanels => "telemetryPanels",
            FeatureKey::ScatterEntrance => "scatterEntrance",
            FeatureKey::TiltedGrid => "tiltedGrid",
        }
    }

    /// Body class emitted when the feature is live
    pub fn css_class(&self) -> &'static str {
        match self {
            FeatureKey::Starfield => "fx-starfield",
            FeatureKey::CollageFragments => "fx-collage-fragments",
            FeatureKey::WaveDividers => "fx-wave-dividers",
            FeatureKey::TelemetryPanels => "fx-telemetry-panels",
            FeatureKey::ScatterEntrance => "fx-scatter-entrance",
            FeatureKey::TiltedGrid => "fx-tilted-grid",
        }
    }
}

/// Named effect magnitudes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IntensityKey {
    Scatter,
    Tilt,
    Glow,
    MotifDensity,
}

impl IntensityKey {
    pub const ALL: [IntensityKey; 4] = [
        IntensityKey::Scatter,
        IntensityKey::Tilt,
        IntensityKey::Glow,
        IntensityKey::MotifDensity,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IntensityKey::Scatter => "scatter",
            IntensityKey::Tilt => "tilt",
            IntensityKey::Glow => "glow",
            IntensityKey::MotifDensity => "motifDensity",
        }
    }

    /// CSS custom property carrying the value into stylesheets
    pub fn css_var(&self) -> &'static str {
        match self {
            IntensityKey::Scatter => "--fx-scatter",
            IntensityKey::Tilt => "--fx-tilt",
            IntensityKey::Glow => "--fx-glow",
            IntensityKey::MotifDensity => "--fx-motif-density",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Features {
    pub starfield: bool,
    pub collage_fragments: bool,
    pub wave_dividers: bool,
    pub telemetry_panels: bool,
    pub scatter_entrance: bool,
    pub tilted_grid: bool,
}

impl Features {
    pub const ALL_ON: Features = Features::uniform(true);
    pub const ALL_OFF: Features = Features::uniform(false);

    pub const fn uniform(value: bool) -> Self {
        Self {
            starfield: value,
            collage_fragments: value,
            wave_dividers: value,
            telemetry_panels: value,
            scatter_entrance: value,
            tilted_grid: value,
        }
    }

    pub fn get(&self, key: FeatureKey) -> bool {
        match key {
            FeatureKey::Starfield => self.starfield,
            FeatureKey::CollageFragments => self.collage_fragments,
            FeatureKey::WaveDividers => self.wave_dividers,
            FeatureKey::TelemetryPanels => self.telemetry_panels,
            FeatureKey::ScatterEntrance => self.scatter_entrance,
            FeatureKey::TiltedGrid => self.tilted_grid,
        }
    }

    pub fn set(&mut self, key: FeatureKey, value: bool) {
        let slot = match key {
            FeatureKey::Starfield => &mut self.starfield,
            FeatureKey::CollageFragments => &mut self.collage_fragments,
            FeatureKey::WaveDividers => &mut self.wave_dividers,
            FeatureKey::TelemetryPanels => &mut self.telemetry_panels,
            FeatureKey::ScatterEntrance => &mut self.scatter_entrance,
            FeatureKey::TiltedGrid => &mut self.tilted_grid,
        };
        *slot = value;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Intensity {
    pub scatter: f64,
    pub tilt: f64,
    pub glow: f64,
    pub motif_density: f64,
}

impl Intensity {
    pub const ZERO: Intensity = Intensity {
        scatter: 0.0,
        tilt: 0.0,
        glow: 0.0,
        motif_density: 0.0,
    };

    pub fn get(&self, key: IntensityKey) -> f64 {
        match key {
            IntensityKey::Scatter => self.scatter,
            IntensityKey::Tilt => self.tilt,
            IntensityKey::Glow => self.glow,
            IntensityKey::MotifDensity => self.motif_density,
        }
    }

    pub fn set(&mut self, key: IntensityKey, value: f64) {
        let slot = match key {
            IntensityKey::Scatter => &mut self.scatter,
            IntensityKey::Tilt => &mut self.tilt,
            IntensityKey::Glow => &mut self.glow,
            IntensityKey::MotifDensity => &mut self.motif_density,
        };
        *slot = value;
    }
}

/// Complete configuration of the decorative layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AestheticConfig {
    pub enabled: bool,
    pub features: Features,
    pub intensity: Intensity,
}

/// Process-wide default. Used as the merge base and as the fallback for any
/// invalid candidate.
pub const DEFAULT_AESTHETIC_CONFIG: AestheticConfig = AestheticConfig {
    enabled: true,
    features: Features::ALL_ON,
    intensity: Intensity {
        scatter: 0.6,
        tilt: 0.35,
        glow: 0.5,
        motif_density: 0.4,
    },
};

/// Canonical all-off projection handed to rendering when the gate is closed.
pub const SAFE_AESTHETIC_CONFIG: AestheticConfig = AestheticConfig {
    enabled: false,
    features: Features::ALL_OFF,
    intensity: Intensity::ZERO,
};

impl Default for AestheticConfig {
    fn default() -> Self {
        DEFAULT_AESTHETIC_CONFIG
    }
}

impl AestheticConfig {
    /// Range check for an already well-typed configuration
    pub fn check(&self) -> Result<(), ConfigError> {
        for key in IntensityKey::ALL {
            let value = self.intensity.get(key);
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::OutOfRange { key: key.as_str(), value });
            }
        }
        Ok(())
    }

    /// Features that are live under the global gate
    pub fn live_features(&self) -> impl Iterator<Item = FeatureKey> + '_ {
        FeatureKey::ALL
            .into_iter()
            .filter(move |key| is_feature_enabled(self, *key))
    }
}

/// Why a candidate configuration was rejected
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("expected an object at `{0}`")]
    NotAnObject(String),
    #[error("missing key `{0}`")]
    MissingKey(String),
    #[error("unexpected key `{0}`")]
    UnexpectedKey(String),
    #[error("expected a boolean at `{0}`")]
    NotABool(String),
    #[error("expected a number at `{0}`")]
    NotANumber(String),
    #[error("intensity `{key}` = {value} is outside [0, 1]")]
    OutOfRange { key: &'static str, value: f64 },
    #[error("malformed partial config: {0}")]
    Malformed(String),
}

const ROOT_KEYS: [&str; 3] = ["enabled", "features", "intensity"];

fn expect_object<'a>(value: &'a Value, path: &str) -> Result<&'a Map<String, Value>, ConfigError> {
    value
        .as_object()
        .ok_or_else(|| ConfigError::NotAnObject(path.to_string()))
}

fn expect_exact_keys(map: &Map<String, Value>, expected: &[&str], path: &str) -> Result<(), ConfigError> {
    if let Some(extra) = map.keys().find(|key| !expected.contains(&key.as_str())) {
        return Err(ConfigError::UnexpectedKey(join_path(path, extra)));
    }
    if let Some(missing) = expected.iter().find(|key| !map.contains_key(**key)) {
        return Err(ConfigError::MissingKey(join_path(path, missing)));
    }
    Ok(())
}

fn join_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", parent, key)
    }
}

fn field<'a>(map: &'a Map<String, Value>, parent: &str, key: &str) -> Result<&'a Value, ConfigError> {
    map.get(key)
        .ok_or_else(|| ConfigError::MissingKey(join_path(parent, key)))
}

fn expect_bool(value: &Value, path: String) -> Result<bool, ConfigError> {
    value.as_bool().ok_or(ConfigError::NotABool(path))
}

fn expect_number(value: &Value, path: String) -> Result<f64, ConfigError> {
    value.as_f64().ok_or(ConfigError::NotANumber(path))
}

/// Strict structural and range validation.
///
/// The candidate must be an object with exactly `enabled`, `features` and
/// `intensity`; both maps must carry exactly their fixed key sets.
pub fn try_validate_aesthetic_config(candidate: &Value) -> Result<AestheticConfig, ConfigError> {
    let root = expect_object(candidate, "$")?;
    expect_exact_keys(root, &ROOT_KEYS, "")?;

    let enabled = expect_bool(field(root, "", "enabled")?, "enabled".to_string())?;

    let feature_names = FeatureKey::ALL.map(|key| key.as_str());
    let features_map = expect_object(field(root, "", "features")?, "features")?;
    expect_exact_keys(features_map, &feature_names, "features")?;
    let mut features = Features::ALL_OFF;
    for key in FeatureKey::ALL {
        let value = field(features_map, "features", key.as_str())?;
        features.set(key, expect_bool(value, join_path("features", key.as_str()))?);
    }

    let intensity_names = IntensityKey::ALL.map(|key| key.as_str());
    let intensity_map = expect_object(field(root, "", "intensity")?, "intensity")?;
    expect_exact_keys(intensity_map, &intensity_names, "intensity")?;
    let mut intensity = Intensity::ZERO;
    for key in IntensityKey::ALL {
        let value = field(intensity_map, "intensity", key.as_str())?;
        intensity.set(key, expect_number(value, join_path("intensity", key.as_str()))?);
    }

    let config = AestheticConfig { enabled, features, intensity };
    config.check()?;
    Ok(config)
}

/// Validate an untyped candidate, degrading to the default on any failure.
pub fn validate_aesthetic_config(candidate: &Value) -> AestheticConfig {
    match try_validate_aesthetic_config(candidate) {
        Ok(config) => config,
        Err(e) => {
            warn!("Rejected aesthetic config, falling back to defaults: {}", e);
            DEFAULT_AESTHETIC_CONFIG
        }
    }
}

/// Any subset of a configuration. Omitted fields take default values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartialAestheticConfig {
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default)]
    pub features: Option<PartialFeatures>,
    #[serde(default)]
    pub intensity: Option<PartialIntensity>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PartialFeatures {
    #[serde(default)]
    pub starfield: Option<bool>,
    #[serde(default)]
    pub collage_fragments: Option<bool>,
    #[serde(default)]
    pub wave_dividers: Option<bool>,
    #[serde(default)]
    pub telemetry_panels: Option<bool>,
    #[serde(default)]
    pub scatter_entrance: Option<bool>,
    #[serde(default)]
    pub tilted_grid: Option<bool>,
}

impl PartialFeatures {
    pub fn get(&self, key: FeatureKey) -> Option<bool> {
        match key {
            FeatureKey::Starfield => self.starfield,
            FeatureKey::CollageFragments => self.collage_fragments,
            FeatureKey::WaveDividers => self.wave_dividers,
            FeatureKey::TelemetryPanels => self.telemetry_panels,
            FeatureKey::ScatterEntrance => self.scatter_entrance,
            FeatureKey::TiltedGrid => self.tilted_grid,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PartialIntensity {
    #[serde(default)]
    pub scatter: Option<f64>,
    #[serde(default)]
    pub tilt: Option<f64>,
    #[serde(default)]
    pub glow: Option<f64>,
    #[serde(default)]
    pub motif_density: Option<f64>,
}

impl PartialIntensity {
    pub fn get(&self, key: IntensityKey) -> Option<f64> {
        match key {
            IntensityKey::Scatter => self.scatter,
            IntensityKey::Tilt => self.tilt,
            IntensityKey::Glow => self.glow,
            IntensityKey::MotifDensity => self.motif_density,
        }
    }
}

/// Overlay a partial configuration on the default, then re-validate.
pub fn merge_aesthetic_config(partial: &PartialAestheticConfig) -> AestheticConfig {
    let mut merged = DEFAULT_AESTHETIC_CONFIG;

    if let Some(enabled) = partial.enabled {
        merged.enabled = enabled;
    }
    if let Some(features) = &partial.features {
        for key in FeatureKey::ALL {
            if let Some(value) = features.get(key) {
                merged.features.set(key, value);
            }
        }
    }
    if let Some(intensity) = &partial.intensity {
        for key in IntensityKey::ALL {
            if let Some(value) = intensity.get(key) {
                merged.intensity.set(key, value);
            }
        }
    }

    match merged.check() {
        Ok(()) => merged,
        Err(e) => {
            warn!("Merged aesthetic config is invalid, falling back to defaults: {}", e);
            DEFAULT_AESTHETIC_CONFIG
        }
    }
}

/// Merge from untyped input. `null` counts as an empty partial; unknown keys
/// or wrongly typed values make the whole partial invalid.
pub fn merge_aesthetic_config_value(partial: &Value) -> AestheticConfig {
    if partial.is_null() {
        debug!("No aesthetic overrides supplied");
        return DEFAULT_AESTHETIC_CONFIG;
    }
    match PartialAestheticConfig::deserialize(partial) {
        Ok(parsed) => merge_aesthetic_config(&parsed),
        Err(e) => {
            let err = ConfigError::Malformed(e.to_string());
            warn!("Rejected aesthetic overrides, falling back to defaults: {}", err);
            DEFAULT_AESTHETIC_CONFIG
        }
    }
}

/// A feature is live only when both the global gate and its own flag are on.
pub fn is_feature_enabled(config: &AestheticConfig, key: FeatureKey) -> bool {
    config.enabled && config.features.get(key)
}

/// Stored intensity, or exactly `0.0` while the global gate is closed.
pub fn get_intensity(config: &AestheticConfig, key: IntensityKey) -> f64 {
    if config.enabled {
        config.intensity.get(key)
    } else {
        0.0
    }
}

pub fn get_safe_config(config: &AestheticConfig) -> AestheticConfig {
    if config.enabled {
        *config
    } else {
        SAFE_AESTHETIC_CONFIG
    }
}
