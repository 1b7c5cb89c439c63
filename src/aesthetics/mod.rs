//! Aesthetics Module
//!
//! Route classification and the validated configuration of the decorative layer.

pub mod classifier;
pub mod config;
pub mod page_type;

pub use classifier::{should_apply_aesthetics, ENHANCED_SECTIONS};
pub use config::{
    get_intensity, get_safe_config, is_feature_enabled, merge_aesthetic_config,
    merge_aesthetic_config_value, try_validate_aesthetic_config, validate_aesthetic_config,
    AestheticConfig, ConfigError, FeatureKey, Features, Intensity, IntensityKey,
    PartialAestheticConfig, PartialFeatures, PartialIntensity, DEFAULT_AESTHETIC_CONFIG,
    SAFE_AESTHETIC_CONFIG,
};
pub use page_type::{effective_aesthetics, page_type, NavigationContext, PageType};
