//! Aesthetic Configuration Properties
//!
//! Validation, merging and the gating accessors over a grid of generated
//! configurations.

#[cfg(test)]
mod config_property_tests {
    use cv_portfolio::aesthetics::{
        get_intensity, get_safe_config, is_feature_enabled, merge_aesthetic_config, merge_aesthetic_config_value,
        validate_aesthetic_config, AestheticConfig, FeatureKey, Features, Intensity, IntensityKey,
        PartialAestheticConfig, DEFAULT_AESTHETIC_CONFIG, SAFE_AESTHETIC_CONFIG,
    };
    use cv_portfolio::layout::seeded_random;
    use serde_json::{json, Value};

    /// Deterministic spread of valid configurations
    fn sample_configs() -> Vec<AestheticConfig> {
        (0..64)
            .map(|i| {
                let seed = i as f64;
                let mut features = Features::ALL_OFF;
                for (bit, key) in FeatureKey::ALL.iter().enumerate() {
                    features.set(*key, (i >> bit) & 1 == 1);
                }
                let mut intensity = Intensity::ZERO;
                for (n, key) in IntensityKey::ALL.iter().enumerate() {
                    let value = match i % 5 {
                        0 => 0.0,
                        1 => 1.0,
                        _ => seeded_random(seed * 11.0 + n as f64),
                    };
                    intensity.set(*key, value);
                }
                AestheticConfig {
                    enabled: i % 3 != 0,
                    features,
                    intensity,
                }
            })
            .collect()
    }

    fn as_value(config: &AestheticConfig) -> Value {
        serde_json::to_value(config).unwrap()
    }

    // 5. ROUND-TRIP: valid configurations pass through unchanged
    #[test]
    fn test_valid_configs_round_trip() {
        for config in sample_configs() {
            assert_eq!(validate_aesthetic_config(&as_value(&config)), config);
        }
    }

    // 6. DEGRADE: any structural or range fault yields the default
    #[test]
    fn test_invalid_configs_degrade_to_default() {
        let base = as_value(&SAFE_AESTHETIC_CONFIG);
        let mut candidates: Vec<Value> = vec![Value::Null, json!(true), json!([]), json!("enabled"), json!({})];

        for key in IntensityKey::ALL {
            for bad in [json!(-0.01), json!(1.01), json!(1e9), json!("0.5"), Value::Null] {
                let mut candidate = base.clone();
                candidate["intensity"][key.as_str()] = bad;
                candidates.push(candidate);
            }
            let mut missing = base.clone();
            missing["intensity"].as_object_mut().unwrap().remove(key.as_str());
            candidates.push(missing);
        }
        for key in FeatureKey::ALL {
            let mut not_bool = base.clone();
            not_bool["features"][key.as_str()] = json!(1);
            candidates.push(not_bool);
            let mut missing = base.clone();
            missing["features"].as_object_mut().unwrap().remove(key.as_str());
            candidates.push(missing);
        }
        for section in ["", "features", "intensity"] {
            let mut extra = base.clone();
            let target = if section.is_empty() { &mut extra } else { &mut extra[section] };
            target.as_object_mut().unwrap().insert("sparkles".into(), json!(true));
            candidates.push(extra);
        }
        let mut no_enabled = base.clone();
        no_enabled.as_object_mut().unwrap().remove("enabled");
        candidates.push(no_enabled);

        for candidate in candidates {
            assert_eq!(validate_aesthetic_config(&candidate), DEFAULT_AESTHETIC_CONFIG, "{}", candidate);
        }
    }

    // 7. MERGE DEFAULTS: the empty partial is the default
    #[test]
    fn test_empty_merge_is_default() {
        assert_eq!(merge_aesthetic_config(&PartialAestheticConfig::default()), DEFAULT_AESTHETIC_CONFIG);
        assert_eq!(merge_aesthetic_config_value(&json!({})), DEFAULT_AESTHETIC_CONFIG);
    }

    #[test]
    fn test_partial_merge_keeps_other_defaults() {
        let merged = merge_aesthetic_config_value(&json!({
            "features": { "starfield": false },
            "intensity": { "glow": 0.9 }
        }));
        assert!(merged.enabled);
        assert!(!merged.features.starfield);
        assert!(merged.features.tilted_grid);
        assert_eq!(merged.intensity.glow, 0.9);
        assert_eq!(merged.intensity.scatter, DEFAULT_AESTHETIC_CONFIG.intensity.scatter);

        assert_eq!(merge_aesthetic_config_value(&json!({ "intensity": { "tilt": 2.0 } })), DEFAULT_AESTHETIC_CONFIG);
        assert_eq!(merge_aesthetic_config_value(&json!({ "glitter": true })), DEFAULT_AESTHETIC_CONFIG);
    }

    // 8. FEATURE GATING
    #[test]
    fn test_feature_gating() {
        for config in sample_configs() {
            for key in FeatureKey::ALL {
                assert_eq!(is_feature_enabled(&config, key), config.enabled && config.features.get(key));
            }
        }
    }

    // 9. ZERO WHEN DISABLED
    #[test]
    fn test_disabled_intensities_are_zero() {
        for mut config in sample_configs() {
            config.enabled = false;
            for key in IntensityKey::ALL {
                assert_eq!(get_intensity(&config, key), 0.0);
            }
        }
    }

    // 10. SAFE CONFIG IDEMPOTENCE
    #[test]
    fn test_safe_config_is_idempotent() {
        for config in sample_configs() {
            let once = get_safe_config(&config);
            assert_eq!(get_safe_config(&once), once);
            if !config.enabled {
                assert_eq!(once, SAFE_AESTHETIC_CONFIG);
            }
        }
    }
}
