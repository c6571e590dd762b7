use tempfile::tempdir;

use super::{ConfigError, StackConfig, load_config};
use crate::layer::CompositionMode;
use crate::model::SkyCs;
use crate::render::AspectRatio;

#[test]
fn partial_yaml_fills_defaults() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("stack.yaml");
    std::fs::write(
        &path,
        "skyCs: galactic\ncompositionMode: Plus\nsave:\n  width: 320\n  aspectRatio: expand\n",
    )
    .expect("write");

    let config = load_config(&path).expect("config");
    assert_eq!(config.sky_cs, SkyCs::Galactic);
    assert_eq!(config.composition_mode, CompositionMode::Plus);
    assert_eq!(config.save.width, 320);
    assert_eq!(config.save.height, 800);
    assert_eq!(config.save.aspect_ratio, AspectRatio::Expand);
    assert!(config.clip.recompute_on_new_frame);
}

#[test]
fn json_config_is_validated() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("stack.json");
    std::fs::write(&path, r#"{"clip":{"minPercentile":0.9,"maxPercentile":0.1}}"#)
        .expect("write");
    assert!(matches!(load_config(&path), Err(ConfigError::Invalid(_))));

    std::fs::write(&path, r#"{"save":{"width":0}}"#).expect("write");
    assert!(matches!(load_config(&path), Err(ConfigError::Invalid(_))));

    std::fs::write(&path, "{not json").expect("write");
    assert!(matches!(load_config(&path), Err(ConfigError::SerdeJson(_))));
}

#[test]
fn partial_clip_keeps_remaining_defaults() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("stack.json");
    std::fs::write(&path, r#"{"clip":{"maxPercentile":0.9}}"#).expect("write");

    let config = load_config(&path).expect("config");
    assert!(config.clip.recompute_on_new_frame);
    assert_eq!(config.clip.min_percentile, 0.025);
    assert_eq!(config.clip.max_percentile, 0.9);
}

#[test]
fn default_config_is_valid() {
    StackConfig::default().validate().expect("valid defaults");
}
