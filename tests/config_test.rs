//! Config loading and init against the filesystem.

use huecount::assets::AssetLoader;
use huecount::export::CopyFormat;
use huecount::models::AppConfig;
use pretty_assertions::assert_eq;

#[test]
fn test_embedded_config_is_default() {
    let config = AppConfig::load_from_assets(&AssetLoader::new(None));
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_external_config_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(
        &path,
        "analysis:\n  percentage_threshold: 5.5\nexport:\n  format: r\n",
    )
    .unwrap();

    let config = AppConfig::load_from_assets(&AssetLoader::new(Some(path)));
    assert_eq!(config.analysis.percentage_threshold, 5.5);
    assert_eq!(config.analysis.white_threshold, 252);
    assert_eq!(config.export.format, CopyFormat::R);

    let engine = config.analysis_config(None, Some(200));
    assert_eq!(engine.percentage_threshold, 5.5);
    assert_eq!(engine.white_threshold, 200);
}

#[test]
fn test_invalid_config_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "analysis:\n  white_threshold: 999\n").unwrap();

    let config = AppConfig::load_from_assets(&AssetLoader::new(Some(path)));
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_init_writes_then_skips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    let loader = AssetLoader::new(Some(path.clone()));

    let first = loader.init(false).unwrap();
    assert_eq!(first.written.len(), 1);
    assert!(first.skipped.is_empty());
    assert!(path.exists());

    let second = loader.init(false).unwrap();
    assert!(second.written.is_empty());
    assert_eq!(second.skipped.len(), 1);

    let forced = loader.init(true).unwrap();
    assert_eq!(forced.written.len(), 1);

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(AppConfig::from_yaml(&written).unwrap(), AppConfig::default());
}
