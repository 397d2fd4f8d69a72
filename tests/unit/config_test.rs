//! Config file loading, saving and validation

use std::fs;
use tempfile::TempDir;

use wcgen::Config;

#[test]
fn missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.api.request_timeout_secs, 60);
    assert_eq!(config.export.file_name, "word-cloud.png");
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn partial_file_fills_in_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r##"
[api]
base_url = "https://clouds.example.com"

[generation.defaults]
color_scheme = "plasma"
customColors = "#fff,#000"
"##,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.api.base_url, "https://clouds.example.com");
    assert_eq!(config.api.upload_timeout_secs, 120);
    assert_eq!(config.generation.title, "Generated Word Cloud");
    assert_eq!(
        config.generation.defaults.color_scheme.as_deref(),
        Some("plasma")
    );
    assert_eq!(
        config.generation.defaults.custom_colors.as_deref(),
        Some("#fff,#000")
    );
}

#[test]
fn save_then_load_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = Config::default();
    config.api.base_url = "http://10.0.0.5:8000".into();
    config.generation.tags = vec!["essay".into(), "draft".into()];
    config.generation.defaults.width = Some("1200".into());
    config.export.directory = "/tmp/clouds".into();
    config.save_to(&path).unwrap();

    assert_eq!(Config::load_from(&path).unwrap(), config);
}

#[test]
fn unparseable_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[api\nbase_url = ").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn validate_rejects_bad_values() {
    let mut config = Config::default();
    assert!(config.validate().is_ok());

    config.api.base_url = "localhost:8000".into();
    assert!(config.validate().unwrap_err().contains("base_url"));

    config = Config::default();
    config.api.request_timeout_secs = 0;
    assert!(config.validate().unwrap_err().contains("request_timeout_secs"));

    config = Config::default();
    config.export.file_name = "  ".into();
    assert!(config.validate().unwrap_err().contains("file_name"));
}

#[test]
fn validate_rejects_unusable_generation_defaults() {
    let mut config = Config::default();
    config.generation.defaults.color_scheme = Some("sparkly".into());
    let err = config.validate().unwrap_err();
    assert!(err.starts_with("generation.defaults: "), "{err}");
    assert!(err.contains("sparkly"));

    config = Config::default();
    config.generation.defaults.min_font_size = Some("80".into());
    config.generation.defaults.max_font_size = Some("20".into());
    assert!(config.validate().is_err());
}

#[test]
fn export_directory_expands_home() {
    let mut config = Config::default();
    config.export.directory = "/var/tmp/clouds".into();
    assert_eq!(
        config.export_directory(),
        std::path::PathBuf::from("/var/tmp/clouds")
    );

    config.export.directory = "~/clouds".into();
    if let Some(home) = dirs::home_dir() {
        assert_eq!(config.export_directory(), home.join("clouds"));
    }
}
