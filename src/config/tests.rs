use std::io::Write;

use clap::Parser;

use super::*;

fn raw_with_url() -> RawSettings {
    let mut raw = RawSettings::default();
    raw.backend.url = Some("http://localhost:8080".to_string());
    raw
}

#[test]
fn defaults_apply_when_only_url_is_set() {
    let settings = Settings::from_raw(raw_with_url()).expect("valid settings");
    assert_eq!(settings.backend.url.as_str(), "http://localhost:8080/");
    assert_eq!(
        settings.backend.request_timeout,
        Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)
    );
    assert_eq!(settings.cache.capacity.get(), DEFAULT_CACHE_CAPACITY);
    assert_eq!(settings.logging.level, LevelFilter::WARN);
    assert!(matches!(settings.logging.format, LogFormat::Compact));
}

#[test]
fn missing_backend_url_is_invalid() {
    let err = Settings::from_raw(RawSettings::default()).expect_err("url required");
    assert!(matches!(err, LoadError::Invalid { key: "backend.url", .. }));
}

#[test]
fn unsupported_scheme_is_invalid() {
    let mut raw = RawSettings::default();
    raw.backend.url = Some("ftp://example.com".to_string());
    let err = Settings::from_raw(raw).expect_err("scheme");
    assert!(err.to_string().contains("unsupported scheme"));
}

#[test]
fn zero_capacity_is_invalid() {
    let mut raw = raw_with_url();
    raw.cache.capacity = Some(0);
    let err = Settings::from_raw(raw).expect_err("capacity");
    assert!(matches!(err, LoadError::Invalid { key: "cache.capacity", .. }));
}

#[test]
fn zero_timeout_is_invalid() {
    let mut raw = raw_with_url();
    raw.backend.request_timeout_seconds = Some(0);
    assert!(Settings::from_raw(raw).is_err());
}

#[test]
fn bad_log_level_is_invalid() {
    let mut raw = raw_with_url();
    raw.logging.level = Some("chatty".to_string());
    let err = Settings::from_raw(raw).expect_err("level");
    assert!(matches!(err, LoadError::Invalid { key: "logging.level", .. }));
}

#[test]
fn cli_overrides_take_highest_precedence() {
    let mut raw = raw_with_url();
    raw.logging.level = Some("info".to_string());
    raw.cache.capacity = Some(8);

    let overrides = SettingsOverrides {
        backend_url: Some("https://team02.example.edu".to_string()),
        log_level: Some("debug".to_string()),
        log_json: Some(true),
        cache_capacity: Some(32),
        ..Default::default()
    };

    raw.apply_overrides(&overrides);
    let settings = Settings::from_raw(raw).expect("valid settings");

    assert_eq!(settings.backend.url.host_str(), Some("team02.example.edu"));
    assert_eq!(settings.logging.level, LevelFilter::DEBUG);
    assert!(matches!(settings.logging.format, LogFormat::Json));
    assert_eq!(settings.cache.capacity.get(), 32);
}

#[test]
fn file_then_env_then_cli() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp config");
    writeln!(
        file,
        "[backend]\nurl = \"http://file.example\"\nrequest_timeout_seconds = 5\n\n[cache]\ncapacity = 4"
    )
    .expect("write config");

    let env = Map::from([
        (
            "UCSB_ADMIN__BACKEND__URL".to_string(),
            "http://env.example".to_string(),
        ),
        ("UCSB_ADMIN__CACHE__CAPACITY".to_string(), "16".to_string()),
    ]);
    let overrides = SettingsOverrides {
        config_file: Some(file.path().to_path_buf()),
        cache_capacity: Some(64),
        ..Default::default()
    };

    let settings = load_with_env(&overrides, Some(env)).expect("settings");
    assert_eq!(settings.backend.url.host_str(), Some("env.example"));
    assert_eq!(settings.backend.request_timeout, Duration::from_secs(5));
    assert_eq!(settings.cache.capacity.get(), 64);
}

#[test]
fn missing_explicit_config_file_fails() {
    let overrides = SettingsOverrides {
        config_file: Some(PathBuf::from("/nonexistent/ucsb-admin.toml")),
        ..Default::default()
    };
    let err = load_with_env(&overrides, Some(Map::new())).expect_err("missing file");
    assert!(matches!(err, LoadError::Build(_)));
}

#[derive(Debug, Parser)]
struct Harness {
    #[command(flatten)]
    overrides: SettingsOverrides,
}

#[test]
fn parse_override_flags() {
    let args = Harness::parse_from([
        "ucsb-admin",
        "--backend-url",
        "http://localhost:8080",
        "--session-file",
        "/tmp/session",
        "--log-json",
        "true",
        "--request-timeout-seconds",
        "9",
    ]);
    assert_eq!(
        args.overrides.backend_url.as_deref(),
        Some("http://localhost:8080")
    );
    assert_eq!(
        args.overrides.session_file,
        Some(PathBuf::from("/tmp/session"))
    );
    assert_eq!(args.overrides.log_json, Some(true));
    assert_eq!(args.overrides.request_timeout_seconds, Some(9));
}
