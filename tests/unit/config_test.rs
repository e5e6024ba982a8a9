//! Unit tests for settings loading from files

use farm_gateway::config::Settings;

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.toml");

    let settings = Settings::load_from_path(&path).unwrap();
    assert_eq!(settings.server.port, 5000);
    assert_eq!(settings.ml_service.base_url, "http://127.0.0.1:8000");
    assert!(!settings.auth.enabled);
}

#[test]
fn file_values_override_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gateway.toml");
    std::fs::write(
        &path,
        r#"
[server]
port = 9000

[ml_service]
base_url = "http://ml.internal:8000"
irrigation_timeout_ms = 5000

[rate_limit]
enabled = true
requests_per_second = 10
"#,
    )
    .unwrap();

    let settings = Settings::load_from_path(&path).unwrap();
    assert_eq!(settings.server.port, 9000);
    assert_eq!(settings.ml_service.base_url, "http://ml.internal:8000");
    assert_eq!(settings.ml_service.irrigation_timeout_ms, 5000);
    // Untouched sections keep their defaults
    assert_eq!(settings.ml_service.health_timeout_ms, 3000);
    assert!(settings.rate_limit.enabled);
    assert_eq!(settings.rate_limit.requests_per_second, 10);
    assert_eq!(settings.rate_limit.burst_size, 200);
}

#[test]
fn zero_port_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gateway.toml");
    std::fs::write(&path, "[server]\nport = 0\n").unwrap();

    assert!(Settings::load_from_path(&path).is_err());
}

#[test]
fn enabled_auth_requires_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gateway.toml");
    std::fs::write(&path, "[auth]\nenabled = true\n").unwrap();

    assert!(Settings::load_from_path(&path).is_err());
}
