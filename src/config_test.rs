use std::collections::HashMap;

use super::*;

fn config_from(pairs: &[(&str, &str)]) -> Result<HostConfig, ConfigError> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    HostConfig::from_lookup(|key| vars.get(key).cloned())
}

// =============================================================================
// Defaults
// =============================================================================

#[test]
fn empty_environment_uses_defaults() {
    let config = config_from(&[]).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.api_upstream_url, DEFAULT_API_UPSTREAM_URL);
    assert_eq!(config.api_timeout, Duration::from_secs(DEFAULT_API_TIMEOUT_SECS));
}

#[test]
fn blank_values_use_defaults() {
    let config = config_from(&[("PORT", "  "), ("API_UPSTREAM_URL", "")]).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.api_upstream_url, DEFAULT_API_UPSTREAM_URL);
}

// =============================================================================
// PORT
// =============================================================================

#[test]
fn port_is_parsed() {
    assert_eq!(config_from(&[("PORT", "8443")]).unwrap().port, 8443);
}

#[test]
fn port_out_of_range_is_rejected() {
    assert_eq!(config_from(&[("PORT", "70000")]), Err(ConfigError::InvalidPort("70000".to_owned())));
}

#[test]
fn port_non_numeric_is_rejected() {
    assert!(matches!(config_from(&[("PORT", "http")]), Err(ConfigError::InvalidPort(_))));
}

// =============================================================================
// API_UPSTREAM_URL
// =============================================================================

#[test]
fn upstream_url_trailing_slashes_are_trimmed() {
    let config = config_from(&[("API_UPSTREAM_URL", "https://api.example.com/v1//")]).unwrap();
    assert_eq!(config.api_upstream_url, "https://api.example.com/v1");
}

#[test]
fn upstream_url_requires_http_scheme() {
    assert_eq!(
        config_from(&[("API_UPSTREAM_URL", "ftp://example.com")]),
        Err(ConfigError::InvalidUpstreamUrl("ftp://example.com".to_owned()))
    );
}

#[test]
fn upstream_url_requires_host() {
    assert!(matches!(config_from(&[("API_UPSTREAM_URL", "http://")]), Err(ConfigError::InvalidUpstreamUrl(_))));
}

// =============================================================================
// API_TIMEOUT_SECS
// =============================================================================

#[test]
fn timeout_is_parsed() {
    let config = config_from(&[("API_TIMEOUT_SECS", "5")]).unwrap();
    assert_eq!(config.api_timeout, Duration::from_secs(5));
}

#[test]
fn invalid_timeout_falls_back_to_default() {
    for raw in ["soon", "-3", "0"] {
        let config = config_from(&[("API_TIMEOUT_SECS", raw)]).unwrap();
        assert_eq!(config.api_timeout, Duration::from_secs(DEFAULT_API_TIMEOUT_SECS), "raw {raw:?}");
    }
}

// =============================================================================
// from_env
// =============================================================================

#[test]
fn from_env_reads_process_environment() {
    if std::env::var("PORT").is_err() && std::env::var("API_UPSTREAM_URL").is_err() {
        assert!(HostConfig::from_env().is_ok());
    }
}
