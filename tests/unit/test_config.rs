//! Unit tests for server configuration

use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr};

use feature_flag_api::config::{ConfigError, DEFAULT_PORT, LogFormat, ServerConfig};
use serial_test::serial;

fn config_from(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    ServerConfig::from_lookup(|name| vars.get(name).cloned())
}

#[test]
fn test_defaults() {
    let config = config_from(&[]).unwrap();
    assert_eq!(config, ServerConfig::default());
    assert_eq!(config.port, DEFAULT_PORT);
    assert!(config.seed_data);
    assert!(config.cors_allowed_origins.is_empty());
    assert_eq!(config.log_format, LogFormat::Text);
}

#[test]
fn test_all_values_parsed() {
    let config = config_from(&[
        ("HOST", "127.0.0.1"),
        ("PORT", "8080"),
        ("SEED_DATA", "false"),
        (
            "CORS_ALLOWED_ORIGINS",
            "http://localhost:3000, http://localhost:5173,",
        ),
        ("LOG_FORMAT", "JSON"),
    ])
    .unwrap();

    assert_eq!(config.host, IpAddr::V4(Ipv4Addr::LOCALHOST));
    assert_eq!(config.port, 8080);
    assert!(!config.seed_data);
    assert_eq!(
        config.cors_allowed_origins,
        vec!["http://localhost:3000", "http://localhost:5173"]
    );
    assert_eq!(config.log_format, LogFormat::Json);
    assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn test_empty_values_fall_back_to_defaults() {
    let config = config_from(&[("PORT", ""), ("SEED_DATA", "  ")]).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert!(config.seed_data);
}

#[test]
fn test_invalid_values_are_errors() {
    assert!(matches!(
        config_from(&[("PORT", "eighty")]),
        Err(ConfigError::InvalidValue { name: "PORT", .. })
    ));
    assert!(matches!(
        config_from(&[("PORT", "70000")]),
        Err(ConfigError::InvalidValue { name: "PORT", .. })
    ));
    assert!(matches!(
        config_from(&[("SEED_DATA", "maybe")]),
        Err(ConfigError::InvalidValue {
            name: "SEED_DATA",
            ..
        })
    ));
    assert!(matches!(
        config_from(&[("LOG_FORMAT", "xml")]),
        Err(ConfigError::InvalidValue {
            name: "LOG_FORMAT",
            ..
        })
    ));
    assert!(matches!(
        config_from(&[("HOST", "localhost")]),
        Err(ConfigError::InvalidValue { name: "HOST", .. })
    ));
}

#[test]
#[serial]
fn test_from_env_reads_process_environment() {
    let vars = [
        ("HOST", "127.0.0.1"),
        ("PORT", "4010"),
        ("SEED_DATA", "no"),
        ("CORS_ALLOWED_ORIGINS", ""),
        ("LOG_FORMAT", "text"),
    ];
    // SAFETY: serialized with every other test touching the environment
    unsafe {
        for (name, value) in vars {
            std::env::set_var(name, value);
        }
    }

    let config = ServerConfig::from_env();

    unsafe {
        for (name, _) in vars {
            std::env::remove_var(name);
        }
    }

    let config = config.unwrap();

    assert_eq!(config.port, 4010);
    assert!(!config.seed_data);
}
