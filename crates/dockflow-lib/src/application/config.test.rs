use super::*;

#[test]
fn test_typed_defaults_match_clap_defaults() {
    let config = AppConfig::default();

    assert_eq!(config.consul_address, defaults::CONSUL_ADDRESS);
    assert_eq!(config.log_level, defaults::LOG_LEVEL.parse::<u8>().unwrap());
    assert_eq!(config.net_timeout, defaults::NET_TIMEOUT.parse::<u64>().unwrap());
    assert_eq!(config.log_format, defaults::LOG_FORMAT.parse::<LogFormat>().unwrap());
    assert_eq!(config.log_output, defaults::LOG_OUTPUT.parse::<LogOutput>().unwrap());
    assert_eq!(config.color, defaults::COLOR.parse::<ColorIntent>().unwrap());
}

#[test]
fn test_merge_takes_non_default_values() {
    let base = AppConfig {
        consul_address: "http://from-env:8500".to_string(),
        color: ColorIntent::Never,
        ..AppConfig::default()
    };
    let cli = AppConfig {
        net_timeout: 5,
        log_format: LogFormat::Json,
        ..AppConfig::default()
    };

    let merged = base.merge_with(cli);

    assert_eq!(merged.consul_address, "http://from-env:8500");
    assert_eq!(merged.color, ColorIntent::Never);
    assert_eq!(merged.net_timeout, 5);
    assert_eq!(merged.log_format, LogFormat::Json);
}

#[test]
fn test_validate_normalizes_address() {
    let mut config = AppConfig {
        consul_address: " http://consul:8500/ ".to_string(),
        ..AppConfig::default()
    };

    config.validate().unwrap();
    assert_eq!(config.consul_address, "http://consul:8500");
}

#[test]
fn test_validate_rejects_empty_address() {
    let mut config = AppConfig {
        consul_address: "   ".to_string(),
        ..AppConfig::default()
    };

    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationFailed { .. })
    ));
}

#[test]
fn test_validate_rejects_zero_timeout() {
    let mut config = AppConfig {
        net_timeout: 0,
        ..AppConfig::default()
    };

    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationFailed { .. })
    ));
}

#[test]
fn test_derived_configs() {
    let config = AppConfig {
        log_level: 4,
        net_timeout: 12,
        color: ColorIntent::Never,
        ..AppConfig::default()
    };

    let logger = config.to_logger_config();
    assert_eq!(logger.level, LogLevel::Trace);
    assert!(!logger.ansi);

    let networking = config.to_networking_config();
    assert_eq!(networking.timeout_seconds, 12);
    assert!(networking.trace_requests);
}
