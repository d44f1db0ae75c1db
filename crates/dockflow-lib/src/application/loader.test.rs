use super::*;
use crate::primitives::ColorIntent;

#[test]
fn test_layered_applies_environment_color() {
    let cli = CliConfig::try_from_args(["dockflow", "color", "api"]).unwrap();
    let env = EnvironmentConfig {
        no_color: Some("1".to_string()),
        ..Default::default()
    };

    let config = cli.layered(&env).unwrap();
    assert_eq!(config.app_config.color, ColorIntent::Never);
}

#[test]
fn test_layered_cli_color_wins() {
    let cli = CliConfig::try_from_args(["dockflow", "--color", "always", "color", "api"]).unwrap();
    let env = EnvironmentConfig {
        no_color: Some("1".to_string()),
        ..Default::default()
    };

    let config = cli.layered(&env).unwrap();
    assert_eq!(config.app_config.color, ColorIntent::Always);
}

#[test]
fn test_layered_validates() {
    let cli = CliConfig::try_from_args(["dockflow", "--net-timeout", "0"]).unwrap();

    let result = cli.layered(&EnvironmentConfig::default());
    assert!(matches!(result, Err(ConfigError::ValidationFailed { .. })));
}

#[test]
fn test_layered_keeps_command() {
    let cli = CliConfig::try_from_args([
        "dockflow",
        "--consul-address",
        "http://consul:8500/",
        "next-color",
        "api",
    ])
    .unwrap();

    let config = cli.layered(&EnvironmentConfig::default()).unwrap();
    assert_eq!(config.app_config.consul_address, "http://consul:8500");
    assert!(config.command.is_some());
}
