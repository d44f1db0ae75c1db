use super::*;

#[test]
fn test_cli_definition_is_consistent() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}

#[test]
fn test_no_subcommand() {
    let config = CliConfig::try_from_args(["dockflow"]).unwrap();
    assert!(config.command.is_none());
}

#[test]
fn test_scale_with_negative_delta() {
    let config = CliConfig::try_from_args(["dockflow", "scale", "api", "-2"]).unwrap();

    assert_eq!(
        config.command,
        Some(Commands::Scale {
            service: "api".to_string(),
            delta: Some("-2".to_string()),
            write: false,
        })
    );
}

#[test]
fn test_scale_with_write_flag() {
    let config = CliConfig::try_from_args(["dockflow", "scale", "--write", "api", "+3"]).unwrap();
    let command = config.command.unwrap();

    assert!(command.writes());
    assert_eq!(command.service(), "api");
}

#[test]
fn test_global_options_before_subcommand() {
    let config = CliConfig::try_from_args([
        "dockflow",
        "--consul-address",
        "http://consul:8500",
        "--log-format",
        "json",
        "color",
        "api",
    ])
    .unwrap();

    assert_eq!(config.app_config.consul_address, "http://consul:8500");
    assert_eq!(config.app_config.log_format, crate::primitives::LogFormat::Json);
    assert_eq!(
        config.command,
        Some(Commands::Color {
            service: "api".to_string()
        })
    );
}

#[test]
fn test_put_scale_rejects_zero() {
    let result = CliConfig::try_from_args(["dockflow", "put-scale", "api", "0"]);
    assert!(matches!(result, Err(ConfigError::InvalidArguments { .. })));
}

#[test]
fn test_put_color_accepts_any_value() {
    let config = CliConfig::try_from_args(["dockflow", "put-color", "api", "orange"]).unwrap();

    assert_eq!(
        config.command,
        Some(Commands::PutColor {
            service: "api".to_string(),
            value: "orange".to_string(),
        })
    );
}

#[test]
fn test_color_is_read_only() {
    let config = CliConfig::try_from_args(["dockflow", "next-color", "api"]).unwrap();
    assert!(!config.command.unwrap().writes());
}
