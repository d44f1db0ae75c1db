use super::*;

#[test]
fn test_filter_directives_scope_our_crates() {
    let directives = Logger::filter_directives(LogLevel::Debug);

    assert!(directives.starts_with("dockflow=debug,dockflow_lib=debug"));
    assert!(directives.contains("reqwest=warn"));
    assert!(directives.contains("hyper=warn"));
    assert!(directives.ends_with(",debug"));
}

#[test]
fn test_filter_directives_parse() {
    for level in [LogLevel::Error, LogLevel::Info, LogLevel::Trace] {
        let directives = Logger::filter_directives(level);
        assert!(
            EnvFilter::try_new(&directives).is_ok(),
            "'{}' should be a valid filter",
            directives
        );
    }
}

#[test]
fn test_second_init_is_rejected() {
    let config = LoggerConfig {
        level: LogLevel::Error,
        format: LogFormat::Text,
        output: LogOutput::Stderr,
        ansi: false,
    };

    // Another test may already own the global subscriber; either way a
    // second call must not succeed.
    let _ = Logger::init(config.clone());
    assert!(Logger::init(config).is_err());
}
