use super::*;

macro_rules! test_enum_completeness {
    ($enum_type:ty, $test_name:ident) => {
        #[test]
        fn $test_name() {
            for variant in <$enum_type>::value_variants() {
                let possible_value = variant
                    .to_possible_value()
                    .expect("PossibleValue should exist for all variants");
                let parsed: $enum_type = possible_value.get_name().parse().unwrap();
                assert_eq!(parsed, *variant, "Round-trip should preserve variant");
            }
        }
    };
}

macro_rules! test_fromstr_aliases {
    ($enum_type:ty, $test_name:ident, $expected_mappings:expr) => {
        #[test]
        fn $test_name() {
            let mappings: &[(&str, $enum_type)] = &$expected_mappings;

            for (input, expected) in mappings {
                let parsed: Result<$enum_type, _> = input.parse();
                assert_eq!(
                    parsed.ok(),
                    Some(*expected),
                    "Wrong variant for input '{}'",
                    input
                );
            }
        }
    };
}

test_enum_completeness!(LogLevel, test_log_level_completeness);
test_enum_completeness!(LogFormat, test_log_format_completeness);
test_enum_completeness!(LogOutput, test_log_output_completeness);
test_enum_completeness!(ColorIntent, test_color_intent_completeness);

test_fromstr_aliases!(
    LogLevel,
    test_log_level_aliases,
    [
        ("error", LogLevel::Error),
        ("err", LogLevel::Error),
        ("warning", LogLevel::Warning),
        ("INFO", LogLevel::Info),
        ("verbose", LogLevel::Trace),
    ]
);

test_fromstr_aliases!(
    LogFormat,
    test_log_format_aliases,
    [
        ("plain", LogFormat::Text),
        ("json", LogFormat::Json),
        ("yml", LogFormat::Pretty),
    ]
);

test_fromstr_aliases!(
    ColorIntent,
    test_color_intent_aliases,
    [
        ("detect", ColorIntent::Auto),
        ("force", ColorIntent::Always),
        ("off", ColorIntent::Never),
    ]
);

#[test]
fn test_log_level_from_verbosity_saturates() {
    assert_eq!(LogLevel::from_verbosity(0), LogLevel::Error);
    assert_eq!(LogLevel::from_verbosity(2), LogLevel::Info);
    assert_eq!(LogLevel::from_verbosity(4), LogLevel::Trace);
    assert_eq!(LogLevel::from_verbosity(u8::MAX), LogLevel::Trace);
}

#[test]
fn test_unknown_value_reports_parse_error() {
    let err = "sparkly".parse::<LogFormat>().unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { ref value, .. } if value == "sparkly"));
    assert_eq!(
        err.to_string(),
        "Failed to parse configuration value 'sparkly': invalid log format"
    );
}

#[test]
fn test_explicit_color_intent_ignores_terminal() {
    assert!(ColorIntent::Always.resolve(LogOutput::Stderr));
    assert!(!ColorIntent::Never.resolve(LogOutput::Stdout));
}
