use super::*;

#[test]
fn test_no_variables_keep_intent() {
    let env = EnvironmentConfig::default();

    assert_eq!(env.apply_color_config(ColorIntent::Auto), ColorIntent::Auto);
    assert_eq!(env.apply_color_config(ColorIntent::Always), ColorIntent::Always);
}

#[test]
fn test_no_color_disables() {
    let env = EnvironmentConfig {
        no_color: Some("1".to_string()),
        ..Default::default()
    };
    assert_eq!(env.apply_color_config(ColorIntent::Auto), ColorIntent::Never);

    let empty = EnvironmentConfig {
        no_color: Some(String::new()),
        ..Default::default()
    };
    assert_eq!(empty.apply_color_config(ColorIntent::Auto), ColorIntent::Auto);
}

#[test]
fn test_force_color_beats_no_color() {
    let env = EnvironmentConfig {
        no_color: Some("1".to_string()),
        clicolor: Some("0".to_string()),
        force_color: Some("true".to_string()),
        ci: None,
    };

    assert_eq!(env.apply_color_config(ColorIntent::Auto), ColorIntent::Always);
}

#[test]
fn test_force_color_ignores_unknown_values() {
    let env = EnvironmentConfig {
        force_color: Some("maybe".to_string()),
        ..Default::default()
    };

    assert_eq!(env.apply_color_config(ColorIntent::Auto), ColorIntent::Auto);
}

#[test]
fn test_ci_disables_everything() {
    let env = EnvironmentConfig {
        force_color: Some("1".to_string()),
        ci: Some("true".to_string()),
        ..Default::default()
    };

    assert_eq!(env.apply_color_config(ColorIntent::Always), ColorIntent::Never);
}
