use super::*;

#[test]
fn test_parse_delta_forms() {
    assert_eq!("".parse::<ScaleDelta>().unwrap(), ScaleDelta::Keep);
    assert_eq!("  ".parse::<ScaleDelta>().unwrap(), ScaleDelta::Keep);
    assert_eq!("+2".parse::<ScaleDelta>().unwrap(), ScaleDelta::Increment(2));
    assert_eq!("-100".parse::<ScaleDelta>().unwrap(), ScaleDelta::Decrement(100));
    assert_eq!("7".parse::<ScaleDelta>().unwrap(), ScaleDelta::Absolute(7));
    assert_eq!(" +3 ".parse::<ScaleDelta>().unwrap(), ScaleDelta::Increment(3));
}

#[test]
fn test_parse_delta_rejects_garbage() {
    for input in ["+", "-", "++1", "+-1", "abc", "1.5", "3x"] {
        let result = input.parse::<ScaleDelta>();
        assert!(
            matches!(result, Err(ConsulError::InvalidScaleDelta { .. })),
            "'{}' should be rejected",
            input
        );
    }
}

#[test]
fn test_parse_delta_rejects_overflow() {
    let result = "+99999999999".parse::<ScaleDelta>();
    assert!(matches!(result, Err(ConsulError::InvalidScaleDelta { .. })));
}

#[test]
fn test_apply_delta() {
    assert_eq!(ScaleDelta::Keep.apply(4), 4);
    assert_eq!(ScaleDelta::Increment(2).apply(4), 6);
    assert_eq!(ScaleDelta::Decrement(2).apply(4), 2);
    assert_eq!(ScaleDelta::Absolute(7).apply(4), 7);
}

#[test]
fn test_apply_floors_at_one() {
    assert_eq!(ScaleDelta::Keep.apply(0), 1);
    assert_eq!(ScaleDelta::Decrement(100).apply(4), 1);
    assert_eq!(ScaleDelta::Decrement(4).apply(4), 1);
    assert_eq!(ScaleDelta::Absolute(0).apply(4), 1);
}

#[test]
fn test_apply_saturates_at_u32_max() {
    assert_eq!(ScaleDelta::Increment(u32::MAX).apply(u32::MAX), u32::MAX);
}

#[test]
fn test_stored_scale_defaults_to_zero() {
    assert_eq!(parse_stored_scale(None), 0);
    assert_eq!(parse_stored_scale(Some("")), 0);
    assert_eq!(parse_stored_scale(Some("\n")), 0);
    assert_eq!(parse_stored_scale(Some("corrupted")), 0);
    assert_eq!(parse_stored_scale(Some("-3")), 0);
    assert_eq!(parse_stored_scale(Some("4\n")), 4);
}

#[test]
fn test_resolve_scale_never_deployed() {
    assert_eq!(resolve_scale(None, ScaleDelta::Keep), 1);
    assert_eq!(resolve_scale(None, ScaleDelta::Increment(3)), 3);
}
