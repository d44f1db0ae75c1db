/// Generates `FromStr` for a `ValueEnum`, accepting every name and alias clap accepts
macro_rules! impl_fromstr_for_value_enum {
    ($enum_type:ty, $error_reason:expr) => {
        impl FromStr for $enum_type {
            type Err = $crate::primitives::ConfigError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::value_variants()
                    .iter()
                    .find(|variant| {
                        variant
                            .to_possible_value()
                            .is_some_and(|value| value.matches(s, true))
                    })
                    .copied()
                    .ok_or_else(|| $crate::primitives::ConfigError::ParseError {
                        value: s.to_string(),
                        reason: $error_reason.to_string(),
                    })
            }
        }
    };
}

pub(crate) use impl_fromstr_for_value_enum;
