//! Scale expressions and the replica-count calculation

use std::str::FromStr;
use tracing::warn;

use super::ConsulError;

/// Lowest replica count ever handed back to a caller
pub const MIN_SCALE: u32 = 1;

/// Parsed form of the optional scale argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleDelta {
    /// Keep whatever the store holds
    Keep,
    /// `+N`
    Increment(u32),
    /// `-N`
    Decrement(u32),
    /// Plain `N`, replaces the stored value
    Absolute(u32),
}

impl ScaleDelta {
    /// Apply the delta to the currently stored scale, flooring at [`MIN_SCALE`]
    pub fn apply(&self, current: u32) -> u32 {
        let current = i64::from(current);
        let next = match *self {
            ScaleDelta::Keep => current,
            ScaleDelta::Increment(n) => current + i64::from(n),
            ScaleDelta::Decrement(n) => current - i64::from(n),
            ScaleDelta::Absolute(n) => i64::from(n),
        };

        u32::try_from(next.max(i64::from(MIN_SCALE))).unwrap_or(u32::MAX)
    }
}

impl FromStr for ScaleDelta {
    type Err = ConsulError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(ScaleDelta::Keep);
        }

        let (digits, build): (&str, fn(u32) -> ScaleDelta) =
            if let Some(rest) = trimmed.strip_prefix('+') {
                (rest, ScaleDelta::Increment)
            } else if let Some(rest) = trimmed.strip_prefix('-') {
                (rest, ScaleDelta::Decrement)
            } else {
                (trimmed, ScaleDelta::Absolute)
            };

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ConsulError::InvalidScaleDelta {
                delta: s.to_string(),
                reason: "expected N, +N or -N".to_string(),
            });
        }

        digits
            .parse::<u32>()
            .map(build)
            .map_err(|e| ConsulError::InvalidScaleDelta {
                delta: s.to_string(),
                reason: e.to_string(),
            })
    }
}

/// Read the stored scale; a missing or unreadable value counts as zero
pub fn parse_stored_scale(raw: Option<&str>) -> u32 {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return 0;
    };

    match raw.parse::<u32>() {
        Ok(scale) => scale,
        Err(e) => {
            warn!(stored = raw, error = %e, "Stored scale is not a number, treating as 0");
            0
        }
    }
}

/// Combine the stored value with the requested delta
pub fn resolve_scale(stored: Option<&str>, delta: ScaleDelta) -> u32 {
    delta.apply(parse_stored_scale(stored))
}

#[cfg(test)]
mod tests {
    include!("scale.test.rs");
}
