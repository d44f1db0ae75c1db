//! Blue/green deployment colors

pub const BLUE_COLOR: &str = "blue";
pub const GREEN_COLOR: &str = "green";

/// Color reported for a service that has never been deployed
pub const DEFAULT_COLOR: &str = GREEN_COLOR;

/// The slot to deploy into next: green flips to blue, anything else to green
pub fn next_color(current: &str) -> &'static str {
    if current == GREEN_COLOR {
        BLUE_COLOR
    } else {
        GREEN_COLOR
    }
}

pub fn resolve_color(stored: Option<&str>) -> String {
    stored
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(DEFAULT_COLOR)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_color_flips() {
        assert_eq!(next_color(GREEN_COLOR), BLUE_COLOR);
        assert_eq!(next_color(BLUE_COLOR), GREEN_COLOR);
    }

    #[test]
    fn test_next_color_unknown_goes_green() {
        assert_eq!(next_color("orange"), GREEN_COLOR);
        assert_eq!(next_color(""), GREEN_COLOR);
        assert_eq!(next_color("Green"), GREEN_COLOR);
    }

    #[test]
    fn test_resolve_color_defaults_to_green() {
        assert_eq!(resolve_color(None), "green");
        assert_eq!(resolve_color(Some("")), "green");
        assert_eq!(resolve_color(Some("blue\n")), "blue");
        assert_eq!(resolve_color(Some("orange")), "orange");
    }
}
