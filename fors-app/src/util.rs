//! Small view-model helpers

/// Parse a route-supplied id, rejecting anything non-numeric before a request
/// is made. Empty strings and negative values are rejected too.
pub fn parse_id(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse::<i64>().ok().filter(|id| *id >= 0)
}

/// Placeholder graphic URL used when a drop image fails to load.
///
/// Deterministic per drop name so a re-render shows the same placeholder.
pub fn placeholder_image(name: &str) -> String {
    let label: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .take(12)
        .collect();
    if label.is_empty() {
        "https://placehold.co/600x400?text=FORS".to_string()
    } else {
        format!("https://placehold.co/600x400?text={label}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_accepts_numeric() {
        assert_eq!(parse_id("42"), Some(42));
        assert_eq!(parse_id(" 7 "), Some(7));
    }

    #[test]
    fn test_parse_id_rejects_non_numeric() {
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id("4a2"), None);
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("-3"), None);
    }

    #[test]
    fn test_placeholder_image_is_deterministic() {
        let a = placeholder_image("Jordan 1 Retro");
        let b = placeholder_image("Jordan 1 Retro");
        assert_eq!(a, b);
        assert!(a.contains("Jordan1Retro"));
    }
}
