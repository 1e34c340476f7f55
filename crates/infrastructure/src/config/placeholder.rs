//! Detection of template values left in `.env` files

/// Whole values that show up in copied example configuration
const PLACEHOLDER_VALUES: [&str; 3] = ["placeholder", "changeme", "todo"];

/// Whether `value` is empty or obviously unfilled (`your_...`, `<...>`, `xxxx`, ...)
///
/// Only whole-value shapes count; real identifiers that merely contain a
/// marker are kept.
pub fn is_placeholder(value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() {
        return true;
    }

    let lower = value.to_lowercase();
    lower.starts_with("your_")
        || (lower.starts_with('<') && lower.ends_with('>'))
        || lower.chars().all(|c| c == 'x')
        || PLACEHOLDER_VALUES.contains(&lower.as_str())
}

/// Drop the value if it is a placeholder
pub fn meaningful(value: Option<String>) -> Option<String> {
    value.filter(|v| !is_placeholder(v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_placeholders() {
        for value in [
            "",
            "   ",
            "your_connection_id",
            "YOUR_SECRET_KEY",
            "<phone-number-id>",
            "placeholder",
            "changeme",
            "CHANGEME",
            "xxxxxxxx",
        ] {
            assert!(is_placeholder(value), "{value:?} should be a placeholder");
        }
    }

    #[test]
    fn accepts_real_values() {
        for value in ["123456789012345", "whatsapp-business", "https://api.nango.dev"] {
            assert!(!is_placeholder(value), "{value:?} should be accepted");
        }
    }

    #[test]
    fn markers_inside_real_values_are_kept() {
        for value in [
            "nk_live_9fxxxa21",
            "conn-maxxx",
            "your-company-whatsapp",
            "changeme-later-prod",
            "placeholder-free-key",
        ] {
            assert!(!is_placeholder(value), "{value:?} should be accepted");
        }
    }

    #[test]
    fn meaningful_filters() {
        assert_eq!(meaningful(Some("abc".into())), Some("abc".into()));
        assert_eq!(meaningful(Some("your_id".into())), None);
        assert_eq!(meaningful(None), None);
    }
}
