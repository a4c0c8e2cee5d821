//! Form field character limits
//!
//! Inputs are clamped client-side; the flag tells the UI to swap its live
//! counter for a "limit crossed" indicator.

/// Job title field limit (Home form).
pub const TITLE_LIMIT: usize = 100;
/// Contact form name field limit.
pub const NAME_LIMIT: usize = 100;
/// Contact form email field limit.
pub const EMAIL_LIMIT: usize = 100;
/// Contact form message field limit.
pub const MESSAGE_LIMIT: usize = 500;

/// Clamps a field to `limit` characters. Returns the kept text and whether
/// the input was cut.
pub fn clamp_field(value: &str, limit: usize) -> (String, bool) {
    if value.chars().count() > limit {
        (value.chars().take(limit).collect(), true)
    } else {
        (value.to_string(), false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_input_untouched() {
        let (kept, crossed) = clamp_field("hello", MESSAGE_LIMIT);
        assert_eq!(kept, "hello");
        assert!(!crossed);
    }

    #[test]
    fn test_exact_limit_untouched() {
        let input = "a".repeat(MESSAGE_LIMIT);
        let (kept, crossed) = clamp_field(&input, MESSAGE_LIMIT);
        assert_eq!(kept.chars().count(), MESSAGE_LIMIT);
        assert!(!crossed);
    }

    #[test]
    fn test_overlong_message_truncated_to_500() {
        let input = "x".repeat(600);
        let (kept, crossed) = clamp_field(&input, MESSAGE_LIMIT);
        assert_eq!(kept.chars().count(), 500);
        assert!(crossed);
    }

    #[test]
    fn test_clamp_counts_characters_not_bytes() {
        let input = "é".repeat(NAME_LIMIT + 1);
        let (kept, crossed) = clamp_field(&input, NAME_LIMIT);
        assert_eq!(kept.chars().count(), NAME_LIMIT);
        assert!(crossed);
    }
}
