//! Job title validation
//!
//! Checks run in a fixed order and stop at the first failure: structural
//! checks (length) before content checks (disallowed words) before
//! heuristics (name shape) before the keyword requirement, so the most
//! actionable message reaches the user first.

use thiserror::Error;

use crate::rules;

/// Shortest title length, in characters, after trimming.
pub const TITLE_MIN_CHARS: usize = 2;
/// Longest title length, in characters, after trimming.
pub const TITLE_MAX_CHARS: usize = 100;

/// Titles shorter than this must contain a job keyword.
const KEYWORD_REQUIRED_BELOW_CHARS: usize = 15;

/// Why a job title was rejected. `Display` is the user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TitleRejection {
    #[error("Please enter a job title")]
    Empty,

    #[error("Job title must be at least 2 characters long")]
    TooShort,

    #[error("Job title must be less than 100 characters")]
    TooLong,

    #[error("Please enter a professional job title")]
    Disallowed,

    #[error("Please enter a valid job title (e.g., Software Engineer, Data Analyst, Marketing Manager)")]
    Meaningless,

    #[error("Please enter a job title, not a personal name")]
    PersonalName,

    #[error("Job title must contain at least one letter")]
    NoLetters,

    #[error("Please enter a specific job title (e.g., Software Engineer, Data Analyst, Marketing Manager)")]
    NoJobKeyword,
}

/// Validates a desired job title. Synchronous, deterministic, idempotent.
pub fn validate_job_title(title: &str) -> Result<(), TitleRejection> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(TitleRejection::Empty);
    }

    let length = trimmed.chars().count();
    if length < TITLE_MIN_CHARS {
        return Err(TitleRejection::TooShort);
    }
    if length > TITLE_MAX_CHARS {
        return Err(TitleRejection::TooLong);
    }

    let lower = trimmed.to_lowercase();
    if rules::contains_disallowed_word(&lower) {
        return Err(TitleRejection::Disallowed);
    }

    if rules::is_meaningless(trimmed) {
        return Err(TitleRejection::Meaningless);
    }

    // "John Smith" is a name; "Software Engineer" has the same shape but
    // carries a role word, so the keyword lookup decides.
    let has_job_keyword = rules::contains_job_keyword(&lower);
    if rules::matches_name_shape(trimmed) && !has_job_keyword {
        return Err(TitleRejection::PersonalName);
    }

    if !trimmed.chars().any(|c| c.is_ascii_alphabetic()) {
        return Err(TitleRejection::NoLetters);
    }

    if length < KEYWORD_REQUIRED_BELOW_CHARS && !has_job_keyword {
        return Err(TitleRejection::NoJobKeyword);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_common_titles() {
        assert_eq!(validate_job_title("Software Engineer"), Ok(()));
        assert_eq!(validate_job_title("Data Analyst"), Ok(()));
        assert_eq!(validate_job_title("Marketing Manager"), Ok(()));
    }

    #[test]
    fn test_trims_before_checking() {
        assert_eq!(validate_job_title("  Software Engineer  "), Ok(()));
    }

    #[test]
    fn test_rejects_empty_and_whitespace() {
        assert_eq!(validate_job_title(""), Err(TitleRejection::Empty));
        assert_eq!(validate_job_title("   "), Err(TitleRejection::Empty));
    }

    #[test]
    fn test_rejects_too_short() {
        assert_eq!(validate_job_title("a"), Err(TitleRejection::TooShort));
    }

    #[test]
    fn test_rejects_too_long() {
        let long = "Senior Software Engineer ".repeat(5);
        assert!(long.trim().chars().count() > TITLE_MAX_CHARS);
        assert_eq!(validate_job_title(&long), Err(TitleRejection::TooLong));
    }

    #[test]
    fn test_rejects_disallowed_word_regardless_of_content() {
        assert_eq!(
            validate_job_title("shit engineer"),
            Err(TitleRejection::Disallowed)
        );
    }

    #[test]
    fn test_rejects_meaningless_input() {
        assert_eq!(validate_job_title("aaaa"), Err(TitleRejection::Meaningless));
        assert_eq!(validate_job_title("1234"), Err(TitleRejection::Meaningless));
        assert_eq!(validate_job_title("?!?!"), Err(TitleRejection::Meaningless));
    }

    #[test]
    fn test_rejects_personal_name() {
        assert_eq!(
            validate_job_title("John Smith"),
            Err(TitleRejection::PersonalName)
        );
        assert_eq!(
            validate_job_title("Mary J. Blige"),
            Err(TitleRejection::PersonalName)
        );
    }

    #[test]
    fn test_name_shaped_title_with_role_word_passes() {
        assert_eq!(validate_job_title("Product Manager"), Ok(()));
    }

    #[test]
    fn test_rejects_no_letters() {
        // Mixed digits and punctuation dodge the junk patterns but still
        // carry no letter.
        assert_eq!(validate_job_title("12-34"), Err(TitleRejection::NoLetters));
    }

    #[test]
    fn test_short_title_without_keyword_rejected() {
        assert_eq!(
            validate_job_title("asdfgh"),
            Err(TitleRejection::NoJobKeyword)
        );
    }

    #[test]
    fn test_long_title_without_keyword_accepted() {
        // The keyword requirement only applies below 15 characters.
        let title = "Underwater Basket Weaving Professional";
        assert!(title.chars().count() >= 15);
        assert_eq!(validate_job_title(title), Ok(()));
    }

    #[test]
    fn test_idempotent() {
        for title in ["Software Engineer", "John Smith", "asdfgh", ""] {
            assert_eq!(validate_job_title(title), validate_job_title(title));
        }
    }

    #[test]
    fn test_rejection_messages() {
        assert_eq!(
            TitleRejection::PersonalName.to_string(),
            "Please enter a job title, not a personal name"
        );
        assert_eq!(
            TitleRejection::NoJobKeyword.to_string(),
            "Please enter a specific job title (e.g., Software Engineer, Data Analyst, Marketing Manager)"
        );
    }
}
