//! Validation rule set
//!
//! Static keyword lists and compiled patterns used by the job title
//! validator and the document gatekeeper. All matching is case-insensitive
//! substring matching unless a pattern says otherwise.

use regex::Regex;

/// Words that mark a job title as unprofessional.
pub const DISALLOWED_WORDS: &[&str] = &[
    "fuck", "shit", "bitch", "asshole", "bastard", "porn", "nude", "xxx",
];

/// Role words a short job title is expected to contain.
pub const JOB_KEYWORDS: &[&str] = &[
    "engineer",
    "developer",
    "programmer",
    "manager",
    "analyst",
    "designer",
    "architect",
    "consultant",
    "specialist",
    "coordinator",
    "administrator",
    "director",
    "officer",
    "executive",
    "assistant",
    "associate",
    "technician",
    "scientist",
    "researcher",
    "intern",
    "lead",
    "head",
    "chief",
    "supervisor",
    "accountant",
    "auditor",
    "marketing",
    "sales",
    "teacher",
    "trainer",
    "nurse",
    "therapist",
    "writer",
    "editor",
    "operator",
    "planner",
    "strategist",
    "recruiter",
];

/// File-name fragments that suggest the upload is a resume.
pub const RESUME_NAME_KEYWORDS: &[&str] = &[
    "experience",
    "education",
    "skills",
    "work",
    "employment",
    "job",
    "career",
    "university",
    "college",
    "degree",
    "bachelor",
    "master",
    "phd",
    "certification",
    "project",
    "achievement",
    "responsibility",
    "accomplishment",
    "objective",
    "summary",
    "profile",
    "contact",
    "email",
    "phone",
    "address",
    "linkedin",
    "github",
    "portfolio",
    "references",
    "volunteer",
    "internship",
    "training",
    "course",
    "workshop",
    "seminar",
    "conference",
    "publication",
    "research",
    "language",
    "software",
    "programming",
    "technical",
    "management",
    "leadership",
    "teamwork",
    "communication",
    "problem solving",
    "analytical",
    "creative",
    "resume",
    "cv",
    "curriculum vitae",
];

/// File-name fragments that suggest inappropriate or sensitive material.
pub const SENSITIVE_NAME_KEYWORDS: &[&str] = &[
    "confidential",
    "classified",
    "secret",
    "private",
    "internal only",
    "do not distribute",
    "proprietary",
    "restricted",
    "sensitive",
    "personal diary",
    "journal",
    "medical record",
    "financial statement",
    "bank statement",
    "tax return",
    "social security",
    "passport",
    "driver license",
    "birth certificate",
    "marriage certificate",
    "time table",
    "schedule",
    "time line",
    "road map",
    "roadmap",
    "timeline",
    "course outline",
    "syllabus",
    "training schedule",
    "ebook",
    "manual",
    "lecture",
    "notes",
    "presentation",
    "slides",
    "tutorial",
    "walkthrough",
];

/// True if the lowercased input contains a disallowed word.
pub fn contains_disallowed_word(lower: &str) -> bool {
    DISALLOWED_WORDS.iter().any(|word| lower.contains(word))
}

/// True if the lowercased input contains a job keyword.
pub fn contains_job_keyword(lower: &str) -> bool {
    JOB_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
}

/// Junk-input detection: a single repeated character, digits only, or
/// punctuation only.
pub fn is_meaningless(trimmed: &str) -> bool {
    lazy_static::lazy_static! {
        static ref DIGITS_ONLY: Regex = Regex::new(r"^\d+$").unwrap();
        static ref PUNCT_ONLY: Regex = Regex::new(r"^[[:punct:][:space:]]+$").unwrap();
    }

    let mut chars = trimmed.chars();
    let repeated = match chars.next() {
        Some(first) => chars.all(|c| c == first),
        None => false,
    };

    repeated || DIGITS_ONLY.is_match(trimmed) || PUNCT_ONLY.is_match(trimmed)
}

/// True if the input is shaped like a personal name: two capitalized
/// tokens, optionally separated by a middle initial.
pub fn matches_name_shape(trimmed: &str) -> bool {
    lazy_static::lazy_static! {
        static ref NAME_SHAPE: Regex =
            Regex::new(r"^[A-Z][a-z]+(?:\s+[A-Z]\.?)?\s+[A-Z][a-z]+$").unwrap();
    }
    NAME_SHAPE.is_match(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_job_keyword() {
        assert!(contains_job_keyword("software engineer"));
        assert!(contains_job_keyword("senior data analyst"));
        assert!(!contains_job_keyword("john smith"));
        assert!(!contains_job_keyword("asdfgh"));
    }

    #[test]
    fn test_contains_disallowed_word() {
        assert!(contains_disallowed_word("shit poster"));
        assert!(!contains_disallowed_word("marketing manager"));
    }

    #[test]
    fn test_is_meaningless_repeated_chars() {
        assert!(is_meaningless("aaaa"));
        assert!(is_meaningless("!!"));
        assert!(!is_meaningless("abab"));
    }

    #[test]
    fn test_is_meaningless_digits_and_punctuation() {
        assert!(is_meaningless("12345"));
        assert!(is_meaningless("?!.,"));
        assert!(is_meaningless("--- ---"));
        assert!(!is_meaningless("asdfgh"));
        assert!(!is_meaningless("Software Engineer"));
    }

    #[test]
    fn test_matches_name_shape() {
        assert!(matches_name_shape("John Smith"));
        assert!(matches_name_shape("Mary J. Blige"));
        assert!(matches_name_shape("Software Engineer"));
        assert!(!matches_name_shape("john smith"));
        assert!(!matches_name_shape("Senior Software Engineer"));
        assert!(!matches_name_shape("VP of Sales"));
    }
}
