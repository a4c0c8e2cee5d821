//! Document gatekeeper policy
//!
//! Pure decision functions over file metadata. The asynchronous half (the
//! actual browser file read) lives in the web crate; everything that decides
//! accept/reject is here so it can be tested natively.
//!
//! PDF and DOCX bytes are never decoded; past the size and MIME screens the
//! file name is the only signal the verdict rests on.

use crate::rules;
use crate::types::Verdict;

/// Hard upload cap: 10 MiB.
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

pub const MIME_PDF: &str = "application/pdf";
pub const MIME_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const MIME_TEXT: &str = "text/plain";

/// MIME types the gatekeeper lets through.
pub const ALLOWED_MIME_TYPES: &[&str] = &[MIME_PDF, MIME_DOCX, MIME_TEXT];

/// Metadata of a selected file, as reported by the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMeta {
    pub name: String,
    pub mime_type: String,
    pub size: u64,
}

/// Hard screens that apply before anything is read. `None` means proceed to
/// the name heuristics.
pub fn screen_metadata(meta: &FileMeta) -> Option<Verdict> {
    if meta.size > MAX_FILE_SIZE {
        return Some(Verdict::reject("File size exceeds 10MB limit", 100));
    }

    if !ALLOWED_MIME_TYPES.contains(&meta.mime_type.as_str()) {
        return Some(Verdict::reject(
            "Invalid file type. Please upload PDF, DOCX, or TXT files only",
            100,
        ));
    }

    None
}

/// Name-based heuristic classification of a file that passed the screens.
pub fn classify_name(name: &str) -> Verdict {
    let lower = name.to_lowercase();

    let sensitive = rules::SENSITIVE_NAME_KEYWORDS
        .iter()
        .any(|term| lower.contains(term));
    if sensitive {
        return Verdict::reject(
            "Document appears to contain inappropriate or sensitive content",
            85,
        );
    }

    let resume_like = rules::RESUME_NAME_KEYWORDS
        .iter()
        .any(|keyword| lower.contains(keyword))
        || lower.contains("resume")
        || lower.contains("cv");
    if !resume_like {
        return Verdict::reject("Document does not appear to be a resume or CV", 70);
    }

    Verdict::accept("Document appears to be a valid resume", 90)
}

/// Verdict for a file the browser failed to read.
pub fn read_failure() -> Verdict {
    Verdict::reject("Error reading file", 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(name: &str, mime_type: &str, size: u64) -> FileMeta {
        FileMeta {
            name: name.to_string(),
            mime_type: mime_type.to_string(),
            size,
        }
    }

    #[test]
    fn test_oversize_rejected_regardless_of_name_and_type() {
        let eleven_mib = 11 * 1024 * 1024;
        let verdict = screen_metadata(&meta("john_resume.pdf", MIME_PDF, eleven_mib))
            .expect("oversize file must be screened out");
        assert!(!verdict.is_valid);
        assert_eq!(verdict.reason, "File size exceeds 10MB limit");
        assert_eq!(verdict.confidence, 100);
    }

    #[test]
    fn test_size_boundary_passes_at_exactly_ten_mib() {
        assert_eq!(screen_metadata(&meta("resume.pdf", MIME_PDF, MAX_FILE_SIZE)), None);
        assert!(screen_metadata(&meta("resume.pdf", MIME_PDF, MAX_FILE_SIZE + 1)).is_some());
    }

    #[test]
    fn test_disallowed_mime_rejected() {
        let verdict = screen_metadata(&meta("resume.png", "image/png", 1024))
            .expect("png must be screened out");
        assert!(!verdict.is_valid);
        assert_eq!(
            verdict.reason,
            "Invalid file type. Please upload PDF, DOCX, or TXT files only"
        );
        assert_eq!(verdict.confidence, 100);
    }

    #[test]
    fn test_allowed_mimes_pass_the_screen() {
        for mime in ALLOWED_MIME_TYPES {
            assert_eq!(screen_metadata(&meta("resume.pdf", mime, 2 * 1024 * 1024)), None);
        }
    }

    #[test]
    fn test_resume_like_name_accepted() {
        let verdict = classify_name("john_resume.pdf");
        assert!(verdict.is_valid);
        assert_eq!(verdict.reason, "Document appears to be a valid resume");
        assert_eq!(verdict.confidence, 90);
    }

    #[test]
    fn test_cv_fragment_counts_as_resume_like() {
        assert!(classify_name("cv_2025.docx").is_valid);
    }

    #[test]
    fn test_sensitive_name_rejected_at_85() {
        let verdict = classify_name("confidential_resume.pdf");
        assert!(!verdict.is_valid);
        assert_eq!(
            verdict.reason,
            "Document appears to contain inappropriate or sensitive content"
        );
        assert_eq!(verdict.confidence, 85);
    }

    #[test]
    fn test_unrelated_name_rejected_at_70() {
        let verdict = classify_name("quarterly_report.pdf");
        assert!(!verdict.is_valid);
        assert_eq!(verdict.reason, "Document does not appear to be a resume or CV");
        assert_eq!(verdict.confidence, 70);
    }

    #[test]
    fn test_read_failure_verdict() {
        let verdict = read_failure();
        assert!(!verdict.is_valid);
        assert_eq!(verdict.reason, "Error reading file");
        assert_eq!(verdict.confidence, 100);
    }
}
