//! Wire types for the results-view hand-off
//!
//! Shared between the validation logic and the web front end:
//! - Verdict: the document gatekeeper's accept/reject outcome
//! - SubmittedFile: the encoded upload
//! - SubmissionRecord: the package stored for the results view

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Session-storage key the results view reads the record from.
pub const STORAGE_KEY: &str = "analysisData";

/// Accept/reject outcome with a reason and a 0-100 confidence score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    pub is_valid: bool,
    pub reason: String,
    pub confidence: u8,
}

impl Verdict {
    pub fn accept(reason: &str, confidence: u8) -> Self {
        Self {
            is_valid: true,
            reason: reason.to_string(),
            confidence,
        }
    }

    pub fn reject(reason: &str, confidence: u8) -> Self {
        Self {
            is_valid: false,
            reason: reason.to_string(),
            confidence,
        }
    }
}

/// An accepted upload, encoded as a self-contained data URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedFile {
    pub name: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    pub data: String,
}

/// One user submission, immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    pub file: SubmittedFile,
    pub job_title: String,
    pub timestamp: String,
    pub validation: Verdict,
}

impl SubmissionRecord {
    /// Builds a record from an accepted file. The job title is stored trimmed.
    pub fn new(file: SubmittedFile, job_title: &str, timestamp: String, validation: Verdict) -> Self {
        Self {
            file,
            job_title: job_title.trim().to_string(),
            timestamp,
            validation,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
