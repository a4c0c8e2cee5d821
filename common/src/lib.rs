//! Skill Up Common Library
//!
//! Validation logic and wire types shared with the web front end.

pub mod document;
pub mod error;
pub mod job_title;
pub mod limits;
pub mod rules;
pub mod types;

pub use document::{
    classify_name, read_failure, screen_metadata, FileMeta, ALLOWED_MIME_TYPES, MAX_FILE_SIZE,
};
pub use error::{Error, Result};
pub use job_title::{validate_job_title, TitleRejection};
pub use limits::{clamp_field, EMAIL_LIMIT, MESSAGE_LIMIT, NAME_LIMIT, TITLE_LIMIT};
pub use types::{SubmissionRecord, SubmittedFile, Verdict, STORAGE_KEY};
