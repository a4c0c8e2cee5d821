//! Submission coordinator
//!
//! Encodes an accepted file to a data URL, assembles the submission record,
//! and persists it for the results view. Callers only reach this with a
//! validated title and an accepting verdict.

use js_sys::Date;
use skillup_common::{Error, Result, SubmissionRecord, SubmittedFile, Verdict};

use crate::storage;

/// Packages and stores one submission. Any error leaves session storage
/// untouched; the caller returns the form to an interactive state.
pub async fn submit(file: web_sys::File, job_title: &str, verdict: Verdict) -> Result<()> {
    let name = file.name();
    let mime_type = file.type_();

    let blob = gloo::file::File::from(file);
    let data = gloo::file::futures::read_as_data_url(&blob)
        .await
        .map_err(|e| Error::Encode(e.to_string()))?;

    let record = SubmissionRecord::new(
        SubmittedFile {
            name,
            mime_type,
            data,
        },
        job_title,
        String::from(Date::new_0().to_iso_string()),
        verdict,
    );

    storage::store_record(&record)
}
