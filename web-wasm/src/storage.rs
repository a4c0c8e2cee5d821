//! Session-storage hand-off to the results view

use gloo::storage::{SessionStorage, Storage};
use skillup_common::{Error, Result, SubmissionRecord, STORAGE_KEY};

/// Stores the submission record as JSON under the fixed hand-off key.
pub fn store_record(record: &SubmissionRecord) -> Result<()> {
    SessionStorage::set(STORAGE_KEY, record).map_err(|e| Error::Storage(e.to_string()))
}

/// Transfers control to the results view.
pub fn goto_results() {
    let window = web_sys::window().unwrap();
    let _ = window.location().set_href("/results");
}
