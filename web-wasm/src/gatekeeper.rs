//! Asynchronous document gatekeeper
//!
//! Wraps the pure policy in `skillup_common::document` around the actual
//! browser file read. The read is the operation the UI awaits; a failed
//! read resolves to a rejection rather than an error.

use skillup_common::{classify_name, read_failure, screen_metadata, FileMeta, Verdict};

/// Evaluates a selected file and produces a verdict.
///
/// Size and MIME screens run before the read. The decoded bytes are never
/// inspected; past the screens the file name is the only signal.
pub async fn evaluate(file: &web_sys::File) -> Verdict {
    let meta = FileMeta {
        name: file.name(),
        mime_type: file.type_(),
        size: file.size() as u64,
    };

    if let Some(verdict) = screen_metadata(&meta) {
        return verdict;
    }

    let blob = gloo::file::File::from(file.clone());
    match gloo::file::futures::read_as_data_url(&blob).await {
        Ok(_) => classify_name(&meta.name),
        Err(_) => read_failure(),
    }
}
