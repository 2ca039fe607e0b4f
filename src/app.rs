use axum::{
    Router,
    extract::{DefaultBodyLimit, Multipart, multipart::MultipartRejection},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::error::RequestError;
use crate::upload::{IncomingFile, UploadProcessor};
use crate::{api, web_pages};

/// Multipart field that carries uploaded files. It may repeat.
pub const FILES_FIELD: &str = "files";

pub fn build_router(processor: UploadProcessor, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/", get(web_pages::upload_page))
        .route("/upload", post(web_pages::handle_form_upload))
        .route("/api/upload", post(api::handle_api_upload))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(processor)
}

/// Decodes every `files` part and drops empty ones.
///
/// Fails with `NoFiles` when no part was sent and `NoValidFiles` when all of
/// them were empty.
pub(crate) async fn read_upload(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Vec<IncomingFile>, RequestError> {
    let mut multipart = multipart.map_err(|err| RequestError::Multipart(err.body_text()))?;
    let mut files = Vec::new();
    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                if field.name() != Some(FILES_FIELD) {
                    continue;
                }
                let name = field.file_name().map(str::to_string);
                let content = field
                    .bytes()
                    .await
                    .map_err(|err| RequestError::Multipart(err.body_text()))?;
                files.push(IncomingFile { name, content });
            }
            Ok(None) => break,
            Err(err) => return Err(RequestError::Multipart(err.body_text())),
        }
    }
    keep_non_empty(files)
}

fn keep_non_empty(files: Vec<IncomingFile>) -> Result<Vec<IncomingFile>, RequestError> {
    if files.is_empty() {
        return Err(RequestError::NoFiles);
    }
    let files: Vec<_> = files.into_iter().filter(|file| !file.is_empty()).collect();
    if files.is_empty() {
        return Err(RequestError::NoValidFiles);
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    #[test]
    fn no_parts_is_no_files() {
        assert!(matches!(keep_non_empty(Vec::new()), Err(RequestError::NoFiles)));
    }

    #[test]
    fn only_empty_parts_is_no_valid_files() {
        let files = vec![IncomingFile::new("a.png", Bytes::new()), IncomingFile::new("", Bytes::new())];
        assert!(matches!(keep_non_empty(files), Err(RequestError::NoValidFiles)));
    }

    #[test]
    fn empty_parts_are_dropped() {
        let files = vec![
            IncomingFile::new("a.png", Bytes::new()),
            IncomingFile::new("b.css", &b"b {}"[..]),
        ];
        let kept = keep_non_empty(files).unwrap();
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name.as_deref(), Some("b.css"));
    }
}
