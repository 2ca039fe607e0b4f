use std::sync::Arc;

use bytes::Bytes;
use serde::Serialize;
use tokio::io::AsyncRead;

use crate::category::FileCategory;
use crate::error::UploadError;
use crate::filename::{file_extension, is_blank, sanitize_filename};
use crate::storage::LocalFileStorage;

const UNKNOWN_FILENAME: &str = "unknown";
const SUCCESS_MESSAGE: &str = "Uploaded successfully";

/// Outcome for one uploaded file. `saved_path` is set exactly when `succeeded`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UploadResult {
    filename: String,
    #[serde(rename = "savedPath")]
    saved_path: Option<String>,
    #[serde(rename = "fileType")]
    category: FileCategory,
    #[serde(rename = "success")]
    succeeded: bool,
    message: String,
}

impl UploadResult {
    pub fn success(filename: String, saved_path: String, category: FileCategory) -> Self {
        Self {
            filename,
            saved_path: Some(saved_path),
            category,
            succeeded: true,
            message: SUCCESS_MESSAGE.to_string(),
        }
    }

    pub fn failure(filename: String, error: &UploadError) -> Self {
        Self {
            filename,
            saved_path: None,
            category: FileCategory::Unknown,
            succeeded: false,
            message: error.to_string(),
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn saved_path(&self) -> Option<&str> {
        self.saved_path.as_deref()
    }

    pub fn category(&self) -> FileCategory {
        self.category
    }

    pub fn succeeded(&self) -> bool {
        self.succeeded
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A decoded upload as handed over by the web layer.
#[derive(Clone, Debug)]
pub struct IncomingFile {
    pub name: Option<String>,
    pub content: Bytes,
}

impl IncomingFile {
    pub fn new(name: impl Into<String>, content: impl Into<Bytes>) -> Self {
        Self {
            name: Some(name.into()),
            content: content.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

#[derive(Clone, Debug)]
pub struct UploadProcessor {
    storage: Arc<LocalFileStorage>,
}

impl UploadProcessor {
    pub fn new(storage: Arc<LocalFileStorage>) -> Self {
        Self { storage }
    }

    /// Processes files in order, one result per non-empty file. Empty files are skipped.
    pub async fn process_batch(&self, files: Vec<IncomingFile>) -> Vec<UploadResult> {
        let mut results = Vec::with_capacity(files.len());
        for file in files {
            if file.is_empty() {
                continue;
            }
            let mut content = file.content.as_ref();
            results.push(self.process_one(file.name.as_deref(), &mut content).await);
        }
        results
    }

    /// Classifies, sanitizes and stores a single file. Never fails; errors become
    /// failure results.
    pub async fn process_one<R>(&self, name: Option<&str>, content: &mut R) -> UploadResult
    where
        R: AsyncRead + Unpin + ?Sized,
    {
        let Some(name) = name.filter(|value| !is_blank(value)) else {
            tracing::warn!("rejected upload without a filename");
            return UploadResult::failure(UNKNOWN_FILENAME.to_string(), &UploadError::InvalidFilename);
        };

        let sanitized = sanitize_filename(name);
        let extension = file_extension(&sanitized).to_lowercase();
        let Some((category, folder)) = FileCategory::from_extension(&extension)
            .and_then(|category| category.folder().map(|folder| (category, folder)))
        else {
            tracing::warn!(filename = %sanitized, extension = %extension, "rejected disallowed file type");
            return UploadResult::failure(sanitized, &UploadError::DisallowedExtension { extension });
        };

        match self.storage.put_stream(folder, &sanitized, content).await {
            Ok(written) => {
                let saved_path = format!("{folder}/{sanitized}");
                tracing::info!(
                    filename = %sanitized,
                    category = ?category,
                    saved_path = %saved_path,
                    written,
                    "stored upload"
                );
                UploadResult::success(sanitized, saved_path, category)
            }
            Err(err) => {
                let error = UploadError::from(err);
                tracing::warn!(filename = %sanitized, error = %error, "failed to store upload");
                UploadResult::failure(sanitized, &error)
            }
        }
    }
}
