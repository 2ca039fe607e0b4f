use axum::{
    Json,
    extract::{
        Multipart, State,
        multipart::MultipartRejection,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::app::read_upload;
use crate::error::RequestError;
use crate::summary::{UploadSummary, summarize};
use crate::upload::{UploadProcessor, UploadResult};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub success: bool,
    pub message: String,
    pub total_files: usize,
    pub success_count: usize,
    pub failure_count: usize,
    pub results: Vec<UploadResult>,
}

impl UploadResponse {
    pub fn from_summary(summary: UploadSummary) -> Self {
        Self {
            success: true,
            message: format!("{} file(s) uploaded successfully", summary.succeeded_count),
            total_files: summary.total_files,
            success_count: summary.succeeded_count,
            failure_count: summary.failed_count,
            results: summary.results,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            total_files: 0,
            success_count: 0,
            failure_count: 0,
            results: Vec::new(),
        }
    }
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, Json(UploadResponse::error(self.to_string()))).into_response()
    }
}

pub async fn handle_api_upload(
    State(processor): State<UploadProcessor>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let files = match read_upload(multipart).await {
        Ok(files) => files,
        Err(err) => {
            tracing::warn!(error = %err, "api upload rejected");
            return err.into_response();
        }
    };

    let summary = summarize(processor.process_batch(files).await);
    tracing::info!(
        total = summary.total_files,
        succeeded = summary.succeeded_count,
        failed = summary.failed_count,
        "api upload finished"
    );
    (StatusCode::OK, Json(UploadResponse::from_summary(summary))).into_response()
}
