use askama::Template;
use axum::{
    extract::{
        Multipart, State,
        multipart::MultipartRejection,
    },
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::app::read_upload;
use crate::error::RequestError;
use crate::summary::{UploadSummary, summarize};
use crate::upload::{UploadProcessor, UploadResult};

const SELECT_FILES_MESSAGE: &str = "Please select at least one file to upload";

/// What the form page shows after a submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormUploadView {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub results: Vec<UploadResult>,
}

impl From<UploadSummary> for FormUploadView {
    fn from(summary: UploadSummary) -> Self {
        Self {
            total: summary.total_files,
            succeeded: summary.succeeded_count,
            failed: summary.failed_count,
            results: summary.results,
        }
    }
}

struct Notice {
    ok: bool,
    text: String,
}

#[derive(Template)]
#[template(path = "upload.html")]
struct UploadPageTemplate {
    notice: Option<Notice>,
    view: Option<FormUploadView>,
}

pub async fn upload_page() -> Response {
    render(StatusCode::OK, UploadPageTemplate { notice: None, view: None })
}

pub async fn handle_form_upload(
    State(processor): State<UploadProcessor>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let files = match read_upload(multipart).await {
        Ok(files) => files,
        Err(RequestError::NoFiles | RequestError::NoValidFiles) => {
            return error_page(SELECT_FILES_MESSAGE.to_string());
        }
        Err(err) => {
            tracing::warn!(error = %err, "form upload rejected");
            return error_page(err.to_string());
        }
    };

    let view = FormUploadView::from(summarize(processor.process_batch(files).await));
    tracing::info!(
        total = view.total,
        succeeded = view.succeeded,
        failed = view.failed,
        "form upload finished"
    );
    let notice = Notice {
        ok: view.failed == 0,
        text: format!(
            "{} of {} file(s) uploaded, {} failed.",
            view.succeeded, view.total, view.failed
        ),
    };
    render(
        StatusCode::OK,
        UploadPageTemplate {
            notice: Some(notice),
            view: Some(view),
        },
    )
}

fn error_page(message: String) -> Response {
    let page = UploadPageTemplate {
        notice: Some(Notice { ok: false, text: message }),
        view: None,
    };
    render(StatusCode::BAD_REQUEST, page)
}

fn render(status: StatusCode, page: UploadPageTemplate) -> Response {
    match page.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to render upload page");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::FileCategory;
    use crate::error::UploadError;

    #[test]
    fn view_mirrors_summary() {
        let summary = summarize(vec![
            UploadResult::success("a.png".into(), "images/a.png".into(), FileCategory::Image),
            UploadResult::failure("b.exe".into(), &UploadError::DisallowedExtension { extension: "exe".into() }),
        ]);
        let view = FormUploadView::from(summary);
        assert_eq!((view.total, view.succeeded, view.failed), (2, 1, 1));
        assert_eq!(view.results.len(), 2);
    }

    #[test]
    fn results_table_escapes_messages() {
        let io_err = std::io::Error::other("<boom>");
        let view = FormUploadView::from(summarize(vec![UploadResult::failure(
            "x.css".into(),
            &UploadError::from(io_err),
        )]));
        let html = UploadPageTemplate { notice: None, view: Some(view) }.render().unwrap();
        assert!(html.contains("Failed to save file: &lt;boom&gt;"));
        assert!(!html.contains("<boom>"));
        assert!(html.contains(r#"class="failed""#));
    }

    #[test]
    fn saved_path_column_shows_dash_on_failure() {
        let view = FormUploadView::from(summarize(vec![
            UploadResult::success("a.css".into(), "css/a.css".into(), FileCategory::Stylesheet),
            UploadResult::failure("unknown".into(), &UploadError::InvalidFilename),
        ]));
        let html = UploadPageTemplate { notice: None, view: Some(view) }.render().unwrap();
        assert!(html.contains("<td>a.css</td>"));
        assert!(html.contains("<td>-</td>"));
        assert_eq!(html.matches("<td>-</td>").count(), 1);
    }

    #[test]
    fn empty_page_has_form_and_no_table() {
        let html = UploadPageTemplate { notice: None, view: None }.render().unwrap();
        assert!(html.contains(r#"name="files""#));
        assert!(!html.contains("<table>"));
        assert!(!html.contains(r#"class="notice"#));
    }

    #[test]
    fn notice_is_escaped() {
        let page = UploadPageTemplate {
            notice: Some(Notice { ok: false, text: "Failed to read upload: <bad>".into() }),
            view: None,
        };
        let html = page.render().unwrap();
        assert!(html.contains(r#"<div class="notice error">Failed to read upload: &lt;bad&gt;</div>"#));
    }
}
