use serde::Serialize;

use crate::upload::UploadResult;

/// Counts over one batch of results. `succeeded_count + failed_count == total_files`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct UploadSummary {
    pub total_files: usize,
    pub succeeded_count: usize,
    pub failed_count: usize,
    pub results: Vec<UploadResult>,
}

pub fn summarize(results: Vec<UploadResult>) -> UploadSummary {
    let succeeded_count = results.iter().filter(|result| result.succeeded()).count();
    UploadSummary {
        total_files: results.len(),
        succeeded_count,
        failed_count: results.len() - succeeded_count,
        results,
    }
}
