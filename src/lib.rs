pub mod api;
pub mod app;
pub mod category;
pub mod config;
pub mod error;
pub mod filename;
pub mod observability;
pub mod storage;
pub mod summary;
pub mod upload;
pub mod web_pages;

pub use category::FileCategory;
pub use error::{RequestError, UploadError};
pub use storage::LocalFileStorage;
pub use summary::{UploadSummary, summarize};
pub use upload::{IncomingFile, UploadProcessor, UploadResult};
