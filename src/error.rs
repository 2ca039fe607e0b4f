use std::io;

use thiserror::Error;

use crate::category::allowed_extensions_list;

/// Why a single file was not stored. `Display` is the message shown to the user.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Invalid filename")]
    InvalidFilename,

    #[error("File type not allowed. Allowed: {}", allowed_extensions_list())]
    DisallowedExtension { extension: String },

    #[error("Failed to save file: {0}")]
    Storage(#[from] io::Error),
}

/// Request-level rejections raised by the web adapters before the processor runs.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("No files provided")]
    NoFiles,

    #[error("No valid files to upload")]
    NoValidFiles,

    #[error("Failed to read upload: {0}")]
    Multipart(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_error_messages() {
        assert_eq!(UploadError::InvalidFilename.to_string(), "Invalid filename");
        assert_eq!(
            UploadError::DisallowedExtension { extension: "exe".into() }.to_string(),
            "File type not allowed. Allowed: jpg, jpeg, png, gif, webp, svg, ico, bmp, css, html, htm"
        );
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "permission denied");
        assert_eq!(
            UploadError::from(io_err).to_string(),
            "Failed to save file: permission denied"
        );
    }

    #[test]
    fn request_error_messages() {
        assert_eq!(RequestError::NoFiles.to_string(), "No files provided");
        assert_eq!(RequestError::NoValidFiles.to_string(), "No valid files to upload");
    }
}
