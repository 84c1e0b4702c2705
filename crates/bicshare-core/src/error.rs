//! Error types for bicshare

use thiserror::Error;

/// Main error type for upload wizard operations
#[derive(Error, Debug)]
pub enum UploadError {
    /// Submission was attempted without a dropped character file
    #[error("No character file has been dropped")]
    MissingCharacterFile,

    /// Submission is only reachable from the portrait step
    #[error("Submission is only available from the final wizard step")]
    NotAtFinalStep,

    /// A previous submission has not finished yet
    #[error("An upload is already in progress")]
    SubmissionInFlight,

    /// Transport-level failure while posting the form
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status
    #[error("Upload rejected with status {status}")]
    Rejected { status: u16 },

    /// Endpoint URL could not be parsed
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),
}

/// Result type alias using UploadError
pub type UploadResult<T> = Result<T, UploadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = UploadError::Rejected { status: 413 };
        assert_eq!(format!("{}", err), "Upload rejected with status 413");
    }

    #[test]
    fn test_missing_file_display() {
        let err = UploadError::MissingCharacterFile;
        assert_eq!(err.to_string(), "No character file has been dropped");
    }
}
