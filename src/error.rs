use crate::importer::{HostError, ImportError};
use crate::sheets::link::LinkError;
use crate::sheets::range::RangeError;
use crate::sheets::ApiError;
use thiserror::Error;

/// Main error type for the importer crate.
/// Aggregates errors from the core transforms, the remote service boundary,
/// and the import flow.
#[derive(Error, Debug)]
pub enum ImporterError {
    #[error("{0}")]
    LinkError(#[from] LinkError),

    #[error("{0}")]
    RangeError(#[from] RangeError),

    #[error("{0}")]
    ApiError(#[from] ApiError),

    #[error("{0}")]
    ImportError(#[from] ImportError),

    #[error("{0}")]
    HostError(#[from] HostError),
}

impl ImporterError {
    /// The one user-facing message for this failure. Every failure kind maps
    /// to a single message, so the UI never has to inspect the error itself.
    pub fn user_message(&self) -> &'static str {
        match self {
            ImporterError::LinkError(LinkError::MalformedLink(_))
            | ImporterError::ApiError(ApiError::NotFound) => {
                "Please enter a valid Google Sheets link and make sure that the sheet is public."
            }
            ImporterError::RangeError(RangeError::MalformedRange(_))
            | ImporterError::ApiError(ApiError::InvalidRange) => {
                "Please enter a valid range. E.g. A1:C6."
            }
            ImporterError::ApiError(ApiError::Api(_)) => {
                "An unknown Google Sheets error occurred. Please try again."
            }
            ImporterError::ImportError(ImportError::MissingRange) => {
                "Please enter a range or choose \"All values\"."
            }
            ImporterError::ImportError(ImportError::EmptyRange) => {
                "Please enter a different range: the given range contains no values."
            }
            ImporterError::ImportError(ImportError::NoColumns) => {
                "Please choose at least one column."
            }
            ImporterError::HostError(_) => {
                "Something went wrong when creating a table. Try again with different data or after refreshing the page."
            }
        }
    }
}
