//! Error taxonomy for the shortening and redirect workflows.

use crate::domain::generator::GeneratorError;
use crate::domain::repositories::StorageError;

/// Failure of a [`crate::application::services::LinkService`] operation.
///
/// Every variant keeps its tag through to the HTTP boundary, which maps
/// [`ShortenError::InvalidInput`] to 400, [`ShortenError::NotFound`] to 404
/// and everything else to 500.
#[derive(Debug, thiserror::Error)]
pub enum ShortenError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("random source failure")]
    RandomSource(#[source] GeneratorError),

    #[error("uniqueness check failed")]
    Validation(#[source] StorageError),

    #[error("no unique short code found after {attempts} attempts")]
    ExhaustedRetries { attempts: u32 },

    #[error("failed to store URL mapping")]
    StorageWrite(#[source] StorageError),

    #[error("failed to read URL mapping")]
    StorageRead(#[source] StorageError),

    #[error("short code `{0}` not found")]
    NotFound(String),
}

impl ShortenError {
    /// Stable machine-readable tag for logs and error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            ShortenError::InvalidInput(_) => "invalid_input",
            ShortenError::RandomSource(_) => "random_source_error",
            ShortenError::Validation(_) => "validation_error",
            ShortenError::ExhaustedRetries { .. } => "exhausted_retries",
            ShortenError::StorageWrite(_) => "storage_write_error",
            ShortenError::StorageRead(_) => "storage_read_error",
            ShortenError::NotFound(_) => "not_found",
        }
    }
}
