//! Shared API types: the error taxonomy and the `FunctionsApi` trait.

use crate::model::FunctionRecord;

// =============================================================================
// ERRORS
// =============================================================================

/// Transport and status failures from the functions API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    ClientBuild(String),

    /// The request never produced a response (connect, timeout, I/O).
    #[error("API request failed: {0}")]
    Request(String),

    /// The server answered with a non-2xx status. The body is kept for logs only.
    #[error("API response error: status {status}")]
    Status { status: u16, body: String },

    /// A 2xx response body could not be decoded.
    #[error("API response parse failed: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status for [`ApiError::Status`], `None` for transport failures.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::ClientBuild(_) | Self::Request(_) | Self::Decode(_) => None,
        }
    }
}

// =============================================================================
// FUNCTIONS API TRAIT
// =============================================================================

/// The five REST calls against `/api/functions`. Enables mocking in tests.
#[async_trait::async_trait]
pub trait FunctionsApi: Send + Sync {
    /// `GET /api/functions`
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-2xx status, or an undecodable body.
    async fn list(&self) -> Result<Vec<FunctionRecord>, ApiError>;

    /// `GET /api/functions/{id}`
    ///
    /// # Errors
    ///
    /// As for [`FunctionsApi::list`].
    async fn get(&self, id: &str) -> Result<FunctionRecord, ApiError>;

    /// `POST /api/functions` with the full record, client-assigned `id` included.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure or non-2xx status.
    async fn create(&self, record: &FunctionRecord) -> Result<(), ApiError>;

    /// `PUT /api/functions/{id}` with the full record.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure or non-2xx status.
    async fn update(&self, id: &str, record: &FunctionRecord) -> Result<(), ApiError>;

    /// `DELETE /api/functions/{id}`
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure or non-2xx status.
    async fn delete(&self, id: &str) -> Result<(), ApiError>;
}
