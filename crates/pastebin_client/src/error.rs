//! Client error taxonomy.
use pastebin_core::ApiError;
use thiserror::Error;

/// Every failure the API client can surface.
///
/// Callers match on the variant: `Response` means the backend explicitly
/// rejected the request, everything else failed locally, in transit, or while
/// decoding.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Not found")]
    NotFound,

    /// Non-success API status with a structured error body.
    #[error("{error}")]
    Response { status: u16, error: ApiError },

    #[error("Upload Failed: {0}")]
    Upload(String),

    /// Non-success status from the CDN, which answers with plain text.
    #[error("CDN request failed ({status}): {body}")]
    Cdn { status: u16, body: String },

    #[error("{0}")]
    Malformed(#[from] MalformedResponse),

    #[error("Request error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// `true` when the backend answered with a structured error body.
    pub fn is_response_error(&self) -> bool {
        matches!(self, ClientError::Response { .. })
    }

    /// HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Response { status, .. } | ClientError::Cdn { status, .. } => Some(*status),
            ClientError::Malformed(MalformedResponse::InvalidErrorBody { status, .. }) => {
                Some(*status)
            }
            _ => None,
        }
    }
}

/// A response whose shape does not match the protocol.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedResponse {
    #[error("no content type")]
    MissingContentType,

    #[error("unknown content type: {0}")]
    UnknownContentType(String),

    #[error("invalid multipart body: {0}")]
    InvalidMultipart(String),

    #[error("multipart response has no payload part")]
    MissingPayload,

    #[error("invalid payload part: {0}")]
    InvalidPayload(String),

    #[error("multipart response has no part for document {0}")]
    MissingDocumentPart(String),

    #[error("part '{0}' is not text")]
    NonTextPart(String),

    #[error("invalid JSON body: {0}")]
    InvalidJson(String),

    /// Error status whose body is not an API error object.
    #[error("unexpected error body (status {status}): {message}")]
    InvalidErrorBody { status: u16, message: String },
}
