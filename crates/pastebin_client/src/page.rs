//! Page loaders: fetch what a page needs and turn failures into page errors.

use crate::client::PasteClient;
use crate::error::ClientError;
use pastebin_core::doctype::highlighter_for;
use pastebin_core::text::is_snowflake;
use pastebin_core::{Config, Document, Paste};
use serde::Serialize;
use thiserror::Error;

const PASTE_NOT_FOUND: &str = "Paste Not Found.";
const PASTE_NOT_FOUND_TRACE: &str = "The paste provided could not be found.";
const INVALID_SNOWFLAKE: &str = "Invalid snowflake received.";
const INVALID_SNOWFLAKE_TRACE: &str =
    "The snowflake provided contains invalid characters or is too short.";

/// Status used for failures that are not an explicit backend rejection.
pub const UNEXPECTED_ERROR_STATUS: u16 = 501;

/// User-facing error state for a page, coded with an HTTP status.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{status}: {message}")]
pub struct PageError {
    pub status: u16,
    pub message: String,
    pub trace: Option<String>,
    /// Unix seconds, only for errors reported by the backend.
    pub timestamp: Option<i64>,
    pub paste_id: Option<String>,
}

impl PageError {
    /// Map a client error onto a page error.
    ///
    /// Backend rejections keep their status, trace and timestamp. A missing
    /// resource is a 404. Anything else is reported as
    /// [`UNEXPECTED_ERROR_STATUS`] with the error's message.
    pub fn from_client_error(err: &ClientError, paste_id: Option<&str>) -> Self {
        let paste_id = paste_id.map(str::to_string);
        match err {
            ClientError::Response { status, error } => Self {
                status: *status,
                message: err.to_string(),
                trace: error.trace.clone(),
                timestamp: Some(error.timestamp),
                paste_id,
            },
            ClientError::NotFound => Self::not_found(paste_id),
            other => Self {
                status: UNEXPECTED_ERROR_STATUS,
                message: other.to_string(),
                trace: None,
                timestamp: None,
                paste_id,
            },
        }
    }

    pub fn not_found(paste_id: Option<String>) -> Self {
        Self {
            status: 404,
            message: PASTE_NOT_FOUND.to_string(),
            trace: Some(PASTE_NOT_FOUND_TRACE.to_string()),
            timestamp: None,
            paste_id,
        }
    }

    pub fn invalid_snowflake(paste_id: &str) -> Self {
        Self {
            status: 400,
            message: INVALID_SNOWFLAKE.to_string(),
            trace: Some(INVALID_SNOWFLAKE_TRACE.to_string()),
            timestamp: None,
            paste_id: Some(paste_id.to_string()),
        }
    }
}

/// Data for the paste creation page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewPageData {
    pub config: Config,
}

/// Data for the paste view page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PastePageData {
    pub paste: Paste,
}

impl PastePageData {
    /// Each document paired with the highlighter used to render it.
    pub fn highlighted(&self) -> impl Iterator<Item = (&Document, &'static str)> + '_ {
        self.paste
            .documents
            .iter()
            .map(|document| (document, highlighter_for(document)))
    }
}

/// Load the creation page: the backend's defaults and limits.
pub async fn load_new_page(client: &PasteClient) -> Result<NewPageData, PageError> {
    let config = client
        .fetch_config()
        .await
        .map_err(|err| PageError::from_client_error(&err, None))?;
    Ok(NewPageData { config })
}

/// Load a paste for viewing.
///
/// Validates `id`, fetches the paste metadata, then fetches every document's
/// content from the CDN one at a time, in order.
///
/// # Errors
/// A [`PageError`] for an invalid id (400), a missing paste (404), or the first
/// failing request. Content failures carry the failing document's paste id.
pub async fn load_paste_page(client: &PasteClient, id: &str) -> Result<PastePageData, PageError> {
    if !is_snowflake(id) {
        return Err(PageError::invalid_snowflake(id));
    }

    let envelope = client
        .fetch_paste_metadata(id)
        .await
        .map_err(|err| PageError::from_client_error(&err, Some(id)))?
        .ok_or_else(|| PageError::not_found(Some(id.to_string())))?;

    let mut contents = Vec::with_capacity(envelope.documents.len());
    for document in &envelope.documents {
        let content = client
            .fetch_document_content(document)
            .await
            .map_err(|err| PageError::from_client_error(&err, Some(&document.paste_id)))?;
        contents.push(content);
    }

    tracing::debug!(paste_id = id, documents = contents.len(), "paste page loaded");
    Ok(PastePageData {
        paste: envelope.attach_contents(contents),
    })
}
