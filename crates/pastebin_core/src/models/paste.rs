//! Paste view models and upload settings.

use super::document::{Document, DocumentRef};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A paste as returned by the backend, with document contents attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paste {
    pub id: String,
    pub name: Option<String>,
    /// Edit token; only present on the response to a create request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(rename = "timestamp", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "edited_timestamp", alias = "edited", default)]
    pub edited: Option<Edited>,
    #[serde(rename = "expiry_timestamp", default)]
    pub expires_at: Option<DateTime<Utc>>,
    pub views: u64,
    pub max_views: Option<u64>,
    /// Render order. Not guaranteed to be stable across edits.
    pub documents: Vec<Document>,
}

/// Edit state as reported by the backend.
///
/// Newer backends send the edit time; older ones only send a flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Edited {
    At(DateTime<Utc>),
    Flag(bool),
}

impl Edited {
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            Edited::At(at) => Some(*at),
            Edited::Flag(_) => None,
        }
    }

    pub fn is_edited(&self) -> bool {
        match self {
            Edited::At(_) => true,
            Edited::Flag(flag) => *flag,
        }
    }
}

/// Paste metadata whose documents carry no content.
///
/// This is the JSON `payload` part of a multipart response, and the body of a
/// metadata-only fetch. Only `id` and `documents` are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PasteEnvelope {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(rename = "timestamp", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "edited_timestamp", alias = "edited", default)]
    pub edited: Option<Edited>,
    #[serde(rename = "expiry_timestamp", default)]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub max_views: Option<u64>,
    pub documents: Vec<DocumentRef>,
}

impl PasteEnvelope {
    /// Pair every listed document with its content, in order.
    ///
    /// `contents` must yield exactly one entry per document; a shorter
    /// iterator leaves the remaining documents out.
    pub fn attach_contents<I>(self, contents: I) -> Paste
    where
        I: IntoIterator<Item = String>,
    {
        let documents = self
            .documents
            .into_iter()
            .zip(contents)
            .map(|(document, content)| document.with_content(content))
            .collect();
        Paste {
            id: self.id,
            name: self.name,
            token: self.token,
            created_at: self.created_at,
            edited: self.edited,
            expires_at: self.expires_at,
            views: self.views,
            max_views: self.max_views,
            documents,
        }
    }
}

impl Paste {
    pub fn is_edited(&self) -> bool {
        self.edited.is_some_and(|edited| edited.is_edited())
    }

    /// Total content size of all documents, in bytes.
    pub fn content_len(&self) -> usize {
        self.documents.iter().map(|doc| doc.content.len()).sum()
    }
}

/// Settings sent alongside documents when creating a paste.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadSettings {
    pub name: Option<String>,
    pub expiry_hours: Option<u64>,
    pub max_views: Option<u64>,
    /// Ask the backend to include document contents in the response.
    pub content: Option<bool>,
}
