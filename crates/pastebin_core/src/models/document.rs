//! Document models: stored documents, content-less references and drafts.

use crate::doctype::{self, Classifiable, TypeEntry, DEFAULT_DISPLAY_ID};
use serde::{Deserialize, Serialize};

/// A fully materialized document belonging to a paste.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    #[serde(alias = "pasteId")]
    pub paste_id: String,
    /// MIME type assigned by the backend.
    #[serde(rename = "type")]
    pub content_type: String,
    pub name: String,
    pub content: String,
}

/// Document metadata without content.
///
/// Returned in multipart `payload` envelopes and metadata-only fetches; the
/// content is delivered separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRef {
    pub id: String,
    #[serde(alias = "pasteId")]
    pub paste_id: String,
    #[serde(rename = "type")]
    pub content_type: String,
    pub name: String,
}

impl DocumentRef {
    /// Attach `content` and produce a full [`Document`].
    pub fn with_content(self, content: String) -> Document {
        Document {
            id: self.id,
            paste_id: self.paste_id,
            content_type: self.content_type,
            name: self.name,
            content,
        }
    }
}

impl From<&Document> for DocumentRef {
    fn from(value: &Document) -> Self {
        Self {
            id: value.id.clone(),
            paste_id: value.paste_id.clone(),
            content_type: value.content_type.clone(),
            name: value.name.clone(),
        }
    }
}

/// A document being authored locally, before upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDocument {
    /// Local identifier used to name the upload part. Not a snowflake.
    pub id: u64,
    /// When set, renaming the document no longer re-detects `type_name`.
    pub override_type: bool,
    /// Display id (or MIME) picked for this document.
    pub type_name: String,
    pub name: String,
    pub content: String,
}

impl NewDocument {
    /// Create a draft with a random local id and a type detected from `name`.
    ///
    /// # Returns
    /// A [`NewDocument`] whose type is the display id matching `name`, or
    /// [`DEFAULT_DISPLAY_ID`] when nothing matches.
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: u64::from(rand::random::<u32>()),
            override_type: false,
            type_name: detect_display_id(&name),
            name,
            content: content.into(),
        }
    }

    /// Rename the draft, re-detecting its type unless it was overridden.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
        if !self.override_type {
            self.type_name = detect_display_id(&self.name);
        }
    }

    /// Pin the type explicitly. Later renames keep it.
    pub fn set_type(&mut self, type_name: impl Into<String>) {
        self.type_name = type_name.into();
        self.override_type = true;
    }

    /// MIME sent for this document's upload part.
    pub fn upload_mime(&self) -> &'static str {
        doctype::resolve_mime_for_upload(&self.type_name)
    }

    /// Registry entry for the picked type.
    ///
    /// The display id wins outright; entries sharing a MIME (`C`/`C++`) would
    /// otherwise collapse onto the first one.
    pub fn type_entry(&self) -> Option<&'static TypeEntry> {
        doctype::lookup_by_display_id(&self.type_name)
            .or_else(|| doctype::lookup_by_document(self))
    }
}

fn detect_display_id(name: &str) -> String {
    doctype::display_id_for_filename(name)
        .unwrap_or(DEFAULT_DISPLAY_ID)
        .to_string()
}

impl Classifiable for Document {
    fn declared_type(&self) -> &str {
        &self.content_type
    }

    fn file_name(&self) -> &str {
        &self.name
    }
}

impl Classifiable for DocumentRef {
    fn declared_type(&self) -> &str {
        &self.content_type
    }

    fn file_name(&self) -> &str {
        &self.name
    }
}

impl Classifiable for NewDocument {
    fn declared_type(&self) -> &str {
        self.upload_mime()
    }

    fn file_name(&self) -> &str {
        &self.name
    }
}
