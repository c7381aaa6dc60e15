//! Backend-published defaults and size limits.

use super::document::NewDocument;
use super::paste::UploadSettings;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Read-only configuration snapshot served by `GET /config`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub defaults: Defaults,
    pub size_limits: SizeLimits,
}

/// Defaults the new-paste form starts from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defaults {
    pub expiry_hours: Option<u64>,
    pub max_views: Option<u64>,
    pub paste_name: Option<String>,
}

/// Inclusive `[min, max]` bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limit {
    pub min: u64,
    pub max: u64,
}

impl Limit {
    pub fn contains(&self, value: u64) -> bool {
        value >= self.min && value <= self.max
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeLimits {
    /// Paste name length, in characters.
    pub paste_name: Limit,
    pub expiry_hours: Limit,
    pub document_count: Limit,
    /// Per-document content size, in bytes.
    pub document_size: Limit,
    /// Combined content size of all documents, in bytes.
    pub total_size: Limit,
    /// Document name length, in characters.
    pub document_name: Limit,
}

/// First limit a new paste would break.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LimitViolation {
    #[error("paste name length {actual} outside {min}..={max}")]
    PasteName { actual: u64, min: u64, max: u64 },

    #[error("expiry of {actual} hours outside {min}..={max}")]
    ExpiryHours { actual: u64, min: u64, max: u64 },

    #[error("{actual} documents outside {min}..={max}")]
    DocumentCount { actual: u64, min: u64, max: u64 },

    #[error("document '{name}' is {actual} bytes, outside {min}..={max}")]
    DocumentSize {
        name: String,
        actual: u64,
        min: u64,
        max: u64,
    },

    #[error("total size {actual} bytes outside {min}..={max}")]
    TotalSize { actual: u64, min: u64, max: u64 },

    #[error("document name '{name}' length {actual} outside {min}..={max}")]
    DocumentName {
        name: String,
        actual: u64,
        min: u64,
        max: u64,
    },
}

impl SizeLimits {
    /// Validate a paste before upload.
    ///
    /// Checks run in a fixed order (name, expiry, count, then each document in
    /// order, then the total) and stop at the first violation.
    pub fn check(
        &self,
        documents: &[NewDocument],
        settings: &UploadSettings,
    ) -> Result<(), LimitViolation> {
        if let Some(name) = settings.name.as_deref() {
            let actual = char_len(name);
            if !self.paste_name.contains(actual) {
                return Err(LimitViolation::PasteName {
                    actual,
                    min: self.paste_name.min,
                    max: self.paste_name.max,
                });
            }
        }

        if let Some(actual) = settings.expiry_hours {
            if !self.expiry_hours.contains(actual) {
                return Err(LimitViolation::ExpiryHours {
                    actual,
                    min: self.expiry_hours.min,
                    max: self.expiry_hours.max,
                });
            }
        }

        let count = documents.len() as u64;
        if !self.document_count.contains(count) {
            return Err(LimitViolation::DocumentCount {
                actual: count,
                min: self.document_count.min,
                max: self.document_count.max,
            });
        }

        let mut total = 0u64;
        for document in documents {
            let name_len = char_len(&document.name);
            if !self.document_name.contains(name_len) {
                return Err(LimitViolation::DocumentName {
                    name: document.name.clone(),
                    actual: name_len,
                    min: self.document_name.min,
                    max: self.document_name.max,
                });
            }
            let size = document.content.len() as u64;
            if !self.document_size.contains(size) {
                return Err(LimitViolation::DocumentSize {
                    name: document.name.clone(),
                    actual: size,
                    min: self.document_size.min,
                    max: self.document_size.max,
                });
            }
            total = total.saturating_add(size);
        }

        if !self.total_size.contains(total) {
            return Err(LimitViolation::TotalSize {
                actual: total,
                min: self.total_size.min,
                max: self.total_size.max,
            });
        }

        Ok(())
    }
}

fn char_len(value: &str) -> u64 {
    value.chars().count() as u64
}
