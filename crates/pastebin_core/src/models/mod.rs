//! Wire models shared by the API client and its callers.

pub mod api_error;
pub mod config;
pub mod document;
pub mod paste;


pub use api_error::ApiError;
pub use config::{Config, Defaults, Limit, LimitViolation, SizeLimits};
pub use document::{Document, DocumentRef, NewDocument};
pub use paste::{Edited, Paste, PasteEnvelope, UploadSettings};
