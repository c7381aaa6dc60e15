//! Core domain library for the pastebin client (type registry, models, settings).

/// Client settings loaded from the environment.
pub mod config;
/// Shared constants.
pub mod constants;
/// Document type registry and classification.
pub mod doctype;
/// Environment access helpers.
pub mod env;
/// Wire models for pastes, documents, config and API errors.
pub mod models;
/// Text normalization helpers.
pub mod text;

pub use config::ClientSettings;
pub use constants::*;
pub use doctype::{Classifiable, Detection, TypeEntry, DEFAULT_MIME};
pub use models::{ApiError, Config, Document, DocumentRef, NewDocument, Paste, PasteEnvelope};
