//! HTTP client for the pastebin backend API and document CDN.
//!
//! Responses come back either as plain JSON or as a multipart body whose
//! `payload` part lists the documents and whose sibling parts carry each
//! document's content. Both shapes decode into the same [`Paste`].
//!
//! [`Paste`]: pastebin_core::Paste

pub mod client;
pub mod decode;
pub mod error;
pub mod page;
mod upload;

pub use client::{endpoint, PasteClient};
pub use decode::{decode_paste_response, media_type};
pub use error::{ClientError, MalformedResponse};
pub use page::{load_new_page, load_paste_page, NewPageData, PageError, PastePageData};
