//! Multipart request encoding for paste uploads.

use crate::error::ClientError;
use pastebin_core::models::{NewDocument, UploadSettings};
use pastebin_core::PAYLOAD_PART_NAME;
use reqwest::multipart::{Form, Part};
use serde::Serialize;
use std::collections::HashSet;

/// JSON body of the `payload` part.
#[derive(Debug, Serialize)]
pub(crate) struct UploadPayload<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_hours: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_views: Option<u64>,
    pub documents: Vec<UploadDocument<'a>>,
}

/// Per-document metadata; `id` names the file part carrying the content.
#[derive(Debug, Serialize)]
pub(crate) struct UploadDocument<'a> {
    pub id: String,
    pub name: &'a str,
}

/// Build the `payload` JSON for `documents`.
///
/// # Errors
/// Returns [`ClientError::Upload`] when two documents share a local id, since
/// their parts would collide.
pub(crate) fn upload_payload<'a>(
    documents: &'a [NewDocument],
    settings: &'a UploadSettings,
) -> Result<UploadPayload<'a>, ClientError> {
    let mut seen = HashSet::with_capacity(documents.len());
    let mut entries = Vec::with_capacity(documents.len());
    for document in documents {
        if !seen.insert(document.id) {
            return Err(ClientError::Upload(format!(
                "duplicate document id {}",
                document.id
            )));
        }
        entries.push(UploadDocument {
            id: document.id.to_string(),
            name: &document.name,
        });
    }
    Ok(UploadPayload {
        name: settings.name.as_deref(),
        expiry_hours: settings.expiry_hours,
        max_views: settings.max_views,
        documents: entries,
    })
}

/// Build the multipart form: one `payload` part, then one part per document.
///
/// Each document part is named by the document's local id, carries the
/// document name as its file name, and is typed with the MIME resolved from
/// the document's type.
pub(crate) fn upload_form(
    documents: &[NewDocument],
    settings: &UploadSettings,
) -> Result<Form, ClientError> {
    let payload = upload_payload(documents, settings)?;
    let payload = serde_json::to_string(&payload)
        .map_err(|err| ClientError::Upload(format!("payload encoding error: {}", err)))?;

    let mut form = Form::new().part(
        PAYLOAD_PART_NAME,
        Part::text(payload).mime_str("application/json")?,
    );
    for document in documents {
        let part = Part::bytes(document.content.clone().into_bytes())
            .file_name(document.name.clone())
            .mime_str(document.upload_mime())?;
        form = form.part(document.id.to_string(), part);
    }
    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::upload_payload;
    use crate::error::ClientError;
    use pastebin_core::models::{NewDocument, UploadSettings};

    #[test]
    fn payload_lists_documents_by_local_id() {
        let mut main = NewDocument::new("main.c", "int main(){}");
        main.id = 41;
        let mut notes = NewDocument::new("notes.txt", "hello");
        notes.id = 42;
        let settings = UploadSettings {
            name: Some("demo".to_string()),
            expiry_hours: Some(24),
            ..UploadSettings::default()
        };

        let documents = [main, notes];
        let payload = upload_payload(&documents, &settings).expect("payload");
        let value = serde_json::to_value(&payload).expect("payload json");

        assert_eq!(
            value,
            serde_json::json!({
                "name": "demo",
                "expiry_hours": 24,
                "documents": [
                    {"id": "41", "name": "main.c"},
                    {"id": "42", "name": "notes.txt"}
                ]
            })
        );
    }

    #[test]
    fn payload_rejects_duplicate_ids() {
        let mut first = NewDocument::new("a.txt", "a");
        first.id = 7;
        let mut second = NewDocument::new("b.txt", "b");
        second.id = 7;

        let documents = [first, second];
        let settings = UploadSettings::default();
        match upload_payload(&documents, &settings) {
            Err(ClientError::Upload(message)) => assert!(message.contains("duplicate")),
            other => panic!("expected upload error, got {other:?}"),
        }
    }
}
