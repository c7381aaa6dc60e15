//! Response decoding for plain JSON and multipart paste responses.

use crate::error::{ClientError, MalformedResponse};
use bytes::Bytes;
use pastebin_core::{ApiError, Paste, PasteEnvelope, PAYLOAD_PART_NAME};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::convert::Infallible;

const JSON_MEDIA_TYPE: &str = "application/json";
const MULTIPART_MEDIA_TYPE: &str = "multipart/form-data";

/// Document contents carried inline by a JSON paste body.
///
/// A `?content=false` response omits every `content` field.
#[derive(Debug, Default, Deserialize)]
struct InlineContents {
    #[serde(default)]
    documents: Vec<InlineContent>,
}

#[derive(Debug, Default, Deserialize)]
struct InlineContent {
    #[serde(default)]
    content: Option<String>,
}

/// One part of a multipart body, fully buffered.
#[derive(Debug, Clone)]
pub(crate) struct BodyPart {
    pub name: String,
    pub data: Bytes,
}

/// Media type essence of a `Content-Type` value: lowercase, parameters dropped.
pub fn media_type(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

/// Decode a successful paste response.
///
/// JSON bodies are the paste itself; documents without a `content` field get
/// empty content. Multipart bodies carry a JSON `payload` part listing the
/// documents, plus one text part per document named by the document id.
///
/// # Arguments
/// - `content_type`: Raw `Content-Type` header value, if present.
/// - `body`: Full response body.
///
/// # Returns
/// The decoded [`Paste`] with every document's content attached.
///
/// # Errors
/// Returns [`ClientError::Malformed`] when the header is missing or unknown, or
/// when the body does not match the announced shape.
pub async fn decode_paste_response(
    content_type: Option<&str>,
    body: Bytes,
) -> Result<Paste, ClientError> {
    let content_type = content_type.ok_or(MalformedResponse::MissingContentType)?;
    match media_type(content_type).as_str() {
        JSON_MEDIA_TYPE => Ok(decode_json_paste(&body)?),
        MULTIPART_MEDIA_TYPE => {
            let parts = read_parts(content_type, body).await?;
            Ok(assemble_paste(parts)?)
        }
        other => Err(MalformedResponse::UnknownContentType(other.to_string()).into()),
    }
}

/// Parse a JSON body into `T`.
pub(crate) fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, MalformedResponse> {
    serde_json::from_slice(body).map_err(|err| MalformedResponse::InvalidJson(err.to_string()))
}

fn decode_json_paste(body: &[u8]) -> Result<Paste, MalformedResponse> {
    let envelope: PasteEnvelope = decode_json(body)?;
    let inline: InlineContents = decode_json(body)?;
    let contents = inline
        .documents
        .into_iter()
        .map(|document| document.content.unwrap_or_default());
    Ok(envelope.attach_contents(contents))
}

/// Build the error for a non-success API status from its body.
pub(crate) fn response_error(status: u16, body: &[u8]) -> ClientError {
    match serde_json::from_slice::<ApiError>(body) {
        Ok(error) => {
            tracing::warn!(
                status,
                reason = %error.reason,
                trace = ?error.trace,
                "backend api error"
            );
            ClientError::Response { status, error }
        }
        Err(err) => MalformedResponse::InvalidErrorBody {
            status,
            message: err.to_string(),
        }
        .into(),
    }
}

pub(crate) async fn read_parts(
    content_type: &str,
    body: Bytes,
) -> Result<Vec<BodyPart>, MalformedResponse> {
    let boundary = multer::parse_boundary(content_type)
        .map_err(|err| MalformedResponse::InvalidMultipart(err.to_string()))?;
    let stream = futures_util::stream::once(async move { Ok::<Bytes, Infallible>(body) });
    let mut multipart = multer::Multipart::new(stream, boundary);

    let mut parts = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| MalformedResponse::InvalidMultipart(err.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|err| MalformedResponse::InvalidMultipart(err.to_string()))?;
        parts.push(BodyPart { name, data });
    }
    Ok(parts)
}

fn find_part<'a>(parts: &'a [BodyPart], name: &str) -> Option<&'a BodyPart> {
    parts.iter().find(|part| part.name == name)
}

fn part_text(part: &BodyPart) -> Result<String, MalformedResponse> {
    String::from_utf8(part.data.to_vec())
        .map_err(|_| MalformedResponse::NonTextPart(part.name.clone()))
}

fn assemble_paste(parts: Vec<BodyPart>) -> Result<Paste, MalformedResponse> {
    let payload = find_part(&parts, PAYLOAD_PART_NAME).ok_or(MalformedResponse::MissingPayload)?;
    let payload = part_text(payload)?;
    let envelope: PasteEnvelope = serde_json::from_str(&payload)
        .map_err(|err| MalformedResponse::InvalidPayload(err.to_string()))?;

    let mut contents = Vec::with_capacity(envelope.documents.len());
    for document in &envelope.documents {
        let part = find_part(&parts, &document.id)
            .ok_or_else(|| MalformedResponse::MissingDocumentPart(document.id.clone()))?;
        contents.push(part_text(part)?);
    }
    Ok(envelope.attach_contents(contents))
}

#[cfg(test)]
mod tests;
