//! HTTP client for the paste API and document CDN.

use crate::decode::{decode_json, decode_paste_response, response_error};
use crate::error::ClientError;
use crate::upload::upload_form;
use pastebin_core::models::{
    Config, DocumentRef, NewDocument, Paste, PasteEnvelope, UploadSettings,
};
use pastebin_core::{ClientSettings, API_VERSION};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Response, StatusCode, Url};

/// Build `base` + `segments`, percent-encoding each segment.
///
/// Any path already present on `base` is kept as a prefix.
pub fn endpoint(base: &str, segments: &[&str]) -> Result<Url, ClientError> {
    let mut url = Url::parse(base)
        .map_err(|err| ClientError::InvalidUrl(format!("'{}': {}", base, err)))?;
    let mut path = url
        .path_segments_mut()
        .map_err(|_| ClientError::InvalidUrl(format!("'{}' cannot be used as a base", base)))?;
    path.pop_if_empty();
    for segment in segments {
        path.push(segment);
    }
    drop(path);
    Ok(url)
}

/// Stateless client for paste, config and document-content requests.
///
/// Holds no session state between calls; each method issues exactly one
/// request (or one per document for bulk content fetches) and never retries.
#[derive(Debug, Clone)]
pub struct PasteClient {
    http: reqwest::Client,
    settings: ClientSettings,
}

impl PasteClient {
    /// Build a client for `settings`.
    ///
    /// # Errors
    /// Returns [`ClientError::Transport`] when the HTTP client cannot be built.
    pub fn new(settings: ClientSettings) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()?;
        Ok(Self { http, settings })
    }

    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    fn api_url(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let version = format!("v{}", API_VERSION);
        let mut full = Vec::with_capacity(segments.len() + 1);
        full.push(version.as_str());
        full.extend_from_slice(segments);
        endpoint(&self.settings.api_url, &full)
    }

    /// Fetch a paste with its document contents.
    ///
    /// # Returns
    /// `Ok(None)` when the backend answers 404.
    ///
    /// # Errors
    /// [`ClientError::Response`] for any other non-success status, or a
    /// decoding/transport error.
    pub async fn fetch_paste(&self, id: &str) -> Result<Option<Paste>, ClientError> {
        let url = self.api_url(&["pastes", id])?;
        tracing::debug!(paste_id = id, "fetching paste");
        let response = self.http.get(url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = ensure_success(response).await?;
        decode_paste(response).await.map(Some)
    }

    /// Fetch paste metadata only; document contents come from the CDN.
    ///
    /// # Returns
    /// `Ok(None)` when the backend answers 404.
    pub async fn fetch_paste_metadata(
        &self,
        id: &str,
    ) -> Result<Option<PasteEnvelope>, ClientError> {
        let mut url = self.api_url(&["pastes", id])?;
        url.query_pairs_mut().append_pair("content", "false");
        tracing::debug!(paste_id = id, "fetching paste metadata");
        let response = self.http.get(url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = ensure_success(response).await?;
        let body = response.bytes().await?;
        Ok(Some(decode_json(&body)?))
    }

    /// Upload new documents as a paste.
    ///
    /// # Errors
    /// A [`ClientError::Response`] from the backend is returned unchanged.
    /// Every other failure (encoding, transport, decoding) is reported as
    /// [`ClientError::Upload`].
    pub async fn upload_paste(
        &self,
        documents: &[NewDocument],
        settings: &UploadSettings,
    ) -> Result<Paste, ClientError> {
        self.try_upload(documents, settings)
            .await
            .map_err(|err| match err {
                ClientError::Response { .. } | ClientError::Upload(_) => err,
                other => ClientError::Upload(other.to_string()),
            })
    }

    async fn try_upload(
        &self,
        documents: &[NewDocument],
        settings: &UploadSettings,
    ) -> Result<Paste, ClientError> {
        let form = upload_form(documents, settings)?;
        let mut url = self.api_url(&["pastes"])?;
        if let Some(content) = settings.content {
            url.query_pairs_mut()
                .append_pair("content", if content { "true" } else { "false" });
        }
        tracing::debug!(documents = documents.len(), "uploading paste");
        let response = self.http.post(url).multipart(form).send().await?;
        let response = ensure_success(response).await?;
        let paste = decode_paste(response).await?;
        tracing::info!(paste_id = %paste.id, documents = paste.documents.len(), "paste uploaded");
        Ok(paste)
    }

    /// Fetch the backend's defaults and size limits.
    pub async fn fetch_config(&self) -> Result<Config, ClientError> {
        let url = self.api_url(&["config"])?;
        tracing::debug!("fetching config");
        let response = self.http.get(url).send().await?;
        let response = ensure_success(response).await?;
        let body = response.bytes().await?;
        Ok(decode_json(&body)?)
    }

    /// Fetch one document's raw content from the CDN.
    ///
    /// # Errors
    /// [`ClientError::Cdn`] with the status and raw body text on any
    /// non-success status. [`ClientError::Transport`] when the body cannot
    /// be read, including the body of an error status.
    pub async fn fetch_document_content(
        &self,
        document: &DocumentRef,
    ) -> Result<String, ClientError> {
        let url = endpoint(
            &self.settings.cdn_url,
            &[
                "documents",
                document.paste_id.as_str(),
                document.id.as_str(),
                document.name.as_str(),
            ],
        )?;
        tracing::debug!(
            paste_id = %document.paste_id,
            document_id = %document.id,
            "fetching document content"
        );
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(ClientError::Cdn {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.text().await?)
    }

    /// Fetch every document's content, one request at a time, in order.
    ///
    /// Stops at the first failure, so the error always belongs to the
    /// earliest failing document.
    pub async fn fetch_document_contents(
        &self,
        documents: &[DocumentRef],
    ) -> Result<Vec<String>, ClientError> {
        let mut contents = Vec::with_capacity(documents.len());
        for document in documents {
            contents.push(self.fetch_document_content(document).await?);
        }
        Ok(contents)
    }
}

async fn ensure_success(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.bytes().await?;
    Err(response_error(status.as_u16(), &body))
}

async fn decode_paste(response: Response) -> Result<Paste, ClientError> {
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let body = response.bytes().await?;
    decode_paste_response(content_type.as_deref(), body).await
}
