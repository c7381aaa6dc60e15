//! In-process fake backend serving the paste API and the document CDN.

#![allow(dead_code)]

use axum::extract::{Multipart, Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{TimeZone, Utc};
use pastebin_client::PasteClient;
use pastebin_core::models::{Defaults, Limit, SizeLimits};
use pastebin_core::{ApiError, ClientSettings, Config, Document, DocumentRef, Paste, PasteEnvelope};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

pub const BOUNDARY: &str = "fake-backend-boundary";
pub const ERROR_TIMESTAMP: i64 = 1_700_000_000;

/// Failure modes the fake backend can be switched into.
#[derive(Debug, Clone, Default)]
pub struct Behavior {
    /// `GET /v1/config` answers 500 with an API error body.
    pub config_error: bool,
    /// `POST /v1/pastes` answers 500 with an API error body.
    pub upload_error: bool,
    /// Paste responses omit the `payload` part.
    pub omit_payload: bool,
    /// CDN answers 404 for these document ids.
    pub missing_documents: Vec<String>,
}

/// One uploaded part as the backend received it.
#[derive(Debug, Clone)]
pub struct ReceivedPart {
    pub name: String,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub content: String,
}

#[derive(Debug, Deserialize)]
struct UploadPayload {
    name: Option<String>,
    expiry_hours: Option<u64>,
    max_views: Option<u64>,
    documents: Vec<UploadDocument>,
}

#[derive(Debug, Deserialize)]
struct UploadDocument {
    id: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct ContentQuery {
    content: Option<bool>,
}

struct BackendState {
    behavior: Behavior,
    pastes: Mutex<HashMap<String, Paste>>,
    received: Mutex<Vec<ReceivedPart>>,
    next_id: AtomicU64,
}

impl BackendState {
    fn snowflake(&self) -> String {
        self.next_id.fetch_add(1, Ordering::SeqCst).to_string()
    }
}

pub struct FakeBackend {
    pub base_url: String,
    state: Arc<BackendState>,
}

impl FakeBackend {
    pub async fn start() -> Self {
        Self::start_with(Behavior::default()).await
    }

    pub async fn start_with(behavior: Behavior) -> Self {
        let state = Arc::new(BackendState {
            behavior,
            pastes: Mutex::new(HashMap::new()),
            received: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1_200_000_000_000),
        });
        let app = Router::new()
            .route("/v1/config", get(config))
            .route("/v1/pastes", post(create_paste))
            .route("/v1/pastes/:id", get(fetch_paste))
            .route(
                "/cdn/documents/:paste_id/:document_id/:name",
                get(document_content),
            )
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind fake backend");
        let addr = listener.local_addr().expect("fake backend addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve fake backend");
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    pub fn settings(&self) -> ClientSettings {
        ClientSettings::new(&self.base_url, &format!("{}/cdn/", self.base_url))
    }

    pub fn client(&self) -> PasteClient {
        PasteClient::new(self.settings()).expect("build client")
    }

    /// Store a paste with the given documents as `(name, mime, content)`.
    pub fn insert_paste(&self, documents: &[(&str, &str, &str)]) -> Paste {
        let id = self.state.snowflake();
        let documents = documents
            .iter()
            .map(|(name, mime, content)| Document {
                id: self.state.snowflake(),
                paste_id: id.clone(),
                content_type: mime.to_string(),
                name: name.to_string(),
                content: content.to_string(),
            })
            .collect();
        let paste = Paste {
            id: id.clone(),
            name: Some("seeded".to_string()),
            token: None,
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).single(),
            edited: None,
            expires_at: None,
            views: 3,
            max_views: None,
            documents,
        };
        self.state
            .pastes
            .lock()
            .expect("pastes lock")
            .insert(id, paste.clone());
        paste
    }

    pub fn received_parts(&self) -> Vec<ReceivedPart> {
        self.state.received.lock().expect("received lock").clone()
    }
}

pub fn sample_config() -> Config {
    let limit = |min, max| Limit { min, max };
    Config {
        defaults: Defaults {
            expiry_hours: Some(24),
            max_views: None,
            paste_name: None,
        },
        size_limits: SizeLimits {
            paste_name: limit(1, 32),
            expiry_hours: limit(1, 720),
            document_count: limit(1, 10),
            document_size: limit(1, 1_000_000),
            total_size: limit(1, 5_000_000),
            document_name: limit(1, 64),
        },
    }
}

fn api_error(status: StatusCode, reason: &str) -> Response {
    let body = ApiError {
        reason: reason.to_string(),
        trace: Some("fake backend".to_string()),
        timestamp: ERROR_TIMESTAMP,
    };
    (status, Json(body)).into_response()
}

fn envelope(paste: &Paste) -> PasteEnvelope {
    PasteEnvelope {
        id: paste.id.clone(),
        name: paste.name.clone(),
        token: paste.token.clone(),
        created_at: paste.created_at,
        edited: paste.edited,
        expires_at: paste.expires_at,
        views: paste.views,
        max_views: paste.max_views,
        documents: paste.documents.iter().map(DocumentRef::from).collect(),
    }
}

fn multipart_paste(paste: &Paste, omit_payload: bool) -> Response {
    let mut body = String::new();
    let mut push_part = |name: &str, file_name: Option<&str>, mime: &str, data: &str| {
        body.push_str(&format!("--{}\r\n", BOUNDARY));
        match file_name {
            Some(file_name) => body.push_str(&format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                name, file_name
            )),
            None => body.push_str(&format!(
                "Content-Disposition: form-data; name=\"{}\"\r\n",
                name
            )),
        }
        body.push_str(&format!("Content-Type: {}\r\n\r\n", mime));
        body.push_str(data);
        body.push_str("\r\n");
    };

    if !omit_payload {
        let payload = serde_json::to_string(&envelope(paste)).expect("encode envelope");
        push_part("payload", None, "application/json", &payload);
    }
    for document in &paste.documents {
        push_part(
            &document.id,
            Some(&document.name),
            &document.content_type,
            &document.content,
        );
    }
    body.push_str(&format!("--{}--\r\n", BOUNDARY));

    (
        [(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )],
        body,
    )
        .into_response()
}

async fn config(State(state): State<Arc<BackendState>>) -> Response {
    if state.behavior.config_error {
        return api_error(StatusCode::INTERNAL_SERVER_ERROR, "db down");
    }
    Json(sample_config()).into_response()
}

async fn fetch_paste(
    State(state): State<Arc<BackendState>>,
    Path(id): Path<String>,
    Query(query): Query<ContentQuery>,
) -> Response {
    let paste = state.pastes.lock().expect("pastes lock").get(&id).cloned();
    let Some(paste) = paste else {
        return api_error(StatusCode::NOT_FOUND, "paste not found");
    };
    if query.content == Some(false) {
        return Json(envelope(&paste)).into_response();
    }
    multipart_paste(&paste, state.behavior.omit_payload)
}

async fn create_paste(
    State(state): State<Arc<BackendState>>,
    Query(query): Query<ContentQuery>,
    mut multipart: Multipart,
) -> Response {
    if state.behavior.upload_error {
        return api_error(StatusCode::INTERNAL_SERVER_ERROR, "upload rejected");
    }

    let mut payload: Option<UploadPayload> = None;
    let mut parts = HashMap::new();
    while let Some(field) = multipart.next_field().await.expect("next field") {
        let part = ReceivedPart {
            name: field.name().unwrap_or_default().to_string(),
            file_name: field.file_name().map(str::to_string),
            content_type: field.content_type().map(str::to_string),
            content: field.text().await.expect("field text"),
        };
        if part.name == "payload" {
            payload = Some(serde_json::from_str(&part.content).expect("decode payload"));
        } else {
            parts.insert(part.name.clone(), part.clone());
        }
        state.received.lock().expect("received lock").push(part);
    }
    let Some(payload) = payload else {
        return api_error(StatusCode::BAD_REQUEST, "missing payload");
    };

    let id = state.snowflake();
    let mut documents = Vec::with_capacity(payload.documents.len());
    for document in &payload.documents {
        let Some(part) = parts.get(&document.id) else {
            return api_error(StatusCode::BAD_REQUEST, "missing document part");
        };
        documents.push(Document {
            id: state.snowflake(),
            paste_id: id.clone(),
            content_type: part
                .content_type
                .clone()
                .unwrap_or_else(|| "text/plain".to_string()),
            name: document.name.clone(),
            content: part.content.clone(),
        });
    }
    let paste = Paste {
        id: id.clone(),
        name: payload.name,
        token: Some("edit-token".to_string()),
        created_at: Some(Utc::now()),
        edited: None,
        expires_at: None,
        views: 0,
        max_views: payload.max_views,
        documents,
    };
    state
        .pastes
        .lock()
        .expect("pastes lock")
        .insert(id, paste.clone());

    // `content=false` gets the plain JSON shape without document contents.
    if query.content == Some(false) {
        return Json(envelope(&paste)).into_response();
    }
    multipart_paste(&paste, state.behavior.omit_payload)
}

async fn document_content(
    State(state): State<Arc<BackendState>>,
    Path((paste_id, document_id, name)): Path<(String, String, String)>,
) -> Response {
    if state.behavior.missing_documents.contains(&document_id) {
        return (StatusCode::NOT_FOUND, "document missing").into_response();
    }
    let pastes = state.pastes.lock().expect("pastes lock");
    let document = pastes.get(&paste_id).and_then(|paste| {
        paste
            .documents
            .iter()
            .find(|document| document.id == document_id && document.name == name)
    });
    match document {
        Some(document) => document.content.clone().into_response(),
        None => (StatusCode::NOT_FOUND, "document missing").into_response(),
    }
}
