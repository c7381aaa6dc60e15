//! Decoder tests for JSON, multipart and error bodies.

use super::*;
use serde_json::json;

const BOUNDARY: &str = "X-PASTE-BOUNDARY";
const MULTIPART: Option<&str> = Some("multipart/form-data; boundary=X-PASTE-BOUNDARY");

type RawPart<'a> = (&'a str, &'a str, &'a [u8]);

fn part<'a>(name: &'a str, content_type: &'a str, data: &'a [u8]) -> RawPart<'a> {
    (name, content_type, data)
}

fn multipart_body(parts: &[RawPart<'_>]) -> Bytes {
    let mut body = Vec::new();
    for (name, content_type, data) in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{name}\"\r\n").as_bytes(),
        );
        body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    Bytes::from(body)
}

fn envelope_json() -> String {
    json!({
        "id": "1234567890123",
        "name": "demo",
        "timestamp": "2024-05-01T12:00:00Z",
        "edited": null,
        "views": 0,
        "max_views": null,
        "documents": [
            {"id": "1111111111", "paste_id": "1234567890123", "type": "text/x-c", "name": "main.c"},
            {"id": "2222222222", "paste_id": "1234567890123", "type": "text/plain", "name": "notes.txt"}
        ]
    })
    .to_string()
}

fn malformed(result: Result<Paste, ClientError>) -> MalformedResponse {
    match result {
        Err(ClientError::Malformed(err)) => err,
        other => panic!("expected malformed response, got {other:?}"),
    }
}

#[test]
fn media_type_matrix() {
    let cases = [
        ("application/json", "application/json"),
        ("application/json; charset=utf-8", "application/json"),
        ("Multipart/Form-Data; boundary=abc", "multipart/form-data"),
        ("  text/plain  ", "text/plain"),
        ("", ""),
    ];
    for (input, expected) in cases {
        assert_eq!(media_type(input), expected, "input: {input}");
    }
}

#[tokio::test]
async fn decodes_multipart_paste_in_payload_order() {
    let payload = envelope_json();
    let body = multipart_body(&[
        part("2222222222", "text/plain", b"hello"),
        part("payload", "application/json", payload.as_bytes()),
        part("1111111111", "text/x-c", b"int main(){}"),
    ]);

    let paste = decode_paste_response(MULTIPART, body)
        .await
        .expect("multipart paste");

    assert_eq!(paste.id, "1234567890123");
    assert_eq!(paste.name.as_deref(), Some("demo"));
    let names: Vec<&str> = paste.documents.iter().map(|doc| doc.name.as_str()).collect();
    assert_eq!(names, ["main.c", "notes.txt"]);
    assert_eq!(paste.documents[0].content, "int main(){}");
    assert_eq!(paste.documents[1].content, "hello");
}

#[tokio::test]
async fn decodes_plain_json_paste() {
    let body = json!({
        "id": "1234567890123",
        "name": null,
        "timestamp": "2024-05-01T12:00:00Z",
        "edited_timestamp": null,
        "expiry_timestamp": null,
        "views": 2,
        "max_views": 10,
        "documents": [{
            "id": "1111111111",
            "paste_id": "1234567890123",
            "type": "text/x-rust",
            "name": "main.rs",
            "content": "fn main() {}"
        }]
    })
    .to_string();

    let paste = decode_paste_response(Some("application/json; charset=utf-8"), Bytes::from(body))
        .await
        .expect("json paste");
    assert_eq!(paste.views, 2);
    assert_eq!(paste.max_views, Some(10));
    assert_eq!(paste.documents[0].content, "fn main() {}");
}

#[tokio::test]
async fn decodes_plain_json_paste_without_contents() {
    let body = json!({
        "id": "1234567890123",
        "name": "demo",
        "views": 0,
        "documents": [
            {"id": "1111111111", "paste_id": "1234567890123", "type": "text/x-rust", "name": "lib.rs"},
            {"id": "2222222222", "paste_id": "1234567890123", "type": "text/plain", "name": "notes.txt"}
        ]
    })
    .to_string();

    let paste = decode_paste_response(Some("application/json"), Bytes::from(body))
        .await
        .expect("json paste without contents");
    assert_eq!(paste.name.as_deref(), Some("demo"));
    let summary: Vec<(&str, &str)> = paste
        .documents
        .iter()
        .map(|doc| (doc.name.as_str(), doc.content.as_str()))
        .collect();
    assert_eq!(summary, [("lib.rs", ""), ("notes.txt", "")]);
}

#[tokio::test]
async fn decodes_multipart_with_minimal_payload() {
    let cases = [
        (
            r#"{"id":"1234567890123","edited":null,"documents":[{"id":"1111111111","pasteId":"1234567890123","type":"text/x-c","name":"main.c"}]}"#,
            false,
        ),
        (
            r#"{"id":"1234567890123","edited":true,"documents":[{"id":"1111111111","pasteId":"1234567890123","type":"text/x-c","name":"main.c"}]}"#,
            true,
        ),
    ];
    for (payload, edited) in cases {
        let body = multipart_body(&[
            part("payload", "application/json", payload.as_bytes()),
            part("1111111111", "text/x-c", b"int main(){}"),
        ]);

        let paste = decode_paste_response(MULTIPART, body)
            .await
            .expect("minimal multipart paste");
        assert_eq!(paste.id, "1234567890123");
        assert!(paste.created_at.is_none());
        assert_eq!(paste.is_edited(), edited, "payload: {payload}");
        assert_eq!(paste.documents.len(), 1);
        assert_eq!(paste.documents[0].paste_id, "1234567890123");
        assert_eq!(paste.documents[0].content_type, "text/x-c");
        assert_eq!(paste.documents[0].content, "int main(){}");
    }
}

#[tokio::test]
async fn missing_content_type_is_malformed() {
    let err = malformed(decode_paste_response(None, Bytes::from_static(b"{}")).await);
    assert_eq!(err, MalformedResponse::MissingContentType);
    assert_eq!(err.to_string(), "no content type");
}

#[tokio::test]
async fn unknown_content_type_is_malformed() {
    let err = malformed(decode_paste_response(Some("text/html"), Bytes::from_static(b"<p>")).await);
    assert_eq!(err, MalformedResponse::UnknownContentType("text/html".to_string()));
}

#[tokio::test]
async fn multipart_without_payload_is_malformed() {
    let body = multipart_body(&[part("1111111111", "text/x-c", b"int main(){}")]);
    let err = malformed(decode_paste_response(MULTIPART, body).await);
    assert_eq!(err, MalformedResponse::MissingPayload);
}

#[tokio::test]
async fn multipart_without_document_part_is_malformed() {
    let payload = envelope_json();
    let body = multipart_body(&[
        part("payload", "application/json", payload.as_bytes()),
        part("1111111111", "text/x-c", b"int main(){}"),
    ]);
    let err = malformed(decode_paste_response(MULTIPART, body).await);
    assert_eq!(
        err,
        MalformedResponse::MissingDocumentPart("2222222222".to_string())
    );
}

#[tokio::test]
async fn multipart_with_binary_document_part_is_malformed() {
    let payload = envelope_json();
    let body = multipart_body(&[
        part("payload", "application/json", payload.as_bytes()),
        part("1111111111", "application/octet-stream", &[0xff, 0xfe, 0x00]),
        part("2222222222", "text/plain", b"hello"),
    ]);
    let err = malformed(decode_paste_response(MULTIPART, body).await);
    assert_eq!(err, MalformedResponse::NonTextPart("1111111111".to_string()));
}

#[tokio::test]
async fn multipart_with_invalid_payload_is_malformed() {
    let body = multipart_body(&[part("payload", "application/json", b"{\"id\": 5")]);
    let err = malformed(decode_paste_response(MULTIPART, body).await);
    assert!(matches!(err, MalformedResponse::InvalidPayload(_)), "{err:?}");
}

#[tokio::test]
async fn multipart_without_boundary_is_malformed() {
    let err = malformed(
        decode_paste_response(Some("multipart/form-data"), Bytes::from_static(b"")).await,
    );
    assert!(matches!(err, MalformedResponse::InvalidMultipart(_)), "{err:?}");
}

#[test]
fn response_error_decodes_api_error_body() {
    let body = br#"{"reason":"db down","trace":"pool exhausted","timestamp":1700000000}"#;
    match response_error(500, body) {
        ClientError::Response { status, error } => {
            assert_eq!(status, 500);
            assert_eq!(error.reason, "db down");
            assert_eq!(error.trace.as_deref(), Some("pool exhausted"));
            assert_eq!(error.timestamp, 1_700_000_000);
        }
        other => panic!("expected response error, got {other:?}"),
    }
}

#[test]
fn response_error_accepts_fractional_timestamp() {
    let body = br#"{"reason":"db down","timestamp":1700000000.75}"#;
    match response_error(500, body) {
        ClientError::Response { error, .. } => {
            assert_eq!(error.timestamp, 1_700_000_000);
            assert_eq!(error.to_string(), "db down (11/14/2023, 22:13:20)");
        }
        other => panic!("expected response error, got {other:?}"),
    }
}

#[test]
fn response_error_with_opaque_body_keeps_status() {
    let err = response_error(502, b"<html>bad gateway</html>");
    assert!(!err.is_response_error());
    assert_eq!(err.status(), Some(502));
}
