//! End-to-end tests for the typed routes against a mock Dropbox server.
//!
//! These tests verify that:
//! - route arguments are sent as JSON to the right path
//! - successful responses parse into the typed results
//! - 409 bodies resolve through the route's subtype table
//! - unknown subtypes fall back to the generic error

use dropbox_api::routes::files::{GetMetadataArg, Metadata};
use dropbox_api::taxonomy::{CopyReferenceGetError, GetMetadataError, LookupError};
use dropbox_api::{ApiClient, CallError, ClientConfig};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Builds a client the way an application would, from configuration.
fn client_for(server: &MockServer) -> ApiClient {
    let api_url = format!("{}/", server.uri());
    let config = ClientConfig::from_lookup(|key| match key {
        "DROPBOX_ACCESS_TOKEN" => Some("sl.integration".to_string()),
        "DROPBOX_API_URL" => Some(api_url.clone()),
        _ => None,
    })
    .expect("valid configuration");
    ApiClient::from_config(&config).expect("client builds")
}

fn route_error(summary: &str, error: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(409).set_body_json(json!({
        "error_summary": summary,
        "error": error,
    }))
}

#[tokio::test]
async fn copy_reference_get_returns_reference() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/2/files/copy_reference/get"))
        .and(header("authorization", "Bearer sl.integration"))
        .and(body_json(json!({"path": "/video.mp4"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "metadata": {
                ".tag": "file",
                "name": "video.mp4",
                "id": "id:a4ayc_80_OEAAAAAAAAAYa",
                "client_modified": "2015-05-12T15:50:38Z",
                "server_modified": "2015-05-12T15:50:38Z",
                "rev": "a1c10ce0dd78",
                "size": 1024,
                "path_display": "/video.mp4"
            },
            "copy_reference": "z1X6ATl6aWtzOGq0c3g5Ng",
            "expires": "2045-05-12T15:50:38Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server)
        .copy_reference_get("/video.mp4")
        .await
        .unwrap();

    assert_eq!(result.copy_reference, "z1X6ATl6aWtzOGq0c3g5Ng");
    assert_eq!(result.expires, "2045-05-12T15:50:38Z");
    assert_eq!(result.metadata.name(), "video.mp4");
}

#[tokio::test]
async fn copy_reference_get_path_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/2/files/copy_reference/get"))
        .respond_with(route_error(
            "path/not_found/..",
            json!({".tag": "path", "path": {".tag": "not_found"}}),
        ))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .copy_reference_get("/missing.txt")
        .await
        .unwrap_err();

    let basic = err.into_route_error().expect("route error");
    assert_eq!(basic.error_summary, "path/not_found/..");
    match basic.error {
        CopyReferenceGetError::Path(lookup) => assert!(lookup.is_not_found()),
    }
}

#[tokio::test]
async fn copy_reference_get_malformed_path_keeps_detail() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/2/files/copy_reference/get"))
        .respond_with(route_error(
            "path/malformed_path/.",
            json!({
                ".tag": "path",
                "path": {".tag": "malformed_path", "malformed_path": "Path must start with /"}
            }),
        ))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .copy_reference_get("relative.txt")
        .await
        .unwrap_err();

    let lookup = err
        .route_error()
        .and_then(CopyReferenceGetError::as_path)
        .expect("path error");
    assert_eq!(lookup.malformed_path(), Some("Path must start with /"));
}

#[tokio::test]
async fn copy_reference_get_unknown_subtype_is_generic() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/2/files/copy_reference/get"))
        .respond_with(route_error("other/..", json!({".tag": "other"})))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .copy_reference_get("/a.txt")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        CallError::Unrecognized { ref tag, .. } if tag == "other"
    ));
    assert!(err.route_error().is_none());
}

#[tokio::test]
async fn get_metadata_shares_lookup_category() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/2/files/get_metadata"))
        .respond_with(route_error(
            "path/restricted_content/",
            json!({".tag": "path", "path": {".tag": "restricted_content"}}),
        ))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .get_metadata(&GetMetadataArg::new("/blocked.mp3"))
        .await
        .unwrap_err();

    assert_eq!(
        err.route_error(),
        Some(&GetMetadataError::Path(LookupError::RestrictedContent))
    );
}

#[tokio::test]
async fn get_metadata_returns_deleted_entry() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/2/files/get_metadata"))
        .and(body_json(json!({
            "path": "/gone.txt",
            "include_media_info": false,
            "include_deleted": true,
            "include_has_explicit_shared_members": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            ".tag": "deleted",
            "name": "gone.txt",
            "path_lower": "/gone.txt",
            "path_display": "/gone.txt"
        })))
        .mount(&server)
        .await;

    let metadata = client_for(&server)
        .get_metadata(&GetMetadataArg::new("/gone.txt").include_deleted(true))
        .await
        .unwrap();

    assert!(matches!(metadata, Metadata::Deleted(_)));
    assert_eq!(metadata.path_display(), Some("/gone.txt"));
}
