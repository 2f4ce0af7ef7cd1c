use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use httpmock::prelude::*;
use small_crm_web::{router, AppConfig, ServerState};
use tower::ServiceExt;

const OBJECT_PATH: &str = "/crm/v3/objects/2-55323801";

fn test_config(base_url: &str) -> AppConfig {
    AppConfig {
        http_addr: "127.0.0.1".to_string(),
        http_port: 3000,
        hubspot_base_url: base_url.to_string(),
        object_type: "2-55323801".to_string(),
        verbose: false,
    }
}

fn test_app(base_url: &str, access_token: Option<&str>) -> axum::Router {
    let config = test_config(base_url);
    let state = ServerState::new(&config, access_token.map(|t| t.to_string()));
    router(Arc::new(state))
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_homepage_without_token_is_empty_and_makes_no_call() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path(OBJECT_PATH);
        then.status(200).json_body(serde_json::json!({ "results": [] }));
    });

    let app = test_app(&server.base_url(), None);
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("No custom object records"));

    // 未設 token 時不得呼叫上游
    assert_eq!(api_mock.hits(), 0);
}

#[tokio::test]
async fn test_homepage_renders_upstream_records() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path(OBJECT_PATH)
            .query_param("limit", "100")
            .query_param("properties", "name,bio,species")
            .header("authorization", "Bearer test-token");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "results": [
                    { "id": "1", "properties": { "name": "Rex", "bio": "A dog", "species": "Canine" } },
                    { "id": "2", "properties": { "name": "Whiskers", "bio": "A cat", "species": "Feline" } }
                ]
            }));
    });

    let app = test_app(&server.base_url(), Some("test-token"));
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    api_mock.assert();

    let body = body_string(response).await;
    assert!(body.contains("Rex"));
    assert!(body.contains("A dog"));
    assert!(body.contains("Canine"));
    assert!(body.contains("Whiskers"));
    assert!(body.contains("Feline"));
}

#[tokio::test]
async fn test_homepage_swallows_upstream_failure() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path(OBJECT_PATH);
        then.status(500).body("upstream exploded");
    });

    let app = test_app(&server.base_url(), Some("test-token"));
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    // 失敗被吞掉，照樣回 200 空列表
    assert_eq!(response.status(), StatusCode::OK);
    api_mock.assert();

    let body = body_string(response).await;
    assert!(body.contains("No custom object records"));
}

#[tokio::test]
async fn test_form_pages_render_on_both_paths() {
    for path in ["/updates", "/update-cobj"] {
        let app = test_app("http://127.0.0.1:1", None);
        let response = app
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK, "GET {} should be 200", path);
        let body = body_string(response).await;
        assert!(body.contains("action=\"/update-cobj\""));
        assert!(body.contains("name=\"species\""));
    }
}
