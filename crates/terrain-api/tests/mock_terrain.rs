//! Mock Terrain tests.
//!
//! These tests use wiremock to simulate a Terrain host and check the
//! request/response contract without network access or real credentials.

use serde_json::json;
use terrain_api::error::InvalidInputError;
use terrain_api::{AppId, BaseUrl, Credentials, Error, Session, Submission, SystemId, walkthrough};
use wiremock::matchers::{body_json, header, method, path, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper to create a base URL from a mock server.
fn mock_base_url(server: &MockServer) -> BaseUrl {
    BaseUrl::new(format!("http://127.0.0.1:{}", server.address().port())).unwrap()
}

async fn mount_token(server: &MockServer, token: &str) {
    Mock::given(method("GET"))
        .and(path("/terrain/token"))
        // alice:secret
        .and(header("authorization", "Basic YWxpY2U6c2VjcmV0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": token,
            "expires_in": 28800,
            "token_type": "bearer"
        })))
        .expect(1)
        .mount(server)
        .await;
}

fn alice() -> Credentials {
    Credentials::new("alice", "secret")
}

// ============================================================================
// Token Exchange
// ============================================================================

#[tokio::test]
async fn test_login_uses_basic_auth_and_bearer_afterwards() {
    let server = MockServer::start().await;
    mount_token(&server, "abc123").await;

    Mock::given(method("GET"))
        .and(path("/terrain/apps"))
        .and(header("authorization", "Bearer abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"apps": []})))
        .expect(1)
        .mount(&server)
        .await;

    let session = Session::login(&mock_base_url(&server), alice()).await.unwrap();
    assert_eq!(session.access_token().as_str(), "abc123");
    assert_eq!(session.username(), "alice");

    let listing = session.search_apps("anything").await.unwrap();
    assert!(listing.is_empty());
}

#[tokio::test]
async fn test_login_unauthorized_aborts_walkthrough() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/terrain/token"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error_code": "ERR_NOT_AUTHORIZED",
            "reason": "invalid username or password"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(path("/terrain/apps"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"apps": []})))
        .expect(0)
        .mount(&server)
        .await;

    let result = walkthrough::run(&mock_base_url(&server), Credentials::new("bad", "creds"), "wc").await;

    match result {
        Err(Error::Protocol(err)) => {
            assert_eq!(err.status, 401);
            assert_eq!(err.error_code.as_deref(), Some("ERR_NOT_AUTHORIZED"));
            assert!(err.is_auth_error());
        }
        other => panic!("expected protocol error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_login_error_without_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/terrain/token"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let err = Session::login(&mock_base_url(&server), alice())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("502"));
}

#[tokio::test]
async fn test_login_response_without_token_is_malformed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/terrain/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token_type": "bearer"})))
        .mount(&server)
        .await;

    match Session::login(&mock_base_url(&server), alice()).await {
        Err(Error::Protocol(err)) => {
            assert_eq!(err.status, 200);
            assert!(err.reason.unwrap().contains("malformed"));
        }
        other => panic!("expected protocol error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unreachable_host_is_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    let base = BaseUrl::new(format!("http://127.0.0.1:{}", port)).unwrap();

    let err = Session::login(&base, alice()).await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
}

// ============================================================================
// Search and Detail
// ============================================================================

#[tokio::test]
async fn test_search_sends_query_and_keeps_order() {
    let server = MockServer::start().await;
    mount_token(&server, "tok").await;

    Mock::given(method("GET"))
        .and(path("/terrain/apps"))
        .and(query_param("search", "word count"))
        .and(header("authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "apps": [
                {"system_id": "agave", "id": "wc-osg-1.00u1", "name": "Word Count (OSG)"},
                {"system_id": "de", "id": "67d15627-22c5-42bd-8daf-9af5deecceab", "name": "Word Count"}
            ],
            "total": 2
        })))
        .mount(&server)
        .await;

    let session = Session::login(&mock_base_url(&server), alice()).await.unwrap();
    let listing = session.search_apps("word count").await.unwrap();

    assert_eq!(listing.query(), "word count");
    assert_eq!(listing.apps.len(), 2);
    assert_eq!(listing.apps[0].system_id, SystemId::Agave);
    assert_eq!(listing.apps[0].name(), Some("Word Count (OSG)"));
    assert_eq!(listing.apps[1].system_id, SystemId::De);
    assert_eq!(listing.extra["total"], json!(2));
}

#[tokio::test]
async fn test_walkthrough_fetches_first_result() {
    let server = MockServer::start().await;
    mount_token(&server, "abc123").await;

    Mock::given(method("GET"))
        .and(path("/terrain/apps"))
        .and(header("authorization", "Bearer abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "apps": [
                {"system_id": "de", "id": "X"},
                {"system_id": "agave", "id": "Y"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/terrain/apps/de/X"))
        .and(header("authorization", "Bearer abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "X", "system_id": "de"})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/terrain/apps/agave/Y"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "Y"})))
        .expect(0)
        .mount(&server)
        .await;

    let result = walkthrough::run(&mock_base_url(&server), alice(), "wc").await.unwrap();

    assert_eq!(result.selected.system_id, SystemId::De);
    assert_eq!(result.selected.id.as_str(), "X");
    assert_eq!(result.listing.apps.len(), 2);
    assert_eq!(result.detail.id(), Some("X"));
}

#[tokio::test]
async fn test_walkthrough_empty_search_stops_before_detail() {
    let server = MockServer::start().await;
    mount_token(&server, "abc123").await;

    Mock::given(method("GET"))
        .and(path("/terrain/apps"))
        .and(query_param("search", "no such app"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"apps": []})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/terrain/apps/[^/]+/[^/]+$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let result = walkthrough::run(&mock_base_url(&server), alice(), "no such app").await;

    match result {
        Err(Error::NoAppsFound { query }) => assert_eq!(query, "no such app"),
        other => panic!("expected NoAppsFound, got {:?}", other),
    }
}

#[tokio::test]
async fn test_detail_is_passed_through_unmodified() {
    let server = MockServer::start().await;
    mount_token(&server, "abc123").await;

    let description = json!({
        "id": "67d15627-22c5-42bd-8daf-9af5deecceab",
        "name": "Word Count",
        "system_id": "de",
        "requirements": [{"step_number": 0, "max_cpu_cores": 4}],
        "groups": [{
            "id": "a8e2b4a4-6c2f-4a31-a95b-0d3f1c2b4e7d",
            "label": "Input",
            "parameters": [{
                "id": "s1_p1",
                "type": "FileInput",
                "required": true,
                "arguments": [],
                "validators": [],
                "defaultValue": null
            }]
        }],
        "unicode": "Größe ✓",
        "big": 12345678901234567u64
    });

    Mock::given(method("GET"))
        .and(path("/terrain/apps/de/67d15627-22c5-42bd-8daf-9af5deecceab"))
        .respond_with(ResponseTemplate::new(200).set_body_json(description.clone()))
        .mount(&server)
        .await;

    let session = Session::login(&mock_base_url(&server), alice()).await.unwrap();
    let app_id = AppId::new("67d15627-22c5-42bd-8daf-9af5deecceab").unwrap();
    let detail = session.get_app(SystemId::De, &app_id).await.unwrap();

    assert_eq!(detail.as_value(), &description);
}

#[tokio::test]
async fn test_detail_keeps_key_order_and_big_numbers() {
    let server = MockServer::start().await;
    mount_token(&server, "abc123").await;

    let raw = r#"{"id":"X","system_id":"de","job_limit":123456789012345678901234567890,"ratio":0.1000000000000000055511151231257827,"z":1,"a":2}"#;

    Mock::given(method("GET"))
        .and(path("/terrain/apps/de/X"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(raw, "application/json"))
        .mount(&server)
        .await;

    let session = Session::login(&mock_base_url(&server), alice()).await.unwrap();
    let detail = session
        .get_app(SystemId::De, &AppId::new("X").unwrap())
        .await
        .unwrap();

    assert_eq!(serde_json::to_string(detail.as_value()).unwrap(), raw);
}

#[tokio::test]
async fn test_detail_not_found() {
    let server = MockServer::start().await;
    mount_token(&server, "abc123").await;

    Mock::given(method("GET"))
        .and(path("/terrain/apps/agave/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error_code": "ERR_NOT_FOUND",
            "reason": "app not found"
        })))
        .mount(&server)
        .await;

    let session = Session::login(&mock_base_url(&server), alice()).await.unwrap();
    let err = session
        .get_app(SystemId::Agave, &AppId::new("missing").unwrap())
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "HTTP request failed: HTTP 404 [ERR_NOT_FOUND]: app not found"
    );
}

#[tokio::test]
async fn test_token_used_verbatim_in_every_request() {
    let server = MockServer::start().await;
    let token = "eyJhbGciOiJSUzI1NiJ9.e30+/=.sig-_~";
    mount_token(&server, token).await;

    let bearer = format!("Bearer {}", token);

    Mock::given(method("GET"))
        .and(path("/terrain/apps"))
        .and(header("authorization", bearer.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "apps": [{"system_id": "agave", "id": "wc-1.00"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/terrain/apps/agave/wc-1.00"))
        .and(header("authorization", bearer.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "wc-1.00",
            "system_id": "agave",
            "groups": [{"parameters": [{"id": "query1", "required": true}]}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/terrain/analyses"))
        .and(header("authorization", bearer.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "b5b6f5c4-0000-4000-8000-000000000001",
            "name": "wc",
            "status": "Submitted"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = walkthrough::run(&mock_base_url(&server), alice(), "wc").await.unwrap();
    assert_eq!(result.session.access_token().as_str(), token);

    let mut submission = Submission::from_app(&result.detail, "wc", "/iplant/home/alice/analyses").unwrap();
    submission.set_param("query1", json!("/iplant/home/alice/in.txt")).unwrap();
    let response = result.session.submit_analysis(&submission).await.unwrap();
    assert_eq!(response.status.as_deref(), Some("Submitted"));
}

// ============================================================================
// Analysis Submission
// ============================================================================

#[tokio::test]
async fn test_submit_posts_payload() {
    let server = MockServer::start().await;
    mount_token(&server, "abc123").await;

    Mock::given(method("POST"))
        .and(path("/terrain/analyses"))
        .and(body_json(json!({
            "name": "wc run",
            "app_id": "wc-1.00",
            "system_id": "agave",
            "output_dir": "/iplant/home/alice/analyses",
            "debug": false,
            "notify": true,
            "config": {"query1": "/iplant/home/alice/in.txt", "opt": "-l"},
            "requirements": []
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "b5b6f5c4-0000-4000-8000-000000000001",
            "name": "wc run",
            "status": "Submitted",
            "start-date": "1700000000000"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let session = Session::login(&mock_base_url(&server), alice()).await.unwrap();
    let detail = terrain_api::AppDetail::new(json!({
        "id": "wc-1.00",
        "system_id": "agave",
        "groups": [{"parameters": [
            {"id": "query1", "required": true},
            {"id": "opt", "defaultValue": "-l"}
        ]}]
    }));

    let mut submission = Submission::from_app(
        &detail,
        "wc run",
        Submission::default_output_dir(session.username()),
    )
    .unwrap();
    submission.set_param("query1", json!("/iplant/home/alice/in.txt")).unwrap();

    let response = session.submit_analysis(&submission).await.unwrap();
    assert_eq!(response.id.as_deref(), Some("b5b6f5c4-0000-4000-8000-000000000001"));
    assert_eq!(response.extra["start-date"], json!("1700000000000"));
}

#[tokio::test]
async fn test_submit_rejects_missing_required_without_request() {
    let server = MockServer::start().await;
    mount_token(&server, "abc123").await;

    Mock::given(method("POST"))
        .and(path("/terrain/analyses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let session = Session::login(&mock_base_url(&server), alice()).await.unwrap();
    let detail = terrain_api::AppDetail::new(json!({
        "id": "wc-1.00",
        "system_id": "agave",
        "groups": [{"parameters": [{"id": "query1", "label": "Input", "required": true}]}]
    }));
    let submission = Submission::from_app(&detail, "wc", "/out").unwrap();

    match session.submit_analysis(&submission).await {
        Err(Error::InvalidInput(InvalidInputError::MissingParameters { parameters })) => {
            assert_eq!(parameters, vec!["Input".to_string()]);
        }
        other => panic!("expected missing parameters, got {:?}", other),
    }
}
