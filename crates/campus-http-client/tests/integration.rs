//! Integration tests for campus-http-client using mockito

use std::str::FromStr;

use campus::endpoint::{EmptyBodyPolicy, Endpoint};
use campus::graphql::GraphQlRequest;
use campus::{ApiUrl, AuthPolicy, Outcome};
use campus_http_client::{with_cancellation, CancellationToken, HttpClient, HttpError};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Record {
    id: String,
    title: String,
}

const AVAILABLE: Endpoint = Endpoint::get(&["cohorts", "available"])
    .with_query(&["module"])
    .with_auth(AuthPolicy::Raw)
    .with_empty_body(EmptyBodyPolicy::List);

const TODAY: Endpoint = Endpoint::get(&["lectures", "today"])
    .with_auth(AuthPolicy::Raw)
    .with_empty_body(EmptyBodyPolicy::Null);

const JOIN: Endpoint = Endpoint::post(&["cohort", "join"])
    .with_query(&["cohort"])
    .with_auth(AuthPolicy::Raw);

const REVIEW: Endpoint = Endpoint::get(&["review"])
    .with_auth(AuthPolicy::Bearer)
    .with_empty_body(EmptyBodyPolicy::Null);

const VERIFY_OTP: Endpoint =
    Endpoint::post(&["verifyOtp"]).with_query(&["email", "code"]);

fn base(server: &mockito::Server) -> ApiUrl {
    ApiUrl::from_str(&server.url()).expect("mock server URL is valid")
}

// === 204 policies ===

#[tokio::test]
async fn list_endpoint_resolves_204_to_empty_list() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", "/cohorts/available")
        .match_query(mockito::Matcher::UrlEncoded(
            "module".into(),
            "5".into(),
        ))
        .with_status(204)
        .create_async()
        .await;

    let client = HttpClient::new();
    let outcome: Outcome<Vec<Record>> = client
        .execute(&base(&server), &AVAILABLE, Some("t"), &[("module", "5")])
        .await
        .expect("204 is not an error");

    assert_eq!(outcome, Outcome::EmptyList);
    assert_eq!(outcome.unwrap_or_empty(), Vec::<Record>::new());

    mock.assert_async().await;
}

#[tokio::test]
async fn null_endpoint_resolves_204_to_absence() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", "/lectures/today")
        .with_status(204)
        .create_async()
        .await;

    let client = HttpClient::new();
    let outcome: Outcome<Record> = client
        .execute(&base(&server), &TODAY, Some("t"), &[])
        .await
        .expect("204 is not an error");

    assert_eq!(outcome, Outcome::EmptyNull);
    assert_eq!(outcome.into_option(), None);

    mock.assert_async().await;
}

// === status handling ===

#[tokio::test]
async fn non_2xx_statuses_are_preserved_exactly() {
    for status in [400, 403, 404, 418, 500, 503] {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/lectures/today")
            .with_status(status)
            .create_async()
            .await;

        let client = HttpClient::new();
        let result: Result<Outcome<Record>, _> = client
            .execute(&base(&server), &TODAY, Some("t"), &[])
            .await;

        match result {
            Err(HttpError::Status(code)) => assert_eq!(code, status as u16),
            other => panic!("Expected HttpError::Status, got {other:?}"),
        }

        mock.assert_async().await;
    }
}

#[tokio::test]
async fn unit_execution_never_reads_the_body() {
    let mut server = mockito::Server::new_async().await;

    // An empty 200: decoding would fail, so success proves no decode happens.
    let mock = server
        .mock("POST", "/cohort/join")
        .match_query(mockito::Matcher::UrlEncoded("cohort".into(), "9".into()))
        .with_status(200)
        .create_async()
        .await;

    let client = HttpClient::new();
    client
        .execute_unit(&base(&server), &JOIN, Some("t"), &[("cohort", "9")])
        .await
        .expect("empty 200 body is success");

    mock.assert_async().await;
}

#[tokio::test]
async fn unit_execution_accepts_204() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/cohort/join")
        .match_query(mockito::Matcher::UrlEncoded("cohort".into(), "9".into()))
        .with_status(204)
        .create_async()
        .await;

    let client = HttpClient::new();
    client
        .execute_unit(&base(&server), &JOIN, Some("t"), &[("cohort", "9")])
        .await
        .expect("204 is success for side-effect endpoints");

    mock.assert_async().await;
}

#[tokio::test]
async fn invalid_json_in_2xx_is_a_decode_error() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", "/lectures/today")
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let client = HttpClient::new();
    let result: Result<Outcome<Record>, _> = client
        .execute(&base(&server), &TODAY, Some("t"), &[])
        .await;

    assert!(matches!(result, Err(HttpError::Decode(_))));

    mock.assert_async().await;
}

// === auth header conventions ===

#[tokio::test]
async fn raw_descriptors_send_the_bare_token() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", "/lectures/today")
        .match_header("Authorization", "tok-123")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": "l1", "title": "Ownership"}"#)
        .create_async()
        .await;

    let client = HttpClient::new();
    let outcome: Outcome<Record> = client
        .execute(&base(&server), &TODAY, Some("tok-123"), &[])
        .await
        .expect("request should succeed");

    assert!(outcome.is_success());

    mock.assert_async().await;
}

#[tokio::test]
async fn bearer_descriptors_prefix_the_token() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", "/review")
        .match_header("Authorization", "Bearer tok-123")
        .with_status(204)
        .create_async()
        .await;

    let client = HttpClient::new();
    let outcome: Outcome<Record> = client
        .execute(&base(&server), &REVIEW, Some("tok-123"), &[])
        .await
        .expect("request should succeed");

    assert_eq!(outcome, Outcome::EmptyNull);

    mock.assert_async().await;
}

#[tokio::test]
async fn no_auth_descriptors_send_no_header_even_with_a_token() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/verifyOtp")
        .match_query(mockito::Matcher::AllOf(vec![
            mockito::Matcher::UrlEncoded("email".into(), "a@b.com".into()),
            mockito::Matcher::UrlEncoded("code".into(), "123456".into()),
        ]))
        .match_header("Authorization", mockito::Matcher::Missing)
        .with_status(200)
        .create_async()
        .await;

    let client = HttpClient::new();
    client
        .execute_unit(
            &base(&server),
            &VERIFY_OTP,
            Some("tok-123"),
            &[("email", "a@b.com"), ("code", "123456")],
        )
        .await
        .expect("request should succeed");

    mock.assert_async().await;
}

#[tokio::test]
async fn missing_token_fails_before_dispatch() {
    let server = mockito::Server::new_async().await;

    let client = HttpClient::new();
    let result: Result<Outcome<Record>, _> =
        client.execute(&base(&server), &TODAY, None, &[]).await;

    assert!(matches!(result, Err(HttpError::Request(_))));
}

// === descriptor contract ===

#[tokio::test]
async fn undeclared_params_fail_before_dispatch() {
    let server = mockito::Server::new_async().await;

    let client = HttpClient::new();
    let result: Result<Outcome<Record>, _> = client
        .execute(&base(&server), &TODAY, Some("t"), &[("cohort", "9")])
        .await;

    assert!(matches!(result, Err(HttpError::Request(_))));
}

// === GraphQL ===

#[tokio::test]
async fn graphql_body_always_carries_query_and_variables() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/")
        .match_header("content-type", "application/json")
        .match_header("Authorization", "tok-123")
        .match_body(mockito::Matcher::Json(json!({
            "query": "query { getLearner }",
            "variables": {}
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"data": {"ok": true}}"#)
        .create_async()
        .await;

    let client = HttpClient::new();
    let request = GraphQlRequest::new("query { getLearner }", serde_json::Value::Null);
    let envelope: campus::GraphQlResponse<serde_json::Value> = client
        .execute_graphql(&base(&server), AuthPolicy::Raw, Some("tok-123"), &request)
        .await
        .expect("request should succeed");

    assert_eq!(envelope.data, Some(json!({"ok": true})));
    assert!(envelope.errors.is_none());

    mock.assert_async().await;
}

#[tokio::test]
async fn graphql_500_is_a_status_error() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/")
        .with_status(500)
        .create_async()
        .await;

    let client = HttpClient::new();
    let request = GraphQlRequest::new("query { getLearner }", json!({"email": "a@b.com"}));
    let result: Result<campus::GraphQlResponse<serde_json::Value>, _> = client
        .execute_graphql(&base(&server), AuthPolicy::Raw, Some("t"), &request)
        .await;

    assert!(matches!(result, Err(HttpError::Status(500))));

    mock.assert_async().await;
}

// === transport failures and cancellation ===

#[tokio::test]
async fn unreachable_backend_is_a_transport_error_not_a_status() {
    // Nothing listens on port 9; the connection is refused before any
    // response exists.
    let unreachable = ApiUrl::from_str("http://127.0.0.1:9").expect("valid URL");

    let client = HttpClient::new();
    let result: Result<Outcome<Record>, _> =
        client.execute(&unreachable, &TODAY, Some("t"), &[]).await;

    match result {
        Err(HttpError::Transport(_)) | Err(HttpError::Timeout) => {}
        other => panic!("Expected a transport-level error, got {other:?}"),
    }
}

#[tokio::test]
async fn cancelled_token_short_circuits_the_call() {
    let server = mockito::Server::new_async().await;

    let cancel = CancellationToken::new();
    cancel.cancel();

    let client = HttpClient::new();
    let result: Result<Outcome<Record>, _> = with_cancellation(
        &cancel,
        client.execute(&base(&server), &TODAY, Some("t"), &[]),
    )
    .await;

    assert!(matches!(result, Err(HttpError::Cancelled)));
}
