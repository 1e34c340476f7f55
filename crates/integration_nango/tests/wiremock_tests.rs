//! Integration tests for the Nango client using WireMock

use integration_nango::{NangoClient, NangoConfig, NangoError};
use secrecy::{ExposeSecret, SecretString};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path, query_param},
};

fn test_config(base_url: &str) -> NangoConfig {
    NangoConfig {
        base_url: base_url.to_string(),
        connection_id: "conn-123".to_string(),
        integration_id: "whatsapp-business".to_string(),
        secret_key: SecretString::from("nango-secret".to_string()),
        timeout_secs: 10,
    }
}

async fn mount_connection(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/connection/conn-123"))
        .and(query_param("provider_config_key", "whatsapp-business"))
        .and(query_param("refresh_token", "true"))
        .and(header("Authorization", "Bearer nango-secret"))
        .respond_with(template)
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn access_token_from_nested_api_key() {
    let server = MockServer::start().await;
    mount_connection(
        &server,
        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "connection_id": "conn-123",
            "credentials": {"type": "API_KEY", "apiKey": "graph-token"}
        })),
    )
    .await;

    let client = NangoClient::new(test_config(&server.uri())).unwrap();
    let token = client.access_token().await.unwrap();
    assert_eq!(token.expose_secret(), "graph-token");
}

#[tokio::test]
async fn access_token_from_oauth_credentials() {
    let server = MockServer::start().await;
    mount_connection(
        &server,
        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "credentials": {"type": "OAUTH2", "access_token": "oauth-token"}
        })),
    )
    .await;

    let client = NangoClient::new(test_config(&server.uri())).unwrap();
    let token = client.access_token().await.unwrap();
    assert_eq!(token.expose_secret(), "oauth-token");
}

#[tokio::test]
async fn missing_token_is_reported() {
    let server = MockServer::start().await;
    mount_connection(
        &server,
        ResponseTemplate::new(200).set_body_json(serde_json::json!({"credentials": {}})),
    )
    .await;

    let client = NangoClient::new(test_config(&server.uri())).unwrap();
    let result = client.access_token().await;
    assert!(matches!(result, Err(NangoError::MissingToken)));
}

#[tokio::test]
async fn unauthorized_is_a_status_error() {
    let server = MockServer::start().await;
    mount_connection(
        &server,
        ResponseTemplate::new(401).set_body_json(serde_json::json!({"error": "bad key"})),
    )
    .await;

    let client = NangoClient::new(test_config(&server.uri())).unwrap();
    let err = client.access_token().await.unwrap_err();
    assert!(matches!(err, NangoError::Status { status: 401 }));
    assert!(err.is_auth_failure());
}

#[tokio::test]
async fn non_json_body_is_invalid_response() {
    let server = MockServer::start().await;
    mount_connection(&server, ResponseTemplate::new(200).set_body_string("<html>")).await;

    let client = NangoClient::new(test_config(&server.uri())).unwrap();
    let result = client.fetch_connection().await;
    assert!(matches!(result, Err(NangoError::InvalidResponse(_))));
}

#[tokio::test]
async fn unreachable_server_is_a_request_error() {
    let client = NangoClient::new(test_config("http://127.0.0.1:1")).unwrap();
    let err = client.access_token().await.unwrap_err();
    assert!(matches!(err, NangoError::Request(_)));
    assert!(err.to_string().starts_with("Failed to get credentials from Nango"));
}
