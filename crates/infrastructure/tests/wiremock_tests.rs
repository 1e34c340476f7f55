//! End-to-end tests of the adapter stack against mocked Nango and Graph APIs

use std::{path::Path, sync::Arc};

use application::{
    CheckTemplateStatusRequest, MessageService, TemplateService, TextMessageRequest,
};
use infrastructure::{AppConfig, NangoCredentialAdapter, WhatsAppGraphAdapter};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path},
};

fn load(nango: &MockServer, graph: &MockServer, secret: &str) -> AppConfig {
    let file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    let vars = [
        ("NANGO_CONNECTION_ID", "conn-1".to_string()),
        ("NANGO_INTEGRATION_ID", "whatsapp-business".to_string()),
        ("NANGO_BASE_URL", nango.uri()),
        ("NANGO_SECRET_KEY", secret.to_string()),
        ("WHATSAPP_PHONE_NUMBER_ID", "106540352242922".to_string()),
        ("WHATSAPP_BUSINESS_ACCOUNT_ID", "102290129340398".to_string()),
        ("WHATSAPP_API_BASE_URL", graph.uri()),
    ];
    AppConfig::load_with(Some(file.path()), |name| {
        vars.iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.clone())
    })
    .unwrap()
}

fn adapter(config: &AppConfig) -> Arc<WhatsAppGraphAdapter> {
    let credentials = Arc::new(NangoCredentialAdapter::new(config.nango.clone()));
    Arc::new(WhatsAppGraphAdapter::new(credentials, config.whatsapp.clone()))
}

async fn mount_nango(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/connection/conn-1"))
        .and(header("Authorization", "Bearer nango-secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

fn text(to: &str, message: &str) -> TextMessageRequest {
    TextMessageRequest {
        to: to.into(),
        message: message.into(),
        template_name: String::new(),
        language_code: "en_US".into(),
        phone_number_id: None,
    }
}

#[tokio::test]
async fn text_message_flows_through_nango_token() {
    let nango = MockServer::start().await;
    let graph = MockServer::start().await;
    mount_nango(&nango, json!({"apiKey": "wa-token"})).await;

    Mock::given(method("POST"))
        .and(path("/v21.0/106540352242922/messages"))
        .and(header("Authorization", "Bearer wa-token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"messages": [{"id": "wamid.1"}]})),
        )
        .expect(1)
        .mount(&graph)
        .await;

    let config = load(&nango, &graph, "nango-secret");
    let service = MessageService::new(adapter(&config), config.whatsapp.defaults());

    let result = service.send_text(text("+1 (555) 123-4567", "Hello")).await;
    assert_eq!(result.result(), Some(&json!({"messages": [{"id": "wamid.1"}]})));
    assert!(result.error().is_none());
}

#[tokio::test]
async fn nested_credentials_token_is_used() {
    let nango = MockServer::start().await;
    let graph = MockServer::start().await;
    mount_nango(&nango, json!({"credentials": {"access_token": "oauth-token"}})).await;

    Mock::given(method("GET"))
        .and(path("/v21.0/102290129340398/message_templates"))
        .and(header("Authorization", "Bearer oauth-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"name": "a"}, {"name": "b", "status": "APPROVED"}]
        })))
        .expect(1)
        .mount(&graph)
        .await;

    let config = load(&nango, &graph, "nango-secret");
    let service = TemplateService::new(adapter(&config), config.whatsapp.defaults());

    let result = service
        .check_status(CheckTemplateStatusRequest {
            template_name: "b".into(),
            business_account_id: None,
        })
        .await;
    assert_eq!(result.result(), Some(&json!({"name": "b", "status": "APPROVED"})));
}

#[tokio::test]
async fn graph_error_message_is_returned() {
    let nango = MockServer::start().await;
    let graph = MockServer::start().await;
    mount_nango(&nango, json!({"apiKey": "expired"})).await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"error": {"message": "Invalid token"}})),
        )
        .mount(&graph)
        .await;

    let config = load(&nango, &graph, "nango-secret");
    let service = MessageService::new(adapter(&config), config.whatsapp.defaults());

    let result = service.send_text(text("15551234567", "Hello")).await;
    assert_eq!(result.error(), Some("Invalid token"));
    assert!(result.result().is_none());
}

#[tokio::test]
async fn wrong_nango_secret_surfaces_authentication_failure() {
    let nango = MockServer::start().await;
    let graph = MockServer::start().await;
    mount_nango(&nango, json!({"apiKey": "wa-token"})).await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&nango)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&graph)
        .await;

    let config = load(&nango, &graph, "wrong-secret");
    let service = MessageService::new(adapter(&config), config.whatsapp.defaults());

    let result = service.send_text(text("15551234567", "Hello")).await;
    assert!(
        result
            .error()
            .unwrap()
            .starts_with("Failed to get credentials from Nango")
    );
}

#[tokio::test]
async fn unconfigured_nango_fails_the_call_not_the_load() {
    let graph = MockServer::start().await;
    let config = AppConfig::load_with(Some(Path::new("/nonexistent.toml")), |_| None);
    assert!(config.is_err());

    let file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    let mut config = AppConfig::load_with(Some(file.path()), |_| None).unwrap();
    config.whatsapp.api_base_url = graph.uri();
    config.whatsapp.phone_number_id = Some("106540352242922".into());

    let service = MessageService::new(adapter(&config), config.whatsapp.defaults());
    let result = service.send_text(text("15551234567", "Hello")).await;
    let error = result.error().unwrap();
    assert!(error.starts_with("Configuration error: Missing required Nango environment variables"));
    assert!(error.contains("NANGO_CONNECTION_ID"));
}
