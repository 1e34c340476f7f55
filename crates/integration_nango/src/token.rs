//! Access token extraction
//!
//! Nango stores the provider token in different places depending on the
//! integration's auth mode. The locations are tried in order and the first
//! non-empty string wins.

use serde_json::Value;
use tracing::debug;

/// JSON pointers tried in order
pub const TOKEN_LOCATIONS: [&str; 3] = [
    "/apiKey",
    "/credentials/apiKey",
    "/credentials/access_token",
];

/// Pull the access token out of a connection document
#[must_use]
pub fn extract_access_token(document: &Value) -> Option<&str> {
    let token = TOKEN_LOCATIONS.iter().find_map(|pointer| {
        document
            .pointer(pointer)
            .and_then(Value::as_str)
            .filter(|token| !token.is_empty())
    });

    if token.is_none() {
        let keys: Vec<&str> = document
            .as_object()
            .map(|map| map.keys().map(String::as_str).collect())
            .unwrap_or_default();
        let credential_keys: Vec<&str> = document
            .get("credentials")
            .and_then(Value::as_object)
            .map(|map| map.keys().map(String::as_str).collect())
            .unwrap_or_default();
        debug!(?keys, ?credential_keys, "No access token in connection document");
    }

    token
}
