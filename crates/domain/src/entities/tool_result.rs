//! Uniform operation result

use std::fmt::Display;

use serde::Serialize;
use serde_json::Value;

/// The `{result, error}` pair every operation returns
///
/// Exactly one side is set. Both keys are always serialized, the unset one
/// as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolResult {
    result: Option<Value>,
    error: Option<String>,
}

impl ToolResult {
    /// Successful result; a JSON `null` body becomes an empty object so the
    /// result side stays non-null
    #[must_use]
    pub fn success(value: Value) -> Self {
        let value = if value.is_null() {
            Value::Object(serde_json::Map::new())
        } else {
            value
        };
        Self {
            result: Some(value),
            error: None,
        }
    }

    /// Failed result
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            result: None,
            error: Some(message.into()),
        }
    }

    pub fn result(&self) -> Option<&Value> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub const fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

impl<E: Display> From<Result<Value, E>> for ToolResult {
    fn from(outcome: Result<Value, E>) -> Self {
        match outcome {
            Ok(value) => Self::success(value),
            Err(e) => Self::failure(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn success_serializes_null_error() {
        let result = ToolResult::success(json!({"id": 1}));
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({"result": {"id": 1}, "error": null})
        );
    }

    #[test]
    fn failure_serializes_null_result() {
        let result = ToolResult::failure("Template not found");
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({"result": null, "error": "Template not found"})
        );
    }

    #[test]
    fn null_success_keeps_result_side_set() {
        let result = ToolResult::success(Value::Null);
        assert_eq!(result.result(), Some(&json!({})));
        assert!(!result.is_error());
    }

    #[test]
    fn from_result_uses_display() {
        let outcome: Result<Value, std::fmt::Error> = Err(std::fmt::Error);
        let result = ToolResult::from(outcome);
        assert_eq!(result.error(), Some("an error occurred when formatting an argument"));
        assert!(result.result().is_none());
    }
}
