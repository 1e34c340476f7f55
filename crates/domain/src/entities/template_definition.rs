//! Template creation request body

use serde::Serialize;
use serde_json::Value;

use crate::value_objects::TemplateCategory;

/// A new message template submitted for approval
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateDefinition {
    pub name: String,
    pub language: String,
    pub category: TemplateCategory,
    pub components: Vec<Value>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn serializes_with_upper_case_category() {
        let definition = TemplateDefinition {
            name: "order_update".into(),
            language: "en_US".into(),
            category: TemplateCategory::Utility,
            components: vec![json!({"type": "BODY", "text": "Your order {{1}} shipped"})],
        };
        assert_eq!(
            serde_json::to_value(&definition).unwrap(),
            json!({
                "name": "order_update",
                "language": "en_US",
                "category": "UTILITY",
                "components": [{"type": "BODY", "text": "Your order {{1}} shipped"}]
            })
        );
    }
}
