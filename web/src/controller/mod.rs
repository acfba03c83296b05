use domain::TaskRecord;
use serde::Serialize;
use utoipa::ToSchema;

pub(crate) mod extraction_controller;
pub(crate) mod health_check_controller;

/// Success envelope returned by the extraction endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct ExtractionResponse {
    pub success: bool,
    pub tasks: Vec<TaskRecord>,
}

impl ExtractionResponse {
    pub fn new(tasks: Vec<TaskRecord>) -> Self {
        Self {
            success: true,
            tasks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::task::{FIXED_CONFIDENCE, UNSPECIFIED_DEADLINE};
    use domain::SourceKind;
    use serde_json::json;

    #[tokio::test]
    async fn test_serialize_extraction_response_with_tasks() {
        let response = ExtractionResponse::new(vec![TaskRecord {
            description: "Alice will send the notes.".to_string(),
            assignee: vec!["Alice".to_string()],
            deadline: vec![UNSPECIFIED_DEADLINE.to_string()],
            source: SourceKind::Text,
            confidence: FIXED_CONFIDENCE,
        }]);
        let serialized = serde_json::to_string(&response).unwrap();

        // Serializing and then deserializing because the string output from serde_json::to_string is
        // non-deterministic as far as the order of the JSON keys. This ensures the test won't be flaky
        let deserialized_value: serde_json::Value = serde_json::from_str(&serialized).unwrap();
        let deserialized_expected_value: serde_json::Value = json!({
            "success": true,
            "tasks": [{
                "description": "Alice will send the notes.",
                "assignee": ["Alice"],
                "deadline": ["Not Specified"],
                "source": "text",
                "confidence": 0.9
            }]
        });
        assert_eq!(deserialized_value, deserialized_expected_value);
    }

    #[tokio::test]
    async fn test_serialize_extraction_response_with_no_tasks() {
        let response = ExtractionResponse::new(vec![]);
        let serialized = serde_json::to_string(&response).unwrap();
        assert_eq!(serialized, json!({"success": true, "tasks": []}).to_string());
    }
}
