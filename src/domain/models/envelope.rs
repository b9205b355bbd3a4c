use serde::{Deserialize, Serialize};

/// Standard `{error, message, data}` body used for both success and error
/// responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct JsonResponse<T = serde_json::Value> {
    pub error: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub data: Option<T>,
}

impl<T> JsonResponse<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            error: false,
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            error: true,
            message: message.into(),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn error_envelope_omits_data() {
        let body = serde_json::to_value(JsonResponse::<()>::error("nope")).unwrap();
        assert_eq!(body, json!({"error": true, "message": "nope"}));
    }

    #[test]
    fn ok_envelope_carries_data() {
        let body = serde_json::to_value(JsonResponse::ok("done", json!({"id": 7}))).unwrap();
        assert_eq!(
            body,
            json!({"error": false, "message": "done", "data": {"id": 7}})
        );
    }
}
