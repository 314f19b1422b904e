use serde::Serialize;

/// Body returned by the root route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusResponse {
    #[serde(rename = "Status")]
    pub status: String,
}

impl StatusResponse {
    pub fn ok() -> Self {
        StatusResponse { status: "Ok".to_string() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: &str) -> Self {
        ErrorResponse { error: message.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_serializes_with_capitalized_key() {
        let value = serde_json::to_value(StatusResponse::ok()).unwrap();
        assert_eq!(value, json!({"Status": "Ok"}));
    }

    #[test]
    fn error_serializes_as_error_field() {
        let value = serde_json::to_value(ErrorResponse::new("Not Found")).unwrap();
        assert_eq!(value, json!({"error": "Not Found"}));
    }
}
