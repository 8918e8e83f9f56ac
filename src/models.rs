use serde::Deserialize;

/// Parameters for a recommendations lookup, captured from the input fields
/// at trigger time.
///
/// `k` stays a string on purpose: the count field is passed through
/// URL-encoded as typed, and the backend owns its integer semantics. The
/// only client-side validation anywhere is the non-empty check on the
/// user id, which happens before this struct is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationRequest {
    pub user_id: String,
    pub k: String,
}

impl RecommendationRequest {
    /// Builds a request from raw input field values.
    ///
    /// Both fields are trimmed; a blank count falls back to "5".
    pub fn from_inputs(user_id: &str, k: &str) -> Self {
        let k = k.trim();
        Self {
            user_id: user_id.trim().to_string(),
            k: if k.is_empty() { "5" } else { k }.to_string(),
        }
    }
}

/// Response body of `POST /demo/seed`
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SeedResponse {
    pub message: String,
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Error body shape used by the backend on non-success statuses
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_trims_inputs() {
        let request = RecommendationRequest::from_inputs("  u_demo  ", " 3 ");
        assert_eq!(request.user_id, "u_demo");
        assert_eq!(request.k, "3");
    }

    #[test]
    fn test_blank_count_defaults_to_five() {
        let request = RecommendationRequest::from_inputs("u_demo", "   ");
        assert_eq!(request.k, "5");
    }

    #[test]
    fn test_seed_response_deserialization() {
        let json = r#"{"message": "demo data seeded", "user_id": "u_demo"}"#;
        let response: SeedResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.message, "demo data seeded");
        assert_eq!(response.user_id, Some("u_demo".to_string()));
    }

    #[test]
    fn test_error_body_without_detail() {
        let body: ApiErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.detail, None);
    }
}
