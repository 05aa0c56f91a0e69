use actix_web::{HttpResponse, http::StatusCode};
use serde::Serialize;

/// The response shape every branch of the signup flow answers with:
/// a `message`, plus `details` on failure paths that have something to quote.
#[derive(Serialize, Debug)]
pub struct ApiMessage {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl ApiMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(message: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: Some(details.into()),
        }
    }

    pub fn to_response(&self, status: StatusCode) -> HttpResponse {
        HttpResponse::build(status).json(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_without_details_omits_the_key() {
        let body = serde_json::to_value(ApiMessage::new("Missing required fields")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"message": "Missing required fields"})
        );
    }

    #[test]
    fn message_with_details_includes_both_keys() {
        let body =
            serde_json::to_value(ApiMessage::with_details("Signup failed", "no capacity")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"message": "Signup failed", "details": "no capacity"})
        );
    }
}
