//! Error handling for the Materiah REST client
//!
//! Every failure is reducible to a list of human-readable messages for
//! inline display next to a form and for transient toast notifications.

use thiserror::Error;

/// Client error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// Input rejected locally before any network call was made
    #[error("validation failed")]
    Validation { messages: Vec<String> },

    #[error("not authorized")]
    Unauthorized,

    #[error("resource not found: {0}")]
    NotFound(String),

    /// The server rejected the request; `messages` carries its error strings
    #[error("request rejected by server (HTTP {status})")]
    Rejected { status: u16, messages: Vec<String> },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("configuration error: {0}")]
    Configuration(#[from] config::ConfigError),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl ApiError {
    /// Build a validation error from `validator` derive output
    pub fn from_validation(errors: validator::ValidationErrors) -> Self {
        let mut messages = Vec::new();
        for (field, field_errors) in errors.field_errors() {
            for error in field_errors {
                match &error.message {
                    Some(message) => messages.push(message.to_string()),
                    None => messages.push(format!("{} is invalid", field)),
                }
            }
        }
        if messages.is_empty() {
            messages.push("Invalid input".to_string());
        }
        ApiError::Validation { messages }
    }

    /// Human-readable messages for display
    pub fn messages(&self) -> Vec<String> {
        match self {
            ApiError::Validation { messages } | ApiError::Rejected { messages, .. } => {
                messages.clone()
            }
            ApiError::Unauthorized => vec!["You are not authorized to perform this action".into()],
            ApiError::NotFound(resource) => vec![format!("{} was not found", resource)],
            ApiError::Transport(e) => vec![format!("Request failed: {}", e)],
            ApiError::Configuration(e) => vec![format!("Configuration error: {}", e)],
            ApiError::Url(e) => vec![format!("Invalid URL: {}", e)],
        }
    }
}

/// Result type alias for client calls
pub type ApiResult<T> = Result<T, ApiError>;

/// Flatten a server error body into displayable messages.
///
/// The API reports errors either as `{"detail": "..."}` or as a map of
/// field name to a list of message strings.
pub(crate) fn messages_from_body(body: &serde_json::Value) -> Vec<String> {
    let mut messages = Vec::new();

    match body {
        serde_json::Value::String(s) => messages.push(s.clone()),
        serde_json::Value::Array(items) => {
            for item in items {
                if let Some(s) = item.as_str() {
                    messages.push(s.to_string());
                }
            }
        }
        serde_json::Value::Object(map) => {
            for (field, value) in map {
                let prefix = if field == "detail" || field == "non_field_errors" {
                    None
                } else {
                    Some(field.as_str())
                };
                match value {
                    serde_json::Value::String(s) => match prefix {
                        Some(p) => messages.push(format!("{}: {}", p, s)),
                        None => messages.push(s.clone()),
                    },
                    serde_json::Value::Array(items) => {
                        for item in items {
                            if let Some(s) = item.as_str() {
                                match prefix {
                                    Some(p) => messages.push(format!("{}: {}", p, s)),
                                    None => messages.push(s.to_string()),
                                }
                            }
                        }
                    }
                    _ => {}
                }
            }
        }
        _ => {}
    }

    if messages.is_empty() {
        messages.push("The request could not be completed".to_string());
    }
    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_detail_body() {
        let body = json!({"detail": "Invalid token."});
        assert_eq!(messages_from_body(&body), vec!["Invalid token."]);
    }

    #[test]
    fn test_field_error_map() {
        let body = json!({
            "name": ["supplier with this name already exists."],
            "office_email": ["Enter a valid email address."]
        });
        let messages = messages_from_body(&body);
        assert_eq!(messages.len(), 2);
        assert!(messages
            .iter()
            .any(|m| m == "name: supplier with this name already exists."));
        assert!(messages
            .iter()
            .any(|m| m == "office_email: Enter a valid email address."));
    }

    #[test]
    fn test_non_field_errors_unprefixed() {
        let body = json!({"non_field_errors": ["Quote is already fulfilled."]});
        assert_eq!(messages_from_body(&body), vec!["Quote is already fulfilled."]);
    }

    #[test]
    fn test_unparseable_body_falls_back() {
        let body = json!(null);
        assert_eq!(
            messages_from_body(&body),
            vec!["The request could not be completed"]
        );
    }
}
