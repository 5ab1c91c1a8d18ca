use std::fmt::Display;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::{debug, error};

use crate::item::core::crud::Record;
use crate::logging::get_log_file_path;
use crate::server::error_mapping::ToStructuredError;

#[derive(Debug, Serialize)]
pub struct ErrorMessage {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,
    pub code: String,
}

/// JSON payload of a 500 response.
#[derive(Debug, Serialize)]
pub struct StructuredError {
    pub logs: String,
    pub messages: Vec<ErrorMessage>,
}

impl StructuredError {
    pub fn new(code: &str, message: String) -> Self {
        Self {
            logs: get_log_file_path().to_string(),
            messages: vec![ErrorMessage {
                message,
                tip: None,
                code: code.to_string(),
            }],
        }
    }

    #[must_use]
    pub fn with_tip(mut self, tip: &str) -> Self {
        if let Some(msg) = self.messages.first_mut() {
            msg.tip = Some(tip.to_string());
        }
        self
    }
}

/// Convenience function to convert a domain error into a structured error.
pub fn to_structured_error<E: ToStructuredError + Display>(err: &E) -> StructuredError {
    let (code, tip) = err.error_code_and_tip();
    let se = StructuredError::new(code, err.to_string());
    match tip {
        Some(tip) => se.with_tip(tip),
        None => se,
    }
}

/// Error returned by the REST handlers.
///
/// A missing record becomes a plain-text 404 naming the resource; anything else is
/// logged and becomes a 500 with a structured JSON body.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    body: Option<StructuredError>,
}

impl ApiError {
    /// Map a store error for records of type `R`.
    pub fn from_store<R: Record, E: ToStructuredError + Display>(err: &E) -> Self {
        let status = err.status_code();
        if status == StatusCode::NOT_FOUND {
            debug!(noun = R::NOUN, error = %err, "Record not found");
            return Self {
                status,
                message: format!("Sorry, that {} doesn't exist", R::NOUN),
                body: None,
            };
        }
        error!(noun = R::NOUN, error = %err, "Store operation failed");
        Self {
            status,
            message: err.to_string(),
            body: Some(to_structured_error(err)),
        }
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.body {
            Some(body) => (
                self.status,
                Json(serde_json::json!({ "error": body })),
            )
                .into_response(),
            None => (self.status, self.message).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::core::error::ItemError;
    use crate::item::entities::{Ticket, TodoItem};

    #[test]
    fn test_structured_error_json_format() {
        let se = StructuredError::new("ITEM_NOT_FOUND", "Item not found: abc".to_string());
        let parsed = serde_json::to_value(&se).unwrap();
        assert_eq!(parsed["messages"][0]["code"], "ITEM_NOT_FOUND");
        assert_eq!(parsed["messages"][0]["message"], "Item not found: abc");
        assert!(parsed["messages"][0].get("tip").is_none());
        // logs field should exist (may be empty in test context since OnceLock not set)
        assert!(parsed.get("logs").is_some());
    }

    #[test]
    fn test_structured_error_with_tip() {
        let se = StructuredError::new("PERSISTENCE_FAILURE", "disk".to_string())
            .with_tip("Check the database");
        let parsed = serde_json::to_value(&se).unwrap();
        assert_eq!(parsed["messages"][0]["tip"], "Check the database");
    }

    #[test]
    fn test_not_found_uses_resource_noun() {
        let api = ApiError::from_store::<Ticket, _>(&ItemError::not_found("3"));
        assert_eq!(api.status(), StatusCode::NOT_FOUND);
        assert_eq!(api.message, "Sorry, that ticket doesn't exist");
        assert!(api.body.is_none());
    }

    #[test]
    fn test_persistence_is_internal_error_with_body() {
        let api = ApiError::from_store::<TodoItem, _>(&ItemError::persistence("gone"));
        assert_eq!(api.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = api.body.unwrap();
        assert_eq!(
            body.messages.first().map(|m| m.code.as_str()),
            Some("PERSISTENCE_FAILURE")
        );
    }
}
