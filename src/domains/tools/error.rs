//! Tool-specific error types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use super::handlers::ToolInvocationResult;

/// Errors that can occur while invoking a tool.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// One or more required parameters were absent or empty.
    ///
    /// Carries every required parameter name, not just the missing ones, so
    /// the message is the same regardless of which field was left out.
    #[error("Missing required parameters: {}", .0.join(", "))]
    MissingRequiredParameters(Vec<String>),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a "missing required parameters" error naming all required fields.
    pub fn missing_required<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::MissingRequiredParameters(names.into_iter().map(Into::into).collect())
    }

    /// HTTP status this error is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::MissingRequiredParameters(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ToolError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ToolInvocationResult::from(self);
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_required_message() {
        let err = ToolError::missing_required(["campaign_brief_json", "candidates_csv_text"]);
        assert_eq!(
            err.to_string(),
            "Missing required parameters: campaign_brief_json, candidates_csv_text"
        );
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
