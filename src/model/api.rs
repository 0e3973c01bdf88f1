use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Error payload returned by every failing request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Confirmation payload returned by successful write requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StatusDto {
    /// Always `"ok"`.
    pub status: String,
    pub message: String,
}

impl StatusDto {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: "ok".to_string(),
            message: message.into(),
        }
    }
}

/// Every path the API serves, sorted alphabetically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SitemapDto {
    pub endpoints: Vec<String>,
}

/// A string that does not name any variant of an enumerated field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {kind} '{value}'")]
pub struct UnknownVariantError {
    /// Name of the enumerated field, e.g. `gender`.
    pub kind: &'static str,
    pub value: String,
}
