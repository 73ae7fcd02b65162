//! Response body shapes shared by handlers and error mapping.

use serde::Serialize;
use videohub_core::validation::FieldError;

/// Body of a 400 response: every failed rule, in rule order.
///
/// ```json
/// {"errorsMessages": [{"message": "Invalid title", "field": "title"}]}
/// ```
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationErrorResponse {
    pub errors_messages: Vec<FieldError>,
}

/// Body of a 500 response. Never carries internal details.
#[derive(Debug, Serialize)]
pub struct ServerErrorResponse {
    pub error: &'static str,
}

pub const INTERNAL_SERVER_ERROR_MESSAGE: &str = "Internal Server Error";
