use serde::{Deserialize, Serialize};

/// Body shape for single-error responses: `{"message": "..."}`.
#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    pub message: String,
}

/// Body shape for validation failures: `{"messages": ["...", ...]}`.
///
/// Carries every failing message at once so a caller can report all
/// violations in one round trip.
#[derive(Serialize, Deserialize)]
pub struct ValidationErrorsDto {
    pub messages: Vec<String>,
}
