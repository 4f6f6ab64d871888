use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::{FieldErrorDto, ValidationReportDto};

/// Accumulated field-scoped validation failures for one request.
///
/// Validation runs to completion before any query executes, collecting every
/// violation so the client gets the full picture in one 422 response. An empty
/// report is never returned as an error; callers convert via `into_result`.
#[derive(Error, Debug, Default, PartialEq, Clone)]
#[error("Validation failed with {} error(s)", errors.len())]
pub struct ValidationError {
    pub errors: Vec<FieldErrorDto>,
}

impl ValidationError {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one violation against the named field. Cross-field violations
    /// use a comma-joined field list, e.g. `"check_in, check_out"`.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldErrorDto {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Converts the report into `Err(self)` when any violation was recorded.
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// 422 Unprocessable Entity with the full violation list as the body.
impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ValidationReportDto {
                errors: self.errors,
            }),
        )
            .into_response()
    }
}
