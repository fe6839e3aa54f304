use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::HttpError;

// ── Error types ────────────────────────────────────────────

/// A field-level validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
    pub code: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            code: code.into(),
        }
    }
}

/// Container for validation errors, used as the payload of `HttpError::Validation`.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationErrorResponse {
    pub errors: Vec<FieldError>,
}

impl From<Vec<FieldError>> for ValidationErrorResponse {
    fn from(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }
}

/// Flatten a garde report into one [`FieldError`] per failing field.
pub fn field_errors(report: &garde::Report) -> Vec<FieldError> {
    report
        .iter()
        .map(|(path, error)| {
            let field = {
                let s = path.to_string();
                if s.is_empty() { "value".to_string() } else { s }
            };
            FieldError::new(field, error.message(), "validation")
        })
        .collect()
}

/// Run the declarative rules of `value`, returning the failing fields.
pub fn validate<T>(value: &T) -> Result<(), Vec<FieldError>>
where
    T: garde::Validate,
    T::Context: Default,
{
    value.validate().map_err(|report| field_errors(&report))
}

// ── Extractor ──────────────────────────────────────────────

/// JSON body extractor that runs garde validation before the handler.
///
/// Any body problem (bad JSON, wrong content type, type mismatch) is
/// reported as a single `body` field error; rule violations are reported
/// per field. Both become a 400.
pub struct Validated<T>(pub T);

impl<S, T> FromRequest<S> for Validated<T>
where
    S: Send + Sync,
    T: DeserializeOwned + garde::Validate + Send,
    T::Context: Default,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                HttpError::Validation(
                    vec![FieldError::new("body", rejection.body_text(), "parse")].into(),
                )
            })?;

        validate(&value).map_err(|errors| HttpError::Validation(errors.into()))?;

        Ok(Validated(value))
    }
}

// Re-export garde::Validate for convenience.
pub use garde::Validate;
