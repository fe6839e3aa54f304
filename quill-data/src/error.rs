use quill_core::{FieldError, HttpError};

/// Errors that can occur in the data layer.
#[derive(Debug)]
pub enum DataError {
    NotFound(String),
    Validation(Vec<FieldError>),
    Conflict(String),
    Other(String),
}

impl DataError {
    pub fn article_not_found(id: &str) -> Self {
        DataError::NotFound(format!("Article {id} not found"))
    }
}

impl std::fmt::Display for DataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataError::NotFound(msg) => write!(f, "Not found: {msg}"),
            DataError::Validation(errors) => {
                write!(f, "Invalid data:")?;
                for error in errors {
                    write!(f, " {}: {};", error.field, error.message)?;
                }
                Ok(())
            }
            DataError::Conflict(msg) => write!(f, "Conflict: {msg}"),
            DataError::Other(msg) => write!(f, "Data error: {msg}"),
        }
    }
}

impl std::error::Error for DataError {}

impl From<DataError> for HttpError {
    fn from(err: DataError) -> Self {
        match err {
            DataError::NotFound(msg) => HttpError::NotFound(msg),
            DataError::Validation(errors) => HttpError::Validation(errors.into()),
            DataError::Conflict(msg) => HttpError::Conflict(msg),
            DataError::Other(msg) => HttpError::Internal(msg),
        }
    }
}
