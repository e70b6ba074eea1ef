use std::collections::BTreeMap;
use thiserror::Error;

/// Field name → human-readable complaint.
pub type FieldErrors = BTreeMap<String, String>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Receipt validation failed on {} field(s)", .0.len())]
    Validation(FieldErrors),

    #[error("Invalid value for {field}: {message}")]
    InvalidField { field: String, message: String },
}

impl Error {
    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Error::InvalidField {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Flatten the error into the field → message map reported to clients.
    pub fn field_errors(&self) -> FieldErrors {
        match self {
            Error::Validation(errors) => errors.clone(),
            Error::InvalidField { field, message } => {
                let mut errors = FieldErrors::new();
                errors.insert(field.clone(), message.clone());
                errors
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
