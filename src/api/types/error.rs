//! API error responses
//!
//! Validation and duplicate-email failures answer 400 with a
//! `validationErrors` map in field-check order; storage and internal
//! faults answer 500 with a generic message and are never collapsed into
//! a field error.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use tracing::error;

use crate::domain::{message, DomainError, Locale, ValidationErrorSet};

/// Localized field -> message map preserving validation check order
#[derive(Debug, Clone)]
pub struct LocalizedErrors(Vec<(&'static str, &'static str)>);

impl LocalizedErrors {
    pub fn new(errors: &ValidationErrorSet, locale: Locale) -> Self {
        Self(
            errors
                .iter()
                .map(|(field, key)| (field.as_str(), message(key, locale)))
                .collect(),
        )
    }
}

impl Serialize for LocalizedErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // serde_json's Map reorders keys; serialize by hand to keep
        // insertion order.
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (field, msg) in &self.0 {
            map.serialize_entry(field, msg)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
enum ApiErrorBody {
    Validation {
        #[serde(rename = "validationErrors")]
        validation_errors: LocalizedErrors,
    },
    Message {
        message: String,
    },
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    body: ApiErrorBody,
}

impl ApiError {
    /// Field-scoped validation failure
    pub fn validation(errors: &ValidationErrorSet, locale: Locale) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: ApiErrorBody::Validation {
                validation_errors: LocalizedErrors::new(errors, locale),
            },
        }
    }

    /// Server fault; detail stays in the logs
    pub fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: ApiErrorBody::Message {
                message: "Internal server error".to_string(),
            },
        }
    }

    /// Map a domain error to its HTTP shape for the requested locale
    pub fn from_domain(err: DomainError, locale: Locale) -> Self {
        match err {
            DomainError::Validation(errors) => Self::validation(&errors, locale),
            DomainError::Conflict { message } => {
                // Conflicts are converted to field errors before they reach
                // the API; one leaking through is a server fault.
                error!(message = %message, "unhandled conflict reached the API layer");
                Self::internal()
            }
            DomainError::Storage { message } => {
                error!(message = %message, "storage failure");
                Self::internal()
            }
            DomainError::Notification { message } => {
                error!(message = %message, "notification failure escaped best-effort dispatch");
                Self::internal()
            }
            DomainError::Internal { message } => {
                error!(message = %message, "internal failure");
                Self::internal()
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.status)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::Field;
    use crate::domain::MessageKey;

    fn username_and_email_errors() -> ValidationErrorSet {
        let mut errors = ValidationErrorSet::new();
        errors.insert(Field::Username, MessageKey::UsernameNull);
        errors.insert(Field::Email, MessageKey::EmailNull);
        errors
    }

    #[test]
    fn test_validation_error_is_400() {
        let err = ApiError::validation(&username_and_email_errors(), Locale::En);
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_serialization_preserves_field_order() {
        let errors = LocalizedErrors::new(&username_and_email_errors(), Locale::En);

        let json = serde_json::to_string(&errors).unwrap();
        assert_eq!(
            json,
            r#"{"username":"Username cannot be null","email":"E-mail cannot be null"}"#
        );
    }

    #[test]
    fn test_validation_body_shape() {
        let err = ApiError::validation(
            &ValidationErrorSet::single(Field::Email, MessageKey::EmailInUse),
            Locale::En,
        );

        let json = serde_json::to_string(&err.body).unwrap();
        assert_eq!(json, r#"{"validationErrors":{"email":"E-mail in use"}}"#);
    }

    #[test]
    fn test_locale_changes_messages_not_fields() {
        let en = LocalizedErrors::new(&username_and_email_errors(), Locale::En);
        let es = LocalizedErrors::new(&username_and_email_errors(), Locale::Es);

        let en_json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&en).unwrap()).unwrap();
        let es_json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&es).unwrap()).unwrap();

        assert_eq!(en_json["username"], "Username cannot be null");
        assert_eq!(es_json["username"], "El nombre de usuario no puede ser nulo");
        assert!(es_json.get("email").is_some());
        assert!(es_json.get("password").is_none());
    }

    #[test]
    fn test_storage_error_maps_to_500_without_field_errors() {
        let err = ApiError::from_domain(DomainError::storage("connection reset"), Locale::En);

        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);

        let json = serde_json::to_string(&err.body).unwrap();
        assert!(!json.contains("validationErrors"));
        assert!(!json.contains("connection reset"));
    }
}
