use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Activity not found")]
    NotFound,
    #[error("Student is already signed up for this activity")]
    AlreadyEnrolled,
    #[error("Student is not signed up for this activity")]
    NotEnrolled,
    #[error("Invalid activity {name}: {reason}")]
    InvalidActivity { name: String, reason: String },
    #[error("Activity {name} is defined more than once")]
    DuplicateActivity { name: String },
}

impl RegistryError {
    pub fn status(&self) -> StatusCode {
        match self {
            RegistryError::NotFound => StatusCode::NOT_FOUND,
            RegistryError::AlreadyEnrolled | RegistryError::NotEnrolled => StatusCode::BAD_REQUEST,
            // Only raised while seeding, never by a request.
            RegistryError::InvalidActivity { .. } | RegistryError::DuplicateActivity { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for RegistryError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(serde_json::json!({ "detail": self.to_string() })),
        )
            .into_response()
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid HOST value {value:?}: {source}")]
    InvalidHost {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("Invalid PORT value {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}
