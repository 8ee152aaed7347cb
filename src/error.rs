// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::ErrorResponse;
use crate::storage::StoreError;

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub error: Option<String>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            error: None,
        }
    }

    /// Attach the underlying failure detail shown in the envelope's `error`.
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// Map a store failure onto the envelope, using `message` as the
    /// operation-level summary.
    ///
    /// Validation failures become 400; anything else is an unexpected 500.
    pub fn from_store(message: impl Into<String>, err: StoreError) -> Self {
        match err {
            StoreError::Validation(validation) => {
                Self::bad_request(message).with_error(validation.to_string())
            }
            other => {
                tracing::error!(error = %other, "Registration store failure");
                Self::internal(message).with_error(other.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            success: false,
            message: self.message,
            error: self.error,
        });
        (self.status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FieldError, ValidationError};
    use axum::body::to_bytes;

    #[test]
    fn constructors_set_status_and_message() {
        let bad = ApiError::bad_request("bad");
        assert_eq!(bad.status, StatusCode::BAD_REQUEST);
        assert_eq!(bad.message, "bad");
        assert!(bad.error.is_none());

        let unauth = ApiError::unauthorized("nope");
        assert_eq!(unauth.status, StatusCode::UNAUTHORIZED);

        let internal = ApiError::internal("oops").with_error("disk full");
        assert_eq!(internal.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(internal.error.as_deref(), Some("disk full"));
    }

    #[test]
    fn validation_store_errors_map_to_400() {
        let err = StoreError::Validation(ValidationError(vec![FieldError {
            field: "phone",
            reason: "is required",
        }]));
        let api = ApiError::from_store("Registration failed", err);
        assert_eq!(api.status, StatusCode::BAD_REQUEST);
        assert_eq!(api.message, "Registration failed");
        assert_eq!(
            api.error.as_deref(),
            Some("Registration validation failed: phone is required")
        );
    }

    #[test]
    fn other_store_errors_map_to_500() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "gone");
        let api = ApiError::from_store("Error fetching registrations", StoreError::Io(io));
        assert_eq!(api.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api.message, "Error fetching registrations");
    }

    #[tokio::test]
    async fn into_response_returns_envelope() {
        let response = ApiError::bad_request("Registration failed")
            .with_error("bad data")
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body_bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = String::from_utf8(body_bytes.to_vec()).unwrap();
        assert_eq!(
            body,
            r#"{"success":false,"message":"Registration failed","error":"bad data"}"#
        );
    }
}
