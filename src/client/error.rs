// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Client-side errors.

use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    #[error("base url cannot carry path segments: {0}")]
    InvalidBaseUrl(String),

    /// Non-2xx response. `message` and `error` are the envelope's text, verbatim.
    #[error("{message}")]
    Api {
        status: StatusCode,
        message: String,
        error: Option<String>,
    },

    #[error("token cache i/o error: {0}")]
    TokenIo(#[from] std::io::Error),

    #[error("token cache format error: {0}")]
    TokenFormat(#[from] serde_json::Error),
}

impl ClientError {
    /// Whether the server rejected the call as unauthenticated.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Api { status, .. } if *status == StatusCode::UNAUTHORIZED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_displays_message_verbatim() {
        let err = ClientError::Api {
            status: StatusCode::BAD_REQUEST,
            message: "Registration failed".into(),
            error: Some("phone is required".into()),
        };
        assert_eq!(err.to_string(), "Registration failed");
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn unauthorized_is_detected() {
        let err = ClientError::Api {
            status: StatusCode::UNAUTHORIZED,
            message: "Token has expired".into(),
            error: Some("token_expired".into()),
        };
        assert!(err.is_unauthorized());
    }
}
