// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Admin login and token issuance.
//!
//! The admin identity is a static credential pair from configuration. A
//! successful login yields an HS256 token asserting `{username, role: "admin"}`
//! that expires after 24 hours. No session state is kept server-side.

use chrono::{DateTime, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};

use super::claims::{AdminClaims, Role};
use super::AuthError;
use crate::config::AuthSettings;

/// Lifetime of an issued token (24 hours).
pub const TOKEN_TTL_SECS: i64 = 24 * 60 * 60;

/// Validates admin credentials and signs tokens.
pub struct TokenIssuer {
    admin_username: String,
    admin_password: String,
    encoding_key: EncodingKey,
}

impl TokenIssuer {
    pub fn new(settings: &AuthSettings) -> Self {
        Self {
            admin_username: settings.admin_username.clone(),
            admin_password: settings.admin_password.clone(),
            encoding_key: EncodingKey::from_secret(settings.jwt_secret.as_bytes()),
        }
    }

    /// Check the credential pair and issue a token on an exact match.
    pub fn login(&self, username: &str, password: &str) -> Result<String, AuthError> {
        if username != self.admin_username || password != self.admin_password {
            return Err(AuthError::InvalidCredentials);
        }
        self.issue_at(username, Utc::now())
    }

    /// Sign an admin token as if issued at `issued_at`.
    pub fn issue_at(&self, username: &str, issued_at: DateTime<Utc>) -> Result<String, AuthError> {
        let iat = issued_at.timestamp();
        let claims = AdminClaims {
            username: username.to_string(),
            role: Role::Admin,
            iat,
            exp: iat + TOKEN_TTL_SECS,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::InternalError(e.to_string()))
    }
}
