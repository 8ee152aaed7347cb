// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! JWT claims and authenticated admin representation.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Roles a token can assert.
///
/// Only the static admin identity logs in, so `Admin` is the sole role. A
/// token carrying any other role string fails to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full administrative access
    Admin,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
        }
    }
}

/// Claims carried by an admin token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdminClaims {
    /// Username that logged in
    pub username: String,

    pub role: Role,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

/// Authenticated admin extracted from a verified token.
///
/// This is attached to request extensions by the auth guard.
#[derive(Debug, Clone, Serialize, ToSchema, PartialEq, Eq)]
pub struct AuthenticatedAdmin {
    pub username: String,

    pub role: Role,

    /// Token expiration (Unix timestamp, not serialized)
    #[serde(skip)]
    pub expires_at: i64,
}

impl AuthenticatedAdmin {
    pub fn from_claims(claims: AdminClaims) -> Self {
        Self {
            username: claims.username,
            role: claims.role,
            expires_at: claims.exp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), r#""admin""#);
        assert_eq!(Role::Admin.to_string(), "admin");
    }

    #[test]
    fn unknown_role_fails_to_deserialize() {
        let raw = r#"{"username":"u","role":"client","iat":0,"exp":1}"#;
        assert!(serde_json::from_str::<AdminClaims>(raw).is_err());
    }

    #[test]
    fn from_claims_copies_identity() {
        let admin = AuthenticatedAdmin::from_claims(AdminClaims {
            username: "admin".into(),
            role: Role::Admin,
            iat: 1_700_000_000,
            exp: 1_700_086_400,
        });
        assert_eq!(admin.username, "admin");
        assert_eq!(admin.role, Role::Admin);
        assert_eq!(admin.expires_at, 1_700_086_400);
    }
}
