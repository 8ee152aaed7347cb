// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Axum extractor for the authenticated admin.
//!
//! Use the `Auth` extractor in handlers behind the guard:
//!
//! ```rust,ignore
//! async fn my_handler(Auth(admin): Auth) -> impl IntoResponse {
//!     // admin is AuthenticatedAdmin
//! }
//! ```

use axum::{extract::FromRequestParts, http::request::Parts};

use super::{middleware::bearer_token, AuthError, AuthenticatedAdmin};
use crate::state::AppState;

/// Extractor for the authenticated admin.
///
/// Reuses the identity inserted by [`require_admin`](super::require_admin)
/// when present; otherwise verifies the bearer token itself.
pub struct Auth(pub AuthenticatedAdmin);

impl FromRequestParts<AppState> for Auth {
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        // First check if middleware already set the admin
        if let Some(admin) = parts.extensions.get::<AuthenticatedAdmin>().cloned() {
            return Ok(Auth(admin));
        }

        let token = bearer_token(&parts.headers)?;
        let admin = state.verifier.verify(token)?;
        Ok(Auth(admin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Role;
    use crate::config::AuthSettings;
    use crate::storage::RegistrationDatabase;
    use axum::http::Request;

    fn create_test_state() -> AppState {
        AppState::new(
            RegistrationDatabase::in_memory().expect("in-memory database"),
            &AuthSettings {
                admin_username: "admin".into(),
                admin_password: "correctpass".into(),
                jwt_secret: "test-secret".into(),
            },
        )
    }

    fn parts_with(header: Option<String>) -> Parts {
        let mut builder = Request::builder().uri("/test");
        if let Some(value) = header {
            builder = builder.header("Authorization", value);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[tokio::test]
    async fn auth_extractor_requires_auth_header() {
        let state = create_test_state();
        let mut parts = parts_with(None);

        let result = Auth::from_request_parts(&mut parts, &state).await;
        assert!(matches!(result, Err(AuthError::MissingAuthHeader)));
    }

    #[tokio::test]
    async fn auth_extractor_succeeds_with_issued_token() {
        let state = create_test_state();
        let token = state.issuer.login("admin", "correctpass").unwrap();
        let mut parts = parts_with(Some(format!("Bearer {token}")));

        let Auth(admin) = Auth::from_request_parts(&mut parts, &state)
            .await
            .expect("token verifies");
        assert_eq!(admin.username, "admin");
    }

    #[tokio::test]
    async fn auth_extractor_prefers_extensions() {
        let state = create_test_state();
        let mut parts = parts_with(None);
        parts.extensions.insert(AuthenticatedAdmin {
            username: "from_middleware".into(),
            role: Role::Admin,
            expires_at: 0,
        });

        let Auth(admin) = Auth::from_request_parts(&mut parts, &state)
            .await
            .expect("extension is reused");
        assert_eq!(admin.username, "from_middleware");
    }
}
