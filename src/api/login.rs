// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::{
    auth::AuthError,
    error::ApiError,
    models::{ErrorResponse, LoginRequest, LoginResponse},
    state::AppState,
};

/// Admin login.
///
/// A body that cannot be read, or that lacks either field, never matches the
/// configured credentials.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    tag = "Auth",
    responses(
        (status = 200, body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse)
    )
)]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!(detail = %rejection.body_text(), "Login attempt with unreadable body");
        ApiError::from(AuthError::InvalidCredentials)
    })?;

    let (Some(username), Some(password)) = (request.username, request.password) else {
        tracing::warn!("Login attempt with missing credentials");
        return Err(AuthError::InvalidCredentials.into());
    };

    let token = state.issuer.login(&username, &password).map_err(|e| {
        tracing::warn!(%username, error_code = e.error_code(), "Admin login failed");
        ApiError::from(e)
    })?;

    tracing::info!(%username, "Admin logged in");

    Ok(Json(LoginResponse {
        success: true,
        token,
        message: "Login successful".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AuthSettings;
    use crate::storage::RegistrationDatabase;
    use axum::http::StatusCode;

    fn create_test_state() -> AppState {
        AppState::new(
            RegistrationDatabase::in_memory().unwrap(),
            &AuthSettings {
                admin_username: "admin".into(),
                admin_password: "correctpass".into(),
                jwt_secret: "test-secret".into(),
            },
        )
    }

    fn body(username: Option<&str>, password: Option<&str>) -> LoginRequest {
        LoginRequest {
            username: username.map(String::from),
            password: password.map(String::from),
        }
    }

    #[tokio::test]
    async fn login_success_returns_verifiable_token() {
        let state = create_test_state();

        let Json(response) = login(
            State(state.clone()),
            Ok(Json(body(Some("admin"), Some("correctpass")))),
        )
        .await
        .expect("login succeeds");

        assert!(response.success);
        assert_eq!(response.message, "Login successful");
        let admin = state.verifier.verify(&response.token).unwrap();
        assert_eq!(admin.username, "admin");
    }

    #[tokio::test]
    async fn wrong_password_is_401() {
        let state = create_test_state();

        let err = login(State(state), Ok(Json(body(Some("admin"), Some("nope")))))
            .await
            .unwrap_err();

        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
        assert_eq!(err.message, "Invalid credentials");
        assert!(err.error.is_none());
    }

    #[tokio::test]
    async fn missing_fields_are_401() {
        let state = create_test_state();

        let err = login(State(state), Ok(Json(body(Some("admin"), None))))
            .await
            .unwrap_err();

        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    }
}
