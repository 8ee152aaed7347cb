// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    extract::{FromRequest, Path, Request, State},
    http::{header::CONTENT_TYPE, StatusCode},
    Form, Json,
};

use crate::{
    auth::Auth,
    error::ApiError,
    models::{
        CreateRegistrationRequest, ErrorResponse, MessageResponse, RegistrationCreatedResponse,
        RegistrationListResponse,
    },
    state::AppState,
};

/// Submission body, read as JSON or as an urlencoded HTML form post.
///
/// Any unreadable body is answered with 400 "Registration failed".
pub struct RegistrationBody(pub CreateRegistrationRequest);

impl<S> FromRequest<S> for RegistrationBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"));

        let parsed = if is_form {
            Form::<CreateRegistrationRequest>::from_request(req, state)
                .await
                .map(|Form(request)| request)
                .map_err(|rejection| rejection.body_text())
        } else {
            Json::<CreateRegistrationRequest>::from_request(req, state)
                .await
                .map(|Json(request)| request)
                .map_err(|rejection| rejection.body_text())
        };

        parsed
            .map(RegistrationBody)
            .map_err(|detail| ApiError::bad_request("Registration failed").with_error(detail))
    }
}

#[utoipa::path(
    post,
    path = "/api/registrations",
    request_body(
        content = CreateRegistrationRequest,
        description = "JSON or application/x-www-form-urlencoded body"
    ),
    tag = "Registrations",
    responses(
        (status = 201, body = RegistrationCreatedResponse),
        (status = 400, description = "Missing or empty required field", body = ErrorResponse),
        (status = 500, body = ErrorResponse)
    )
)]
pub async fn create_registration(
    State(state): State<AppState>,
    RegistrationBody(request): RegistrationBody,
) -> Result<(StatusCode, Json<RegistrationCreatedResponse>), ApiError> {
    let registration = state
        .db
        .create(request)
        .map_err(|e| ApiError::from_store("Registration failed", e))?;

    tracing::info!(id = %registration.id, "Registration created");

    Ok((
        StatusCode::CREATED,
        Json(RegistrationCreatedResponse {
            success: true,
            message: "Registration successful!".to_string(),
            data: registration,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/registrations",
    tag = "Registrations",
    responses(
        (status = 200, body = RegistrationListResponse),
        (status = 401, body = ErrorResponse),
        (status = 500, body = ErrorResponse)
    )
)]
pub async fn list_registrations(
    Auth(_admin): Auth,
    State(state): State<AppState>,
) -> Result<Json<RegistrationListResponse>, ApiError> {
    let registrations = state
        .db
        .list_all()
        .map_err(|e| ApiError::from_store("Error fetching registrations", e))?;

    Ok(Json(RegistrationListResponse {
        success: true,
        count: registrations.len(),
        data: registrations,
    }))
}

#[utoipa::path(
    delete,
    path = "/api/registrations/{id}",
    params(
        ("id" = String, Path, description = "Identifier of the registration to delete")
    ),
    tag = "Registrations",
    responses(
        (status = 200, body = MessageResponse),
        (status = 401, body = ErrorResponse),
        (status = 500, body = ErrorResponse)
    )
)]
pub async fn delete_registration(
    Auth(admin): Auth,
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, ApiError> {
    let removed = state
        .db
        .delete(&id)
        .map_err(|e| ApiError::from_store("Error deleting registration", e))?;

    if removed {
        tracing::info!(%id, admin = %admin.username, "Registration deleted");
    } else {
        tracing::info!(%id, admin = %admin.username, "Delete requested for unknown registration");
    }

    Ok(Json(MessageResponse {
        success: true,
        message: "Registration deleted successfully".to_string(),
    }))
}
