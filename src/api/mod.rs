// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    auth::require_admin,
    models::{
        CreateRegistrationRequest, ErrorResponse, HealthResponse, LoginRequest, LoginResponse,
        MessageResponse, Registration, RegistrationCreatedResponse, RegistrationListResponse,
    },
    state::AppState,
};

pub mod health;
pub mod login;
pub mod registrations;

pub fn router(state: AppState) -> Router {
    let guard = middleware::from_fn_with_state(state.clone(), require_admin);

    // `route_layer` on a method router only wraps the methods added before it,
    // so POST /registrations stays public.
    let api_routes = Router::new()
        .route(
            "/registrations",
            get(registrations::list_registrations)
                .route_layer(guard.clone())
                .post(registrations::create_registration),
        )
        .route(
            "/registrations/{id}",
            delete(registrations::delete_registration).route_layer(guard),
        )
        .route("/auth/login", post(login::login))
        .route("/health", get(health::health))
        .with_state(state);

    Router::new()
        .nest("/api", api_routes)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(CorsLayer::permissive()),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        registrations::create_registration,
        registrations::list_registrations,
        registrations::delete_registration,
        login::login,
        health::health
    ),
    components(
        schemas(
            Registration,
            CreateRegistrationRequest,
            RegistrationCreatedResponse,
            RegistrationListResponse,
            MessageResponse,
            ErrorResponse,
            LoginRequest,
            LoginResponse,
            HealthResponse
        )
    ),
    tags(
        (name = "Registrations", description = "Attendee registration submissions"),
        (name = "Auth", description = "Admin login"),
        (name = "Health", description = "Liveness probe")
    )
)]
pub struct ApiDoc;
