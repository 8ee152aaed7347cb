// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Drives the client gateway and router against a live server.

use std::sync::Arc;

use event_registration_server::{
    api::router,
    client::{
        ApiClient, ClientError, ClientRouter, FileTokenStore, MemoryTokenStore, Navigation,
        TokenStore, View, LOGIN_PATH,
    },
    config::AuthSettings,
    models::CreateRegistrationRequest,
    state::AppState,
    storage::RegistrationDatabase,
};
use reqwest::StatusCode;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        let state = AppState::new(
            RegistrationDatabase::in_memory().expect("in-memory database"),
            &AuthSettings {
                admin_username: "admin".into(),
                admin_password: "correctpass".into(),
                jwt_secret: "gateway-secret".into(),
            },
        );
        let app = router(state);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{addr}/api");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn submission(name: &str) -> CreateRegistrationRequest {
    CreateRegistrationRequest {
        full_name: Some(name.into()),
        phone: Some("1".into()),
        email: Some("a@x.com".into()),
        state: Some("S".into()),
        zone: Some("Z".into()),
        questions: None,
    }
}

#[tokio::test]
async fn admin_session_round_trip() {
    let srv = TestServer::spawn().await;
    let tokens: Arc<dyn TokenStore> = Arc::new(MemoryTokenStore::new());
    let api = ApiClient::new(&srv.base_url, tokens.clone()).unwrap();
    let nav = ClientRouter::new(tokens.clone());

    let health = api.health().await.unwrap();
    assert_eq!(health.status, "Server is running");

    let created = api.create_registration(&submission("A")).await.unwrap();
    assert!(created.success);

    assert_eq!(nav.navigate("/admin/panel"), Navigation::Redirect(LOGIN_PATH));

    let err = api.get_registrations().await.unwrap_err();
    assert!(err.is_unauthorized());

    let login = api.login("admin", "correctpass").await.unwrap();
    assert_eq!(login.message, "Login successful");
    assert_eq!(tokens.get(), Some(login.token));
    assert_eq!(nav.navigate("/admin/panel"), Navigation::Render(View::AdminPanel));

    let listed = api.get_registrations().await.unwrap();
    assert_eq!(listed.count, 1);
    assert_eq!(listed.data[0].id, created.data.id);

    let deleted = api.delete_registration(&created.data.id).await.unwrap();
    assert_eq!(deleted.message, "Registration deleted successfully");
    assert_eq!(api.get_registrations().await.unwrap().count, 0);
}

#[tokio::test]
async fn failed_login_surfaces_message_and_caches_nothing() {
    let srv = TestServer::spawn().await;
    let tokens = Arc::new(MemoryTokenStore::new());
    let api = ApiClient::new(&srv.base_url, tokens.clone()).unwrap();

    let err = api.login("admin", "wrong").await.unwrap_err();
    match err {
        ClientError::Api { status, ref message, .. } => {
            assert_eq!(status, StatusCode::UNAUTHORIZED);
            assert_eq!(message, "Invalid credentials");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(tokens.get().is_none());
}

#[tokio::test]
async fn validation_error_text_is_verbatim() {
    let srv = TestServer::spawn().await;
    let api = ApiClient::new(&srv.base_url, Arc::new(MemoryTokenStore::new())).unwrap();

    let mut bad = submission("A");
    bad.email = None;
    let err = api.create_registration(&bad).await.unwrap_err();

    assert_eq!(err.to_string(), "Registration failed");
    match err {
        ClientError::Api { status, error, .. } => {
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(
                error.as_deref(),
                Some("Registration validation failed: email is required")
            );
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn stale_token_is_cleared_on_401() {
    let srv = TestServer::spawn().await;
    let dir = tempfile::TempDir::new().unwrap();
    let tokens: Arc<dyn TokenStore> = Arc::new(FileTokenStore::new(dir.path().join("local.json")));
    tokens.set("stale.token.value").unwrap();

    let api = ApiClient::new(&srv.base_url, tokens.clone()).unwrap();
    let nav = ClientRouter::new(tokens.clone());
    assert_eq!(nav.navigate("/admin/panel"), Navigation::Render(View::AdminPanel));

    let err = api.get_registrations().await.unwrap_err();
    assert_eq!(
        nav.on_api_error(&err).unwrap(),
        Some(Navigation::Redirect(LOGIN_PATH))
    );
    assert!(tokens.get().is_none());
    assert_eq!(nav.navigate("/admin/panel"), Navigation::Redirect(LOGIN_PATH));
}
