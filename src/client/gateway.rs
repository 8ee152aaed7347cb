// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Thin HTTP wrapper over the registration API.
//!
//! Every call attaches the cached token as `Authorization: Bearer <token>`
//! when one is present. There is no retry, backoff or response caching.

use std::sync::Arc;

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use url::Url;

use super::{ClientError, TokenStore};
use crate::models::{
    CreateRegistrationRequest, ErrorResponse, HealthResponse, LoginRequest, LoginResponse,
    MessageResponse, RegistrationCreatedResponse, RegistrationListResponse,
};

/// API root used when none is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    tokens: Arc<dyn TokenStore>,
}

impl ApiClient {
    /// Create a client rooted at `base_url` (e.g. `http://host:5000/api`).
    pub fn new(base_url: &str, tokens: Arc<dyn TokenStore>) -> Result<Self, ClientError> {
        Self::with_http(reqwest::Client::new(), base_url, tokens)
    }

    pub fn with_http(
        http: reqwest::Client,
        base_url: &str,
        tokens: Arc<dyn TokenStore>,
    ) -> Result<Self, ClientError> {
        let mut base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl(base_url.to_string()));
        }
        // Joining relative paths needs a trailing slash on the root.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            http,
            base_url,
            tokens,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The token cache this client reads from.
    pub fn tokens(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    // =========================================================================
    // Auth
    // =========================================================================

    /// Log in and cache the returned token.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ClientError> {
        let body = LoginRequest {
            username: Some(username.to_string()),
            password: Some(password.to_string()),
        };
        let response: LoginResponse = self
            .send(self.request(Method::POST, "auth/login")?.json(&body))
            .await?;
        self.tokens.set(&response.token)?;
        Ok(response)
    }

    // =========================================================================
    // Registrations
    // =========================================================================

    pub async fn create_registration(
        &self,
        registration: &CreateRegistrationRequest,
    ) -> Result<RegistrationCreatedResponse, ClientError> {
        self.send(self.request(Method::POST, "registrations")?.json(registration))
            .await
    }

    pub async fn get_registrations(&self) -> Result<RegistrationListResponse, ClientError> {
        self.send(self.request(Method::GET, "registrations")?).await
    }

    pub async fn delete_registration(&self, id: &str) -> Result<MessageResponse, ClientError> {
        let mut url = self.endpoint("registrations")?;
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidBaseUrl(self.base_url.to_string()))?
            .push(id);
        self.send(self.authorize(self.http.request(Method::DELETE, url)))
            .await
    }

    pub async fn health(&self) -> Result<HealthResponse, ClientError> {
        self.send(self.request(Method::GET, "health")?).await
    }

    // =========================================================================
    // Request shaping
    // =========================================================================

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        Ok(self.base_url.join(path)?)
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ClientError> {
        let url = self.endpoint(path)?;
        Ok(self.authorize(self.http.request(method, url)))
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.tokens.get() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ClientError> {
        let response = builder.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let envelope = response.json::<ErrorResponse>().await.ok();
        let (message, error) = match envelope {
            Some(body) => (body.message, body.error),
            None => (
                status
                    .canonical_reason()
                    .unwrap_or("Request failed")
                    .to_string(),
                None,
            ),
        };

        Err(ClientError::Api {
            status,
            message,
            error,
        })
    }
}
