// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use crate::auth::{TokenIssuer, TokenVerifier};
use crate::config::AuthSettings;
use crate::storage::RegistrationDatabase;

/// Shared handler state.
///
/// The issuer and verifier are built from the same [`AuthSettings`], so a
/// token signed at login verifies in the guard.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<RegistrationDatabase>,
    pub issuer: Arc<TokenIssuer>,
    pub verifier: Arc<TokenVerifier>,
}

impl AppState {
    pub fn new(db: RegistrationDatabase, auth: &AuthSettings) -> Self {
        Self {
            db: Arc::new(db),
            issuer: Arc::new(TokenIssuer::new(auth)),
            verifier: Arc::new(TokenVerifier::new(&auth.jwt_secret)),
        }
    }
}
