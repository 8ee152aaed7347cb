// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Client-side route table and navigation guard.
//!
//! Views marked `requires_auth` render only when a token is cached; otherwise
//! navigation redirects to the login view. A 401 from a protected call clears
//! the cached token and redirects the same way.

use std::sync::Arc;

use super::{ClientError, TokenStore};

/// Path of the admin login view.
pub const LOGIN_PATH: &str = "/admin/login";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    Register,
    AdminLogin,
    AdminPanel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub name: &'static str,
    pub view: View,
    pub requires_auth: bool,
}

pub const ROUTES: &[Route] = &[
    Route {
        path: "/",
        name: "home",
        view: View::Home,
        requires_auth: false,
    },
    Route {
        path: "/register",
        name: "register",
        view: View::Register,
        requires_auth: false,
    },
    Route {
        path: LOGIN_PATH,
        name: "adminLogin",
        view: View::AdminLogin,
        requires_auth: false,
    },
    Route {
        path: "/admin/panel",
        name: "adminPanel",
        view: View::AdminPanel,
        requires_auth: true,
    },
];

/// Outcome of a navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Render(View),
    Redirect(&'static str),
    NotFound,
}

pub struct ClientRouter {
    tokens: Arc<dyn TokenStore>,
}

impl ClientRouter {
    pub fn new(tokens: Arc<dyn TokenStore>) -> Self {
        Self { tokens }
    }

    /// Match a location against the route table.
    ///
    /// Matching ignores ASCII case. Query string, fragment and a trailing
    /// slash are ignored.
    pub fn resolve(location: &str) -> Option<&'static Route> {
        let path = location
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        ROUTES
            .iter()
            .find(|route| route.path.eq_ignore_ascii_case(path))
    }

    pub fn navigate(&self, location: &str) -> Navigation {
        match Self::resolve(location) {
            None => Navigation::NotFound,
            Some(route) if route.requires_auth && self.tokens.get().is_none() => {
                Navigation::Redirect(LOGIN_PATH)
            }
            Some(route) => Navigation::Render(route.view),
        }
    }

    /// React to a failed API call made from a view.
    ///
    /// On 401 the cached token is dropped and the user is sent to login.
    pub fn on_api_error(&self, err: &ClientError) -> Result<Option<Navigation>, ClientError> {
        if !err.is_unauthorized() {
            return Ok(None);
        }
        self.tokens.clear()?;
        Ok(Some(Navigation::Redirect(LOGIN_PATH)))
    }
}
