// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Client
//!
//! The front-end side of the service: a route table with an auth gate, an
//! HTTP gateway that attaches the cached admin token, and the token cache
//! itself. Both the router and the gateway receive the same
//! `Arc<dyn TokenStore>`.

pub mod error;
pub mod gateway;
pub mod router;
pub mod token;

pub use error::ClientError;
pub use gateway::{ApiClient, DEFAULT_API_URL};
pub use router::{ClientRouter, Navigation, Route, View, LOGIN_PATH, ROUTES};
pub use token::{FileTokenStore, MemoryTokenStore, TokenStore, ADMIN_TOKEN_KEY};
