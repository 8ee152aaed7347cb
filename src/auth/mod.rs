// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Authentication Module
//!
//! Static-credential admin login and bearer-token verification.
//!
//! ## Auth Flow
//!
//! 1. Admin posts `{username, password}` to `/api/auth/login`
//! 2. [`TokenIssuer`] compares both against the configured pair and signs an
//!    HS256 JWT `{username, role: "admin", iat, exp}` valid for 24 hours
//! 3. Client sends `Authorization: Bearer <token>` on protected calls
//! 4. [`require_admin`] verifies signature and expiry with the same secret and
//!    attaches the [`AuthenticatedAdmin`] to the request
//!
//! ## Security
//!
//! - No server-side sessions; a token is valid until it expires
//! - Clock skew tolerance is 60 seconds
//! - No lockout or rate limiting on login

pub mod claims;
pub mod error;
pub mod extractor;
pub mod issuer;
pub mod middleware;

pub use claims::{AdminClaims, AuthenticatedAdmin, Role};
pub use error::AuthError;
pub use extractor::Auth;
pub use issuer::{TokenIssuer, TOKEN_TTL_SECS};
pub use middleware::{require_admin, TokenVerifier};
