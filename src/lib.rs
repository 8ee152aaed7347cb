// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Event Registration - Attendee Registration Service
//!
//! A public endpoint collects attendee registrations; a password-protected
//! admin API lists and deletes them.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum)
//! - `auth` - Admin login and bearer-token guard (HS256 JWT)
//! - `client` - Route guard and HTTP gateway for the front end
//! - `storage` - Registration store (redb)

pub mod api;
pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod state;
pub mod storage;
