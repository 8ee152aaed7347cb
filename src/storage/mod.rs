// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Registration Storage
//!
//! A single collection of registration records persisted in an embedded redb
//! database. The schema module owns validation and normalisation; the
//! database module owns persistence and newest-first ordering.

pub mod database;
pub mod schema;

pub use database::{RegistrationDatabase, StoreError, StoreResult};
pub use schema::{FieldError, NewRegistration, ValidationError};
