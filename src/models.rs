// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # API Data Models
//!
//! This module defines the request and response data structures used by
//! the REST API and the client gateway. All types derive `Serialize`,
//! `Deserialize`, and `ToSchema` for automatic JSON handling and OpenAPI
//! documentation.
//!
//! ## Response Envelope
//!
//! Every response body is a uniform envelope `{success, message, data?, error?}`.
//! Listing adds `count`, login adds `token`. Failures render [`ErrorResponse`].
//!
//! JSON field names are camelCase to match the public form.

use chrono::{DateTime, Utc};
use serde::{
    de::{self, Unexpected},
    Deserialize, Deserializer, Serialize,
};
use serde_json::Value;
use utoipa::ToSchema;

// =============================================================================
// Registration Models
// =============================================================================

/// A stored attendee registration.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    /// Unique identifier assigned by the store (UUID).
    pub id: String,
    /// Attendee's full name (trimmed).
    pub full_name: String,
    /// Contact phone number (trimmed).
    pub phone: String,
    /// Contact email (trimmed, lowercased).
    pub email: String,
    pub state: String,
    pub zone: String,
    /// Free-form questions for the organisers; empty when none were asked.
    pub questions: String,
    /// When the registration was submitted.
    pub registered_at: DateTime<Utc>,
}

/// Public registration form submission.
///
/// All fields are optional at the wire level so that a missing field is
/// reported as a validation failure naming the field. Numbers and booleans
/// are accepted in place of strings and kept in their textual form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRegistrationRequest {
    #[serde(default, deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
    #[serde(default, deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub questions: Option<String>,
}

/// Read a text field that may arrive as a string, number or boolean.
///
/// `null` is treated as absent; objects and arrays are rejected.
fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(text) => Ok(Some(text)),
        Value::Number(number) => Ok(Some(number.to_string())),
        Value::Bool(flag) => Ok(Some(flag.to_string())),
        Value::Array(_) => Err(de::Error::invalid_type(
            Unexpected::Seq,
            &"a string, number or boolean",
        )),
        Value::Object(_) => Err(de::Error::invalid_type(
            Unexpected::Map,
            &"a string, number or boolean",
        )),
    }
}

// =============================================================================
// Auth Models
// =============================================================================

/// Admin login body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Successful login response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub success: bool,
    /// Signed admin token, valid for 24 hours.
    pub token: String,
    pub message: String,
}

// =============================================================================
// Envelopes
// =============================================================================

/// Response for a created registration.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegistrationCreatedResponse {
    pub success: bool,
    pub message: String,
    pub data: Registration,
}

/// Response listing every registration, newest first.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegistrationListResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<Registration>,
}

/// Envelope carrying only a status message.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

/// Failure envelope shared by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    /// Underlying failure detail or machine-readable code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Liveness response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}
