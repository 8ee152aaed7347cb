// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Registration schema: required fields, normalisation and defaults.

use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::{CreateRegistrationRequest, Registration};

/// A single failed field constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Wire name of the field (camelCase).
    pub field: &'static str,
    pub reason: &'static str,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.reason)
    }
}

/// Validation failure listing every offending field in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError(pub Vec<FieldError>);

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = self
            .0
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "Registration validation failed: {fields}")
    }
}

impl std::error::Error for ValidationError {}

/// A submission that passed validation and has been normalised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRegistration {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub state: String,
    pub zone: String,
    pub questions: String,
}

impl NewRegistration {
    /// Validate and normalise a raw submission.
    ///
    /// Required fields are trimmed and must be non-empty afterwards; `email`
    /// is lowercased; `questions` defaults to an empty string.
    pub fn parse(request: CreateRegistrationRequest) -> Result<Self, ValidationError> {
        let mut errors = Vec::new();

        let full_name = required(request.full_name, "fullName", &mut errors);
        let phone = required(request.phone, "phone", &mut errors);
        let email = required(request.email, "email", &mut errors).to_lowercase();
        let state = required(request.state, "state", &mut errors);
        let zone = required(request.zone, "zone", &mut errors);

        if !errors.is_empty() {
            return Err(ValidationError(errors));
        }

        Ok(Self {
            full_name,
            phone,
            email,
            state,
            zone,
            questions: request.questions.unwrap_or_default(),
        })
    }

    /// Stamp identity and creation time, producing the stored record.
    pub fn into_record(self, registered_at: DateTime<Utc>) -> Registration {
        Registration {
            id: Uuid::new_v4().to_string(),
            full_name: self.full_name,
            phone: self.phone,
            email: self.email,
            state: self.state,
            zone: self.zone,
            questions: self.questions,
            registered_at,
        }
    }
}

fn required(
    value: Option<String>,
    field: &'static str,
    errors: &mut Vec<FieldError>,
) -> String {
    let trimmed = value.as_deref().map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        errors.push(FieldError {
            field,
            reason: "is required",
        });
    }
    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request() -> CreateRegistrationRequest {
        CreateRegistrationRequest {
            full_name: Some("  Ada Lovelace ".into()),
            phone: Some(" 0801 ".into()),
            email: Some(" Ada@Example.COM ".into()),
            state: Some("Lagos".into()),
            zone: Some(" West".into()),
            questions: None,
        }
    }

    #[test]
    fn parse_trims_and_lowercases() {
        let parsed = NewRegistration::parse(full_request()).unwrap();
        assert_eq!(parsed.full_name, "Ada Lovelace");
        assert_eq!(parsed.phone, "0801");
        assert_eq!(parsed.email, "ada@example.com");
        assert_eq!(parsed.zone, "West");
        assert_eq!(parsed.questions, "");
    }

    #[test]
    fn questions_are_kept_verbatim() {
        let mut request = full_request();
        request.questions = Some("  Is there parking? ".into());
        let parsed = NewRegistration::parse(request).unwrap();
        assert_eq!(parsed.questions, "  Is there parking? ");
    }

    #[test]
    fn missing_and_blank_fields_are_all_reported() {
        let mut request = full_request();
        request.phone = None;
        request.zone = Some("   ".into());

        let err = NewRegistration::parse(request).unwrap_err();
        let fields: Vec<_> = err.0.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["phone", "zone"]);
        assert_eq!(
            err.to_string(),
            "Registration validation failed: phone is required, zone is required"
        );
    }

    #[test]
    fn into_record_assigns_unique_ids() {
        let now = Utc::now();
        let a = NewRegistration::parse(full_request()).unwrap().into_record(now);
        let b = NewRegistration::parse(full_request()).unwrap().into_record(now);
        assert_ne!(a.id, b.id);
        assert_eq!(a.registered_at, now);
    }
}
