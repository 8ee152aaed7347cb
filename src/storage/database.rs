// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Embedded registration database backed by redb (pure Rust, ACID).
//!
//! ## Table Layout
//!
//! - `registrations`: id → serialized Registration (JSON bytes)
//! - `registrations_by_time`: composite key (!registered_at_micros|id) → id
//!
//! Each create and delete runs in a single write transaction, so a record and
//! its index entry are always added or removed together.

use std::path::Path;

use chrono::{DateTime, Utc};
use redb::{
    backends::InMemoryBackend, Database, ReadableDatabase, ReadableTable, ReadableTableMetadata,
    TableDefinition,
};

use super::schema::{NewRegistration, ValidationError};
use crate::models::Registration;

// =============================================================================
// Table Definitions
// =============================================================================

/// Primary table: id → serialized Registration (JSON bytes).
const REGISTRATIONS: TableDefinition<&str, &[u8]> = TableDefinition::new("registrations");

/// Index: composite key → id.
/// Key format: `!micros_be|id` so a forward scan is newest-first.
const REGISTRATIONS_BY_TIME: TableDefinition<&[u8], &str> =
    TableDefinition::new("registrations_by_time");

// =============================================================================
// Error Type
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("redb error: {0}")]
    Redb(#[from] redb::Error),

    #[error("redb database error: {0}")]
    RedbDatabase(#[from] redb::DatabaseError),

    #[error("redb transaction error: {0}")]
    RedbTransaction(#[from] redb::TransactionError),

    #[error("redb table error: {0}")]
    RedbTable(#[from] redb::TableError),

    #[error("redb storage error: {0}")]
    RedbStorage(#[from] redb::StorageError),

    #[error("redb commit error: {0}")]
    RedbCommit(#[from] redb::CommitError),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Index Key Helpers
// =============================================================================

/// Build a composite key for the time index.
///
/// The inverted timestamp ensures newest-first ordering when scanning forward.
fn make_index_key(registered_at: DateTime<Utc>, id: &str) -> Vec<u8> {
    let micros = registered_at.timestamp_micros();
    let mut key = Vec::with_capacity(8 + 1 + id.len());
    key.extend_from_slice(&(!micros as u64).to_be_bytes());
    key.push(b'|');
    key.extend_from_slice(id.as_bytes());
    key
}

// =============================================================================
// RegistrationDatabase
// =============================================================================

/// Registration store.
pub struct RegistrationDatabase {
    db: Database,
}

impl RegistrationDatabase {
    /// Open (or create) the database at the given path.
    pub fn open(path: &Path) -> StoreResult<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let db = Database::create(path)?;
        Self::with_tables(db)
    }

    /// Open a database that lives only in memory.
    pub fn in_memory() -> StoreResult<Self> {
        let db = Database::builder().create_with_backend(InMemoryBackend::new())?;
        Self::with_tables(db)
    }

    // Pre-create all tables so later read transactions don't fail.
    fn with_tables(db: Database) -> StoreResult<Self> {
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(REGISTRATIONS)?;
            let _ = write_txn.open_table(REGISTRATIONS_BY_TIME)?;
        }
        write_txn.commit()?;
        Ok(Self { db })
    }

    // =========================================================================
    // Registration CRUD
    // =========================================================================

    /// Validate a submission and persist it with a fresh id and timestamp.
    ///
    /// Nothing is written when validation fails.
    pub fn create(
        &self,
        request: crate::models::CreateRegistrationRequest,
    ) -> StoreResult<Registration> {
        let new = NewRegistration::parse(request)?;
        let registration = new.into_record(Utc::now());
        self.insert(&registration)?;
        Ok(registration)
    }

    /// Persist an already-built record and its index entry.
    fn insert(&self, registration: &Registration) -> StoreResult<()> {
        let json = serde_json::to_vec(registration)?;
        let key = make_index_key(registration.registered_at, &registration.id);

        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(REGISTRATIONS)?;
            table.insert(registration.id.as_str(), json.as_slice())?;

            let mut index = write_txn.open_table(REGISTRATIONS_BY_TIME)?;
            index.insert(key.as_slice(), registration.id.as_str())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Look up a single registration by id.
    pub fn get(&self, id: &str) -> StoreResult<Option<Registration>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(REGISTRATIONS)?;
        match table.get(id)? {
            Some(value) => Ok(Some(serde_json::from_slice(value.value())?)),
            None => Ok(None),
        }
    }

    /// All registrations, newest first.
    pub fn list_all(&self) -> StoreResult<Vec<Registration>> {
        let read_txn = self.db.begin_read()?;
        let index = read_txn.open_table(REGISTRATIONS_BY_TIME)?;
        let table = read_txn.open_table(REGISTRATIONS)?;

        let mut registrations = Vec::new();
        for entry in index.iter()? {
            let (_, id) = entry?;
            if let Some(value) = table.get(id.value())? {
                registrations.push(serde_json::from_slice(value.value())?);
            } else {
                tracing::warn!(id = id.value(), "Index entry without registration record");
            }
        }

        Ok(registrations)
    }

    /// Delete a registration by id.
    ///
    /// Returns whether a record was removed; a missing id is not an error.
    pub fn delete(&self, id: &str) -> StoreResult<bool> {
        let write_txn = self.db.begin_write()?;
        let removed = {
            let mut table = write_txn.open_table(REGISTRATIONS)?;
            let existing = table.remove(id)?.map(|value| value.value().to_vec());

            match existing {
                Some(bytes) => {
                    let registration: Registration = serde_json::from_slice(&bytes)?;
                    let key = make_index_key(registration.registered_at, id);
                    let mut index = write_txn.open_table(REGISTRATIONS_BY_TIME)?;
                    index.remove(key.as_slice())?;
                    true
                }
                None => false,
            }
        };
        write_txn.commit()?;
        Ok(removed)
    }

    /// Number of stored registrations.
    pub fn count(&self) -> StoreResult<usize> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(REGISTRATIONS)?;
        Ok(table.len()? as usize)
    }
}
