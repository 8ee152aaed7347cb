// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Locally cached admin token.
//!
//! The cache is passed explicitly to the router and gateway as an
//! `Arc<dyn TokenStore>`. The file-backed store keeps a small JSON object
//! keyed like browser local storage, with the token under [`ADMIN_TOKEN_KEY`].

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use super::ClientError;

/// Fixed local key the token is cached under.
pub const ADMIN_TOKEN_KEY: &str = "adminToken";

pub trait TokenStore: Send + Sync {
    /// The cached token, if any. An empty token counts as absent.
    fn get(&self) -> Option<String>;

    fn set(&self, token: &str) -> Result<(), ClientError>;

    fn clear(&self) -> Result<(), ClientError>;
}

/// Process-local token cache.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .filter(|token| !token.is_empty())
    }

    fn set(&self, token: &str) -> Result<(), ClientError> {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), ClientError> {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}

/// Token cache persisted as a JSON key/value file.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, ClientError> {
        match fs::read(&self.path) {
            Ok(bytes) if bytes.is_empty() => Ok(BTreeMap::new()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<(), ClientError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_vec_pretty(entries)?)?;
        Ok(())
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> Option<String> {
        match self.load() {
            Ok(mut entries) => entries
                .remove(ADMIN_TOKEN_KEY)
                .filter(|token| !token.is_empty()),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Unreadable token cache");
                None
            }
        }
    }

    fn set(&self, token: &str) -> Result<(), ClientError> {
        let mut entries = self.load()?;
        entries.insert(ADMIN_TOKEN_KEY.to_string(), token.to_string());
        self.save(&entries)
    }

    fn clear(&self) -> Result<(), ClientError> {
        let mut entries = self.load()?;
        if entries.remove(ADMIN_TOKEN_KEY).is_some() {
            self.save(&entries)?;
        }
        Ok(())
    }
}
