// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration
//!
//! This module defines environment variable names, default values and the
//! [`Config`] struct built from them at startup. A `.env` file in the working
//! directory is loaded first when present.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `ADMIN_USERNAME` | Admin login name | Required |
//! | `ADMIN_PASSWORD` | Admin login password | Required |
//! | `JWT_SECRET` | HMAC secret used to sign admin tokens | Required |
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `5000` |
//! | `DATABASE_PATH` | Location of the registration database file | `./data/registrations.redb` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use std::net::SocketAddr;
use std::path::PathBuf;

/// Environment variable holding the admin username.
pub const ADMIN_USERNAME_ENV: &str = "ADMIN_USERNAME";

/// Environment variable holding the admin password.
pub const ADMIN_PASSWORD_ENV: &str = "ADMIN_PASSWORD";

/// Environment variable holding the token-signing secret.
///
/// The same secret signs tokens at login and verifies them in the auth guard.
pub const JWT_SECRET_ENV: &str = "JWT_SECRET";

pub const HOST_ENV: &str = "HOST";
pub const PORT_ENV: &str = "PORT";

/// Environment variable for the persistence location.
///
/// # Default
/// `./data/registrations.redb` (parent directories are created on open)
pub const DATABASE_PATH_ENV: &str = "DATABASE_PATH";

pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_DATABASE_PATH: &str = "./data/registrations.redb";
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    Json,
    #[default]
    Pretty,
}

/// Static admin credentials and the token-signing secret.
#[derive(Clone)]
pub struct AuthSettings {
    pub admin_username: String,
    pub admin_password: String,
    pub jwt_secret: String,
}

impl std::fmt::Debug for AuthSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSettings")
            .field("admin_username", &self.admin_username)
            .field("admin_password", &"<redacted>")
            .field("jwt_secret", &"<redacted>")
            .finish()
    }
}

/// Full service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub auth: AuthSettings,
    pub host: String,
    pub port: u16,
    pub database_path: PathBuf,
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from the process environment (after `.env`).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let auth = AuthSettings {
            admin_username: required(&lookup, ADMIN_USERNAME_ENV)?,
            admin_password: required(&lookup, ADMIN_PASSWORD_ENV)?,
            jwt_secret: required(&lookup, JWT_SECRET_ENV)?,
        };

        let host = lookup(HOST_ENV)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup(PORT_ENV) {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::Invalid {
                name: PORT_ENV,
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let database_path = lookup(DATABASE_PATH_ENV)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE_PATH));

        let log_format = match lookup(LOG_FORMAT_ENV).as_deref().map(str::trim) {
            Some(value) if value.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        Ok(Self {
            auth,
            host,
            port,
            database_path,
            log_format,
        })
    }

    /// Socket address the HTTP server binds to.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
                name: HOST_ENV,
                reason: e.to_string(),
            })
    }
}

fn required<F>(lookup: &F, name: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .filter(|value| !value.is_empty())
        .ok_or(ConfigError::Missing(name))
}
