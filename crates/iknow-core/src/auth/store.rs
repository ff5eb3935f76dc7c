//! Durable, expiring credential storage.
//!
//! Each entry is a small JSON file `{"value": ..., "expiresAt": ...}` under
//! an injected storage directory, one file per fixed key. Expiry is
//! enforced lazily at the point of access: a read that finds a stale or
//! malformed entry treats it as absent and purges it. There is no
//! background sweep and no timer.
//!
//! Reads never fail: storage-layer problems surface as "not authenticated",
//! never as errors.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::session::{AuthSession, UserRole, ACCESS_TOKEN_TTL_MINUTES, REFRESH_TOKEN_TTL_DAYS};

/// Storage key for the access token entry.
pub const ACCESS_TOKEN_KEY: &str = "iknow.auth.access";

/// Storage key for the refresh token entry.
pub const REFRESH_TOKEN_KEY: &str = "iknow.auth.refresh";

/// Storage key for the role tag entry.
pub const ROLE_KEY: &str = "iknow.auth.role";

/// A persisted credential value with its absolute expiry time.
///
/// Serialized as `{"value": <string>, "expiresAt": <epoch millis>}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredToken {
    pub value: String,
    #[serde(rename = "expiresAt", with = "chrono::serde::ts_milliseconds")]
    pub expires_at: DateTime<Utc>,
}

impl StoredToken {
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}

/// File-backed store for the three session credentials.
///
/// Constructed with an explicit storage directory; the store exclusively
/// owns the persisted values.
pub struct CredentialStore {
    dir: PathBuf,
}

impl CredentialStore {
    /// Create a store rooted at `dir`. The directory itself is created by
    /// the first write.
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Persist `value` under `key`, expiring `ttl` from now.
    ///
    /// Overwrites any prior entry for the key, regardless of whether that
    /// entry had already expired.
    pub fn write(&self, key: &str, value: &str, ttl: Duration) -> Result<()> {
        let entry = StoredToken {
            value: value.to_string(),
            expires_at: Utc::now() + ttl,
        };
        std::fs::create_dir_all(&self.dir).with_context(|| {
            format!("Failed to create credential directory {}", self.dir.display())
        })?;
        let contents = serde_json::to_string(&entry)?;
        std::fs::write(self.entry_path(key), contents)
            .with_context(|| format!("Failed to write credential entry {}", key))?;
        Ok(())
    }

    /// Read the value stored under `key`.
    ///
    /// Returns `None` when the entry is missing, unreadable, malformed, or
    /// expired; all but the first also purge the entry. An expired entry is
    /// indistinguishable from an absent one to callers.
    pub fn read(&self, key: &str) -> Option<String> {
        let path = self.entry_path(key);
        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                debug!(key, error = %e, "Credential entry unreadable, purging");
                self.purge(key);
                return None;
            }
        };

        let entry: StoredToken = match serde_json::from_str(&contents) {
            Ok(entry) => entry,
            Err(e) => {
                debug!(key, error = %e, "Credential entry malformed, purging");
                self.purge(key);
                return None;
            }
        };

        if entry.is_expired() {
            debug!(key, "Credential entry expired, purging");
            self.purge(key);
            return None;
        }

        Some(entry.value)
    }

    /// Remove all three credential entries unconditionally. Idempotent.
    pub fn clear(&self) {
        for key in [ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, ROLE_KEY] {
            self.purge(key);
        }
    }

    fn purge(&self, key: &str) {
        if let Err(e) = std::fs::remove_file(self.entry_path(key)) {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!(key, error = %e, "Failed to remove credential entry");
            }
        }
    }

    // ===== Typed session helpers =====

    /// Persist a full session: both tokens and the role tag.
    pub fn store_session(&self, session: &AuthSession) -> Result<()> {
        self.write(
            ACCESS_TOKEN_KEY,
            &session.tokens.access_token,
            Duration::minutes(ACCESS_TOKEN_TTL_MINUTES),
        )?;
        self.write(
            REFRESH_TOKEN_KEY,
            &session.tokens.refresh_token,
            Duration::days(REFRESH_TOKEN_TTL_DAYS),
        )?;
        // Role lifetime tracks the access token: a role tag must not
        // outlive the session it describes.
        self.write(
            ROLE_KEY,
            session.role.as_str(),
            Duration::minutes(ACCESS_TOKEN_TTL_MINUTES),
        )?;
        Ok(())
    }

    /// Get the access token if present and unexpired.
    pub fn access_token(&self) -> Option<String> {
        self.read(ACCESS_TOKEN_KEY)
    }

    /// Get the refresh token if present and unexpired.
    pub fn refresh_token(&self) -> Option<String> {
        self.read(REFRESH_TOKEN_KEY)
    }

    /// Get the role tag if present and unexpired.
    pub fn user_role(&self) -> Option<UserRole> {
        self.read(ROLE_KEY).map(|role| UserRole::from_wire(&role))
    }

    /// Whether a live access token exists.
    pub fn is_authenticated(&self) -> bool {
        self.access_token().is_some()
    }
}

// ============================================================================
// Tests
// ============================================================================
