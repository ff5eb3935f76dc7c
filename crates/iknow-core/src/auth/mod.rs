//! Authentication module for managing session credentials.
//!
//! This module provides:
//! - `CredentialStore`: durable, expiring storage for the access token,
//!   refresh token, and role tag
//! - `AuthSession` / `AuthTokens` / `UserRole`: the session types produced
//!   by a successful login exchange
//!
//! Entries are persisted as JSON with independent lifetimes and expire
//! lazily: a stale entry is purged by the next read, with no background
//! sweep.

pub mod session;
pub mod store;

pub use session::{AuthSession, AuthTokens, UserRole};
pub use store::{CredentialStore, StoredToken, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, ROLE_KEY};
