//! REST API client module for the iKnow service.
//!
//! This module provides the `ApiClient` for the login exchange and for
//! fetching profile and exam data.
//!
//! The API uses JWT bearer token authentication obtained through the
//! `/api/auth/login` endpoint.

pub mod client;
pub mod error;

pub use client::{ApiClient, DEFAULT_BASE_URL};
pub use error::ApiError;
