//! Core client library for the iKnow student information system.
//!
//! This crate provides everything a front end needs to talk to the iKnow
//! REST API:
//!
//! - `auth`: durable, expiring credential storage and session types
//! - `api`: the API client (login exchange and authenticated data fetches)
//! - `models`: typed API responses (user profile, passed subjects)
//! - `gradebook`: the in-memory professor grade store
//! - `config`: application configuration
//!
//! Credentials are persisted locally with independent lifetimes and expire
//! lazily on read; the API uses JWT bearer token authentication obtained
//! through the login endpoint.

pub mod api;
pub mod auth;
pub mod config;
pub mod gradebook;
pub mod models;
