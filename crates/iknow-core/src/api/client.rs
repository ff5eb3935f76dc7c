//! API client for communicating with the iKnow REST API.
//!
//! This module provides the `ApiClient` struct for the credential exchange
//! and for fetching the authenticated user's profile and exam data.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{header, Client};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::auth::{AuthSession, AuthTokens, CredentialStore, UserRole};
use crate::config::LoginShape;
use crate::models::{PassedSubject, PassedSubjectsResponse, UserProfile};

use super::ApiError;

/// Base URL of the default iKnow API deployment.
pub const DEFAULT_BASE_URL: &str = "https://iknow-api.onrender.com";

/// HTTP request timeout in seconds.
/// 30s allows for slow API responses while failing fast enough for good UX.
const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
    #[serde(rename = "GenerateRefreshToken")]
    generate_refresh_token: bool,
}

/// Nested token pair used by older API revisions.
#[derive(Debug, Deserialize)]
struct NestedTokens {
    #[serde(rename = "accessToken")]
    access_token: Option<String>,
    #[serde(rename = "refreshToken")]
    refresh_token: Option<String>,
}

/// Login payload, tolerant of both shapes the API has shipped: a flat
/// `{"token", "refreshToken", "role"}` object and a nested
/// `{"tokens": {"accessToken", "refreshToken"}, "role"}` one.
#[derive(Debug, Deserialize)]
struct LoginResponse {
    #[serde(default)]
    token: Option<String>,
    #[serde(rename = "refreshToken", default)]
    refresh_token: Option<String>,
    #[serde(default)]
    tokens: Option<NestedTokens>,
    #[serde(default)]
    role: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl LoginResponse {
    fn flat_tokens(&self) -> Option<AuthTokens> {
        match (non_empty(&self.token), non_empty(&self.refresh_token)) {
            (Some(access), Some(refresh)) => Some(AuthTokens {
                access_token: access.to_string(),
                refresh_token: refresh.to_string(),
            }),
            _ => None,
        }
    }

    fn nested_tokens(&self) -> Option<AuthTokens> {
        let nested = self.tokens.as_ref()?;
        match (non_empty(&nested.access_token), non_empty(&nested.refresh_token)) {
            (Some(access), Some(refresh)) => Some(AuthTokens {
                access_token: access.to_string(),
                refresh_token: refresh.to_string(),
            }),
            _ => None,
        }
    }

    /// Extract the token pair according to the expected payload shape.
    fn tokens_for(&self, shape: LoginShape) -> Option<AuthTokens> {
        match shape {
            LoginShape::Flat => self.flat_tokens(),
            LoginShape::Nested => self.nested_tokens(),
            LoginShape::Auto => self.flat_tokens().or_else(|| self.nested_tokens()),
        }
    }
}

/// API client for the iKnow service.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    login_shape: LoginShape,
    token: Option<String>,
}

impl ApiClient {
    /// Create a new API client against the given base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            login_shape: LoginShape::default(),
            token: None,
        })
    }

    /// Override the expected login payload shape.
    pub fn with_login_shape(mut self, shape: LoginShape) -> Self {
        self.login_shape = shape;
        self
    }

    /// Set the bearer token for authenticated requests
    pub fn set_token(&mut self, token: String) {
        self.token = Some(token);
    }

    /// Create a new ApiClient with the given token, sharing the connection pool.
    /// This is more efficient than creating a new client for each request.
    pub fn with_token(&self, token: String) -> Self {
        Self {
            client: self.client.clone(), // Cheap clone, shares connection pool
            base_url: self.base_url.clone(),
            login_shape: self.login_shape,
            token: Some(token),
        }
    }

    /// Exchange credentials for a session and persist it.
    ///
    /// Issues a single POST to the login endpoint; no retries, no caching
    /// of in-flight calls. On success both tokens and the role tag are
    /// written to `store` and the session is returned. On any failure the
    /// store is left untouched.
    pub async fn login(
        &self,
        store: &CredentialStore,
        email: &str,
        password: &str,
    ) -> Result<AuthSession> {
        let url = format!("{}/api/auth/login", self.base_url);
        debug!(url = %url, "Sending login request");

        let response = self
            .client
            .post(&url)
            .json(&LoginRequest {
                email,
                password,
                generate_refresh_token: true,
            })
            .send()
            .await
            .context("Failed to send login request")?;

        let response = Self::check_response(response).await?;

        let payload: LoginResponse = response
            .json()
            .await
            .context("Failed to parse login response")?;

        let tokens = payload
            .tokens_for(self.login_shape)
            .ok_or(ApiError::MissingTokens)?;
        let role = payload
            .role
            .as_deref()
            .map(UserRole::from_wire)
            .unwrap_or(UserRole::Student);

        let session = AuthSession { tokens, role };
        store
            .store_session(&session)
            .context("Failed to persist session credentials")?;

        debug!(role = %session.role, "Login succeeded");
        Ok(session)
    }

    /// Fetch the authenticated user's profile.
    pub async fn fetch_user(&self) -> Result<UserProfile> {
        let url = format!("{}/api/user/getUser", self.base_url);

        let response = self
            .client
            .get(&url)
            .headers(self.auth_headers()?)
            .send()
            .await
            .context("Failed to send profile request")?;

        let response = Self::check_response(response).await?;

        response
            .json()
            .await
            .context("Failed to parse profile response")
    }

    /// Fetch the authenticated student's passed subjects.
    pub async fn fetch_passed_subjects(&self) -> Result<Vec<PassedSubject>> {
        let url = format!("{}/api/user/getPassedSubjects", self.base_url);

        let response = self
            .client
            .get(&url)
            .headers(self.auth_headers()?)
            .send()
            .await
            .context("Failed to send passed-subjects request")?;

        let response = Self::check_response(response).await?;

        let parsed: PassedSubjectsResponse = response
            .json()
            .await
            .context("Failed to parse passed-subjects response")?;
        debug!(count = parsed.passed_subjects.len(), "Passed subjects received");

        Ok(parsed.passed_subjects)
    }

    fn auth_headers(&self) -> Result<header::HeaderMap> {
        let mut headers = header::HeaderMap::new();
        if let Some(ref token) = self.token {
            headers.insert(
                header::AUTHORIZATION,
                header::HeaderValue::from_str(&format!("Bearer {}", token))?,
            );
        }
        Ok(headers)
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body).into())
        }
    }
}
