use std::fmt;

/// Access-token lifetime in minutes.
/// iKnow bearer tokens are valid for one hour.
pub const ACCESS_TOKEN_TTL_MINUTES: i64 = 60;

/// Refresh-token lifetime in days (~1 month).
pub const REFRESH_TOKEN_TTL_DAYS: i64 = 30;

/// The token pair returned by a successful login exchange.
///
/// The access token is attached to API calls as a bearer credential; the
/// refresh token is longer-lived and used to obtain new access tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
}

/// Coarse classification of the authenticated principal, used by front
/// ends for role branching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserRole {
    Professor,
    Student,
    /// Any role string the API may introduce that this client predates.
    Other(String),
}

impl UserRole {
    /// Parse the role string as it appears on the wire.
    pub fn from_wire(role: &str) -> Self {
        match role {
            "Professor" => UserRole::Professor,
            "Student" => UserRole::Student,
            other => UserRole::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            UserRole::Professor => "Professor",
            UserRole::Student => "Student",
            UserRole::Other(role) => role,
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A complete authenticated session: both tokens plus the role tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    pub tokens: AuthTokens,
    pub role: UserRole,
}
