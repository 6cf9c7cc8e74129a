use thiserror::Error;

use crate::domain::auth::models::AppId;

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Closed set of failure kinds for authentication operations.
///
/// Kinds are matched structurally and translated to transport status codes
/// once, at the gRPC boundary — never compared by identity, so wrapping a
/// kind cannot lose it.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// Unknown email or wrong password — deliberately the same kind for
    /// both, so callers cannot tell which check failed.
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("user already registered")]
    AlreadyRegistered,

    /// Tenant absent, or present with an empty signing secret.
    #[error("unknown or misconfigured app {0}")]
    InvalidTenant(AppId),

    /// Token failed the signature or expiry check, or its subject no
    /// longer exists.
    #[error("unauthorized")]
    Unauthorized,

    // Infrastructure errors; collapsed to a generic internal status at the
    // boundary.
    #[error("password hashing failed: {0}")]
    Hashing(String),

    #[error("token signing failed: {0}")]
    TokenIssue(String),

    #[error("database error: {0}")]
    Database(String),
}
