use std::fmt;
use std::str::FromStr;

use crate::domain::auth::errors::EmailError;

/// Registered user identity record.
///
/// Created by Register; read by Login and CurrentUser; never deleted here.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: EmailAddress,
    pub password_hash: String,
}

/// Public projection of a user returned to callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRead {
    pub id: UserId,
    pub email: String,
    pub name: String,
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// App (tenant) unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AppId(pub i32);

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A registered consumer of the identity service, with its own token
/// signing secrets.
///
/// Provisioned externally; read-only from this service. Both secrets must
/// be non-empty for the app to be usable — an empty secret means the tenant
/// is misconfigured, not absent.
#[derive(Debug, Clone)]
pub struct App {
    pub id: AppId,
    pub name: String,
    pub secret: String,
    pub refresh_secret: String,
}

impl App {
    /// Whether both signing secrets are present.
    pub fn has_usable_secrets(&self) -> bool {
        !self.secret.is_empty() && !self.refresh_secret.is_empty()
    }
}

/// Access/refresh token pair, always produced together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokensPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to register a new user with a validated email.
#[derive(Debug)]
pub struct RegisterCommand {
    pub email: EmailAddress,
    pub password: String,
    pub name: String,
}

/// New user row handed to the repository; the id is storage-assigned.
#[derive(Debug)]
pub struct NewUser {
    pub email: EmailAddress,
    pub name: String,
    pub password_hash: String,
}
