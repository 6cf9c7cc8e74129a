use serde::Deserialize;
use serde::Serialize;

/// Payload embedded in every issued token.
///
/// Tokens are stateless bearer credentials: validity is fully determined by
/// the signature and the `exp` claim on every check, nothing is persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject user identifier
    pub user_id: i64,

    /// Tenant the token was issued for
    pub app_id: i32,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,
}
