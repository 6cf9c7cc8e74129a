use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Issues and validates signed tenant-scoped tokens.
///
/// The signing secret is supplied per call: every tenant holds its own
/// access and refresh secrets, and a token only validates under the exact
/// secret it was issued with. Signing is HMAC (HS512).
pub struct TokenCodec {
    algorithm: Algorithm,
}

impl TokenCodec {
    pub fn new() -> Self {
        Self {
            algorithm: Algorithm::HS512,
        }
    }

    /// Issue a token for `user_id` within tenant `app_id`, expiring after
    /// `ttl`. Pure function of the inputs and wall-clock time.
    ///
    /// # Errors
    /// * `SigningFailed` - Token serialization or signing failed
    pub fn issue(
        &self,
        user_id: i64,
        app_id: i32,
        secret: &str,
        ttl: Duration,
    ) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = Claims {
            user_id,
            app_id,
            exp: (now + ttl).timestamp(),
            iat: now.timestamp(),
        };

        let header = Header::new(self.algorithm);

        encode(&header, &claims, &EncodingKey::from_secret(secret.as_bytes()))
            .map_err(|e| TokenError::SigningFailed(e.to_string()))
    }

    /// Decode a token and verify signature and expiry under `secret`.
    ///
    /// # Errors
    /// * `Expired` - The `exp` claim has passed
    /// * `Invalid` - Signature does not verify under `secret`, or the
    ///   structure is malformed
    pub fn validate(&self, token: &str, secret: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        // Expiry is strict; no clock-skew allowance.
        validation.leeway = 0;

        decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Invalid(e.to_string()),
        })
    }
}

impl Default for TokenCodec {
    fn default() -> Self {
        Self::new()
    }
}
