//! Authentication infrastructure for the identity service
//!
//! Provides the two cryptographic building blocks the service composes:
//! - Password hashing (Argon2id)
//! - Tenant-scoped token issuing and validation
//!
//! The service keeps its own domain traits and orchestration; this crate
//! stays free of storage and transport concerns.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Tokens
//! ```
//! use auth::TokenCodec;
//! use chrono::Duration;
//!
//! let codec = TokenCodec::new();
//! let token = codec
//!     .issue(7, 1, "tenant_secret_at_least_32_bytes!!", Duration::minutes(10))
//!     .unwrap();
//! let claims = codec
//!     .validate(&token, "tenant_secret_at_least_32_bytes!!")
//!     .unwrap();
//! assert_eq!(claims.user_id, 7);
//! assert_eq!(claims.app_id, 1);
//! ```

pub mod password;
pub mod token;

// Re-export commonly used items
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenCodec;
pub use token::TokenError;
