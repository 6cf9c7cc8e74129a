use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::App;
use crate::domain::auth::models::AppId;
use crate::domain::auth::models::NewUser;
use crate::domain::auth::models::RegisterCommand;
use crate::domain::auth::models::TokensPair;
use crate::domain::auth::models::User;
use crate::domain::auth::models::UserId;
use crate::domain::auth::models::UserRead;

/// Port for the authentication service consumed by the protocol layer.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user.
    ///
    /// # Returns
    /// Storage-assigned user id
    ///
    /// # Errors
    /// * `AlreadyRegistered` - Email is already registered
    /// * `Hashing` / `Database` - Infrastructure failure
    async fn register(&self, command: RegisterCommand) -> Result<UserId, AuthError>;

    /// Verify credentials and issue an access/refresh pair signed with the
    /// tenant's secrets.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password
    /// * `InvalidTenant` - App absent or misconfigured
    async fn login(
        &self,
        email: &str,
        password: &str,
        app_id: AppId,
    ) -> Result<TokensPair, AuthError>;

    /// Whether the user holds the admin grant for the tenant.
    ///
    /// A missing grant is `false`, not an error.
    async fn is_admin(&self, user_id: UserId, app_id: AppId) -> Result<bool, AuthError>;

    /// Validate a refresh token under the tenant's refresh secret and
    /// rotate the whole pair.
    ///
    /// # Errors
    /// * `Unauthorized` - Token fails validation
    /// * `InvalidTenant` - App absent or misconfigured
    async fn refresh_token(&self, token: &str, app_id: AppId) -> Result<TokensPair, AuthError>;

    /// Resolve the user identified by an access token.
    ///
    /// # Errors
    /// * `Unauthorized` - Token fails validation, or its subject no longer
    ///   exists
    /// * `InvalidTenant` - App absent or misconfigured
    async fn current_user(&self, token: &str, app_id: AppId) -> Result<UserRead, AuthError>;
}

/// Persistence operations for user records.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user.
    ///
    /// # Returns
    /// Storage-assigned user id
    ///
    /// # Errors
    /// * `AlreadyRegistered` - Unique email constraint violated
    /// * `Database` - Database operation failed
    async fn create(&self, user: NewUser) -> Result<UserId, AuthError>;

    /// Retrieve user by email (None if not found).
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError>;

    /// Retrieve user by identifier (None if not found).
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, AuthError>;

    /// Whether a user with this email already exists.
    async fn exists_by_email(&self, email: &str) -> Result<bool, AuthError>;
}

/// Read-only access to tenant records.
#[async_trait]
pub trait AppRepository: Send + Sync + 'static {
    /// Retrieve app by identifier (None if not found).
    async fn find_by_id(&self, id: AppId) -> Result<Option<App>, AuthError>;
}

/// Read-only access to per-tenant admin grants.
#[async_trait]
pub trait AdminRepository: Send + Sync + 'static {
    /// Whether an admin row exists for the (user, app) pair.
    async fn is_admin(&self, user_id: UserId, app_id: AppId) -> Result<bool, AuthError>;
}
