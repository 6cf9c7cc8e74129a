use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;
use auth::TokenCodec;
use chrono::Duration;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::App;
use crate::domain::auth::models::AppId;
use crate::domain::auth::models::NewUser;
use crate::domain::auth::models::RegisterCommand;
use crate::domain::auth::models::TokensPair;
use crate::domain::auth::models::UserId;
use crate::domain::auth::models::UserRead;
use crate::domain::auth::ports::AdminRepository;
use crate::domain::auth::ports::AppRepository;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::auth::ports::UserRepository;

/// Orchestrates registration, login and the token lifecycle by composing
/// the credential hasher, the token codec and the repositories.
///
/// Holds no per-request state and no locks; every invocation re-reads
/// current storage state, so arbitrary concurrent calls are safe.
pub struct AuthService<UR, AR, ADR>
where
    UR: UserRepository,
    AR: AppRepository,
    ADR: AdminRepository,
{
    users: Arc<UR>,
    apps: Arc<AR>,
    admins: Arc<ADR>,
    hasher: PasswordHasher,
    codec: TokenCodec,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl<UR, AR, ADR> AuthService<UR, AR, ADR>
where
    UR: UserRepository,
    AR: AppRepository,
    ADR: AdminRepository,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `users` / `apps` / `admins` - Persistence implementations
    /// * `access_ttl` / `refresh_ttl` - Lifetimes for issued tokens
    pub fn new(
        users: Arc<UR>,
        apps: Arc<AR>,
        admins: Arc<ADR>,
        access_ttl: Duration,
        refresh_ttl: Duration,
    ) -> Self {
        Self {
            users,
            apps,
            admins,
            hasher: PasswordHasher::new(),
            codec: TokenCodec::new(),
            access_ttl,
            refresh_ttl,
        }
    }

    /// Resolve the tenant and check its secrets are usable.
    ///
    /// A configuration defect in tenant data must never reach a signing
    /// operation with an empty key.
    async fn resolve_app(&self, app_id: AppId) -> Result<App, AuthError> {
        let app = self
            .apps
            .find_by_id(app_id)
            .await?
            .ok_or(AuthError::InvalidTenant(app_id))?;

        if !app.has_usable_secrets() {
            tracing::error!(app_id = app_id.0, "app has an empty signing secret");
            return Err(AuthError::InvalidTenant(app_id));
        }

        Ok(app)
    }

    fn issue_pair(&self, user_id: UserId, app: &App) -> Result<TokensPair, AuthError> {
        let access_token = self
            .codec
            .issue(user_id.0, app.id.0, &app.secret, self.access_ttl)
            .map_err(|e| {
                tracing::error!(app_id = app.id.0, error = %e, "failed to sign access token");
                AuthError::TokenIssue(e.to_string())
            })?;

        let refresh_token = self
            .codec
            .issue(user_id.0, app.id.0, &app.refresh_secret, self.refresh_ttl)
            .map_err(|e| {
                tracing::error!(app_id = app.id.0, error = %e, "failed to sign refresh token");
                AuthError::TokenIssue(e.to_string())
            })?;

        Ok(TokensPair {
            access_token,
            refresh_token,
        })
    }
}

#[async_trait]
impl<UR, AR, ADR> AuthServicePort for AuthService<UR, AR, ADR>
where
    UR: UserRepository,
    AR: AppRepository,
    ADR: AdminRepository,
{
    async fn register(&self, command: RegisterCommand) -> Result<UserId, AuthError> {
        // Cheap existence check before the expensive hash. Not atomic with
        // the insert; the unique email constraint is the real guarantee
        // against a concurrent duplicate.
        if self.users.exists_by_email(command.email.as_str()).await? {
            tracing::info!(email = %command.email, "registration with existing email");
            return Err(AuthError::AlreadyRegistered);
        }

        let password_hash = self.hasher.hash(&command.password).map_err(|e| {
            tracing::error!(error = %e, "failed to hash password");
            AuthError::Hashing(e.to_string())
        })?;

        let user_id = self
            .users
            .create(NewUser {
                email: command.email,
                name: command.name,
                password_hash,
            })
            .await?;

        tracing::info!(user_id = user_id.0, "new user registered");
        Ok(user_id)
    }

    async fn login(
        &self,
        email: &str,
        password: &str,
        app_id: AppId,
    ) -> Result<TokensPair, AuthError> {
        let app = self.resolve_app(app_id).await?;

        let user = match self.users.find_by_email(email).await? {
            Some(user) => user,
            None => {
                tracing::info!("login with unknown email");
                return Err(AuthError::InvalidCredentials);
            }
        };

        let verified = self.hasher.verify(password, &user.password_hash).map_err(|e| {
            tracing::error!(user_id = user.id.0, error = %e, "failed to verify password hash");
            AuthError::Hashing(e.to_string())
        })?;
        if !verified {
            tracing::info!(user_id = user.id.0, "login with wrong password");
            return Err(AuthError::InvalidCredentials);
        }

        let tokens = self.issue_pair(user.id, &app)?;

        tracing::info!(user_id = user.id.0, app_id = app.id.0, "user login complete");
        Ok(tokens)
    }

    async fn is_admin(&self, user_id: UserId, app_id: AppId) -> Result<bool, AuthError> {
        let is_admin = self.admins.is_admin(user_id, app_id).await?;

        tracing::info!(
            user_id = user_id.0,
            app_id = app_id.0,
            is_admin,
            "admin check complete"
        );
        Ok(is_admin)
    }

    async fn refresh_token(&self, token: &str, app_id: AppId) -> Result<TokensPair, AuthError> {
        let app = self.resolve_app(app_id).await?;

        let claims = match self.codec.validate(token, &app.refresh_secret) {
            Ok(claims) => claims,
            Err(e) => {
                tracing::info!(app_id = app.id.0, error = %e, "refresh token rejected");
                return Err(AuthError::Unauthorized);
            }
        };

        // Rotation: both tokens are reissued. The presented refresh token
        // is not tracked and stays valid until its natural expiry.
        let tokens = self.issue_pair(UserId(claims.user_id), &app)?;

        tracing::info!(
            user_id = claims.user_id,
            app_id = app.id.0,
            "token pair rotated"
        );
        Ok(tokens)
    }

    async fn current_user(&self, token: &str, app_id: AppId) -> Result<UserRead, AuthError> {
        let app = self.resolve_app(app_id).await?;

        let claims = match self.codec.validate(token, &app.secret) {
            Ok(claims) => claims,
            Err(e) => {
                tracing::info!(app_id = app.id.0, error = %e, "access token rejected");
                return Err(AuthError::Unauthorized);
            }
        };

        let user = match self.users.find_by_id(UserId(claims.user_id)).await? {
            Some(user) => user,
            None => {
                // The signature verified but the subject is gone; the
                // bearer no longer identifies a live principal.
                tracing::warn!(user_id = claims.user_id, "valid token for missing user");
                return Err(AuthError::Unauthorized);
            }
        };

        tracing::info!(user_id = user.id.0, "current user resolved");
        Ok(UserRead {
            id: user.id,
            email: user.email.as_str().to_string(),
            name: user.name,
        })
    }
}
