use std::collections::HashMap;
use std::collections::HashSet;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Duration;
use sso_service::domain::auth::errors::AuthError;
use sso_service::domain::auth::models::App;
use sso_service::domain::auth::models::AppId;
use sso_service::domain::auth::models::NewUser;
use sso_service::domain::auth::models::User;
use sso_service::domain::auth::models::UserId;
use sso_service::domain::auth::ports::AdminRepository;
use sso_service::domain::auth::ports::AppRepository;
use sso_service::domain::auth::ports::UserRepository;
use sso_service::domain::auth::service::AuthService;

pub const APP_ID: i32 = 1;
pub const APP_SECRET: &str = "test_access_secret_with_enough_bytes!";
pub const APP_REFRESH_SECRET: &str = "test_refresh_secret_with_enough_byte";

/// In-memory stand-in for the Postgres user repository, enough to drive
/// the full authentication flow without a database.
#[derive(Default)]
pub struct InMemoryUsers {
    inner: Mutex<UsersInner>,
}

#[derive(Default)]
struct UsersInner {
    next_id: i64,
    rows: HashMap<i64, User>,
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn create(&self, user: NewUser) -> Result<UserId, AuthError> {
        let mut inner = self.inner.lock().unwrap();

        // Mirrors the unique email constraint.
        if inner
            .rows
            .values()
            .any(|u| u.email.as_str() == user.email.as_str())
        {
            return Err(AuthError::AlreadyRegistered);
        }

        inner.next_id += 1;
        let id = inner.next_id;
        inner.rows.insert(
            id,
            User {
                id: UserId(id),
                name: user.name,
                email: user.email,
                password_hash: user.password_hash,
            },
        );

        Ok(UserId(id))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .rows
            .values()
            .find(|u| u.email.as_str() == email)
            .cloned())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, AuthError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.rows.get(&id.0).cloned())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, AuthError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.rows.values().any(|u| u.email.as_str() == email))
    }
}

#[derive(Default)]
pub struct InMemoryApps {
    rows: Mutex<HashMap<i32, App>>,
}

impl InMemoryApps {
    pub fn insert(&self, app: App) {
        self.rows.lock().unwrap().insert(app.id.0, app);
    }
}

#[async_trait]
impl AppRepository for InMemoryApps {
    async fn find_by_id(&self, id: AppId) -> Result<Option<App>, AuthError> {
        Ok(self.rows.lock().unwrap().get(&id.0).cloned())
    }
}

#[derive(Default)]
pub struct InMemoryAdmins {
    grants: Mutex<HashSet<(i64, i32)>>,
}

impl InMemoryAdmins {
    pub fn grant(&self, user_id: UserId, app_id: AppId) {
        self.grants.lock().unwrap().insert((user_id.0, app_id.0));
    }
}

#[async_trait]
impl AdminRepository for InMemoryAdmins {
    async fn is_admin(&self, user_id: UserId, app_id: AppId) -> Result<bool, AuthError> {
        Ok(self.grants.lock().unwrap().contains(&(user_id.0, app_id.0)))
    }
}

/// Test application wiring the real service, hasher and codec over
/// in-memory repositories, with one well-configured tenant.
pub struct TestApp {
    pub service: Arc<AuthService<InMemoryUsers, InMemoryApps, InMemoryAdmins>>,
    pub apps: Arc<InMemoryApps>,
    pub admins: Arc<InMemoryAdmins>,
}

impl TestApp {
    pub fn spawn() -> Self {
        Self::with_ttls(Duration::minutes(10), Duration::hours(1))
    }

    pub fn with_ttls(access_ttl: Duration, refresh_ttl: Duration) -> Self {
        let users = Arc::new(InMemoryUsers::default());
        let apps = Arc::new(InMemoryApps::default());
        let admins = Arc::new(InMemoryAdmins::default());

        apps.insert(App {
            id: AppId(APP_ID),
            name: "test-app".to_string(),
            secret: APP_SECRET.to_string(),
            refresh_secret: APP_REFRESH_SECRET.to_string(),
        });

        let service = Arc::new(AuthService::new(
            users,
            Arc::clone(&apps),
            Arc::clone(&admins),
            access_ttl,
            refresh_ttl,
        ));

        Self {
            service,
            apps,
            admins,
        }
    }
}
