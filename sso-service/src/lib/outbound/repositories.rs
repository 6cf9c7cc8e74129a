use crate::domain::auth::errors::AuthError;

pub mod admin;
pub mod app;
pub mod user;

pub use admin::PostgresAdminRepository;
pub use app::PostgresAppRepository;
pub use user::PostgresUserRepository;

pub(crate) fn db_error(err: sqlx::Error) -> AuthError {
    AuthError::Database(err.to_string())
}
