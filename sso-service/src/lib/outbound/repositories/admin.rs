use async_trait::async_trait;
use sqlx::PgPool;

use super::db_error;
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::AppId;
use crate::domain::auth::models::UserId;
use crate::domain::auth::ports::AdminRepository;

pub struct PostgresAdminRepository {
    pool: PgPool,
}

impl PostgresAdminRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AdminRepository for PostgresAdminRepository {
    async fn is_admin(&self, user_id: UserId, app_id: AppId) -> Result<bool, AuthError> {
        let mut tx = self.pool.begin().await.map_err(db_error)?;

        // Existence of the row is the truth value.
        let row: Option<(i64,)> = sqlx::query_as(
            r#"
            SELECT id
            FROM admins
            WHERE user_id = $1 AND app_id = $2
            "#,
        )
        .bind(user_id.0)
        .bind(app_id.0)
        .fetch_optional(&mut *tx)
        .await
        .map_err(db_error)?;

        tx.commit().await.map_err(db_error)?;

        Ok(row.is_some())
    }
}
