use async_trait::async_trait;
use sqlx::PgPool;

use super::db_error;
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::App;
use crate::domain::auth::models::AppId;
use crate::domain::auth::ports::AppRepository;

pub struct PostgresAppRepository {
    pool: PgPool,
}

impl PostgresAppRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct AppRow {
    id: i32,
    name: String,
    secret: String,
    refresh_secret: String,
}

impl From<AppRow> for App {
    fn from(row: AppRow) -> Self {
        App {
            id: AppId(row.id),
            name: row.name,
            secret: row.secret,
            refresh_secret: row.refresh_secret,
        }
    }
}

#[async_trait]
impl AppRepository for PostgresAppRepository {
    async fn find_by_id(&self, id: AppId) -> Result<Option<App>, AuthError> {
        let mut tx = self.pool.begin().await.map_err(db_error)?;

        let row = sqlx::query_as::<_, AppRow>(
            r#"
            SELECT id, name, secret, refresh_secret
            FROM apps
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&mut *tx)
        .await
        .map_err(db_error)?;

        tx.commit().await.map_err(db_error)?;

        Ok(row.map(App::from))
    }
}
