use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use sso_service::config::Config;
use sso_service::config::DatabaseConfig;
use sso_service::domain::auth::service::AuthService;
use sso_service::inbound::grpc::AuthGrpcService;
use sso_service::outbound::repositories::PostgresAdminRepository;
use sso_service::outbound::repositories::PostgresAppRepository;
use sso_service::outbound::repositories::PostgresUserRepository;
use sso_service::proto::auth_server::AuthServer;
use tonic::transport::Server;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sso_service=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "sso-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        grpc_port = config.server.grpc_port,
        access_ttl_seconds = config.tokens.access_ttl_seconds,
        refresh_ttl_seconds = config.tokens.refresh_ttl_seconds,
        "Configuration loaded"
    );

    let pg_pool = connect_with_retries(&config.database).await?;
    tracing::info!(database = "postgresql", "Database connection pool created");

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let users = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let apps = Arc::new(PostgresAppRepository::new(pg_pool.clone()));
    let admins = Arc::new(PostgresAdminRepository::new(pg_pool.clone()));

    let auth_service = Arc::new(AuthService::new(
        users,
        apps,
        admins,
        chrono::Duration::seconds(config.tokens.access_ttl_seconds),
        chrono::Duration::seconds(config.tokens.refresh_ttl_seconds),
    ));

    let grpc_address = format!("0.0.0.0:{}", config.server.grpc_port).parse()?;
    let grpc_service = AuthGrpcService::new(auth_service);
    tracing::info!(
        address = %grpc_address,
        protocol = "grpc",
        "gRpc server listening"
    );

    Server::builder()
        .add_service(AuthServer::new(grpc_service))
        .serve_with_shutdown(grpc_address, shutdown_signal())
        .await?;

    pg_pool.close().await;
    tracing::info!("Service stopped");

    Ok(())
}

/// Bounded fixed-delay reconnection loop for the initial database
/// connection; after that the pool manages connections itself.
async fn connect_with_retries(config: &DatabaseConfig) -> Result<PgPool, anyhow::Error> {
    let delay = Duration::from_secs(config.connect_delay_seconds);

    let mut last_error = None;
    for attempt in 1..=config.connect_attempts {
        tracing::info!(attempt, "database connection attempt");

        match PgPoolOptions::new()
            .max_connections(5)
            .connect(&config.url)
            .await
        {
            Ok(pool) => return Ok(pool),
            Err(e) => {
                tracing::error!(attempt, error = %e, "database connection failed");
                last_error = Some(e);
                tokio::time::sleep(delay).await;
            }
        }
    }

    match last_error {
        Some(e) => Err(e.into()),
        None => Err(anyhow::anyhow!("database connect_attempts must be at least 1")),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install ctrl-c handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received, stopping application");
}
