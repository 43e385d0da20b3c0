//! # Gallery Server
//!
//! Serves the public painting catalog and the admin back office.
//!
//! ## Usage
//!
//! ```bash
//! SESSION_SECRET=$(openssl rand -hex 32) cargo run -p gallery-api
//! ```

use gallery_api::{
    app::{build_router, AppState},
    config::{AdminBootstrap, Config},
};
use gallery_shared::{
    auth::password::hash_password,
    db::{
        migrations::{get_migration_status, run_migrations},
        pool::{close_pool, create_pool, DatabaseConfig},
    },
    models::admin_user::{AdminUser, CreateAdminUser},
};
use sqlx::SqlitePool;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "gallery_api=debug,gallery_shared=info,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Gallery server v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env()?;

    let pool = create_pool(DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        ..Default::default()
    })
    .await?;

    run_migrations(&pool).await?;
    let status = get_migration_status(&pool).await?;
    tracing::info!(
        applied = status.applied_migrations,
        latest = ?status.latest_version,
        "Database schema ready"
    );

    if let Some(admin) = &config.admin {
        bootstrap_admin(&pool, admin).await?;
    }

    let bind_address = config.bind_address();
    let app = build_router(AppState::new(pool.clone(), config));

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    tracing::info!("Server listening on http://{}", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    close_pool(pool).await;
    tracing::info!("Server stopped");

    Ok(())
}

/// Creates the configured admin account, or resets its password
async fn bootstrap_admin(pool: &SqlitePool, admin: &AdminBootstrap) -> anyhow::Result<()> {
    let password_hash = hash_password(&admin.password)?;

    let user = AdminUser::upsert(
        pool,
        CreateAdminUser {
            username: admin.username.clone(),
            password_hash,
        },
    )
    .await?;

    tracing::info!(username = %user.username, "Admin account provisioned");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutdown signal received, draining connections...");
}
