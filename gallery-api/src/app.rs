/// Application state and router builder
///
/// This module defines the shared application state and provides
/// a function to build the Axum router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use gallery_api::{app::{build_router, AppState}, config::Config};
/// use gallery_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = create_pool(DatabaseConfig {
///     url: config.database.url.clone(),
///     ..Default::default()
/// })
/// .await?;
///
/// let app = build_router(AppState::new(pool, config));
/// let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
/// axum::serve(listener, app).await?;
/// # Ok(())
/// # }
/// ```

use crate::{
    config::Config,
    middleware::{admin::require_admin, origin::same_origin, security::security_headers},
    routes,
};
use axum::{
    extract::{DefaultBodyLimit, FromRef},
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post},
    Router,
};
use axum_extra::extract::cookie::Key;
use sha2::{Digest, Sha512};
use sqlx::SqlitePool;
use std::sync::Arc;
use tower_http::{
    limit::RequestBodyLimitLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// This is cloned for each request handler via Axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,

    /// Application configuration
    pub config: Arc<Config>,

    /// Signing key of the session cookie
    cookie_key: Key,
}

impl AppState {
    /// Creates new application state, deriving the cookie key from the
    /// session secret
    pub fn new(db: SqlitePool, config: Config) -> Self {
        let cookie_key = derive_cookie_key(&config.session.secret);

        Self {
            db,
            config: Arc::new(config),
            cookie_key,
        }
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}

/// Stretches the configured secret to the 64 bytes a cookie key needs
fn derive_cookie_key(secret: &str) -> Key {
    let digest = Sha512::digest(secret.as_bytes());
    Key::from(digest.as_slice())
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /
/// ├── GET  /                               # Home
/// ├── GET  /galerie                        # Gallery (?page=N)
/// ├── GET  /tableau/:id                    # Artwork detail
/// ├── GET|POST /contacter                  # Contact form
/// ├── GET  /health                         # Health check
/// └── /admin
///     ├── GET|POST /login                  # Public
///     ├── GET  /logout                     # Public
///     └── (session required)
///         ├── GET  /                       # Dashboard
///         ├── GET  /tableaux               # Listing (?page=N)
///         ├── GET|POST /tableau/nouveau
///         ├── GET|POST /tableau/:id/modifier
///         ├── POST /tableau/:id/supprimer
///         ├── GET  /tableau/:id/imprimer   # PDF
///         └── GET  /export/liste           # PDF
/// ```
///
/// # Middleware Stack
///
/// Applied in order (outermost first):
/// 1. Security headers
/// 2. Logging (tower-http TraceLayer)
/// 3. Request body limit (413 over `max_upload_bytes`)
/// 4. Admin session guard (admin group only)
pub fn build_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/", get(routes::public::home))
        .route("/galerie", get(routes::public::gallery))
        .route("/tableau/:id", get(routes::public::artwork_detail))
        .route(
            "/contacter",
            get(routes::contact::contact_form).post(routes::contact::submit_contact),
        )
        .route("/health", get(routes::health::health_check));

    let auth_routes = Router::new()
        .route(
            "/admin/login",
            get(routes::auth::login_form).post(routes::auth::login),
        )
        .route("/admin/logout", get(routes::auth::logout));

    let admin_routes = Router::new()
        .route("/", get(routes::admin::dashboard))
        .route("/tableaux", get(routes::admin::artwork_list))
        .route(
            "/tableau/nouveau",
            get(routes::artworks::new_form).post(routes::artworks::create),
        )
        .route(
            "/tableau/:id/modifier",
            get(routes::artworks::edit_form).post(routes::artworks::update),
        )
        .route("/tableau/:id/supprimer", post(routes::artworks::delete))
        .route("/tableau/:id/imprimer", get(routes::export::artwork_sheet))
        .route("/export/liste", get(routes::export::artwork_list))
        .layer(from_fn_with_state(state.clone(), require_admin));

    let max_upload_bytes = state.config.server.max_upload_bytes;
    let production = state.config.server.production;

    Router::new()
        .merge(public_routes)
        .merge(auth_routes)
        .nest("/admin", admin_routes)
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(max_upload_bytes))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(from_fn(same_origin))
        .layer(from_fn_with_state(production, security_headers))
        .with_state(state)
}
