/// Admin session guard
///
/// Every back-office route sits behind [`require_admin`]. A request with a
/// live session proceeds with an [`AdminContext`] in its extensions; any
/// other request is redirected to the login page with a warning.
///
/// # Example
///
/// ```no_run
/// use axum::{middleware::from_fn_with_state, routing::get, Extension, Router};
/// use gallery_api::{app::AppState, middleware::admin::require_admin, session::AdminContext};
///
/// async fn whoami(Extension(admin): Extension<AdminContext>) -> String {
///     admin.username
/// }
///
/// fn routes(state: AppState) -> Router<AppState> {
///     Router::new()
///         .route("/whoami", get(whoami))
///         .layer(from_fn_with_state(state, require_admin))
/// }
/// ```

use crate::{
    app::AppState,
    error::{AppError, AppResult},
    session::{self, AdminContext},
};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::SignedCookieJar;

/// Message shown on the login page after a rejected request
pub const ACCESS_DENIED: &str = "Accès refusé. Veuillez vous connecter.";

/// Rejects requests without a live admin session
pub async fn require_admin(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    mut req: Request,
    next: Next,
) -> AppResult<Response> {
    let admin: AdminContext = session::resolve(&state.db, &jar).await?.ok_or_else(|| {
        tracing::debug!(path = %req.uri().path(), "Admin route without session");
        AppError::Unauthorized(ACCESS_DENIED.to_string())
    })?;

    req.extensions_mut().insert(admin);
    Ok(next.run(req).await)
}
