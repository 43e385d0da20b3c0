/// Admin authentication endpoints
///
/// # Endpoints
///
/// - `GET /admin/login` - Login form
/// - `POST /admin/login` - Verify credentials and open a session
/// - `GET /admin/logout` - Close the session

use super::render;
use crate::{
    app::AppState,
    error::AppResult,
    flash::{self, Flash},
    forms::{FormErrors, LoginForm},
    session, views,
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Form,
};
use axum_extra::extract::cookie::{CookieJar, SignedCookieJar};
use gallery_shared::{
    auth::password,
    models::{admin_session::AdminSession, admin_user::AdminUser},
};

/// Login page path, target of every rejected admin request
pub const LOGIN_PATH: &str = "/admin/login";

/// Shown for any failed login, whether or not the username exists
pub const INVALID_CREDENTIALS: &str = "Nom d'utilisateur ou mot de passe incorrect.";

/// `GET /admin/login`
pub async fn login_form(jar: CookieJar) -> impl IntoResponse {
    let (jar, flash) = flash::take(jar);
    (jar, render(views::admin::login("", &FormErrors::default(), flash.as_ref())))
}

/// `POST /admin/login`
///
/// # Errors
///
/// - Missing fields: form redisplayed with field messages (422)
/// - Wrong credentials: form redisplayed with the generic message (200)
/// - `500 Internal Server Error`: database or hashing failure
pub async fn login(
    State(state): State<AppState>,
    signed: SignedCookieJar,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> AppResult<Response> {
    let form = form.normalized();

    if let Err(errors) = form.check() {
        let page = views::admin::login(&form.username, &errors, None);
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, render(page)).into_response());
    }

    let admin = AdminUser::find_by_username(&state.db, &form.username).await?;

    let verified = match &admin {
        Some(admin) => password::verify_password(&form.password, &admin.password_hash)?,
        // Same hashing cost whether or not the username exists
        None => password::verify_against_dummy(&form.password),
    };

    let Some(admin) = admin.filter(|_| verified) else {
        tracing::warn!(username = %form.username, "Failed admin login");
        let flash = Flash::error(INVALID_CREDENTIALS);
        let page = views::admin::login(&form.username, &FormErrors::default(), Some(&flash));
        return Ok(render(page).into_response());
    };

    let purged = AdminSession::purge_expired(&state.db).await?;
    if purged > 0 {
        tracing::debug!(purged, "Expired admin sessions removed");
    }

    let signed = session::open(
        &state.db,
        signed,
        &admin.username,
        state.config.session.ttl_hours,
        state.config.server.production,
    )
    .await?;

    tracing::info!(username = %admin.username, "Admin logged in");

    Ok((
        signed,
        flash::redirect(jar, Flash::success("Connexion réussie!"), "/admin"),
    )
        .into_response())
}

/// `GET /admin/logout`
pub async fn logout(
    State(state): State<AppState>,
    signed: SignedCookieJar,
    jar: CookieJar,
) -> AppResult<impl IntoResponse> {
    let signed = session::close(&state.db, signed).await?;

    Ok((
        signed,
        flash::redirect(jar, Flash::info("Déconnexion réussie."), "/"),
    ))
}
