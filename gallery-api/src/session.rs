/// Admin session cookies
///
/// The browser holds a signed cookie with the session token; the database
/// holds only its SHA-256 hash (see `gallery_shared::models::admin_session`).
/// A cookie resolves to an [`AdminContext`] only while its row exists and
/// has not expired.

use axum_extra::extract::cookie::{Cookie, SameSite, SignedCookieJar};
use chrono::Duration;
use gallery_shared::{auth::session_token, models::admin_session::AdminSession};
use sqlx::SqlitePool;

/// Cookie holding the signed session token
pub const SESSION_COOKIE: &str = "galerie_session";

/// The logged-in administrator, inserted into request extensions by the
/// admin guard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminContext {
    pub username: String,
}

/// Resolves the session cookie to the logged-in administrator
///
/// Returns `Ok(None)` when the cookie is absent, fails its signature,
/// is malformed, or names an unknown or expired session.
pub async fn resolve(
    db: &SqlitePool,
    jar: &SignedCookieJar,
) -> Result<Option<AdminContext>, sqlx::Error> {
    let Some(cookie) = jar.get(SESSION_COOKIE) else {
        return Ok(None);
    };

    let token = cookie.value();
    if !session_token::is_well_formed(token) {
        return Ok(None);
    }

    Ok(AdminSession::find_active(db, token)
        .await?
        .map(|session| AdminContext {
            username: session.username,
        }))
}

/// Opens a session for `username` and stores its token in the jar
///
/// The cookie itself has no expiry; the server-side row decides how long
/// the session lives.
pub async fn open(
    db: &SqlitePool,
    jar: SignedCookieJar,
    username: &str,
    ttl_hours: i64,
    secure: bool,
) -> Result<SignedCookieJar, sqlx::Error> {
    let ttl = Duration::hours(ttl_hours);
    let (_, token) = AdminSession::create(db, username, ttl).await?;

    let cookie = Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .build();

    Ok(jar.add(cookie))
}

/// Ends the current session, if any, and clears the cookie
pub async fn close(db: &SqlitePool, jar: SignedCookieJar) -> Result<SignedCookieJar, sqlx::Error> {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        if session_token::is_well_formed(cookie.value()) {
            AdminSession::delete(db, cookie.value()).await?;
        }
    }

    Ok(jar.remove(Cookie::build(SESSION_COOKIE).path("/")))
}
