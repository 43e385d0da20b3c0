/// One-shot flash messages carried across a redirect
///
/// A flash is stored in a short-lived cookie as hex-encoded JSON and cleared
/// by the next page that renders it. Messages are always HTML-escaped on
/// display, so a tampered cookie can at most show its own text back.
///
/// # Example
///
/// ```no_run
/// use axum::response::IntoResponse;
/// use axum_extra::extract::cookie::CookieJar;
/// use gallery_api::flash::{self, Flash};
///
/// async fn handler(jar: CookieJar) -> impl IntoResponse {
///     flash::redirect(jar, Flash::success("Tableau ajouté avec succès!"), "/admin")
/// }
/// ```

use axum::response::Redirect;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};

/// Cookie holding the pending flash message
pub const FLASH_COOKIE: &str = "galerie_flash";

/// Severity of a flash message, used as its CSS class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Error,
    Info,
    Warning,
}

impl FlashLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlashLevel::Success => "success",
            FlashLevel::Error => "error",
            FlashLevel::Info => "info",
            FlashLevel::Warning => "warning",
        }
    }
}

/// A message shown once on the next rendered page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    pub fn new(level: FlashLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(FlashLevel::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(FlashLevel::Error, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(FlashLevel::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(FlashLevel::Warning, message)
    }

    fn encode(&self) -> String {
        // Serializing a plain struct of strings cannot fail
        hex::encode(serde_json::to_vec(self).unwrap_or_default())
    }

    fn decode(value: &str) -> Option<Self> {
        let bytes = hex::decode(value).ok()?;
        serde_json::from_slice(&bytes).ok()
    }
}

/// Builds the cookie carrying `flash`
pub fn cookie(flash: &Flash) -> Cookie<'static> {
    Cookie::build((FLASH_COOKIE, flash.encode()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// Stores `flash` for the next rendered page
pub fn set(jar: CookieJar, flash: Flash) -> CookieJar {
    jar.add(cookie(&flash))
}

/// Takes the pending flash, clearing its cookie
///
/// An undecodable cookie is cleared and ignored.
pub fn take(jar: CookieJar) -> (CookieJar, Option<Flash>) {
    let Some(value) = jar.get(FLASH_COOKIE).map(|c| c.value().to_string()) else {
        return (jar, None);
    };

    let jar = jar.remove(Cookie::build(FLASH_COOKIE).path("/"));
    (jar, Flash::decode(&value))
}

/// Redirects to `to` with `flash` pending
pub fn redirect(jar: CookieJar, flash: Flash, to: &str) -> (CookieJar, Redirect) {
    (set(jar, flash), Redirect::to(to))
}
