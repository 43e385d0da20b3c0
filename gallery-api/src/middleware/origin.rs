/// Cross-site form submission guard
///
/// Browsers attach `Origin` to every cross-origin POST, and `Referer` when
/// `Origin` is withheld. A state-changing request whose origin names a
/// different host than the one it was sent to is refused with 403 before
/// its body is read. Requests carrying neither header are let through:
/// they come from non-browser clients, which hold no session cookie to
/// abuse. Session cookies are also `SameSite=Lax`.

use crate::error::AppError;
use axum::{
    extract::Request,
    http::{header, uri::Authority, HeaderMap, Method, Uri},
    middleware::Next,
    response::Response,
};
use tracing::warn;

/// Rejects unsafe-method requests sent from another site
pub async fn same_origin(req: Request, next: Next) -> Result<Response, AppError> {
    if is_safe(req.method()) {
        return Ok(next.run(req).await);
    }

    let Some(source) = source_header(req.headers()).map(str::to_string) else {
        return Ok(next.run(req).await);
    };

    let same_site = {
        let target = req
            .headers()
            .get(header::HOST)
            .and_then(|v| v.to_str().ok())
            .or_else(|| req.uri().authority().map(Authority::as_str));

        authority_of(&source)
            .zip(target)
            .is_some_and(|(from, to)| from.eq_ignore_ascii_case(to))
    };

    if same_site {
        return Ok(next.run(req).await);
    }

    warn!(
        method = %req.method(),
        path = %req.uri().path(),
        source = %source,
        "Cross-site request refused"
    );
    Err(AppError::Forbidden(
        "Cette requête ne provient pas de ce site.".to_string(),
    ))
}

fn is_safe(method: &Method) -> bool {
    matches!(*method, Method::GET | Method::HEAD | Method::OPTIONS | Method::TRACE)
}

/// `Origin`, or `Referer` when the browser withheld the origin
fn source_header(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::ORIGIN)
        .or_else(|| headers.get(header::REFERER))
        .map(|v| v.to_str().unwrap_or_default())
}

/// `host[:port]` of an absolute URL; `None` for `null` or anything relative
fn authority_of(url: &str) -> Option<String> {
    let uri: Uri = url.parse().ok()?;
    uri.scheme()?;
    uri.authority().map(|a| a.as_str().to_string())
}
