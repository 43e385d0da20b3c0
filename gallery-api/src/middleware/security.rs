/// Security headers middleware
///
/// Adds security-related HTTP headers to every response.
///
/// # Headers Applied
///
/// - `X-Content-Type-Options: nosniff`
/// - `X-Frame-Options: DENY`
/// - `Referrer-Policy: strict-origin-when-cross-origin`
/// - `Permissions-Policy`
/// - `Content-Security-Policy`: same-origin resources, inline styles and
///   `data:` images (photos are embedded as data URLs)
/// - `Strict-Transport-Security`: production only
///
/// # Example
///
/// ```no_run
/// use axum::{middleware::from_fn_with_state, Router};
/// use gallery_api::middleware::security::security_headers;
///
/// let app: Router = Router::new()
///     .layer(from_fn_with_state(true, security_headers)); // true = production mode
/// ```

use axum::{
    extract::{Request, State},
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};

const CONTENT_SECURITY_POLICY: &str = "default-src 'self'; script-src 'none'; \
     style-src 'self' 'unsafe-inline'; img-src 'self' data: https:; \
     form-action 'self'; frame-ancestors 'none'";

/// Sets the security headers; `State(hsts)` enables HSTS
pub async fn security_headers(State(hsts): State<bool>, req: Request, next: Next) -> Response {
    let mut response = next.run(req).await;
    let headers = response.headers_mut();

    let fixed: [(&'static str, &'static str); 5] = [
        ("x-content-type-options", "nosniff"),
        ("x-frame-options", "DENY"),
        ("referrer-policy", "strict-origin-when-cross-origin"),
        (
            "permissions-policy",
            "geolocation=(), microphone=(), camera=(), payment=(), usb=()",
        ),
        ("content-security-policy", CONTENT_SECURITY_POLICY),
    ];

    for (name, value) in fixed {
        headers.insert(HeaderName::from_static(name), HeaderValue::from_static(value));
    }

    if hsts {
        headers.insert(
            HeaderName::from_static("strict-transport-security"),
            HeaderValue::from_static("max-age=31536000; includeSubDomains"),
        );
    }

    response
}
