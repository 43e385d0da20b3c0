/// Middleware for the gallery server
///
/// - [`admin`]: Session guard for the back office
/// - [`origin`]: Refuses cross-site form submissions
/// - [`security`]: Security response headers

pub mod admin;
pub mod origin;
pub mod security;
