/// Error handling for the gallery server
///
/// This module provides a unified error type that maps to HTML responses.
/// Handlers return `Result<T, AppError>`, which converts to the matching
/// status code and error page.
///
/// # Example
///
/// ```no_run
/// use axum::extract::State;
/// use gallery_api::{app::AppState, error::{AppError, AppResult}, routes::ArtworkId};
/// use gallery_shared::models::artwork::Artwork;
///
/// async fn handler(State(state): State<AppState>, ArtworkId(id): ArtworkId) -> AppResult<String> {
///     let artwork = Artwork::find_by_id(&state.db, id)
///         .await?
///         .ok_or_else(|| AppError::NotFound(format!("Artwork {} not found", id)))?;
///     Ok(artwork.title)
/// }
/// ```

use crate::{flash, routes::auth::LOGIN_PATH, views};
use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
};
use gallery_shared::{auth::password::PasswordError, export::ExportError};
use std::fmt;

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;

/// Unified application error type
#[derive(Debug)]
pub enum AppError {
    /// Bad request (400)
    BadRequest(String),

    /// No admin session: redirect to the login page with a warning
    Unauthorized(String),

    /// Cross-site form submission (403)
    Forbidden(String),

    /// Not found (404)
    NotFound(String),

    /// Unique constraint violation, shown as rejected input (422)
    Conflict(String),

    /// Request body over the upload ceiling (413)
    PayloadTooLarge,

    /// Internal server error (500)
    Internal(String),
}

/// A validation message attached to one form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Field that failed validation
    pub field: String,

    /// Message shown next to the field
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Flattens derive-validator errors into field errors
pub fn field_errors(errors: &validator::ValidationErrors) -> Vec<FieldError> {
    let mut details: Vec<FieldError> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| FieldError {
                field: field.to_string(),
                message: error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "Valeur invalide.".to_string()),
            })
        })
        .collect();

    // HashMap iteration order is unstable
    details.sort_by(|a, b| a.field.cmp(&b.field));
    details
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            AppError::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::PayloadTooLarge => write!(f, "Payload too large"),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, page) = match self {
            AppError::Unauthorized(msg) => {
                let mut response = Redirect::to(LOGIN_PATH).into_response();
                let cookie = flash::cookie(&flash::Flash::warning(msg));
                if let Ok(value) = HeaderValue::from_str(&cookie.to_string()) {
                    response.headers_mut().append(header::SET_COOKIE, value);
                }
                return response;
            }
            AppError::NotFound(msg) => {
                tracing::debug!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, views::errors::not_found())
            }
            AppError::Forbidden(msg) => (
                StatusCode::FORBIDDEN,
                views::errors::error_page("Accès refusé", &msg),
            ),
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                views::errors::error_page("Requête invalide", &msg),
            ),
            AppError::Conflict(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                views::errors::error_page("Données invalides", &msg),
            ),
            AppError::PayloadTooLarge => (
                StatusCode::PAYLOAD_TOO_LARGE,
                views::errors::error_page(
                    "Fichier trop volumineux",
                    "La taille de la requête dépasse la limite autorisée.",
                ),
            ),
            AppError::Internal(msg) => {
                // Log internal errors but don't expose details to clients
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    views::errors::error_page(
                        "Erreur interne",
                        "Une erreur interne est survenue.",
                    ),
                )
            }
        };

        (status, Html(page.into_string())).into_response()
    }
}

/// Convert sqlx errors to application errors
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => AppError::NotFound("Resource not found".to_string()),
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::Conflict("Cette valeur existe déjà.".to_string())
            }
            _ => AppError::Internal(format!("Database error: {}", err)),
        }
    }
}

/// Convert password errors to application errors
impl From<PasswordError> for AppError {
    fn from(err: PasswordError) -> Self {
        AppError::Internal(format!("Password operation failed: {}", err))
    }
}

/// Convert export errors to application errors
impl From<ExportError> for AppError {
    fn from(err: ExportError) -> Self {
        AppError::Internal(err.to_string())
    }
}

/// Convert multipart errors, keeping the body-limit status
impl From<axum::extract::multipart::MultipartError> for AppError {
    fn from(err: axum::extract::multipart::MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge
        } else {
            AppError::BadRequest(err.body_text())
        }
    }
}
