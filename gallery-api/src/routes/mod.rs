/// Route handlers
///
/// This module contains all route handlers organized by area:
///
/// - `health`: Health check endpoint
/// - `public`: Home, gallery and artwork detail pages
/// - `contact`: Public contact form
/// - `auth`: Admin login and logout
/// - `admin`: Dashboard and artwork listing
/// - `artworks`: Artwork create, edit and delete
/// - `export`: PDF downloads

pub mod admin;
pub mod artworks;
pub mod auth;
pub mod contact;
pub mod export;
pub mod health;
pub mod public;

use crate::error::AppError;
use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::Html,
};
use gallery_shared::models::{artwork::Artwork, page::normalize_page};
use maud::Markup;
use serde::Deserialize;
use sqlx::SqlitePool;

/// `?page=N` query of paginated listings
///
/// Anything that is not an integer is treated as page 1 rather than
/// rejected, as is any number below 1.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

impl PageQuery {
    pub fn page(&self) -> i64 {
        normalize_page(self.page.as_deref().and_then(|p| p.trim().parse().ok()))
    }
}

/// Artwork id taken from the `:id` path segment
///
/// Only plain decimal digits that fit an `i64` are ids; anything else
/// names no artwork and is rejected with the not-found page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtworkId(pub i64);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for ArtworkId {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::NotFound(e.body_text()))?;

        parse_id(&raw)
            .map(ArtworkId)
            .ok_or_else(|| AppError::NotFound(format!("No artwork id in {:?}", raw)))
    }
}

fn parse_id(raw: &str) -> Option<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// Loads an artwork or fails with the not-found page
pub(crate) async fn find_artwork(db: &SqlitePool, id: i64) -> Result<Artwork, AppError> {
    Artwork::find_by_id(db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Artwork {} not found", id)))
}

pub(crate) fn render(markup: Markup) -> Html<String> {
    Html(markup.into_string())
}
