/// Public catalog pages
///
/// - `GET /` - Home page, most recent artworks
/// - `GET /galerie?page=N` - Paginated gallery
/// - `GET /tableau/:id` - Artwork detail

use super::{find_artwork, render, ArtworkId, PageQuery};
use crate::{app::AppState, error::AppResult, flash, views};
use axum::{
    extract::{Query, State},
    response::Html,
};
use axum_extra::extract::cookie::CookieJar;
use gallery_shared::models::artwork::Artwork;

/// Number of artworks on the home page
pub const HOME_RECENT: i64 = 10;

/// Gallery page size
pub const GALLERY_PER_PAGE: i64 = 12;

/// Home page
pub async fn home(
    State(state): State<AppState>,
    jar: CookieJar,
) -> AppResult<(CookieJar, Html<String>)> {
    let recent = Artwork::recent(&state.db, HOME_RECENT).await?;
    let (jar, flash) = flash::take(jar);

    Ok((jar, render(views::public::home(&recent, flash.as_ref()))))
}

/// Gallery listing, newest first
pub async fn gallery(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
    jar: CookieJar,
) -> AppResult<(CookieJar, Html<String>)> {
    let artworks = Artwork::list(&state.db, query.page(), GALLERY_PER_PAGE).await?;
    let (jar, flash) = flash::take(jar);

    Ok((jar, render(views::public::gallery(&artworks, flash.as_ref()))))
}

/// Artwork detail page
pub async fn artwork_detail(
    State(state): State<AppState>,
    ArtworkId(id): ArtworkId,
    jar: CookieJar,
) -> AppResult<(CookieJar, Html<String>)> {
    let artwork = find_artwork(&state.db, id).await?;
    let (jar, flash) = flash::take(jar);

    Ok((jar, render(views::public::detail(&artwork, flash.as_ref()))))
}
