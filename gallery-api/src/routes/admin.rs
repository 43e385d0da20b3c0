/// Back-office overview pages
///
/// - `GET /admin` - Dashboard
/// - `GET /admin/tableaux?page=N` - Artwork listing

use super::{render, PageQuery};
use crate::{app::AppState, error::AppResult, flash, session::AdminContext, views};
use axum::{
    extract::{Query, State},
    response::Html,
    Extension,
};
use axum_extra::extract::cookie::CookieJar;
use gallery_shared::models::artwork::Artwork;

/// Number of artworks on the dashboard
pub const DASHBOARD_RECENT: i64 = 5;

/// Admin listing page size
pub const ADMIN_PER_PAGE: i64 = 20;

/// Dashboard: catalog size and latest additions
pub async fn dashboard(
    State(state): State<AppState>,
    Extension(admin): Extension<AdminContext>,
    jar: CookieJar,
) -> AppResult<(CookieJar, Html<String>)> {
    let total = Artwork::count(&state.db).await?;
    let recent = Artwork::recent(&state.db, DASHBOARD_RECENT).await?;
    let (jar, flash) = flash::take(jar);

    Ok((
        jar,
        render(views::admin::dashboard(&admin, total, &recent, flash.as_ref())),
    ))
}

/// Paginated artwork listing, newest first
pub async fn artwork_list(
    State(state): State<AppState>,
    Extension(admin): Extension<AdminContext>,
    Query(query): Query<PageQuery>,
    jar: CookieJar,
) -> AppResult<(CookieJar, Html<String>)> {
    let artworks = Artwork::list(&state.db, query.page(), ADMIN_PER_PAGE).await?;
    let (jar, flash) = flash::take(jar);

    Ok((
        jar,
        render(views::admin::artwork_list(&admin, &artworks, flash.as_ref())),
    ))
}
