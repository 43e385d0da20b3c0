/// Artwork management endpoints
///
/// # Endpoints
///
/// - `GET /admin/tableau/nouveau` - Empty creation form
/// - `POST /admin/tableau/nouveau` - Create an artwork
/// - `GET /admin/tableau/:id/modifier` - Prefilled edit form
/// - `POST /admin/tableau/:id/modifier` - Update an artwork
/// - `POST /admin/tableau/:id/supprimer` - Delete an artwork
///
/// Forms are `multipart/form-data` so a photo can be attached. A rejected
/// submission redisplays the form with the submitted values and field
/// messages, with status 422, and persists nothing.

use super::{find_artwork, render, ArtworkId};
use crate::{
    app::AppState,
    error::{AppError, AppResult},
    flash::{self, Flash},
    forms::{ArtworkInput, FormErrors},
    session::AdminContext,
    views::{self, admin::FormMode},
};
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension,
};
use axum_extra::extract::cookie::CookieJar;
use gallery_shared::models::artwork::Artwork;
use tracing::info;

/// Where every successful mutation lands
const LISTING_PATH: &str = "/admin/tableaux";

fn rejected(
    admin: &AdminContext,
    mode: FormMode<'_>,
    input: &ArtworkInput,
    errors: &FormErrors,
) -> Response {
    let page = views::admin::artwork_form(admin, mode, input, errors, None);
    (StatusCode::UNPROCESSABLE_ENTITY, render(page)).into_response()
}

/// `GET /admin/tableau/nouveau`
pub async fn new_form(Extension(admin): Extension<AdminContext>, jar: CookieJar) -> impl IntoResponse {
    let (jar, flash) = flash::take(jar);
    let page = views::admin::artwork_form(
        &admin,
        FormMode::Create,
        &ArtworkInput::blank(),
        &FormErrors::default(),
        flash.as_ref(),
    );

    (jar, render(page))
}

/// `POST /admin/tableau/nouveau`
pub async fn create(
    State(state): State<AppState>,
    Extension(admin): Extension<AdminContext>,
    jar: CookieJar,
    multipart: Multipart,
) -> AppResult<Response> {
    let (input, photo) = ArtworkInput::from_multipart(multipart).await?;

    let valid = match input.validate(photo.as_ref()) {
        Ok(valid) => valid,
        Err(errors) => return Ok(rejected(&admin, FormMode::Create, &input, &errors)),
    };

    let artwork = Artwork::create(&state.db, valid.into_create()).await?;

    info!(
        artwork_id = artwork.id,
        title = %artwork.title,
        admin = %admin.username,
        "Artwork created"
    );

    Ok(flash::redirect(jar, Flash::success("Tableau ajouté avec succès!"), LISTING_PATH)
        .into_response())
}

/// `GET /admin/tableau/:id/modifier`
pub async fn edit_form(
    State(state): State<AppState>,
    Extension(admin): Extension<AdminContext>,
    ArtworkId(id): ArtworkId,
    jar: CookieJar,
) -> AppResult<impl IntoResponse> {
    let artwork = find_artwork(&state.db, id).await?;
    let (jar, flash) = flash::take(jar);

    let page = views::admin::artwork_form(
        &admin,
        FormMode::Edit(&artwork),
        &ArtworkInput::from_artwork(&artwork),
        &FormErrors::default(),
        flash.as_ref(),
    );

    Ok((jar, render(page)))
}

/// `POST /admin/tableau/:id/modifier`
///
/// Without a new photo the stored one is kept.
pub async fn update(
    State(state): State<AppState>,
    Extension(admin): Extension<AdminContext>,
    ArtworkId(id): ArtworkId,
    jar: CookieJar,
    multipart: Multipart,
) -> AppResult<Response> {
    let artwork = find_artwork(&state.db, id).await?;
    let (input, photo) = ArtworkInput::from_multipart(multipart).await?;

    let valid = match input.validate(photo.as_ref()) {
        Ok(valid) => valid,
        Err(errors) => return Ok(rejected(&admin, FormMode::Edit(&artwork), &input, &errors)),
    };

    let replaced_photo = valid.photo.is_some();
    let updated = Artwork::update(&state.db, id, valid.into_update())
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Artwork {} not found", id)))?;

    info!(
        artwork_id = updated.id,
        admin = %admin.username,
        replaced_photo,
        "Artwork updated"
    );

    Ok(flash::redirect(jar, Flash::success("Tableau modifié avec succès!"), LISTING_PATH)
        .into_response())
}

/// `POST /admin/tableau/:id/supprimer`
///
/// # Errors
///
/// - `404 Not Found`: no artwork with this id
pub async fn delete(
    State(state): State<AppState>,
    Extension(admin): Extension<AdminContext>,
    ArtworkId(id): ArtworkId,
    jar: CookieJar,
) -> AppResult<impl IntoResponse> {
    if !Artwork::delete(&state.db, id).await? {
        return Err(AppError::NotFound(format!("Artwork {} not found", id)));
    }

    info!(artwork_id = id, admin = %admin.username, "Artwork deleted");

    Ok(flash::redirect(jar, Flash::success("Tableau supprimé avec succès!"), LISTING_PATH))
}
