/// PDF downloads
///
/// - `GET /admin/tableau/:id/imprimer` - One artwork's sheet
/// - `GET /admin/export/liste` - The whole catalog, newest first
///
/// Rendering runs on the blocking pool.

use super::{find_artwork, ArtworkId};
use crate::{
    app::AppState,
    error::{AppError, AppResult},
    session::AdminContext,
};
use axum::{
    extract::State,
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Extension,
};
use gallery_shared::{
    export::{
        export_artwork_list, export_artwork_sheet,
        layout::{sheet_filename, LIST_FILENAME},
        ExportError,
    },
    models::artwork::Artwork,
};

/// `GET /admin/tableau/:id/imprimer`
pub async fn artwork_sheet(
    State(state): State<AppState>,
    Extension(admin): Extension<AdminContext>,
    ArtworkId(id): ArtworkId,
) -> AppResult<Response> {
    let artwork = find_artwork(&state.db, id).await?;
    let filename = sheet_filename(&artwork);

    let bytes = render_blocking(move || export_artwork_sheet(&artwork)).await?;

    tracing::info!(artwork_id = id, admin = %admin.username, bytes = bytes.len(), "Artwork sheet exported");
    Ok(pdf_attachment(&filename, bytes))
}

/// `GET /admin/export/liste`
pub async fn artwork_list(
    State(state): State<AppState>,
    Extension(admin): Extension<AdminContext>,
) -> AppResult<Response> {
    let artworks = Artwork::all(&state.db).await?;
    let count = artworks.len();

    let bytes = render_blocking(move || export_artwork_list(&artworks)).await?;

    tracing::info!(count, admin = %admin.username, bytes = bytes.len(), "Artwork list exported");
    Ok(pdf_attachment(LIST_FILENAME, bytes))
}

async fn render_blocking<F>(render: F) -> AppResult<Vec<u8>>
where
    F: FnOnce() -> Result<Vec<u8>, ExportError> + Send + 'static,
{
    tokio::task::spawn_blocking(render)
        .await
        .map_err(|e| AppError::Internal(format!("PDF rendering task failed: {}", e)))?
        .map_err(AppError::from)
}

fn pdf_attachment(filename: &str, bytes: Vec<u8>) -> Response {
    (
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("application/pdf")),
            (header::CONTENT_DISPOSITION, content_disposition(filename)),
        ],
        bytes,
    )
        .into_response()
}

/// `attachment` disposition with an ASCII fallback name and the exact
/// UTF-8 name in `filename*`
pub fn content_disposition(filename: &str) -> HeaderValue {
    let fallback: String = filename
        .chars()
        .map(|c| if is_plain(c) { c } else { '_' })
        .collect();

    let encoded: String = filename
        .bytes()
        .map(|b| {
            if b.is_ascii() && is_plain(b as char) {
                (b as char).to_string()
            } else {
                format!("%{:02X}", b)
            }
        })
        .collect();

    HeaderValue::from_str(&format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        fallback, encoded
    ))
    .unwrap_or_else(|_| HeaderValue::from_static("attachment"))
}

fn is_plain(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')
}
