/// Document export: printable artwork sheets and the full catalog list
///
/// # Example
///
/// ```no_run
/// use gallery_shared::export::{export_artwork_list, export_artwork_sheet};
/// use gallery_shared::models::artwork::Artwork;
/// use sqlx::SqlitePool;
///
/// # async fn example(pool: SqlitePool) -> Result<(), Box<dyn std::error::Error>> {
/// let artworks = Artwork::all(&pool).await?;
/// let pdf: Vec<u8> = export_artwork_list(&artworks)?;
/// # Ok(())
/// # }
/// ```

pub mod layout;
pub mod pdf;

use crate::models::artwork::Artwork;

/// Error type for document export
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The PDF backend failed
    #[error("Failed to render document: {0}")]
    Render(String),
}

/// Renders the one-page sheet of an artwork
pub fn export_artwork_sheet(artwork: &Artwork) -> Result<Vec<u8>, ExportError> {
    pdf::render(&layout::artwork_sheet(artwork))
}

/// Renders the table of the given artworks, in the order given
pub fn export_artwork_list(artworks: &[Artwork]) -> Result<Vec<u8>, ExportError> {
    pdf::render(&layout::artwork_list(artworks))
}
