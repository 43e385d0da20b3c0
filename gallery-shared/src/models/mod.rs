/// Database models for Galerie
///
/// This module contains all database models and their CRUD operations.
///
/// # Models
///
/// - `artwork`: Catalog entries (paintings)
/// - `admin_user`: Back-office accounts
/// - `admin_session`: Server-held login sessions
/// - `page`: Pagination over newest-first listings
///
/// # Example
///
/// ```no_run
/// use gallery_shared::models::artwork::Artwork;
/// use gallery_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::in_memory()).await?;
///
/// let latest = Artwork::recent(&pool, 10).await?;
/// # Ok(())
/// # }
/// ```

pub mod admin_session;
pub mod admin_user;
pub mod artwork;
pub mod page;
