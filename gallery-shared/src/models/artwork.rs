/// Artwork model and database operations
///
/// An artwork is one catalog entry: a physical painting, how many originals
/// are in stock and how many reproductions were made.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE artworks (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     inventory_count INTEGER NOT NULL DEFAULT 1,
///     reproduced_count INTEGER NOT NULL DEFAULT 0,
///     title TEXT NOT NULL,
///     dimensions TEXT NOT NULL,         -- "{width}x{height}" in cm
///     technique TEXT NOT NULL,
///     themes TEXT,
///     price REAL NOT NULL,
///     location TEXT,
///     created_at TEXT NOT NULL,
///     updated_at TEXT NOT NULL,
///     photo TEXT                        -- base64 payload or external reference
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use gallery_shared::models::artwork::{Artwork, CreateArtwork, Dimensions};
/// use sqlx::SqlitePool;
///
/// # async fn example(pool: SqlitePool) -> Result<(), sqlx::Error> {
/// let artwork = Artwork::create(&pool, CreateArtwork {
///     inventory_count: 1,
///     reproduced_count: 0,
///     title: "Les Alpilles".to_string(),
///     dimensions: Dimensions { width: 60, height: 40 },
///     technique: "Huile sur toile".to_string(),
///     themes: Some("Paysage".to_string()),
///     price: 850.0,
///     location: None,
///     photo: None,
/// }).await?;
///
/// let page = Artwork::list(&pool, 1, 12).await?;
/// # Ok(())
/// # }
/// ```

use crate::models::page::{page_offset, Page};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use std::fmt;
use std::str::FromStr;

/// Techniques offered by the artwork form, in display order
pub const TECHNIQUES: &[&str] = &[
    "Huile sur toile",
    "Acrylique sur toile",
    "Aquarelle",
    "Pastel",
    "Gouache",
    "Encre",
    "Technique mixte",
    "Autre",
];

/// Returns true when `technique` is one of [`TECHNIQUES`]
pub fn is_known_technique(technique: &str) -> bool {
    TECHNIQUES.contains(&technique)
}

const ARTWORK_COLUMNS: &str = "id, inventory_count, reproduced_count, title, dimensions, \
     technique, themes, price, location, created_at, updated_at, photo";

/// Physical size of a painting in centimetres
///
/// Stored as `"{width}x{height}"`; both sides are always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Error parsing a stored dimensions string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid dimensions '{0}', expected WIDTHxHEIGHT")]
pub struct ParseDimensionsError(pub String);

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for Dimensions {
    type Err = ParseDimensionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseDimensionsError(s.to_string());

        let (width, height) = s.trim().split_once(['x', 'X']).ok_or_else(invalid)?;
        let width: u32 = width.trim().parse().map_err(|_| invalid())?;
        let height: u32 = height.trim().parse().map_err(|_| invalid())?;

        if width == 0 || height == 0 {
            return Err(invalid());
        }

        Ok(Self { width, height })
    }
}

/// Artwork record as stored in the catalog
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Artwork {
    /// Immutable identifier assigned at creation
    pub id: i64,

    /// Number of originals in stock
    pub inventory_count: i64,

    /// Number of reproductions made
    pub reproduced_count: i64,

    pub title: String,

    /// `"{width}x{height}"`, see [`Dimensions`]
    pub dimensions: String,

    pub technique: String,

    pub themes: Option<String>,

    pub price: f64,

    /// Where the painting currently hangs or is stored
    pub location: Option<String>,

    pub created_at: DateTime<Utc>,

    /// Refreshed on every update
    pub updated_at: DateTime<Utc>,

    /// Base64-encoded image, or a reference to an externally hosted one
    pub photo: Option<String>,
}

/// Input for creating a new artwork
#[derive(Debug, Clone)]
pub struct CreateArtwork {
    pub inventory_count: i64,
    pub reproduced_count: i64,
    pub title: String,
    pub dimensions: Dimensions,
    pub technique: String,
    pub themes: Option<String>,
    pub price: f64,
    pub location: Option<String>,
    pub photo: Option<String>,
}

/// Input for updating an existing artwork
///
/// Every descriptive field is replaced. `photo: None` keeps the stored
/// photo, so an edit without a new upload never clears it.
#[derive(Debug, Clone)]
pub struct UpdateArtwork {
    pub inventory_count: i64,
    pub reproduced_count: i64,
    pub title: String,
    pub dimensions: Dimensions,
    pub technique: String,
    pub themes: Option<String>,
    pub price: f64,
    pub location: Option<String>,
    pub photo: Option<String>,
}

impl Artwork {
    /// Parsed dimensions, or None if the stored string is malformed
    pub fn parsed_dimensions(&self) -> Option<Dimensions> {
        self.dimensions.parse().ok()
    }

    /// Data URL suitable for an `<img src>`, if the photo is inline base64
    ///
    /// External references (http/https URLs) are returned untouched.
    pub fn photo_src(&self) -> Option<String> {
        let photo = self.photo.as_deref()?;
        if photo.starts_with("http://") || photo.starts_with("https://") {
            return Some(photo.to_string());
        }
        Some(format!("data:{};base64,{}", sniff_image_mime(photo), photo))
    }

    /// Creates a new artwork
    ///
    /// Both timestamps are set to the current time.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails (e.g. a CHECK constraint on a
    /// negative count) or the database is unreachable.
    pub async fn create(pool: &SqlitePool, data: CreateArtwork) -> Result<Self, sqlx::Error> {
        let now = Utc::now();

        let artwork = sqlx::query_as::<_, Artwork>(&format!(
            r#"
            INSERT INTO artworks (inventory_count, reproduced_count, title, dimensions,
                                  technique, themes, price, location, created_at, updated_at, photo)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING {ARTWORK_COLUMNS}
            "#
        ))
        .bind(data.inventory_count)
        .bind(data.reproduced_count)
        .bind(data.title)
        .bind(data.dimensions.to_string())
        .bind(data.technique)
        .bind(data.themes)
        .bind(data.price)
        .bind(data.location)
        .bind(now)
        .bind(now)
        .bind(data.photo)
        .fetch_one(pool)
        .await?;

        tracing::debug!(artwork_id = artwork.id, "Artwork created");
        Ok(artwork)
    }

    /// Finds an artwork by ID
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let artwork = sqlx::query_as::<_, Artwork>(&format!(
            "SELECT {ARTWORK_COLUMNS} FROM artworks WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(artwork)
    }

    /// Lists one page of artworks, newest first
    ///
    /// The count and the rows are read in the same transaction, so the
    /// page and its total always describe the same snapshot. Ties on
    /// `created_at` are broken by id, newest first.
    ///
    /// # Arguments
    ///
    /// * `page` - 1-based page number (values below 1 are treated as 1)
    /// * `per_page` - Page size
    pub async fn list(
        pool: &SqlitePool,
        page: i64,
        per_page: i64,
    ) -> Result<Page<Self>, sqlx::Error> {
        let page = page.max(1);
        let mut tx = pool.begin().await?;

        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM artworks")
            .fetch_one(&mut *tx)
            .await?;

        let items = sqlx::query_as::<_, Artwork>(&format!(
            r#"
            SELECT {ARTWORK_COLUMNS}
            FROM artworks
            ORDER BY created_at DESC, id DESC
            LIMIT ? OFFSET ?
            "#
        ))
        .bind(per_page)
        .bind(page_offset(page, per_page))
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Page::new(items, page, per_page, total))
    }

    /// Returns the `limit` most recently created artworks
    pub async fn recent(pool: &SqlitePool, limit: i64) -> Result<Vec<Self>, sqlx::Error> {
        let artworks = sqlx::query_as::<_, Artwork>(&format!(
            r#"
            SELECT {ARTWORK_COLUMNS}
            FROM artworks
            ORDER BY created_at DESC, id DESC
            LIMIT ?
            "#
        ))
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(artworks)
    }

    /// Returns every artwork, newest first
    pub async fn all(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        let artworks = sqlx::query_as::<_, Artwork>(&format!(
            "SELECT {ARTWORK_COLUMNS} FROM artworks ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(pool)
        .await?;

        Ok(artworks)
    }

    /// Counts all artworks
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM artworks")
            .fetch_one(pool)
            .await?;

        Ok(count)
    }

    /// Updates an existing artwork
    ///
    /// `updated_at` is set to the current time; `created_at` never changes.
    ///
    /// # Returns
    ///
    /// The updated artwork, or None if no artwork has this id
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        data: UpdateArtwork,
    ) -> Result<Option<Self>, sqlx::Error> {
        let artwork = sqlx::query_as::<_, Artwork>(&format!(
            r#"
            UPDATE artworks
            SET inventory_count = ?,
                reproduced_count = ?,
                title = ?,
                dimensions = ?,
                technique = ?,
                themes = ?,
                price = ?,
                location = ?,
                photo = COALESCE(?, photo),
                updated_at = ?
            WHERE id = ?
            RETURNING {ARTWORK_COLUMNS}
            "#
        ))
        .bind(data.inventory_count)
        .bind(data.reproduced_count)
        .bind(data.title)
        .bind(data.dimensions.to_string())
        .bind(data.technique)
        .bind(data.themes)
        .bind(data.price)
        .bind(data.location)
        .bind(data.photo)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(artwork)
    }

    /// Deletes an artwork permanently
    ///
    /// # Returns
    ///
    /// True if the artwork was deleted, false if it didn't exist
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM artworks WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// Guesses the MIME type of a base64-encoded image from its magic bytes
fn sniff_image_mime(encoded: &str) -> &'static str {
    // base64 of the PNG, GIF and JPEG signatures
    if encoded.starts_with("iVBORw0KGgo") {
        "image/png"
    } else if encoded.starts_with("R0lGOD") {
        "image/gif"
    } else {
        "image/jpeg"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_display_is_width_first() {
        let dims = Dimensions {
            width: 50,
            height: 80,
        };
        assert_eq!(dims.to_string(), "50x80");
    }

    #[test]
    fn test_dimensions_parse() {
        assert_eq!(
            "60x40".parse::<Dimensions>().unwrap(),
            Dimensions {
                width: 60,
                height: 40
            }
        );
        assert_eq!(
            " 30 X 20 ".parse::<Dimensions>().unwrap(),
            Dimensions {
                width: 30,
                height: 20
            }
        );
    }

    #[test]
    fn test_dimensions_parse_rejects_malformed() {
        for input in ["", "60", "60x", "x40", "60x40x2", "0x40", "ax b", "-3x4"] {
            assert!(
                input.parse::<Dimensions>().is_err(),
                "'{}' should not parse",
                input
            );
        }
    }

    #[test]
    fn test_dimensions_roundtrip() {
        let dims = Dimensions {
            width: 73,
            height: 92,
        };
        assert_eq!(dims.to_string().parse::<Dimensions>().unwrap(), dims);
    }

    #[test]
    fn test_known_techniques() {
        assert!(is_known_technique("Aquarelle"));
        assert!(is_known_technique("Autre"));
        assert!(!is_known_technique(""));
        assert!(!is_known_technique("aquarelle"));
    }

    #[test]
    fn test_sniff_image_mime() {
        assert_eq!(sniff_image_mime("iVBORw0KGgoAAAANSUhEUg"), "image/png");
        assert_eq!(sniff_image_mime("R0lGODlhAQABAIAAAP"), "image/gif");
        assert_eq!(sniff_image_mime("/9j/4AAQSkZJRgABAQ"), "image/jpeg");
    }
}
