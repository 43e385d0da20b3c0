/// Page layout for artwork documents
///
/// Layout is plain data: pages of text items positioned in PDF points from
/// the bottom-left corner of a US-letter page. Rendering to bytes happens in
/// [`super::pdf`], so the placement rules can be checked without parsing PDF.

use crate::models::artwork::Artwork;
use serde::Serialize;

/// US-letter width in points
pub const PAGE_WIDTH: f32 = 612.0;

/// US-letter height in points
pub const PAGE_HEIGHT: f32 = 792.0;

/// Placeholder for optional fields left empty
pub const UNSPECIFIED: &str = "Non spécifié";

/// Title of the list document
pub const LIST_TITLE: &str = "Liste des œuvres";

/// Download name of the list document
pub const LIST_FILENAME: &str = "liste_oeuvres.pdf";

/// Column x positions and labels of the list table
pub const LIST_COLUMNS: [(f32, &str); 5] = [
    (50.0, "ID"),
    (80.0, "Titre"),
    (250.0, "Format"),
    (320.0, "Technique"),
    (450.0, "Prix"),
];

const SHEET_TITLE_SIZE: f32 = 16.0;
const SHEET_LINE_SIZE: f32 = 12.0;
const SHEET_LINE_STEP: f32 = 25.0;
const SHEET_MARGIN_X: f32 = 100.0;

const LIST_TITLE_SIZE: f32 = 16.0;
const LIST_ROW_SIZE: f32 = 10.0;
const LIST_HEADER_GAP: f32 = 20.0;
const LIST_ROW_STEP: f32 = 15.0;

/// Rows are never drawn below this line; the next row opens a new page
const LIST_BOTTOM_MARGIN: f32 = 50.0;

const LIST_TITLE_MAX_CHARS: usize = 25;
const LIST_TECHNIQUE_MAX_CHARS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FontWeight {
    Regular,
    Bold,
}

/// One run of text at a fixed position
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextItem {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub weight: FontWeight,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PageLayout {
    pub items: Vec<TextItem>,
}

impl PageLayout {
    /// Returns true if some item on the page has exactly this text
    pub fn contains_text(&self, text: &str) -> bool {
        self.items.iter().any(|item| item.text == text)
    }
}

/// A whole document, ready to render
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentLayout {
    /// Document metadata title
    pub title: String,

    /// Always at least one page
    pub pages: Vec<PageLayout>,
}

impl DocumentLayout {
    fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            pages: vec![PageLayout::default()],
        }
    }

    fn start_page(&mut self) {
        self.pages.push(PageLayout::default());
    }

    fn text(&mut self, x: f32, y: f32, size: f32, weight: FontWeight, text: impl Into<String>) {
        // pages is never empty: new() seeds one and pages are only pushed
        if let Some(page) = self.pages.last_mut() {
            page.items.push(TextItem {
                x,
                y,
                size,
                weight,
                text: text.into(),
            });
        }
    }
}

/// Formats a price the way the sheets and lists print it
///
/// Shortest decimal that reads back as the same value, always with a
/// fractional part: `1200.0€`, `350.5€`.
pub fn format_price(price: f64) -> String {
    format!("{:?}€", price)
}

fn or_unspecified(value: Option<&str>) -> &str {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => UNSPECIFIED,
    }
}

fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// Lays out the one-page sheet for a single artwork
///
/// The title sits at the top, followed by a fixed list of `label: value`
/// lines. Missing themes or location print [`UNSPECIFIED`].
pub fn artwork_sheet(artwork: &Artwork) -> DocumentLayout {
    let mut doc = DocumentLayout::new(format!("Fiche d'œuvre: {}", artwork.title));

    doc.text(
        SHEET_MARGIN_X,
        PAGE_HEIGHT - 100.0,
        SHEET_TITLE_SIZE,
        FontWeight::Bold,
        format!("Fiche d'œuvre: {}", artwork.title),
    );

    let lines = [
        format!("Titre: {}", artwork.title),
        format!("Format: {} cm", artwork.dimensions),
        format!("Technique: {}", artwork.technique),
        format!("Thèmes: {}", or_unspecified(artwork.themes.as_deref())),
        format!("Prix: {}", format_price(artwork.price)),
        format!("Lieux: {}", or_unspecified(artwork.location.as_deref())),
        format!("Quantité: {}", artwork.inventory_count),
        format!("Quantité reproduits: {}", artwork.reproduced_count),
        format!("Date de création: {}", artwork.created_at.format("%d/%m/%Y")),
        format!("Dernière modification: {}", artwork.updated_at.format("%d/%m/%Y")),
    ];

    let mut y = PAGE_HEIGHT - 150.0;
    for line in lines {
        doc.text(SHEET_MARGIN_X, y, SHEET_LINE_SIZE, FontWeight::Regular, line);
        y -= SHEET_LINE_STEP;
    }

    doc
}

/// Download name for an artwork sheet: `tableau_{id}_{title}.pdf`
///
/// Characters that would break a `Content-Disposition` header or a file
/// system path are replaced with `_`.
pub fn sheet_filename(artwork: &Artwork) -> String {
    let title: String = artwork
        .title
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' || c == '.' {
                c
            } else {
                '_'
            }
        })
        .collect();

    format!("tableau_{}_{}.pdf", artwork.id, title)
}

/// Lays out the table of all artworks
///
/// Column headers are drawn once, on the first page. When a row would fall
/// below the bottom margin a fresh page is started and rows continue from
/// its top, without headers.
pub fn artwork_list(artworks: &[Artwork]) -> DocumentLayout {
    let mut doc = DocumentLayout::new(LIST_TITLE);

    doc.text(
        100.0,
        PAGE_HEIGHT - 50.0,
        LIST_TITLE_SIZE,
        FontWeight::Bold,
        LIST_TITLE,
    );

    let mut y = PAGE_HEIGHT - 100.0;
    for (x, label) in LIST_COLUMNS {
        doc.text(x, y, LIST_ROW_SIZE, FontWeight::Regular, label);
    }
    y -= LIST_HEADER_GAP;

    for artwork in artworks {
        if y < LIST_BOTTOM_MARGIN {
            doc.start_page();
            y = PAGE_HEIGHT - 50.0;
        }

        let cells = [
            artwork.id.to_string(),
            truncate_chars(&artwork.title, LIST_TITLE_MAX_CHARS),
            artwork.dimensions.clone(),
            truncate_chars(&artwork.technique, LIST_TECHNIQUE_MAX_CHARS),
            format_price(artwork.price),
        ];

        for ((x, _), cell) in LIST_COLUMNS.iter().zip(cells) {
            doc.text(*x, y, LIST_ROW_SIZE, FontWeight::Regular, cell);
        }
        y -= LIST_ROW_STEP;
    }

    doc
}
