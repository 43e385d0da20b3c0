/// PDF rendering of a [`DocumentLayout`]
///
/// Uses the built-in Helvetica faces, so no font files are embedded. Those
/// faces draw Windows-1252 only: any other character is printed as `?`
/// instead of silently disappearing. The metadata title is stored as a
/// UTF-16 text string so viewers show it intact.

use super::layout::{DocumentLayout, FontWeight, PAGE_HEIGHT, PAGE_WIDTH};
use super::ExportError;
use printpdf::lopdf::{self, Object, StringFormat};
use printpdf::{BuiltinFont, Mm, PdfDocument, Pt};
use std::borrow::Cow;
use tracing::debug;

/// Characters of Windows-1252 outside the Latin-1 ranges
const WIN_ANSI_EXTRAS: &str = "€‚ƒ„…†‡ˆ‰Š‹ŒŽ‘’“”•–—˜™š›œžŸ";

/// Substitute for characters the built-in fonts cannot draw
const REPLACEMENT: char = '?';

/// Renders a laid-out document to PDF bytes
///
/// # Errors
///
/// Returns `ExportError::Render` if a font cannot be registered or the
/// document cannot be serialized
pub fn render(layout: &DocumentLayout) -> Result<Vec<u8>, ExportError> {
    let width = Mm::from(Pt(PAGE_WIDTH));
    let height = Mm::from(Pt(PAGE_HEIGHT));

    let (doc, first_page, first_layer) = PdfDocument::new(layout.title.as_str(), width, height, "Page 1");

    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ExportError::Render(format!("Failed to load Helvetica: {:?}", e)))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ExportError::Render(format!("Failed to load Helvetica-Bold: {:?}", e)))?;

    for (index, page) in layout.pages.iter().enumerate() {
        let layer = if index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_ref, layer_ref) = doc.add_page(width, height, format!("Page {}", index + 1));
            doc.get_page(page_ref).get_layer(layer_ref)
        };

        for item in &page.items {
            let font = match item.weight {
                FontWeight::Regular => &regular,
                FontWeight::Bold => &bold,
            };
            layer.use_text(
                printable(&item.text),
                item.size,
                Mm::from(Pt(item.x)),
                Mm::from(Pt(item.y)),
                font,
            );
        }
    }

    let bytes = doc
        .save_to_bytes()
        .map_err(|e| ExportError::Render(format!("Failed to serialize PDF: {:?}", e)))?;
    let bytes = with_unicode_title(&bytes, &layout.title)?;

    debug!(pages = layout.pages.len(), bytes = bytes.len(), "PDF rendered");
    Ok(bytes)
}

/// Returns true if the built-in fonts can draw `c`
pub fn is_win_ansi(c: char) -> bool {
    matches!(c, ' '..='~' | '\u{a0}'..='\u{ff}') || WIN_ANSI_EXTRAS.contains(c)
}

/// Replaces every character the built-in fonts cannot draw
pub fn printable(text: &str) -> Cow<'_, str> {
    if text.chars().all(is_win_ansi) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(
            text.chars()
                .map(|c| if is_win_ansi(c) { c } else { REPLACEMENT })
                .collect(),
        )
    }
}

/// Encodes a PDF text string as UTF-16BE with its byte order mark
fn utf16_text_string(text: &str) -> Vec<u8> {
    let mut bytes = vec![0xFE, 0xFF];
    bytes.extend(text.encode_utf16().flat_map(u16::to_be_bytes));
    bytes
}

/// Rewrites the document-info title, which printpdf stores as raw UTF-8
fn with_unicode_title(bytes: &[u8], title: &str) -> Result<Vec<u8>, ExportError> {
    let render_err = |e: lopdf::Error| ExportError::Render(format!("Failed to set PDF title: {:?}", e));

    let mut doc = lopdf::Document::load_mem(bytes).map_err(render_err)?;
    let info_id = doc
        .trailer
        .get(b"Info")
        .and_then(Object::as_reference)
        .map_err(render_err)?;

    doc.get_object_mut(info_id)
        .and_then(Object::as_dict_mut)
        .map_err(render_err)?
        .set(
            "Title",
            Object::String(utf16_text_string(title), StringFormat::Hexadecimal),
        );

    let mut out = Vec::new();
    doc.save_to(&mut out).map_err(lopdf::Error::from).map_err(render_err)?;
    Ok(out)
}
