/// Fragments shared between pages

use gallery_shared::{
    export::layout::format_price,
    models::{artwork::Artwork, page::Page},
};
use maud::{html, Markup};

/// Date shown for record timestamps
pub(super) fn date(at: &chrono::DateTime<chrono::Utc>) -> String {
    at.format("%d/%m/%Y").to_string()
}

pub(super) fn price(artwork: &Artwork) -> String {
    format_price(artwork.price)
}

/// Photo, or a placeholder box when the artwork has none
pub(super) fn photo(artwork: &Artwork) -> Markup {
    html! {
        @if let Some(src) = artwork.photo_src() {
            img src=(src) alt=(artwork.title) loading="lazy";
        } @else {
            div.no-photo { "Pas de photo" }
        }
    }
}

/// Gallery card linking to the artwork detail page
pub(super) fn artwork_card(artwork: &Artwork) -> Markup {
    html! {
        a.card href={ "/tableau/" (artwork.id) } {
            (photo(artwork))
            div.body {
                h3 { (artwork.title) }
                p.muted { (artwork.technique) " · " (artwork.dimensions) " cm" }
                p { (price(artwork)) }
            }
        }
    }
}

/// Previous/next links for a paginated listing at `base`
pub(super) fn pagination<T>(page: &Page<T>, base: &str) -> Markup {
    html! {
        @if page.pages() > 1 {
            nav.pagination {
                @if let Some(prev) = page.prev_page() {
                    a href={ (base) "?page=" (prev) } { "« Précédent" }
                }
                span { "Page " (page.page) " / " (page.pages()) }
                @if let Some(next) = page.next_page() {
                    a href={ (base) "?page=" (next) } { "Suivant »" }
                }
            }
        }
    }
}

/// Message under a rejected form field
pub(super) fn field_error(message: Option<&str>) -> Markup {
    html! {
        @if let Some(message) = message {
            div.field-error { (message) }
        }
    }
}
