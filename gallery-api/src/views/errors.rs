/// Error pages

use super::layout::{page, Nav};
use maud::{html, Markup};

/// 404 page
pub fn not_found() -> Markup {
    error_page(
        "Page introuvable",
        "La page ou l'œuvre demandée n'existe pas.",
    )
}

/// Generic error page with a title and one message
pub fn error_page(title: &str, message: &str) -> Markup {
    let content = html! {
        h1 { (title) }
        p { (message) }
        p { a href="/" { "Retour à l'accueil" } }
    };

    page(title, Nav::Public, None, content)
}
