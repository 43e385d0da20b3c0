/// Public pages: home, gallery, artwork detail, contact

use super::components::{artwork_card, date, field_error, pagination, photo, price};
use super::layout::{page, Nav};
use crate::{
    flash::Flash,
    forms::{ContactForm, FormErrors},
};
use gallery_shared::models::{artwork::Artwork, page::Page};
use maud::{html, Markup};

/// Home page with the most recent artworks
pub fn home(recent: &[Artwork], flash: Option<&Flash>) -> Markup {
    let content = html! {
        section {
            h1 { "Bienvenue à la galerie" }
            p.muted { "Peintures originales et reproductions." }
        }
        section {
            h2 { "Dernières œuvres" }
            @if recent.is_empty() {
                p { "Aucune œuvre pour le moment." }
            } @else {
                div.grid {
                    @for artwork in recent {
                        (artwork_card(artwork))
                    }
                }
                p { a.button href="/galerie" { "Voir toute la galerie" } }
            }
        }
    };

    page("Accueil", Nav::Public, flash, content)
}

/// Paginated gallery
pub fn gallery(artworks: &Page<Artwork>, flash: Option<&Flash>) -> Markup {
    let content = html! {
        h1 { "Galerie" }
        @if artworks.is_empty() {
            p { "Aucune œuvre sur cette page." }
        } @else {
            div.grid {
                @for artwork in &artworks.items {
                    (artwork_card(artwork))
                }
            }
        }
        (pagination(artworks, "/galerie"))
    };

    page("Galerie", Nav::Public, flash, content)
}

/// Detail page of one artwork
pub fn detail(artwork: &Artwork, flash: Option<&Flash>) -> Markup {
    let content = html! {
        p { a href="/galerie" { "« Retour à la galerie" } }
        div.detail {
            div { (photo(artwork)) }
            div {
                h1 { (artwork.title) }
                dl.facts {
                    dt { "Format" }
                    dd { (artwork.dimensions) " cm" }
                    dt { "Technique" }
                    dd { (artwork.technique) }
                    @if let Some(themes) = &artwork.themes {
                        dt { "Thèmes" }
                        dd { (themes) }
                    }
                    dt { "Prix" }
                    dd { (price(artwork)) }
                    dt { "Ajouté le" }
                    dd { (date(&artwork.created_at)) }
                }
                p { a.button href="/contacter" { "Nous contacter à propos de cette œuvre" } }
            }
        }
    };

    page(&artwork.title, Nav::Public, flash, content)
}

/// Contact form, with the submitted values on redisplay
pub fn contact(form: &ContactForm, errors: &FormErrors, flash: Option<&Flash>) -> Markup {
    let content = html! {
        h1 { "Nous contacter" }
        form.stacked method="post" action="/contacter" {
            label for="name" { "Nom" }
            input id="name" type="text" name="name" value=(form.name);
            (field_error(errors.get("name")))

            label for="email" { "Email" }
            input id="email" type="email" name="email" value=(form.email);
            (field_error(errors.get("email")))

            label for="subject" { "Sujet" }
            input id="subject" type="text" name="subject" value=(form.subject);
            (field_error(errors.get("subject")))

            label for="message" { "Message" }
            textarea id="message" name="message" rows="6" { (form.message) }
            (field_error(errors.get("message")))

            button type="submit" { "Envoyer" }
        }
    };

    page("Contact", Nav::Public, flash, content)
}
