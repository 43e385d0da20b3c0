/// Back-office pages

use super::components::{date, field_error, pagination, photo, price};
use super::layout::{page, Nav};
use crate::{
    flash::Flash,
    forms::{ArtworkInput, FormErrors},
    session::AdminContext,
};
use gallery_shared::models::{
    artwork::{Artwork, TECHNIQUES},
    page::Page,
};
use maud::{html, Markup};

/// Whether the artwork form creates a record or edits `Artwork`
#[derive(Debug, Clone, Copy)]
pub enum FormMode<'a> {
    Create,
    Edit(&'a Artwork),
}

impl FormMode<'_> {
    fn action(&self) -> String {
        match self {
            FormMode::Create => "/admin/tableau/nouveau".to_string(),
            FormMode::Edit(artwork) => format!("/admin/tableau/{}/modifier", artwork.id),
        }
    }

    fn heading(&self) -> &'static str {
        match self {
            FormMode::Create => "Ajouter un tableau",
            FormMode::Edit(_) => "Modifier le tableau",
        }
    }
}

/// Login page; the submitted username is kept on redisplay
pub fn login(username: &str, errors: &FormErrors, flash: Option<&Flash>) -> Markup {
    let content = html! {
        h1 { "Connexion administrateur" }
        form.stacked method="post" action="/admin/login" {
            label for="username" { "Nom d'utilisateur" }
            input id="username" type="text" name="username" value=(username) autocomplete="username";
            (field_error(errors.get("username")))

            label for="password" { "Mot de passe" }
            input id="password" type="password" name="password" autocomplete="current-password";
            (field_error(errors.get("password")))

            button type="submit" { "Connexion" }
        }
    };

    page("Connexion", Nav::Public, flash, content)
}

/// Dashboard with the catalog size and latest additions
pub fn dashboard(
    admin: &AdminContext,
    total: i64,
    recent: &[Artwork],
    flash: Option<&Flash>,
) -> Markup {
    let content = html! {
        h1 { "Tableau de bord" }
        section {
            p.stat { (total) }
            p.muted { "tableau(x) au catalogue" }
            a.button href="/admin/tableau/nouveau" { "Ajouter un tableau" }
        }
        section {
            h2 { "Derniers ajouts" }
            @if recent.is_empty() {
                p { "Aucun tableau pour le moment." }
            } @else {
                (artwork_table(recent))
            }
        }
    };

    page("Tableau de bord", Nav::Admin(admin), flash, content)
}

/// Paginated listing of every artwork
pub fn artwork_list(admin: &AdminContext, artworks: &Page<Artwork>, flash: Option<&Flash>) -> Markup {
    let content = html! {
        h1 { "Tableaux (" (artworks.total) ")" }
        p {
            a.button href="/admin/tableau/nouveau" { "Ajouter un tableau" }
            " "
            a.button href="/admin/export/liste" { "Exporter la liste (PDF)" }
        }
        @if artworks.is_empty() {
            p { "Aucun tableau sur cette page." }
        } @else {
            (artwork_table(&artworks.items))
        }
        (pagination(artworks, "/admin/tableaux"))
    };

    page("Tableaux", Nav::Admin(admin), flash, content)
}

fn artwork_table(artworks: &[Artwork]) -> Markup {
    html! {
        table {
            thead {
                tr {
                    th { "ID" }
                    th { "Titre" }
                    th { "Format" }
                    th { "Technique" }
                    th { "Prix" }
                    th { "Ajouté le" }
                    th { "Actions" }
                }
            }
            tbody {
                @for artwork in artworks {
                    tr {
                        td { (artwork.id) }
                        td { a href={ "/tableau/" (artwork.id) } { (artwork.title) } }
                        td { (artwork.dimensions) }
                        td { (artwork.technique) }
                        td { (price(artwork)) }
                        td { (date(&artwork.created_at)) }
                        td.actions {
                            a href={ "/admin/tableau/" (artwork.id) "/modifier" } { "Modifier" }
                            " "
                            a href={ "/admin/tableau/" (artwork.id) "/imprimer" } { "Imprimer" }
                            form method="post" action={ "/admin/tableau/" (artwork.id) "/supprimer" } {
                                button.danger type="submit" { "Supprimer" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Create/edit form for an artwork
pub fn artwork_form(
    admin: &AdminContext,
    mode: FormMode<'_>,
    input: &ArtworkInput,
    errors: &FormErrors,
    flash: Option<&Flash>,
) -> Markup {
    let content = html! {
        h1 { (mode.heading()) }
        form.stacked method="post" action=(mode.action()) enctype="multipart/form-data" {
            div.row {
                div {
                    label for="inventory_count" { "Quantité de tableaux" }
                    input id="inventory_count" type="number" min="1" name="inventory_count" value=(input.inventory_count);
                    (field_error(errors.get("inventory_count")))
                }
                div {
                    label for="reproduced_count" { "Quantité reproduits" }
                    input id="reproduced_count" type="number" min="0" name="reproduced_count" value=(input.reproduced_count);
                    (field_error(errors.get("reproduced_count")))
                }
            }

            label for="title" { "Titre" }
            input id="title" type="text" name="title" value=(input.title);
            (field_error(errors.get("title")))

            div.row {
                div {
                    label for="width" { "Largeur (cm)" }
                    input id="width" type="number" min="1" name="width" value=(input.width);
                    (field_error(errors.get("width")))
                }
                div {
                    label for="height" { "Hauteur (cm)" }
                    input id="height" type="number" min="1" name="height" value=(input.height);
                    (field_error(errors.get("height")))
                }
            }

            label for="technique" { "Technique" }
            select id="technique" name="technique" {
                option value="" { "Choisir une technique" }
                @for technique in TECHNIQUES {
                    option value=(technique) selected[input.technique == *technique] { (technique) }
                }
            }
            (field_error(errors.get("technique")))

            label for="themes" { "Thèmes" }
            input id="themes" type="text" name="themes" value=(input.themes);

            label for="price" { "Prix (€)" }
            input id="price" type="text" inputmode="decimal" name="price" value=(input.price);
            (field_error(errors.get("price")))

            label for="location" { "Lieux" }
            input id="location" type="text" name="location" value=(input.location);

            label for="photo" { "Photo" }
            @if let FormMode::Edit(artwork) = mode {
                @if artwork.photo.is_some() {
                    div.card { (photo(artwork)) }
                    p.muted { "Laisser vide pour conserver la photo actuelle." }
                }
            }
            input id="photo" type="file" name="photo" accept=".jpg,.jpeg,.png,.gif";
            (field_error(errors.get("photo")))

            button type="submit" { "Sauvegarder" }
        }
    };

    page(mode.heading(), Nav::Admin(admin), flash, content)
}
