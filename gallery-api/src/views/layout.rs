/// Document shell shared by every page

use crate::{flash::Flash, session::AdminContext};
use maud::{html, Markup, PreEscaped, DOCTYPE};

const SITE_NAME: &str = "Galerie";

const CSS: &str = r#"
*, *::before, *::after { box-sizing: border-box; }
body { margin: 0; font-family: Georgia, "Times New Roman", serif; color: #222; background: #faf8f5; }
a { color: #7a4b2a; }
header.site-header { display: flex; justify-content: space-between; align-items: center; padding: 1rem 2rem; background: #2b2622; }
header.site-header a { color: #f3ebe1; text-decoration: none; margin-left: 1.25rem; }
header.site-header .brand { margin-left: 0; font-size: 1.4rem; }
main { max-width: 1100px; margin: 0 auto; padding: 2rem; }
.flash { padding: .75rem 1rem; margin-bottom: 1.5rem; border-radius: 4px; border: 1px solid; }
.flash.success { background: #e8f5e9; border-color: #81c784; }
.flash.error { background: #fdecea; border-color: #e57373; }
.flash.info { background: #e3f2fd; border-color: #64b5f6; }
.flash.warning { background: #fff8e1; border-color: #ffb74d; }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 1.5rem; }
.card { background: #fff; border-radius: 4px; box-shadow: 0 1px 3px rgba(0,0,0,.12); overflow: hidden; text-decoration: none; color: inherit; }
.card img, .card .no-photo { width: 100%; height: 200px; object-fit: cover; display: block; background: #e9e4dc; }
.card .no-photo { display: flex; align-items: center; justify-content: center; color: #8a8177; }
.card .body { padding: .75rem 1rem; }
.card h3 { margin: 0 0 .25rem; font-size: 1.05rem; }
.muted { color: #6f675f; font-size: .9rem; }
.detail { display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; }
.detail img { max-width: 100%; }
dl.facts dt { font-weight: bold; margin-top: .5rem; }
dl.facts dd { margin: 0; }
form.stacked label { display: block; margin-top: 1rem; font-weight: bold; }
form.stacked input, form.stacked select, form.stacked textarea { width: 100%; padding: .5rem; font: inherit; }
form.stacked .field-error { color: #c62828; font-size: .9rem; }
form.stacked .row { display: flex; gap: 1rem; }
form.stacked .row > div { flex: 1; }
button, .button { display: inline-block; margin-top: 1rem; padding: .5rem 1.25rem; background: #7a4b2a; color: #fff; border: 0; border-radius: 4px; font: inherit; cursor: pointer; text-decoration: none; }
button.danger { background: #b71c1c; }
table { width: 100%; border-collapse: collapse; background: #fff; }
th, td { text-align: left; padding: .5rem; border-bottom: 1px solid #e0dbd4; }
td.actions form { display: inline; }
td.actions button { margin: 0 0 0 .5rem; padding: .25rem .75rem; }
nav.pagination { display: flex; gap: 1rem; align-items: center; justify-content: center; margin-top: 2rem; }
.stat { font-size: 2.5rem; margin: 0; }
"#;

/// Which navigation bar a page carries
#[derive(Debug, Clone, Copy)]
pub enum Nav<'a> {
    Public,
    Admin(&'a AdminContext),
}

/// Renders a complete HTML document
pub fn page(title: &str, nav: Nav<'_>, flash: Option<&Flash>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="fr" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | " (SITE_NAME) }
                style { (PreEscaped(CSS)) }
            }
            body {
                (site_header(nav))
                main {
                    @if let Some(flash) = flash {
                        div class={ "flash " (flash.level.as_str()) } role="alert" { (flash.message) }
                    }
                    (content)
                }
            }
        }
    }
}

fn site_header(nav: Nav<'_>) -> Markup {
    html! {
        header.site-header {
            a.brand href="/" { (SITE_NAME) }
            nav {
                @match nav {
                    Nav::Public => {
                        a href="/" { "Accueil" }
                        a href="/galerie" { "Galerie" }
                        a href="/contacter" { "Contact" }
                        a href="/admin" { "Administration" }
                    }
                    Nav::Admin(admin) => {
                        a href="/admin" { "Tableau de bord" }
                        a href="/admin/tableaux" { "Tableaux" }
                        a href="/admin/tableau/nouveau" { "Ajouter" }
                        a href="/admin/export/liste" { "Export PDF" }
                        a href="/admin/logout" { "Déconnexion (" (admin.username) ")" }
                    }
                }
            }
        }
    }
}
