/// Public contact form
///
/// Submissions are validated and logged; nothing is delivered.

use super::render;
use crate::{
    flash::{self, Flash},
    forms::{ContactForm, FormErrors},
    views,
};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Form,
};
use axum_extra::extract::cookie::CookieJar;

pub const CONTACT_PATH: &str = "/contacter";

/// `GET /contacter`
pub async fn contact_form(jar: CookieJar) -> impl IntoResponse {
    let (jar, flash) = flash::take(jar);
    let page = views::public::contact(&ContactForm::default(), &FormErrors::default(), flash.as_ref());

    (jar, render(page))
}

/// `POST /contacter`
pub async fn submit_contact(jar: CookieJar, Form(form): Form<ContactForm>) -> Response {
    let form = form.normalized();

    if let Err(errors) = form.check() {
        let page = views::public::contact(&form, &errors, None);
        return (StatusCode::UNPROCESSABLE_ENTITY, render(page)).into_response();
    }

    tracing::info!(
        name = %form.name,
        subject = %form.subject,
        length = form.message.chars().count(),
        "Contact message received"
    );

    flash::redirect(jar, Flash::success("Message envoyé avec succès!"), CONTACT_PATH).into_response()
}
