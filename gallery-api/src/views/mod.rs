/// HTML rendering with `maud`
///
/// Pages are plain functions returning [`maud::Markup`]; every interpolated
/// value is escaped by the macro.
///
/// - [`layout`]: Document shell, navigation and flash banner
/// - [`public`]: Home, gallery, artwork detail and contact pages
/// - [`admin`]: Login, dashboard, artwork listing and artwork form
/// - [`errors`]: Not-found and error pages

pub mod admin;
pub mod errors;
pub mod layout;
pub mod public;

mod components;
