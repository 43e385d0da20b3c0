/// Form input and validation
///
/// Each form keeps the raw submitted text so a rejected submission can be
/// redisplayed exactly as typed. Validation combines the `validator` derive
/// for declarative rules with explicit checks for the technique vocabulary
/// and the photo extension.
///
/// # Example
///
/// ```
/// use gallery_api::forms::ArtworkInput;
///
/// let input = ArtworkInput {
///     inventory_count: "1".into(),
///     reproduced_count: "0".into(),
///     title: "Les Iris".into(),
///     height: "40".into(),
///     width: "60".into(),
///     technique: "Huile sur toile".into(),
///     price: "1200".into(),
///     ..Default::default()
/// };
///
/// let artwork = input.validate(None).unwrap();
/// assert_eq!(artwork.dimensions.to_string(), "60x40");
/// ```

use crate::error::{field_errors, AppResult, FieldError};
use axum::extract::Multipart;
use base64ct::{Base64, Encoding};
use gallery_shared::models::artwork::{
    is_known_technique, Artwork, CreateArtwork, Dimensions, UpdateArtwork,
};
use serde::Deserialize;
use validator::Validate;

/// Accepted photo file extensions, compared case-insensitively
pub const PHOTO_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "gif"];

/// Field-level messages for a rejected form, at most one per field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(Vec<FieldError>);

impl FormErrors {
    /// Records `message` unless the field already has one
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        if self.get(field).is_none() {
            self.0.push(FieldError::new(field, message));
        }
    }

    pub fn extend(&mut self, errors: Vec<FieldError>) {
        for error in errors {
            self.add(&error.field, error.message);
        }
    }

    /// Message for `field`, if it was rejected
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<FieldError>> for FormErrors {
    fn from(errors: Vec<FieldError>) -> Self {
        let mut form = FormErrors::default();
        form.extend(errors);
        form
    }
}

/// An uploaded photo, read fully into memory
#[derive(Debug, Clone)]
pub struct PhotoUpload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Raw artwork form fields, as submitted
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArtworkInput {
    pub inventory_count: String,
    pub reproduced_count: String,
    pub title: String,
    pub height: String,
    pub width: String,
    pub technique: String,
    pub themes: String,
    pub price: String,
    pub location: String,
}

/// Parsed values checked by the derive rules
#[derive(Debug, Validate)]
struct ArtworkCandidate {
    #[validate(
        required(message = "Ce champ est obligatoire."),
        range(min = 1, message = "La quantité doit être au moins 1.")
    )]
    inventory_count: Option<i64>,

    #[validate(
        required(message = "Ce champ est obligatoire."),
        range(min = 0, message = "La quantité reproduite ne peut pas être négative.")
    )]
    reproduced_count: Option<i64>,

    #[validate(length(min = 1, message = "Ce champ est obligatoire."))]
    title: String,

    #[validate(
        required(message = "Ce champ est obligatoire."),
        range(min = 1, message = "La hauteur doit être un entier positif.")
    )]
    height: Option<i64>,

    #[validate(
        required(message = "Ce champ est obligatoire."),
        range(min = 1, message = "La largeur doit être un entier positif.")
    )]
    width: Option<i64>,

    #[validate(length(min = 1, message = "Veuillez choisir une technique."))]
    technique: String,

    #[validate(
        required(message = "Ce champ est obligatoire."),
        range(min = 0.0, message = "Le prix ne peut pas être négatif.")
    )]
    price: Option<f64>,
}

/// A fully validated artwork submission
#[derive(Debug, Clone)]
pub struct ValidArtwork {
    pub inventory_count: i64,
    pub reproduced_count: i64,
    pub title: String,
    pub dimensions: Dimensions,
    pub technique: String,
    pub themes: Option<String>,
    pub price: f64,
    pub location: Option<String>,

    /// Base64-encoded upload, if a new photo was given
    pub photo: Option<String>,
}

impl ValidArtwork {
    pub fn into_create(self) -> CreateArtwork {
        CreateArtwork {
            inventory_count: self.inventory_count,
            reproduced_count: self.reproduced_count,
            title: self.title,
            dimensions: self.dimensions,
            technique: self.technique,
            themes: self.themes,
            price: self.price,
            location: self.location,
            photo: self.photo,
        }
    }

    pub fn into_update(self) -> UpdateArtwork {
        UpdateArtwork {
            inventory_count: self.inventory_count,
            reproduced_count: self.reproduced_count,
            title: self.title,
            dimensions: self.dimensions,
            technique: self.technique,
            themes: self.themes,
            price: self.price,
            location: self.location,
            photo: self.photo,
        }
    }
}

impl ArtworkInput {
    /// Defaults of the empty creation form
    pub fn blank() -> Self {
        Self {
            inventory_count: "1".to_string(),
            reproduced_count: "0".to_string(),
            ..Default::default()
        }
    }

    /// Prefills the edit form from a stored artwork
    ///
    /// The dimensions string is split back into width and height; a
    /// malformed value leaves both fields empty for the admin to fill in.
    pub fn from_artwork(artwork: &Artwork) -> Self {
        let (width, height) = match artwork.parsed_dimensions() {
            Some(dims) => (dims.width.to_string(), dims.height.to_string()),
            None => {
                tracing::warn!(
                    artwork_id = artwork.id,
                    dimensions = %artwork.dimensions,
                    "Stored dimensions are malformed"
                );
                (String::new(), String::new())
            }
        };

        Self {
            inventory_count: artwork.inventory_count.to_string(),
            reproduced_count: artwork.reproduced_count.to_string(),
            title: artwork.title.clone(),
            height,
            width,
            technique: artwork.technique.clone(),
            themes: artwork.themes.clone().unwrap_or_default(),
            price: artwork.price.to_string(),
            location: artwork.location.clone().unwrap_or_default(),
        }
    }

    /// Reads the artwork form from a multipart body
    ///
    /// A file part with an empty filename or no content counts as "no
    /// photo". Unknown fields are ignored.
    ///
    /// # Errors
    ///
    /// Returns `AppError::PayloadTooLarge` when the body limit is hit and
    /// `AppError::BadRequest` for a malformed body.
    pub async fn from_multipart(
        mut multipart: Multipart,
    ) -> AppResult<(Self, Option<PhotoUpload>)> {
        let mut input = Self::default();
        let mut photo = None;

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();

            if name == "photo" {
                let filename = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await?;
                if !filename.is_empty() && !bytes.is_empty() {
                    photo = Some(PhotoUpload {
                        filename,
                        bytes: bytes.to_vec(),
                    });
                }
                continue;
            }

            let value = field.text().await?;
            match name.as_str() {
                "inventory_count" => input.inventory_count = value,
                "reproduced_count" => input.reproduced_count = value,
                "title" => input.title = value,
                "height" => input.height = value,
                "width" => input.width = value,
                "technique" => input.technique = value,
                "themes" => input.themes = value,
                "price" => input.price = value,
                "location" => input.location = value,
                _ => {}
            }
        }

        Ok((input, photo))
    }

    /// Validates the submission
    ///
    /// # Errors
    ///
    /// Returns every rejected field with its message; nothing is persisted
    /// by the caller in that case.
    pub fn validate(&self, photo: Option<&PhotoUpload>) -> Result<ValidArtwork, FormErrors> {
        let mut errors = FormErrors::default();

        let candidate = ArtworkCandidate {
            inventory_count: parse_integer(&mut errors, "inventory_count", &self.inventory_count),
            reproduced_count: parse_integer(
                &mut errors,
                "reproduced_count",
                &self.reproduced_count,
            ),
            title: self.title.trim().to_string(),
            height: parse_integer(&mut errors, "height", &self.height),
            width: parse_integer(&mut errors, "width", &self.width),
            technique: self.technique.trim().to_string(),
            price: parse_price(&mut errors, &self.price),
        };

        if let Err(e) = candidate.validate() {
            errors.extend(field_errors(&e));
        }

        if !candidate.technique.is_empty() && !is_known_technique(&candidate.technique) {
            errors.add("technique", "Technique inconnue.");
        }

        if let Some(photo) = photo {
            if !has_photo_extension(&photo.filename) {
                errors.add(
                    "photo",
                    "Seules les images (jpg, jpeg, png, gif) sont autorisées.",
                );
            }
        }

        let (
            Some(inventory_count),
            Some(reproduced_count),
            Some(height),
            Some(width),
            Some(price),
        ) = (
            candidate.inventory_count,
            candidate.reproduced_count,
            candidate.height,
            candidate.width,
            candidate.price,
        )
        else {
            return Err(errors);
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        let (Ok(width), Ok(height)) = (u32::try_from(width), u32::try_from(height)) else {
            errors.add("width", "Dimensions trop grandes.");
            return Err(errors);
        };

        Ok(ValidArtwork {
            inventory_count,
            reproduced_count,
            title: candidate.title,
            dimensions: Dimensions { width, height },
            technique: candidate.technique,
            themes: optional(&self.themes),
            price,
            location: optional(&self.location),
            photo: photo.map(|p| Base64::encode_string(&p.bytes)),
        })
    }
}

/// True if `filename` ends in an accepted image extension
pub fn has_photo_extension(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| {
            PHOTO_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
        .unwrap_or(false)
}

/// Parses an integer field; empty input is left to the `required` rule
fn parse_integer(errors: &mut FormErrors, field: &str, raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    match raw.parse::<i64>() {
        Ok(value) => Some(value),
        Err(_) => {
            errors.add(field, "Veuillez saisir un nombre entier.");
            None
        }
    }
}

/// Parses the price, accepting a decimal comma
fn parse_price(errors: &mut FormErrors, raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    match raw.replace(',', ".").parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => {
            errors.add("price", "Veuillez saisir un nombre.");
            None
        }
    }
}

fn optional(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Admin login form
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct LoginForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "Ce champ est obligatoire."))]
    pub username: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Ce champ est obligatoire."))]
    pub password: String,
}

impl LoginForm {
    /// Trims the username; the password is taken as typed
    pub fn normalized(self) -> Self {
        Self {
            username: self.username.trim().to_string(),
            password: self.password,
        }
    }

    pub fn check(&self) -> Result<(), FormErrors> {
        self.validate().map_err(|e| FormErrors::from(field_errors(&e)))
    }
}

/// Public contact form
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ContactForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "Ce champ est obligatoire."))]
    pub name: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Ce champ est obligatoire."))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Ce champ est obligatoire."))]
    pub subject: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Ce champ est obligatoire."))]
    pub message: String,
}

impl ContactForm {
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }

    pub fn check(&self) -> Result<(), FormErrors> {
        self.validate().map_err(|e| FormErrors::from(field_errors(&e)))
    }
}
