/// Integration tests for the public site
///
/// - Home and gallery listings (ordering, pagination)
/// - Artwork detail and not-found handling
/// - Contact form validation and confirmation
/// - Health check and security headers

mod common;

use axum::http::StatusCode;
use common::{body_string, follow_with_flash, location, TestContext};
use gallery_shared::models::artwork::Artwork;

#[tokio::test]
async fn test_home_shows_ten_most_recent() {
    let ctx = TestContext::new().await;
    for i in 1..=12 {
        ctx.insert_artwork(&format!("Tableau {:02}", i)).await;
    }

    let response = ctx.get("/", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;

    assert!(html.contains("Tableau 12"));
    assert!(html.contains("Tableau 03"));
    assert!(!html.contains("Tableau 02"));
    assert!(!html.contains("Tableau 01"));
    assert!(html.find("Tableau 12").unwrap() < html.find("Tableau 11").unwrap());
}

#[tokio::test]
async fn test_gallery_pagination() {
    let ctx = TestContext::new().await;
    for i in 1..=25 {
        ctx.insert_artwork(&format!("Œuvre n°{:02}", i)).await;
    }

    // Page 1: the 12 newest
    let html = body_string(ctx.get("/galerie", None).await).await;
    assert_eq!(html.matches("class=\"card\"").count(), 12);
    assert!(html.contains("Œuvre n°25"));
    assert!(html.contains("Œuvre n°14"));
    assert!(!html.contains("Œuvre n°13"));
    assert!(html.contains("Page 1 / 3"));

    // Page 3: the oldest one
    let html = body_string(ctx.get("/galerie?page=3", None).await).await;
    assert_eq!(html.matches("class=\"card\"").count(), 1);
    assert!(html.contains("Œuvre n°01"));

    // Page 4: empty but valid
    let response = ctx.get("/galerie?page=4", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert_eq!(html.matches("class=\"card\"").count(), 0);
    assert!(html.contains("Aucune œuvre sur cette page."));

    // Nonsense page numbers fall back to page 1
    let html = body_string(ctx.get("/galerie?page=zero", None).await).await;
    assert!(html.contains("Œuvre n°25"));
    let html = body_string(ctx.get("/galerie?page=-2", None).await).await;
    assert!(html.contains("Page 1 / 3"));
}

#[tokio::test]
async fn test_new_artwork_is_first_in_listing() {
    let ctx = TestContext::new().await;
    for i in 1..=3 {
        ctx.insert_artwork(&format!("Ancien {}", i)).await;
    }
    let newest = ctx.insert_artwork("Le plus récent").await;

    let page = Artwork::list(&ctx.db, 1, 12).await.unwrap();
    assert_eq!(page.items[0].id, newest.id);

    let html = body_string(ctx.get("/galerie", None).await).await;
    assert!(html.find("Le plus récent").unwrap() < html.find("Ancien 3").unwrap());
}

#[tokio::test]
async fn test_artwork_detail() {
    let ctx = TestContext::new().await;
    let artwork = ctx.insert_artwork("La Vague").await;

    let response = ctx.get(&format!("/tableau/{}", artwork.id), None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;

    assert!(html.contains("La Vague"));
    assert!(html.contains("60x40 cm"));
    assert!(html.contains("1200.0€"));
}

#[tokio::test]
async fn test_artwork_detail_not_found() {
    let ctx = TestContext::new().await;

    let response = ctx.get("/tableau/999", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_string(response).await.contains("Page introuvable"));
}

#[tokio::test]
async fn test_artwork_detail_with_non_numeric_id_is_not_found() {
    let ctx = TestContext::new().await;

    for uri in ["/tableau/abc", "/tableau/99999999999999999999", "/tableau/-1"] {
        let response = ctx.get(uri, None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{}", uri);
        assert!(body_string(response).await.contains("Page introuvable"), "{}", uri);
    }
}

#[tokio::test]
async fn test_contact_rejects_missing_fields() {
    let ctx = TestContext::new().await;

    let response = ctx
        .post_form("/contacter", "name=Claire&email=&subject=Visite&message=", None)
        .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let html = body_string(response).await;
    assert!(html.contains("value=\"Claire\""));
    assert_eq!(html.matches("Ce champ est obligatoire.").count(), 2);
}

#[tokio::test]
async fn test_contact_confirms_submission() {
    let ctx = TestContext::new().await;

    let response = ctx
        .post_form(
            "/contacter",
            "name=Claire&email=claire%40example.com&subject=Visite&message=Bonjour",
            None,
        )
        .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/contacter");

    let html = follow_with_flash(&ctx, &response, None).await;
    assert!(html.contains("Message envoyé avec succès!"));
}

#[tokio::test]
async fn test_health_check() {
    let ctx = TestContext::new().await;

    let response = ctx.get("/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "connected");
}

#[tokio::test]
async fn test_security_headers_on_pages() {
    let ctx = TestContext::new().await;

    let response = ctx.get("/", None).await;
    let headers = response.headers();

    assert_eq!(headers.get("x-frame-options").unwrap(), "DENY");
    assert_eq!(headers.get("x-content-type-options").unwrap(), "nosniff");
    assert!(headers.get("content-security-policy").is_some());
    assert!(headers.get("strict-transport-security").is_none());
}
