/// Integration tests for PDF downloads and the upload ceiling

mod common;

use axum::http::{header, StatusCode};
use common::{artwork_fields, as_pairs, body_bytes, TestContext};
use printpdf::lopdf::{Document, Object};

/// Operands of every `Tj` in the document, in drawing order
fn drawn_strings(pdf: &[u8]) -> Vec<Vec<u8>> {
    let doc = Document::load_mem(pdf).expect("well-formed PDF");
    doc.get_pages()
        .into_values()
        .flat_map(|page_id| {
            doc.get_and_decode_page_content(page_id)
                .expect("decodable page content")
                .operations
        })
        .filter(|op| op.operator == "Tj")
        .filter_map(|op| match op.operands.first() {
            Some(Object::String(bytes, _)) => Some(bytes.clone()),
            _ => None,
        })
        .collect()
}

#[tokio::test]
async fn test_artwork_sheet_download() {
    let ctx = TestContext::new().await;
    let session = ctx.login().await;
    let artwork = ctx.insert_artwork("Forêt d'hiver").await;

    let response = ctx
        .get(&format!("/admin/tableau/{}/imprimer", artwork.id), Some(&session))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/pdf"
    );

    let disposition = response
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.starts_with("attachment;"));
    assert!(disposition.contains(&format!("tableau_{}_", artwork.id)));
    assert!(disposition.contains("filename*=UTF-8''"));

    assert!(body_bytes(response).await.starts_with(b"%PDF-"));
}

#[tokio::test]
async fn test_artwork_sheet_prints_accents_in_win_ansi() {
    let ctx = TestContext::new().await;
    let session = ctx.login().await;
    let artwork = ctx.insert_artwork("Forêt d'hiver").await;

    let response = ctx
        .get(&format!("/admin/tableau/{}/imprimer", artwork.id), Some(&session))
        .await;
    let drawn = drawn_strings(&body_bytes(response).await);

    // Windows-1252: œ = 0x9C, ê = 0xEA, è = 0xE8, é = 0xE9, € = 0x80
    for expected in [
        &b"Fiche d'\x9cuvre: For\xeat d'hiver"[..],
        &b"Th\xe8mes: Non sp\xe9cifi\xe9"[..],
        &b"Lieux: Non sp\xe9cifi\xe9"[..],
        &b"Prix: 1200.0\x80"[..],
    ] {
        assert!(
            drawn.iter().any(|s| s == expected),
            "missing {:?}",
            String::from_utf8_lossy(expected)
        );
    }
}

#[tokio::test]
async fn test_artwork_sheet_missing_is_not_found() {
    let ctx = TestContext::new().await;
    let session = ctx.login().await;

    let response = ctx.get("/admin/tableau/31337/imprimer", Some(&session)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_export_download() {
    let ctx = TestContext::new().await;
    let session = ctx.login().await;
    for i in 1..=45 {
        ctx.insert_artwork(&format!("Série {}", i)).await;
    }

    let response = ctx.get("/admin/export/liste", Some(&session)).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_DISPOSITION).unwrap(),
        "attachment; filename=\"liste_oeuvres.pdf\"; filename*=UTF-8''liste_oeuvres.pdf"
    );
    assert!(body_bytes(response).await.starts_with(b"%PDF-"));
}

#[tokio::test]
async fn test_list_export_of_empty_catalog() {
    let ctx = TestContext::new().await;
    let session = ctx.login().await;

    let response = ctx.get("/admin/export/liste", Some(&session)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let drawn = drawn_strings(&body_bytes(response).await);

    // Title and the five column headers, nothing else
    assert_eq!(drawn.len(), 6);
    assert_eq!(drawn[0], b"Liste des \x9cuvres".to_vec());
    let headers: Vec<&[u8]> = drawn[1..].iter().map(Vec::as_slice).collect();
    assert_eq!(
        headers,
        vec![&b"ID"[..], &b"Titre"[..], &b"Format"[..], &b"Technique"[..], &b"Prix"[..]]
    );
}

#[tokio::test]
async fn test_oversized_upload_is_rejected() {
    let ctx = TestContext::with_upload_limit(64 * 1024).await;
    let session = ctx.login().await;

    let photo = vec![0u8; 128 * 1024];
    let fields = artwork_fields("Trop lourd");
    let response = ctx
        .post_multipart(
            "/admin/tableau/nouveau",
            &as_pairs(&fields),
            Some(("lourd.png", &photo[..])),
            Some(&session),
        )
        .await;

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(
        gallery_shared::models::artwork::Artwork::count(&ctx.db).await.unwrap(),
        0
    );
}
