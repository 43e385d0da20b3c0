//! Common test utilities for integration tests
//!
//! This module provides shared infrastructure for integration tests:
//! - A fresh in-memory database per test, migrated
//! - The full router built over it
//! - Request helpers (forms, multipart uploads, cookies)
//! - Admin login

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, Response, StatusCode},
    Router,
};
use gallery_api::{
    app::{build_router, AppState},
    config::{Config, DatabaseSettings, ServerConfig, SessionConfig, DEFAULT_MAX_UPLOAD_BYTES},
    session::SESSION_COOKIE,
};
use gallery_shared::{
    auth::password::hash_password,
    db::{
        migrations::run_migrations,
        pool::{create_pool, DatabaseConfig},
    },
    models::{
        admin_user::{AdminUser, CreateAdminUser},
        artwork::{Artwork, CreateArtwork, Dimensions},
    },
};
use sqlx::SqlitePool;
use tower::ServiceExt;

pub const ADMIN_USERNAME: &str = "atelier";
pub const ADMIN_PASSWORD: &str = "correct horse battery staple";

const BOUNDARY: &str = "----gallery-test-boundary";

/// Test context: database plus the router serving it
pub struct TestContext {
    pub db: SqlitePool,
    pub app: Router,
}

impl TestContext {
    /// Creates a context with the default upload limit
    pub async fn new() -> Self {
        Self::with_upload_limit(DEFAULT_MAX_UPLOAD_BYTES).await
    }

    /// Creates a context whose request bodies are capped at `limit` bytes
    pub async fn with_upload_limit(limit: usize) -> Self {
        let db = create_pool(DatabaseConfig::in_memory())
            .await
            .expect("in-memory pool");
        run_migrations(&db).await.expect("migrations");

        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                production: false,
                max_upload_bytes: limit,
            },
            database: DatabaseSettings {
                url: "sqlite::memory:".to_string(),
                max_connections: 1,
            },
            session: SessionConfig {
                secret: "integration-test-secret-at-least-32-bytes".to_string(),
                ttl_hours: 12,
            },
            admin: None,
        };

        let app = build_router(AppState::new(db.clone(), config));
        Self { db, app }
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.app.clone().oneshot(request).await.expect("router is infallible")
    }

    pub async fn get(&self, uri: &str, cookie: Option<&str>) -> Response<Body> {
        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        self.send(builder.body(Body::empty()).unwrap()).await
    }

    /// POSTs a urlencoded form body
    pub async fn post_form(&self, uri: &str, body: &str, cookie: Option<&str>) -> Response<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        self.send(builder.body(Body::from(body.to_string())).unwrap())
            .await
    }

    /// POSTs a multipart form with text fields and an optional file part
    /// named `photo`
    pub async fn post_multipart(
        &self,
        uri: &str,
        fields: &[(&str, &str)],
        photo: Option<(&str, &[u8])>,
        cookie: Option<&str>,
    ) -> Response<Body> {
        let body = multipart_body(fields, photo);
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .header(header::CONTENT_LENGTH, body.len());
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        self.send(builder.body(Body::from(body)).unwrap()).await
    }

    /// Provisions the admin account
    pub async fn create_admin(&self) -> AdminUser {
        AdminUser::create(
            &self.db,
            CreateAdminUser {
                username: ADMIN_USERNAME.to_string(),
                password_hash: hash_password(ADMIN_PASSWORD).expect("hash"),
            },
        )
        .await
        .expect("admin user")
    }

    /// Provisions the admin account and logs in, returning the `Cookie`
    /// header value carrying the session
    pub async fn login(&self) -> String {
        self.create_admin().await;

        let body = format!(
            "username={}&password={}",
            ADMIN_USERNAME,
            ADMIN_PASSWORD.replace(' ', "+")
        );
        let response = self.post_form("/admin/login", &body, None).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER, "login should redirect");

        cookie_pair(&response, SESSION_COOKIE).expect("session cookie set")
    }

    /// Inserts an artwork directly through the model
    pub async fn insert_artwork(&self, title: &str) -> Artwork {
        Artwork::create(&self.db, sample_artwork(title))
            .await
            .expect("artwork insert")
    }
}

pub fn sample_artwork(title: &str) -> CreateArtwork {
    CreateArtwork {
        inventory_count: 1,
        reproduced_count: 0,
        title: title.to_string(),
        dimensions: Dimensions {
            width: 60,
            height: 40,
        },
        technique: "Huile sur toile".to_string(),
        themes: None,
        price: 1200.0,
        location: None,
        photo: None,
    }
}

/// A valid artwork form, as text fields
pub fn artwork_fields(title: &str) -> Vec<(&'static str, String)> {
    vec![
        ("inventory_count", "2".to_string()),
        ("reproduced_count", "1".to_string()),
        ("title", title.to_string()),
        ("width", "60".to_string()),
        ("height", "40".to_string()),
        ("technique", "Aquarelle".to_string()),
        ("themes", "Mer".to_string()),
        ("price", "350.5".to_string()),
        ("location", "Atelier".to_string()),
    ]
}

/// Borrows owned fields for [`TestContext::post_multipart`]
pub fn as_pairs<'a>(fields: &'a [(&'static str, String)]) -> Vec<(&'a str, &'a str)> {
    fields.iter().map(|(k, v)| (*k, v.as_str())).collect()
}

pub fn multipart_body(fields: &[(&str, &str)], photo: Option<(&str, &[u8])>) -> Vec<u8> {
    let mut body = Vec::new();

    for (name, value) in fields {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name).as_bytes(),
        );
        body.extend_from_slice(value.as_bytes());
        body.extend_from_slice(b"\r\n");
    }

    if let Some((filename, bytes)) = photo {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"photo\"; filename=\"{}\"\r\n",
                filename
            )
            .as_bytes(),
        );
        body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body")
        .to_vec()
}

pub async fn body_string(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).expect("utf-8 body")
}

/// `name=value` of the cookie `name` set by `response`
pub fn cookie_pair(response: &Response<Body>, name: &str) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(|v| v.split(';').next())
        .find(|pair| pair.starts_with(&format!("{}=", name)))
        .map(str::to_string)
}

pub fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

/// Follows a redirect carrying its flash cookie, returning the page body
pub async fn follow_with_flash(
    ctx: &TestContext,
    response: &Response<Body>,
    session: Option<&str>,
) -> String {
    let mut cookies: Vec<String> = session.map(str::to_string).into_iter().collect();
    cookies.extend(cookie_pair(response, gallery_api::flash::FLASH_COOKIE));

    let page = ctx.get(location(response), Some(&cookies.join("; "))).await;
    assert_eq!(page.status(), StatusCode::OK);
    body_string(page).await
}
