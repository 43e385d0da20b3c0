//! # Galerie Shared Library
//!
//! This crate contains the persistence layer, authentication primitives and
//! document export used by the Galerie web server.
//!
//! ## Module Organization
//!
//! - `db`: Connection pool and embedded migrations
//! - `models`: Artwork, admin user and admin session records, pagination
//! - `auth`: Password hashing and session tokens
//! - `export`: PDF layout and rendering of artwork sheets and lists

pub mod auth;
pub mod db;
pub mod export;
pub mod models;

/// Current version of the Galerie shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
