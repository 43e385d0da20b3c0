//! # Gallery Server Library
//!
//! Web front of the gallery: the public catalog and the admin back office.
//!
//! ## Modules
//!
//! - `app`: Application state and router builder
//! - `config`: Configuration management
//! - `error`: Error handling and HTTP response mapping
//! - `flash`: One-shot messages carried across redirects
//! - `forms`: Form input and validation
//! - `middleware`: Admin guard and security headers
//! - `routes`: Route handlers
//! - `session`: Admin session cookies
//! - `views`: HTML rendering

pub mod app;
pub mod config;
pub mod error;
pub mod flash;
pub mod forms;
pub mod middleware;
pub mod routes;
pub mod session;
pub mod views;
