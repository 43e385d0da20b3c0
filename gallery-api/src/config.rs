/// Configuration management for the gallery server
///
/// This module loads configuration from environment variables (and a `.env`
/// file when present) into a type-safe configuration struct.
///
/// # Environment Variables
///
/// - `GALLERY_HOST`: Host to bind to (default: 0.0.0.0)
/// - `GALLERY_PORT`: Port to bind to (default: 8080)
/// - `GALLERY_PRODUCTION`: Enables HSTS and Secure cookies (default: false)
/// - `MAX_UPLOAD_BYTES`: Request body ceiling (default: 16 MiB)
/// - `DATABASE_URL`: SQLite URL (default: sqlite://galerie.db?mode=rwc)
/// - `DATABASE_MAX_CONNECTIONS`: Pool size (default: 5)
/// - `SESSION_SECRET`: Key material for signed cookies (required, ≥ 32 chars)
/// - `SESSION_TTL_HOURS`: Admin session lifetime (default: 12)
/// - `GALLERY_ADMIN_USERNAME` / `GALLERY_ADMIN_PASSWORD`: Admin account to
///   provision at startup (optional, both or neither)
/// - `RUST_LOG`: Log level
///
/// # Example
///
/// ```no_run
/// use gallery_api::config::Config;
///
/// # fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// println!("Server will listen on {}", config.bind_address());
/// # Ok(())
/// # }
/// ```

use std::env;
use std::fmt;

/// Default request body ceiling: 16 MiB
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Complete application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseSettings,

    /// Admin session configuration
    pub session: SessionConfig,

    /// Admin account provisioned at startup, if configured
    pub admin: Option<AdminBootstrap>,
}

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,

    /// Production mode: HSTS header and `Secure` cookies
    pub production: bool,

    /// Largest accepted request body, in bytes
    pub max_upload_bytes: usize,
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    /// SQLite connection URL
    pub url: String,

    /// Maximum number of connections in pool
    pub max_connections: u32,
}

/// Admin session configuration
#[derive(Clone)]
pub struct SessionConfig {
    /// Secret the cookie signing key is derived from
    ///
    /// Generate with: `openssl rand -hex 32`
    pub secret: String,

    /// How long an admin stays logged in
    pub ttl_hours: i64,
}

impl fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionConfig")
            .field("secret", &"<redacted>")
            .field("ttl_hours", &self.ttl_hours)
            .finish()
    }
}

/// Credentials of the admin account created (or reset) at startup
#[derive(Clone)]
pub struct AdminBootstrap {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for AdminBootstrap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminBootstrap")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Config {
    /// Loads configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `SESSION_SECRET` is missing or shorter than 32 characters
    /// - A numeric variable does not parse
    /// - Only one of the admin bootstrap variables is set
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if present (for development)
        dotenvy::dotenv().ok();

        let host = env::var("GALLERY_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("GALLERY_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()?;

        let production = env::var("GALLERY_PRODUCTION")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        let max_upload_bytes = match env::var("MAX_UPLOAD_BYTES") {
            Ok(v) => v.parse::<usize>()?,
            Err(_) => DEFAULT_MAX_UPLOAD_BYTES,
        };

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://galerie.db?mode=rwc".to_string());

        let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "5".to_string())
            .parse::<u32>()?;

        let secret = env::var("SESSION_SECRET")
            .map_err(|_| anyhow::anyhow!("SESSION_SECRET environment variable is required"))?;

        if secret.len() < 32 {
            anyhow::bail!("SESSION_SECRET must be at least 32 characters long");
        }

        let ttl_hours = env::var("SESSION_TTL_HOURS")
            .unwrap_or_else(|_| "12".to_string())
            .parse::<i64>()?;

        if ttl_hours <= 0 {
            anyhow::bail!("SESSION_TTL_HOURS must be positive");
        }

        let admin = match (
            env::var("GALLERY_ADMIN_USERNAME").ok(),
            env::var("GALLERY_ADMIN_PASSWORD").ok(),
        ) {
            (Some(username), Some(password)) => Some(AdminBootstrap { username, password }),
            (None, None) => None,
            _ => anyhow::bail!(
                "GALLERY_ADMIN_USERNAME and GALLERY_ADMIN_PASSWORD must be set together"
            ),
        };

        Ok(Self {
            server: ServerConfig {
                host,
                port,
                production,
                max_upload_bytes,
            },
            database: DatabaseSettings {
                url: database_url,
                max_connections,
            },
            session: SessionConfig { secret, ttl_hours },
            admin,
        })
    }

    /// Returns the server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
                production: false,
                max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            },
            database: DatabaseSettings {
                url: "sqlite::memory:".to_string(),
                max_connections: 1,
            },
            session: SessionConfig {
                secret: "test-secret-key-at-least-32-bytes-long".to_string(),
                ttl_hours: 12,
            },
            admin: Some(AdminBootstrap {
                username: "atelier".to_string(),
                password: "hunter2-but-longer".to_string(),
            }),
        }
    }

    #[test]
    fn test_bind_address() {
        assert_eq!(config().bind_address(), "127.0.0.1:8080");
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let printed = format!("{:?}", config());
        assert!(printed.contains("atelier"));
        assert!(!printed.contains("test-secret-key"));
        assert!(!printed.contains("hunter2"));
    }

    #[test]
    fn test_default_upload_limit_is_16_mib() {
        assert_eq!(DEFAULT_MAX_UPLOAD_BYTES, 16_777_216);
    }
}
