/// Server-held admin sessions
///
/// A session row is the authoritative "logged in" flag. The browser only
/// holds the random token (inside a signed cookie); the table stores its
/// SHA-256 hash, so a leaked database does not yield usable cookies.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE admin_sessions (
///     token_hash TEXT PRIMARY KEY,
///     username TEXT NOT NULL REFERENCES admin_users (username) ON DELETE CASCADE,
///     created_at TEXT NOT NULL,
///     expires_at TEXT NOT NULL
/// );
/// ```

use crate::auth::session_token::{generate_session_token, hash_session_token};
use chrono::{DateTime, Duration, Utc};
use sqlx::SqlitePool;
use tracing::debug;

/// An authenticated admin session
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AdminSession {
    /// SHA-256 hex of the session token
    pub token_hash: String,

    /// Admin the session belongs to
    pub username: String,

    pub created_at: DateTime<Utc>,

    /// After this instant the session is treated as absent
    pub expires_at: DateTime<Utc>,
}

impl AdminSession {
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }

    /// Opens a new session for `username`
    ///
    /// # Returns
    ///
    /// The stored session and the plaintext token. The token is only
    /// available here; it must be handed to the client immediately.
    pub async fn create(
        pool: &SqlitePool,
        username: &str,
        ttl: Duration,
    ) -> Result<(Self, String), sqlx::Error> {
        let (token, token_hash) = generate_session_token();
        let now = Utc::now();

        let session = sqlx::query_as::<_, AdminSession>(
            r#"
            INSERT INTO admin_sessions (token_hash, username, created_at, expires_at)
            VALUES (?, ?, ?, ?)
            RETURNING token_hash, username, created_at, expires_at
            "#,
        )
        .bind(token_hash)
        .bind(username)
        .bind(now)
        .bind(now + ttl)
        .fetch_one(pool)
        .await?;

        debug!(username = %session.username, expires_at = %session.expires_at, "Admin session opened");
        Ok((session, token))
    }

    /// Resolves a token to its session, if it exists and has not expired
    ///
    /// An expired session is deleted on the way out.
    pub async fn find_active(pool: &SqlitePool, token: &str) -> Result<Option<Self>, sqlx::Error> {
        let token_hash = hash_session_token(token);

        let session = sqlx::query_as::<_, AdminSession>(
            r#"
            SELECT token_hash, username, created_at, expires_at
            FROM admin_sessions
            WHERE token_hash = ?
            "#,
        )
        .bind(&token_hash)
        .fetch_optional(pool)
        .await?;

        match session {
            Some(session) if session.is_expired() => {
                debug!(username = %session.username, "Admin session expired");
                sqlx::query("DELETE FROM admin_sessions WHERE token_hash = ?")
                    .bind(&token_hash)
                    .execute(pool)
                    .await?;
                Ok(None)
            }
            other => Ok(other),
        }
    }

    /// Ends the session identified by `token`
    ///
    /// # Returns
    ///
    /// True if a session was removed
    pub async fn delete(pool: &SqlitePool, token: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM admin_sessions WHERE token_hash = ?")
            .bind(hash_session_token(token))
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Removes every expired session, returning how many were removed
    pub async fn purge_expired(pool: &SqlitePool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM admin_sessions WHERE expires_at <= ?")
            .bind(Utc::now())
            .execute(pool)
            .await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_expired() {
        let now = Utc::now();
        let mut session = AdminSession {
            token_hash: "hash".to_string(),
            username: "atelier".to_string(),
            created_at: now,
            expires_at: now + Duration::hours(1),
        };
        assert!(!session.is_expired());

        session.expires_at = now - Duration::seconds(1);
        assert!(session.is_expired());
    }
}
