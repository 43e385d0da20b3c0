/// Admin user model and database operations
///
/// Admin accounts gate the back office. They are provisioned out of band
/// (at startup from configuration) and only read by the login flow.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE admin_users (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     username TEXT NOT NULL UNIQUE,
///     password_hash TEXT NOT NULL
/// );
/// ```

use serde::Serialize;
use sqlx::SqlitePool;

/// Back-office account
///
/// Passwords are stored as Argon2id hashes, never in plaintext.
#[derive(Clone, Serialize, sqlx::FromRow)]
pub struct AdminUser {
    pub id: i64,

    /// Unique login name
    pub username: String,

    /// Argon2id PHC string
    #[serde(skip_serializing)]
    pub password_hash: String,
}

impl std::fmt::Debug for AdminUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminUser")
            .field("id", &self.id)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

/// Input for creating an admin account
#[derive(Clone)]
pub struct CreateAdminUser {
    pub username: String,

    /// Argon2id hash (NOT plaintext password!)
    pub password_hash: String,
}

impl AdminUser {
    /// Creates a new admin account
    ///
    /// # Errors
    ///
    /// Returns a database error with a unique constraint violation if the
    /// username is already taken
    pub async fn create(pool: &SqlitePool, data: CreateAdminUser) -> Result<Self, sqlx::Error> {
        let user = sqlx::query_as::<_, AdminUser>(
            r#"
            INSERT INTO admin_users (username, password_hash)
            VALUES (?, ?)
            RETURNING id, username, password_hash
            "#,
        )
        .bind(data.username)
        .bind(data.password_hash)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Creates the account, or replaces its password hash if it exists
    ///
    /// Used by the startup bootstrap so the configured credentials always
    /// win over whatever is stored.
    pub async fn upsert(pool: &SqlitePool, data: CreateAdminUser) -> Result<Self, sqlx::Error> {
        let user = sqlx::query_as::<_, AdminUser>(
            r#"
            INSERT INTO admin_users (username, password_hash)
            VALUES (?, ?)
            ON CONFLICT (username) DO UPDATE SET password_hash = excluded.password_hash
            RETURNING id, username, password_hash
            "#,
        )
        .bind(data.username)
        .bind(data.password_hash)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Finds an admin by username (case-sensitive)
    pub async fn find_by_username(
        pool: &SqlitePool,
        username: &str,
    ) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, AdminUser>(
            "SELECT id, username, password_hash FROM admin_users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_hides_password_hash() {
        let user = AdminUser {
            id: 1,
            username: "atelier".to_string(),
            password_hash: "$argon2id$v=19$secret".to_string(),
        };

        let printed = format!("{:?}", user);
        assert!(printed.contains("atelier"));
        assert!(!printed.contains("argon2id"));
    }
}
