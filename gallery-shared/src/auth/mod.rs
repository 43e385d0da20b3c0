/// Authentication primitives
///
/// # Modules
///
/// - [`password`]: Argon2id password hashing and verification
/// - [`session_token`]: Random admin session tokens and their SHA-256 hashes
///
/// # Example
///
/// ```
/// use gallery_shared::auth::password::{hash_password, verify_password};
/// use gallery_shared::auth::session_token::generate_session_token;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let hash = hash_password("admin_password")?;
/// assert!(verify_password("admin_password", &hash)?);
///
/// let (token, token_hash) = generate_session_token();
/// # Ok(())
/// # }
/// ```

pub mod password;
pub mod session_token;
