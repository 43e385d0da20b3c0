/// Admin session token generation and hashing
///
/// # Token Format
///
/// - **Format**: 64 lowercase hex characters (32 random bytes)
/// - **Storage**: SHA-256 hash of the token, hex-encoded
/// - **Transport**: inside a signed cookie, never in URLs
///
/// # Example
///
/// ```
/// use gallery_shared::auth::session_token::{generate_session_token, hash_session_token};
///
/// let (token, hash) = generate_session_token();
/// assert_eq!(hash, hash_session_token(&token));
/// ```

use rand::RngCore;
use sha2::{Digest, Sha256};

/// Number of random bytes in a session token
const TOKEN_BYTES: usize = 32;

/// Generates a new session token
///
/// # Returns
///
/// `(token, hash)`: the token goes to the client, the hash to the database
pub fn generate_session_token() -> (String, String) {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);

    let token = hex::encode(bytes);
    let hash = hash_session_token(&token);

    (token, hash)
}

/// Hashes a session token using SHA-256
///
/// # Returns
///
/// Hex-encoded SHA-256 hash (64 characters)
pub fn hash_session_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}

/// Checks that a token has the shape produced by [`generate_session_token`]
///
/// Lets the session layer skip a database round-trip for garbage cookies.
pub fn is_well_formed(token: &str) -> bool {
    token.len() == TOKEN_BYTES * 2 && token.chars().all(|c| c.is_ascii_hexdigit())
}
