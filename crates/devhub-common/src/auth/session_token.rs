//! Opaque session tokens
//!
//! A token is 32 bytes from the OS RNG, base64url-encoded without padding.
//! It carries no data; the session store maps it to a user.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use rand::{rngs::OsRng, RngCore};

/// Name of the cookie that carries the session token
pub const SESSION_COOKIE_NAME: &str = "devhub_session";

const TOKEN_BYTES: usize = 32;

/// Encoded length of a token
pub const SESSION_TOKEN_LENGTH: usize = 43;

/// Generate a new session token
#[must_use]
pub fn generate_session_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    OsRng.fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Cheap shape check before a store lookup
#[must_use]
pub fn is_well_formed_token(token: &str) -> bool {
    token.len() == SESSION_TOKEN_LENGTH
        && token
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}
