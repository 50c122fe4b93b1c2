//! Authentication utilities

mod password;
mod session_token;

pub use password::{hash_password, validate_password_strength, verify_password};
pub use session_token::{
    generate_session_token, is_well_formed_token, SESSION_COOKIE_NAME, SESSION_TOKEN_LENGTH,
};
