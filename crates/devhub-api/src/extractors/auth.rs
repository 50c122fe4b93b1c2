//! Authentication extractor
//!
//! Resolves the caller's session token, taken from the `devhub_session`
//! cookie or an `Authorization: Bearer` header, to a user id.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    extract::CookieJar,
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use devhub_common::SESSION_COOKIE_NAME;
use devhub_core::Snowflake;
use devhub_service::AuthService;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated user resolved from a live session
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Snowflake,
    /// The session token the request presented
    pub token: String,
}

/// Session token from the cookie, falling back to the Bearer header
pub async fn session_token<S>(parts: &mut Parts, state: &S) -> Option<String>
where
    S: Send + Sync,
{
    let jar = CookieJar::from_headers(&parts.headers);
    if let Some(cookie) = jar.get(SESSION_COOKIE_NAME) {
        if !cookie.value().is_empty() {
            return Some(cookie.value().to_string());
        }
    }

    TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
        .await
        .ok()
        .map(|TypedHeader(Authorization(bearer))| bearer.token().to_string())
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = session_token(parts, state)
            .await
            .ok_or(ApiError::MissingAuth)?;

        let app_state = AppState::from_ref(state);
        let user_id = AuthService::new(app_state.service_context())
            .authenticate(&token)
            .await?;

        Ok(Self { user_id, token })
    }
}
