//! Authentication handlers
//!
//! Register, login, and logout. A successful register or login sets the
//! session cookie and also returns the token for Bearer clients.

use axum::extract::State;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use devhub_common::SESSION_COOKIE_NAME;
use devhub_service::dto::{AuthResponse, LoginRequest, RegisterRequest};
use devhub_service::AuthService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResponse, ApiResult, Created};
use crate::state::AppState;

fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build()
}

/// Register a new user
///
/// POST /auth/register
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<(CookieJar, Created<ApiResponse<AuthResponse>>)> {
    let service = AuthService::new(state.service_context());
    let response = service.register(request).await?;

    let cookie = session_cookie(response.token.clone(), state.config().session.cookie_secure);
    Ok((
        jar.add(cookie),
        Created(ApiResponse::ok("User registered successfully", response)),
    ))
}

/// Login with email and password
///
/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<(CookieJar, ApiResponse<AuthResponse>)> {
    let service = AuthService::new(state.service_context());
    let response = service.login(request).await?;

    let cookie = session_cookie(response.token.clone(), state.config().session.cookie_secure);
    Ok((jar.add(cookie), ApiResponse::ok("Logged in", response)))
}

/// Logout and revoke the current session
///
/// POST /auth/logout
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
    jar: CookieJar,
) -> ApiResult<(CookieJar, ApiResponse<()>)> {
    let service = AuthService::new(state.service_context());
    service.logout(&auth.token).await?;

    let jar = jar.remove(Cookie::build(SESSION_COOKIE_NAME).path("/"));
    Ok((jar, ApiResponse::message("Logged out")))
}
