//! Authentication service
//!
//! Handles user registration, login, logout, and session lookup.

use devhub_common::auth::{hash_password, validate_password_strength, verify_password};
use devhub_common::AppError;
use devhub_core::entities::User;
use devhub_core::{DomainError, Snowflake};
use tracing::{info, instrument, warn};

use crate::dto::{AuthResponse, CurrentUserResponse, LoginRequest, RegisterRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user and open a session for them
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        validate_password_strength(&request.password)?;

        let email = request.email.trim().to_ascii_lowercase();
        let username = request.username.trim().to_string();

        if self.ctx.user_repo().email_exists(&email).await? {
            return Err(DomainError::EmailAlreadyExists.into());
        }
        if self.ctx.user_repo().username_exists(&username).await? {
            return Err(DomainError::UsernameAlreadyExists.into());
        }

        let password_hash = hash_password(&request.password)?;

        let user = User::new(self.ctx.generate_id(), username, email);
        self.ctx
            .user_repo()
            .create(&user, Some(&password_hash))
            .await?;

        info!(user_id = %user.id, "User registered");

        self.open_session(&user).await
    }

    /// Login with email and password
    #[instrument(skip(self, request))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_email(request.email.trim())
            .await?
            .ok_or_else(|| {
                warn!("Login failed: unknown email");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        // Accounts created through an external provider have no password
        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        if !verify_password(&request.password, &password_hash)? {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        info!(user_id = %user.id, "User logged in");

        self.open_session(&user).await
    }

    /// End a session; logging out twice is not an error
    #[instrument(skip(self, token))]
    pub async fn logout(&self, token: &str) -> ServiceResult<()> {
        if self.ctx.session_store().revoke(token).await? {
            info!("User logged out");
        }
        Ok(())
    }

    /// Resolve a session token to the user it belongs to
    #[instrument(skip(self, token))]
    pub async fn authenticate(&self, token: &str) -> ServiceResult<Snowflake> {
        let session = self.ctx.session_store().get(token).await?.ok_or_else(|| {
            warn!("Rejected unknown or expired session");
            ServiceError::App(AppError::InvalidSession)
        })?;

        Ok(session.user_id)
    }

    async fn open_session(&self, user: &User) -> ServiceResult<AuthResponse> {
        let token = self.ctx.session_store().create(user.id).await?;

        Ok(AuthResponse::new(
            token,
            self.ctx.session_store().ttl_seconds(),
            CurrentUserResponse::from(user),
        ))
    }
}
