//! User service
//!
//! Handles user profile operations.

use devhub_core::entities::User;
use devhub_core::{DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::{CurrentUserResponse, PublicUserResponse, UpdateProfileRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get user by ID (public profile, including reputation)
    #[instrument(skip(self))]
    pub async fn get_user(&self, user_id: Snowflake) -> ServiceResult<PublicUserResponse> {
        let user = self.get_user_entity(user_id).await?;
        Ok(PublicUserResponse::from(&user))
    }

    /// Get current authenticated user (full profile)
    #[instrument(skip(self))]
    pub async fn get_current_user(&self, user_id: Snowflake) -> ServiceResult<CurrentUserResponse> {
        let user = self.get_user_entity(user_id).await?;
        Ok(CurrentUserResponse::from(&user))
    }

    /// Get user entity by ID
    #[instrument(skip(self))]
    pub async fn get_user_entity(&self, user_id: Snowflake) -> ServiceResult<User> {
        Ok(self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?)
    }

    /// Update profile fields of the current user
    #[instrument(skip(self, request))]
    pub async fn update_profile(
        &self,
        user_id: Snowflake,
        request: UpdateProfileRequest,
    ) -> ServiceResult<CurrentUserResponse> {
        let mut user = self.get_user_entity(user_id).await?;
        let mut changed = false;

        if let Some(bio) = request.bio {
            user.set_bio(Some(bio));
            changed = true;
        }

        if let Some(avatar_url) = request.avatar_url {
            user.set_avatar_url(Some(avatar_url).filter(|url| !url.is_empty()));
            changed = true;
        }

        if let Some(interests) = request.interests {
            user.set_interests(interests);
            changed = true;
        }

        if let Some(links) = request.links {
            user.set_links(links);
            changed = true;
        }

        if changed {
            self.ctx.user_repo().update_profile(&user).await?;
            info!(user_id = %user_id, "User profile updated");
        }

        Ok(CurrentUserResponse::from(&user))
    }
}
