//! User entity <-> model mapper

use devhub_core::entities::User;
use devhub_core::value_objects::Snowflake;

use crate::models::UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: Snowflake::new(model.id),
            username: model.username,
            email: model.email,
            avatar_url: model.avatar_url,
            bio: model.bio,
            interests: model.interests,
            links: model.links,
            reputation_points: model.reputation_points,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
