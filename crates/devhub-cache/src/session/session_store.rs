//! Login sessions in Redis.
//!
//! A session is an opaque token mapped to the user who logged in. The key
//! expires with the session, so a missing key means logged out or expired.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use devhub_common::{generate_session_token, is_well_formed_token};
use devhub_core::Snowflake;

use crate::pool::{RedisPool, RedisResult};

/// Key prefix for sessions
const SESSION_PREFIX: &str = "session:";

/// Default session lifetime (7 days)
const DEFAULT_SESSION_TTL: u64 = 7 * 24 * 60 * 60;

/// Stored session data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionData {
    pub user_id: Snowflake,
    pub created_at: DateTime<Utc>,
}

impl SessionData {
    #[must_use]
    pub fn new(user_id: Snowflake) -> Self {
        Self {
            user_id,
            created_at: Utc::now(),
        }
    }
}

/// Redis-backed session store
#[derive(Clone)]
pub struct SessionStore {
    pool: RedisPool,
    ttl_seconds: u64,
}

impl SessionStore {
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self::with_ttl(pool, DEFAULT_SESSION_TTL)
    }

    #[must_use]
    pub fn with_ttl(pool: RedisPool, ttl_seconds: u64) -> Self {
        Self { pool, ttl_seconds }
    }

    /// Session lifetime in seconds
    #[must_use]
    pub fn ttl_seconds(&self) -> u64 {
        self.ttl_seconds
    }

    fn key(token: &str) -> String {
        format!("{SESSION_PREFIX}{token}")
    }

    /// Open a session for the user and return its token
    pub async fn create(&self, user_id: Snowflake) -> RedisResult<String> {
        let token = generate_session_token();
        self.pool
            .set_json(&Self::key(&token), &SessionData::new(user_id), self.ttl_seconds)
            .await?;

        tracing::debug!(user_id = %user_id, "Session created");
        Ok(token)
    }

    /// Look up a live session
    pub async fn get(&self, token: &str) -> RedisResult<Option<SessionData>> {
        if !is_well_formed_token(token) {
            return Ok(None);
        }
        self.pool.get_json(&Self::key(token)).await
    }

    /// End a session; returns false if it had already ended
    pub async fn revoke(&self, token: &str) -> RedisResult<bool> {
        if !is_well_formed_token(token) {
            return Ok(false);
        }
        let deleted = self.pool.delete(&Self::key(token)).await?;
        if deleted {
            tracing::debug!("Session revoked");
        }
        Ok(deleted)
    }

    /// Seconds until the session expires
    pub async fn remaining_ttl(&self, token: &str) -> RedisResult<Option<i64>> {
        self.pool.ttl(&Self::key(token)).await
    }
}
