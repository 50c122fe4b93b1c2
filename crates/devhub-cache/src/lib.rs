//! # devhub-cache
//!
//! Redis layer holding login sessions.
//!
//! ## Example
//!
//! ```ignore
//! use devhub_cache::{RedisPool, RedisPoolConfig, SessionStore};
//!
//! let pool = RedisPool::new(RedisPoolConfig::default())?;
//! let sessions = SessionStore::with_ttl(pool, 3600);
//! let token = sessions.create(user_id).await?;
//! ```

pub mod pool;
pub mod session;

pub use pool::{RedisPool, RedisPoolConfig, RedisPoolError, RedisResult};
pub use session::{SessionData, SessionStore};
