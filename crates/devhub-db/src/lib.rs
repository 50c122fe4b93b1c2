//! # devhub-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! - Connection pool management and migrations
//! - Database models with SQLx `FromRow` derives
//! - Entity <-> model mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use devhub_db::{create_pool, run_migrations, DatabaseConfig, PgVoteRepository, MIGRATIONS_DIR};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::default()).await?;
//!     run_migrations(&pool, MIGRATIONS_DIR).await?;
//!     let votes = PgVoteRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, DatabaseConfig, PgPool, MIGRATIONS_DIR};
pub use repositories::{
    PgBookmarkRepository, PgCommentRepository, PgContentRepository, PgUserRepository,
    PgVoteRepository,
};
