//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod auth;
pub mod bookmarks;
pub mod comments;
pub mod content;
pub mod health;
pub mod users;
pub mod votes;
