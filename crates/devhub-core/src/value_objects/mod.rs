//! Value objects - immutable types that represent domain concepts

mod kinds;
mod snowflake;

pub use kinds::{BookmarkKind, ContentKind, KindParseError, VoteDirection, VoteTargetKind};
pub use snowflake::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
