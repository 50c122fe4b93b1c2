//! Entity <-> model mappers
//!
//! `From<Model>` where every column maps directly, `TryFrom<Model>` where a
//! TEXT column has to be parsed back into a domain enum.

mod content;
mod user;
mod vote;

pub use content::content_items;
