//! User entity - a community member with a reputation score

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// User entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub username: String,
    pub email: String,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub interests: Vec<String>,
    pub links: Vec<String>,
    /// Only ever grows; see [`crate::reputation`]
    pub reputation_points: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with an empty profile and zero reputation
    pub fn new(id: Snowflake, username: String, email: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            username,
            email,
            avatar_url: None,
            bio: None,
            interests: Vec::new(),
            links: Vec::new(),
            reputation_points: 0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn set_bio(&mut self, bio: Option<String>) {
        self.bio = bio.filter(|b| !b.trim().is_empty());
        self.updated_at = Utc::now();
    }

    pub fn set_avatar_url(&mut self, avatar_url: Option<String>) {
        self.avatar_url = avatar_url;
        self.updated_at = Utc::now();
    }

    /// Replace interests, dropping blanks and duplicates while keeping order
    pub fn set_interests(&mut self, interests: Vec<String>) {
        self.interests = dedup_trimmed(interests);
        self.updated_at = Utc::now();
    }

    pub fn set_links(&mut self, links: Vec<String>) {
        self.links = dedup_trimmed(links);
        self.updated_at = Utc::now();
    }

    /// Add reputation points; negative awards are ignored
    pub fn award(&mut self, points: i32) {
        if points > 0 {
            self.reputation_points = self.reputation_points.saturating_add(points);
        }
    }
}

fn dedup_trimmed(values: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(values.len());
    for value in values {
        let value = value.trim();
        if !value.is_empty() && !out.iter().any(|v| v == value) {
            out.push(value.to_string());
        }
    }
    out
}
