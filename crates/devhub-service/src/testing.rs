//! In-memory repositories for service tests
//!
//! One `MemoryStore` backs every repository trait so cascades and reputation
//! awards behave like the PostgreSQL schema: uniqueness on (user, item),
//! counters moved with each vote, and deletes that take dependents along.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use devhub_cache::{RedisPool, RedisPoolConfig};
use devhub_core::entities::{Bookmark, Comment, ContentItem, User, Vote, VoteTally};
use devhub_core::error::DomainError;
use devhub_core::reputation::ReputationAward;
use devhub_core::traits::{
    BookmarkRepository, CommentRepository, ContentQuery, ContentRepository, RepoResult,
    UserRepository, VoteRepository, MAX_PAGE_SIZE,
};
use devhub_core::value_objects::{
    BookmarkKind, ContentKind, Snowflake, SnowflakeGenerator, VoteDirection,
};
use devhub_core::{NewContent, ReputationAction};

use crate::services::ServiceContext;

#[derive(Default)]
struct State {
    users: BTreeMap<Snowflake, (User, Option<String>)>,
    content: BTreeMap<Snowflake, ContentItem>,
    comments: BTreeMap<Snowflake, Comment>,
    votes: HashMap<(Snowflake, Snowflake), Vote>,
    bookmarks: HashMap<(Snowflake, Snowflake), Bookmark>,
}

impl State {
    fn award(&mut self, award: ReputationAward) -> RepoResult<()> {
        if award.is_empty() {
            return Ok(());
        }
        let (user, _) = self
            .users
            .get_mut(&award.user_id)
            .ok_or(DomainError::UserNotFound(award.user_id))?;
        user.award(award.points);
        Ok(())
    }

    fn bump(&mut self, target_id: Snowflake, direction: VoteDirection, delta: i32) -> RepoResult<()> {
        let item = self
            .content
            .get_mut(&target_id)
            .ok_or(DomainError::ContentNotFound(target_id))?;
        let counter = match direction {
            VoteDirection::Upvote => &mut item.upvote_count,
            VoteDirection::Downvote => &mut item.downvote_count,
        };
        *counter = (*counter + delta).max(0);
        Ok(())
    }

    fn remove_item(&mut self, id: Snowflake) {
        let answers: Vec<Snowflake> = self
            .content
            .values()
            .filter(|c| c.parent_id == Some(id))
            .map(|c| c.id)
            .collect();
        for answer in answers {
            self.remove_item(answer);
        }
        self.content.remove(&id);
        self.comments.retain(|_, c| c.content_id != id);
        self.votes.retain(|(_, target), _| *target != id);
        self.bookmarks.retain(|(_, item), _| *item != id);
    }
}

/// Shared in-memory backing for all repositories
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<State>,
}

impl MemoryStore {
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }

    /// Raw ledger row count, bypassing the repositories
    pub fn vote_rows(&self, target_id: Snowflake) -> usize {
        self.lock()
            .votes
            .keys()
            .filter(|(_, target)| *target == target_id)
            .count()
    }

    /// Overwrite counters to simulate drift
    pub fn corrupt_counters(&self, target_id: Snowflake, upvotes: i32, downvotes: i32) {
        if let Some(item) = self.lock().content.get_mut(&target_id) {
            item.upvote_count = upvotes;
            item.downvote_count = downvotes;
        }
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>> {
        Ok(self.lock().users.get(&id).map(|(u, _)| u.clone()))
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        Ok(self
            .lock()
            .users
            .values()
            .find(|(u, _)| u.email.eq_ignore_ascii_case(email))
            .map(|(u, _)| u.clone()))
    }

    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        Ok(self
            .lock()
            .users
            .values()
            .find(|(u, _)| u.username.eq_ignore_ascii_case(username))
            .map(|(u, _)| u.clone()))
    }

    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        Ok(self.find_by_email(email).await?.is_some())
    }

    async fn username_exists(&self, username: &str) -> RepoResult<bool> {
        Ok(self.find_by_username(username).await?.is_some())
    }

    async fn create(&self, user: &User, password_hash: Option<&str>) -> RepoResult<()> {
        let mut state = self.lock();
        if state.users.values().any(|(u, _)| u.email.eq_ignore_ascii_case(&user.email)) {
            return Err(DomainError::EmailAlreadyExists);
        }
        if state
            .users
            .values()
            .any(|(u, _)| u.username.eq_ignore_ascii_case(&user.username))
        {
            return Err(DomainError::UsernameAlreadyExists);
        }
        state
            .users
            .insert(user.id, (user.clone(), password_hash.map(str::to_string)));
        Ok(())
    }

    async fn update_profile(&self, user: &User) -> RepoResult<()> {
        let mut state = self.lock();
        let (stored, _) = state
            .users
            .get_mut(&user.id)
            .ok_or(DomainError::UserNotFound(user.id))?;
        stored.bio.clone_from(&user.bio);
        stored.avatar_url.clone_from(&user.avatar_url);
        stored.interests.clone_from(&user.interests);
        stored.links.clone_from(&user.links);
        stored.updated_at = user.updated_at;
        Ok(())
    }

    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>> {
        Ok(self.lock().users.get(&id).and_then(|(_, h)| h.clone()))
    }
}

#[async_trait]
impl ContentRepository for MemoryStore {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<ContentItem>> {
        Ok(self.lock().content.get(&id).cloned())
    }

    async fn list(&self, query: ContentQuery) -> RepoResult<Vec<ContentItem>> {
        let limit = query.limit.clamp(1, MAX_PAGE_SIZE + 1) as usize;
        Ok(self
            .lock()
            .content
            .values()
            .rev()
            .filter(|c| match query.kind {
                Some(kind) => c.kind == kind,
                None => c.kind != ContentKind::Answer,
            })
            .filter(|c| query.author_id.map_or(true, |a| c.author_id == a))
            .filter(|c| query.before.map_or(true, |b| c.id < b))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn find_answers(&self, question_id: Snowflake) -> RepoResult<Vec<ContentItem>> {
        Ok(self
            .lock()
            .content
            .values()
            .filter(|c| c.parent_id == Some(question_id))
            .cloned()
            .collect())
    }

    async fn create(&self, item: &ContentItem, award: ReputationAward) -> RepoResult<()> {
        let mut state = self.lock();
        if !state.users.contains_key(&item.author_id) {
            return Err(DomainError::UserNotFound(item.author_id));
        }
        if let Some(parent) = item.parent_id {
            if !state.content.contains_key(&parent) {
                return Err(DomainError::ContentNotFound(parent));
            }
        }
        state.award(award)?;
        state.content.insert(item.id, item.clone());
        Ok(())
    }

    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let mut state = self.lock();
        if !state.content.contains_key(&id) {
            return Err(DomainError::ContentNotFound(id));
        }
        state.remove_item(id);
        Ok(())
    }

    async fn recount(&self, id: Snowflake) -> RepoResult<VoteTally> {
        let mut state = self.lock();
        let tally = VoteTally::from_votes(state.votes.values().filter(|v| v.target_id == id));
        let item = state
            .content
            .get_mut(&id)
            .ok_or(DomainError::ContentNotFound(id))?;
        item.upvote_count = tally.upvotes as i32;
        item.downvote_count = tally.downvotes as i32;
        Ok(tally)
    }
}

#[async_trait]
impl CommentRepository for MemoryStore {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Comment>> {
        Ok(self.lock().comments.get(&id).cloned())
    }

    async fn find_by_content(&self, content_id: Snowflake) -> RepoResult<Vec<Comment>> {
        Ok(self
            .lock()
            .comments
            .values()
            .filter(|c| c.content_id == content_id)
            .cloned()
            .collect())
    }

    async fn create(&self, comment: &Comment, award: ReputationAward) -> RepoResult<()> {
        let mut state = self.lock();
        if !state.content.contains_key(&comment.content_id) {
            return Err(DomainError::ContentNotFound(comment.content_id));
        }
        state.award(award)?;
        state.comments.insert(comment.id, comment.clone());
        Ok(())
    }

    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        self.lock()
            .comments
            .remove(&id)
            .map(|_| ())
            .ok_or(DomainError::CommentNotFound(id))
    }
}

#[async_trait]
impl VoteRepository for MemoryStore {
    async fn find(&self, user_id: Snowflake, target_id: Snowflake) -> RepoResult<Option<Vote>> {
        Ok(self.lock().votes.get(&(user_id, target_id)).cloned())
    }

    async fn create(&self, vote: &Vote) -> RepoResult<()> {
        let mut state = self.lock();
        let key = (vote.user_id, vote.target_id);
        if state.votes.contains_key(&key) {
            return Err(DomainError::VoteAlreadyExists);
        }
        state.bump(vote.target_id, vote.direction, 1)?;
        state.votes.insert(key, vote.clone());
        Ok(())
    }

    async fn delete(&self, user_id: Snowflake, target_id: Snowflake) -> RepoResult<Vote> {
        let mut state = self.lock();
        let vote = state
            .votes
            .remove(&(user_id, target_id))
            .ok_or(DomainError::VoteNotFound)?;
        state.bump(target_id, vote.direction, -1)?;
        Ok(vote)
    }

    async fn switch(
        &self,
        user_id: Snowflake,
        target_id: Snowflake,
        direction: VoteDirection,
    ) -> RepoResult<Vote> {
        let mut state = self.lock();
        let old = state
            .votes
            .remove(&(user_id, target_id))
            .ok_or(DomainError::VoteNotFound)?;
        state.bump(target_id, old.direction, -1)?;
        state.bump(target_id, direction, 1)?;
        let vote = Vote::new(user_id, target_id, old.target_kind, direction);
        state.votes.insert((user_id, target_id), vote.clone());
        Ok(vote)
    }

    async fn tally(&self, target_id: Snowflake) -> RepoResult<VoteTally> {
        self.lock()
            .content
            .get(&target_id)
            .map(ContentItem::tally)
            .ok_or(DomainError::ContentNotFound(target_id))
    }
}

#[async_trait]
impl BookmarkRepository for MemoryStore {
    async fn exists(
        &self,
        user_id: Snowflake,
        item_id: Snowflake,
        kind: BookmarkKind,
    ) -> RepoResult<bool> {
        Ok(self
            .lock()
            .bookmarks
            .get(&(user_id, item_id))
            .is_some_and(|b| b.item_kind == kind))
    }

    async fn create(&self, bookmark: &Bookmark) -> RepoResult<()> {
        let mut state = self.lock();
        if !state.content.contains_key(&bookmark.item_id) {
            return Err(DomainError::ContentNotFound(bookmark.item_id));
        }
        let key = (bookmark.user_id, bookmark.item_id);
        if state.bookmarks.contains_key(&key) {
            return Err(DomainError::BookmarkAlreadyExists);
        }
        state.bookmarks.insert(key, bookmark.clone());
        Ok(())
    }

    async fn delete(
        &self,
        user_id: Snowflake,
        item_id: Snowflake,
        kind: BookmarkKind,
    ) -> RepoResult<()> {
        let mut state = self.lock();
        let key = (user_id, item_id);
        if !state.bookmarks.get(&key).is_some_and(|b| b.item_kind == kind) {
            return Err(DomainError::BookmarkNotFound);
        }
        state.bookmarks.remove(&key);
        Ok(())
    }

    async fn find_by_user(
        &self,
        user_id: Snowflake,
        kind: Option<BookmarkKind>,
    ) -> RepoResult<Vec<Bookmark>> {
        let mut bookmarks: Vec<Bookmark> = self
            .lock()
            .bookmarks
            .values()
            .filter(|b| b.user_id == user_id)
            .filter(|b| kind.map_or(true, |k| b.item_kind == k))
            .cloned()
            .collect();
        bookmarks.sort_by(|a, b| (b.created_at, b.item_id).cmp(&(a.created_at, a.item_id)));
        Ok(bookmarks)
    }
}

/// A context wired to a fresh in-memory store
///
/// The Redis pool is created lazily and never touched unless a test opens a
/// session.
pub fn test_context() -> (ServiceContext, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let redis = RedisPool::new(RedisPoolConfig::default()).unwrap();
    let ctx = ServiceContext::new(
        redis,
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        3600,
        Arc::new(SnowflakeGenerator::new(7)),
    );
    (ctx, store)
}

/// Insert a user with no password
pub async fn seed_user(ctx: &ServiceContext, username: &str) -> User {
    let user = User::new(
        ctx.generate_id(),
        username.to_string(),
        format!("{username}@example.com"),
    );
    ctx.user_repo().create(&user, None).await.unwrap();
    user
}

/// Insert a top-level content item, earning its reputation
pub async fn seed_item(ctx: &ServiceContext, author: Snowflake, kind: ContentKind) -> ContentItem {
    assert_ne!(kind, ContentKind::Answer, "use seed_answer");
    insert_item(ctx, author, kind, None, Some(format!("A {kind}"))).await
}

/// Insert an answer to a question, earning its reputation
pub async fn seed_answer(ctx: &ServiceContext, author: Snowflake, question: Snowflake) -> ContentItem {
    insert_item(ctx, author, ContentKind::Answer, Some(question), None).await
}

async fn insert_item(
    ctx: &ServiceContext,
    author: Snowflake,
    kind: ContentKind,
    parent: Option<Snowflake>,
    title: Option<String>,
) -> ContentItem {
    let item = ContentItem::create(
        ctx.generate_id(),
        kind,
        author,
        parent,
        NewContent {
            title,
            body: format!("Body of a {kind}"),
            ..Default::default()
        },
    )
    .unwrap();
    let award = ReputationAward::new(author, ReputationAction::Published(kind));
    ctx.content_repo().create(&item, award).await.unwrap();
    item
}

/// Current reputation straight from the store
pub async fn reputation(ctx: &ServiceContext, user_id: Snowflake) -> i32 {
    ctx.user_repo()
        .find_by_id(user_id)
        .await
        .unwrap()
        .unwrap()
        .reputation_points
}
