//! Route definitions
//!
//! All API routes organized by domain, mounted at the root.

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::handlers::{auth, bookmarks, comments, content, health, users, votes};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(health_routes())
        .merge(auth_routes())
        .merge(user_routes())
        .merge(content_routes())
        .merge(comment_routes())
        .merge(vote_routes())
        .merge(bookmark_routes())
}

/// Health check routes
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users/@me",
            get(users::get_current_user).patch(users::update_current_user),
        )
        .route("/users/:user_id", get(users::get_user))
}

/// Content routes
fn content_routes() -> Router<AppState> {
    Router::new()
        .route("/posts", post(content::create_post))
        .route("/questions", post(content::create_question))
        .route("/articles", post(content::create_article))
        .route("/snippets", post(content::create_snippet))
        .route(
            "/questions/:question_id/answers",
            get(content::list_answers).post(content::create_answer),
        )
        .route("/content", get(content::list_content))
        .route(
            "/content/:content_id",
            get(content::get_content).delete(content::delete_content),
        )
}

/// Comment routes
fn comment_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/content/:content_id/comments",
            get(comments::list_comments).post(comments::create_comment),
        )
        .route("/comments/:comment_id", delete(comments::delete_comment))
}

/// Vote routes
fn vote_routes() -> Router<AppState> {
    Router::new()
        .route("/vote/add-post-vote/:id", post(votes::add_post_vote))
        .route("/vote/add-question-vote/:id", post(votes::add_question_vote))
        .route("/vote/add-answer-vote/:id", post(votes::add_answer_vote))
        .route("/vote/add-article-vote/:id", post(votes::add_article_vote))
        .route("/vote/remove-post-vote/:id", delete(votes::remove_post_vote))
        .route("/vote/remove-question-vote/:id", delete(votes::remove_question_vote))
        .route("/vote/remove-answer-vote/:id", delete(votes::remove_answer_vote))
        .route("/vote/remove-article-vote/:id", delete(votes::remove_article_vote))
        .route("/vote/check/:id", get(votes::check_vote))
        .route("/vote/toggle/:id", post(votes::toggle_vote))
        .route("/vote/tally/:id", get(votes::tally))
        .route("/vote/recount/:id", post(votes::recount))
}

/// Bookmark routes
fn bookmark_routes() -> Router<AppState> {
    Router::new()
        .route("/bookmark/add-bookmark", post(bookmarks::add_bookmark))
        .route("/bookmark/remove", delete(bookmarks::remove_bookmark))
        .route("/bookmark/check", get(bookmarks::check_bookmark))
        .route("/bookmark/list", get(bookmarks::list_bookmarks))
}
