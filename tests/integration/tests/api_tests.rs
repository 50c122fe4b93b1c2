//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Running Redis instance
//! - Environment variables: DATABASE_URL, REDIS_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_data, assert_error, assert_json, assert_status, check_test_env, fixtures::*,
    TestServer,
};
use reqwest::StatusCode;
use serde_json::Value;

/// Register a fresh user and return their session
async fn register(server: &TestServer) -> AuthData {
    let response = server
        .post("/auth/register", &RegisterRequest::unique())
        .await
        .unwrap();
    assert_data(response, StatusCode::CREATED).await.unwrap()
}

async fn publish(server: &TestServer, token: &str, path: &str, body: &ContentRequest) -> ContentData {
    let response = server.post_auth(path, token, body).await.unwrap();
    assert_data(response, StatusCode::CREATED).await.unwrap()
}

async fn reputation(server: &TestServer, user_id: &str) -> i32 {
    let response = server.get(&format!("/users/{user_id}")).await.unwrap();
    let user: UserData = assert_data(response, StatusCode::OK).await.unwrap();
    user.reputation_points
}

async fn tally(server: &TestServer, id: &str) -> TallyData {
    let response = server.get(&format!("/vote/tally/{id}")).await.unwrap();
    assert_data(response, StatusCode::OK).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_login_logout() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/auth/register", &request).await.unwrap();
    assert!(response.headers().get("set-cookie").is_some());
    let auth: AuthData = assert_data(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(auth.user.username, request.username);
    assert_eq!(auth.token_type, "Bearer");
    assert!(auth.expires_in > 0);
    assert_eq!(auth.user.reputation_points, 0);

    let response = server
        .post("/auth/login", &LoginRequest::from_register(&request))
        .await
        .unwrap();
    let login: AuthData = assert_data(response, StatusCode::OK).await.unwrap();
    assert_ne!(login.token, auth.token);

    let response = server.get_auth("/users/@me", &login.token).await.unwrap();
    let me: UserData = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(me.id, auth.user.id);
    assert_eq!(me.email.as_deref(), Some(request.email.as_str()));

    let response = server
        .post_auth("/auth/logout", &login.token, &serde_json::json!({}))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get_auth("/users/@me", &login.token).await.unwrap();
    let code = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "INVALID_SESSION");

    // The register session is independent
    let response = server.get_auth("/users/@me", &auth.token).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();
    server.post("/auth/register", &request).await.unwrap();

    let duplicate = RegisterRequest {
        username: format!("{}_2", request.username),
        ..request.clone()
    };
    let response = server.post("/auth/register", &duplicate).await.unwrap();
    let code = assert_error(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(code, "EMAIL_ALREADY_EXISTS");
}

#[tokio::test]
async fn test_login_wrong_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();
    server.post("/auth/register", &request).await.unwrap();

    let login = LoginRequest {
        email: request.email,
        password: "WrongPass999".to_string(),
    };
    let response = server.post("/auth/login", &login).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_session_cookie_authenticates() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let client = reqwest::Client::builder().cookie_store(true).build().unwrap();

    let response = client
        .post(server.url("/auth/register"))
        .json(&RegisterRequest::unique())
        .send()
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // No Authorization header: the cookie alone carries the session
    let response = client.get(server.url("/users/@me")).send().await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = client.post(server.url("/auth/logout")).send().await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = client.get(server.url("/users/@me")).send().await.unwrap();
    let code = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "MISSING_AUTH");
}

#[tokio::test]
async fn test_unauthenticated_requests_are_401() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/vote/add-post-vote/1", &VoteRequest::new("upvote", "post"))
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "MISSING_AUTH");

    let response = server
        .post("/bookmark/add-bookmark", &BookmarkRequest::new("1", "post"))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_update_profile() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    let patch = serde_json::json!({
        "bio": "Rustacean",
        "interests": ["rust", "databases"],
    });
    let response = server.patch_auth("/users/@me", &auth.token, &patch).await.unwrap();
    let me: UserData = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(me.bio.as_deref(), Some("Rustacean"));
    assert_eq!(me.interests, vec!["rust", "databases"]);

    let response = server.get(&format!("/users/{}", auth.user.id)).await.unwrap();
    let public: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(public["data"]["bio"], "Rustacean");
    assert!(public["data"].get("email").is_none());
}

// ============================================================================
// Content & Reputation Tests
// ============================================================================

#[tokio::test]
async fn test_reputation_is_additive() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;
    let token = auth.token.as_str();

    publish(&server, token, "/posts", &ContentRequest::titled("Post")).await;
    assert_eq!(reputation(&server, &auth.user.id).await, 2);

    let question = publish(&server, token, "/questions", &ContentRequest::titled("Why?")).await;
    publish(&server, token, "/articles", &ContentRequest::titled("Article")).await;
    publish(&server, token, "/snippets", &ContentRequest::snippet()).await;
    assert_eq!(reputation(&server, &auth.user.id).await, 6);

    let response = server
        .post_auth(
            &format!("/questions/{}/answers", question.id),
            token,
            &AnswerRequest {
                body: "Because.".to_string(),
            },
        )
        .await
        .unwrap();
    let answer: ContentData = assert_data(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(answer.kind, "answer");
    assert_eq!(answer.parent_id.as_deref(), Some(question.id.as_str()));
    assert_eq!(reputation(&server, &auth.user.id).await, 10);

    let response = server
        .post_auth(
            &format!("/content/{}/comments", answer.id),
            token,
            &CommentRequest {
                body: "Good answer".to_string(),
            },
        )
        .await
        .unwrap();
    let comment: CommentData = assert_data(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(comment.content_id, answer.id);
    assert_eq!(reputation(&server, &auth.user.id).await, 11);

    let response = server
        .get(&format!("/questions/{}/answers", question.id))
        .await
        .unwrap();
    let answers: Vec<ContentData> = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(answers.len(), 1);

    let response = server
        .get(&format!("/content/{}/comments", answer.id))
        .await
        .unwrap();
    let comments: Vec<CommentData> = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(comments[0].body, "Good answer");
}

#[tokio::test]
async fn test_invalid_content_earns_nothing() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    let empty = ContentRequest {
        title: Some("Empty".to_string()),
        body: String::new(),
        ..Default::default()
    };
    let response = server.post_auth("/posts", &auth.token, &empty).await.unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "VALIDATION_ERROR");
    assert_eq!(reputation(&server, &auth.user.id).await, 0);
}

#[tokio::test]
async fn test_list_content_by_author() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;
    for title in ["One", "Two", "Three"] {
        publish(&server, &auth.token, "/posts", &ContentRequest::titled(title)).await;
    }

    let path = format!("/content?kind=post&author_id={}&limit=2", auth.user.id);
    let response = server.get(&path).await.unwrap();
    let page: PageData<ContentData> = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.items.len(), 2);
    assert!(page.pagination.has_more);
    assert_eq!(page.pagination.limit, 2);
    assert_eq!(page.items[0].title.as_deref(), Some("Three"));

    let before = page.pagination.before.expect("cursor on a full page");
    let response = server.get(&format!("{path}&before={before}")).await.unwrap();
    let page: PageData<ContentData> = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.items.len(), 1);
    assert!(!page.pagination.has_more);
    assert_eq!(page.items[0].title.as_deref(), Some("One"));
}

#[tokio::test]
async fn test_only_author_deletes_content() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = register(&server).await;
    let other = register(&server).await;
    let post = publish(&server, &author.token, "/posts", &ContentRequest::titled("Mine")).await;

    let path = format!("/content/{}", post.id);
    let response = server.delete_auth(&path, &other.token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server.delete_auth(&path, &author.token).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get(&path).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    // Deletion keeps reputation
    assert_eq!(reputation(&server, &author.user.id).await, 2);
}

// ============================================================================
// Vote Tests
// ============================================================================

#[tokio::test]
async fn test_post_vote_scenario() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let a = register(&server).await;
    let b = register(&server).await;

    let post = publish(&server, &a.token, "/posts", &ContentRequest::titled("Hello")).await;
    assert_eq!(reputation(&server, &a.user.id).await, 2);

    let response = server
        .post_auth(
            &format!("/vote/add-post-vote/{}", post.id),
            &b.token,
            &VoteRequest::new("upvote", "post"),
        )
        .await
        .unwrap();
    let vote: VoteData = assert_data(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(vote.target_id, post.id);
    assert_eq!(vote.voteable_type, "post");
    assert_eq!(vote.vote_type, "upvote");
    assert_eq!(tally(&server, &post.id).await.upvotes, 1);

    let response = server
        .post_auth(
            &format!("/vote/toggle/{}", post.id),
            &b.token,
            &VoteRequest::new("upvote", "post"),
        )
        .await
        .unwrap();
    let toggled: ToggleData = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(toggled.vote_type, None);
    assert_eq!(toggled.upvotes, 0);

    let response = server
        .get_auth(&format!("/vote/check/{}", post.id), &b.token)
        .await
        .unwrap();
    let check: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(check["success"], true);
    assert!(check["vote_type"].is_null());

    // Votes earn nothing
    assert_eq!(reputation(&server, &a.user.id).await, 2);
}

#[tokio::test]
async fn test_duplicate_vote_conflicts() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let a = register(&server).await;
    let b = register(&server).await;
    let question = publish(&server, &a.token, "/questions", &ContentRequest::titled("Q")).await;
    let path = format!("/vote/add-question-vote/{}", question.id);

    let response = server
        .post_auth(&path, &b.token, &VoteRequest::new("downvote", "question"))
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth(&path, &b.token, &VoteRequest::new("upvote", "question"))
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    let counts = tally(&server, &question.id).await;
    assert_eq!((counts.upvotes, counts.downvotes, counts.score), (0, 1, -1));

    let response = server
        .get_auth(&format!("/vote/check/{}", question.id), &b.token)
        .await
        .unwrap();
    let check: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(check["vote_type"], "downvote");
}

#[tokio::test]
async fn test_vote_type_must_match_route() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let a = register(&server).await;
    let article = publish(&server, &a.token, "/articles", &ContentRequest::titled("A")).await;

    let response = server
        .post_auth(
            &format!("/vote/add-article-vote/{}", article.id),
            &a.token,
            &VoteRequest::new("upvote", "post"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    // Right body, wrong route for the item
    let response = server
        .post_auth(
            &format!("/vote/add-post-vote/{}", article.id),
            &a.token,
            &VoteRequest::new("upvote", "post"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_remove_vote() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let a = register(&server).await;
    let post = publish(&server, &a.token, "/posts", &ContentRequest::titled("P")).await;
    let remove = format!("/vote/remove-post-vote/{}", post.id);

    let response = server.delete_auth(&remove, &a.token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server
        .post_auth(
            &format!("/vote/add-post-vote/{}", post.id),
            &a.token,
            &VoteRequest::new("downvote", "post"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(tally(&server, &post.id).await.downvotes, 1);

    let response = server.delete_auth(&remove, &a.token).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
    assert_eq!(tally(&server, &post.id).await.downvotes, 0);
}

#[tokio::test]
async fn test_toggle_switches_direction() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let a = register(&server).await;
    let question = publish(&server, &a.token, "/questions", &ContentRequest::titled("Q")).await;
    let toggle = format!("/vote/toggle/{}", question.id);

    for (direction, expected) in [("upvote", (1, 0)), ("downvote", (0, 1))] {
        let response = server
            .post_auth(&toggle, &a.token, &VoteRequest::new(direction, "question"))
            .await
            .unwrap();
        let state: ToggleData = assert_data(response, StatusCode::OK).await.unwrap();
        assert_eq!(state.vote_type.as_deref(), Some(direction));
        assert_eq!((state.upvotes, state.downvotes), expected);
    }
}

// ============================================================================
// Bookmark Tests
// ============================================================================

#[tokio::test]
async fn test_bookmark_lifecycle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let a = register(&server).await;
    let snippet = publish(&server, &a.token, "/snippets", &ContentRequest::snippet()).await;
    let request = BookmarkRequest::new(&snippet.id, "snippet");
    let check = format!("/bookmark/check?itemId={}&itemType=snippet", snippet.id);

    let response = server
        .post_auth("/bookmark/add-bookmark", &a.token, &request)
        .await
        .unwrap();
    let bookmark: BookmarkData = assert_data(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(bookmark.item_id, snippet.id);
    assert_eq!(bookmark.item_type, "snippet");

    let response = server.get_auth(&check, &a.token).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["isBookmarked"], true);

    let response = server
        .post_auth("/bookmark/add-bookmark", &a.token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    let response = server
        .get_auth("/bookmark/list?itemType=snippet", &a.token)
        .await
        .unwrap();
    let listed: Vec<BookmarkData> = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(listed.len(), 1);

    let response = server
        .delete_auth_json("/bookmark/remove", &a.token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get_auth(&check, &a.token).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["isBookmarked"], false);

    let response = server
        .delete_auth_json("/bookmark/remove", &a.token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_bookmark_invalid_type() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let a = register(&server).await;
    let post = publish(&server, &a.token, "/posts", &ContentRequest::titled("P")).await;

    let response = server
        .post_auth(
            "/bookmark/add-bookmark",
            &a.token,
            &BookmarkRequest::new(&post.id, "answer"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}
