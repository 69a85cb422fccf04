//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p skillx-integration-tests --test api_tests

use reqwest::StatusCode;
use serde_json::json;
use skillx_integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_endpoints() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/health").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get("/health/ready").await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["checks"]["database"], "healthy");
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_and_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique().with_skills("Guitar", "Spanish");

    let response = server.post("/api/register/", &request).await.unwrap();
    let body: MessageBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(body.message, "User registered successfully");

    let response = server
        .post("/api/login/", &LoginRequest::from_register(&request))
        .await
        .unwrap();
    let tokens: TokenPair = assert_json(response, StatusCode::OK).await.unwrap();

    let response = server.get_auth("/api/profile/", &tokens.access).await.unwrap();
    let profile: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(profile.username, request.username);
    assert_eq!(profile.skills_have.as_deref(), Some("Guitar"));
}

#[tokio::test]
async fn test_register_duplicate_username() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();
    server.post("/api/register/", &request).await.unwrap();

    let mut again = request.clone();
    again.email = format!("other-{}", request.email);

    let response = server.post("/api/register/", &again).await.unwrap();
    let err: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err.error, "This username is already taken.");
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let login = LoginRequest {
        username: format!("ghost{}", unique_suffix()),
        password: "wrong-password".to_string(),
    };

    let response = server.post("/api/login/", &login).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_refresh_and_logout() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = TestUser::unique(&server).await.unwrap();

    let response = server
        .post("/api/refresh/", &json!({ "refresh": user.refresh }))
        .await
        .unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    let access = body["access"].as_str().unwrap().to_string();

    let response = server.post_auth("/api/logout/", &access, &json!({})).await.unwrap();
    let body: MessageBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message, "Successfully logged out");

    // access tokens are not accepted as refresh tokens
    let response = server
        .post("/api/refresh/", &json!({ "refresh": user.access }))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Profile and Discovery Tests
// ============================================================================

#[tokio::test]
async fn test_update_profile_and_search() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let seeker = TestUser::unique(&server).await.unwrap();
    let skill = format!("Banjo{}", unique_suffix());
    let tutor = TestUser::create(
        &server,
        RegisterRequest::unique().with_skills(&skill, "Chess"),
    )
    .await
    .unwrap();

    let update = json!({
        "username": seeker.username,
        "email": format!("{}@example.org", seeker.username),
        "bio": "Curious",
        "skills_want": skill,
    });
    let response = server.put_auth("/api/profile/", &seeker.access, &update).await.unwrap();
    let profile: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(profile.bio.as_deref(), Some("Curious"));
    assert!(profile.email.ends_with("@example.org"));

    let path = format!("/api/search/?skill={}", skill.to_lowercase());
    let response = server.get_auth(&path, &seeker.access).await.unwrap();
    let found: Vec<UserResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, tutor.id);

    let response = server.get_auth("/api/search/", &seeker.access).await.unwrap();
    let err: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err.error, "Search term required (skill, username, or q)");

    let path = format!("/api/users/{}/", tutor.id);
    let response = server.get_auth(&path, &seeker.access).await.unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(user.username, tutor.username);
}

// ============================================================================
// Connection Tests
// ============================================================================

#[tokio::test]
async fn test_connection_lifecycle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = TestUser::unique(&server).await.unwrap();
    let bob = TestUser::unique(&server).await.unwrap();

    let response = server
        .post_auth("/api/send-request/", &alice.access, &json!({ "receiver_id": bob.id }))
        .await
        .unwrap();
    let body: MessageBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(body.message, "Request sent");

    let response = server
        .post_auth("/api/send-request/", &alice.access, &json!({ "receiver_id": bob.id }))
        .await
        .unwrap();
    let err: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err.error, "Request already sent");

    let response = server.get_auth("/api/pending-requests/", &bob.access).await.unwrap();
    let pending: Vec<ConnectionResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].sender.username, alice.username);
    assert_eq!(pending[0].status, "pending");
    let request_id = pending[0].id;

    // only the receiver can accept
    let response = server
        .post_auth("/api/accept-request/", &alice.access, &json!({ "request_id": request_id }))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server
        .post_auth("/api/accept-request/", &bob.access, &json!({ "request_id": request_id }))
        .await
        .unwrap();
    let body: MessageBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message, "Connection accepted");

    let response = server.get_auth("/api/my-connections/", &alice.access).await.unwrap();
    let mine: Vec<ConnectionResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].status, "accepted");

    // connected users drop out of discovery
    let response = server.get_auth("/api/users/", &alice.access).await.unwrap();
    let users: Vec<UserResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(users.iter().all(|u| u.id != bob.id && u.id != alice.id));

    let path = format!("/api/connections/{request_id}/");
    let response = server.delete_auth(&path, &bob.access).await.unwrap();
    let body: MessageBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message, "Connection removed successfully");
}

#[tokio::test]
async fn test_reject_and_remove_permissions() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = TestUser::unique(&server).await.unwrap();
    let bob = TestUser::unique(&server).await.unwrap();
    let mallory = TestUser::unique(&server).await.unwrap();

    server
        .post_auth("/api/send-request/", &alice.access, &json!({ "receiver_id": bob.id }))
        .await
        .unwrap();
    let response = server.get_auth("/api/pending-requests/", &bob.access).await.unwrap();
    let pending: Vec<ConnectionResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let request_id = pending[0].id;

    let path = format!("/api/connections/{request_id}/");
    let response = server.delete_auth(&path, &mallory.access).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .post_auth("/api/reject-request/", &bob.access, &json!({ "request_id": request_id }))
        .await
        .unwrap();
    let body: MessageBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message, "Connection request rejected");

    let response = server.get_auth("/api/pending-requests/", &bob.access).await.unwrap();
    let pending: Vec<ConnectionResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(pending.is_empty());
}

// ============================================================================
// Messaging Tests
// ============================================================================

#[tokio::test]
async fn test_messaging_and_conversations() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = TestUser::unique(&server).await.unwrap();
    let bob = TestUser::unique(&server).await.unwrap();

    let response = server
        .post_auth(
            "/api/send-message/",
            &alice.access,
            &json!({ "receiver_id": bob.id, "content": "Want to trade lessons?" }),
        )
        .await
        .unwrap();
    let sent: MessageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(sent.sender.id, alice.id);
    assert!(!sent.is_read);

    server
        .post_auth(
            "/api/send-message/",
            &bob.access,
            &json!({ "receiver_id": alice.id, "content": "Sure!" }),
        )
        .await
        .unwrap();

    let response = server
        .post_auth("/api/send-message/", &alice.access, &json!({ "receiver_id": bob.id }))
        .await
        .unwrap();
    let err: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err.error, "receiver_id and content are required");

    let response = server.get_auth("/api/conversations/", &alice.access).await.unwrap();
    let conversations: Vec<ConversationResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(conversations.len(), 1);
    assert_eq!(conversations[0].id, 1);
    assert_eq!(conversations[0].other_user_id, bob.id);
    assert_eq!(conversations[0].last_message, "Sure!");
    assert_eq!(conversations[0].unread_count, 1);
    assert_eq!(conversations[0].messages.len(), 2);

    let path = format!("/api/mark-messages-read/{}/", bob.id);
    let response = server.post_auth(&path, &alice.access, &json!({})).await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["messages_updated"], 1);

    // only the sender may delete a message
    let path = format!("/api/delete-message/{}/", sent.id);
    let response = server.delete_auth(&path, &bob.access).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server.delete_auth(&path, &alice.access).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let path = format!("/api/delete-conversation/{}/", alice.id);
    let response = server.delete_auth(&path, &bob.access).await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["messages_deleted"], 1);

    let response = server.get_auth("/api/conversations/", &alice.access).await.unwrap();
    let conversations: Vec<ConversationResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert!(conversations.is_empty());
}

// ============================================================================
// Account Deletion Tests
// ============================================================================

#[tokio::test]
async fn test_delete_account() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let leaving = TestUser::unique(&server).await.unwrap();
    let friend = TestUser::unique(&server).await.unwrap();

    server
        .post_auth(
            "/api/send-message/",
            &friend.access,
            &json!({ "receiver_id": leaving.id, "content": "bye?" }),
        )
        .await
        .unwrap();

    let response = server
        .delete_auth_json("/api/delete-account/", &leaving.access, &json!({ "password": "nope" }))
        .await
        .unwrap();
    let err: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err.error, "Invalid password");

    let response = server
        .delete_auth_json(
            "/api/delete-account/",
            &leaving.access,
            &json!({ "password": leaving.password }),
        )
        .await
        .unwrap();
    let body: MessageBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message, "Account deleted successfully");

    let path = format!("/api/users/{}/", leaving.id);
    let response = server.get_auth(&path, &friend.access).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    // messages went with the account
    let response = server.get_auth("/api/conversations/", &friend.access).await.unwrap();
    let conversations: Vec<ConversationResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert!(conversations.is_empty());
}

#[tokio::test]
async fn test_missing_token_is_unauthorized() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/my-connections/").await.unwrap();
    let err: ErrorBody = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(err.code, "MISSING_AUTH");
}
