// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{create_test_app, TestApp};
use axum::http::StatusCode;
use serde_json::{json, Value};

async fn create_thread(app: &TestApp, token: &str) -> String {
    let response = app
        .server
        .post("/threads")
        .add_header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "title": "sebuah thread", "body": "isi thread" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();
    body["data"]["addedThread"]["id"].as_str().unwrap().to_string()
}

async fn create_comment(app: &TestApp, token: &str, thread_id: &str) -> String {
    let response = app
        .server
        .post(&format!("/threads/{}/comments", thread_id))
        .add_header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "content": "sebuah komentar" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();
    body["data"]["addedComment"]["id"].as_str().unwrap().to_string()
}

/// 测试健康检查端点无需认证即可访问
#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();

    let response = app.server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], "success");
}

/// 测试携带有效令牌创建讨论串
#[tokio::test]
async fn test_create_thread_success() {
    let app = create_test_app();

    let response = app
        .server
        .post("/threads")
        .add_header("Authorization", format!("Bearer {}", app.token))
        .json(&json!({ "title": "sebuah thread", "body": "isi thread" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["status"], "success");

    let added = &body["data"]["addedThread"];
    assert!(added["id"].as_str().unwrap().starts_with("thread-"));
    assert_eq!(added["title"], "sebuah thread");
    assert_eq!(added["owner"], "user-123");
}

/// 测试缺少令牌的写操作被拒绝
#[tokio::test]
async fn test_create_thread_without_token_is_unauthorized() {
    let app = create_test_app();

    let response = app
        .server
        .post("/threads")
        .json(&json!({ "title": "sebuah thread", "body": "isi thread" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body["status"], "fail");
    assert_eq!(body["message"], "Missing authentication");
}

/// 测试无效令牌被拒绝
#[tokio::test]
async fn test_unknown_token_is_unauthorized() {
    let app = create_test_app();

    let response = app
        .server
        .post("/threads")
        .add_header("Authorization", "Bearer token-tidak-dikenal")
        .json(&json!({ "title": "sebuah thread", "body": "isi thread" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body["message"], "Invalid authentication");
}

/// 测试负载校验失败返回400与校验错误码
#[tokio::test]
async fn test_create_thread_with_missing_body_is_bad_request() {
    let app = create_test_app();

    let response = app
        .server
        .post("/threads")
        .add_header("Authorization", format!("Bearer {}", app.token))
        .json(&json!({ "title": "sebuah thread" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["status"], "fail");
    assert_eq!(body["message"], "THREAD.NOT_CONTAIN_NEEDED_PROPERTY");
}

/// 测试非法JSON请求体同样返回统一失败信封
#[tokio::test]
async fn test_malformed_json_body_keeps_fail_envelope() {
    let app = create_test_app();

    let response = app
        .server
        .post("/threads")
        .add_header("Authorization", format!("Bearer {}", app.token))
        .content_type("application/json")
        .bytes("{\"title\": \"sebuah".into())
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["status"], "fail");
    assert!(!body["message"].as_str().unwrap().is_empty());
}

/// 测试读取不存在的讨论串返回404
#[tokio::test]
async fn test_get_missing_thread_is_not_found() {
    let app = create_test_app();

    let response = app.server.get("/threads/thread-404").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["status"], "fail");
    assert_eq!(body["message"], "thread tidak ditemukan");
}

/// 测试完整的讨论流程：建串、评论、回复、点赞、读取聚合、软删除
#[tokio::test]
async fn test_full_discussion_journey() {
    let app = create_test_app();

    let thread_id = create_thread(&app, &app.token).await;
    let comment_id = create_comment(&app, &app.other_token, &thread_id).await;

    let response = app
        .server
        .post(&format!("/threads/{}/comments/{}/replies", thread_id, comment_id))
        .add_header("Authorization", format!("Bearer {}", app.token))
        .json(&json!({ "content": "sebuah balasan" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();
    let reply_id = body["data"]["addedReply"]["id"].as_str().unwrap().to_string();
    assert!(reply_id.starts_with("reply-"));

    let response = app
        .server
        .put(&format!("/threads/{}/comments/{}/likes", thread_id, comment_id))
        .add_header("Authorization", format!("Bearer {}", app.token))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    // The aggregate view is public, no token needed
    let response = app.server.get(&format!("/threads/{}", thread_id)).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    let thread = &body["data"]["thread"];
    assert_eq!(thread["id"], thread_id.as_str());
    assert_eq!(thread["title"], "sebuah thread");
    assert_eq!(thread["username"], "dicoding");

    let comments = thread["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0]["id"], comment_id.as_str());
    assert_eq!(comments[0]["username"], "johndoe");
    assert_eq!(comments[0]["content"], "sebuah komentar");
    assert_eq!(comments[0]["likeCount"], 1);

    let replies = comments[0]["replies"].as_array().unwrap();
    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0]["id"], reply_id.as_str());
    assert_eq!(replies[0]["content"], "sebuah balasan");
    assert_eq!(replies[0]["username"], "dicoding");

    // Soft-deleting keeps the comment in the view with masked content
    let response = app
        .server
        .delete(&format!("/threads/{}/comments/{}", thread_id, comment_id))
        .add_header("Authorization", format!("Bearer {}", app.other_token))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let response = app.server.get(&format!("/threads/{}", thread_id)).await;
    let body: Value = response.json();
    let comments = body["data"]["thread"]["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0]["content"], "**komentar telah dihapus**");
    // Replies under the deleted comment remain visible
    assert_eq!(comments[0]["replies"].as_array().unwrap().len(), 1);
}

/// 测试非所有者删除评论返回403
#[tokio::test]
async fn test_delete_comment_by_non_owner_is_forbidden() {
    let app = create_test_app();

    let thread_id = create_thread(&app, &app.token).await;
    let comment_id = create_comment(&app, &app.token, &thread_id).await;

    let response = app
        .server
        .delete(&format!("/threads/{}/comments/{}", thread_id, comment_id))
        .add_header("Authorization", format!("Bearer {}", app.other_token))
        .await;

    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    let body: Value = response.json();
    assert_eq!(body["message"], "Anda tidak berhak mengakses resource ini");
}

/// 测试删除回复后聚合视图展示占位文本
#[tokio::test]
async fn test_deleted_reply_is_masked_in_aggregate_view() {
    let app = create_test_app();

    let thread_id = create_thread(&app, &app.token).await;
    let comment_id = create_comment(&app, &app.token, &thread_id).await;

    let response = app
        .server
        .post(&format!("/threads/{}/comments/{}/replies", thread_id, comment_id))
        .add_header("Authorization", format!("Bearer {}", app.other_token))
        .json(&json!({ "content": "sebuah balasan" }))
        .await;
    let body: Value = response.json();
    let reply_id = body["data"]["addedReply"]["id"].as_str().unwrap().to_string();

    let response = app
        .server
        .delete(&format!(
            "/threads/{}/comments/{}/replies/{}",
            thread_id, comment_id, reply_id
        ))
        .add_header("Authorization", format!("Bearer {}", app.other_token))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let response = app.server.get(&format!("/threads/{}", thread_id)).await;
    let body: Value = response.json();
    let replies = body["data"]["thread"]["comments"][0]["replies"]
        .as_array()
        .unwrap();
    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0]["content"], "**balasan telah dihapus**");
}

/// 测试重复点赞取消点赞，计数回到零
#[tokio::test]
async fn test_like_twice_cancels_the_like() {
    let app = create_test_app();

    let thread_id = create_thread(&app, &app.token).await;
    let comment_id = create_comment(&app, &app.token, &thread_id).await;
    let like_path = format!("/threads/{}/comments/{}/likes", thread_id, comment_id);

    for _ in 0..2 {
        let response = app
            .server
            .put(&like_path)
            .add_header("Authorization", format!("Bearer {}", app.token))
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);
    }

    let response = app.server.get(&format!("/threads/{}", thread_id)).await;
    let body: Value = response.json();
    assert_eq!(body["data"]["thread"]["comments"][0]["likeCount"], 0);
}

/// 测试点赞不存在于该讨论串的评论返回404
#[tokio::test]
async fn test_like_comment_in_wrong_thread_is_not_found() {
    let app = create_test_app();

    let thread_id = create_thread(&app, &app.token).await;
    let other_thread_id = create_thread(&app, &app.token).await;
    let comment_id = create_comment(&app, &app.token, &thread_id).await;

    let response = app
        .server
        .put(&format!(
            "/threads/{}/comments/{}/likes",
            other_thread_id, comment_id
        ))
        .add_header("Authorization", format!("Bearer {}", app.token))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["message"], "Comment tidak ditemukan dalam thread");
}
