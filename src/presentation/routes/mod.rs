// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::repositories::comment_repository::CommentRepository;
use crate::domain::repositories::like_repository::LikeRepository;
use crate::domain::repositories::reply_repository::ReplyRepository;
use crate::domain::repositories::thread_repository::ThreadRepository;
use crate::domain::repositories::user_repository::UserRepository;
use crate::presentation::handlers::{
    comment_handler, like_handler, reply_handler, thread_handler,
};
use crate::presentation::middleware::auth_middleware::{auth_middleware, AuthState};
use axum::{
    middleware,
    routing::{delete, get, post, put},
    Extension, Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// 健康检查端点
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({ "status": "success" }))
}

/// 构建完整的API路由
///
/// 公开路由（健康检查、讨论串详情）与受保护路由合并；
/// 受保护路由通过`route_layer`挂载认证中间件，
/// 各仓库以`Extension`注入供处理器提取。
pub fn routes<T, C, R, L, U>(
    threads: Arc<T>,
    comments: Arc<C>,
    replies: Arc<R>,
    likes: Arc<L>,
    users: Arc<U>,
) -> Router
where
    T: ThreadRepository + 'static,
    C: CommentRepository + 'static,
    R: ReplyRepository + 'static,
    L: LikeRepository + 'static,
    U: UserRepository + 'static,
{
    let public = Router::new()
        .route("/health", get(health_check))
        .route("/threads/{thread_id}", get(thread_handler::get_thread::<T, C, R>));

    let protected = Router::new()
        .route("/threads", post(thread_handler::create_thread::<T>))
        .route(
            "/threads/{thread_id}/comments",
            post(comment_handler::create_comment::<T, C>),
        )
        .route(
            "/threads/{thread_id}/comments/{comment_id}",
            delete(comment_handler::delete_comment::<T, C>),
        )
        .route(
            "/threads/{thread_id}/comments/{comment_id}/replies",
            post(reply_handler::create_reply::<T, C, R>),
        )
        .route(
            "/threads/{thread_id}/comments/{comment_id}/replies/{reply_id}",
            delete(reply_handler::delete_reply::<T, C, R>),
        )
        .route(
            "/threads/{thread_id}/comments/{comment_id}/likes",
            put(like_handler::put_like::<T, C, L>),
        )
        .route_layer(middleware::from_fn_with_state(
            AuthState { users },
            auth_middleware::<U>,
        ));

    public
        .merge(protected)
        .layer(Extension(threads))
        .layer(Extension(comments))
        .layer(Extension(replies))
        .layer(Extension(likes))
        .layer(TraceLayer::new_for_http())
}
