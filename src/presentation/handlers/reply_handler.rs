// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::use_cases::add_reply::AddReplyUseCase;
use crate::application::use_cases::delete_reply::DeleteReplyUseCase;
use crate::domain::repositories::comment_repository::CommentRepository;
use crate::domain::repositories::reply_repository::ReplyRepository;
use crate::domain::repositories::thread_repository::ThreadRepository;
use crate::presentation::errors::{AppError, JsonBody};
use crate::presentation::middleware::auth_middleware::CurrentUser;
use axum::{extract::Path, http::StatusCode, Extension, Json};
use serde_json::{json, Value};
use std::sync::Arc;

pub async fn create_reply<T, C, R>(
    Extension(threads): Extension<Arc<T>>,
    Extension(comments): Extension<Arc<C>>,
    Extension(replies): Extension<Arc<R>>,
    Extension(user): Extension<CurrentUser>,
    Path((thread_id, comment_id)): Path<(String, String)>,
    JsonBody(payload): JsonBody,
) -> Result<(StatusCode, Json<Value>), AppError>
where
    T: ThreadRepository + 'static,
    C: CommentRepository + 'static,
    R: ReplyRepository + 'static,
{
    let use_case = AddReplyUseCase::new(threads, comments, replies);
    let added_reply = use_case
        .execute(&payload, &thread_id, &comment_id, &user.id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "status": "success",
            "data": { "addedReply": added_reply },
        })),
    ))
}

pub async fn delete_reply<T, C, R>(
    Extension(threads): Extension<Arc<T>>,
    Extension(comments): Extension<Arc<C>>,
    Extension(replies): Extension<Arc<R>>,
    Extension(user): Extension<CurrentUser>,
    Path((thread_id, comment_id, reply_id)): Path<(String, String, String)>,
) -> Result<Json<Value>, AppError>
where
    T: ThreadRepository + 'static,
    C: CommentRepository + 'static,
    R: ReplyRepository + 'static,
{
    let use_case = DeleteReplyUseCase::new(threads, comments, replies);
    use_case
        .execute(&thread_id, &comment_id, &reply_id, &user.id)
        .await?;

    Ok(Json(json!({ "status": "success" })))
}
