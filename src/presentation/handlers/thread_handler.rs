// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::use_cases::add_thread::AddThreadUseCase;
use crate::application::use_cases::get_thread::GetThreadUseCase;
use crate::domain::repositories::comment_repository::CommentRepository;
use crate::domain::repositories::reply_repository::ReplyRepository;
use crate::domain::repositories::thread_repository::ThreadRepository;
use crate::presentation::errors::{AppError, JsonBody};
use crate::presentation::middleware::auth_middleware::CurrentUser;
use axum::{extract::Path, http::StatusCode, Extension, Json};
use serde_json::{json, Value};
use std::sync::Arc;

pub async fn create_thread<T: ThreadRepository + 'static>(
    Extension(threads): Extension<Arc<T>>,
    Extension(user): Extension<CurrentUser>,
    JsonBody(payload): JsonBody,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let use_case = AddThreadUseCase::new(threads);
    let added_thread = use_case.execute(&payload, &user.id).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "status": "success",
            "data": { "addedThread": added_thread },
        })),
    ))
}

pub async fn get_thread<T, C, R>(
    Extension(threads): Extension<Arc<T>>,
    Extension(comments): Extension<Arc<C>>,
    Extension(replies): Extension<Arc<R>>,
    Path(thread_id): Path<String>,
) -> Result<Json<Value>, AppError>
where
    T: ThreadRepository + 'static,
    C: CommentRepository + 'static,
    R: ReplyRepository + 'static,
{
    let use_case = GetThreadUseCase::new(threads, comments, replies);
    let thread = use_case.execute(&thread_id).await?;

    Ok(Json(json!({
        "status": "success",
        "data": { "thread": thread },
    })))
}
