// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::use_cases::add_comment::AddCommentUseCase;
use crate::application::use_cases::delete_comment::DeleteCommentUseCase;
use crate::domain::repositories::comment_repository::CommentRepository;
use crate::domain::repositories::thread_repository::ThreadRepository;
use crate::presentation::errors::{AppError, JsonBody};
use crate::presentation::middleware::auth_middleware::CurrentUser;
use axum::{extract::Path, http::StatusCode, Extension, Json};
use serde_json::{json, Value};
use std::sync::Arc;

pub async fn create_comment<T, C>(
    Extension(threads): Extension<Arc<T>>,
    Extension(comments): Extension<Arc<C>>,
    Extension(user): Extension<CurrentUser>,
    Path(thread_id): Path<String>,
    JsonBody(payload): JsonBody,
) -> Result<(StatusCode, Json<Value>), AppError>
where
    T: ThreadRepository + 'static,
    C: CommentRepository + 'static,
{
    let use_case = AddCommentUseCase::new(threads, comments);
    let added_comment = use_case.execute(&payload, &thread_id, &user.id).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "status": "success",
            "data": { "addedComment": added_comment },
        })),
    ))
}

pub async fn delete_comment<T, C>(
    Extension(threads): Extension<Arc<T>>,
    Extension(comments): Extension<Arc<C>>,
    Extension(user): Extension<CurrentUser>,
    Path((thread_id, comment_id)): Path<(String, String)>,
) -> Result<Json<Value>, AppError>
where
    T: ThreadRepository + 'static,
    C: CommentRepository + 'static,
{
    let use_case = DeleteCommentUseCase::new(threads, comments);
    use_case.execute(&thread_id, &comment_id, &user.id).await?;

    Ok(Json(json!({ "status": "success" })))
}
