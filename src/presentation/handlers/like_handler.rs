// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::use_cases::add_like::AddLikeUseCase;
use crate::domain::repositories::comment_repository::CommentRepository;
use crate::domain::repositories::like_repository::LikeRepository;
use crate::domain::repositories::thread_repository::ThreadRepository;
use crate::presentation::errors::AppError;
use crate::presentation::middleware::auth_middleware::CurrentUser;
use axum::{extract::Path, Extension, Json};
use serde_json::{json, Value};
use std::sync::Arc;

pub async fn put_like<T, C, L>(
    Extension(threads): Extension<Arc<T>>,
    Extension(comments): Extension<Arc<C>>,
    Extension(likes): Extension<Arc<L>>,
    Extension(user): Extension<CurrentUser>,
    Path((thread_id, comment_id)): Path<(String, String)>,
) -> Result<Json<Value>, AppError>
where
    T: ThreadRepository + 'static,
    C: CommentRepository + 'static,
    L: LikeRepository + 'static,
{
    let use_case = AddLikeUseCase::new(threads, comments, likes);
    use_case.execute(&thread_id, &comment_id, &user.id).await?;

    Ok(Json(json!({ "status": "success" })))
}
