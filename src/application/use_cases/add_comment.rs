// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::UseCaseError;
use crate::domain::models::comment::{CreatedComment, NewComment};
use crate::domain::repositories::comment_repository::CommentRepository;
use crate::domain::repositories::thread_repository::ThreadRepository;
use serde_json::Value;
use std::sync::Arc;

pub struct AddCommentUseCase<T, C>
where
    T: ThreadRepository,
    C: CommentRepository,
{
    threads: Arc<T>,
    comments: Arc<C>,
}

impl<T, C> AddCommentUseCase<T, C>
where
    T: ThreadRepository,
    C: CommentRepository,
{
    pub fn new(threads: Arc<T>, comments: Arc<C>) -> Self {
        Self { threads, comments }
    }

    pub async fn execute(
        &self,
        payload: &Value,
        thread_id: &str,
        owner: &str,
    ) -> Result<CreatedComment, UseCaseError> {
        self.threads.verify_available_thread(thread_id).await?;

        let new_comment = NewComment::parse(payload)?;
        let created = self.comments.create(&new_comment, thread_id, owner).await?;

        Ok(created)
    }
}
