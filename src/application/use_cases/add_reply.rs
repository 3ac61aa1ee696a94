// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::UseCaseError;
use crate::domain::models::reply::{CreatedReply, NewReply};
use crate::domain::repositories::comment_repository::CommentRepository;
use crate::domain::repositories::reply_repository::ReplyRepository;
use crate::domain::repositories::thread_repository::ThreadRepository;
use serde_json::Value;
use std::sync::Arc;

/// 新建回复用例
///
/// 评论必须存在且属于路径中的讨论串，这里显式校验，
/// 不依赖外键约束
pub struct AddReplyUseCase<T, C, R>
where
    T: ThreadRepository,
    C: CommentRepository,
    R: ReplyRepository,
{
    threads: Arc<T>,
    comments: Arc<C>,
    replies: Arc<R>,
}

impl<T, C, R> AddReplyUseCase<T, C, R>
where
    T: ThreadRepository,
    C: CommentRepository,
    R: ReplyRepository,
{
    pub fn new(threads: Arc<T>, comments: Arc<C>, replies: Arc<R>) -> Self {
        Self {
            threads,
            comments,
            replies,
        }
    }

    pub async fn execute(
        &self,
        payload: &Value,
        thread_id: &str,
        comment_id: &str,
        owner: &str,
    ) -> Result<CreatedReply, UseCaseError> {
        self.threads.verify_available_thread(thread_id).await?;
        self.comments.verify_available_comment(comment_id).await?;
        self.comments
            .verify_comment_in_thread(comment_id, thread_id)
            .await?;

        let new_reply = NewReply::parse(payload)?;
        let created = self.replies.create(&new_reply, comment_id, owner).await?;

        Ok(created)
    }
}
