// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::UseCaseError;
use crate::domain::repositories::comment_repository::CommentRepository;
use crate::domain::repositories::reply_repository::ReplyRepository;
use crate::domain::repositories::thread_repository::ThreadRepository;
use std::sync::Arc;

/// 删除回复用例
///
/// 校验顺序固定：讨论串存在 → 评论存在 → 评论属于讨论串 →
/// 回复存在 → 调用方是回复所有者，然后软删除
pub struct DeleteReplyUseCase<T, C, R>
where
    T: ThreadRepository,
    C: CommentRepository,
    R: ReplyRepository,
{
    threads: Arc<T>,
    comments: Arc<C>,
    replies: Arc<R>,
}

impl<T, C, R> DeleteReplyUseCase<T, C, R>
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
        thread_id: &str,
        comment_id: &str,
        reply_id: &str,
        owner: &str,
    ) -> Result<(), UseCaseError> {
        self.threads.verify_available_thread(thread_id).await?;
        self.comments.verify_available_comment(comment_id).await?;
        self.comments
            .verify_comment_in_thread(comment_id, thread_id)
            .await?;
        self.replies.verify_available_reply(reply_id).await?;
        self.replies.verify_reply_owner(reply_id, owner).await?;

        self.replies.soft_delete(reply_id).await?;

        Ok(())
    }
}
