// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::UseCaseError;
use crate::domain::repositories::comment_repository::CommentRepository;
use crate::domain::repositories::thread_repository::ThreadRepository;
use std::sync::Arc;

/// 删除评论用例
///
/// 校验顺序固定：讨论串存在 → 评论存在 → 调用方是所有者。
/// 删除是软删除，行保留以便聚合视图继续展示脱敏后的内容。
pub struct DeleteCommentUseCase<T, C>
where
    T: ThreadRepository,
    C: CommentRepository,
{
    threads: Arc<T>,
    comments: Arc<C>,
}

impl<T, C> DeleteCommentUseCase<T, C>
where
    T: ThreadRepository,
    C: CommentRepository,
{
    pub fn new(threads: Arc<T>, comments: Arc<C>) -> Self {
        Self { threads, comments }
    }

    pub async fn execute(
        &self,
        thread_id: &str,
        comment_id: &str,
        owner: &str,
    ) -> Result<(), UseCaseError> {
        self.threads.verify_available_thread(thread_id).await?;
        self.comments.verify_available_comment(comment_id).await?;
        self.comments.verify_comment_owner(comment_id, owner).await?;

        self.comments.soft_delete(comment_id).await?;

        Ok(())
    }
}
