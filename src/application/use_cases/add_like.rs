// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::UseCaseError;
use crate::domain::models::like::Like;
use crate::domain::repositories::comment_repository::CommentRepository;
use crate::domain::repositories::like_repository::LikeRepository;
use crate::domain::repositories::thread_repository::ThreadRepository;
use std::sync::Arc;

/// 点赞切换用例
///
/// 每个（用户，评论）对的状态机：无记录 --点赞--> 已点赞
/// --点赞--> 已取消 --点赞--> 已点赞。只有一个入口操作：
/// 无记录时插入，有记录时翻转标志，历史不删除。
pub struct AddLikeUseCase<T, C, L>
where
    T: ThreadRepository,
    C: CommentRepository,
    L: LikeRepository,
{
    threads: Arc<T>,
    comments: Arc<C>,
    likes: Arc<L>,
}

impl<T, C, L> AddLikeUseCase<T, C, L>
where
    T: ThreadRepository,
    C: CommentRepository,
    L: LikeRepository,
{
    pub fn new(threads: Arc<T>, comments: Arc<C>, likes: Arc<L>) -> Self {
        Self {
            threads,
            comments,
            likes,
        }
    }

    pub async fn execute(
        &self,
        thread_id: &str,
        comment_id: &str,
        owner: &str,
    ) -> Result<(), UseCaseError> {
        self.threads.verify_available_thread(thread_id).await?;
        self.comments.verify_available_comment(comment_id).await?;
        self.comments
            .verify_comment_in_thread(comment_id, thread_id)
            .await?;

        if self.likes.exists(comment_id, owner).await? {
            self.likes.toggle(comment_id, owner).await?;
        } else {
            self.likes.create(&Like::new(comment_id, owner)).await?;
        }

        Ok(())
    }
}
