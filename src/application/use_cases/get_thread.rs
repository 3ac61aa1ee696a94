// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::UseCaseError;
use crate::domain::models::reply::Reply;
use crate::domain::models::thread::ThreadDetail;
use crate::domain::repositories::comment_repository::CommentRepository;
use crate::domain::repositories::reply_repository::ReplyRepository;
use crate::domain::repositories::thread_repository::ThreadRepository;
use std::collections::HashMap;
use std::sync::Arc;

/// 读取讨论串聚合用例
///
/// 把讨论串、评论和嵌套回复组装成一个结果：
/// 两级都按创建时间升序，软删除的条目保留但内容已脱敏。
pub struct GetThreadUseCase<T, C, R>
where
    T: ThreadRepository,
    C: CommentRepository,
    R: ReplyRepository,
{
    threads: Arc<T>,
    comments: Arc<C>,
    replies: Arc<R>,
}

impl<T, C, R> GetThreadUseCase<T, C, R>
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

    pub async fn execute(&self, thread_id: &str) -> Result<ThreadDetail, UseCaseError> {
        // Existence check fails the whole request before any further I/O
        self.threads.verify_available_thread(thread_id).await?;

        let thread = self.threads.find_by_id(thread_id).await?;
        let comments = self.comments.find_by_thread_id(thread_id).await?;

        let comment_ids: Vec<String> = comments.iter().map(|c| c.id.clone()).collect();
        let replies = self.replies.find_by_comment_ids(&comment_ids).await?;

        // Single pass: replies keyed by comment id; replies pointing at a
        // comment outside this thread page are silently dropped
        let mut grouped: HashMap<String, Vec<Reply>> = HashMap::new();
        for reply in replies {
            grouped.entry(reply.comment_id.clone()).or_default().push(reply);
        }

        let comments = comments
            .into_iter()
            .map(|comment| {
                let replies = grouped.remove(&comment.id).unwrap_or_default();
                comment.with_replies(replies)
            })
            .collect();

        Ok(ThreadDetail::new(thread, comments))
    }
}
