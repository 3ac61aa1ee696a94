// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 新建回复用例测试模块

#[cfg(test)]
mod tests {
    use crate::unit::application::use_cases::mocks::{
        MockCommentRepo, MockReplyRepo, MockThreadRepo,
    };
    use forumrs::application::use_cases::add_reply::AddReplyUseCase;
    use forumrs::domain::models::reply::CreatedReply;
    use forumrs::domain::repositories::thread_repository::RepositoryError;
    use mockall::Sequence;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_creates_reply_after_full_verification_chain() {
        let mut seq = Sequence::new();

        let mut threads = MockThreadRepo::new();
        threads
            .expect_verify_available_thread()
            .withf(|id| id == "thread-123")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let mut comments = MockCommentRepo::new();
        comments
            .expect_verify_available_comment()
            .withf(|id| id == "comment-123")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        comments
            .expect_verify_comment_in_thread()
            .withf(|id, thread_id| id == "comment-123" && thread_id == "thread-123")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));

        let mut replies = MockReplyRepo::new();
        replies
            .expect_create()
            .withf(|reply, comment_id, owner| {
                reply.content == "sebuah balasan"
                    && comment_id == "comment-123"
                    && owner == "user-123"
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|reply, _, owner| {
                Ok(CreatedReply {
                    id: "reply-123".to_string(),
                    content: reply.content.clone(),
                    owner: owner.to_string(),
                })
            });

        let use_case =
            AddReplyUseCase::new(Arc::new(threads), Arc::new(comments), Arc::new(replies));
        let payload = json!({ "content": "sebuah balasan" });

        let created = use_case
            .execute(&payload, "thread-123", "comment-123", "user-123")
            .await
            .unwrap();

        assert_eq!(created.id, "reply-123");
        assert_eq!(created.content, "sebuah balasan");
        assert_eq!(created.owner, "user-123");
    }

    #[tokio::test]
    async fn test_comment_outside_thread_blocks_creation() {
        let mut threads = MockThreadRepo::new();
        threads
            .expect_verify_available_thread()
            .times(1)
            .returning(|_| Ok(()));

        let mut comments = MockCommentRepo::new();
        comments
            .expect_verify_available_comment()
            .times(1)
            .returning(|_| Ok(()));
        comments.expect_verify_comment_in_thread().times(1).returning(|_, _| {
            Err(RepositoryError::NotFound(
                "Comment tidak ditemukan dalam thread".to_string(),
            ))
        });

        let mut replies = MockReplyRepo::new();
        replies.expect_create().times(0);

        let use_case =
            AddReplyUseCase::new(Arc::new(threads), Arc::new(comments), Arc::new(replies));
        let payload = json!({ "content": "sebuah balasan" });

        let err = use_case
            .execute(&payload, "thread-999", "comment-123", "user-123")
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Comment tidak ditemukan dalam thread");
    }
}
