// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 新建评论用例测试模块

#[cfg(test)]
mod tests {
    use crate::unit::application::use_cases::mocks::{MockCommentRepo, MockThreadRepo};
    use forumrs::application::use_cases::add_comment::AddCommentUseCase;
    use forumrs::application::use_cases::UseCaseError;
    use forumrs::domain::models::comment::CreatedComment;
    use forumrs::domain::repositories::thread_repository::RepositoryError;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_creates_comment_under_existing_thread() {
        let mut threads = MockThreadRepo::new();
        threads
            .expect_verify_available_thread()
            .withf(|id| id == "thread-123")
            .times(1)
            .returning(|_| Ok(()));

        let mut comments = MockCommentRepo::new();
        comments
            .expect_create()
            .withf(|comment, thread_id, owner| {
                comment.content == "sebuah komentar"
                    && thread_id == "thread-123"
                    && owner == "user-123"
            })
            .times(1)
            .returning(|comment, _, owner| {
                Ok(CreatedComment {
                    id: "comment-123".to_string(),
                    content: comment.content.clone(),
                    owner: owner.to_string(),
                })
            });

        let use_case = AddCommentUseCase::new(Arc::new(threads), Arc::new(comments));
        let payload = json!({ "content": "sebuah komentar" });

        let created = use_case
            .execute(&payload, "thread-123", "user-123")
            .await
            .unwrap();

        assert_eq!(created.id, "comment-123");
        assert_eq!(created.content, "sebuah komentar");
    }

    #[tokio::test]
    async fn test_missing_thread_short_circuits() {
        let mut threads = MockThreadRepo::new();
        threads
            .expect_verify_available_thread()
            .times(1)
            .returning(|_| Err(RepositoryError::NotFound("thread tidak ditemukan".to_string())));

        let mut comments = MockCommentRepo::new();
        comments.expect_create().times(0);

        let use_case = AddCommentUseCase::new(Arc::new(threads), Arc::new(comments));
        let payload = json!({ "content": "sebuah komentar" });

        let err = use_case
            .execute(&payload, "thread-404", "user-123")
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            UseCaseError::Repository(RepositoryError::NotFound(_))
        ));
        assert_eq!(err.to_string(), "thread tidak ditemukan");
    }

    #[tokio::test]
    async fn test_invalid_payload_fails_after_thread_check() {
        let mut threads = MockThreadRepo::new();
        threads
            .expect_verify_available_thread()
            .times(1)
            .returning(|_| Ok(()));

        let mut comments = MockCommentRepo::new();
        comments.expect_create().times(0);

        let use_case = AddCommentUseCase::new(Arc::new(threads), Arc::new(comments));
        let payload = json!({ "content": 42 });

        let err = use_case
            .execute(&payload, "thread-123", "user-123")
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "COMMENT.NOT_MEET_DATA_TYPE_SPECIFICATION");
    }
}
