// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 删除评论用例测试模块
///
/// 校验顺序固定：讨论串存在 → 评论存在 → 所有权 → 软删除

#[cfg(test)]
mod tests {
    use crate::unit::application::use_cases::mocks::{MockCommentRepo, MockThreadRepo};
    use forumrs::application::use_cases::delete_comment::DeleteCommentUseCase;
    use forumrs::application::use_cases::UseCaseError;
    use forumrs::domain::repositories::thread_repository::RepositoryError;
    use mockall::Sequence;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_checks_run_in_order_then_soft_delete() {
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
            .expect_verify_comment_owner()
            .withf(|id, owner| id == "comment-123" && owner == "user-123")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        comments
            .expect_soft_delete()
            .withf(|id| id == "comment-123")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let use_case = DeleteCommentUseCase::new(Arc::new(threads), Arc::new(comments));

        use_case
            .execute("thread-123", "comment-123", "user-123")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_non_owner_never_deletes() {
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
        comments.expect_verify_comment_owner().times(1).returning(|_, _| {
            Err(RepositoryError::Forbidden(
                "Anda tidak berhak mengakses resource ini".to_string(),
            ))
        });
        comments.expect_soft_delete().times(0);

        let use_case = DeleteCommentUseCase::new(Arc::new(threads), Arc::new(comments));

        let err = use_case
            .execute("thread-123", "comment-123", "user-999")
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            UseCaseError::Repository(RepositoryError::Forbidden(_))
        ));
        assert_eq!(err.to_string(), "Anda tidak berhak mengakses resource ini");
    }

    #[tokio::test]
    async fn test_missing_thread_skips_all_comment_checks() {
        let mut threads = MockThreadRepo::new();
        threads
            .expect_verify_available_thread()
            .times(1)
            .returning(|_| Err(RepositoryError::NotFound("thread tidak ditemukan".to_string())));

        let mut comments = MockCommentRepo::new();
        comments.expect_verify_available_comment().times(0);
        comments.expect_verify_comment_owner().times(0);
        comments.expect_soft_delete().times(0);

        let use_case = DeleteCommentUseCase::new(Arc::new(threads), Arc::new(comments));

        let err = use_case
            .execute("thread-404", "comment-123", "user-123")
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "thread tidak ditemukan");
    }
}
