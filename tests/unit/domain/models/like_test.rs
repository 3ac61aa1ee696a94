// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 点赞实体测试模块

#[cfg(test)]
mod tests {
    use forumrs::domain::models::like::Like;

    #[test]
    fn test_new_like_starts_active() {
        let like = Like::new("comment-123", "user-456");

        assert!(like.id.starts_with("like-"));
        assert_eq!(like.comment_id, "comment-123");
        assert_eq!(like.owner, "user-456");
        assert!(!like.is_deleted);
    }

    #[test]
    fn test_new_like_ids_are_unique() {
        let a = Like::new("comment-123", "user-456");
        let b = Like::new("comment-123", "user-456");

        assert_ne!(a.id, b.id);
    }
}
