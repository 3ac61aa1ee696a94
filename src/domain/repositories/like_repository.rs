// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::thread_repository::RepositoryError;
use crate::domain::models::like::Like;
use async_trait::async_trait;

/// 点赞仓库特质
///
/// 点赞历史不删除：同一（用户，评论）对最多一行，
/// 后续操作只翻转该行的is_deleted标志
#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// 查询（用户，评论）对是否已有点赞记录
    async fn exists(&self, comment_id: &str, owner: &str) -> Result<bool, RepositoryError>;
    /// 插入新的点赞记录
    async fn create(&self, like: &Like) -> Result<(), RepositoryError>;
    /// 翻转已有记录的is_deleted标志
    async fn toggle(&self, comment_id: &str, owner: &str) -> Result<(), RepositoryError>;
}
