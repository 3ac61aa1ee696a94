// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::thread_repository::RepositoryError;
use crate::domain::models::reply::{CreatedReply, NewReply, Reply};
use async_trait::async_trait;

/// 回复仓库特质
///
/// 定义回复数据访问接口
#[async_trait]
pub trait ReplyRepository: Send + Sync {
    /// 在指定评论下插入回复
    async fn create(
        &self,
        reply: &NewReply,
        comment_id: &str,
        owner: &str,
    ) -> Result<CreatedReply, RepositoryError>;
    /// 批量读取多条评论的全部回复，按创建时间升序
    ///
    /// 一次查询返回扁平列表，每条回复携带其所属评论ID
    async fn find_by_comment_ids(&self, comment_ids: &[String])
        -> Result<Vec<Reply>, RepositoryError>;
    /// 校验回复存在
    async fn verify_available_reply(&self, id: &str) -> Result<(), RepositoryError>;
    /// 校验调用方是回复所有者，否则返回Forbidden
    async fn verify_reply_owner(&self, id: &str, owner: &str) -> Result<(), RepositoryError>;
    /// 软删除：置is_deleted标志，行保留
    async fn soft_delete(&self, id: &str) -> Result<(), RepositoryError>;
}
