// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::thread_repository::RepositoryError;
use crate::domain::models::comment::{Comment, CreatedComment, NewComment};
use async_trait::async_trait;

/// 评论仓库特质
///
/// 定义评论数据访问接口
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// 在指定讨论串下插入评论
    async fn create(
        &self,
        comment: &NewComment,
        thread_id: &str,
        owner: &str,
    ) -> Result<CreatedComment, RepositoryError>;
    /// 校验评论存在
    async fn verify_available_comment(&self, id: &str) -> Result<(), RepositoryError>;
    /// 校验评论属于指定讨论串
    async fn verify_comment_in_thread(
        &self,
        id: &str,
        thread_id: &str,
    ) -> Result<(), RepositoryError>;
    /// 按创建时间升序读取讨论串下的全部评论
    ///
    /// 软删除的评论保留在结果中，内容已脱敏；点赞数只统计有效点赞
    async fn find_by_thread_id(&self, thread_id: &str) -> Result<Vec<Comment>, RepositoryError>;
    /// 校验调用方是评论所有者，否则返回Forbidden
    async fn verify_comment_owner(&self, id: &str, owner: &str) -> Result<(), RepositoryError>;
    /// 软删除：置is_deleted标志，行保留
    async fn soft_delete(&self, id: &str) -> Result<(), RepositoryError>;
}
