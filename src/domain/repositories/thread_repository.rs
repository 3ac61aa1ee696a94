// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::thread::{CreatedThread, NewThread, Thread};
use async_trait::async_trait;
use sea_orm::DbErr;
use thiserror::Error;

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    /// 记录未找到，消息面向调用方
    #[error("{0}")]
    NotFound(String),
    /// 调用方不是资源所有者
    #[error("{0}")]
    Forbidden(String),
}

/// 讨论串仓库特质
///
/// 定义讨论串数据访问接口
#[async_trait]
pub trait ThreadRepository: Send + Sync {
    /// 插入讨论串，返回生成的ID与标题
    async fn create(&self, thread: &NewThread, owner: &str)
        -> Result<CreatedThread, RepositoryError>;
    /// 校验讨论串存在，不存在时返回NotFound
    async fn verify_available_thread(&self, id: &str) -> Result<(), RepositoryError>;
    /// 根据ID读取讨论串（含作者用户名）
    async fn find_by_id(&self, id: &str) -> Result<Thread, RepositoryError>;
}
