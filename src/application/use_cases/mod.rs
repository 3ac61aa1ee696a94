// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::DomainError;
use crate::domain::repositories::thread_repository::RepositoryError;
use thiserror::Error;

/// 用例模块
///
/// 每个用例编排一个业务操作：按固定顺序执行存在性/所有权校验，
/// 任何一步失败立即中止后续步骤，错误原样传播到表示层。
///
/// 包含的用例：
/// - 新建讨论串（add_thread）
/// - 读取讨论串聚合（get_thread）
/// - 新建/删除评论（add_comment、delete_comment）
/// - 新建/删除回复（add_reply、delete_reply）
/// - 点赞切换（add_like）
pub mod add_comment;
pub mod add_like;
pub mod add_reply;
pub mod add_thread;
pub mod delete_comment;
pub mod delete_reply;
pub mod get_thread;

/// 用例错误类型
///
/// 统一封装负载校验错误与仓库错误，供表示层映射HTTP状态码
#[derive(Error, Debug)]
pub enum UseCaseError {
    /// 负载校验失败
    #[error(transparent)]
    Validation(#[from] DomainError),
    /// 仓库操作失败
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
