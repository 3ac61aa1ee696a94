// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::thread_repository::RepositoryError;
use crate::domain::models::user::User;
use async_trait::async_trait;

/// 用户仓库特质
///
/// 供认证中间件把Bearer令牌解析为用户；令牌签发在外部服务
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 根据访问令牌查找用户
    async fn find_by_token(&self, token: &str) -> Result<Option<User>, RepositoryError>;
}
