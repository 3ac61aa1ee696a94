// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::user::User;
use crate::domain::repositories::thread_repository::RepositoryError;
use crate::domain::repositories::user_repository::UserRepository;
use crate::infrastructure::database::entities::{access_token, user};
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;

/// 用户仓库实现
#[derive(Clone)]
pub struct UserRepoImpl {
    db: Arc<DatabaseConnection>,
}

impl UserRepoImpl {
    /// 创建新的用户仓库实现
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserRepoImpl {
    async fn find_by_token(&self, token: &str) -> Result<Option<User>, RepositoryError> {
        let row = access_token::Entity::find_by_id(token)
            .find_also_related(user::Entity)
            .one(self.db.as_ref())
            .await?;

        Ok(row.and_then(|(_, owner)| owner).map(|u| User {
            id: u.id,
            username: u.username,
        }))
    }
}
