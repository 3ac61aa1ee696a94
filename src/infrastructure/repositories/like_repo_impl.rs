// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::like::Like;
use crate::domain::repositories::like_repository::LikeRepository;
use crate::domain::repositories::thread_repository::RepositoryError;
use crate::infrastructure::database::entities::comment_like;
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;

/// 点赞仓库实现
#[derive(Clone)]
pub struct LikeRepoImpl {
    db: Arc<DatabaseConnection>,
}

impl LikeRepoImpl {
    /// 创建新的点赞仓库实现
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LikeRepository for LikeRepoImpl {
    async fn exists(&self, comment_id: &str, owner: &str) -> Result<bool, RepositoryError> {
        let row = comment_like::Entity::find()
            .filter(comment_like::Column::CommentId.eq(comment_id))
            .filter(comment_like::Column::Owner.eq(owner))
            .one(self.db.as_ref())
            .await?;

        Ok(row.is_some())
    }

    async fn create(&self, like: &Like) -> Result<(), RepositoryError> {
        let model = comment_like::ActiveModel {
            id: Set(like.id.clone()),
            comment_id: Set(like.comment_id.clone()),
            owner: Set(like.owner.clone()),
            is_deleted: Set(like.is_deleted),
        };

        model.insert(self.db.as_ref()).await?;

        Ok(())
    }

    async fn toggle(&self, comment_id: &str, owner: &str) -> Result<(), RepositoryError> {
        let row = comment_like::Entity::find()
            .filter(comment_like::Column::CommentId.eq(comment_id))
            .filter(comment_like::Column::Owner.eq(owner))
            .one(self.db.as_ref())
            .await?;

        // Missing row means nothing to flip; the use case inserts first
        let Some(model) = row else {
            return Ok(());
        };

        let flipped = !model.is_deleted;
        let mut active: comment_like::ActiveModel = model.into();
        active.is_deleted = Set(flipped);
        active.update(self.db.as_ref()).await?;

        Ok(())
    }
}
