// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::reply::{CreatedReply, NewReply, Reply};
use crate::domain::repositories::reply_repository::ReplyRepository;
use crate::domain::repositories::thread_repository::RepositoryError;
use crate::infrastructure::database::entities::{reply, user};
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::*;
use std::sync::Arc;
use uuid::Uuid;

const REPLY_NOT_FOUND: &str = "reply tidak ditemukan";
const NOT_REPLY_OWNER: &str = "Anda tidak berhak mengakses resource ini";

/// 回复仓库实现
#[derive(Clone)]
pub struct ReplyRepoImpl {
    db: Arc<DatabaseConnection>,
}

impl ReplyRepoImpl {
    /// 创建新的回复仓库实现
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReplyRepository for ReplyRepoImpl {
    async fn create(
        &self,
        new_reply: &NewReply,
        comment_id: &str,
        owner: &str,
    ) -> Result<CreatedReply, RepositoryError> {
        let id = format!("reply-{}", Uuid::new_v4());

        let model = reply::ActiveModel {
            id: Set(id.clone()),
            comment_id: Set(comment_id.to_string()),
            owner: Set(owner.to_string()),
            content: Set(new_reply.content.clone()),
            is_deleted: Set(false),
            date: Set(Utc::now().into()),
        };

        model.insert(self.db.as_ref()).await?;

        Ok(CreatedReply {
            id,
            content: new_reply.content.clone(),
            owner: owner.to_string(),
        })
    }

    async fn find_by_comment_ids(
        &self,
        comment_ids: &[String],
    ) -> Result<Vec<Reply>, RepositoryError> {
        if comment_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = reply::Entity::find()
            .filter(reply::Column::CommentId.is_in(comment_ids.to_vec()))
            .find_also_related(user::Entity)
            .order_by_asc(reply::Column::Date)
            .all(self.db.as_ref())
            .await?;

        Ok(rows
            .into_iter()
            .map(|(model, author)| {
                Reply::new(
                    model.id,
                    model.comment_id,
                    model.content,
                    model.date.into(),
                    author.map(|u| u.username).unwrap_or_default(),
                    model.is_deleted,
                )
            })
            .collect())
    }

    async fn verify_available_reply(&self, id: &str) -> Result<(), RepositoryError> {
        reply::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .map(|_| ())
            .ok_or_else(|| RepositoryError::NotFound(REPLY_NOT_FOUND.to_string()))
    }

    async fn verify_reply_owner(&self, id: &str, owner: &str) -> Result<(), RepositoryError> {
        reply::Entity::find_by_id(id)
            .filter(reply::Column::Owner.eq(owner))
            .one(self.db.as_ref())
            .await?
            .map(|_| ())
            .ok_or_else(|| RepositoryError::Forbidden(NOT_REPLY_OWNER.to_string()))
    }

    async fn soft_delete(&self, id: &str) -> Result<(), RepositoryError> {
        reply::Entity::update_many()
            .col_expr(reply::Column::IsDeleted, Expr::value(true))
            .filter(reply::Column::Id.eq(id))
            .exec(self.db.as_ref())
            .await?;

        Ok(())
    }
}
