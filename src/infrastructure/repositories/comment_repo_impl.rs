// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::comment::{Comment, CreatedComment, NewComment};
use crate::domain::repositories::comment_repository::CommentRepository;
use crate::domain::repositories::thread_repository::RepositoryError;
use crate::infrastructure::database::entities::{comment, comment_like, user};
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::*;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

const COMMENT_NOT_FOUND: &str = "Comment tidak ditemukan";
const COMMENT_NOT_IN_THREAD: &str = "Comment tidak ditemukan dalam thread";
const NOT_COMMENT_OWNER: &str = "Anda tidak berhak mengakses resource ini";

/// 评论仓库实现
#[derive(Clone)]
pub struct CommentRepoImpl {
    db: Arc<DatabaseConnection>,
}

impl CommentRepoImpl {
    /// 创建新的评论仓库实现
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CommentRepository for CommentRepoImpl {
    async fn create(
        &self,
        new_comment: &NewComment,
        thread_id: &str,
        owner: &str,
    ) -> Result<CreatedComment, RepositoryError> {
        let id = format!("comment-{}", Uuid::new_v4());

        let model = comment::ActiveModel {
            id: Set(id.clone()),
            thread_id: Set(thread_id.to_string()),
            owner: Set(owner.to_string()),
            content: Set(new_comment.content.clone()),
            is_deleted: Set(false),
            date: Set(Utc::now().into()),
        };

        model.insert(self.db.as_ref()).await?;

        Ok(CreatedComment {
            id,
            content: new_comment.content.clone(),
            owner: owner.to_string(),
        })
    }

    async fn verify_available_comment(&self, id: &str) -> Result<(), RepositoryError> {
        comment::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .map(|_| ())
            .ok_or_else(|| RepositoryError::NotFound(COMMENT_NOT_FOUND.to_string()))
    }

    async fn verify_comment_in_thread(
        &self,
        id: &str,
        thread_id: &str,
    ) -> Result<(), RepositoryError> {
        comment::Entity::find_by_id(id)
            .filter(comment::Column::ThreadId.eq(thread_id))
            .one(self.db.as_ref())
            .await?
            .map(|_| ())
            .ok_or_else(|| RepositoryError::NotFound(COMMENT_NOT_IN_THREAD.to_string()))
    }

    async fn find_by_thread_id(&self, thread_id: &str) -> Result<Vec<Comment>, RepositoryError> {
        let rows = comment::Entity::find()
            .filter(comment::Column::ThreadId.eq(thread_id))
            .find_also_related(user::Entity)
            .order_by_asc(comment::Column::Date)
            .all(self.db.as_ref())
            .await?;

        if rows.is_empty() {
            return Ok(Vec::new());
        }

        // Active like counts for the whole page of comments, one batched query
        let ids: Vec<String> = rows.iter().map(|(c, _)| c.id.clone()).collect();
        let likes = comment_like::Entity::find()
            .filter(comment_like::Column::CommentId.is_in(ids))
            .filter(comment_like::Column::IsDeleted.eq(false))
            .all(self.db.as_ref())
            .await?;

        let mut counts: HashMap<String, i64> = HashMap::new();
        for like in likes {
            *counts.entry(like.comment_id).or_insert(0) += 1;
        }

        Ok(rows
            .into_iter()
            .map(|(model, author)| {
                let like_count = counts.get(&model.id).copied().unwrap_or(0);
                Comment::new(
                    model.id,
                    author.map(|u| u.username).unwrap_or_default(),
                    model.date.into(),
                    model.content,
                    model.is_deleted,
                    like_count,
                )
            })
            .collect())
    }

    async fn verify_comment_owner(&self, id: &str, owner: &str) -> Result<(), RepositoryError> {
        comment::Entity::find_by_id(id)
            .filter(comment::Column::Owner.eq(owner))
            .one(self.db.as_ref())
            .await?
            .map(|_| ())
            .ok_or_else(|| RepositoryError::Forbidden(NOT_COMMENT_OWNER.to_string()))
    }

    async fn soft_delete(&self, id: &str) -> Result<(), RepositoryError> {
        comment::Entity::update_many()
            .col_expr(comment::Column::IsDeleted, Expr::value(true))
            .filter(comment::Column::Id.eq(id))
            .exec(self.db.as_ref())
            .await?;

        Ok(())
    }
}
