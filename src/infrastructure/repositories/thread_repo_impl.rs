// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::thread::{CreatedThread, NewThread, Thread};
use crate::domain::repositories::thread_repository::{RepositoryError, ThreadRepository};
use crate::infrastructure::database::entities::{thread, user};
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::*;
use std::sync::Arc;
use uuid::Uuid;

const THREAD_NOT_FOUND: &str = "thread tidak ditemukan";

/// 讨论串仓库实现
#[derive(Clone)]
pub struct ThreadRepoImpl {
    db: Arc<DatabaseConnection>,
}

impl ThreadRepoImpl {
    /// 创建新的讨论串仓库实现
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ThreadRepository for ThreadRepoImpl {
    async fn create(
        &self,
        new_thread: &NewThread,
        owner: &str,
    ) -> Result<CreatedThread, RepositoryError> {
        let id = format!("thread-{}", Uuid::new_v4());

        let model = thread::ActiveModel {
            id: Set(id.clone()),
            title: Set(new_thread.title.clone()),
            body: Set(new_thread.body.clone()),
            owner: Set(owner.to_string()),
            date: Set(Utc::now().into()),
        };

        model.insert(self.db.as_ref()).await?;

        Ok(CreatedThread {
            id,
            title: new_thread.title.clone(),
            owner: owner.to_string(),
        })
    }

    async fn verify_available_thread(&self, id: &str) -> Result<(), RepositoryError> {
        thread::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .map(|_| ())
            .ok_or_else(|| RepositoryError::NotFound(THREAD_NOT_FOUND.to_string()))
    }

    async fn find_by_id(&self, id: &str) -> Result<Thread, RepositoryError> {
        let row = thread::Entity::find_by_id(id)
            .find_also_related(user::Entity)
            .one(self.db.as_ref())
            .await?;

        match row {
            Some((model, author)) => Ok(Thread {
                id: model.id,
                title: model.title,
                body: model.body,
                date: model.date.into(),
                username: author.map(|u| u.username).unwrap_or_default(),
            }),
            None => Err(RepositoryError::NotFound(THREAD_NOT_FOUND.to_string())),
        }
    }
}
