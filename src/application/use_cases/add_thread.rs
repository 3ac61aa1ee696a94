// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::UseCaseError;
use crate::domain::models::thread::{CreatedThread, NewThread};
use crate::domain::repositories::thread_repository::ThreadRepository;
use serde_json::Value;
use std::sync::Arc;

pub struct AddThreadUseCase<T: ThreadRepository> {
    threads: Arc<T>,
}

impl<T: ThreadRepository> AddThreadUseCase<T> {
    pub fn new(threads: Arc<T>) -> Self {
        Self { threads }
    }

    pub async fn execute(
        &self,
        payload: &Value,
        owner: &str,
    ) -> Result<CreatedThread, UseCaseError> {
        let new_thread = NewThread::parse(payload)?;
        let created = self.threads.create(&new_thread, owner).await?;

        Ok(created)
    }
}
