// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use forumrs::config::settings::Settings;
use forumrs::infrastructure::database::connection::create_pool;
use forumrs::infrastructure::repositories::comment_repo_impl::CommentRepoImpl;
use forumrs::infrastructure::repositories::like_repo_impl::LikeRepoImpl;
use forumrs::infrastructure::repositories::reply_repo_impl::ReplyRepoImpl;
use forumrs::infrastructure::repositories::thread_repo_impl::ThreadRepoImpl;
use forumrs::infrastructure::repositories::user_repo_impl::UserRepoImpl;
use forumrs::presentation::routes::routes;
use forumrs::utils::telemetry::init_telemetry;
use migration::{Migrator, MigratorTrait};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_telemetry();

    let settings = Settings::new()?;
    info!("configuration loaded");

    let db = Arc::new(create_pool(&settings.database).await?);
    Migrator::up(db.as_ref(), None).await?;
    info!("database migrations applied");

    let threads = Arc::new(ThreadRepoImpl::new(db.clone()));
    let comments = Arc::new(CommentRepoImpl::new(db.clone()));
    let replies = Arc::new(ReplyRepoImpl::new(db.clone()));
    let likes = Arc::new(LikeRepoImpl::new(db.clone()));
    let users = Arc::new(UserRepoImpl::new(db.clone()));

    let app = routes(threads, comments, replies, likes, users);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
