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

use crate::domain::repositories::user_repository::UserRepository;
use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::Response,
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, warn};

/// 认证状态
pub struct AuthState<U> {
    /// 令牌到用户的解析仓库
    pub users: Arc<U>,
}

impl<U> Clone for AuthState<U> {
    fn clone(&self) -> Self {
        Self {
            users: self.users.clone(),
        }
    }
}

/// 请求中已认证的用户，由中间件注入请求扩展
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub id: String,
    pub username: String,
}

fn unauthorized(message: &str) -> (StatusCode, Json<Value>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "status": "fail", "message": message })),
    )
}

/// 认证中间件
///
/// 验证请求中的Bearer令牌并注入当前用户
///
/// # 参数
///
/// * `state` - 认证状态
/// * `req` - HTTP请求
/// * `next` - 下一个中间件
///
/// # 返回值
///
/// * `Ok(Response)` - 认证成功的响应
/// * `Err((StatusCode, Json))` - 认证失败的信封
pub async fn auth_middleware<U: UserRepository>(
    State(state): State<AuthState<U>>,
    mut req: Request,
    next: Next,
) -> Result<Response, (StatusCode, Json<Value>)> {
    debug!("AuthMiddleware processing path: {}", req.uri().path());

    let token = {
        let auth_header = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|header| header.to_str().ok())
            .ok_or_else(|| unauthorized("Missing authentication"))?;

        let Some(token) = auth_header.strip_prefix("Bearer ") else {
            return Err(unauthorized("Missing authentication"));
        };

        token.to_string()
    };

    match state.users.find_by_token(&token).await {
        Ok(Some(user)) => {
            req.extensions_mut().insert(CurrentUser {
                id: user.id,
                username: user.username,
            });
            Ok(next.run(req).await)
        }
        Ok(None) => {
            warn!("access token not recognized");
            Err(unauthorized("Invalid authentication"))
        }
        Err(e) => {
            tracing::error!("token lookup failed: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "status": "fail",
                    "message": "terjadi kegagalan pada server kami"
                })),
            ))
        }
    }
}
