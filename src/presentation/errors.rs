// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

use crate::application::use_cases::UseCaseError;
use crate::domain::repositories::thread_repository::RepositoryError;

/// 数据库等内部故障的对外统一提示
const INTERNAL_ERROR_MESSAGE: &str = "terjadi kegagalan pada server kami";

/// 应用错误类型
///
/// 封装所有可能的应用层错误，按错误种类映射HTTP状态码，
/// 响应体统一为失败信封 {"status":"fail","message":...}
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self.0.downcast_ref::<UseCaseError>() {
            Some(UseCaseError::Validation(_)) => StatusCode::BAD_REQUEST,
            Some(UseCaseError::Repository(RepositoryError::NotFound(_))) => StatusCode::NOT_FOUND,
            Some(UseCaseError::Repository(RepositoryError::Forbidden(_))) => StatusCode::FORBIDDEN,
            Some(UseCaseError::Repository(RepositoryError::Database(_))) | None => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("internal error: {:#}", self.0);
            INTERNAL_ERROR_MESSAGE.to_string()
        } else {
            self.0.to_string()
        };

        let body = Json(json!({ "status": "fail", "message": message }));
        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

/// 请求体提取器
///
/// 包装axum的`Json<Value>`提取：负载本身格式错误（非法JSON、
/// 错误的Content-Type）时也返回统一的失败信封，而不是axum默认的
/// 纯文本拒绝响应
pub struct JsonBody(pub Value);

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<Value>);

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<Value>::from_request(req, state).await {
            Ok(Json(payload)) => Ok(Self(payload)),
            Err(rejection) => Err((
                rejection.status(),
                Json(json!({ "status": "fail", "message": rejection.body_text() })),
            )),
        }
    }
}
