// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde_json::Value;
use thiserror::Error;

/// 领域模型模块
///
/// 包含的模型：
/// - 讨论串（thread）：顶层讨论主题
/// - 评论（comment）：讨论串下的一级回复
/// - 回复（reply）：评论下的二级回复
/// - 点赞（like）：针对评论的点赞切换记录
/// - 用户（user）：发起操作的已认证用户
pub mod comment;
pub mod like;
pub mod reply;
pub mod thread;
pub mod user;

/// 领域校验错误
///
/// 请求负载在进入持久化层之前由命令构造函数校验，
/// 错误码与负载所属的业务范围（THREAD/COMMENT/REPLY）组合
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// 负载缺少必需属性
    #[error("{0}.NOT_CONTAIN_NEEDED_PROPERTY")]
    NotContainNeededProperty(&'static str),
    /// 负载属性类型不符合规范
    #[error("{0}.NOT_MEET_DATA_TYPE_SPECIFICATION")]
    NotMeetDataTypeSpecification(&'static str),
}

/// 从原始JSON负载中取出必填字符串字段
///
/// 缺失、null或空字符串视为缺少属性，非字符串视为类型错误
pub(crate) fn require_string(
    payload: &Value,
    field: &str,
    scope: &'static str,
) -> Result<String, DomainError> {
    match payload.get(field) {
        None | Some(Value::Null) => Err(DomainError::NotContainNeededProperty(scope)),
        Some(Value::String(s)) if s.is_empty() => {
            Err(DomainError::NotContainNeededProperty(scope))
        }
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(DomainError::NotMeetDataTypeSpecification(scope)),
    }
}
