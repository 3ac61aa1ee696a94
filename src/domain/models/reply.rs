// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::{require_string, DomainError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const SCOPE: &str = "REPLY";

/// 已删除回复在读取模型中的固定占位文本
pub const DELETED_REPLY_CONTENT: &str = "**balasan telah dihapus**";

/// 新建回复命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReply {
    pub content: String,
}

impl NewReply {
    pub fn parse(payload: &Value) -> Result<Self, DomainError> {
        let content = require_string(payload, "content", SCOPE)?;

        Ok(Self { content })
    }
}

/// 回复读取模型
///
/// 与评论相同的脱敏规则，占位文本不同
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reply {
    /// 回复唯一标识符
    pub id: String,
    /// 所属评论ID
    pub comment_id: String,
    /// 内容（已删除时为占位文本）
    pub content: String,
    /// 创建时间
    pub date: DateTime<Utc>,
    /// 作者用户名
    pub username: String,
}

impl Reply {
    pub fn new(
        id: String,
        comment_id: String,
        content: String,
        date: DateTime<Utc>,
        username: String,
        is_deleted: bool,
    ) -> Self {
        let content = if is_deleted {
            DELETED_REPLY_CONTENT.to_string()
        } else {
            content
        };

        Self {
            id,
            comment_id,
            content,
            date,
            username,
        }
    }
}

/// 回复插入结果
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreatedReply {
    pub id: String,
    pub content: String,
    pub owner: String,
}
