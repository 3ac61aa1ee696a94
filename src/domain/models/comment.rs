// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::reply::Reply;
use super::{require_string, DomainError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const SCOPE: &str = "COMMENT";

/// 已删除评论在读取模型中的固定占位文本
pub const DELETED_COMMENT_CONTENT: &str = "**komentar telah dihapus**";

/// 新建评论命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub content: String,
}

impl NewComment {
    pub fn parse(payload: &Value) -> Result<Self, DomainError> {
        let content = require_string(payload, "content", SCOPE)?;

        Ok(Self { content })
    }
}

/// 评论读取模型
///
/// 软删除的评论不会被过滤掉，而是在构造时把内容替换为
/// 固定占位文本。脱敏只发生一次，对象上不可逆。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Comment {
    /// 评论唯一标识符
    pub id: String,
    /// 作者用户名
    pub username: String,
    /// 创建时间
    pub date: DateTime<Utc>,
    /// 内容（已删除时为占位文本）
    pub content: String,
    /// 有效点赞数（不含已取消的点赞）
    #[serde(rename = "likeCount")]
    pub like_count: i64,
}

impl Comment {
    pub fn new(
        id: String,
        username: String,
        date: DateTime<Utc>,
        content: String,
        is_deleted: bool,
        like_count: i64,
    ) -> Self {
        let content = if is_deleted {
            DELETED_COMMENT_CONTENT.to_string()
        } else {
            content
        };

        Self {
            id,
            username,
            date,
            content,
            like_count,
        }
    }

    /// 附加回复列表，生成聚合视图中的评论节点
    pub fn with_replies(self, replies: Vec<Reply>) -> CommentDetail {
        CommentDetail {
            id: self.id,
            username: self.username,
            date: self.date,
            content: self.content,
            like_count: self.like_count,
            replies,
        }
    }
}

/// 评论插入结果
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreatedComment {
    pub id: String,
    pub content: String,
    pub owner: String,
}

/// 聚合视图中的评论节点
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CommentDetail {
    pub id: String,
    pub username: String,
    pub date: DateTime<Utc>,
    pub content: String,
    #[serde(rename = "likeCount")]
    pub like_count: i64,
    pub replies: Vec<Reply>,
}
