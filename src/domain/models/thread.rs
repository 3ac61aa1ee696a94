// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::comment::CommentDetail;
use super::{require_string, DomainError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const SCOPE: &str = "THREAD";

/// 新建讨论串命令
///
/// 从原始JSON负载构造，构造即校验
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewThread {
    pub title: String,
    pub body: String,
}

impl NewThread {
    pub fn parse(payload: &Value) -> Result<Self, DomainError> {
        let title = require_string(payload, "title", SCOPE)?;
        let body = require_string(payload, "body", SCOPE)?;

        Ok(Self { title, body })
    }
}

/// 讨论串读取模型
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Thread {
    /// 讨论串唯一标识符
    pub id: String,
    /// 标题
    pub title: String,
    /// 正文
    pub body: String,
    /// 创建时间
    pub date: DateTime<Utc>,
    /// 作者用户名
    pub username: String,
}

/// 讨论串插入结果
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreatedThread {
    pub id: String,
    pub title: String,
    pub owner: String,
}

/// 讨论串聚合视图
///
/// 讨论串本体加上按时间升序排列的评论，
/// 每条评论携带自己的回复列表
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ThreadDetail {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: DateTime<Utc>,
    pub username: String,
    pub comments: Vec<CommentDetail>,
}

impl ThreadDetail {
    pub fn new(thread: Thread, comments: Vec<CommentDetail>) -> Self {
        Self {
            id: thread.id,
            title: thread.title,
            body: thread.body,
            date: thread.date,
            username: thread.username,
            comments,
        }
    }
}
