// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 点赞实体
///
/// 点赞是切换记录而不是普通的插入/删除：每个（用户，评论）对
/// 只有一行，之后的点赞/取消都只翻转该行的is_deleted标志。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Like {
    /// 点赞唯一标识符
    pub id: String,
    /// 被点赞的评论ID
    pub comment_id: String,
    /// 点赞用户ID
    pub owner: String,
    /// 取消标志，首次创建时为false
    pub is_deleted: bool,
}

impl Like {
    /// 创建一条新的点赞记录
    pub fn new(comment_id: &str, owner: &str) -> Self {
        Self {
            id: format!("like-{}", Uuid::new_v4()),
            comment_id: comment_id.to_string(),
            owner: owner.to_string(),
            is_deleted: false,
        }
    }
}
