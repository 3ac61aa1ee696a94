// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据库实体模块
///
/// sea-orm实体定义，与migration中的表结构一一对应
pub mod access_token;
pub mod comment;
pub mod comment_like;
pub mod reply;
pub mod thread;
pub mod user;
