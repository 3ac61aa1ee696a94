// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库实现模块
///
/// 领域仓库接口的sea-orm实现，每个方法对应一条SQL语句
pub mod comment_repo_impl;
pub mod like_repo_impl;
pub mod reply_repo_impl;
pub mod thread_repo_impl;
pub mod user_repo_impl;
