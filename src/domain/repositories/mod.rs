// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 该模块定义了领域层的仓库接口，遵循依赖倒置原则。
/// 仓库接口定义了数据持久化的抽象契约，具体实现由基础设施层提供。
///
/// 包含的仓库接口：
/// - 讨论串仓库（thread_repository）：讨论串的创建、存在性校验与读取
/// - 评论仓库（comment_repository）：评论的创建、校验、读取与软删除
/// - 回复仓库（reply_repository）：回复的创建、批量读取、校验与软删除
/// - 点赞仓库（like_repository）：点赞切换记录的查询、创建与翻转
/// - 用户仓库（user_repository）：通过访问令牌解析用户
///
/// 这些接口确保了领域层不依赖于具体的数据存储技术，
/// 提高了系统的可测试性和可维护性.
pub mod comment_repository;
pub mod like_repository;
pub mod reply_repository;
pub mod thread_repository;
pub mod user_repository;
