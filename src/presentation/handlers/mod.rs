// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// HTTP请求处理器模块
///
/// 包含各个API端点的具体处理逻辑
/// 每个处理器负责提取凭证与参数、执行用例并包装成功信封
pub mod comment_handler;
pub mod like_handler;
pub mod reply_handler;
pub mod thread_handler;
