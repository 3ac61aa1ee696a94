// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.


pub mod add_comment_test;
pub mod add_reply_test;
pub mod delete_comment_test;
