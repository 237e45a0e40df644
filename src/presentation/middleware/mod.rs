// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 中间件模块
///
/// 采集触发接口的管理令牌校验
pub mod admin_auth_middleware;
