// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 缓存模块
///
/// 读接口使用的 TTL 内存缓存，写入后按键前缀失效
pub mod cache_manager;
pub mod cache_strategy;
