// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含采集流水线用例与数据传输对象
pub mod application;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含候选仓库、目录条目、分类与去重等核心业务逻辑
pub mod domain;

/// 基础设施模块
///
/// 提供数据库、缓存、指标与外部数据源集成
pub mod infrastructure;

/// 表示层模块
///
/// 处理HTTP请求和响应，包括路由、处理器和中间件
pub mod presentation;

/// 调度模块
///
/// 单次运行守卫与定时触发
pub mod scheduler;

/// 工具模块
pub mod utils;
