// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含采集子系统的核心业务逻辑，包括：
/// - 领域模型（models）：候选仓库、目录条目、领域与运行报告
/// - 仓库接口（repositories）：数据持久化抽象接口
/// - 服务（services）：分类、去重与内容生成
/// - 数据源（sources）：外部仓库搜索的抽象接口
///
/// 领域层不依赖于任何外部实现。
pub mod models;
pub mod repositories;
pub mod services;
pub mod sources;
