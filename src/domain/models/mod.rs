// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 候选仓库（candidate）：外部搜索得到的原始记录
/// - 目录条目（catalog_entry）：持久化的项目列表单元
/// - 项目领域（project_domain）：划分目录的顶层分类
/// - 采集运行（scrape_run）：流水线阶段、写入模式与运行报告
pub mod candidate;
pub mod catalog_entry;
pub mod project_domain;
pub mod scrape_run;
