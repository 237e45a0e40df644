// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据源实现模块
///
/// - GitHub 仓库搜索（github_source）
/// - 人工整理的 YAML 项目列表（seed_file_source）
pub mod github_source;
pub mod seed_file_source;
