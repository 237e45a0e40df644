// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 用例模块
///
/// 采集流水线：抓取、分类、去重、生成内容、写入
pub mod scrape_pipeline;
