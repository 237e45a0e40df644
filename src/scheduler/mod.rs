// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 调度模块
///
/// 采集运行的重入保护与定时触发
pub mod scrape_scheduler;
pub mod state;
