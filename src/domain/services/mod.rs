// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 采集流水线中不依赖 I/O 的业务规则：
/// - 分类器（classifier）：纳入/排除判定与难度分级
/// - 去重器（deduplicator）：版本后缀规范化与单次运行内去重
/// - 内容生成器（content_synthesizer）：按关键词查表生成叙事字段
/// - 关键词表（vocabulary）与叙事模板表（story_templates）
pub mod classifier;
pub mod content_synthesizer;
pub mod deduplicator;
pub mod story_templates;
pub mod vocabulary;
