// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// 写入模式
///
/// * `Replace` - 删除该领域下同一数据源的旧条目后重新插入
/// * `Incremental` - 按仓库地址原地更新，不删除旧条目
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RunMode {
    #[default]
    Replace,
    Incremental,
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RunMode::Replace => write!(f, "replace"),
            RunMode::Incremental => write!(f, "incremental"),
        }
    }
}

impl FromStr for RunMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "replace" => Ok(RunMode::Replace),
            "incremental" => Ok(RunMode::Incremental),
            _ => Err(()),
        }
    }
}

/// 流水线阶段
///
/// 单次运行的状态流转：
/// Idle → Fetching → Classifying → Synthesizing → Writing → Idle，
/// 任意不可恢复错误时进入 Failed，随后回到 Idle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PipelinePhase {
    #[default]
    Idle,
    Fetching,
    Classifying,
    Synthesizing,
    Writing,
    Failed,
}

impl fmt::Display for PipelinePhase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            PipelinePhase::Idle => "idle",
            PipelinePhase::Fetching => "fetching",
            PipelinePhase::Classifying => "classifying",
            PipelinePhase::Synthesizing => "synthesizing",
            PipelinePhase::Writing => "writing",
            PipelinePhase::Failed => "failed",
        };
        write!(f, "{}", name)
    }
}

/// 单次运行的汇总结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RunSummary {
    /// 抓取到的候选仓库总数
    pub total: usize,
    /// 实际写入的目录条目数
    pub saved: usize,
}

/// 单个领域在一次运行中的统计
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainRunStats {
    pub fetched: usize,
    pub included: usize,
    pub excluded: usize,
    pub duplicates: usize,
    pub saved: usize,
    pub fetch_failures: usize,
}

/// 运行报告，供状态接口展示
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// 触发来源：manual 或 scheduled
    pub trigger: String,
    /// 限定的数据源（None 表示全部）
    pub source: Option<String>,
    pub mode: RunMode,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub summary: Option<RunSummary>,
    pub domains: BTreeMap<String, DomainRunStats>,
    pub error: Option<String>,
}

impl RunReport {
    pub fn started(trigger: &str, source: Option<String>, mode: RunMode) -> Self {
        Self {
            trigger: trigger.to_string(),
            source,
            mode,
            started_at: Utc::now(),
            finished_at: None,
            summary: None,
            domains: BTreeMap::new(),
            error: None,
        }
    }
}
