// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// 项目难度
///
/// 由星标数单调映射得到：EASY < MEDIUM < HARD
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "EASY"),
            Difficulty::Medium => write!(f, "MEDIUM"),
            Difficulty::Hard => write!(f, "HARD"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EASY" => Ok(Difficulty::Easy),
            "MEDIUM" => Ok(Difficulty::Medium),
            "HARD" => Ok(Difficulty::Hard),
            _ => Err(()),
        }
    }
}

/// 审核状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReviewStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ReviewStatus::Pending => write!(f, "PENDING"),
            ReviewStatus::Approved => write!(f, "APPROVED"),
            ReviewStatus::Rejected => write!(f, "REJECTED"),
        }
    }
}

impl FromStr for ReviewStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(ReviewStatus::Pending),
            "APPROVED" => Ok(ReviewStatus::Approved),
            "REJECTED" => Ok(ReviewStatus::Rejected),
            _ => Err(()),
        }
    }
}

/// 项目目录条目
///
/// 持久化的面向用户的项目列表单元，每个被接受的仓库对应一条。
/// 下载数与点赞数由其他子系统维护，采集只在新建时写入 0。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// 数据源名称
    pub source: String,
    /// 数据源内的标识
    pub source_id: String,
    /// 仓库地址，全局唯一
    pub source_url: String,
    pub owner: String,
    pub repo_name: String,
    /// 去掉版本后缀后的规范化名称
    pub base_name: String,
    pub branch: String,
    pub download_url: String,
    pub live_demo_url: Option<String>,
    pub stars: i32,
    pub forks: i32,
    pub language: Option<String>,
    pub tech_stack: Vec<String>,
    pub difficulty: Difficulty,
    pub topics: Vec<String>,
    pub domain_id: Uuid,
    pub case_study: String,
    pub problem_statement: String,
    pub solution_description: String,
    pub prerequisites: Vec<String>,
    pub deliverables: Vec<String>,
    pub download_count: i32,
    pub like_count: i32,
    pub is_active: bool,
    pub review_status: ReviewStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
