// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 候选仓库
///
/// 从外部代码托管平台搜索得到、尚未分类的原始记录。
/// 每次运行重新抓取，不会原样持久化。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateRepository {
    /// 带来源前缀的唯一标识，例如 `github:12345`
    pub identifier: String,
    /// 来源名称（github、curated 等）
    pub source: String,
    /// 仓库名称
    pub name: String,
    /// 所有者登录名
    pub owner: String,
    /// 仓库描述
    pub description: Option<String>,
    /// 星标数
    pub stars: u32,
    /// Fork 数
    pub forks: u32,
    /// 主要编程语言
    pub language: Option<String>,
    /// 主题标签
    pub topics: Vec<String>,
    /// 项目主页（在线演示）
    pub homepage: Option<String>,
    /// 仓库页面地址
    pub html_url: String,
    /// 默认分支
    pub default_branch: String,
    /// 是否已归档
    pub archived: bool,
    /// 是否已禁用
    pub disabled: bool,
    /// 是否来自人工整理的数据源
    pub curated: bool,
    /// 创建时间
    pub created_at: Option<DateTime<Utc>>,
    /// 最近更新时间
    pub updated_at: Option<DateTime<Utc>>,
}

impl CandidateRepository {
    /// `owner/name` 形式的完整名称
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }

    /// 默认分支的 zip 下载地址
    pub fn download_url(&self) -> String {
        format!(
            "{}/archive/refs/heads/{}.zip",
            self.html_url.trim_end_matches('/'),
            self.default_branch
        )
    }

    /// 可用的在线演示地址，空字符串视为缺失
    pub fn live_demo_url(&self) -> Option<String> {
        self.homepage
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(ToString::to_string)
    }

    /// 由仓库名生成的展示标题，例如 `recipe-sharing_app` → `Recipe Sharing App`
    pub fn display_title(&self) -> String {
        self.name
            .split(['-', '_', '.', ' '])
            .filter(|part| !part.is_empty())
            .map(|part| {
                let mut chars = part.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// 名称、描述与主题拼接后的小写文本，用于关键词匹配
    pub fn searchable_text(&self) -> String {
        let mut text = self.name.to_lowercase();
        if let Some(description) = &self.description {
            text.push(' ');
            text.push_str(&description.to_lowercase());
        }
        for topic in &self.topics {
            text.push(' ');
            text.push_str(&topic.to_lowercase());
        }
        text
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::CandidateRepository;

    /// 构造一个满足基本纳入条件的候选仓库
    pub fn candidate(name: &str, description: &str, stars: u32) -> CandidateRepository {
        CandidateRepository {
            identifier: format!("github:{}", name),
            source: "github".to_string(),
            name: name.to_string(),
            owner: "octocat".to_string(),
            description: Some(description.to_string()),
            stars,
            forks: stars / 10,
            language: Some("JavaScript".to_string()),
            topics: Vec::new(),
            homepage: None,
            html_url: format!("https://github.com/octocat/{}", name),
            default_branch: "main".to_string(),
            archived: false,
            disabled: false,
            curated: false,
            created_at: None,
            updated_at: None,
        }
    }
}
