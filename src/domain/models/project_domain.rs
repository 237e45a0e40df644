// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 项目领域
///
/// 用于划分目录条目的顶层分类，按 slug 幂等创建
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDomain {
    pub id: Uuid,
    pub slug: String,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 领域定义
///
/// 领域的静态描述及其在外部搜索 API 上使用的查询语句
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainSpec {
    pub slug: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub queries: Vec<String>,
}

impl DomainSpec {
    fn new(slug: &str, name: &str, description: &str, queries: &[&str]) -> Self {
        Self {
            slug: slug.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            queries: queries.iter().map(|q| q.to_string()).collect(),
        }
    }
}

/// YAML 领域文件的顶层结构
#[derive(Debug, Deserialize)]
struct DomainCatalogFile {
    domains: Vec<DomainSpec>,
}

/// 从 YAML 文件加载领域定义
pub fn load_domain_specs(path: &str) -> anyhow::Result<Vec<DomainSpec>> {
    let content = std::fs::read_to_string(path)?;
    let file: DomainCatalogFile = serde_yaml::from_str(&content)?;
    if file.domains.is_empty() {
        anyhow::bail!("domain catalog {} defines no domains", path);
    }
    Ok(file.domains)
}

/// 内置的默认领域集合
pub fn default_domain_specs() -> Vec<DomainSpec> {
    vec![
        DomainSpec::new(
            "web-development",
            "Web Development",
            "Full-stack and frontend web applications built with modern frameworks.",
            &[
                "web app in:name,description,topics",
                "ecommerce website",
                "chat application",
                "booking system",
            ],
        ),
        DomainSpec::new(
            "artificial-intelligence",
            "Artificial Intelligence",
            "Applications that put machine learning and language models to work.",
            &[
                "ai assistant app",
                "machine learning web app",
                "chatbot application",
            ],
        ),
        DomainSpec::new(
            "mobile-development",
            "Mobile Development",
            "Native and cross-platform mobile applications.",
            &["flutter app", "react native app", "android app"],
        ),
        DomainSpec::new(
            "data-science",
            "Data Science",
            "Dashboards, analytics platforms and data visualisation tools.",
            &["analytics dashboard", "data visualization app"],
        ),
        DomainSpec::new(
            "cybersecurity",
            "Cybersecurity",
            "Security tooling, scanners and privacy-focused applications.",
            &["password manager app", "vulnerability scanner", "security dashboard"],
        ),
        DomainSpec::new(
            "game-development",
            "Game Development",
            "Playable browser, desktop and mobile games.",
            &["browser game", "multiplayer game"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::io::Write;

    #[test]
    fn test_default_domains_have_unique_slugs_and_queries() {
        let specs = default_domain_specs();
        let slugs: HashSet<_> = specs.iter().map(|s| s.slug.as_str()).collect();
        assert_eq!(slugs.len(), specs.len());
        assert!(specs.iter().all(|s| !s.queries.is_empty()));
    }

    #[test]
    fn test_load_domain_specs_from_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "domains:\n  - slug: blockchain\n    name: Blockchain\n    description: Web3 apps\n    queries:\n      - dapp"
        )
        .unwrap();

        let specs = load_domain_specs(file.path().to_str().unwrap()).unwrap();
        assert_eq!(specs.len(), 1);
        assert_eq!(specs[0].slug, "blockchain");
        assert_eq!(specs[0].queries, vec!["dapp".to_string()]);
    }

    #[test]
    fn test_empty_domain_file_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "domains: []").unwrap();
        assert!(load_domain_specs(file.path().to_str().unwrap()).is_err());
    }
}
