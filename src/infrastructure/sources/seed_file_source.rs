// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::candidate::CandidateRepository;
use crate::domain::models::project_domain::DomainSpec;
use crate::domain::sources::source::{FetchError, RepositorySource, SourceBatch};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::info;

/// 人工整理的项目记录
#[derive(Debug, Clone, Deserialize)]
pub struct SeedProject {
    /// 所属领域 slug
    pub domain: String,
    pub name: String,
    pub owner: String,
    pub description: Option<String>,
    #[serde(default)]
    pub stars: u32,
    #[serde(default)]
    pub forks: u32,
    pub language: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    pub homepage: Option<String>,
    /// 缺省为 `https://github.com/{owner}/{name}`
    pub html_url: Option<String>,
    pub default_branch: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SeedFile {
    projects: Vec<SeedProject>,
}

impl SeedProject {
    fn to_candidate(&self, source: &str) -> CandidateRepository {
        let html_url = self
            .html_url
            .clone()
            .unwrap_or_else(|| format!("https://github.com/{}/{}", self.owner, self.name));

        CandidateRepository {
            identifier: format!("{}:{}/{}", source, self.owner, self.name).to_lowercase(),
            source: source.to_string(),
            name: self.name.clone(),
            owner: self.owner.clone(),
            description: self.description.clone(),
            stars: self.stars,
            forks: self.forks,
            language: self.language.clone(),
            topics: self.topics.clone(),
            homepage: self.homepage.clone(),
            html_url,
            default_branch: self
                .default_branch
                .clone()
                .unwrap_or_else(|| "main".to_string()),
            archived: false,
            disabled: false,
            curated: true,
            created_at: None,
            updated_at: None,
        }
    }
}

/// 人工整理项目数据源
///
/// 从 YAML 文件加载，候选仓库标记为 curated
pub struct SeedFileSource {
    projects: Vec<SeedProject>,
}

impl SeedFileSource {
    pub const NAME: &'static str = "curated";

    pub fn new(projects: Vec<SeedProject>) -> Self {
        Self { projects }
    }

    pub fn from_yaml_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let file: SeedFile = serde_yaml::from_str(&content)?;
        info!("Loaded {} curated projects from {}", file.projects.len(), path);
        Ok(Self::new(file.projects))
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

#[async_trait]
impl RepositorySource for SeedFileSource {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn kind(&self) -> &'static str {
        "seed_file"
    }

    fn is_curated(&self) -> bool {
        true
    }

    /// 在整理项目中做子串检索，按星标数降序分页
    async fn fetch_page(
        &self,
        query: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<CandidateRepository>, FetchError> {
        let query = query.to_lowercase();
        let mut matches: Vec<CandidateRepository> = self
            .projects
            .iter()
            .map(|project| project.to_candidate(Self::NAME))
            .filter(|candidate| candidate.searchable_text().contains(&query))
            .collect();
        matches.sort_by(|a, b| b.stars.cmp(&a.stars));

        let per_page = per_page.max(1) as usize;
        let skip = page.saturating_sub(1) as usize * per_page;
        Ok(matches.into_iter().skip(skip).take(per_page).collect())
    }

    async fn collect(&self, domain: &DomainSpec) -> SourceBatch {
        let candidates = self
            .projects
            .iter()
            .filter(|project| project.domain == domain.slug)
            .map(|project| project.to_candidate(Self::NAME))
            .collect();

        SourceBatch {
            candidates,
            failures: Vec::new(),
        }
    }
}
