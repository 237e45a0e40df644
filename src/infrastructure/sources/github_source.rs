// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::config::settings::GithubSettings;
use crate::domain::models::candidate::CandidateRepository;
use crate::domain::models::project_domain::DomainSpec;
use crate::domain::sources::source::{FetchError, PageFailure, RepositorySource, SourceBatch};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, warn};

/// GitHub 数据源配置
#[derive(Debug, Clone)]
pub struct GithubSourceConfig {
    pub api_base: String,
    pub token: String,
    pub user_agent: String,
    pub per_page: u32,
    pub max_pages: u32,
    pub page_delay: Duration,
    pub query_delay: Duration,
    pub timeout: Duration,
}

impl GithubSourceConfig {
    pub fn from_settings(settings: &GithubSettings, token: &str) -> Self {
        Self {
            api_base: settings.api_base.trim_end_matches('/').to_string(),
            token: token.to_string(),
            user_agent: settings.user_agent.clone(),
            per_page: settings.per_page,
            max_pages: settings.max_pages,
            page_delay: Duration::from_millis(settings.page_delay_ms),
            query_delay: Duration::from_millis(settings.query_delay_ms),
            timeout: Duration::from_secs(settings.timeout_secs),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<RepoItem>,
}

#[derive(Debug, Deserialize)]
struct RepoOwner {
    login: String,
}

#[derive(Debug, Deserialize)]
struct RepoItem {
    id: u64,
    name: String,
    owner: RepoOwner,
    description: Option<String>,
    #[serde(default)]
    stargazers_count: u32,
    #[serde(default)]
    forks_count: u32,
    language: Option<String>,
    #[serde(default)]
    topics: Vec<String>,
    homepage: Option<String>,
    html_url: String,
    #[serde(default = "default_branch")]
    default_branch: String,
    #[serde(default)]
    archived: bool,
    #[serde(default)]
    disabled: bool,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
}

fn default_branch() -> String {
    "main".to_string()
}

impl From<RepoItem> for CandidateRepository {
    fn from(item: RepoItem) -> Self {
        Self {
            identifier: format!("github:{}", item.id),
            source: GithubSource::NAME.to_string(),
            name: item.name,
            owner: item.owner.login,
            description: item.description,
            stars: item.stargazers_count,
            forks: item.forks_count,
            language: item.language,
            topics: item.topics,
            homepage: item.homepage,
            html_url: item.html_url,
            default_branch: item.default_branch,
            archived: item.archived,
            disabled: item.disabled,
            curated: false,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

/// GitHub 仓库搜索数据源
///
/// 逐查询、逐页顺序请求 `/search/repositories`，页间与查询间使用固定延迟
pub struct GithubSource {
    client: reqwest::Client,
    config: GithubSourceConfig,
}

impl GithubSource {
    pub const NAME: &'static str = "github";

    pub fn new(config: GithubSourceConfig) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", config.token))?,
        );

        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self { client, config })
    }

    fn is_rate_limited(status: StatusCode, headers: &HeaderMap) -> bool {
        if status == StatusCode::TOO_MANY_REQUESTS {
            return true;
        }
        status == StatusCode::FORBIDDEN
            && headers
                .get("x-ratelimit-remaining")
                .and_then(|value| value.to_str().ok())
                .map(|value| value.trim() == "0")
                .unwrap_or(false)
    }
}

#[async_trait]
impl RepositorySource for GithubSource {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn kind(&self) -> &'static str {
        "github_search"
    }

    async fn fetch_page(
        &self,
        query: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<CandidateRepository>, FetchError> {
        let url = format!("{}/search/repositories", self.config.api_base);
        let per_page = per_page.to_string();
        let page = page.to_string();

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", query),
                ("sort", "stars"),
                ("order", "desc"),
                ("per_page", per_page.as_str()),
                ("page", page.as_str()),
            ])
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if Self::is_rate_limited(status, response.headers()) {
            return Err(FetchError::RateLimited);
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                message: message.chars().take(200).collect(),
            });
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;

        Ok(body.items.into_iter().map(Into::into).collect())
    }

    async fn collect(&self, domain: &DomainSpec) -> SourceBatch {
        let mut batch = SourceBatch::default();

        for (index, query) in domain.queries.iter().enumerate() {
            if index > 0 && !self.config.query_delay.is_zero() {
                tokio::time::sleep(self.config.query_delay).await;
            }

            for page in 1..=self.config.max_pages {
                if page > 1 && !self.config.page_delay.is_zero() {
                    tokio::time::sleep(self.config.page_delay).await;
                }

                match self.fetch_page(query, page, self.config.per_page).await {
                    Ok(items) => {
                        let count = items.len();
                        debug!(
                            "GitHub query '{}' page {} returned {} repositories",
                            query, page, count
                        );
                        batch.candidates.extend(items);
                        if count < self.config.per_page as usize {
                            break;
                        }
                    }
                    Err(error) => {
                        warn!(
                            "GitHub query '{}' page {} failed for domain {}: {}",
                            query, page, domain.slug, error
                        );
                        batch.failures.push(PageFailure {
                            query: query.clone(),
                            page,
                            error,
                        });
                        break;
                    }
                }
            }
        }

        info!(
            "GitHub collected {} candidates for domain {} ({} failed pages)",
            batch.candidates.len(),
            domain.slug,
            batch.failures.len()
        );
        batch
    }
}
