// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use axum_test::TestServer;
use migration::{Migrator, MigratorTrait};
use projecthub::application::use_cases::scrape_pipeline::{PipelineConfig, ScrapePipeline};
use projecthub::domain::models::candidate::CandidateRepository;
use projecthub::domain::models::project_domain::DomainSpec;
use projecthub::domain::models::scrape_run::RunMode;
use projecthub::domain::repositories::catalog_repository::CatalogRepository;
use projecthub::domain::services::classifier::Classifier;
use projecthub::domain::sources::source::{FetchError, RepositorySource, SourceBatch};
use projecthub::infrastructure::cache::cache_manager::CacheManager;
use projecthub::infrastructure::cache::cache_strategy::CacheStrategyConfig;
use projecthub::infrastructure::repositories::catalog_repo_impl::CatalogRepositoryImpl;
use projecthub::presentation::middleware::admin_auth_middleware::AdminAuthState;
use projecthub::presentation::routes::{build_app, AppContext};
use projecthub::scheduler::scrape_scheduler::ScrapeScheduler;
use projecthub::scheduler::state::ScraperState;
use sea_orm::{Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;

/// 内存 SQLite，已应用迁移
pub async fn sqlite_db() -> Arc<DatabaseConnection> {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    Arc::new(db)
}

pub fn web_domain() -> DomainSpec {
    DomainSpec {
        slug: "web-development".to_string(),
        name: "Web Development".to_string(),
        description: "Full-stack web applications".to_string(),
        queries: vec!["web app".to_string()],
    }
}

pub fn games_domain() -> DomainSpec {
    DomainSpec {
        slug: "game-development".to_string(),
        name: "Game Development".to_string(),
        description: "Browser and desktop games".to_string(),
        queries: vec!["browser game".to_string()],
    }
}

/// 构造 GitHub 风格的候选仓库
pub fn candidate(id: u64, name: &str, description: &str, stars: u32) -> CandidateRepository {
    CandidateRepository {
        identifier: format!("github:{}", id),
        source: "github".to_string(),
        name: name.to_string(),
        owner: "octocat".to_string(),
        description: Some(description.to_string()),
        stars,
        forks: stars / 10,
        language: Some("TypeScript".to_string()),
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

/// 按领域 slug 返回固定候选仓库的数据源
pub struct StaticSource {
    pub name: String,
    pub batches: Vec<(String, SourceBatch)>,
}

impl StaticSource {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            batches: Vec::new(),
        }
    }

    pub fn with_candidates(mut self, domain: &str, candidates: Vec<CandidateRepository>) -> Self {
        self.batches.push((
            domain.to_string(),
            SourceBatch {
                candidates,
                failures: Vec::new(),
            },
        ));
        self
    }

    pub fn with_batch(mut self, domain: &str, batch: SourceBatch) -> Self {
        self.batches.push((domain.to_string(), batch));
        self
    }
}

#[async_trait]
impl RepositorySource for StaticSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> &'static str {
        "static"
    }

    async fn fetch_page(
        &self,
        _query: &str,
        _page: u32,
        _per_page: u32,
    ) -> Result<Vec<CandidateRepository>, FetchError> {
        Ok(Vec::new())
    }

    async fn collect(&self, domain: &DomainSpec) -> SourceBatch {
        self.batches
            .iter()
            .find(|(slug, _)| slug == &domain.slug)
            .map(|(_, batch)| batch.clone())
            .unwrap_or_default()
    }
}

pub fn build_scheduler(
    repository: Arc<dyn CatalogRepository>,
    sources: Vec<Arc<dyn RepositorySource>>,
    domains: Vec<DomainSpec>,
    state: Arc<ScraperState>,
) -> ScrapeScheduler {
    let pipeline = ScrapePipeline::new(
        repository,
        sources,
        domains,
        Classifier::default(),
        PipelineConfig::default(),
    );
    ScrapeScheduler::new(
        Arc::new(pipeline),
        state,
        RunMode::Replace,
        Duration::from_secs(3600),
    )
}

#[allow(dead_code)]
pub struct TestApp {
    pub server: TestServer,
    pub db: Arc<DatabaseConnection>,
    pub repository: Arc<dyn CatalogRepository>,
    pub scheduler: Arc<ScrapeScheduler>,
    pub cache: CacheManager,
}

/// 使用给定数据源与管理令牌启动测试服务
pub async fn spawn_app(
    sources: Vec<Arc<dyn RepositorySource>>,
    admin_token: Option<&str>,
    state: Arc<ScraperState>,
) -> TestApp {
    let db = sqlite_db().await;
    let repository: Arc<dyn CatalogRepository> = Arc::new(CatalogRepositoryImpl::new(db.clone()));
    let cache = CacheManager::new(CacheStrategyConfig::default());
    let scheduler = Arc::new(
        build_scheduler(
            repository.clone(),
            sources,
            vec![web_domain(), games_domain()],
            state,
        )
        .with_cache(cache.clone()),
    );

    let app = build_app(AppContext {
        scheduler: scheduler.clone(),
        repository: repository.clone(),
        cache: cache.clone(),
        admin: AdminAuthState::new(admin_token),
    });

    TestApp {
        server: TestServer::new(app).unwrap(),
        db,
        repository,
        scheduler,
        cache,
    }
}
