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

use projecthub::application::use_cases::scrape_pipeline::{PipelineConfig, ScrapePipeline};
use projecthub::config::settings::Settings;
use projecthub::domain::models::project_domain::{default_domain_specs, load_domain_specs};
use projecthub::domain::repositories::catalog_repository::CatalogRepository;
use projecthub::domain::services::classifier::{
    Classifier, ClassifierRules, DifficultyThresholds,
};
use projecthub::domain::sources::source::RepositorySource;
use projecthub::infrastructure::cache::cache_manager::CacheManager;
use projecthub::infrastructure::database::connection;
use projecthub::infrastructure::repositories::catalog_repo_impl::CatalogRepositoryImpl;
use projecthub::infrastructure::sources::github_source::{GithubSource, GithubSourceConfig};
use projecthub::infrastructure::sources::seed_file_source::SeedFileSource;
use projecthub::presentation::middleware::admin_auth_middleware::AdminAuthState;
use projecthub::presentation::routes::{build_app, AppContext};
use projecthub::scheduler::scrape_scheduler::ScrapeScheduler;
use projecthub::scheduler::state::ScraperState;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

use projecthub::utils::telemetry;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting projecthub scraper {}...", env!("CARGO_PKG_VERSION"));

    // 2. Load configuration
    let settings = Arc::new(Settings::new()?);
    info!("Configuration loaded");

    if settings.metrics.enabled {
        projecthub::infrastructure::metrics::init_metrics(settings.metrics.port);
    }

    // 3. Connect to database and run migrations
    let db = Arc::new(connection::connect_and_migrate(&settings.database).await?);
    let repository: Arc<dyn CatalogRepository> = Arc::new(CatalogRepositoryImpl::new(db));

    // 4. Domains and classifier rules
    let domains = match settings.scraper.domains_file.as_deref() {
        Some(path) => load_domain_specs(path)?,
        None => default_domain_specs(),
    };
    info!("{} project domains configured", domains.len());

    let rules = match settings.scraper.rules_file.as_deref() {
        Some(path) => ClassifierRules::from_yaml_file(path)?,
        None => ClassifierRules::default(),
    };
    let classifier = Classifier::new(rules)?;

    // 5. Sources
    let state = Arc::new(ScraperState::new());
    let mut sources: Vec<Arc<dyn RepositorySource>> = Vec::new();

    match settings.require_github_token() {
        Ok(token) => {
            let config = GithubSourceConfig::from_settings(&settings.github, token);
            sources.push(Arc::new(GithubSource::new(config)?));
        }
        Err(e) => {
            error!("CRITICAL: {}; the scraper is disabled", e);
            state.disable(e.to_string());
        }
    }

    if let Some(path) = settings.scraper.seed_file.as_deref() {
        if Path::new(path).exists() {
            let seed = SeedFileSource::from_yaml_file(path)?;
            if !seed.is_empty() {
                sources.push(Arc::new(seed));
            }
        } else {
            warn!("Seed file {} not found, curated source not registered", path);
        }
    }

    // 6. Pipeline and scheduler
    let pipeline = ScrapePipeline::new(
        repository.clone(),
        sources,
        domains,
        classifier,
        PipelineConfig {
            min_stars: settings.scraper.min_stars,
            thresholds: DifficultyThresholds {
                medium: settings.scraper.medium_star_threshold,
                hard: settings.scraper.hard_star_threshold,
            },
        },
    );

    let cache = CacheManager::new((&settings.cache).into());
    let scheduler = Arc::new(
        ScrapeScheduler::new(
            Arc::new(pipeline),
            state,
            settings.scraper.mode,
            Duration::from_secs(settings.scraper.interval_secs),
        )
        .with_cache(cache.clone()),
    );

    if settings.scraper.enabled && settings.scraper.interval_secs > 0 {
        scheduler.clone().start(settings.scraper.run_on_startup);
    } else {
        info!("Recurring scrape trigger is off; manual runs only");
    }

    // 7. Start HTTP server
    let app = build_app(AppContext {
        scheduler,
        repository,
        cache,
        admin: AdminAuthState::new(settings.admin_token()),
    });

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
