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

use axum::{body::Bytes, extract::Extension, Json};
use std::sync::Arc;
use tracing::{info, warn};
use validator::Validate;

use crate::{
    application::dto::{
        scrape_request::ScrapeRequestDto,
        scrape_response::{ApiResponse, ScraperStatusDto},
    },
    domain::{
        models::scrape_run::RunSummary,
        repositories::catalog_repository::{CatalogRepository, CatalogStats},
        sources::source::SourceDescriptor,
    },
    infrastructure::cache::cache_manager::CacheManager,
    presentation::errors::AppError,
    scheduler::scrape_scheduler::{RunTrigger, ScrapeScheduler},
};

/// 目录统计的缓存键
pub const CATALOG_STATS_KEY: &str = "stats:catalog";

/// 手动触发一次采集并等待完成
///
/// 请求体可为空；非空时必须是合法的 `ScrapeRequestDto`
pub async fn trigger_scrape(
    Extension(scheduler): Extension<Arc<ScrapeScheduler>>,
    body: Bytes,
) -> Result<Json<ApiResponse<RunSummary>>, AppError> {
    let request = if body.iter().all(u8::is_ascii_whitespace) {
        ScrapeRequestDto::default()
    } else {
        serde_json::from_slice::<ScrapeRequestDto>(&body)?
    };
    request.validate()?;

    let source = request.source_name();
    info!(
        "Manual scrape requested (source: {}, mode: {:?})",
        source.as_deref().unwrap_or("all"),
        request.mode
    );

    let summary = scheduler
        .run_once(source, request.mode, RunTrigger::Manual)
        .await?;

    Ok(Json(ApiResponse::ok(
        format!(
            "Scrape completed: {} fetched, {} saved",
            summary.total, summary.saved
        ),
        summary,
    )))
}

/// 调度器状态与最近一次运行报告
pub async fn get_status(
    Extension(scheduler): Extension<Arc<ScrapeScheduler>>,
) -> Json<ApiResponse<ScraperStatusDto>> {
    let state = scheduler.state();
    let status = ScraperStatusDto {
        enabled: state.is_enabled(),
        disabled_reason: state.disabled_reason(),
        running: state.is_running(),
        phase: state.phase(),
        interval_secs: scheduler.interval().as_secs(),
        default_mode: scheduler.default_mode(),
        last_run: state.last_report(),
    };

    Json(ApiResponse::ok("Scraper status", status))
}

/// 目录统计，带 TTL 缓存
pub async fn get_stats(
    Extension(repository): Extension<Arc<dyn CatalogRepository>>,
    Extension(cache): Extension<CacheManager>,
) -> Result<Json<ApiResponse<CatalogStats>>, AppError> {
    match cache.get::<CatalogStats>(CATALOG_STATS_KEY).await {
        Ok(Some(stats)) => return Ok(Json(ApiResponse::ok("Catalog statistics", stats))),
        Ok(None) => {}
        Err(e) => warn!("Stats cache read failed: {}", e),
    }

    let stats = repository.stats().await?;
    if let Err(e) = cache.set(CATALOG_STATS_KEY, &stats, None).await {
        warn!("Stats cache write failed: {}", e);
    }

    Ok(Json(ApiResponse::ok("Catalog statistics", stats)))
}

/// 已注册的数据源
pub async fn list_sources(
    Extension(scheduler): Extension<Arc<ScrapeScheduler>>,
) -> Json<ApiResponse<Vec<SourceDescriptor>>> {
    let sources = scheduler.pipeline().sources();
    Json(ApiResponse::ok(
        format!("{} source(s) registered", sources.len()),
        sources,
    ))
}
