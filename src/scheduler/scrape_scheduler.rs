// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, error, info, warn};

use crate::application::use_cases::scrape_pipeline::{PipelineError, ScrapePipeline};
use crate::domain::models::scrape_run::{PipelinePhase, RunMode, RunReport, RunSummary};
use crate::infrastructure::cache::cache_manager::{CacheManager, STATS_PREFIX};
use crate::infrastructure::metrics;
use crate::scheduler::state::ScraperState;

/// 触发来源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunTrigger {
    Manual,
    Scheduled,
}

impl RunTrigger {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunTrigger::Manual => "manual",
            RunTrigger::Scheduled => "scheduled",
        }
    }
}

/// 采集调度器
///
/// 手动触发与定时触发共享同一个 `ScraperState`
pub struct ScrapeScheduler {
    pipeline: Arc<ScrapePipeline>,
    state: Arc<ScraperState>,
    cache: Option<CacheManager>,
    default_mode: RunMode,
    interval: Duration,
}

impl ScrapeScheduler {
    pub fn new(
        pipeline: Arc<ScrapePipeline>,
        state: Arc<ScraperState>,
        default_mode: RunMode,
        interval: Duration,
    ) -> Self {
        Self {
            pipeline,
            state,
            cache: None,
            default_mode,
            interval,
        }
    }

    /// 运行成功后失效的读缓存
    pub fn with_cache(mut self, cache: CacheManager) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn state(&self) -> &Arc<ScraperState> {
        &self.state
    }

    pub fn pipeline(&self) -> &Arc<ScrapePipeline> {
        &self.pipeline
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn default_mode(&self) -> RunMode {
        self.default_mode
    }

    /// 执行一次流水线
    ///
    /// # Returns
    ///
    /// * `Err(PipelineError::AlreadyRunning)` - 已有运行，不会启动第二条流水线
    /// * `Err(PipelineError::UnknownSource)` - 指定的数据源未注册
    /// * `Err(PipelineError::Disabled)` - 采集器被禁用
    pub async fn run_once(
        &self,
        source: Option<String>,
        mode: Option<RunMode>,
        trigger: RunTrigger,
    ) -> Result<RunSummary, PipelineError> {
        if let Some(reason) = self.state.disabled_reason() {
            return Err(PipelineError::Disabled(reason));
        }
        if let Some(name) = source.as_deref() {
            if !self.pipeline.has_source(name) {
                return Err(PipelineError::UnknownSource(name.to_string()));
            }
        }

        let _guard = self
            .state
            .try_begin()
            .ok_or(PipelineError::AlreadyRunning)?;

        let mode = mode.unwrap_or(self.default_mode);
        let started = Instant::now();
        let mut report = RunReport::started(trigger.as_str(), source.clone(), mode);
        metrics::record_run_started(trigger.as_str());
        info!(
            "Starting {} scrape run (source: {}, mode: {})",
            trigger.as_str(),
            source.as_deref().unwrap_or("all"),
            mode
        );

        let result = self
            .pipeline
            .run(source.as_deref(), mode, &self.state, &mut report)
            .await;

        report.finished_at = Some(Utc::now());
        match &result {
            Ok(summary) => {
                report.summary = Some(*summary);
                info!(
                    "Scrape run finished in {:.1}s: {} fetched, {} saved",
                    started.elapsed().as_secs_f64(),
                    summary.total,
                    summary.saved
                );
                if let Some(cache) = &self.cache {
                    if let Err(e) = cache.invalidate_prefix(STATS_PREFIX).await {
                        warn!("Failed to invalidate stats cache: {}", e);
                    }
                }
            }
            Err(e) => {
                self.state.set_phase(PipelinePhase::Failed);
                error!("Scrape run failed: {}", e);
                report.error = Some(e.to_string());
                metrics::record_run_failed(trigger.as_str());
            }
        }

        metrics::record_run_duration(started.elapsed());
        self.state.set_last_report(report);
        result
    }

    /// 启动定时触发任务
    ///
    /// `run_on_startup` 为 false 时跳过 interval 的首个立即触发；
    /// 间隔为零时不启动定时触发
    pub fn start(self: Arc<Self>, run_on_startup: bool) -> JoinHandle<()> {
        tokio::spawn(async move {
            if self.interval.is_zero() {
                warn!("Scrape interval is zero, recurring trigger disabled");
                return;
            }

            info!(
                "Scrape scheduler started, interval {}s",
                self.interval.as_secs()
            );

            let mut ticker = interval(self.interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            if !run_on_startup {
                ticker.tick().await;
            }

            loop {
                ticker.tick().await;

                match self.run_once(None, None, RunTrigger::Scheduled).await {
                    Ok(summary) => {
                        debug!("Scheduled run saved {} entries", summary.saved);
                    }
                    Err(PipelineError::AlreadyRunning) => {
                        info!("Skipping scheduled run: a run is already in progress");
                    }
                    Err(PipelineError::Disabled(reason)) => {
                        debug!("Skipping scheduled run: {}", reason);
                    }
                    Err(e) => {
                        error!("Scheduled scrape run failed: {}", e);
                    }
                }
            }
        })
    }
}

#[cfg(test)]
#[path = "scrape_scheduler_test.rs"]
mod tests;
