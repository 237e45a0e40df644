// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::domain::models::scrape_run::{PipelinePhase, RunReport};

/// 采集器运行状态
///
/// 进程内的重入保护：同一时刻只允许一次流水线运行。
/// 多实例部署需要外部锁。
#[derive(Debug, Default)]
pub struct ScraperState {
    running: AtomicBool,
    disabled_reason: RwLock<Option<String>>,
    phase: RwLock<PipelinePhase>,
    last_report: RwLock<Option<RunReport>>,
}

impl ScraperState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建处于禁用状态的采集器
    pub fn disabled(reason: impl Into<String>) -> Self {
        let state = Self::default();
        state.disable(reason);
        state
    }

    pub fn disable(&self, reason: impl Into<String>) {
        *self.disabled_reason.write() = Some(reason.into());
    }

    pub fn is_enabled(&self) -> bool {
        self.disabled_reason.read().is_none()
    }

    pub fn disabled_reason(&self) -> Option<String> {
        self.disabled_reason.read().clone()
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// 尝试开始一次运行；已有运行时返回 None
    pub fn try_begin(self: &Arc<Self>) -> Option<RunGuard> {
        self.running
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| RunGuard {
                state: Arc::clone(self),
            })
    }

    pub fn phase(&self) -> PipelinePhase {
        *self.phase.read()
    }

    pub fn set_phase(&self, phase: PipelinePhase) {
        *self.phase.write() = phase;
    }

    pub fn last_report(&self) -> Option<RunReport> {
        self.last_report.read().clone()
    }

    pub fn set_last_report(&self, report: RunReport) {
        *self.last_report.write() = Some(report);
    }
}

/// 运行守卫
///
/// 离开作用域时清除运行标记并回到 Idle，出错或 panic 时同样生效
#[derive(Debug)]
pub struct RunGuard {
    state: Arc<ScraperState>,
}

impl Drop for RunGuard {
    fn drop(&mut self) {
        self.state.set_phase(PipelinePhase::Idle);
        self.state.running.store(false, Ordering::SeqCst);
    }
}
