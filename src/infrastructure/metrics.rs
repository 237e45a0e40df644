// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::{info, warn};

pub const RUNS_TOTAL: &str = "scraper_runs_total";
pub const RUNS_FAILED_TOTAL: &str = "scraper_runs_failed_total";
pub const CANDIDATES_FETCHED_TOTAL: &str = "scraper_candidates_fetched_total";
pub const FETCH_ERRORS_TOTAL: &str = "scraper_fetch_errors_total";
pub const ENTRIES_SAVED_TOTAL: &str = "scraper_entries_saved_total";
pub const RUN_DURATION_SECONDS: &str = "scraper_run_duration_seconds";

/// 安装 Prometheus 导出器并注册指标描述
pub fn init_metrics(port: u16) {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    // Ignore error if address is already in use (for development/testing)
    if let Err(e) = PrometheusBuilder::new().with_http_listener(addr).install() {
        warn!(
            "Failed to install Prometheus recorder: {}. This might happen if the port is already in use.",
            e
        );
        return;
    }

    describe_counter!(RUNS_TOTAL, "Number of scraper pipeline runs started");
    describe_counter!(RUNS_FAILED_TOTAL, "Number of scraper pipeline runs that failed");
    describe_counter!(
        CANDIDATES_FETCHED_TOTAL,
        "Candidate repositories fetched from sources"
    );
    describe_counter!(FETCH_ERRORS_TOTAL, "Page fetches that failed");
    describe_counter!(ENTRIES_SAVED_TOTAL, "Catalog entries written");
    describe_histogram!(RUN_DURATION_SECONDS, "Duration of scraper pipeline runs");

    info!("Metrics exporter listening on {}", addr);
}

pub fn record_run_started(trigger: &str) {
    counter!(RUNS_TOTAL, "trigger" => trigger.to_string()).increment(1);
}

pub fn record_run_failed(trigger: &str) {
    counter!(RUNS_FAILED_TOTAL, "trigger" => trigger.to_string()).increment(1);
}

pub fn record_fetch(source: &str, fetched: usize, failures: usize) {
    counter!(CANDIDATES_FETCHED_TOTAL, "source" => source.to_string()).increment(fetched as u64);
    if failures > 0 {
        counter!(FETCH_ERRORS_TOTAL, "source" => source.to_string()).increment(failures as u64);
    }
}

pub fn record_saved(domain: &str, saved: usize) {
    counter!(ENTRIES_SAVED_TOTAL, "domain" => domain.to_string()).increment(saved as u64);
}

pub fn record_run_duration(duration: Duration) {
    histogram!(RUN_DURATION_SECONDS).record(duration.as_secs_f64());
}
