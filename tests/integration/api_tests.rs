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

use crate::helpers::{candidate, spawn_app, StaticSource, TestApp};
use axum::http::StatusCode;
use projecthub::domain::sources::source::RepositorySource;
use projecthub::scheduler::state::ScraperState;
use serde_json::{json, Value};
use std::sync::Arc;

fn github_source() -> Arc<dyn RepositorySource> {
    Arc::new(StaticSource::new("github").with_candidates(
        "web-development",
        vec![
            candidate(1, "recipe-sharing-app", "A recipe sharing application for home cooks", 120),
            candidate(2, "react-button-component", "A reusable React UI component library", 900),
        ],
    ))
}

async fn default_app() -> TestApp {
    spawn_app(vec![github_source()], None, Arc::new(ScraperState::new())).await
}

#[tokio::test]
async fn test_scrape_without_body_runs_all_sources() {
    let app = default_app().await;

    let response = app.server.post("/api/scraper/scrape").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["total"], 2);
    assert_eq!(body["data"]["saved"], 1);
}

#[tokio::test]
async fn test_scrape_with_mode_and_source() {
    let app = default_app().await;

    let response = app
        .server
        .post("/api/scraper/scrape")
        .json(&json!({ "source": "github", "mode": "incremental" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let status: Value = app.server.get("/api/scraper/status").await.json();
    assert_eq!(status["data"]["last_run"]["mode"], "incremental");
    assert_eq!(status["data"]["last_run"]["source"], "github");
    assert_eq!(status["data"]["last_run"]["trigger"], "manual");
}

#[tokio::test]
async fn test_unknown_source_is_bad_request() {
    let app = default_app().await;

    let response = app
        .server
        .post("/api/scraper/scrape")
        .json(&json!({ "source": "kaggle" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert!(body["message"].as_str().unwrap().contains("kaggle"));
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let app = default_app().await;

    let response = app
        .server
        .post("/api/scraper/scrape")
        .text("{not json")
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_concurrent_scrape_is_conflict() {
    let app = default_app().await;
    let _guard = app.scheduler.state().try_begin().unwrap();

    let response = app.server.post("/api/scraper/scrape").await;

    assert_eq!(response.status_code(), StatusCode::CONFLICT);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_disabled_scraper_is_unavailable() {
    let app = spawn_app(
        vec![github_source()],
        None,
        Arc::new(ScraperState::disabled("GitHub token is not configured")),
    )
    .await;

    let response = app.server.post("/api/scraper/scrape").await;
    assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);

    let status: Value = app.server.get("/api/scraper/status").await.json();
    assert_eq!(status["data"]["enabled"], false);
    assert_eq!(
        status["data"]["disabled_reason"],
        "GitHub token is not configured"
    );
}

#[tokio::test]
async fn test_admin_token_guards_trigger_only() {
    let app = spawn_app(vec![github_source()], Some("s3cret"), Arc::new(ScraperState::new())).await;

    let response = app.server.post("/api/scraper/scrape").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);

    let response = app
        .server
        .post("/api/scraper/scrape")
        .add_header("Authorization", "Bearer wrong")
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);

    let response = app
        .server
        .post("/api/scraper/scrape")
        .add_header("Authorization", format!("Bearer {}", "s3cret"))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let response = app.server.get("/api/scraper/status").await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_status_before_and_after_run() {
    let app = default_app().await;

    let status: Value = app.server.get("/api/scraper/status").await.json();
    assert_eq!(status["data"]["enabled"], true);
    assert_eq!(status["data"]["running"], false);
    assert_eq!(status["data"]["phase"], "idle");
    assert_eq!(status["data"]["interval_secs"], 3600);
    assert!(status["data"]["last_run"].is_null());

    app.server.post("/api/scraper/scrape").await;

    let status: Value = app.server.get("/api/scraper/status").await.json();
    let last_run = &status["data"]["last_run"];
    assert_eq!(last_run["summary"]["saved"], 1);
    assert_eq!(last_run["domains"]["web-development"]["excluded"], 1);
    assert!(last_run["error"].is_null());
}

#[tokio::test]
async fn test_stats_are_cached_until_next_run() {
    let app = default_app().await;

    let stats: Value = app.server.get("/api/scraper/stats").await.json();
    assert_eq!(stats["data"]["total"], 0);

    let stats: Value = app.server.get("/api/scraper/stats").await.json();
    assert_eq!(stats["data"]["total"], 0);
    assert!(app.cache.get_stats().hits >= 1);

    app.server.post("/api/scraper/scrape").await;

    let stats: Value = app.server.get("/api/scraper/stats").await.json();
    assert_eq!(stats["data"]["total"], 1);
    assert_eq!(stats["data"]["by_domain"]["web-development"], 1);
    assert_eq!(stats["data"]["by_domain"]["game-development"], 0);
    assert_eq!(stats["data"]["by_difficulty"]["EASY"], 1);
    assert_eq!(stats["data"]["by_source"]["github"], 1);
}

#[tokio::test]
async fn test_sources_lists_registered_sources() {
    let curated: Arc<dyn RepositorySource> = Arc::new(StaticSource::new("curated"));
    let app = spawn_app(
        vec![github_source(), curated],
        None,
        Arc::new(ScraperState::new()),
    )
    .await;

    let body: Value = app.server.get("/api/scraper/sources").await.json();
    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|source| source["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["github", "curated"]);
    assert_eq!(body["data"][0]["kind"], "static");
}
