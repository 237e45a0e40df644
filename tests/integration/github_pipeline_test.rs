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

use crate::helpers::{build_scheduler, sqlite_db, web_domain};
use projecthub::domain::repositories::catalog_repository::CatalogRepository;
use projecthub::domain::sources::source::RepositorySource;
use projecthub::infrastructure::database::entities::catalog_entry;
use projecthub::infrastructure::repositories::catalog_repo_impl::CatalogRepositoryImpl;
use projecthub::infrastructure::sources::github_source::{GithubSource, GithubSourceConfig};
use projecthub::scheduler::scrape_scheduler::RunTrigger;
use projecthub::scheduler::state::ScraperState;
use sea_orm::EntityTrait;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn repo(id: u64, name: &str, description: &str, stars: u32, archived: bool) -> Value {
    json!({
        "id": id,
        "name": name,
        "owner": { "login": "acme" },
        "description": description,
        "stargazers_count": stars,
        "forks_count": 3,
        "language": "TypeScript",
        "topics": ["react", "nodejs"],
        "homepage": "https://demo.acme.dev",
        "html_url": format!("https://github.com/acme/{}", name),
        "default_branch": "main",
        "archived": archived,
        "disabled": false
    })
}

fn github(server: &MockServer) -> Arc<dyn RepositorySource> {
    let config = GithubSourceConfig {
        api_base: server.uri(),
        token: "ghp_test".to_string(),
        user_agent: "projecthub-tests".to_string(),
        per_page: 5,
        max_pages: 2,
        page_delay: Duration::ZERO,
        query_delay: Duration::ZERO,
        timeout: Duration::from_secs(5),
    };
    Arc::new(GithubSource::new(config).unwrap())
}

#[tokio::test]
async fn test_github_results_flow_into_catalog() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/repositories"))
        .and(query_param("q", "web app"))
        .and(header("authorization", "Bearer ghp_test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_count": 4,
            "items": [
                repo(101, "shop-front", "Ecommerce store application with payment checkout", 2400, false),
                repo(102, "old-chat", "Realtime chat application for teams", 800, true),
                repo(103, "awesome-web-apps", "Curated collection of web apps", 9000, false),
                repo(104, "notes", "Notes", 300, false)
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let db = sqlite_db().await;
    let repository: Arc<dyn CatalogRepository> = Arc::new(CatalogRepositoryImpl::new(db.clone()));
    let state = Arc::new(ScraperState::new());
    let scheduler = build_scheduler(
        repository.clone(),
        vec![github(&server)],
        vec![web_domain()],
        state.clone(),
    );

    let summary = scheduler.run_once(None, None, RunTrigger::Manual).await.unwrap();
    assert_eq!(summary.total, 4);
    assert_eq!(summary.saved, 1);

    let entries = catalog_entry::Entity::find().all(db.as_ref()).await.unwrap();
    assert_eq!(entries.len(), 1);
    let shop = &entries[0];
    assert_eq!(shop.source, "github");
    assert_eq!(shop.source_id, "101");
    assert_eq!(shop.difficulty, "MEDIUM");
    assert_eq!(shop.live_demo_url.as_deref(), Some("https://demo.acme.dev"));
    let tech_stack: Vec<String> = serde_json::from_value(shop.tech_stack.clone()).unwrap();
    assert!(tech_stack.contains(&"TypeScript".to_string()));

    let report = state.last_report().unwrap();
    assert_eq!(report.domains["web-development"].excluded, 3);
}

#[tokio::test]
async fn test_rate_limited_github_does_not_abort_run() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/repositories"))
        .respond_with(ResponseTemplate::new(403).insert_header("x-ratelimit-remaining", "0"))
        .mount(&server)
        .await;

    let db = sqlite_db().await;
    let repository: Arc<dyn CatalogRepository> = Arc::new(CatalogRepositoryImpl::new(db));
    let state = Arc::new(ScraperState::new());
    let scheduler = build_scheduler(repository, vec![github(&server)], vec![web_domain()], state.clone());

    let summary = scheduler.run_once(None, None, RunTrigger::Scheduled).await.unwrap();

    assert_eq!(summary.total, 0);
    assert_eq!(summary.saved, 0);
    let report = state.last_report().unwrap();
    assert!(report.error.is_none());
    assert_eq!(report.domains["web-development"].fetch_failures, 1);
}
