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

use crate::helpers::{
    build_scheduler, candidate, games_domain, sqlite_db, web_domain, StaticSource,
};
use projecthub::domain::models::scrape_run::{RunMode, RunSummary};
use projecthub::domain::repositories::catalog_repository::CatalogRepository;
use projecthub::domain::sources::source::{FetchError, PageFailure, RepositorySource, SourceBatch};
use projecthub::infrastructure::database::entities::catalog_entry;
use projecthub::infrastructure::repositories::catalog_repo_impl::CatalogRepositoryImpl;
use projecthub::scheduler::scrape_scheduler::RunTrigger;
use projecthub::scheduler::state::ScraperState;
use sea_orm::{DatabaseConnection, EntityTrait};
use std::sync::Arc;

async fn entry_names(db: &DatabaseConnection) -> Vec<String> {
    let mut names: Vec<String> = catalog_entry::Entity::find()
        .all(db)
        .await
        .unwrap()
        .into_iter()
        .map(|model| model.repo_name)
        .collect();
    names.sort();
    names
}

fn source(source: StaticSource) -> Vec<Arc<dyn RepositorySource>> {
    vec![Arc::new(source)]
}

#[tokio::test]
async fn test_recipe_app_is_saved_as_easy_and_component_library_is_excluded() {
    let db = sqlite_db().await;
    let repository: Arc<dyn CatalogRepository> = Arc::new(CatalogRepositoryImpl::new(db.clone()));
    let scheduler = build_scheduler(
        repository.clone(),
        source(StaticSource::new("github").with_candidates(
            "web-development",
            vec![
                candidate(1, "recipe-sharing-app", "A recipe sharing application for home cooks", 120),
                candidate(2, "react-button-component", "A reusable React UI component library", 4000),
            ],
        )),
        vec![web_domain()],
        Arc::new(ScraperState::new()),
    );

    let summary = scheduler.run_once(None, None, RunTrigger::Manual).await.unwrap();
    assert_eq!(summary, RunSummary { total: 2, saved: 1 });

    let entries = catalog_entry::Entity::find().all(db.as_ref()).await.unwrap();
    assert_eq!(entries.len(), 1);
    let recipe = &entries[0];
    assert_eq!(recipe.title, "Recipe Sharing App");
    assert_eq!(recipe.difficulty, "EASY");
    assert_eq!(recipe.review_status, "APPROVED");
    assert_eq!(recipe.source_id, "1");
    assert_eq!(recipe.base_name, "recipe-sharing-app");
    assert_eq!(
        recipe.download_url,
        "https://github.com/octocat/recipe-sharing-app/archive/refs/heads/main.zip"
    );
    assert!(!recipe.case_study.is_empty());

    let stats = repository.stats().await.unwrap();
    assert_eq!(stats.by_domain["web-development"], 1);
}

#[tokio::test]
async fn test_version_suffixed_duplicates_keep_first_only() {
    let db = sqlite_db().await;
    let repository = Arc::new(CatalogRepositoryImpl::new(db.clone()));
    let scheduler = build_scheduler(
        repository,
        source(StaticSource::new("github").with_candidates(
            "web-development",
            vec![
                candidate(10, "foo-bar-v1", "Budget tracker application for households", 300),
                candidate(11, "foo-bar-v2", "Budget tracker application for households", 900),
            ],
        )),
        vec![web_domain()],
        Arc::new(ScraperState::new()),
    );

    let summary = scheduler.run_once(None, None, RunTrigger::Manual).await.unwrap();

    assert_eq!(summary.saved, 1);
    assert_eq!(entry_names(&db).await, vec!["foo-bar-v1".to_string()]);
    let report = scheduler.state().last_report().unwrap();
    assert_eq!(report.domains["web-development"].duplicates, 1);
}

#[tokio::test]
async fn test_same_repository_in_two_domains_is_saved_once() {
    let db = sqlite_db().await;
    let repository = Arc::new(CatalogRepositoryImpl::new(db.clone()));
    let shared = candidate(20, "pixel-quest", "Multiplayer browser game platform with leaderboards", 700);
    let scheduler = build_scheduler(
        repository,
        source(
            StaticSource::new("github")
                .with_candidates("web-development", vec![shared.clone()])
                .with_candidates("game-development", vec![shared]),
        ),
        vec![web_domain(), games_domain()],
        Arc::new(ScraperState::new()),
    );

    let summary = scheduler.run_once(None, None, RunTrigger::Manual).await.unwrap();

    assert_eq!(summary, RunSummary { total: 2, saved: 1 });
    assert_eq!(entry_names(&db).await.len(), 1);
}

#[tokio::test]
async fn test_replace_run_drops_entries_no_longer_fetched() {
    let db = sqlite_db().await;
    let repository: Arc<dyn CatalogRepository> = Arc::new(CatalogRepositoryImpl::new(db.clone()));
    let state = Arc::new(ScraperState::new());

    let first = build_scheduler(
        repository.clone(),
        source(StaticSource::new("github").with_candidates(
            "web-development",
            vec![
                candidate(1, "recipe-sharing-app", "A recipe sharing application for home cooks", 120),
                candidate(3, "team-kanban", "Kanban board application for remote teams", 450),
            ],
        )),
        vec![web_domain()],
        state.clone(),
    );
    assert_eq!(first.run_once(None, None, RunTrigger::Manual).await.unwrap().saved, 2);

    let second = build_scheduler(
        repository,
        source(StaticSource::new("github").with_candidates(
            "web-development",
            vec![candidate(3, "team-kanban", "Kanban board application for remote teams", 650)],
        )),
        vec![web_domain()],
        state,
    );
    second.run_once(None, None, RunTrigger::Manual).await.unwrap();

    let entries = catalog_entry::Entity::find().all(db.as_ref()).await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].repo_name, "team-kanban");
    assert_eq!(entries[0].stars, 650);
    assert_eq!(entries[0].difficulty, "MEDIUM");
}

#[tokio::test]
async fn test_replace_keeps_entries_when_every_fetch_failed() {
    let db = sqlite_db().await;
    let repository: Arc<dyn CatalogRepository> = Arc::new(CatalogRepositoryImpl::new(db.clone()));
    let state = Arc::new(ScraperState::new());

    let first = build_scheduler(
        repository.clone(),
        source(StaticSource::new("github").with_candidates(
            "web-development",
            vec![candidate(1, "recipe-sharing-app", "A recipe sharing application for home cooks", 120)],
        )),
        vec![web_domain()],
        state.clone(),
    );
    first.run_once(None, None, RunTrigger::Manual).await.unwrap();

    let failed = SourceBatch {
        candidates: Vec::new(),
        failures: vec![PageFailure {
            query: "web app".to_string(),
            page: 1,
            error: FetchError::RateLimited,
        }],
    };
    let second = build_scheduler(
        repository,
        source(StaticSource::new("github").with_batch("web-development", failed)),
        vec![web_domain()],
        state.clone(),
    );
    let summary = second.run_once(None, None, RunTrigger::Scheduled).await.unwrap();

    assert_eq!(summary, RunSummary { total: 0, saved: 0 });
    assert_eq!(entry_names(&db).await, vec!["recipe-sharing-app".to_string()]);
    let report = state.last_report().unwrap();
    assert_eq!(report.domains["web-development"].fetch_failures, 1);
}

#[tokio::test]
async fn test_incremental_run_updates_in_place_and_keeps_old_entries() {
    let db = sqlite_db().await;
    let repository: Arc<dyn CatalogRepository> = Arc::new(CatalogRepositoryImpl::new(db.clone()));
    let state = Arc::new(ScraperState::new());

    let first = build_scheduler(
        repository.clone(),
        source(StaticSource::new("github").with_candidates(
            "web-development",
            vec![
                candidate(1, "recipe-sharing-app", "A recipe sharing application for home cooks", 120),
                candidate(3, "team-kanban", "Kanban board application for remote teams", 450),
            ],
        )),
        vec![web_domain()],
        state.clone(),
    );
    first.run_once(None, None, RunTrigger::Manual).await.unwrap();

    let second = build_scheduler(
        repository,
        source(StaticSource::new("github").with_candidates(
            "web-development",
            vec![
                candidate(1, "recipe-sharing-app", "A recipe sharing application for home cooks", 6000),
                candidate(4, "habit-tracker", "Habit tracker app with streaks and reminders", 80),
            ],
        )),
        vec![web_domain()],
        state,
    );
    let summary = second
        .run_once(None, Some(RunMode::Incremental), RunTrigger::Manual)
        .await
        .unwrap();
    assert_eq!(summary.saved, 2);

    let entries = catalog_entry::Entity::find().all(db.as_ref()).await.unwrap();
    assert_eq!(entries.len(), 3);
    let recipe = entries
        .iter()
        .find(|entry| entry.repo_name == "recipe-sharing-app")
        .unwrap();
    assert_eq!(recipe.stars, 6000);
    assert_eq!(recipe.difficulty, "HARD");
}

#[tokio::test]
async fn test_replace_is_scoped_to_the_source() {
    let db = sqlite_db().await;
    let repository: Arc<dyn CatalogRepository> = Arc::new(CatalogRepositoryImpl::new(db.clone()));
    let state = Arc::new(ScraperState::new());

    let mut curated = candidate(0, "open-gradebook", "Gradebook management system for schools", 10);
    curated.identifier = "curated:octocat/open-gradebook".to_string();
    curated.source = "curated".to_string();
    curated.curated = true;

    let github = StaticSource::new("github").with_candidates(
        "web-development",
        vec![candidate(1, "recipe-sharing-app", "A recipe sharing application for home cooks", 120)],
    );
    let seed = StaticSource::new("curated").with_candidates("web-development", vec![curated]);
    let scheduler = build_scheduler(
        repository.clone(),
        vec![Arc::new(github), Arc::new(seed)],
        vec![web_domain()],
        state,
    );

    assert_eq!(scheduler.run_once(None, None, RunTrigger::Manual).await.unwrap().saved, 2);

    // 只重跑 github，人工整理的条目保留
    scheduler
        .run_once(Some("github".to_string()), None, RunTrigger::Manual)
        .await
        .unwrap();

    assert_eq!(
        entry_names(&db).await,
        vec!["open-gradebook".to_string(), "recipe-sharing-app".to_string()]
    );
    let stats = repository.stats().await.unwrap();
    assert_eq!(stats.by_source["curated"], 1);
    assert_eq!(stats.by_source["github"], 1);
}

#[tokio::test]
async fn test_source_scoped_replace_respects_base_names_of_other_sources() {
    let db = sqlite_db().await;
    let repository: Arc<dyn CatalogRepository> = Arc::new(CatalogRepositoryImpl::new(db.clone()));
    let state = Arc::new(ScraperState::new());

    let mut curated = candidate(0, "weather-app", "Weather forecast application with radar maps", 10);
    curated.identifier = "curated:octocat/weather-app".to_string();
    curated.source = "curated".to_string();
    curated.curated = true;

    let seed = StaticSource::new("curated").with_candidates("web-development", vec![curated]);
    let github = StaticSource::new("github").with_candidates(
        "web-development",
        vec![
            candidate(7, "weather-app-v2", "Weather forecast application with radar maps", 800),
            candidate(8, "team-kanban", "Kanban board application for remote teams", 450),
        ],
    );
    let scheduler = build_scheduler(
        repository,
        vec![Arc::new(github), Arc::new(seed)],
        vec![web_domain()],
        state.clone(),
    );

    let curated_run = scheduler
        .run_once(Some("curated".to_string()), None, RunTrigger::Manual)
        .await
        .unwrap();
    assert_eq!(curated_run.saved, 1);

    let github_run = scheduler
        .run_once(Some("github".to_string()), None, RunTrigger::Manual)
        .await
        .unwrap();
    assert_eq!(github_run, RunSummary { total: 2, saved: 1 });

    let mut base_names: Vec<String> = catalog_entry::Entity::find()
        .all(db.as_ref())
        .await
        .unwrap()
        .into_iter()
        .map(|model| model.base_name)
        .collect();
    base_names.sort();
    assert_eq!(base_names, vec!["team-kanban".to_string(), "weather-app".to_string()]);

    let report = state.last_report().unwrap();
    assert_eq!(report.domains["web-development"].duplicates, 1);

    // 同一数据源重跑时不会被自己已有的条目挡住
    let rerun = scheduler
        .run_once(Some("github".to_string()), None, RunTrigger::Manual)
        .await
        .unwrap();
    assert_eq!(rerun.saved, 1);
    assert_eq!(
        entry_names(&db).await,
        vec!["team-kanban".to_string(), "weather-app".to_string()]
    );
}
