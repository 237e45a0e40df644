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

use crate::domain::models::catalog_entry::{CatalogEntry, Difficulty};
use crate::domain::models::project_domain::{DomainSpec, ProjectDomain};
use crate::domain::repositories::catalog_repository::{
    CatalogRepository, CatalogStats, RepositoryError,
};
use crate::infrastructure::database::entities::{
    catalog_entry as entry_entity, project_domain as domain_entity,
};
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection,
    EntityTrait, QueryFilter, QuerySelect, Set, TransactionTrait,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// 单条 INSERT 语句中的最大行数，避免超出 SQLite 的参数上限
const INSERT_CHUNK_SIZE: usize = 25;

/// 目录仓库实现
///
/// 基于SeaORM实现的目录数据访问层
#[derive(Clone)]
pub struct CatalogRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl CatalogRepositoryImpl {
    /// 创建新的目录仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// 按仓库地址查询条目
    pub async fn find_by_source_url(
        &self,
        source_url: &str,
    ) -> Result<Option<CatalogEntry>, RepositoryError> {
        let model = entry_entity::Entity::find()
            .filter(entry_entity::Column::SourceUrl.eq(source_url))
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    /// 查询领域下的全部条目
    pub async fn find_by_domain(&self, domain_id: Uuid) -> Result<Vec<CatalogEntry>, RepositoryError> {
        let models = entry_entity::Entity::find()
            .filter(entry_entity::Column::DomainId.eq(domain_id))
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    /// 冲突时按仓库地址覆盖的列；下载数、点赞数与创建时间不覆盖
    fn refreshed_columns() -> Vec<entry_entity::Column> {
        vec![
            entry_entity::Column::Title,
            entry_entity::Column::Description,
            entry_entity::Column::Source,
            entry_entity::Column::SourceId,
            entry_entity::Column::Owner,
            entry_entity::Column::RepoName,
            entry_entity::Column::BaseName,
            entry_entity::Column::Branch,
            entry_entity::Column::DownloadUrl,
            entry_entity::Column::LiveDemoUrl,
            entry_entity::Column::Stars,
            entry_entity::Column::Forks,
            entry_entity::Column::Language,
            entry_entity::Column::TechStack,
            entry_entity::Column::Difficulty,
            entry_entity::Column::Topics,
            entry_entity::Column::DomainId,
            entry_entity::Column::CaseStudy,
            entry_entity::Column::ProblemStatement,
            entry_entity::Column::SolutionDescription,
            entry_entity::Column::Prerequisites,
            entry_entity::Column::Deliverables,
            entry_entity::Column::IsActive,
            entry_entity::Column::UpdatedAt,
        ]
    }

    async fn insert_entries<C>(
        conn: &C,
        domain_id: Uuid,
        entries: &[CatalogEntry],
    ) -> Result<usize, RepositoryError>
    where
        C: ConnectionTrait,
    {
        for chunk in entries.chunks(INSERT_CHUNK_SIZE) {
            let models = chunk.iter().map(|entry| {
                let mut model: entry_entity::ActiveModel = entry.clone().into();
                model.domain_id = Set(domain_id);
                model
            });

            entry_entity::Entity::insert_many(models)
                .on_conflict(
                    OnConflict::column(entry_entity::Column::SourceUrl)
                        .update_columns(Self::refreshed_columns())
                        .to_owned(),
                )
                .exec_without_returning(conn)
                .await?;
        }

        Ok(entries.len())
    }
}

fn json_list(items: &[String]) -> serde_json::Value {
    serde_json::Value::from(items.to_vec())
}

fn list_from_json(value: serde_json::Value) -> Vec<String> {
    serde_json::from_value(value).unwrap_or_default()
}

impl From<entry_entity::Model> for CatalogEntry {
    fn from(model: entry_entity::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            source: model.source,
            source_id: model.source_id,
            source_url: model.source_url,
            owner: model.owner,
            repo_name: model.repo_name,
            base_name: model.base_name,
            branch: model.branch,
            download_url: model.download_url,
            live_demo_url: model.live_demo_url,
            stars: model.stars,
            forks: model.forks,
            language: model.language,
            tech_stack: list_from_json(model.tech_stack),
            difficulty: model.difficulty.parse().unwrap_or(Difficulty::Easy),
            topics: list_from_json(model.topics),
            domain_id: model.domain_id,
            case_study: model.case_study,
            problem_statement: model.problem_statement,
            solution_description: model.solution_description,
            prerequisites: list_from_json(model.prerequisites),
            deliverables: list_from_json(model.deliverables),
            download_count: model.download_count,
            like_count: model.like_count,
            is_active: model.is_active,
            review_status: model.review_status.parse().unwrap_or_default(),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<CatalogEntry> for entry_entity::ActiveModel {
    fn from(entry: CatalogEntry) -> Self {
        Self {
            id: Set(entry.id),
            title: Set(entry.title),
            description: Set(entry.description),
            source: Set(entry.source),
            source_id: Set(entry.source_id),
            source_url: Set(entry.source_url),
            owner: Set(entry.owner),
            repo_name: Set(entry.repo_name),
            base_name: Set(entry.base_name),
            branch: Set(entry.branch),
            download_url: Set(entry.download_url),
            live_demo_url: Set(entry.live_demo_url),
            stars: Set(entry.stars),
            forks: Set(entry.forks),
            language: Set(entry.language),
            tech_stack: Set(json_list(&entry.tech_stack)),
            difficulty: Set(entry.difficulty.to_string()),
            topics: Set(json_list(&entry.topics)),
            domain_id: Set(entry.domain_id),
            case_study: Set(entry.case_study),
            problem_statement: Set(entry.problem_statement),
            solution_description: Set(entry.solution_description),
            prerequisites: Set(json_list(&entry.prerequisites)),
            deliverables: Set(json_list(&entry.deliverables)),
            download_count: Set(entry.download_count),
            like_count: Set(entry.like_count),
            is_active: Set(entry.is_active),
            review_status: Set(entry.review_status.to_string()),
            created_at: Set(entry.created_at),
            updated_at: Set(entry.updated_at),
        }
    }
}

impl From<domain_entity::Model> for ProjectDomain {
    fn from(model: domain_entity::Model) -> Self {
        Self {
            id: model.id,
            slug: model.slug,
            name: model.name,
            description: model.description,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[async_trait]
impl CatalogRepository for CatalogRepositoryImpl {
    async fn ensure_domain(&self, spec: &DomainSpec) -> Result<ProjectDomain, RepositoryError> {
        let existing = domain_entity::Entity::find()
            .filter(domain_entity::Column::Slug.eq(spec.slug.as_str()))
            .one(self.db.as_ref())
            .await?;

        if let Some(model) = existing {
            if model.name == spec.name && model.description == spec.description {
                return Ok(model.into());
            }

            let mut active: domain_entity::ActiveModel = model.into();
            active.name = Set(spec.name.clone());
            active.description = Set(spec.description.clone());
            active.updated_at = Set(Utc::now());
            let updated = active.update(self.db.as_ref()).await?;
            return Ok(updated.into());
        }

        let now = Utc::now();
        let model = domain_entity::ActiveModel {
            id: Set(Uuid::new_v4()),
            slug: Set(spec.slug.clone()),
            name: Set(spec.name.clone()),
            description: Set(spec.description.clone()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        // 并发创建同一 slug 时以先写入者为准
        domain_entity::Entity::insert(model)
            .on_conflict(
                OnConflict::column(domain_entity::Column::Slug)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(self.db.as_ref())
            .await?;

        let model = domain_entity::Entity::find()
            .filter(domain_entity::Column::Slug.eq(spec.slug.as_str()))
            .one(self.db.as_ref())
            .await?
            .ok_or(RepositoryError::NotFound)?;

        debug!("Ensured domain {} ({})", model.slug, model.id);
        Ok(model.into())
    }

    async fn replace_domain_entries(
        &self,
        domain_id: Uuid,
        source: &str,
        entries: &[CatalogEntry],
    ) -> Result<usize, RepositoryError> {
        let txn = self.db.begin().await?;

        let deleted = entry_entity::Entity::delete_many()
            .filter(entry_entity::Column::DomainId.eq(domain_id))
            .filter(entry_entity::Column::Source.eq(source))
            .exec(&txn)
            .await?;

        let saved = Self::insert_entries(&txn, domain_id, entries).await?;

        txn.commit().await?;

        debug!(
            "Replaced {} entries with {} for domain {} source {}",
            deleted.rows_affected, saved, domain_id, source
        );
        Ok(saved)
    }

    async fn upsert_entries(
        &self,
        domain_id: Uuid,
        entries: &[CatalogEntry],
    ) -> Result<usize, RepositoryError> {
        let txn = self.db.begin().await?;
        let mut saved = 0;

        for entry in entries {
            let existing = entry_entity::Entity::find()
                .filter(entry_entity::Column::SourceUrl.eq(entry.source_url.as_str()))
                .one(&txn)
                .await?;

            match existing {
                Some(_) => {
                    // 与全量替换写入相同的列
                    Self::insert_entries(&txn, domain_id, std::slice::from_ref(entry)).await?;
                    saved += 1;
                }
                None => {
                    let name_taken = entry_entity::Entity::find()
                        .filter(entry_entity::Column::DomainId.eq(domain_id))
                        .filter(entry_entity::Column::BaseName.eq(entry.base_name.as_str()))
                        .one(&txn)
                        .await?
                        .is_some();

                    if name_taken {
                        debug!(
                            "Skipping {}: base name {} already in domain",
                            entry.source_url, entry.base_name
                        );
                        continue;
                    }

                    let mut model: entry_entity::ActiveModel = entry.clone().into();
                    model.domain_id = Set(domain_id);
                    model.insert(&txn).await?;
                    saved += 1;
                }
            }
        }

        txn.commit().await?;
        Ok(saved)
    }

    async fn base_names_in_domain(
        &self,
        domain_id: Uuid,
        exclude_source: Option<&str>,
    ) -> Result<Vec<String>, RepositoryError> {
        let mut query = entry_entity::Entity::find()
            .select_only()
            .column(entry_entity::Column::BaseName)
            .filter(entry_entity::Column::DomainId.eq(domain_id));
        if let Some(source) = exclude_source {
            query = query.filter(entry_entity::Column::Source.ne(source));
        }

        let names = query
            .into_tuple::<String>()
            .all(self.db.as_ref())
            .await?;

        Ok(names)
    }

    async fn stats(&self) -> Result<CatalogStats, RepositoryError> {
        let slugs: HashMap<Uuid, String> = domain_entity::Entity::find()
            .all(self.db.as_ref())
            .await?
            .into_iter()
            .map(|model| (model.id, model.slug))
            .collect();

        let rows = entry_entity::Entity::find()
            .select_only()
            .column(entry_entity::Column::DomainId)
            .column(entry_entity::Column::Difficulty)
            .column(entry_entity::Column::Source)
            .column(entry_entity::Column::IsActive)
            .into_tuple::<(Uuid, String, String, bool)>()
            .all(self.db.as_ref())
            .await?;

        let mut stats = CatalogStats::default();
        for slug in slugs.values() {
            stats.by_domain.entry(slug.clone()).or_insert(0);
        }

        for (domain_id, difficulty, source, is_active) in rows {
            stats.total += 1;
            if is_active {
                stats.active += 1;
            }
            let slug = slugs
                .get(&domain_id)
                .cloned()
                .unwrap_or_else(|| domain_id.to_string());
            *stats.by_domain.entry(slug).or_insert(0) += 1;
            *stats.by_difficulty.entry(difficulty).or_insert(0) += 1;
            *stats.by_source.entry(source).or_insert(0) += 1;
        }

        Ok(stats)
    }
}
