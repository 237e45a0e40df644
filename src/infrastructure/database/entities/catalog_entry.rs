// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 目录条目数据库实体模型
///
/// 对应数据库中的 catalog_entries 表。数组字段以 JSON 存储，
/// 同一结构可同时运行在 Postgres 与 SQLite 上。
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "catalog_entries")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub source: String,
    pub source_id: String,
    #[sea_orm(unique)]
    pub source_url: String,
    pub owner: String,
    pub repo_name: String,
    pub base_name: String,
    pub branch: String,
    pub download_url: String,
    pub live_demo_url: Option<String>,
    pub stars: i32,
    pub forks: i32,
    pub language: Option<String>,
    pub tech_stack: Json,
    pub difficulty: String,
    pub topics: Json,
    pub domain_id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub case_study: String,
    #[sea_orm(column_type = "Text")]
    pub problem_statement: String,
    #[sea_orm(column_type = "Text")]
    pub solution_description: String,
    pub prerequisites: Json,
    pub deliverables: Json,
    pub download_count: i32,
    pub like_count: i32,
    pub is_active: bool,
    pub review_status: String,
    pub created_at: ChronoDateTimeUtc,
    pub updated_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::project_domain::Entity",
        from = "Column::DomainId",
        to = "super::project_domain::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Domain,
}

impl Related<super::project_domain::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Domain.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
