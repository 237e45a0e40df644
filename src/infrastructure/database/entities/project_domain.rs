// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 领域数据库实体模型
///
/// 对应数据库中的 domains 表，slug 唯一
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "domains")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub slug: String,
    pub name: String,
    pub description: String,
    pub created_at: ChronoDateTimeUtc,
    pub updated_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        has_many = "super::catalog_entry::Entity",
        from = "Column::Id",
        to = "super::catalog_entry::Column::DomainId"
    )]
    CatalogEntries,
}

impl Related<super::catalog_entry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CatalogEntries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
