// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::catalog_entry::CatalogEntry;
use crate::domain::models::project_domain::{DomainSpec, ProjectDomain};
use async_trait::async_trait;
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;
use uuid::Uuid;

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    /// 记录未找到
    #[error("Record not found")]
    NotFound,
}

/// 目录统计
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub total: u64,
    pub active: u64,
    /// 领域 slug → 条目数
    pub by_domain: BTreeMap<String, u64>,
    /// 难度 → 条目数
    pub by_difficulty: BTreeMap<String, u64>,
    /// 数据源 → 条目数
    pub by_source: BTreeMap<String, u64>,
}

/// 目录仓库特质
///
/// 采集流水线的持久化接口
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// 按 slug 幂等创建领域，已存在时返回已有记录
    async fn ensure_domain(&self, spec: &DomainSpec) -> Result<ProjectDomain, RepositoryError>;

    /// 删除领域下指定数据源的全部条目并写入新条目，整体在一个事务内完成
    async fn replace_domain_entries(
        &self,
        domain_id: Uuid,
        source: &str,
        entries: &[CatalogEntry],
    ) -> Result<usize, RepositoryError>;

    /// 按仓库地址原地更新；新条目的规范化名称已存在于领域中时跳过
    async fn upsert_entries(
        &self,
        domain_id: Uuid,
        entries: &[CatalogEntry],
    ) -> Result<usize, RepositoryError>;

    /// 领域下已有条目的规范化名称，可排除某个数据源的条目
    async fn base_names_in_domain(
        &self,
        domain_id: Uuid,
        exclude_source: Option<&str>,
    ) -> Result<Vec<String>, RepositoryError>;

    /// 目录统计
    async fn stats(&self) -> Result<CatalogStats, RepositoryError>;
}
