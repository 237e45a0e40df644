// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::candidate::CandidateRepository;
use crate::domain::models::project_domain::DomainSpec;
use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// 单页抓取错误
///
/// 只记录到批次中，不会中断整次运行
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Unexpected HTTP status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Rate limit exceeded")]
    RateLimited,
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

/// 抓取失败记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageFailure {
    pub query: String,
    pub page: u32,
    pub error: FetchError,
}

/// 单个领域的抓取结果
#[derive(Debug, Clone, Default)]
pub struct SourceBatch {
    pub candidates: Vec<CandidateRepository>,
    pub failures: Vec<PageFailure>,
}

/// 数据源描述，供 `/sources` 展示
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceDescriptor {
    pub name: String,
    pub kind: String,
    pub curated: bool,
}

#[async_trait]
pub trait RepositorySource: Send + Sync {
    /// 数据源名称，同时写入目录条目的 `source` 字段
    fn name(&self) -> &str;

    /// 数据源类型
    fn kind(&self) -> &'static str;

    /// 是否为人工整理的数据源
    fn is_curated(&self) -> bool {
        false
    }

    /// 抓取单页结果，按星标数降序
    async fn fetch_page(
        &self,
        query: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<CandidateRepository>, FetchError>;

    /// 抓取某个领域的全部候选仓库
    async fn collect(&self, domain: &DomainSpec) -> SourceBatch;

    fn descriptor(&self) -> SourceDescriptor {
        SourceDescriptor {
            name: self.name().to_string(),
            kind: self.kind().to_string(),
            curated: self.is_curated(),
        }
    }
}
