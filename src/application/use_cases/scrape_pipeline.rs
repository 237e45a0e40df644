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

use crate::domain::{
    models::{
        candidate::CandidateRepository,
        catalog_entry::{CatalogEntry, ReviewStatus},
        project_domain::{DomainSpec, ProjectDomain},
        scrape_run::{DomainRunStats, PipelinePhase, RunMode, RunReport, RunSummary},
    },
    repositories::catalog_repository::{CatalogRepository, RepositoryError},
    services::{
        classifier::{difficulty_for_stars, Classification, Classifier, DifficultyThresholds},
        content_synthesizer::ContentSynthesizer,
        deduplicator::{normalize_base_name, CandidateDeduplicator, DedupOutcome},
    },
    sources::source::{RepositorySource, SourceBatch, SourceDescriptor},
};
use crate::infrastructure::metrics;
use crate::scheduler::state::ScraperState;
use chrono::Utc;
use futures::future::join_all;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Unknown source: {0}")]
    UnknownSource(String),
    #[error("A scrape run is already in progress")]
    AlreadyRunning,
    #[error("Scraper is disabled: {0}")]
    Disabled(String),
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// 流水线参数
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// 最低星标数（严格大于）
    pub min_stars: u32,
    pub thresholds: DifficultyThresholds,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            min_stars: 50,
            thresholds: DifficultyThresholds::default(),
        }
    }
}

/// 某个数据源在某个领域下待写入的条目
struct PendingWrite {
    domain_index: usize,
    source_name: String,
    entries: Vec<CatalogEntry>,
    /// 抓取完全失败时不执行替换，保留旧数据
    skip_replace: bool,
}

/// 采集流水线
///
/// fetch → classify → dedupe → synthesize → write
pub struct ScrapePipeline {
    repository: Arc<dyn CatalogRepository>,
    sources: Vec<Arc<dyn RepositorySource>>,
    domains: Vec<DomainSpec>,
    classifier: Classifier,
    synthesizer: ContentSynthesizer,
    config: PipelineConfig,
}

impl ScrapePipeline {
    pub fn new(
        repository: Arc<dyn CatalogRepository>,
        sources: Vec<Arc<dyn RepositorySource>>,
        domains: Vec<DomainSpec>,
        classifier: Classifier,
        config: PipelineConfig,
    ) -> Self {
        Self {
            repository,
            sources,
            domains,
            classifier,
            synthesizer: ContentSynthesizer::new(),
            config,
        }
    }

    pub fn sources(&self) -> Vec<SourceDescriptor> {
        self.sources.iter().map(|source| source.descriptor()).collect()
    }

    pub fn domains(&self) -> &[DomainSpec] {
        &self.domains
    }

    pub fn has_source(&self, name: &str) -> bool {
        self.sources.iter().any(|source| source.name() == name)
    }

    fn select_sources(
        &self,
        source: Option<&str>,
    ) -> Result<Vec<Arc<dyn RepositorySource>>, PipelineError> {
        match source {
            None => Ok(self.sources.clone()),
            Some(name) => {
                let selected: Vec<_> = self
                    .sources
                    .iter()
                    .filter(|candidate| candidate.name() == name)
                    .cloned()
                    .collect();
                if selected.is_empty() {
                    Err(PipelineError::UnknownSource(name.to_string()))
                } else {
                    Ok(selected)
                }
            }
        }
    }

    /// 执行一次完整的流水线
    ///
    /// 调用方负责持有运行守卫；阶段变化写入 `state`，
    /// 逐领域统计写入 `report`
    pub async fn run(
        &self,
        source: Option<&str>,
        mode: RunMode,
        state: &ScraperState,
        report: &mut RunReport,
    ) -> Result<RunSummary, PipelineError> {
        let sources = self.select_sources(source)?;

        // 领域必须先于条目存在
        let mut domains: Vec<ProjectDomain> = Vec::with_capacity(self.domains.len());
        for spec in &self.domains {
            domains.push(self.repository.ensure_domain(spec).await?);
            report
                .domains
                .entry(spec.slug.clone())
                .or_insert_with(DomainRunStats::default);
        }

        state.set_phase(PipelinePhase::Fetching);
        let batches = self.fetch_all(&sources).await;

        let mut total = 0;
        for (source, domain_batches) in sources.iter().zip(&batches) {
            let fetched: usize = domain_batches.iter().map(|b| b.candidates.len()).sum();
            let failures: usize = domain_batches.iter().map(|b| b.failures.len()).sum();
            metrics::record_fetch(source.name(), fetched, failures);
            total += fetched;

            for (spec, batch) in self.domains.iter().zip(domain_batches) {
                if let Some(stats) = report.domains.get_mut(&spec.slug) {
                    stats.fetched += batch.candidates.len();
                    stats.fetch_failures += batch.failures.len();
                }
            }
        }
        info!(
            "Fetched {} candidates from {} source(s) across {} domain(s)",
            total,
            sources.len(),
            self.domains.len()
        );

        state.set_phase(PipelinePhase::Classifying);
        let mut included: Vec<Vec<Vec<&CandidateRepository>>> = Vec::with_capacity(batches.len());
        for domain_batches in &batches {
            let mut per_domain = Vec::with_capacity(domain_batches.len());
            for (spec, batch) in self.domains.iter().zip(domain_batches) {
                let mut accepted = Vec::new();
                for candidate in &batch.candidates {
                    match self.classifier.classify(candidate, self.config.min_stars) {
                        Classification::Included => accepted.push(candidate),
                        Classification::Excluded(reason) => {
                            debug!("Excluded {}: {}", candidate.full_name(), reason);
                            if let Some(stats) = report.domains.get_mut(&spec.slug) {
                                stats.excluded += 1;
                            }
                        }
                    }
                }
                if let Some(stats) = report.domains.get_mut(&spec.slug) {
                    stats.included += accepted.len();
                }
                per_domain.push(accepted);
            }
            included.push(per_domain);
        }

        state.set_phase(PipelinePhase::Synthesizing);
        let mut deduplicator = CandidateDeduplicator::new();
        let mut pending = Vec::new();
        for ((source, domain_batches), per_domain) in sources.iter().zip(&batches).zip(included) {
            for (domain_index, (batch, accepted)) in domain_batches.iter().zip(per_domain).enumerate() {
                let spec = &self.domains[domain_index];
                let domain = &domains[domain_index];
                let mut entries = Vec::with_capacity(accepted.len());

                // 其他数据源已写入该领域的名称同样视为重复
                let reserved = self
                    .repository
                    .base_names_in_domain(domain.id, Some(source.name()))
                    .await?;
                deduplicator.seed_base_names(reserved);

                for candidate in accepted {
                    match deduplicator.check_and_insert(candidate) {
                        DedupOutcome::Accepted => {
                            entries.push(self.build_entry(candidate, domain));
                        }
                        outcome => {
                            debug!("Skipping duplicate {}: {:?}", candidate.full_name(), outcome);
                            if let Some(stats) = report.domains.get_mut(&spec.slug) {
                                stats.duplicates += 1;
                            }
                        }
                    }
                }

                pending.push(PendingWrite {
                    domain_index,
                    source_name: source.name().to_string(),
                    skip_replace: batch.candidates.is_empty() && !batch.failures.is_empty(),
                    entries,
                });
            }
        }

        state.set_phase(PipelinePhase::Writing);
        let mut saved = 0;
        for write in pending {
            let spec = &self.domains[write.domain_index];
            let domain_id = domains[write.domain_index].id;

            let written = match mode {
                RunMode::Replace if write.skip_replace => {
                    warn!(
                        "Keeping existing {} entries for domain {}: every fetch failed",
                        write.source_name, spec.slug
                    );
                    0
                }
                RunMode::Replace => {
                    self.repository
                        .replace_domain_entries(domain_id, &write.source_name, &write.entries)
                        .await?
                }
                RunMode::Incremental => {
                    self.repository
                        .upsert_entries(domain_id, &write.entries)
                        .await?
                }
            };

            metrics::record_saved(&spec.slug, written);
            if let Some(stats) = report.domains.get_mut(&spec.slug) {
                stats.saved += written;
            }
            saved += written;
        }

        Ok(RunSummary { total, saved })
    }

    /// 各数据源并发抓取，数据源内部按领域顺序执行
    async fn fetch_all(&self, sources: &[Arc<dyn RepositorySource>]) -> Vec<Vec<SourceBatch>> {
        let domains = &self.domains;
        join_all(sources.iter().map(|source| async move {
            let mut batches = Vec::with_capacity(domains.len());
            for spec in domains {
                batches.push(source.collect(spec).await);
            }
            batches
        }))
        .await
    }

    fn build_entry(&self, candidate: &CandidateRepository, domain: &ProjectDomain) -> CatalogEntry {
        let difficulty = difficulty_for_stars(candidate.stars, self.config.thresholds);
        let narrative = self
            .synthesizer
            .synthesize(candidate, &domain.name, difficulty);
        let source_id = candidate
            .identifier
            .split_once(':')
            .map(|(_, id)| id)
            .unwrap_or(&candidate.identifier)
            .to_string();
        let now = Utc::now();

        CatalogEntry {
            id: Uuid::new_v4(),
            title: candidate.display_title(),
            description: candidate.description.clone().unwrap_or_default(),
            source: candidate.source.clone(),
            source_id,
            source_url: candidate.html_url.clone(),
            owner: candidate.owner.clone(),
            repo_name: candidate.name.clone(),
            base_name: normalize_base_name(&candidate.name),
            branch: candidate.default_branch.clone(),
            download_url: candidate.download_url(),
            live_demo_url: candidate.live_demo_url(),
            stars: i32::try_from(candidate.stars).unwrap_or(i32::MAX),
            forks: i32::try_from(candidate.forks).unwrap_or(i32::MAX),
            language: candidate.language.clone(),
            tech_stack: narrative.tech_stack,
            difficulty,
            topics: candidate.topics.clone(),
            domain_id: domain.id,
            case_study: narrative.case_study,
            problem_statement: narrative.problem_statement,
            solution_description: narrative.solution_description,
            prerequisites: narrative.prerequisites,
            deliverables: narrative.deliverables,
            download_count: 0,
            like_count: 0,
            is_active: true,
            review_status: ReviewStatus::Approved,
            created_at: now,
            updated_at: now,
        }
    }
}
