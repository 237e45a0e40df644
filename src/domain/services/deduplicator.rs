// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use crate::domain::models::candidate::CandidateRepository;

/// 版本/修订后缀，按顺序反复剥离直到名称不再变化
static VERSION_SUFFIXES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"[-_]v\d+(\.\d+)*$",
        r"[-_]version[-_]?\d+$",
        r"[-_](rev|revision)[-_]?\d+$",
        r"[-_]\d+(\.\d+)+$",
    ]
    .iter()
    .filter_map(|pattern| Regex::new(pattern).ok())
    .collect()
});

/// 规范化仓库名：小写并去掉末尾的版本后缀
///
/// `Foo-Bar-v2` → `foo-bar`，`todo_app-version-3` → `todo_app`，`shop-1.2.0` → `shop`
pub fn normalize_base_name(name: &str) -> String {
    let mut normalized = name.trim().to_lowercase();

    loop {
        let before = normalized.len();
        for suffix in VERSION_SUFFIXES.iter() {
            normalized = suffix.replace(&normalized, "").into_owned();
        }
        if normalized.len() == before || normalized.is_empty() {
            break;
        }
    }

    if normalized.is_empty() {
        // 名称本身就是版本号时保留原样
        name.trim().to_lowercase()
    } else {
        normalized
    }
}

/// 去重判定结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DedupOutcome {
    Accepted,
    DuplicateIdentifier,
    /// 规范化名称已出现过，附带该名称
    DuplicateName(String),
}

impl DedupOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, DedupOutcome::Accepted)
    }
}

/// 候选仓库去重器
///
/// 作用域为单次流水线运行；两个集合只在接受时同时更新
#[derive(Debug, Default)]
pub struct CandidateDeduplicator {
    seen_identifiers: HashSet<String>,
    seen_base_names: HashSet<String>,
    /// 当前领域中已持久化的名称，只在下一次登记前有效
    reserved_base_names: HashSet<String>,
}

impl CandidateDeduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 检查候选仓库，未重复则记录
    pub fn check_and_insert(&mut self, candidate: &CandidateRepository) -> DedupOutcome {
        if self.seen_identifiers.contains(&candidate.identifier) {
            return DedupOutcome::DuplicateIdentifier;
        }

        let base_name = normalize_base_name(&candidate.name);
        if self.seen_base_names.contains(&base_name)
            || self.reserved_base_names.contains(&base_name)
        {
            return DedupOutcome::DuplicateName(base_name);
        }

        self.seen_identifiers.insert(candidate.identifier.clone());
        self.seen_base_names.insert(base_name);
        DedupOutcome::Accepted
    }

    /// 登记当前领域中由其他数据源写入的名称
    ///
    /// 每次调用替换上一次的登记，切换领域时重新登记
    pub fn seed_base_names<I>(&mut self, names: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.reserved_base_names = names
            .into_iter()
            .map(|name| normalize_base_name(&name))
            .collect();
    }

    /// 重置去重器状态
    pub fn reset(&mut self) {
        self.seen_identifiers.clear();
        self.seen_base_names.clear();
        self.reserved_base_names.clear();
    }

    /// 获取去重统计信息
    pub fn get_stats(&self) -> DeduplicationStats {
        DeduplicationStats {
            seen_identifiers_count: self.seen_identifiers.len(),
            seen_base_names_count: self.seen_base_names.len(),
        }
    }
}

/// 去重统计信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeduplicationStats {
    pub seen_identifiers_count: usize,
    pub seen_base_names_count: usize,
}
